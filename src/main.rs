use anyhow::Result;
use clap::{Parser, Subcommand};
use colored::*;
use std::sync::Arc;
use std::time::Instant;

use docq_cli::{ChatEvent, ChatState, SessionLogger};
use docq_core::{ChatMemory, Settings, VectorStore};
use docq_gdrive::{DriveClient, DriveConfig};
use docq_openai::{OpenAiConfig, OpenAiEmbeddings};
use docq_openrouter::{OpenRouterClient, OpenRouterConfig};
use docq_qdrant::{QdrantStore, QdrantStoreConfig};
use docq_rag::{Ingestor, RagEngine};

#[derive(Parser)]
#[command(name = "docq")]
#[command(about = "Chat with your company documents", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Start an interactive chat session (default)
    Chat,
    /// Ingest the configured drive folder into the vector index
    Ingest,
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "docq=info".into()),
        )
        .with_target(false)
        .init();

    let cli = Cli::parse();
    match cli.command.unwrap_or(Commands::Chat) {
        Commands::Chat => run_chat().await,
        Commands::Ingest => run_ingest().await,
    }
}

fn build_store(settings: &Settings) -> Result<Arc<QdrantStore>> {
    let store = QdrantStore::new(QdrantStoreConfig {
        url: settings.qdrant_url.clone(),
        api_key: settings.qdrant_api_key.clone(),
        collection: settings.qdrant_collection.clone(),
        dimension: settings.embedding_dimension,
    })?;
    Ok(Arc::new(store))
}

async fn run_chat() -> Result<()> {
    let settings = Settings::from_env()?;

    let embedding = Arc::new(OpenAiEmbeddings::new(OpenAiConfig::from_settings(&settings))?);
    let store = build_store(&settings)?;
    let llm = Arc::new(OpenRouterClient::new(OpenRouterConfig::from_settings(&settings))?);

    let engine = RagEngine::new(
        embedding,
        store,
        llm,
        settings.company_name.clone(),
        settings.retrieval_top_k,
    );

    let mut memory = ChatMemory::new(settings.memory_max_turns);
    let logger = SessionLogger::new(settings.chat_log_path.clone());
    let mut history = Vec::new();
    let mut state = ChatState::Idle;

    docq_cli::display_banner(&settings.company_name);

    loop {
        debug_assert!(state.accepts_input());
        let Some(input) = docq_cli::read_question(&mut history).await? else {
            break;
        };

        if input.is_empty() {
            continue;
        }

        match input.to_lowercase().as_str() {
            "exit" | "quit" => {
                println!("{}", "👋 Goodbye!".green());
                break;
            }
            "help" => {
                docq_cli::print_help();
                continue;
            }
            "clear" => {
                memory.clear();
                println!("{}", "Conversation cleared.".dimmed());
                continue;
            }
            _ => {}
        }

        state = state.transition(ChatEvent::Submitted);
        docq_cli::show_thinking();

        let started = Instant::now();
        match engine.chat(&input, &mut memory).await {
            Ok(answer) => {
                state = state.transition(ChatEvent::Answered);
                docq_cli::render_answer(&answer);
                logger
                    .log(&input, &answer, started.elapsed().as_millis() as u64)
                    .await;
            }
            Err(e) => {
                state = state.transition(ChatEvent::Failed);
                docq_cli::render_error(&e.user_message());
            }
        }
    }

    Ok(())
}

async fn run_ingest() -> Result<()> {
    let settings = Settings::from_env()?;
    let drive_config = DriveConfig::from_env()?;

    println!("{}", "docq document ingestion".bold());

    let embedding = Arc::new(OpenAiEmbeddings::new(OpenAiConfig::from_settings(&settings))?);
    let store = build_store(&settings)?;
    let source = Arc::new(DriveClient::connect(&drive_config).await?);
    println!("{} Connected to drive and vector store", "✅".green());

    let started = Instant::now();
    let report = Ingestor::new(source, embedding, store.clone()).run().await?;

    println!();
    println!(
        "{} Ingestion finished in {:.1}s",
        "✅".green(),
        started.elapsed().as_secs_f32()
    );
    println!("   Documents indexed: {}", report.documents_indexed);
    println!("   Documents skipped: {}", report.documents_skipped);
    println!("   Documents failed:  {}", report.documents_failed);
    println!("   Chunks upserted:   {}", report.chunks_upserted);
    println!("   Vectors in index:  {}", store.count().await?);

    if !report.errors.is_empty() {
        println!();
        println!("{}", "Failures:".yellow().bold());
        for error in &report.errors {
            println!("  {} {}", "•".yellow(), error);
        }
    }

    Ok(())
}
