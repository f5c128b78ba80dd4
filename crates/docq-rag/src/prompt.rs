//! Prompt assembly
//!
//! The system instruction pins the assistant to the retrieved context; the
//! context block carries provenance so answers can name their source
//! documents.

use docq_core::{ChatPrompt, ConversationTurn, ScoredChunk};

/// System instruction parameterized by the company's display name.
pub fn system_prompt(company_name: &str) -> String {
    format!(
        "You are a helpful assistant for {company}. You answer questions \
         EXCLUSIVELY from the provided excerpts of the company's documents.\n\
         \n\
         Rules:\n\
         - Only use information from the context. Never invent or guess.\n\
         - If the context does not contain the answer, say so plainly: \
         \"I could not find that in the documents.\"\n\
         - If the context contains conflicting information, point it out \
         and list the variants.\n\
         - Answer in the language the question was asked in.\n\
         - Be precise and factual.\n\
         - When asked about people, only name those explicitly present in \
         the context.",
        company = company_name
    )
}

/// Render retrieved chunks as a numbered context block with provenance.
pub fn build_context(chunks: &[ScoredChunk]) -> String {
    if chunks.is_empty() {
        return String::from("(no matching documents found)");
    }

    let mut context = String::new();
    for (i, chunk) in chunks.iter().enumerate() {
        let source = if chunk.doc_path.is_empty() {
            chunk.doc_name.clone()
        } else {
            format!("{}/{}", chunk.doc_path, chunk.doc_name)
        };
        context.push_str(&format!("{}. [{}] {}\n\n", i + 1, source, chunk.text));
    }
    context.trim_end().to_string()
}

/// Assemble the full prompt for one question.
pub fn build_prompt(
    company_name: &str,
    chunks: &[ScoredChunk],
    turns: Vec<ConversationTurn>,
    question: &str,
) -> ChatPrompt {
    let user = format!(
        "Here are the relevant excerpts from the company documents:\n\
         ---------------------\n\
         {}\n\
         ---------------------\n\
         Answer the question using ONLY this context. If the answer is not \
         in the context, say so honestly.\n\
         \n\
         Question: {}",
        build_context(chunks),
        question
    );

    ChatPrompt {
        system: system_prompt(company_name),
        turns,
        user,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use insta::assert_snapshot;

    fn chunk(name: &str, path: &str, text: &str, score: f32) -> ScoredChunk {
        ScoredChunk {
            chunk_id: format!("{}:0", name),
            doc_id: name.to_string(),
            doc_name: name.to_string(),
            doc_path: path.to_string(),
            text: text.to_string(),
            score,
        }
    }

    #[test]
    fn context_numbers_chunks_with_provenance() {
        let chunks = vec![
            chunk("hours.txt", "hr", "Office hours are 8 to 17.", 0.9),
            chunk("parking.txt", "", "Parking is behind the building.", 0.7),
        ];

        let context = build_context(&chunks);
        assert_snapshot!(context, @r###"
        1. [hr/hours.txt] Office hours are 8 to 17.

        2. [parking.txt] Parking is behind the building.
        "###);
    }

    #[test]
    fn empty_retrieval_is_stated_not_hidden() {
        assert_eq!(build_context(&[]), "(no matching documents found)");
    }

    #[test]
    fn system_prompt_names_the_company() {
        let prompt = system_prompt("Acme");
        assert!(prompt.contains("assistant for Acme"));
        assert!(prompt.contains("Never invent or guess"));
    }

    #[test]
    fn prompt_embeds_context_and_question() {
        let chunks = vec![chunk("hours.txt", "", "Office hours are 8 to 17.", 0.9)];
        let prompt = build_prompt("Acme", &chunks, vec![], "When does the office open?");

        assert!(prompt.system.contains("Acme"));
        assert!(prompt.user.contains("Office hours are 8 to 17."));
        assert!(prompt.user.trim_end().ends_with("When does the office open?"));
        assert!(prompt.turns.is_empty());
    }
}
