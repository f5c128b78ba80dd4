//! Query path: embed, retrieve, prompt, complete

use std::sync::Arc;

use docq_core::{
    ChatMemory, ConversationTurn, EmbeddingProvider, Error, LlmProvider, Result, ScoredChunk,
    VectorStore,
};

use crate::prompt::build_prompt;

/// The request-time engine. Holds one embedding provider for the lifetime of
/// the process, the same instance ingestion used, so query vectors live in
/// the same space as the stored chunks.
pub struct RagEngine<E: EmbeddingProvider, V: VectorStore, L: LlmProvider> {
    embedding: Arc<E>,
    store: Arc<V>,
    llm: Arc<L>,
    company_name: String,
    top_k: usize,
}

impl<E: EmbeddingProvider, V: VectorStore, L: LlmProvider> RagEngine<E, V, L> {
    pub fn new(
        embedding: Arc<E>,
        store: Arc<V>,
        llm: Arc<L>,
        company_name: impl Into<String>,
        top_k: usize,
    ) -> Self {
        Self {
            embedding,
            store,
            llm,
            company_name: company_name.into(),
            top_k,
        }
    }

    /// Retrieve the chunks most similar to the question, ordered by
    /// descending score. Equal scores keep the store's original order.
    /// Rejects empty questions before any external call.
    pub async fn retrieve(&self, question: &str) -> Result<Vec<ScoredChunk>> {
        let question = question.trim();
        if question.is_empty() {
            return Err(Error::EmptyQuestion);
        }

        let vectors = self.embedding.embed(&[question.to_string()]).await?;
        let vector = vectors
            .into_iter()
            .next()
            .ok_or_else(|| Error::InvalidResponse("no embedding returned".to_string()))?;

        let mut chunks = self.store.search(&vector, self.top_k).await?;
        chunks.sort_by(|a, b| b.score.total_cmp(&a.score));
        Ok(chunks)
    }

    /// Answer one question with retrieved context and the recent turns.
    /// The turn is appended to memory only after the answer arrived; a
    /// failed exchange leaves memory untouched.
    pub async fn chat(&self, question: &str, memory: &mut ChatMemory) -> Result<String> {
        let chunks = self.retrieve(question).await?;
        let prompt = build_prompt(&self.company_name, &chunks, memory.turns(), question.trim());
        let answer = self.llm.complete(&prompt).await?;

        memory.push(ConversationTurn::new(question.trim(), answer.clone()));
        Ok(answer)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::InMemoryVectorStore;
    use crate::testutil::{HashEmbedding, ScriptedLlm};
    use docq_core::{Chunk, EmbeddedChunk};
    use std::sync::atomic::Ordering;

    async fn seeded_store(texts: &[(&str, &str)]) -> Arc<InMemoryVectorStore> {
        let store = InMemoryVectorStore::new();
        let chunks: Vec<EmbeddedChunk> = texts
            .iter()
            .enumerate()
            .map(|(i, (doc, text))| EmbeddedChunk {
                chunk: Chunk {
                    id: Chunk::chunk_id(doc, 0),
                    doc_id: doc.to_string(),
                    doc_name: format!("{}.txt", doc),
                    doc_path: String::new(),
                    index: i,
                    text: text.to_string(),
                    start: 0,
                    end: text.len(),
                },
                vector: HashEmbedding::embed_one(text),
            })
            .collect();
        store.upsert_chunks(&chunks).await.unwrap();
        Arc::new(store)
    }

    fn engine(
        store: Arc<InMemoryVectorStore>,
        llm: ScriptedLlm,
    ) -> RagEngine<HashEmbedding, InMemoryVectorStore, ScriptedLlm> {
        RagEngine::new(Arc::new(HashEmbedding::new()), store, Arc::new(llm), "Acme", 4)
    }

    #[tokio::test]
    async fn retrieval_is_sorted_by_descending_score() {
        let store = seeded_store(&[
            ("a", "vacation policy and leave days"),
            ("b", "office parking rules"),
            ("c", "vacation request workflow"),
        ])
        .await;
        let engine = engine(store, ScriptedLlm::answering("ok"));

        let chunks = engine.retrieve("how do I request vacation").await.unwrap();
        for pair in chunks.windows(2) {
            assert!(pair[0].score >= pair[1].score);
        }
    }

    #[tokio::test]
    async fn exact_text_match_ranks_first() {
        let store = seeded_store(&[
            ("other", "completely unrelated parking text"),
            ("target", "the cafeteria closes at three on fridays"),
        ])
        .await;
        let engine = engine(store, ScriptedLlm::answering("ok"));

        let chunks = engine
            .retrieve("the cafeteria closes at three on fridays")
            .await
            .unwrap();
        assert_eq!(chunks[0].doc_id, "target");
        assert!(chunks[0].score > 0.99);
    }

    #[tokio::test]
    async fn empty_question_is_rejected_before_any_call() {
        let embedding = Arc::new(HashEmbedding::new());
        let engine = RagEngine::new(
            embedding.clone(),
            Arc::new(InMemoryVectorStore::new()),
            Arc::new(ScriptedLlm::answering("ok")),
            "Acme",
            4,
        );

        let err = engine.retrieve("   \n").await.unwrap_err();
        assert!(matches!(err, Error::EmptyQuestion));
        assert_eq!(embedding.calls.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn successful_chat_appends_one_turn() {
        let store = seeded_store(&[("a", "the wifi password policy")]).await;
        let engine = engine(store, ScriptedLlm::answering("It rotates monthly."));
        let mut memory = ChatMemory::new(4);

        let answer = engine.chat("what about the wifi?", &mut memory).await.unwrap();
        assert_eq!(answer, "It rotates monthly.");
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.turns()[0].question, "what about the wifi?");
    }

    #[tokio::test]
    async fn llm_failure_leaves_memory_unchanged() {
        let store = seeded_store(&[("a", "the wifi password policy")]).await;
        let engine = engine(store, ScriptedLlm::failing());
        let mut memory = ChatMemory::new(4);
        memory.push(ConversationTurn::new("earlier?", "earlier."));

        let err = engine.chat("what about the wifi?", &mut memory).await.unwrap_err();
        assert!(matches!(err, Error::Llm(_)));
        assert_eq!(memory.len(), 1);
        assert_eq!(memory.turns()[0].question, "earlier?");
    }

    #[tokio::test]
    async fn prior_turns_are_included_in_the_prompt() {
        let store = seeded_store(&[("a", "printer setup guide")]).await;
        let engine = engine(store, ScriptedLlm::answering("Use the guide."));
        let mut memory = ChatMemory::new(4);

        engine.chat("how do I set up the printer?", &mut memory).await.unwrap();
        engine.chat("and on linux?", &mut memory).await.unwrap();

        let turns = memory.turns();
        assert_eq!(turns.len(), 2);
        assert_eq!(turns[0].question, "how do I set up the printer?");
        assert_eq!(turns[1].question, "and on linux?");
    }
}
