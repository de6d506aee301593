//! Query refinement ahead of the first generation.

use crate::config::OracleConfig;
use crate::error::OracleError;
use crate::openai::{build_http_client, chat_complete};
use crate::prompts::DesignPromptBuilder;
use crate::search::SearchProvider;
use crate::traits::QueryRefiner;
use async_trait::async_trait;
use reqwest::Client;
use std::sync::Arc;

const SEARCH_TOP: usize = 10;

/// Refines the raw problem statement with web-search context and the chat
/// backend. Any failure along the way degrades to the raw question — the
/// refiner never blocks a job.
pub struct PromptRefinementService {
    client: Client,
    config: OracleConfig,
    search: Arc<dyn SearchProvider>,
}

impl PromptRefinementService {
    pub fn new(
        config: OracleConfig,
        search: Arc<dyn SearchProvider>,
    ) -> Result<Self, OracleError> {
        Ok(Self {
            client: build_http_client()?,
            config,
            search,
        })
    }
}

#[async_trait]
impl QueryRefiner for PromptRefinementService {
    async fn refine(&self, raw_question: &str) -> Result<String, OracleError> {
        let hits = match self.search.search(raw_question, SEARCH_TOP).await {
            Ok(hits) => hits,
            Err(error) => {
                tracing::warn!(error = %error, "search provider failed, refining without context");
                Vec::new()
            }
        };
        let search_summary = serde_json::to_string(&hits).unwrap_or_else(|_| "[]".to_string());

        let prompt = DesignPromptBuilder::build_refinement_prompt(raw_question, &search_summary);
        match chat_complete(&self.client, &self.config, "", &prompt).await {
            Ok(text) if !text.trim().is_empty() => Ok(text.trim().to_string()),
            Ok(_) => Ok(raw_question.to_string()),
            Err(error) => {
                tracing::warn!(error = %error, "query refinement failed, using raw question");
                Ok(raw_question.to_string())
            }
        }
    }
}

/// Passthrough refiner for the simulated backend: returns the question as-is.
#[derive(Debug, Default)]
pub struct NoopQueryRefiner;

#[async_trait]
impl QueryRefiner for NoopQueryRefiner {
    async fn refine(&self, raw_question: &str) -> Result<String, OracleError> {
        Ok(raw_question.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::search::NoopSearchProvider;

    #[tokio::test]
    async fn noop_refiner_returns_input() {
        let refiner = NoopQueryRefiner;
        let refined = refiner.refine("improve checkout flow").await.unwrap();
        assert_eq!(refined, "improve checkout flow");
    }

    #[tokio::test]
    async fn refinement_falls_back_on_backend_failure() {
        // No api_key configured, so the chat call fails; the raw question
        // must come back regardless.
        let service = PromptRefinementService::new(
            OracleConfig::default(),
            Arc::new(NoopSearchProvider),
        )
        .unwrap();
        let refined = service.refine("improve checkout flow").await.unwrap();
        assert_eq!(refined, "improve checkout flow");
    }
}
