//! External web-search provider used by query refinement.

use crate::error::OracleError;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// One external search hit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SearchResult {
    pub title: String,
    pub url: String,
    pub snippet: String,
}

/// Generic search backend the refiner may consult for context.
#[async_trait]
pub trait SearchProvider: Send + Sync {
    async fn search(&self, query: &str, top: usize) -> Result<Vec<SearchResult>, OracleError>;
}

/// Stub provider returning no hits. Wire a real web-search backend here.
#[derive(Debug, Default)]
pub struct NoopSearchProvider;

#[async_trait]
impl SearchProvider for NoopSearchProvider {
    async fn search(&self, _query: &str, _top: usize) -> Result<Vec<SearchResult>, OracleError> {
        Ok(Vec::new())
    }
}
