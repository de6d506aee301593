//! Capability contracts the engine invokes on the generative oracle.

use crate::error::OracleError;
use async_trait::async_trait;
use genomelab_types::{DesignCandidate, ResearchConfig};

/// Produces and scores design candidates.
#[async_trait]
pub trait DesignOracle: Send + Sync {
    /// Generate the initial population for a job. Candidates come back
    /// unscored; their ids encode the generation index and position.
    async fn generate_initial_population(
        &self,
        config: &ResearchConfig,
        generation_index: usize,
        population_size: usize,
    ) -> Result<Vec<DesignCandidate>, OracleError>;

    /// Annotate every given candidate in place with a full score card.
    /// Leaving any candidate unscored violates the contract.
    async fn score_candidates(
        &self,
        candidates: &mut [DesignCandidate],
        config: &ResearchConfig,
    ) -> Result<(), OracleError>;
}

/// Rewrites a raw problem statement into a sharper research prompt.
///
/// Implementations must return *some* text even on partial internal failure,
/// falling back to the raw question.
#[async_trait]
pub trait QueryRefiner: Send + Sync {
    async fn refine(&self, raw_question: &str) -> Result<String, OracleError>;
}
