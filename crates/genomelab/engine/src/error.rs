use genomelab_artifacts::ArtifactError;
use genomelab_oracle::OracleError;
use genomelab_types::CandidateId;

/// Errors from the evolutionary engine.
#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    /// Cooperative cancellation observed at a generation boundary.
    #[error("job cancelled")]
    Cancelled,
    /// An unscored candidate reached a selection step.
    #[error("population contains unscored candidate {0}")]
    UnscoredCandidate(CandidateId),
    /// The scoring oracle violated its contract to cover every candidate.
    #[error("scoring oracle left candidate {0} unscored")]
    OracleContract(CandidateId),
    #[error(transparent)]
    Oracle(#[from] OracleError),
    #[error(transparent)]
    Artifact(#[from] ArtifactError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn cancelled_display() {
        assert_eq!(format!("{}", EngineError::Cancelled), "job cancelled");
    }

    #[test]
    fn contract_violation_names_candidate() {
        let e = EngineError::OracleContract(CandidateId::new(1, 4));
        assert!(format!("{}", e).contains("gen1-cand004"));
    }
}
