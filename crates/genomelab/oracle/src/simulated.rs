//! Deterministic oracles for offline development and tests.

use crate::error::OracleError;
use crate::traits::DesignOracle;
use async_trait::async_trait;
use genomelab_types::{CandidateId, DesignCandidate, DesignSpec, ResearchConfig, ScoreCard};

const LAYOUTS: [&str; 4] = ["single column", "split view", "card grid", "dashboard"];
const NAVIGATIONS: [&str; 4] = ["tab bar", "sidebar", "breadcrumbs", "hub and spoke"];
const PALETTES: [&str; 4] = ["warm neutrals", "cool blues", "high-contrast mono", "earth tones"];
const TYPE_SCALES: [&str; 3] = ["major third", "perfect fourth", "golden ratio"];
const STYLES: [&str; 3] = ["rounded cards", "flat panels", "soft glassmorphism"];

/// Deterministic oracle: fixed spec fields derived from the candidate index
/// and sub-scores from a fixed arithmetic pattern, so tests know the exact
/// maximum in advance.
///
/// Scoring assigns every candidate at slice position `i` the sub-score
/// `(i % 10)` on the three positive axes and zero complexity, so the highest
/// position in each generation carries the generation's best fitness.
#[derive(Debug, Default)]
pub struct SimulatedDesignOracle;

impl SimulatedDesignOracle {
    pub fn new() -> Self {
        Self
    }

    /// The fitness the scoring pattern assigns at slice position `i` under
    /// the given config. Exposed so tests can compute the expected maximum.
    pub fn fitness_at(config: &ResearchConfig, index: usize) -> f64 {
        let base = (index % 10) as f64;
        config.weights.overall(base, base, base, 0.0)
    }
}

#[async_trait]
impl DesignOracle for SimulatedDesignOracle {
    async fn generate_initial_population(
        &self,
        _config: &ResearchConfig,
        generation_index: usize,
        population_size: usize,
    ) -> Result<Vec<DesignCandidate>, OracleError> {
        let candidates = (0..population_size)
            .map(|index| {
                let spec = DesignSpec {
                    layout_pattern: LAYOUTS[index % LAYOUTS.len()].to_string(),
                    navigation_pattern: NAVIGATIONS[index % NAVIGATIONS.len()].to_string(),
                    color_palette: PALETTES[index % PALETTES.len()].to_string(),
                    typography_scale: TYPE_SCALES[index % TYPE_SCALES.len()].to_string(),
                    component_library_style: STYLES[index % STYLES.len()].to_string(),
                    interaction_notes: format!("interaction sketch {}", index),
                    accessibility_notes: format!("accessibility notes {}", index),
                };
                DesignCandidate::new(
                    CandidateId::new(generation_index, index),
                    format!("Concept {}", index),
                    format!("Simulated design direction {}", index),
                    spec,
                )
            })
            .collect();
        Ok(candidates)
    }

    async fn score_candidates(
        &self,
        candidates: &mut [DesignCandidate],
        config: &ResearchConfig,
    ) -> Result<(), OracleError> {
        for (index, candidate) in candidates.iter_mut().enumerate() {
            let base = (index % 10) as f64;
            candidate.scores = Some(ScoreCard {
                usability: base,
                accessibility: base,
                visual_clarity: base,
                implementation_complexity: 0.0,
                overall_fitness: config.weights.overall(base, base, base, 0.0),
                rationale: Some(format!("simulated evaluation of position {}", index)),
            });
        }
        Ok(())
    }
}

/// Oracle that always errors, for failure-path tests.
#[derive(Debug, Default)]
pub struct FailingDesignOracle;

#[async_trait]
impl DesignOracle for FailingDesignOracle {
    async fn generate_initial_population(
        &self,
        _config: &ResearchConfig,
        _generation_index: usize,
        _population_size: usize,
    ) -> Result<Vec<DesignCandidate>, OracleError> {
        Err(OracleError::Backend("simulated oracle failure".to_string()))
    }

    async fn score_candidates(
        &self,
        _candidates: &mut [DesignCandidate],
        _config: &ResearchConfig,
    ) -> Result<(), OracleError> {
        Err(OracleError::Backend("simulated oracle failure".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn generates_requested_population() {
        let oracle = SimulatedDesignOracle::new();
        let config = ResearchConfig::new("improve checkout flow");
        let candidates = oracle
            .generate_initial_population(&config, 0, 6)
            .await
            .unwrap();
        assert_eq!(candidates.len(), 6);
        assert_eq!(candidates[5].id.as_str(), "gen0-cand005");
        assert!(candidates.iter().all(|c| !c.is_scored()));
    }

    #[tokio::test]
    async fn scoring_covers_every_candidate_deterministically() {
        let oracle = SimulatedDesignOracle::new();
        let config = ResearchConfig::new("improve checkout flow");
        let mut candidates = oracle
            .generate_initial_population(&config, 0, 6)
            .await
            .unwrap();
        oracle.score_candidates(&mut candidates, &config).await.unwrap();

        assert!(candidates.iter().all(|c| c.is_scored()));
        let expected_max = SimulatedDesignOracle::fitness_at(&config, 5);
        let max = candidates
            .iter()
            .filter_map(|c| c.fitness())
            .fold(f64::MIN, f64::max);
        assert!((max - expected_max).abs() < 1e-9);
    }

    #[tokio::test]
    async fn failing_oracle_errors() {
        let oracle = FailingDesignOracle;
        let config = ResearchConfig::new("improve checkout flow");
        assert!(oracle
            .generate_initial_population(&config, 0, 3)
            .await
            .is_err());
    }
}
