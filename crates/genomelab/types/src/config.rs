//! Research job configuration.

use serde::{Deserialize, Serialize};

/// Relative weights the scoring oracle applies when folding sub-scores into
/// overall fitness. Implementation complexity counts against a candidate.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FitnessWeights {
    #[serde(default = "default_usability_weight")]
    pub usability: f64,

    #[serde(default = "default_accessibility_weight")]
    pub accessibility: f64,

    #[serde(default = "default_visual_clarity_weight")]
    pub visual_clarity: f64,

    #[serde(default = "default_complexity_weight")]
    pub implementation_complexity: f64,
}

impl FitnessWeights {
    /// Fold the four sub-scores into a single fitness value.
    pub fn overall(
        &self,
        usability: f64,
        accessibility: f64,
        visual_clarity: f64,
        implementation_complexity: f64,
    ) -> f64 {
        usability * self.usability
            + accessibility * self.accessibility
            + visual_clarity * self.visual_clarity
            - implementation_complexity * self.implementation_complexity
    }
}

impl Default for FitnessWeights {
    fn default() -> Self {
        Self {
            usability: default_usability_weight(),
            accessibility: default_accessibility_weight(),
            visual_clarity: default_visual_clarity_weight(),
            implementation_complexity: default_complexity_weight(),
        }
    }
}

/// Input to a research job. Immutable once the job starts; the engine may
/// derive a copy with a refined problem statement for generation zero only.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResearchConfig {
    /// Free-text description of the design problem to explore.
    pub problem_statement: String,

    /// Number of candidates in every generation.
    #[serde(default = "default_population_size")]
    pub population_size: usize,

    /// Upper bound on the number of generations.
    #[serde(default = "default_max_generations")]
    pub max_generations: usize,

    /// Wall-clock budget for the whole job, in seconds. Zero is legal and
    /// yields an empty completed run.
    #[serde(default = "default_max_duration_secs")]
    pub max_duration_secs: u64,

    /// Oracle tuning knobs for fitness aggregation.
    #[serde(default)]
    pub weights: FitnessWeights,
}

impl ResearchConfig {
    pub fn new(problem_statement: impl Into<String>) -> Self {
        Self {
            problem_statement: problem_statement.into(),
            population_size: default_population_size(),
            max_generations: default_max_generations(),
            max_duration_secs: default_max_duration_secs(),
            weights: FitnessWeights::default(),
        }
    }

    /// Check the config is well-formed before it is allowed into the queue.
    pub fn validate(&self) -> Result<(), String> {
        if self.problem_statement.trim().is_empty() {
            return Err("problem_statement must not be empty".to_string());
        }
        if self.population_size == 0 {
            return Err("population_size must be at least 1".to_string());
        }
        if self.max_generations == 0 {
            return Err("max_generations must be at least 1".to_string());
        }
        Ok(())
    }

    /// Derived copy with a refined problem statement, used only to request
    /// the initial population.
    pub fn with_problem_statement(mut self, problem_statement: impl Into<String>) -> Self {
        self.problem_statement = problem_statement.into();
        self
    }

    pub fn max_duration(&self) -> chrono::Duration {
        chrono::Duration::seconds(self.max_duration_secs as i64)
    }
}

fn default_usability_weight() -> f64 {
    0.3
}

fn default_accessibility_weight() -> f64 {
    0.25
}

fn default_visual_clarity_weight() -> f64 {
    0.25
}

fn default_complexity_weight() -> f64 {
    0.2
}

fn default_population_size() -> usize {
    6
}

fn default_max_generations() -> usize {
    3
}

fn default_max_duration_secs() -> u64 {
    300
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_weights_sum_against_complexity() {
        let weights = FitnessWeights::default();
        let overall = weights.overall(10.0, 10.0, 10.0, 10.0);
        assert!((overall - 6.0).abs() < 1e-9);
    }

    #[test]
    fn validate_rejects_empty_problem() {
        let config = ResearchConfig::new("   ");
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_rejects_zero_population() {
        let mut config = ResearchConfig::new("improve checkout flow");
        config.population_size = 0;
        assert!(config.validate().is_err());
    }

    #[test]
    fn validate_accepts_zero_duration() {
        let mut config = ResearchConfig::new("improve checkout flow");
        config.max_duration_secs = 0;
        assert!(config.validate().is_ok());
    }

    #[test]
    fn derived_copy_only_changes_problem_statement() {
        let config = ResearchConfig::new("raw question");
        let derived = config.clone().with_problem_statement("refined question");
        assert_eq!(derived.problem_statement, "refined question");
        assert_eq!(derived.population_size, config.population_size);
        assert_eq!(derived.max_generations, config.max_generations);
    }

    #[test]
    fn config_deserializes_with_defaults() {
        let config: ResearchConfig =
            serde_json::from_str(r#"{"problem_statement": "improve checkout flow"}"#).unwrap();
        assert_eq!(config.population_size, 6);
        assert_eq!(config.max_generations, 3);
        assert_eq!(config.max_duration_secs, 300);
    }
}
