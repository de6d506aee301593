//! The generation loop that drives one research job end to end.

use crate::error::EngineError;
use crate::genetic::GeneticOptimizer;
use chrono::Utc;
use genomelab_artifacts::ArtifactStore;
use genomelab_oracle::{DesignOracle, QueryRefiner};
use genomelab_types::{DesignCandidate, JobId, ResearchConfig, ResearchResult};
use std::sync::Arc;
use tokio::sync::watch;

/// Minimum elite subset size, regardless of population size.
const MIN_ELITE_COUNT: usize = 3;

/// Runs research jobs: alternates oracle calls with local selection and
/// mutation until the generation budget or wall-clock deadline is spent.
pub struct ResearchEngine {
    oracle: Arc<dyn DesignOracle>,
    refiner: Arc<dyn QueryRefiner>,
    artifacts: Arc<dyn ArtifactStore>,
    rng_seed: Option<u64>,
}

impl ResearchEngine {
    pub fn new(
        oracle: Arc<dyn DesignOracle>,
        refiner: Arc<dyn QueryRefiner>,
        artifacts: Arc<dyn ArtifactStore>,
    ) -> Self {
        Self {
            oracle,
            refiner,
            artifacts,
            rng_seed: None,
        }
    }

    /// Fix the reproduction RNG for deterministic runs.
    pub fn with_rng_seed(mut self, seed: u64) -> Self {
        self.rng_seed = Some(seed);
        self
    }

    /// Run one job to completion.
    ///
    /// Both stop conditions — generation count and wall-clock deadline — are
    /// checked at the top of every generation, so a spent deadline means zero
    /// generations execute. Cancellation is cooperative: it is observed once
    /// per generation boundary and never aborts an in-flight oracle call.
    pub async fn run_job(
        &self,
        job_id: JobId,
        config: ResearchConfig,
        cancel: watch::Receiver<bool>,
    ) -> Result<ResearchResult, EngineError> {
        let mut result = ResearchResult::new(job_id);
        let deadline = result.started_at + config.max_duration();
        let elite_count = MIN_ELITE_COUNT.max(config.population_size / 5);

        let mut genetic = match self.rng_seed {
            Some(seed) => GeneticOptimizer::from_seed(seed),
            None => GeneticOptimizer::new(),
        };

        let mut population: Option<Vec<DesignCandidate>> = None;
        let mut generation = 0;

        while generation < config.max_generations && Utc::now() < deadline {
            if *cancel.borrow() {
                return Err(EngineError::Cancelled);
            }

            tracing::info!(job_id = %result.job_id, generation, "starting generation");

            let mut current = match population.take() {
                Some(offspring) => offspring,
                None => {
                    // Generation zero: refine the raw question, then ask the
                    // oracle for the initial population with the derived
                    // config. The stored config stays untouched.
                    let refined = self.refiner.refine(&config.problem_statement).await?;
                    let derived = config.clone().with_problem_statement(refined);
                    self.oracle
                        .generate_initial_population(&derived, generation, config.population_size)
                        .await?
                }
            };

            self.oracle.score_candidates(&mut current, &config).await?;
            if let Some(unscored) = current.iter().find(|c| !c.is_scored()) {
                return Err(EngineError::OracleContract(unscored.id.clone()));
            }

            for candidate in &current {
                self.artifacts
                    .write_candidate(&result.job_id, candidate)
                    .await?;
            }

            let elites = genetic.select_elite(&current, elite_count)?;
            result.record_generation(current);

            population =
                Some(genetic.mutate_and_crossover(&elites, config.population_size, generation + 1));
            generation += 1;
        }

        result.completed_at = Some(Utc::now());
        result.bundle_path = Some(self.artifacts.write_bundle(&result).await?);
        result.index_path = Some(self.artifacts.write_index(&result).await?);

        tracing::info!(
            job_id = %result.job_id,
            generations = generation,
            candidates = result.candidate_count(),
            best_fitness = ?result.best_candidate.as_ref().and_then(|c| c.fitness()),
            "job completed"
        );

        Ok(result)
    }
}
