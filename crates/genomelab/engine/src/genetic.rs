//! Elitist selection and the mutate/crossover operator.

use crate::error::EngineError;
use genomelab_types::{CandidateId, DesignCandidate};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::cmp::Ordering;

/// Probability that any single spec field is perturbed in a child.
const FIELD_MUTATION_RATE: f64 = 0.15;
/// Marker appended to a perturbed field value.
const MUTATION_MARKER: &str = " (variant)";

/// Deterministic-given-scores selection plus randomized reproduction.
///
/// "Crossover" here is single-parent by design: one parent donates the entire
/// spec and the second contributes only to naming and lineage metadata. There
/// is no field-level recombination between two parents.
pub struct GeneticOptimizer {
    rng: StdRng,
}

impl GeneticOptimizer {
    pub fn new() -> Self {
        Self {
            rng: StdRng::from_entropy(),
        }
    }

    /// Seeded constructor for reproducible runs.
    pub fn from_seed(seed: u64) -> Self {
        Self {
            rng: StdRng::seed_from_u64(seed),
        }
    }

    /// Top `elite_count` candidates by overall fitness, descending, bounded
    /// by the population size. Equal scores keep whatever order the sort
    /// produces. An unscored candidate in the input is a contract violation.
    pub fn select_elite(
        &self,
        population: &[DesignCandidate],
        elite_count: usize,
    ) -> Result<Vec<DesignCandidate>, EngineError> {
        let mut ranked = Vec::with_capacity(population.len());
        for candidate in population {
            let fitness = candidate
                .fitness()
                .ok_or_else(|| EngineError::UnscoredCandidate(candidate.id.clone()))?;
            ranked.push((fitness, candidate));
        }

        ranked.sort_by(|a, b| b.0.partial_cmp(&a.0).unwrap_or(Ordering::Equal));

        Ok(ranked
            .into_iter()
            .take(elite_count)
            .map(|(_, candidate)| candidate.clone())
            .collect())
    }

    /// Produce exactly `target_size` children from the given parents.
    ///
    /// Both parents are drawn independently and uniformly at random with
    /// replacement, so a parent may pair with itself.
    pub fn mutate_and_crossover(
        &mut self,
        parents: &[DesignCandidate],
        target_size: usize,
        generation_index: usize,
    ) -> Vec<DesignCandidate> {
        debug_assert!(!parents.is_empty(), "reproduction needs at least one parent");

        let mut next = Vec::with_capacity(target_size);
        while next.len() < target_size {
            let a = &parents[self.rng.gen_range(0..parents.len())];
            let b = &parents[self.rng.gen_range(0..parents.len())];
            let child = self.create_child(a, b, generation_index, next.len());
            next.push(child);
        }
        next
    }

    fn create_child(
        &mut self,
        a: &DesignCandidate,
        b: &DesignCandidate,
        generation: usize,
        index: usize,
    ) -> DesignCandidate {
        let donor = if self.rng.gen_bool(0.5) { a } else { b };
        let mut spec = donor.spec.clone();
        for field in spec.fields_mut() {
            if self.rng.gen_bool(FIELD_MUTATION_RATE) {
                field.push_str(MUTATION_MARKER);
            }
        }

        DesignCandidate::new(
            CandidateId::new(generation, index),
            format!("{} x {} (child {})", a.name, b.name, index),
            format!("Child of {} and {}, mutated.", a.id, b.id),
            spec,
        )
    }
}

impl Default for GeneticOptimizer {
    fn default() -> Self {
        Self::new()
    }
}
