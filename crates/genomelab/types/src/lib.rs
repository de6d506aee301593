#![deny(unsafe_code)]
//! # genomelab-types
//!
//! Core domain types for the GenomeLab evolutionary design search: research
//! job configuration, design candidates with their specs and score cards, and
//! the accumulated job result.

pub mod candidate;
pub mod config;
pub mod ids;
pub mod job;
pub mod result;

pub use candidate::{DesignCandidate, DesignSpec, ScoreCard};
pub use config::{FitnessWeights, ResearchConfig};
pub use ids::{CandidateId, JobId};
pub use job::ResearchJob;
pub use result::ResearchResult;
