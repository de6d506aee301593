#![deny(unsafe_code)]
//! # genomelab-engine
//!
//! The evolutionary core: drives one research job through its generation
//! loop — generate, score, record, select, reproduce — bounded by a
//! generation count and a wall-clock deadline, with cooperative cancellation
//! at generation boundaries.

pub mod engine;
pub mod error;
pub mod genetic;

pub use engine::ResearchEngine;
pub use error::EngineError;
pub use genetic::GeneticOptimizer;
