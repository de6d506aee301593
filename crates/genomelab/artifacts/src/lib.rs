#![deny(unsafe_code)]
//! # genomelab-artifacts
//!
//! Turns research output into browsable artifacts: a standalone HTML demo per
//! candidate, a structured JSON bundle per job, and a human-readable index
//! page linking everything together.

pub mod error;
pub mod render;
pub mod store;

pub use error::ArtifactError;
pub use render::{render_html, render_index};
pub use store::{ArtifactStore, FsArtifactStore, NoopArtifactStore};
