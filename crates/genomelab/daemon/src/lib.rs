//! GenomeLab daemon library
//!
//! This module provides the core components for the research daemon:
//! - REST API handlers for job submission and polling
//! - In-memory job queue and result store
//! - The single-consumer worker loop
//! - Server lifecycle management

pub mod api;
pub mod config;
pub mod error;
pub mod server;
pub mod storage;
pub mod worker;

pub use config::DaemonConfig;
pub use error::{ApiError, DaemonError};
pub use server::Server;
pub use storage::{InMemoryJobQueue, InMemoryResultStore, JobQueue, ResultStore};
pub use worker::ResearchWorker;
