//! Storage backends for the daemon.

mod memory;
mod traits;

pub use memory::{InMemoryJobQueue, InMemoryResultStore};
pub use traits::{JobQueue, ResultStore};
