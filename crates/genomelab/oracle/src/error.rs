/// Errors surfaced by oracle collaborators.
#[derive(Debug, thiserror::Error)]
pub enum OracleError {
    #[error("oracle backend error: {0}")]
    Backend(String),
    #[error("oracle transport error: {0}")]
    Transport(String),
    #[error("invalid oracle response: {0}")]
    InvalidResponse(String),
    #[error("oracle not configured: {0}")]
    NotConfigured(String),
}
