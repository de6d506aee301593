/// Errors from artifact rendering and persistence.
#[derive(Debug, thiserror::Error)]
pub enum ArtifactError {
    #[error("artifact io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("artifact encoding error: {0}")]
    Encode(#[from] serde_json::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn io_error_display() {
        let e = ArtifactError::from(std::io::Error::new(
            std::io::ErrorKind::PermissionDenied,
            "read-only",
        ));
        assert!(format!("{}", e).contains("read-only"));
    }
}
