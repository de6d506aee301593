//! Oracle backend configuration.

use serde::{Deserialize, Serialize};

/// Which backend fulfils the oracle contracts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OracleBackend {
    /// OpenAI-compatible chat-completions API; requires an API key.
    OpenAi,
    /// Deterministic offline oracle for development and testing.
    Simulated,
}

/// Configuration for the generative oracle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleConfig {
    #[serde(default = "default_backend")]
    pub backend: OracleBackend,

    /// Model identifier passed to the backend.
    #[serde(default = "default_model")]
    pub model: String,

    /// API key; mandatory for the OpenAI backend.
    #[serde(default)]
    pub api_key: Option<String>,

    /// Override for the chat-completions endpoint.
    #[serde(default)]
    pub endpoint: Option<String>,

    #[serde(default)]
    pub temperature: Option<f64>,

    #[serde(default)]
    pub max_tokens: Option<u32>,
}

impl Default for OracleConfig {
    fn default() -> Self {
        Self {
            backend: default_backend(),
            model: default_model(),
            api_key: None,
            endpoint: None,
            temperature: None,
            max_tokens: None,
        }
    }
}

fn default_backend() -> OracleBackend {
    OracleBackend::Simulated
}

fn default_model() -> String {
    "gpt-4.1-mini".to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_backend_is_simulated() {
        let config = OracleConfig::default();
        assert_eq!(config.backend, OracleBackend::Simulated);
        assert_eq!(config.model, "gpt-4.1-mini");
    }

    #[test]
    fn backend_deserializes_lowercase() {
        let config: OracleConfig =
            serde_json::from_str(r#"{"backend": "openai", "api_key": "sk-test"}"#).unwrap();
        assert_eq!(config.backend, OracleBackend::OpenAi);
        assert_eq!(config.api_key.as_deref(), Some("sk-test"));
    }
}
