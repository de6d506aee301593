//! Configuration for the GenomeLab daemon.

use genomelab_oracle::OracleConfig;
use serde::{Deserialize, Serialize};
use std::net::SocketAddr;

/// Main daemon configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DaemonConfig {
    /// Server configuration
    #[serde(default)]
    pub server: ServerConfig,

    /// Worker loop configuration
    #[serde(default)]
    pub worker: WorkerConfig,

    /// Artifact output configuration
    #[serde(default)]
    pub output: OutputConfig,

    /// Generative oracle configuration
    #[serde(default)]
    pub oracle: OracleConfig,

    /// Logging configuration
    #[serde(default)]
    pub logging: LoggingConfig,
}

impl Default for DaemonConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig::default(),
            worker: WorkerConfig::default(),
            output: OutputConfig::default(),
            oracle: OracleConfig::default(),
            logging: LoggingConfig::default(),
        }
    }
}

/// HTTP server configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// Listen address
    pub listen_addr: SocketAddr,

    /// Enable CORS
    #[serde(default = "default_true")]
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            listen_addr: "127.0.0.1:8080".parse().unwrap(),
            enable_cors: true,
        }
    }
}

/// Worker loop configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WorkerConfig {
    /// How long to sleep between queue polls when idle, in seconds.
    #[serde(default = "default_poll_interval")]
    pub poll_interval_secs: u64,
}

impl Default for WorkerConfig {
    fn default() -> Self {
        Self {
            poll_interval_secs: default_poll_interval(),
        }
    }
}

/// Artifact output configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Root directory for per-job artifact directories.
    #[serde(default = "default_output_root")]
    pub root_dir: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            root_dir: default_output_root(),
        }
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    #[serde(default = "default_log_level")]
    pub level: String,

    /// JSON format
    #[serde(default)]
    pub json: bool,
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            json: false,
        }
    }
}

// Default value helpers
fn default_true() -> bool {
    true
}

fn default_poll_interval() -> u64 {
    2
}

fn default_output_root() -> String {
    "output".to_string()
}

fn default_log_level() -> String {
    "info".to_string()
}

impl DaemonConfig {
    /// Load configuration from defaults, an optional file, and `GENOMELAB_*`
    /// environment variables, in that order of precedence.
    pub fn load(path: Option<&str>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();

        builder = builder.add_source(config::Config::try_from(&DaemonConfig::default())?);

        if let Some(path) = path {
            builder = builder.add_source(config::File::with_name(path).required(false));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("GENOMELAB")
                .separator("_")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }
}
