//! GenomeLab daemon - evolutionary UI/UX design research service
//!
//! The daemon provides:
//! - REST API for submitting research jobs and polling results
//! - A single background worker that runs one evolutionary search at a time
//! - Artifact output: per-candidate demos, a JSON bundle and an index page

use clap::Parser;
use genomelab_daemon::error::{DaemonError, DaemonResult};
use genomelab_daemon::{DaemonConfig, Server};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// GenomeLab daemon CLI
#[derive(Parser)]
#[command(name = "genomelabd")]
#[command(about = "GenomeLab daemon - evolutionary UI/UX design research", long_about = None)]
#[command(version)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "GENOMELAB_CONFIG")]
    config: Option<String>,

    /// Listen address
    #[arg(
        short,
        long,
        env = "GENOMELAB_LISTEN_ADDR",
        default_value = "127.0.0.1:8080"
    )]
    listen: String,

    /// Log level
    #[arg(long, env = "GENOMELAB_LOG_LEVEL", default_value = "info")]
    log_level: String,

    /// Enable JSON logging
    #[arg(long, env = "GENOMELAB_LOG_JSON")]
    json: bool,
}

#[tokio::main]
async fn main() -> DaemonResult<()> {
    let cli = Cli::parse();

    // Initialize tracing
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| cli.log_level.clone().into());

    if cli.json {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer().json())
            .init();
    } else {
        tracing_subscriber::registry()
            .with(env_filter)
            .with(tracing_subscriber::fmt::layer())
            .init();
    }

    // Load configuration
    let mut config =
        DaemonConfig::load(cli.config.as_deref()).map_err(|e| DaemonError::Config(e.to_string()))?;

    // Override with CLI args
    config.server.listen_addr = cli
        .listen
        .parse()
        .map_err(|e| DaemonError::Config(format!("invalid listen address: {}", e)))?;

    // Print startup banner
    println!(
        r#"
   ___                           _          _
  / __|___ _ _  ___ _ __  ___   | |   __ _ | |__
 | (_ / -_) ' \/ _ \ '  \/ -_)  | |__/ _` || '_ \
  \___\___|_||_\___/_|_|_\___|  |____\__,_||_.__/

  GenomeLab - Evolutionary UI/UX Design Research
  Version: {}
  Oracle: {:?}
  Listening: {}
"#,
        env!("CARGO_PKG_VERSION"),
        config.oracle.backend,
        config.server.listen_addr
    );

    // Create and run server
    let server = Server::new(config);
    server.run().await
}
