//! Loads a typed service configuration from the process environment.
//!
//! ```text
//! PORT=8080 ALLOWED_ORIGINS=a.example,b.example cargo run -p service-config
//! SVC_PORT=9000 cargo run -p service-config -- --prefix SVC_
//! cargo run -p service-config -- --describe
//! ```

use anyhow::{Context, Result};
use clap::Parser;
use envconf::Record;
use tracing::info;
use tracing_subscriber::EnvFilter;

/// Command-line options for the demo.
#[derive(Debug, Parser)]
#[command(name = "service-config", about = "Load service configuration from the environment")]
struct Args {
    /// Prefix prepended to every variable name (e.g. `SVC_`).
    #[arg(long, default_value = "")]
    prefix: String,

    /// Print the configuration fields as JSON instead of loading them.
    #[arg(long)]
    describe: bool,
}

/// Settings for a small HTTP service.
#[derive(Debug, Default, Record)]
struct ServiceConfig {
    /// Listening port.
    #[envconf(required)]
    pub port: i64,
    /// Bind address.
    #[envconf(default = "0.0.0.0")]
    pub bind: String,
    /// Enables verbose request logging.
    #[envconf(default = "false")]
    pub debug: bool,
    /// CORS origins, comma-separated.
    pub allowed_origins: Vec<String>,
    /// Worker shard ids, comma-separated.
    #[envconf(default = "0")]
    pub shards: Vec<i64>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_target(false)
        .init();

    let args = Args::parse();
    let mut config = ServiceConfig::default();

    if args.describe {
        let fields = envconf::describe(&config)?;
        println!("{}", serde_json::to_string_pretty(&fields)?);
        return Ok(());
    }

    envconf::from_env_with_prefix(&args.prefix, &mut config)
        .with_context(|| format!("loading configuration (prefix {:?})", args.prefix))?;

    info!(
        port = config.port,
        bind = %config.bind,
        debug = config.debug,
        origins = ?config.allowed_origins,
        shards = ?config.shards,
        "configuration loaded"
    );
    Ok(())
}
