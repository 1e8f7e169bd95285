use anyhow::Result;
use board_sharing::{config, server};
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let config = config::load_from_env()?;
    init_tracing(&config.log_level, &config.log_format)?;
    config.print_summary();

    server::run(config).await
}

/// Installs the global subscriber. `RUST_LOG` directives take precedence
/// over the configured default level.
fn init_tracing(level: &str, format: &str) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().or_else(|_| EnvFilter::try_new(level))?;

    let builder = tracing_subscriber::fmt().with_env_filter(filter).with_target(true);

    if format == "json" {
        builder.json().init();
    } else {
        builder.init();
    }

    Ok(())
}
