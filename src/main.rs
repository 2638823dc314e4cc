use anyhow::Context;
use std::path::PathBuf;
use tmdb_search::{app, config::AppConfig, logging, search};
use tracing::info;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config_path = config_path_from_args();
    let config = AppConfig::load(config_path.as_deref()).context("loading configuration")?;

    logging::init(&config.log)?;
    info!("Using TMDB at {}", config.api.base_url);

    let use_case = search::create_default_use_case(config.provider_config())
        .context("building TMDB client")?;

    app::run(config, use_case).await
}

/// `--config <path>` from the command line
fn config_path_from_args() -> Option<PathBuf> {
    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        if arg == "--config" {
            return args.next().map(PathBuf::from);
        }
        if let Some(path) = arg.strip_prefix("--config=") {
            return Some(PathBuf::from(path));
        }
    }
    None
}
