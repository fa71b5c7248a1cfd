//! Level plan preview entry point.
//!
//! Loads the enemy table and configured grids from a data directory, plans
//! the target grid, and prints the resulting placements.
mod config;
mod preview;

use anyhow::{Context, Result};
use config::CliConfig;
use level_content::ContentFactory;

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = CliConfig::from_env();
    tracing::info!("Data directory: {}", config.data_dir.display());

    let mut factory = ContentFactory::open(&config.data_dir)
        .with_context(|| format!("failed to open content in {}", config.data_dir.display()))?;
    for name in &config.extra_grids {
        if !factory.config().grids.contains(name) {
            factory.config_mut().grids.push(name.clone());
        }
    }

    let session = factory.load_session();
    print!("{}", preview::render_diagnostics("Load diagnostics", session.diagnostics()));

    let target = config
        .target
        .as_deref()
        .or(session.default_grid())
        .context("no target grid: set LEVEL_TARGET or target_grid in level.toml")?;

    let plan = session.plan(target)?;
    print!("{}", preview::render_plan(&plan, config.cell_size));
    print!("{}", preview::render_diagnostics("Plan diagnostics", plan.diagnostics()));

    Ok(())
}
