//! CLI configuration structures and loaders.
use std::env;
use std::path::PathBuf;

/// Configuration for one `level-plan` invocation.
#[derive(Clone, Debug, PartialEq)]
pub struct CliConfig {
    /// Directory holding `level.toml`, `tables/`, and `grids/`.
    pub data_dir: PathBuf,
    /// Grid to plan; falls back to the configured target grid.
    pub target: Option<String>,
    /// World-space length of one grid cell in the preview.
    pub cell_size: f32,
    /// Extra grid names to load on top of `level.toml`.
    pub extra_grids: Vec<String>,
}

impl CliConfig {
    pub const DEFAULT_DATA_DIR: &'static str = "crates/level/content/data";
    pub const DEFAULT_CELL_SIZE: f32 = 1.0;

    /// Construct configuration from process environment variables.
    ///
    /// Environment variables:
    /// - `LEVEL_DATA_DIR` - Content data directory (default: crates/level/content/data)
    /// - `LEVEL_TARGET` - Grid to plan (default: target_grid from level.toml)
    /// - `LEVEL_CELL_SIZE` - Cell size for world coordinates (default: 1.0)
    /// - `LEVEL_GRIDS` - Comma-separated grid names added to the load list
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = env::var("LEVEL_DATA_DIR") {
            config.data_dir = PathBuf::from(dir);
        }

        config.target = env::var("LEVEL_TARGET").ok().filter(|t| !t.trim().is_empty());

        if let Some(size) = read_env::<f32>("LEVEL_CELL_SIZE") {
            if size > 0.0 {
                config.cell_size = size;
            } else {
                tracing::warn!("Ignoring non-positive LEVEL_CELL_SIZE={}", size);
            }
        }

        if let Ok(names) = env::var("LEVEL_GRIDS") {
            config.extra_grids = split_names(&names);
        }

        config
    }
}

impl Default for CliConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(Self::DEFAULT_DATA_DIR),
            target: None,
            cell_size: Self::DEFAULT_CELL_SIZE,
            extra_grids: Vec::new(),
        }
    }
}

fn split_names(value: &str) -> Vec<String> {
    value
        .split(',')
        .map(str::trim)
        .filter(|name| !name.is_empty())
        .map(str::to_owned)
        .collect()
}

fn read_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
{
    env::var(key).ok()?.parse().ok()
}
