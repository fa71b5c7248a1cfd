//! Content factory for building sessions from a data directory.

use std::path::{Path, PathBuf};

use crate::loaders::{ConfigLoader, LevelConfig, LoadResult};
use crate::session::Session;
use crate::sources::DirectorySource;

/// Content factory that loads level content from a data directory.
///
/// # Directory Structure
///
/// ```text
/// data_dir/
/// ├── level.toml          (optional)
/// ├── tables/
/// │   └── EnemyData.csv
/// └── grids/
///     ├── Dungeon01.csv
///     └── Dungeon02.csv
/// ```
///
/// Directory names and the file extension come from [`LevelConfig`].
#[derive(Clone, Debug)]
pub struct ContentFactory {
    data_dir: PathBuf,
    config: LevelConfig,
}

impl ContentFactory {
    /// Creates a factory with an explicit configuration.
    pub fn new(data_dir: impl Into<PathBuf>, config: LevelConfig) -> Self {
        Self {
            data_dir: data_dir.into(),
            config,
        }
    }

    /// Creates a factory, reading `level.toml` from the data directory when present.
    ///
    /// # Errors
    ///
    /// Fails only when `level.toml` exists but cannot be read or parsed.
    pub fn open(data_dir: impl Into<PathBuf>) -> LoadResult<Self> {
        let data_dir = data_dir.into();
        let config_path = data_dir.join(LevelConfig::FILE_NAME);
        let config = if config_path.exists() {
            ConfigLoader::load(&config_path)?
        } else {
            tracing::debug!(
                "No {} in {}; using defaults",
                LevelConfig::FILE_NAME,
                data_dir.display()
            );
            LevelConfig::default()
        };
        Ok(Self::new(data_dir, config))
    }

    /// Source resolving table names under the table directory.
    pub fn table_source(&self) -> DirectorySource {
        DirectorySource::new(self.data_dir.join(&self.config.table_dir))
            .with_extension(self.config.extension.clone())
    }

    /// Source resolving grid names under the grid directory.
    pub fn grid_source(&self) -> DirectorySource {
        DirectorySource::new(self.data_dir.join(&self.config.grid_dir))
            .with_extension(self.config.extension.clone())
    }

    /// Loads the enemy table and every configured grid.
    pub fn load_session(&self) -> Session {
        Session::load(&self.table_source(), &self.grid_source(), &self.config)
    }

    pub fn config(&self) -> &LevelConfig {
        &self.config
    }

    /// Mutable access for callers that override settings after `open`.
    pub fn config_mut(&mut self) -> &mut LevelConfig {
        &mut self.config
    }

    /// Returns the data directory path.
    pub fn data_dir(&self) -> &Path {
        &self.data_dir
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_factory_paths() {
        let factory = ContentFactory::new("/tmp/data", LevelConfig::default());
        assert_eq!(factory.data_dir(), Path::new("/tmp/data"));
        assert_eq!(
            factory.grid_source().path_for("Dungeon01"),
            PathBuf::from("/tmp/data/grids/Dungeon01.csv")
        );
        assert_eq!(
            factory.table_source().path_for("EnemyData"),
            PathBuf::from("/tmp/data/tables/EnemyData.csv")
        );
    }

    #[test]
    fn open_without_config_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let factory = ContentFactory::open(dir.path()).unwrap();
        assert_eq!(factory.config(), &LevelConfig::default());
    }

    #[test]
    fn open_reads_level_toml() {
        let dir = tempfile::tempdir().unwrap();
        std::fs::write(
            dir.path().join("level.toml"),
            "grids = [\"Dungeon01\"]\ngrid_dir = \"maps\"\n",
        )
        .unwrap();

        let factory = ContentFactory::open(dir.path()).unwrap();
        assert_eq!(factory.config().grids, vec!["Dungeon01".to_string()]);
        assert_eq!(
            factory.grid_source().path_for("Dungeon01"),
            dir.path().join("maps/Dungeon01.csv")
        );
    }
}
