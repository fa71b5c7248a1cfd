//! Level content configuration loader.

use std::path::Path;

use level_core::{DuplicatePolicy, ParseOptions};
use serde::{Deserialize, Serialize};

use crate::loaders::{LoadResult, read_file};

/// Content configuration read from `level.toml`.
///
/// Every field has a default, so an empty file is a valid configuration.
///
/// ```toml
/// delimiter = ","
/// duplicates = "overwrite"
/// enemy_table = "EnemyData"
/// grids = ["Dungeon01", "Dungeon02"]
/// target_grid = "Dungeon01"
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct LevelConfig {
    pub delimiter: char,
    pub duplicates: DuplicatePolicy,
    /// Resource id of the enemy attribute table.
    pub enemy_table: String,
    /// Grid names loaded at session start, in order.
    pub grids: Vec<String>,
    /// Grid planned when no name is given explicitly.
    pub target_grid: Option<String>,
    /// Directory of table files, relative to the data directory.
    pub table_dir: String,
    /// Directory of grid files, relative to the data directory.
    pub grid_dir: String,
    /// File extension shared by tables and grids.
    pub extension: String,
}

impl LevelConfig {
    pub const FILE_NAME: &'static str = "level.toml";
    pub const DEFAULT_ENEMY_TABLE: &'static str = "EnemyData";

    pub fn parse_options(&self) -> ParseOptions {
        ParseOptions::new()
            .with_delimiter(self.delimiter)
            .with_duplicates(self.duplicates)
    }

    /// The configured target grid, falling back to the first listed grid.
    pub fn default_grid(&self) -> Option<&str> {
        self.target_grid
            .as_deref()
            .or_else(|| self.grids.first().map(String::as_str))
    }
}

impl Default for LevelConfig {
    fn default() -> Self {
        Self {
            delimiter: ParseOptions::DEFAULT_DELIMITER,
            duplicates: DuplicatePolicy::default(),
            enemy_table: Self::DEFAULT_ENEMY_TABLE.to_owned(),
            grids: Vec::new(),
            target_grid: None,
            table_dir: "tables".to_owned(),
            grid_dir: "grids".to_owned(),
            extension: "csv".to_owned(),
        }
    }
}

/// Loader for level configuration from TOML files.
pub struct ConfigLoader;

impl ConfigLoader {
    /// Load config data from a TOML file.
    ///
    /// # Arguments
    ///
    /// * `path` - Path to the TOML file containing LevelConfig
    pub fn load(path: &Path) -> LoadResult<LevelConfig> {
        let content = read_file(path)?;
        Self::parse(&content)
    }

    /// Parse config data from TOML text.
    pub fn parse(content: &str) -> LoadResult<LevelConfig> {
        let config: LevelConfig = toml::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse level config TOML: {}", e))?;

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_file_yields_defaults() {
        let config = ConfigLoader::parse("").unwrap();
        assert_eq!(config, LevelConfig::default());
        assert_eq!(config.parse_options(), ParseOptions::default());
    }

    #[test]
    fn overrides_are_applied() {
        let config = ConfigLoader::parse(
            r#"
            delimiter = ";"
            duplicates = "reject"
            grids = ["Dungeon01", "Dungeon02"]
            "#,
        )
        .unwrap();

        assert_eq!(config.delimiter, ';');
        assert_eq!(config.duplicates, DuplicatePolicy::Reject);
        assert_eq!(config.default_grid(), Some("Dungeon01"));
        assert_eq!(config.enemy_table, "EnemyData");
    }

    #[test]
    fn explicit_target_wins() {
        let config = ConfigLoader::parse(
            r#"
            grids = ["A", "B"]
            target_grid = "B"
            "#,
        )
        .unwrap();
        assert_eq!(config.default_grid(), Some("B"));
    }

    #[test]
    fn unknown_policy_is_rejected() {
        let error = ConfigLoader::parse(r#"duplicates = "merge""#).unwrap_err();
        assert!(error.to_string().contains("Failed to parse level config TOML"));
    }

    #[test]
    fn missing_file_reports_path() {
        let error = ConfigLoader::load(Path::new("/nonexistent/level.toml")).unwrap_err();
        assert!(error.to_string().contains("/nonexistent/level.toml"));
    }
}
