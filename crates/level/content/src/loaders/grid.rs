//! Grid text parser.
//!
//! Grids have no header: every non-blank line is a row, starting with the
//! first. Blank and all-whitespace lines are skipped, so row indices count
//! only lines that carry cells. Each cell is trimmed; no other
//! interpretation happens here.

use level_core::{ENEMY_PREFIX, Grid};

use crate::loaders::strip_bom;

/// Parser for delimited symbol grids.
#[derive(Clone, Copy, Debug)]
pub struct GridParser {
    delimiter: char,
}

impl GridParser {
    pub fn new(delimiter: char) -> Self {
        Self { delimiter }
    }

    /// Parses grid text. `name` labels the grid in log output.
    pub fn parse(&self, name: &str, text: &str) -> Grid {
        let mut rows = Vec::new();

        for line in strip_bom(text).lines() {
            if line.trim().is_empty() {
                continue;
            }

            let y = rows.len();
            let row: Vec<String> = line
                .split(self.delimiter)
                .map(|cell| cell.trim().to_owned())
                .collect();

            for (x, cell) in row.iter().enumerate() {
                if cell.starts_with(ENEMY_PREFIX) {
                    tracing::debug!("[{}] enemy marker '{}' at (x:{}, y:{})", name, cell, x, y);
                }
            }

            rows.push(row);
        }

        let grid = Grid::new(rows);
        tracing::info!(
            "Parsed grid '{}': {} rows, {} columns",
            name,
            grid.row_count(),
            grid.width()
        );
        grid
    }
}

impl Default for GridParser {
    fn default() -> Self {
        Self::new(level_core::ParseOptions::DEFAULT_DELIMITER)
    }
}
