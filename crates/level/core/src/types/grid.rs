//! Row-major symbol grid.

use super::Position;

/// Ordered rows of trimmed symbol cells describing one level's floor plan.
///
/// Rows may differ in length. A cell is never missing inside its row: an
/// empty symbol is stored as an empty string.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Grid {
    rows: Vec<Vec<String>>,
}

impl Grid {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Length of the longest row.
    pub fn width(&self) -> usize {
        self.rows.iter().map(Vec::len).max().unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    pub fn cell(&self, position: Position) -> Option<&str> {
        self.rows
            .get(position.y as usize)?
            .get(position.x as usize)
            .map(String::as_str)
    }

    /// Iterates cells top-to-bottom, left-to-right with their coordinates.
    pub fn cells(&self) -> impl Iterator<Item = (Position, &str)> + '_ {
        self.rows.iter().enumerate().flat_map(|(y, row)| {
            row.iter()
                .enumerate()
                .map(move |(x, cell)| (Position::new(x as u32, y as u32), cell.as_str()))
        })
    }

    /// Joins every row with `delimiter`, one line per row.
    pub fn to_delimited(&self, delimiter: char) -> String {
        let mut out = String::new();
        for row in &self.rows {
            for (index, cell) in row.iter().enumerate() {
                if index > 0 {
                    out.push(delimiter);
                }
                out.push_str(cell);
            }
            out.push('\n');
        }
        out
    }
}
