//! Attribute table loader.
//!
//! Tables are flat delimited text: one header line (always skipped, never
//! validated) followed by one record per line in a fixed column order.
//!
//! ```text
//! id,name,hp,attack,defense,exp,presentationKey
//! 1,Slime,10,2,1,5,SlimePrefab
//! ```
//!
//! Malformed rows are skipped with a diagnostic; they never abort the table.

use std::collections::HashMap;

use level_core::{
    Diagnostic, DuplicatePolicy, EntityId, EntityRecord, EntityStats, KeyScope, ParseOptions,
    RowError,
};

use crate::loaders::strip_bom;
use crate::sources::TextSource;

/// Fixed column schema of one table kind.
pub trait TableSchema: Sized {
    /// Column names in file order. Rows with fewer columns are skipped.
    const COLUMNS: &'static [&'static str];

    fn key(&self) -> EntityId;

    /// Builds a record from one split row. Extra columns are ignored; a short
    /// row is rejected with [`RowError::TooFewColumns`].
    fn from_columns(columns: &[&str]) -> Result<Self, RowError>;
}

impl TableSchema for EntityRecord {
    const COLUMNS: &'static [&'static str] =
        &["id", "name", "hp", "attack", "defense", "exp", "presentationKey"];

    fn key(&self) -> EntityId {
        self.id
    }

    fn from_columns(columns: &[&str]) -> Result<Self, RowError> {
        if columns.len() < Self::COLUMNS.len() {
            return Err(RowError::TooFewColumns {
                expected: Self::COLUMNS.len(),
                found: columns.len(),
            });
        }
        let id = parse_column::<u32>(columns, 0)?;
        let stats = EntityStats::new(
            parse_column(columns, 2)?,
            parse_column(columns, 3)?,
            parse_column(columns, 4)?,
            parse_column(columns, 5)?,
        );
        Ok(EntityRecord::new(id, columns[1], stats, columns[6].trim()))
    }
}

/// Parses column `index` of an [`EntityRecord`] row as an integer, ignoring
/// surrounding whitespace.
fn parse_column<T: std::str::FromStr>(columns: &[&str], index: usize) -> Result<T, RowError> {
    let value = columns[index];
    value.trim().parse().map_err(|_| RowError::InvalidNumber {
        column: EntityRecord::COLUMNS[index],
        value: value.to_owned(),
    })
}

/// Records parsed from one table plus the diagnostics of rows that were not.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TableLoad<R> {
    pub records: HashMap<EntityId, R>,
    pub diagnostics: Vec<Diagnostic>,
    /// False when the table resource could not be located at all.
    pub found: bool,
}

impl<R> TableLoad<R> {
    fn missing(diagnostic: Diagnostic) -> Self {
        Self {
            records: HashMap::new(),
            diagnostics: vec![diagnostic],
            found: false,
        }
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Rows dropped as malformed.
    pub fn skipped_rows(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::RowSkipped { .. }))
            .count()
    }

    /// Rows dropped under [`DuplicatePolicy::Reject`].
    pub fn rejected_duplicates(&self) -> usize {
        self.diagnostics
            .iter()
            .filter(|d| matches!(d, Diagnostic::DuplicateKey { .. }))
            .count()
    }
}

/// Parser for delimited attribute tables.
#[derive(Clone, Copy, Debug, Default)]
pub struct AttributeTableParser {
    options: ParseOptions,
}

impl AttributeTableParser {
    pub fn new(options: ParseOptions) -> Self {
        Self { options }
    }

    /// Reads `resource` from `source` and parses it.
    ///
    /// A missing resource yields an empty, `found == false` load carrying a
    /// `ResourceNotFound` diagnostic; it is never an error.
    pub fn load<R, S>(&self, source: &S, resource: &str) -> TableLoad<R>
    where
        R: TableSchema,
        S: TextSource + ?Sized,
    {
        match source.load_text(resource) {
            Ok(text) => self.parse(resource, &text),
            Err(err) => {
                let diagnostic = err.into_diagnostic();
                diagnostic.report();
                TableLoad::missing(diagnostic)
            }
        }
    }

    /// Parses table text. `table` names the table in diagnostics.
    pub fn parse<R: TableSchema>(&self, table: &str, text: &str) -> TableLoad<R> {
        let mut records = HashMap::new();
        let mut diagnostics = Vec::new();

        for (index, line) in strip_bom(text).lines().enumerate().skip(1) {
            if line.trim().is_empty() {
                continue;
            }

            let columns: Vec<&str> = line.split(self.options.delimiter).collect();
            let record = match R::from_columns(&columns) {
                Ok(record) => record,
                Err(reason) => {
                    let diagnostic = Diagnostic::RowSkipped {
                        table: table.to_owned(),
                        line: index + 1,
                        reason,
                    };
                    diagnostic.report();
                    diagnostics.push(diagnostic);
                    continue;
                }
            };

            let key = record.key();
            match self.options.duplicates {
                DuplicatePolicy::Overwrite => {
                    if records.insert(key, record).is_some() {
                        tracing::debug!("{}: id {} redefined on line {}", table, key, index + 1);
                    }
                }
                DuplicatePolicy::Reject => {
                    if records.contains_key(&key) {
                        let diagnostic = Diagnostic::DuplicateKey {
                            scope: KeyScope::Entity,
                            key: key.0.to_string(),
                        };
                        diagnostic.report();
                        diagnostics.push(diagnostic);
                    } else {
                        records.insert(key, record);
                    }
                }
            }
        }

        let load = TableLoad {
            records,
            diagnostics,
            found: true,
        };
        tracing::info!(
            "Loaded table '{}': {} records, {} rows skipped, {} duplicates rejected",
            table,
            load.len(),
            load.skipped_rows(),
            load.rejected_duplicates()
        );
        load
    }
}
