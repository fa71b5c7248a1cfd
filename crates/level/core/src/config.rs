/// How keyed collections treat a second entry under an existing key.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, strum::Display, strum::EnumString)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
#[strum(serialize_all = "snake_case", ascii_case_insensitive)]
pub enum DuplicatePolicy {
    /// Last write wins; the earlier entry is replaced in full.
    #[default]
    Overwrite,
    /// First write wins; later entries are dropped and reported.
    Reject,
}

/// Parsing parameters shared by table and grid parsers.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ParseOptions {
    /// Single column separator character.
    pub delimiter: char,
    pub duplicates: DuplicatePolicy,
}

impl ParseOptions {
    pub const DEFAULT_DELIMITER: char = ',';

    pub const fn new() -> Self {
        Self {
            delimiter: Self::DEFAULT_DELIMITER,
            duplicates: DuplicatePolicy::Overwrite,
        }
    }

    pub const fn with_delimiter(mut self, delimiter: char) -> Self {
        self.delimiter = delimiter;
        self
    }

    pub const fn with_duplicates(mut self, duplicates: DuplicatePolicy) -> Self {
        self.duplicates = duplicates;
        self
    }
}

impl Default for ParseOptions {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn duplicate_policy_parses_case_insensitively() {
        assert_eq!("reject".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Reject));
        assert_eq!("Overwrite".parse::<DuplicatePolicy>(), Ok(DuplicatePolicy::Overwrite));
        assert!("merge".parse::<DuplicatePolicy>().is_err());
    }
}
