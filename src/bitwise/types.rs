// Common type definitions for binary rendering

use serde::{Deserialize, Serialize};

/// Bit ordering used when rendering a value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Endianness {
    Big,
    Little,
}

impl Endianness {
    pub fn is_big(&self) -> bool {
        matches!(self, Endianness::Big)
    }

    pub fn is_little(&self) -> bool {
        matches!(self, Endianness::Little)
    }
}

impl Default for Endianness {
    fn default() -> Self {
        Endianness::Big
    }
}

/// Layout options for grouped binary strings such as `[0001 0000]`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatOptions {
    /// Insert `separator` every this many characters. `None` (or zero) disables grouping.
    pub grouping: Option<usize>,
    /// Wrap the result in `[` and `]`
    pub brackets: bool,
    pub separator: char,
}

impl FormatOptions {
    /// Unbroken digits with no brackets, e.g. `00010000`
    pub fn raw() -> Self {
        Self {
            grouping: None,
            brackets: false,
            separator: ' ',
        }
    }

    pub fn with_grouping(mut self, grouping: Option<usize>) -> Self {
        self.grouping = grouping;
        self
    }

    pub fn with_brackets(mut self, brackets: bool) -> Self {
        self.brackets = brackets;
        self
    }

    pub fn with_separator(mut self, separator: char) -> Self {
        self.separator = separator;
        self
    }

    /// Effective group size; a zero grouping is treated as no grouping
    pub fn group_size(&self) -> Option<usize> {
        self.grouping.filter(|&n| n > 0)
    }
}

impl Default for FormatOptions {
    fn default() -> Self {
        Self {
            grouping: Some(4),
            brackets: true,
            separator: ' ',
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endianness() {
        assert!(Endianness::default().is_big());
        assert!(Endianness::Little.is_little());
        assert!(!Endianness::Little.is_big());
    }

    #[test]
    fn test_format_options_builders() {
        let opts = FormatOptions::default();
        assert_eq!(opts.group_size(), Some(4));
        assert!(opts.brackets);

        let opts = FormatOptions::raw().with_grouping(Some(8)).with_separator('_');
        assert_eq!(opts.group_size(), Some(8));
        assert_eq!(opts.separator, '_');
        assert!(!opts.brackets);

        assert_eq!(FormatOptions::default().with_grouping(Some(0)).group_size(), None);
    }

    #[test]
    fn test_serde() {
        let json = serde_json::to_string(&Endianness::Little).unwrap();
        assert_eq!(json, "\"Little\"");

        let opts: FormatOptions =
            serde_json::from_str(r#"{"grouping":null,"brackets":false,"separator":"_"}"#).unwrap();
        assert_eq!(opts, FormatOptions::raw().with_separator('_'));
    }
}
