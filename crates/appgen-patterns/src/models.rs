//! Data models for compound patterns

use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator that joins a clause prefix to its extensions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Separator {
    /// No separator; extensions are appended directly
    #[default]
    None,
    /// `.`
    Dot,
    /// `/`
    Slash,
    /// `\`
    Backslash,
}

impl Separator {
    /// Recognize a separator character
    pub fn from_char(c: char) -> Option<Self> {
        match c {
            '.' => Some(Separator::Dot),
            '/' => Some(Separator::Slash),
            '\\' => Some(Separator::Backslash),
            _ => None,
        }
    }

    /// Textual form of the separator
    pub fn as_str(&self) -> &'static str {
        match self {
            Separator::None => "",
            Separator::Dot => ".",
            Separator::Slash => "/",
            Separator::Backslash => "\\",
        }
    }

    /// Whether this separator is a path separator (`/` or `\`)
    pub fn is_path(&self) -> bool {
        matches!(self, Separator::Slash | Separator::Backslash)
    }
}

impl fmt::Display for Separator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One parsed clause of a compound pattern
///
/// `home.(html,js)` parses to prefix `home`, separator `.` and extension group
/// `html,js`. A clause without parentheses keeps its trailing literal extension
/// in the group, so `file1.txt` parses to `file1`, `.` and `txt`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PathSegment {
    /// Trimmed text before the separator
    pub prefix: String,
    /// Separator between prefix and extensions
    pub separator: Separator,
    /// Raw extension text; comma-delimited when `grouped`
    pub extension_group: String,
    /// Whether the extensions were written inside parentheses
    pub grouped: bool,
}

impl PathSegment {
    /// Create a segment
    pub fn new(
        prefix: impl Into<String>,
        separator: Separator,
        extension_group: impl Into<String>,
        grouped: bool,
    ) -> Self {
        Self {
            prefix: prefix.into(),
            separator,
            extension_group: extension_group.into(),
            grouped,
        }
    }

    /// The path every candidate starts with: prefix followed by separator
    pub fn base(&self) -> String {
        format!("{}{}", self.prefix, self.separator)
    }

    /// Trimmed suffix candidates, in written order
    pub fn suffixes(&self) -> impl Iterator<Item = &str> {
        self.extension_group.split(',').map(str::trim)
    }

    /// Candidate paths before filtering and deduplication
    pub fn candidates(&self) -> Vec<String> {
        let base = self.base();
        self.suffixes()
            .map(|suffix| format!("{}{}", base, suffix))
            .collect()
    }
}
