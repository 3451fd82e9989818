//! Result types returned by dive extraction.

use serde::{Deserialize, Serialize};

/// The two dive categories carried by a post.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DiveType {
    /// Standard dive (`dd`).
    Dd,
    /// Extended dive (`edd`).
    Edd,
}

impl DiveType {
    /// Both dive types, in document order.
    pub const ALL: [DiveType; 2] = [DiveType::Dd, DiveType::Edd];

    /// Key used for this dive type in results.
    pub const fn as_str(self) -> &'static str {
        match self {
            DiveType::Dd => "dd",
            DiveType::Edd => "edd",
        }
    }
}

impl std::fmt::Display for DiveType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One rendered dive: where it happens and its stage table.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DiveResult {
    /// Dive site, with markdown bold markers removed.
    pub place: String,
    /// Rendered table without its outer border.
    pub table: String,
}

/// Both rendered dives of a post.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dives {
    /// Standard dive.
    pub dd: DiveResult,
    /// Extended dive.
    pub edd: DiveResult,
}

impl Dives {
    /// Returns the dive for `kind`.
    pub fn get(&self, kind: DiveType) -> &DiveResult {
        match kind {
            DiveType::Dd => &self.dd,
            DiveType::Edd => &self.edd,
        }
    }

    /// Iterates over both dives, `dd` first.
    pub fn iter(&self) -> impl Iterator<Item = (DiveType, &DiveResult)> {
        DiveType::ALL.into_iter().map(move |kind| (kind, self.get(kind)))
    }
}
