#![deny(missing_docs)]
//! divetab core: extracts the dive tables from a dive-log post and renders
//! them as box-drawn text.
//!
//! ```
//! let post = [
//!     "# Weekly dives", "", "Schedule below.", "",
//!     "| | Place | **Blue Hole** |", "",
//!     "|  | Stage | Note | Anomaly | Warning |", "|---|---|---|---|---|",
//!     "|  | Descent | — | TBA | None |", "", "",
//!     "",
//!     "| | Place | **Reef Wall** |", "",
//!     "|  | Stage | Note | Anomaly | Warning |", "|---|---|---|---|---|",
//!     "|  | Ascent | Stop | Fire | None |", "", "",
//! ]
//! .join("\n");
//!
//! let dives = divetab_core::fetch_dives(&post)?;
//! assert_eq!(dives.dd.place, "Blue Hole");
//! assert_eq!(dives.edd.table.lines().count(), 2);
//! # Ok::<(), divetab_core::DiveError>(())
//! ```

/// Outer border removal.
pub mod border;
/// Section rendering.
pub mod dive;
/// Error types.
pub mod error;
/// Fixed-offset section extraction.
pub mod sections;
/// Markdown row tokenizing.
pub mod tokenize;
/// Result types.
pub mod types;
/// Warning cell classification.
pub mod warning;

use serde::{Deserialize, Serialize};

pub use border::strip_border;
pub use dive::{DiveOptions, build_dive};
pub use error::{DiveError, SourceLocation};
pub use sections::{
    Section, SectionLayout, Sections, extract_sections, extract_sections_with_layout,
};
pub use tokenize::tokenize;
pub use types::{DiveResult, DiveType, Dives};
pub use warning::{WarningClass, classify_warning};

pub use divetab_table::{Alignment, BorderStyle, ColumnSpec, TableError, TableStyle};

/// Options for [`fetch_dives_with_options`].
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FetchOptions {
    /// Where the two tables sit in the post.
    pub layout: SectionLayout,
    /// How each table is rendered.
    pub dive: DiveOptions,
}

/// Extracts and renders both dives of a post with the standard layout and style.
pub fn fetch_dives(text: &str) -> Result<Dives, DiveError> {
    fetch_dives_with_options(text, &FetchOptions::default())
}

/// Extracts and renders both dives of a post.
pub fn fetch_dives_with_options(text: &str, options: &FetchOptions) -> Result<Dives, DiveError> {
    let sections = extract_sections_with_layout(text, &options.layout)?;
    Ok(Dives {
        dd: build_dive(&sections.dd, &options.dive)?,
        edd: build_dive(&sections.edd, &options.dive)?,
    })
}
