#![deny(missing_docs)]
//! divetab table: fixed-width, box-drawn text tables.

/// Column definitions and text alignment.
pub mod column;
/// Renderer error types.
pub mod error;
/// Border glyph sets and table styling options.
pub mod style;
/// Table assembly and rendering.
pub mod table;

pub use column::{Alignment, ColumnSpec, align_text};
pub use error::TableError;
pub use style::{BorderGlyphs, BorderStyle, TableStyle};
pub use table::Table;
