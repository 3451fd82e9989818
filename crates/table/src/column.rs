use serde::{Deserialize, Serialize};
use unicode_width::UnicodeWidthStr;

/// Horizontal alignment of text within a column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Alignment {
    /// Pad on the right.
    #[default]
    Left,
    /// Split padding across both sides, extra space on the right.
    Center,
    /// Pad on the left.
    Right,
}

/// A named column plus the alignment of its header and its cells.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ColumnSpec {
    /// Header text.
    pub name: String,
    /// Alignment applied to the header cell.
    pub header_align: Alignment,
    /// Alignment applied to data cells.
    pub cell_align: Alignment,
}

impl ColumnSpec {
    /// Creates a column with both header and cells left-aligned.
    pub fn left(name: impl Into<String>) -> Self {
        Self::new(name, Alignment::Left, Alignment::Left)
    }

    /// Creates a column with explicit alignments.
    pub fn new(name: impl Into<String>, header_align: Alignment, cell_align: Alignment) -> Self {
        Self {
            name: name.into(),
            header_align,
            cell_align,
        }
    }
}

/// Pads `text` to `width` display columns.
///
/// Text already at or beyond `width` is returned unchanged; cells are never
/// truncated.
///
/// ```
/// use divetab_table::{Alignment, align_text};
///
/// assert_eq!(align_text("ab", 5, Alignment::Left), "ab   ");
/// assert_eq!(align_text("ab", 5, Alignment::Right), "   ab");
/// assert_eq!(align_text("ab", 5, Alignment::Center), " ab  ");
/// ```
pub fn align_text(text: &str, width: usize, alignment: Alignment) -> String {
    let text_width = UnicodeWidthStr::width(text);
    if text_width >= width {
        return text.to_string();
    }

    let padding = width - text_width;
    match alignment {
        Alignment::Left => format!("{}{}", text, " ".repeat(padding)),
        Alignment::Right => format!("{}{}", " ".repeat(padding), text),
        Alignment::Center => {
            let left = padding / 2;
            format!("{}{}{}", " ".repeat(left), text, " ".repeat(padding - left))
        }
    }
}
