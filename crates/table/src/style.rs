//! Border glyph sets and table styling options.

use serde::{Deserialize, Serialize};

/// Glyphs used to draw one border style.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BorderGlyphs {
    /// Horizontal rule.
    pub horizontal: char,
    /// Vertical rule.
    pub vertical: char,
    /// Top-left corner.
    pub top_left: char,
    /// Top tee between columns.
    pub top_tee: char,
    /// Top-right corner.
    pub top_right: char,
    /// Left tee on a header rule.
    pub left_tee: char,
    /// Cross on a header rule.
    pub cross: char,
    /// Right tee on a header rule.
    pub right_tee: char,
    /// Bottom-left corner.
    pub bottom_left: char,
    /// Bottom tee between columns.
    pub bottom_tee: char,
    /// Bottom-right corner.
    pub bottom_right: char,
}

/// Named border styles.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum BorderStyle {
    /// Light box drawing: ┌─┬─┐
    #[default]
    Thin,
    /// Heavy box drawing: ┏━┳━┓
    Thick,
    /// Double box drawing: ╔═╦═╗
    Double,
    /// Plain ASCII: +-+-+
    Ascii,
}

impl BorderStyle {
    /// Returns the glyph set for this style.
    pub const fn glyphs(self) -> BorderGlyphs {
        match self {
            BorderStyle::Thin => BorderGlyphs {
                horizontal: '\u{2500}',
                vertical: '\u{2502}',
                top_left: '\u{250C}',
                top_tee: '\u{252C}',
                top_right: '\u{2510}',
                left_tee: '\u{251C}',
                cross: '\u{253C}',
                right_tee: '\u{2524}',
                bottom_left: '\u{2514}',
                bottom_tee: '\u{2534}',
                bottom_right: '\u{2518}',
            },
            BorderStyle::Thick => BorderGlyphs {
                horizontal: '\u{2501}',
                vertical: '\u{2503}',
                top_left: '\u{250F}',
                top_tee: '\u{2533}',
                top_right: '\u{2513}',
                left_tee: '\u{2523}',
                cross: '\u{254B}',
                right_tee: '\u{252B}',
                bottom_left: '\u{2517}',
                bottom_tee: '\u{253B}',
                bottom_right: '\u{251B}',
            },
            BorderStyle::Double => BorderGlyphs {
                horizontal: '\u{2550}',
                vertical: '\u{2551}',
                top_left: '\u{2554}',
                top_tee: '\u{2566}',
                top_right: '\u{2557}',
                left_tee: '\u{2560}',
                cross: '\u{256C}',
                right_tee: '\u{2563}',
                bottom_left: '\u{255A}',
                bottom_tee: '\u{2569}',
                bottom_right: '\u{255D}',
            },
            BorderStyle::Ascii => BorderGlyphs {
                horizontal: '-',
                vertical: '|',
                top_left: '+',
                top_tee: '+',
                top_right: '+',
                left_tee: '+',
                cross: '+',
                right_tee: '+',
                bottom_left: '+',
                bottom_tee: '+',
                bottom_right: '+',
            },
        }
    }
}

/// Visual options for a rendered table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct TableStyle {
    /// Border glyph set.
    pub border: BorderStyle,
    /// Blank columns around each vertical rule, split across both sides.
    pub column_gap: usize,
    /// Draw a rule between the header and the first data row.
    pub header_rule: bool,
}

impl TableStyle {
    /// Thin borders, two-column gap, no header rule.
    pub const fn thin() -> Self {
        Self {
            border: BorderStyle::Thin,
            column_gap: 2,
            header_rule: false,
        }
    }

    /// Padding placed before cell text.
    pub const fn pad_left(&self) -> usize {
        self.column_gap / 2
    }

    /// Padding placed after cell text.
    pub const fn pad_right(&self) -> usize {
        self.column_gap - self.column_gap / 2
    }
}

impl Default for TableStyle {
    fn default() -> Self {
        Self::thin()
    }
}
