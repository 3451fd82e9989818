//! Fixed-offset location of the dive tables inside a post.
//!
//! Every line offset the extractor relies on lives in [`SectionLayout`].

use serde::{Deserialize, Serialize};
use std::ops::Range;

use crate::error::DiveError;
use crate::types::DiveType;

/// Offset of the place row within a section.
pub const PLACE_ROW: usize = 0;
/// Offset of the header row within a section.
pub const HEADER_ROW: usize = 2;
/// Offset of the first data row within a section.
pub const FIRST_DATA_ROW: usize = 4;

/// Line ranges of the two dive tables.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct SectionLayout {
    /// Lines of the input holding both tables.
    pub region: Range<usize>,
    /// Lines of the region holding the `dd` table.
    pub dd: Range<usize>,
    /// Lines of the region holding the `edd` table.
    pub edd: Range<usize>,
}

impl SectionLayout {
    /// The post layout: input lines 4..19, `dd` at 0..7, `edd` at 8..15.
    pub const fn standard() -> Self {
        Self {
            region: 4..19,
            dd: 0..7,
            edd: 8..15,
        }
    }

    /// Smallest number of input lines this layout can read.
    pub fn required_lines(&self) -> usize {
        self.region.end
    }

    /// Region-relative range for `kind`.
    pub fn span(&self, kind: DiveType) -> &Range<usize> {
        match kind {
            DiveType::Dd => &self.dd,
            DiveType::Edd => &self.edd,
        }
    }

    /// Checks that both sections fit the region, do not overlap, and are long
    /// enough to hold a place row and a header row.
    pub fn validate(&self) -> Result<(), DiveError> {
        let region_len = self.region.end.saturating_sub(self.region.start);
        if region_len == 0 {
            return Err(DiveError::invalid_layout(format!(
                "region {:?} is empty",
                self.region
            )));
        }
        for kind in DiveType::ALL {
            let span = self.span(kind);
            if span.end > region_len {
                return Err(DiveError::invalid_layout(format!(
                    "{kind} section {span:?} exceeds region of {region_len} lines"
                )));
            }
            if span.end.saturating_sub(span.start) <= HEADER_ROW {
                return Err(DiveError::invalid_layout(format!(
                    "{kind} section {span:?} cannot hold a place row and a header row"
                )));
            }
        }
        if self.dd.start < self.edd.end && self.edd.start < self.dd.end {
            return Err(DiveError::invalid_layout(format!(
                "dd section {:?} overlaps edd section {:?}",
                self.dd, self.edd
            )));
        }
        Ok(())
    }
}

impl Default for SectionLayout {
    fn default() -> Self {
        Self::standard()
    }
}

/// Lines of one dive table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section<'a> {
    /// Which dive these lines describe.
    pub kind: DiveType,
    /// Zero-based index of the first line within the whole input.
    pub first_line: usize,
    /// Raw lines, place row first.
    pub lines: Vec<&'a str>,
}

impl<'a> Section<'a> {
    /// One-based input line number of the section line at `offset`.
    pub fn line_number(&self, offset: usize) -> usize {
        self.first_line + offset + 1
    }

    /// Data rows paired with their section offsets.
    pub fn data_rows(&self) -> impl Iterator<Item = (usize, &'a str)> + '_ {
        self.lines
            .iter()
            .copied()
            .enumerate()
            .skip(FIRST_DATA_ROW)
    }
}

/// Both dive table sections of a post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Sections<'a> {
    /// Standard dive table.
    pub dd: Section<'a>,
    /// Extended dive table.
    pub edd: Section<'a>,
}

impl<'a> Sections<'a> {
    /// Returns the section for `kind`.
    pub fn get(&self, kind: DiveType) -> &Section<'a> {
        match kind {
            DiveType::Dd => &self.dd,
            DiveType::Edd => &self.edd,
        }
    }
}

/// Splits `raw_text` into the `dd` and `edd` sections using the standard layout.
pub fn extract_sections(raw_text: &str) -> Result<Sections<'_>, DiveError> {
    extract_sections_with_layout(raw_text, &SectionLayout::standard())
}

/// Splits `raw_text` into the `dd` and `edd` sections using `layout`.
pub fn extract_sections_with_layout<'a>(
    raw_text: &'a str,
    layout: &SectionLayout,
) -> Result<Sections<'a>, DiveError> {
    layout.validate()?;

    let lines: Vec<&str> = raw_text.split('\n').collect();
    if lines.len() < layout.required_lines() {
        return Err(DiveError::malformed(format!(
            "expected at least {} lines, found {}",
            layout.required_lines(),
            lines.len()
        )));
    }

    let region = &lines[layout.region.clone()];
    let section = |kind: DiveType| {
        let span = layout.span(kind);
        Section {
            kind,
            first_line: layout.region.start + span.start,
            lines: region[span.clone()].to_vec(),
        }
    };
    let sections = Sections {
        dd: section(DiveType::Dd),
        edd: section(DiveType::Edd),
    };

    log::debug!(
        "Extracted dive sections: dd at line {}, edd at line {}",
        sections.dd.line_number(PLACE_ROW),
        sections.edd.line_number(PLACE_ROW)
    );
    Ok(sections)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbered(count: usize) -> String {
        (0..count)
            .map(|idx| format!("line {idx}"))
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn standard_layout_partitions_lines_4_to_19() {
        let text = numbered(25);
        let sections = extract_sections(&text).unwrap();

        assert_eq!(sections.dd.lines.first(), Some(&"line 4"));
        assert_eq!(sections.dd.lines.last(), Some(&"line 10"));
        assert_eq!(sections.dd.lines.len(), 7);

        assert_eq!(sections.edd.lines.first(), Some(&"line 12"));
        assert_eq!(sections.edd.lines.last(), Some(&"line 18"));
        assert_eq!(sections.edd.lines.len(), 7);
    }

    #[test]
    fn exactly_nineteen_lines_is_enough() {
        let text = numbered(19);
        let sections = extract_sections(&text).unwrap();
        assert_eq!(sections.edd.lines.last(), Some(&"line 18"));
    }

    #[test]
    fn short_input_is_malformed() {
        let err = extract_sections(&numbered(10)).unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "Malformed input: expected at least 19 lines, found 10"
        );
    }

    #[test]
    fn trailing_newline_counts_as_a_line() {
        let text = format!("{}\n", numbered(18));
        assert!(extract_sections(&text).is_ok());
    }

    #[test]
    fn line_numbers_are_one_based_in_input() {
        let text = numbered(19);
        let sections = extract_sections(&text).unwrap();
        assert_eq!(sections.dd.line_number(HEADER_ROW), 7);
        assert_eq!(sections.get(DiveType::Edd).line_number(PLACE_ROW), 13);
    }

    #[test]
    fn data_rows_start_at_fourth_offset() {
        let text = numbered(19);
        let sections = extract_sections(&text).unwrap();
        let rows: Vec<_> = sections.dd.data_rows().collect();
        assert_eq!(rows, vec![(4, "line 8"), (5, "line 9"), (6, "line 10")]);
    }

    #[test]
    fn custom_layout() {
        let layout = SectionLayout {
            region: 0..10,
            dd: 0..5,
            edd: 5..10,
        };
        let text = numbered(10);
        let sections = extract_sections_with_layout(&text, &layout).unwrap();
        assert_eq!(sections.dd.lines.len(), 5);
        assert_eq!(sections.edd.lines[0], "line 5");
    }

    #[test]
    fn overlapping_layout_is_rejected() {
        let layout = SectionLayout {
            region: 0..10,
            dd: 0..6,
            edd: 5..10,
        };
        let err = layout.validate().unwrap_err();
        assert!(matches!(err, DiveError::InvalidLayout { .. }));
    }

    #[test]
    fn section_outside_region_is_rejected() {
        let layout = SectionLayout {
            region: 4..10,
            dd: 0..3,
            edd: 3..9,
        };
        assert!(layout.validate().is_err());
    }

    #[test]
    fn section_without_header_is_rejected() {
        let layout = SectionLayout {
            region: 0..10,
            dd: 0..2,
            edd: 5..10,
        };
        assert!(layout.validate().is_err());
    }
}
