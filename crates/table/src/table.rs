//! Table assembly and rendering.

use unicode_width::UnicodeWidthStr;

use crate::column::{Alignment, ColumnSpec, align_text};
use crate::error::TableError;
use crate::style::{BorderGlyphs, TableStyle};

/// A bordered text table with a fixed column count.
///
/// The column count is fixed at construction; every row must supply exactly
/// that many cells.
///
/// ```
/// use divetab_table::{ColumnSpec, Table, TableStyle};
///
/// let mut table = Table::new(
///     vec![ColumnSpec::left("Stage"), ColumnSpec::left("Depth")],
///     TableStyle::default(),
/// )?;
/// table.add_row(["Descent", "18m"])?;
///
/// assert_eq!(
///     table.render(),
///     "┌─────────┬───────┐\n\
///      │ Stage   │ Depth │\n\
///      │ Descent │ 18m   │\n\
///      └─────────┴───────┘\n"
/// );
/// # Ok::<(), divetab_table::TableError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<ColumnSpec>,
    rows: Vec<Vec<String>>,
    style: TableStyle,
}

impl Table {
    /// Creates an empty table with the given columns.
    pub fn new(columns: Vec<ColumnSpec>, style: TableStyle) -> Result<Self, TableError> {
        if columns.is_empty() {
            return Err(TableError::NoColumns);
        }
        Ok(Self {
            columns,
            rows: Vec::new(),
            style,
        })
    }

    /// Appends a row. Fails unless it has exactly one cell per column.
    pub fn add_row<I, S>(&mut self, cells: I) -> Result<(), TableError>
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let row: Vec<String> = cells.into_iter().map(Into::into).collect();
        if row.len() != self.columns.len() {
            return Err(TableError::row_length(self.columns.len(), row.len()));
        }
        self.rows.push(row);
        Ok(())
    }

    /// Configured columns.
    pub fn columns(&self) -> &[ColumnSpec] {
        &self.columns
    }

    /// Rows appended so far.
    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    /// Number of columns.
    pub fn num_columns(&self) -> usize {
        self.columns.len()
    }

    /// Content width of each column: the widest of header and cells.
    pub fn column_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(idx, column)| {
                self.rows
                    .iter()
                    .map(|row| UnicodeWidthStr::width(row[idx].as_str()))
                    .fold(UnicodeWidthStr::width(column.name.as_str()), usize::max)
            })
            .collect()
    }

    /// Renders the table, one line per row plus borders, newline-terminated.
    pub fn render(&self) -> String {
        let glyphs = self.style.border.glyphs();
        let widths = self.column_widths();
        log::trace!(
            "Rendering table: {} columns, {} rows, widths {:?}",
            widths.len(),
            self.rows.len(),
            widths
        );

        let mut lines = Vec::with_capacity(self.rows.len() + 4);
        lines.push(self.rule(
            &widths,
            glyphs.top_left,
            glyphs.top_tee,
            glyphs.top_right,
            &glyphs,
        ));

        let header: Vec<(&str, Alignment)> = self
            .columns
            .iter()
            .map(|column| (column.name.as_str(), column.header_align))
            .collect();
        lines.push(self.row_line(&header, &widths, &glyphs));

        if self.style.header_rule {
            lines.push(self.rule(
                &widths,
                glyphs.left_tee,
                glyphs.cross,
                glyphs.right_tee,
                &glyphs,
            ));
        }

        for row in &self.rows {
            let cells: Vec<(&str, Alignment)> = row
                .iter()
                .zip(&self.columns)
                .map(|(cell, column)| (cell.as_str(), column.cell_align))
                .collect();
            lines.push(self.row_line(&cells, &widths, &glyphs));
        }

        lines.push(self.rule(
            &widths,
            glyphs.bottom_left,
            glyphs.bottom_tee,
            glyphs.bottom_right,
            &glyphs,
        ));

        let mut out = lines.join("\n");
        out.push('\n');
        out
    }

    fn rule(
        &self,
        widths: &[usize],
        left: char,
        junction: char,
        right: char,
        glyphs: &BorderGlyphs,
    ) -> String {
        let gap = self.style.column_gap;
        let segments: Vec<String> = widths
            .iter()
            .map(|width| glyphs.horizontal.to_string().repeat(width + gap))
            .collect();
        format!("{left}{}{right}", segments.join(&junction.to_string()))
    }

    fn row_line(
        &self,
        cells: &[(&str, Alignment)],
        widths: &[usize],
        glyphs: &BorderGlyphs,
    ) -> String {
        let pad_left = " ".repeat(self.style.pad_left());
        let pad_right = " ".repeat(self.style.pad_right());
        let segments: Vec<String> = cells
            .iter()
            .zip(widths)
            .map(|((text, align), width)| {
                format!("{pad_left}{}{pad_right}", align_text(text, *width, *align))
            })
            .collect();
        let vertical = glyphs.vertical.to_string();
        format!("{vertical}{}{vertical}", segments.join(&vertical))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::BorderStyle;

    fn stage_table(style: TableStyle) -> Table {
        let mut table = Table::new(
            vec![
                ColumnSpec::left("Stage"),
                ColumnSpec::new("Depth", Alignment::Right, Alignment::Right),
            ],
            style,
        )
        .unwrap();
        table.add_row(["Descent", "18m"]).unwrap();
        table.add_row(["Ascent", "5m"]).unwrap();
        table
    }

    #[test]
    fn rejects_empty_columns() {
        let err = Table::new(Vec::new(), TableStyle::default()).unwrap_err();
        assert_eq!(err, TableError::NoColumns);
    }

    #[test]
    fn rejects_row_with_wrong_cell_count() {
        let mut table = stage_table(TableStyle::default());
        let err = table.add_row(["Safety stop"]).unwrap_err();
        assert_eq!(err, TableError::row_length(2, 1));

        let err = table.add_row(["a", "b", "c"]).unwrap_err();
        assert_eq!(err, TableError::row_length(2, 3));
        assert_eq!(table.rows().len(), 2);
        assert_eq!(table.num_columns(), 2);
        assert_eq!(table.columns()[1].cell_align, Alignment::Right);
    }

    #[test]
    fn renders_thin_table_without_header_rule() {
        let rendered = stage_table(TableStyle::default()).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(
            lines,
            vec![
                "┌─────────┬───────┐",
                "│ Stage   │ Depth │",
                "│ Descent │   18m │",
                "│ Ascent  │    5m │",
                "└─────────┴───────┘",
            ]
        );
        assert!(rendered.ends_with('\n'));
    }

    #[test]
    fn header_rule_adds_one_line() {
        let style = TableStyle {
            header_rule: true,
            ..TableStyle::thin()
        };
        let rendered = stage_table(style).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines.len(), 6);
        assert_eq!(lines[2], "├─────────┼───────┤");
    }

    #[test]
    fn ascii_border_with_zero_gap() {
        let style = TableStyle {
            border: BorderStyle::Ascii,
            column_gap: 0,
            header_rule: false,
        };
        let rendered = stage_table(style).render();
        let lines: Vec<&str> = rendered.lines().collect();
        assert_eq!(lines[0], "+-------+-----+");
        assert_eq!(lines[1], "|Stage  |Depth|");
        assert_eq!(lines[2], "|Descent|  18m|");
    }

    #[test]
    fn header_only_table_renders_three_lines() {
        let table = Table::new(vec![ColumnSpec::left("Stage")], TableStyle::default()).unwrap();
        assert_eq!(table.render(), "┌───────┐\n│ Stage │\n└───────┘\n");
    }

    #[test]
    fn widths_follow_display_width() {
        let mut table = Table::new(vec![ColumnSpec::left("N")], TableStyle::default()).unwrap();
        table.add_row(["—"]).unwrap();
        table.add_row(["潜水"]).unwrap();
        assert_eq!(table.column_widths(), vec![4]);
    }
}
