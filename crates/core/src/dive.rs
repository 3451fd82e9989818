//! Building one rendered dive from its table section.

use divetab_table::{ColumnSpec, Table, TableStyle};
use serde::{Deserialize, Serialize};

use crate::border::strip_border;
use crate::error::{DiveError, SourceLocation};
use crate::sections::{HEADER_ROW, PLACE_ROW, Section};
use crate::tokenize::tokenize;
use crate::types::DiveResult;
use crate::warning::classify_warning;

/// Index of the place text in the tokenized place row.
const PLACE_TOKEN: usize = 2;
/// Data cell holding the anomaly warning.
const ANOMALY_CELL: usize = 2;
/// Data cell holding the general warning.
const WARNING_CELL: usize = 3;
/// Fewest data cells a stage row may carry.
const MIN_DATA_CELLS: usize = 4;

/// Options for turning a section into a rendered dive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct DiveOptions {
    /// Style handed to the table renderer.
    pub style: TableStyle,
    /// Also remove `**` from header and data cells, not just the place.
    pub strip_cell_emphasis: bool,
}

/// Renders one dive section into its place and bordered-off table.
///
/// The header row names the columns; each non-blank line from the first data
/// row on becomes one table row, in order. The anomaly and warning cells are
/// decorated by [`classify_warning`].
pub fn build_dive(section: &Section<'_>, options: &DiveOptions) -> Result<DiveResult, DiveError> {
    let header = section.lines.get(HEADER_ROW).ok_or_else(|| {
        DiveError::malformed(format!("{} section has no header row", section.kind))
    })?;
    let columns: Vec<ColumnSpec> = row_cells(header, options)
        .into_iter()
        .map(ColumnSpec::left)
        .collect();
    if columns.is_empty() {
        return Err(DiveError::malformed_at(
            format!("{} header row has no columns", section.kind),
            SourceLocation::line(section.line_number(HEADER_ROW)),
        ));
    }

    let required = columns.len().max(MIN_DATA_CELLS);
    let mut table = Table::new(columns, options.style)?;

    for (offset, line) in section.data_rows() {
        if line.trim().is_empty() {
            log::trace!(
                "Skipping blank {} row at line {}",
                section.kind,
                section.line_number(offset)
            );
            continue;
        }

        let mut cells = row_cells(line, options);
        if cells.len() < required {
            return Err(DiveError::malformed_at(
                format!(
                    "{} data row has {} cells, expected {}",
                    section.kind,
                    cells.len(),
                    required
                ),
                SourceLocation::cell(section.line_number(offset), cells.len() + 1),
            ));
        }
        cells[ANOMALY_CELL] = classify_warning(&cells[ANOMALY_CELL]);
        cells[WARNING_CELL] = classify_warning(&cells[WARNING_CELL]);
        table.add_row(cells)?;
    }

    let place = place(section)?;
    let rows = table.rows().len();
    let table = strip_border(&table.render())?;

    log::debug!("Built {} dive at {:?} with {} rows", section.kind, place, rows);
    Ok(DiveResult { place, table })
}

/// Tokenizes a table row and drops its leading label cell.
fn row_cells(line: &str, options: &DiveOptions) -> Vec<String> {
    tokenize(line)
        .into_iter()
        .skip(1)
        .map(|cell| {
            if options.strip_cell_emphasis {
                cell.replace("**", "")
            } else {
                cell
            }
        })
        .collect()
}

fn place(section: &Section<'_>) -> Result<String, DiveError> {
    let line = section.lines.get(PLACE_ROW).copied().unwrap_or_default();
    tokenize(line)
        .get(PLACE_TOKEN)
        .map(|token| token.replace("**", ""))
        .ok_or_else(|| {
            DiveError::malformed_at(
                format!("{} place row has no place cell", section.kind),
                SourceLocation::cell(section.line_number(PLACE_ROW), PLACE_TOKEN + 1),
            )
        })
}
