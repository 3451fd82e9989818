//! Outer border removal for rendered tables.

use crate::error::DiveError;

/// Removes the outer frame of a rendered table.
///
/// The first and last character of every line and the first and last line
/// are dropped, leaving only the inner vertical rules. Characters are counted
/// as `char`s, so multi-byte box glyphs are removed whole.
///
/// ```
/// use divetab_core::strip_border;
///
/// let rendered = "┌───┬───┐\n│ a │ b │\n└───┴───┘\n";
/// assert_eq!(strip_border(rendered)?, " a │ b ");
/// # Ok::<(), divetab_core::DiveError>(())
/// ```
pub fn strip_border(rendered: &str) -> Result<String, DiveError> {
    let lines: Vec<&str> = rendered.trim().split('\n').collect();
    if lines.len() < 3 {
        return Err(DiveError::malformed(format!(
            "rendered table has {} lines, need at least 3 to strip its border",
            lines.len()
        )));
    }

    let mut inner = Vec::with_capacity(lines.len() - 2);
    for (idx, line) in lines.iter().enumerate() {
        let Some(stripped) = strip_edges(line) else {
            return Err(DiveError::malformed(format!(
                "rendered table line {} is too short to strip its border",
                idx + 1
            )));
        };
        if idx != 0 && idx != lines.len() - 1 {
            inner.push(stripped);
        }
    }

    Ok(inner.join("\n"))
}

/// Drops the first and last `char`, or `None` if fewer than two remain.
fn strip_edges(line: &str) -> Option<&str> {
    let mut chars = line.char_indices();
    let (_, first) = chars.next()?;
    let (last_start, _) = chars.next_back()?;
    Some(&line[first.len_utf8()..last_start])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn removes_outer_lines_and_columns() {
        let rendered = "┌──────┬──────┐\n│ Stage │ Note │\n│ Dive  │ —    │\n└──────┴──────┘";
        assert_eq!(strip_border(rendered).unwrap(), " Stage │ Note \n Dive  │ —    ");
    }

    #[test]
    fn n_lines_become_n_minus_two() {
        let rendered = "+--+\n|ab|\n|cd|\n|ef|\n+--+\n";
        let stripped = strip_border(rendered).unwrap();
        assert_eq!(stripped.lines().count(), 3);
        assert_eq!(stripped, "ab\ncd\nef");
    }

    #[test]
    fn surrounding_whitespace_is_trimmed_first() {
        let rendered = "\n\n+--+\n|ab|\n+--+\n\n";
        assert_eq!(strip_border(rendered).unwrap(), "ab");
    }

    #[test]
    fn two_char_lines_leave_empty_rows() {
        assert_eq!(strip_border("┌┐\n││\n└┘").unwrap(), "");
    }

    #[test]
    fn fewer_than_three_lines_is_malformed() {
        let err = strip_border("┌─┐\n└─┘").unwrap_err();
        assert!(err.is_malformed());
        assert!(strip_border("").unwrap_err().is_malformed());
    }

    #[test]
    fn short_line_is_malformed() {
        let err = strip_border("┌─┐\n│\n└─┘").unwrap_err();
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "Malformed input: rendered table line 2 is too short to strip its border"
        );
    }
}
