use divetab_table::TableError;
use thiserror::Error;

/// Location of a problem inside the input text.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SourceLocation {
    /// Line number (1-indexed) within the whole input.
    pub line: usize,
    /// Cell position (1-indexed) within the row, when relevant.
    pub cell: Option<usize>,
}

impl SourceLocation {
    /// Create a location pointing at a whole line.
    pub fn line(line: usize) -> Self {
        Self { line, cell: None }
    }

    /// Create a location pointing at a cell on a line.
    pub fn cell(line: usize, cell: usize) -> Self {
        Self {
            line,
            cell: Some(cell),
        }
    }
}

impl std::fmt::Display for SourceLocation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self.cell {
            Some(cell) => write!(f, "line {}, cell {}", self.line, cell),
            None => write!(f, "line {}", self.line),
        }
    }
}

/// Errors that can occur while extracting dives.
#[derive(Debug, Error)]
pub enum DiveError {
    /// Input text does not follow the expected table layout.
    #[error("Malformed input: {message}")]
    MalformedInput {
        /// Error message
        message: String,
        /// Where the problem was found, if it maps to a line.
        location: Option<SourceLocation>,
    },
    /// The table renderer rejected a row.
    #[error(transparent)]
    RenderMismatch(#[from] TableError),
    /// A section layout cannot be applied to any input.
    #[error("Invalid section layout: {message}")]
    InvalidLayout {
        /// Error message
        message: String,
    },
}

impl DiveError {
    /// Create a malformed input error without a location.
    pub fn malformed(message: impl Into<String>) -> Self {
        Self::MalformedInput {
            message: message.into(),
            location: None,
        }
    }

    /// Create a malformed input error at a location.
    pub fn malformed_at(message: impl Into<String>, location: SourceLocation) -> Self {
        let message = format!("{} (at {})", message.into(), location);
        Self::MalformedInput {
            message,
            location: Some(location),
        }
    }

    /// Create an invalid layout error.
    pub fn invalid_layout(message: impl Into<String>) -> Self {
        Self::InvalidLayout {
            message: message.into(),
        }
    }

    /// Whether this is a malformed input error.
    pub fn is_malformed(&self) -> bool {
        matches!(self, DiveError::MalformedInput { .. })
    }

    /// Location attached to a malformed input error.
    pub fn location(&self) -> Option<&SourceLocation> {
        match self {
            DiveError::MalformedInput { location, .. } => location.as_ref(),
            DiveError::RenderMismatch(_) | DiveError::InvalidLayout { .. } => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn location_display() {
        assert_eq!(SourceLocation::line(9).to_string(), "line 9");
        assert_eq!(SourceLocation::cell(9, 3).to_string(), "line 9, cell 3");
    }

    #[test]
    fn malformed_at_mentions_location() {
        let err = DiveError::malformed_at("row too short", SourceLocation::cell(12, 2));
        assert!(err.is_malformed());
        assert_eq!(
            err.to_string(),
            "Malformed input: row too short (at line 12, cell 2)"
        );
        assert_eq!(err.location(), Some(&SourceLocation::cell(12, 2)));
    }

    #[test]
    fn render_mismatch_is_transparent() {
        let err = DiveError::from(TableError::row_length(4, 5));
        assert!(!err.is_malformed());
        assert_eq!(err.to_string(), "Row has 5 cells but the table has 4 columns");
    }
}
