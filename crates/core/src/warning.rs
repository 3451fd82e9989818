//! Warning cell classification.

/// Presentation class of a warning-style cell.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum WarningClass {
    /// Literally `None`: nothing to report.
    None,
    /// Literally `TBA`: not yet known.
    Pending,
    /// Anything else: an actionable warning.
    Flagged,
}

impl WarningClass {
    /// Classifies a raw cell value. Matching is exact and case-sensitive.
    pub fn of(value: &str) -> Self {
        match value {
            "None" => WarningClass::None,
            "TBA" => WarningClass::Pending,
            _ => WarningClass::Flagged,
        }
    }

    /// Decorates `value` for display under this class.
    pub fn render(self, value: &str) -> String {
        match self {
            WarningClass::None => value.to_string(),
            WarningClass::Pending => format!("({value})"),
            WarningClass::Flagged => format!("[{value}]"),
        }
    }
}

/// Returns the display text for a warning-style cell.
///
/// ```
/// use divetab_core::classify_warning;
///
/// assert_eq!(classify_warning("None"), "None");
/// assert_eq!(classify_warning("TBA"), "(TBA)");
/// assert_eq!(classify_warning("Fire"), "[Fire]");
/// ```
pub fn classify_warning(value: &str) -> String {
    WarningClass::of(value).render(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn classes() {
        assert_eq!(WarningClass::of("None"), WarningClass::None);
        assert_eq!(WarningClass::of("TBA"), WarningClass::Pending);
        assert_eq!(WarningClass::of("Low visibility"), WarningClass::Flagged);
    }

    #[test]
    fn matching_is_case_sensitive() {
        assert_eq!(classify_warning("none"), "[none]");
        assert_eq!(classify_warning("tba"), "[tba]");
        assert_eq!(classify_warning("NONE"), "[NONE]");
    }

    #[test]
    fn empty_value_is_flagged() {
        assert_eq!(classify_warning(""), "[]");
    }

    #[test]
    fn padded_sentinels_are_not_normalized() {
        assert_eq!(classify_warning(" TBA"), "[ TBA]");
    }
}
