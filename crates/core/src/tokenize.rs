//! Markdown table row tokenizing.

/// Splits a markdown table row into trimmed cell texts.
///
/// The fragments before the first pipe and after the last pipe only count when
/// they hold text. Between pipes, an empty fragment (`||`) is dropped while a
/// whitespace-only one is a blank cell and is kept as `""`.
///
/// ```
/// use divetab_core::tokenize;
///
/// assert_eq!(tokenize("| a | b | c |"), ["a", "b", "c"]);
/// assert_eq!(tokenize("|  | Stage |"), ["", "Stage"]);
/// assert!(tokenize("").is_empty());
/// ```
pub fn tokenize(line: &str) -> Vec<String> {
    let fragments: Vec<&str> = line.split('|').collect();
    let last = fragments.len() - 1;
    fragments
        .into_iter()
        .enumerate()
        .filter(|(idx, fragment)| {
            if *idx == 0 || *idx == last {
                !fragment.trim().is_empty()
            } else {
                !fragment.is_empty()
            }
        })
        .map(|(_, fragment)| fragment.trim().to_string())
        .collect()
}
