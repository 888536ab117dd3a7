//! Splitting of multi-line input values.
//!
//! Workflow inputs frequently carry one item per line. Line endings may be
//! `\n`, `\r\n` or a bare `\r`; every line is trimmed and blank lines are
//! dropped.

/// Iterate over the non-blank lines of `raw`, trimmed, with their 1-based
/// line numbers in the original input.
///
/// # Examples
///
/// ```
/// use actkit::config::numbered_lines;
///
/// let lines: Vec<_> = numbered_lines("a\n\n  b  \r\nc").collect();
/// assert_eq!(lines, vec![(1, "a"), (3, "b"), (4, "c")]);
/// ```
pub fn numbered_lines(raw: &str) -> impl Iterator<Item = (usize, &str)> + '_ {
    raw.split('\n')
        .flat_map(|chunk| {
            // A trailing `\r` belongs to a `\r\n` ending; any other `\r` is
            // a line break of its own.
            chunk.strip_suffix('\r').unwrap_or(chunk).split('\r')
        })
        .enumerate()
        .filter_map(|(index, line)| {
            let line = line.trim();
            (!line.is_empty()).then_some((index + 1, line))
        })
}

/// Split `raw` into its non-blank, trimmed lines.
///
/// Whitespace inside a line is preserved, as are any other characters.
///
/// # Examples
///
/// ```
/// use actkit::config::split_lines;
///
/// assert_eq!(
///     split_lines("/path/one\r\n\n  /path/two \n"),
///     vec!["/path/one".to_string(), "/path/two".to_string()]
/// );
/// assert!(split_lines(" \n\t\n").is_empty());
/// ```
#[must_use]
pub fn split_lines(raw: &str) -> Vec<String> {
    numbered_lines(raw)
        .map(|(_, line)| line.to_string())
        .collect()
}
