//! Selector text normalization.
//!
//! Selectors are compared as plain strings, so both the stored rule selectors
//! and the selectors a host asks about go through [`normalize_selector`].

/// Whitespace as far as selector cleanup is concerned. Includes the byte order
/// mark so a BOM at the top of a file never leaks into the first selector.
fn is_space(c: char) -> bool {
    c.is_whitespace() || c == '\u{feff}'
}

/// Normalize a selector into its canonical comparison form.
///
/// Line breaks become spaces, surrounding whitespace is trimmed, and whitespace
/// around the commas of a selector list is removed:
///
/// ```
/// use css_linemap::normalize_selector;
///
/// assert_eq!(normalize_selector("  h1 ,\n  h2 > a "), "h1,h2 > a");
/// ```
pub fn normalize_selector(selector: &str) -> String {
    let selector = selector.replace(['\n', '\r'], " ");
    selector
        .trim_matches(is_space)
        .split(',')
        .map(|part| part.trim_matches(is_space))
        .collect::<Vec<_>>()
        .join(",")
}

/// Strip leading whitespace and leading `/* ... */` comments from a rule prelude.
///
/// Returns the number of bytes removed together with the remaining text. Only a
/// prefix is removed; comments after the first real character stay in place.
/// An unterminated leading comment is left untouched.
pub fn strip_prelude(raw: &str) -> (usize, &str) {
    let mut rest = raw;
    loop {
        let trimmed = rest.trim_start_matches(is_space);
        let Some(comment) = trimmed.strip_prefix("/*") else {
            break;
        };
        let Some(close) = comment.find("*/") else {
            break;
        };
        rest = &comment[close + 2..];
    }
    let rest = rest.trim_start_matches(is_space);
    (raw.len() - rest.len(), rest)
}
