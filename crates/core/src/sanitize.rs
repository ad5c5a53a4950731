//! Free-text normalization for catalog names and titles.
//!
//! Author names, novelist names, and book titles are stored in normalized
//! form so that uniqueness is checked on the normalized value: `"Sample
//! Book"` and `"  SAMPLE   book "` are the same title.

/// Normalize a human-entered name or title.
///
/// Drops every character outside `[A-Za-z0-9 ]`, lowercases, trims, and
/// collapses internal whitespace runs to single spaces. Idempotent:
/// `sanitize(sanitize(s)) == sanitize(s)`.
///
/// # Examples
///
/// ```
/// use libretto_core::sanitize::sanitize;
///
/// assert_eq!(sanitize("  My Book!!  "), "my book");
/// assert_eq!(sanitize("Sample Book"), sanitize("  SAMPLE   book "));
/// ```
pub fn sanitize(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    let mut pending_space = false;

    for ch in input.chars() {
        if ch == ' ' {
            pending_space = true;
        } else if ch.is_ascii_alphanumeric() {
            // Only emit the collapsed space once a kept character follows it,
            // which also trims leading and trailing whitespace.
            if pending_space && !out.is_empty() {
                out.push(' ');
            }
            pending_space = false;
            out.push(ch.to_ascii_lowercase());
        }
    }

    out
}
