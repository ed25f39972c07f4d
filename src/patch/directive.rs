//! Find-or-append patching of single-line verb/value directives.
//!
//! A directive line has the shape `verb value`, e.g.
//! `bspc config window_gap 12`. Patching replaces the first line matching
//! the verb pattern, or appends a new line when no line matches.

use super::ConfigDocument;

/// Where a directive patch landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Placement {
    /// An existing directive line was replaced in place.
    Replaced,
    /// No line matched; the directive was appended to the document.
    Appended,
}

/// Set a directive to `value`, replacing the first matching line or
/// appending `pattern value` at the end.
///
/// Only the first match is touched; pre-existing duplicate directives are
/// left as they are.
pub fn set(doc: &mut ConfigDocument, pattern: &str, value: &str) -> Placement {
    let line = format!("{pattern} {value}");
    match doc.position(|l| l.contains(pattern)) {
        Some(i) => {
            doc.replace_line(i, line);
            Placement::Replaced
        }
        None => {
            doc.append_line(line);
            Placement::Appended
        }
    }
}
