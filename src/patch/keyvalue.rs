//! Patching of `key = value` assignments with suffix-exclusion matching.
//!
//! Polybar configs contain families of similarly-named keys
//! (`background`, `background-alt`, `font-0`). A [`KeyValueField`] carries
//! an exclusion token so that targeting `background` never clobbers
//! `background-alt`. Lines are recognized via [`split_assignment`] rather
//! than raw substring search over the whole line; the exclusion rule itself
//! is kept as a substring test on the key token for compatibility with
//! existing configs.

use super::ConfigDocument;

/// One `key = value` field to patch.
#[derive(Debug, Clone)]
pub struct KeyValueField<'a> {
    /// Key token searched for in the line's key.
    pub key: &'a str,
    /// Lines whose key contains this token are rejected, so a suffixed
    /// sibling key is never mistaken for the target.
    pub excludes: &'a str,
    /// New value; the matched line is replaced wholesale with `key = value`.
    pub value: String,
}

impl<'a> KeyValueField<'a> {
    pub fn new(field: (&'a str, &'a str), value: impl Into<String>) -> Self {
        Self {
            key: field.0,
            excludes: field.1,
            value: value.into(),
        }
    }

    fn matches(&self, line: &str) -> bool {
        match split_assignment(line) {
            Some((key, _)) => key.contains(self.key) && !key.contains(self.excludes),
            None => false,
        }
    }
}

/// Per-field outcome of a multi-field patch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldResult {
    pub key: String,
    pub updated: bool,
}

/// Split a `key = value` line into its trimmed key and value tokens.
///
/// Returns `None` for lines that are not assignments (sections, comments,
/// blanks) and for assignments with an empty key.
pub fn split_assignment(line: &str) -> Option<(&str, &str)> {
    let (key, value) = line.split_once('=')?;
    let key = key.trim();
    if key.is_empty() {
        return None;
    }
    Some((key, value.trim()))
}

/// Patch each field independently in a single pass over the document.
///
/// For every field, the first assignment line whose key contains the field's
/// key token (and not its exclusion token) is replaced with `key = value`.
/// A field with no matching line is skipped and reported as not updated;
/// the overall operation is partial-success, never all-or-nothing.
pub fn set_fields(doc: &mut ConfigDocument, fields: &[KeyValueField]) -> Vec<FieldResult> {
    fields
        .iter()
        .map(|field| {
            let updated = match doc.position(|l| field.matches(l)) {
                Some(i) => {
                    doc.replace_line(i, format!("{} = {}", field.key, field.value));
                    true
                }
                None => false,
            };
            FieldResult {
                key: field.key.to_string(),
                updated,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> ConfigDocument {
        ConfigDocument::from_lines("config", lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn split_assignment_trims_tokens() {
        assert_eq!(split_assignment("background = #1d1f21"), Some(("background", "#1d1f21")));
        assert_eq!(split_assignment("[colors]"), None);
        assert_eq!(split_assignment("= orphan"), None);
    }

    #[test]
    fn suffixed_sibling_is_never_clobbered() {
        let mut d = doc(&["background-alt = red", "background = #000000"]);
        let results = set_fields(
            &mut d,
            &[KeyValueField::new(("background", "background-"), "#1d1f21")],
        );
        assert!(results[0].updated);
        assert_eq!(d.lines(), ["background-alt = red", "background = #1d1f21"]);
    }

    #[test]
    fn only_suffixed_sibling_present_reports_not_updated() {
        let mut d = doc(&["background-alt = red"]);
        let results = set_fields(
            &mut d,
            &[KeyValueField::new(("background", "background-"), "#1d1f21")],
        );
        assert!(!results[0].updated);
        assert_eq!(d.lines(), ["background-alt = red"]);
    }

    #[test]
    fn fields_are_patched_independently() {
        let mut d = doc(&["background = a", "accent = c"]);
        let results = set_fields(
            &mut d,
            &[
                KeyValueField::new(("background", "background-"), "#111111"),
                KeyValueField::new(("foreground", "foreground-"), "#222222"),
                KeyValueField::new(("accent", "accent-"), "#333333"),
            ],
        );
        let updated: Vec<_> = results.iter().map(|r| r.updated).collect();
        assert_eq!(updated, [true, false, true]);
        assert_eq!(d.lines(), ["background = #111111", "accent = #333333"]);
    }

    #[test]
    fn non_assignment_lines_are_ignored() {
        let mut d = doc(&["; font is set below", "[bar/main]", "font-0 = Fira", "font = Mono"]);
        let results = set_fields(&mut d, &[KeyValueField::new(("font", "font-"), "Hack")]);
        assert!(results[0].updated);
        assert_eq!(
            d.lines(),
            ["; font is set below", "[bar/main]", "font-0 = Fira", "font = Hack"]
        );
    }
}
