//! Patching of two-line sxhkd binding records.
//!
//! A binding record is a trigger line (the key chord) followed immediately
//! by its action line (the command). Records are located by a substring
//! search for an action token over the document; the trigger is defined as
//! the line immediately preceding the matched action line.

use super::ConfigDocument;
use crate::{Error, Result};

/// Index of the action line for `action_token`, requiring a preceding
/// trigger line to exist.
///
/// A match on the very first line has no preceding trigger; that is an
/// explicit `NotFound`, never an out-of-bounds access.
fn find_action(doc: &ConfigDocument, action_token: &str) -> Result<usize> {
    let index = doc
        .position(|l| l.contains(action_token))
        .ok_or_else(|| Error::NotFound(format!("no binding with action '{action_token}'")))?;
    if index == 0 {
        return Err(Error::NotFound(format!(
            "action '{action_token}' has no trigger line above it"
        )));
    }
    Ok(index)
}

/// Rebind an action to a new key chord.
///
/// The trigger line preceding the matched action line is replaced in place;
/// the action line is untouched. Returns the previous trigger text.
pub fn rename(doc: &mut ConfigDocument, action_token: &str, new_trigger: &str) -> Result<String> {
    let action = find_action(doc, action_token)?;
    let old = doc.lines()[action - 1].trim().to_string();
    doc.replace_line(action - 1, new_trigger.to_string());
    Ok(old)
}

/// Append a new binding record: the trigger line, then the action line.
///
/// No separator line is written, so inserting and then removing the same
/// record leaves the document's line count unchanged.
pub fn insert(doc: &mut ConfigDocument, trigger: &str, action: &str) {
    doc.append_line(trigger.to_string());
    doc.append_line(action.to_string());
}

/// Remove a binding record: the matched action line together with its
/// preceding trigger line, as an atomic pair.
pub fn remove(doc: &mut ConfigDocument, action_token: &str) -> Result<()> {
    let action = find_action(doc, action_token)?;
    doc.remove_range(action - 1, action + 1);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn doc(lines: &[&str]) -> ConfigDocument {
        ConfigDocument::from_lines("sxhkdrc", lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn rename_replaces_trigger_and_keeps_action() {
        let mut d = doc(&["super + Return", "    alacritty", "super + d", "    rofi -show drun"]);
        let old = rename(&mut d, "rofi", "super + p").unwrap();
        assert_eq!(old, "super + d");
        assert_eq!(
            d.lines(),
            ["super + Return", "    alacritty", "super + p", "    rofi -show drun"]
        );
    }

    #[test]
    fn rename_unknown_action_is_not_found() {
        let mut d = doc(&["super + Return", "    alacritty"]);
        let err = rename(&mut d, "firefox", "super + f").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(d.lines(), ["super + Return", "    alacritty"]);
    }

    #[test]
    fn match_on_first_line_is_not_found() {
        // The token matches the very first line, which has no trigger above it.
        let mut d = doc(&["    thunar", "super + t"]);
        assert!(matches!(remove(&mut d, "thunar"), Err(Error::NotFound(_))));
        assert!(matches!(
            rename(&mut d, "thunar", "super + f"),
            Err(Error::NotFound(_))
        ));
        assert_eq!(d.len(), 2);
    }

    #[test]
    fn insert_appends_trigger_then_action() {
        let mut d = doc(&["super + Return", "    alacritty"]);
        insert(&mut d, "super + t", "    thunar");
        assert_eq!(
            d.lines(),
            ["super + Return", "    alacritty", "super + t", "    thunar"]
        );
    }

    #[test]
    fn remove_deletes_the_pair() {
        let mut d = doc(&["super + t", "thunar"]);
        remove(&mut d, "thunar").unwrap();
        assert!(d.is_empty());
    }

    #[test]
    fn insert_then_remove_restores_line_count() {
        let mut d = doc(&["super + Return", "    alacritty"]);
        insert(&mut d, "super + t", "    thunar");
        remove(&mut d, "thunar").unwrap();
        assert_eq!(d.lines(), ["super + Return", "    alacritty"]);
    }
}
