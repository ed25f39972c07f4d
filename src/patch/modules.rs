//! Rewrite of the polybar module-list line.

use super::ConfigDocument;
use crate::{Error, Result};

/// Replace the first line containing `marker` with `key = list`.
///
/// Note the asymmetry: the marker used to locate the line (any `modules-`
/// slot) and the key written in the replacement (`modules-center`) may
/// differ, so whichever module slot appears first in the file is rewritten
/// into the write key's slot. Long-standing behavior; kept as-is.
pub fn set(doc: &mut ConfigDocument, marker: &str, key: &str, list: &str) -> Result<()> {
    let index = doc
        .position(|l| l.contains(marker))
        .ok_or_else(|| Error::NotFound(format!("no '{marker}' line in {}", doc.path().display())))?;
    doc.replace_line(index, format!("{key} = {list}"));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{MODULES_KEY, MODULES_MARKER};

    fn doc(lines: &[&str]) -> ConfigDocument {
        ConfigDocument::from_lines("config", lines.iter().map(|s| s.to_string()).collect())
    }

    #[test]
    fn rewrites_first_module_slot_to_write_key() {
        let mut d = doc(&["[bar/main]", "modules-left = bspwm", "modules-right = date"]);
        set(&mut d, MODULES_MARKER, MODULES_KEY, "wlan eth battery").unwrap();
        assert_eq!(
            d.lines(),
            ["[bar/main]", "modules-center = wlan eth battery", "modules-right = date"]
        );
    }

    #[test]
    fn missing_marker_is_not_found() {
        let mut d = doc(&["[bar/main]", "font = Mono"]);
        let err = set(&mut d, MODULES_MARKER, MODULES_KEY, "date").unwrap_err();
        assert!(matches!(err, Error::NotFound(_)));
        assert_eq!(d.len(), 2);
    }
}
