//! Command implementations for the wmt CLI.
//!
//! Each command is a single load -> locate -> mutate -> persist pass over
//! one config file, returning a report with a one-line human summary and a
//! JSON form. Commands are organized by target:
//! - `gap` / `border` - bspwmrc directives
//! - `hotkey_*` - sxhkdrc binding records
//! - `bar_*` - polybar key=value fields and the module list
//! - `seed` / `show` - starter configs and a config dump

use std::fs;
use std::path::PathBuf;

use serde::Serialize;

use crate::config::{
    ACCENT_FIELD, BACKGROUND_FIELD, BORDER_DIRECTIVE, ConfigRoot, FONT_FIELD, FOREGROUND_FIELD,
    GAP_DIRECTIVE, MODULES_KEY, MODULES_MARKER,
};
use crate::patch::{ConfigDocument, KeyValueField, Placement, binding, directive, keyvalue, modules};
use crate::setup::{self, SeedAction};
use crate::{Error, Result};

/// Command results that can be serialized to JSON or formatted for humans.
pub trait Output {
    /// Serialize to JSON string.
    fn to_json(&self) -> String;

    /// Format for human-readable output.
    fn to_human(&self) -> String;
}

fn json_string<T: Serialize>(value: &T) -> String {
    serde_json::to_string(value).unwrap_or_else(|_| "{}".to_string())
}

/// Report for commands that patch a single line in a single file.
#[derive(Debug, Serialize)]
pub struct PatchReport {
    pub file: PathBuf,
    pub message: String,
}

impl Output for PatchReport {
    fn to_json(&self) -> String {
        json_string(self)
    }

    fn to_human(&self) -> String {
        self.message.clone()
    }
}

/// Report for the multi-field color patch; partial success is normal.
#[derive(Debug, Serialize)]
pub struct ColorsReport {
    pub file: PathBuf,
    pub updated: Vec<String>,
    pub skipped: Vec<String>,
}

impl Output for ColorsReport {
    fn to_json(&self) -> String {
        json_string(self)
    }

    fn to_human(&self) -> String {
        let mut msg = format!("Updated {}", self.updated.join(", "));
        if !self.skipped.is_empty() {
            msg.push_str(&format!("; not found: {}", self.skipped.join(", ")));
        }
        msg
    }
}

#[derive(Debug, Serialize)]
pub struct SeedReport {
    pub created: Vec<PathBuf>,
    pub overwritten: Vec<PathBuf>,
    pub skipped: Vec<PathBuf>,
    pub backups: Vec<PathBuf>,
}

impl Output for SeedReport {
    fn to_json(&self) -> String {
        json_string(self)
    }

    fn to_human(&self) -> String {
        let mut msg = format!(
            "Seeded {} configs ({} created, {} overwritten)",
            self.created.len() + self.overwritten.len(),
            self.created.len(),
            self.overwritten.len()
        );
        if !self.skipped.is_empty() {
            msg.push_str(&format!(
                "; skipped {} existing (rerun with --force to overwrite)",
                self.skipped.len()
            ));
        }
        msg
    }
}

#[derive(Debug, Serialize)]
pub struct ShowSection {
    pub name: String,
    pub file: PathBuf,
    pub content: String,
}

#[derive(Debug, Serialize)]
pub struct ShowReport {
    pub sections: Vec<ShowSection>,
}

impl Output for ShowReport {
    fn to_json(&self) -> String {
        json_string(self)
    }

    fn to_human(&self) -> String {
        let mut out = String::new();
        for section in &self.sections {
            out.push_str(&format!(
                "--- {} ({})\n{}\n",
                section.name,
                section.file.display(),
                section.content
            ));
        }
        out.trim_end().to_string()
    }
}

/// Parse a caller-supplied pixel count, rejecting non-integers before any
/// file is touched.
fn parse_pixels(value: &str, what: &str) -> Result<i64> {
    value
        .trim()
        .parse()
        .map_err(|_| Error::InvalidValue(format!("{what} must be an integer, got '{value}'")))
}

/// Set the bspwm window gap in bspwmrc.
pub fn gap(root: &ConfigRoot, pixels: &str) -> Result<PatchReport> {
    set_bspwm_directive(root, GAP_DIRECTIVE, "gap size", pixels)
}

/// Set the bspwm border width in bspwmrc.
pub fn border(root: &ConfigRoot, pixels: &str) -> Result<PatchReport> {
    set_bspwm_directive(root, BORDER_DIRECTIVE, "border width", pixels)
}

fn set_bspwm_directive(
    root: &ConfigRoot,
    pattern: &str,
    what: &str,
    pixels: &str,
) -> Result<PatchReport> {
    let px = parse_pixels(pixels, what)?;
    let mut doc = ConfigDocument::load(root.bspwmrc())?;
    let placement = directive::set(&mut doc, pattern, &px.to_string());
    doc.save()?;
    let message = match placement {
        Placement::Replaced => format!("Updated {what} to {px}"),
        Placement::Appended => format!("Set {what} to {px} (directive appended)"),
    };
    Ok(PatchReport {
        file: root.bspwmrc(),
        message,
    })
}

/// Rebind an sxhkd action to a new key chord.
pub fn hotkey_rename(root: &ConfigRoot, action: &str, trigger: &str) -> Result<PatchReport> {
    let mut doc = ConfigDocument::load(root.sxhkdrc())?;
    let old = binding::rename(&mut doc, action, trigger)?;
    doc.save()?;
    Ok(PatchReport {
        file: root.sxhkdrc(),
        message: format!("Rebound '{action}': {old} -> {trigger}"),
    })
}

/// Append a new sxhkd binding record.
pub fn hotkey_add(root: &ConfigRoot, trigger: &str, action: &str) -> Result<PatchReport> {
    let mut doc = ConfigDocument::load(root.sxhkdrc())?;
    binding::insert(&mut doc, trigger, action);
    doc.save()?;
    Ok(PatchReport {
        file: root.sxhkdrc(),
        message: format!("Added binding: {trigger} -> {action}"),
    })
}

/// Remove an sxhkd binding record by action substring.
pub fn hotkey_remove(root: &ConfigRoot, action: &str) -> Result<PatchReport> {
    let mut doc = ConfigDocument::load(root.sxhkdrc())?;
    binding::remove(&mut doc, action)?;
    doc.save()?;
    Ok(PatchReport {
        file: root.sxhkdrc(),
        message: format!("Removed binding for '{action}'"),
    })
}

/// Set the polybar font field.
pub fn bar_font(root: &ConfigRoot, name: &str) -> Result<PatchReport> {
    let path = root.polybar_config();
    let mut doc = ConfigDocument::load(&path)?;
    let results = keyvalue::set_fields(&mut doc, &[KeyValueField::new(FONT_FIELD, name)]);
    if !results[0].updated {
        return Err(Error::NotFound(format!(
            "no 'font' line in {}",
            path.display()
        )));
    }
    doc.save()?;
    Ok(PatchReport {
        file: path,
        message: format!("Font updated to {name}"),
    })
}

/// Set any of the polybar color fields. Fields are patched independently;
/// a field with no matching line is skipped and reported, not an error.
pub fn bar_colors(
    root: &ConfigRoot,
    background: Option<&str>,
    foreground: Option<&str>,
    accent: Option<&str>,
) -> Result<ColorsReport> {
    let mut fields = Vec::new();
    if let Some(color) = background {
        fields.push(KeyValueField::new(BACKGROUND_FIELD, color));
    }
    if let Some(color) = foreground {
        fields.push(KeyValueField::new(FOREGROUND_FIELD, color));
    }
    if let Some(color) = accent {
        fields.push(KeyValueField::new(ACCENT_FIELD, color));
    }
    if fields.is_empty() {
        return Err(Error::InvalidValue(
            "no color specified; pass --background, --foreground, or --accent".to_string(),
        ));
    }

    let path = root.polybar_config();
    let mut doc = ConfigDocument::load(&path)?;
    let results = keyvalue::set_fields(&mut doc, &fields);

    let (updated, skipped): (Vec<_>, Vec<_>) = results.into_iter().partition(|r| r.updated);
    if updated.is_empty() {
        return Err(Error::NotFound(format!(
            "no matching color fields in {}",
            path.display()
        )));
    }
    doc.save()?;
    Ok(ColorsReport {
        file: path,
        updated: updated.into_iter().map(|r| r.key).collect(),
        skipped: skipped.into_iter().map(|r| r.key).collect(),
    })
}

/// Replace the polybar module list.
pub fn bar_modules(root: &ConfigRoot, module_list: &[String]) -> Result<PatchReport> {
    let list = module_list.join(" ");
    let path = root.polybar_config();
    let mut doc = ConfigDocument::load(&path)?;
    modules::set(&mut doc, MODULES_MARKER, MODULES_KEY, &list)?;
    doc.save()?;
    Ok(PatchReport {
        file: path,
        message: format!("Modules updated: {list}"),
    })
}

/// Seed starter configs for every managed component.
pub fn seed(root: &ConfigRoot, force: bool) -> Result<SeedReport> {
    let mut report = SeedReport {
        created: vec![],
        overwritten: vec![],
        skipped: vec![],
        backups: vec![],
    };
    for file in setup::seed(root, force)? {
        match file.action {
            SeedAction::Created => report.created.push(file.path),
            SeedAction::Overwritten(backup) => {
                report.overwritten.push(file.path);
                report.backups.push(backup);
            }
            SeedAction::Skipped => report.skipped.push(file.path),
        }
    }
    Ok(report)
}

/// Dump the current bspwm, sxhkd, and polybar configs.
pub fn show(root: &ConfigRoot) -> Result<ShowReport> {
    let targets = [
        ("bspwm", root.bspwmrc()),
        ("sxhkd", root.sxhkdrc()),
        ("polybar", root.polybar_config()),
    ];
    let mut sections = Vec::with_capacity(targets.len());
    for (name, file) in targets {
        let content = fs::read_to_string(&file)?;
        sections.push(ShowSection {
            name: name.to_string(),
            file,
            content,
        });
    }
    Ok(ShowReport { sections })
}
