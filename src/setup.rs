//! Seeding of fresh config files with timestamped backups.
//!
//! `seed` creates the config directories for every managed component and
//! writes a starter config into each. An existing file is never touched
//! unless `force` is set, in which case it is first copied into the backup
//! directory as `<name>.<timestamp>.bak`.

use std::fs;
use std::path::{Path, PathBuf};

use crate::Result;
use crate::config::ConfigRoot;

pub const BSPWMRC_TEMPLATE: &str = "\
#!/bin/bash
sxhkd &
polybar bspwm &
picom -b &
exec bspwm
";

pub const SXHKDRC_TEMPLATE: &str = "\
super + Return
    alacritty
super + Shift + q
    bspc window -c
super + {h,j,k,l}
    bspc node -{focus,shift} {west,south,north,east}
super + {Left,Down,Up,Right}
    bspc node -{focus,shift} {west,south,north,east}
super + d
    rofi -show drun
";

pub const POLYBAR_TEMPLATE: &str = "\
[colors]
background = #1d1f21
background-alt = #282a2e
foreground = #c5c8c6
foreground-alt = #707880
accent = #81a2be

[bar/bspwm]
font = monospace
font-0 = monospace:size=10
modules-left = bspwm
modules-right = date
";

pub const ROFI_TEMPLATE: &str = "rofi.theme: Arc-Dark\n";

pub const PICOM_TEMPLATE: &str = "\
backend = \"glx\";
vsync = true;
";

/// What happened to one seeded file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SeedAction {
    Created,
    /// Existing file was backed up (to the given path) and overwritten.
    Overwritten(PathBuf),
    /// Existing file left alone; rerun with force to overwrite.
    Skipped,
}

#[derive(Debug, Clone)]
pub struct SeededFile {
    pub path: PathBuf,
    pub action: SeedAction,
}

/// Create config directories and write starter configs for every managed
/// component.
pub fn seed(root: &ConfigRoot, force: bool) -> Result<Vec<SeededFile>> {
    let files = [
        (root.bspwmrc(), BSPWMRC_TEMPLATE),
        (root.sxhkdrc(), SXHKDRC_TEMPLATE),
        (root.polybar_config(), POLYBAR_TEMPLATE),
        (root.rofi_config(), ROFI_TEMPLATE),
        (root.picom_config(), PICOM_TEMPLATE),
    ];

    let mut report = Vec::with_capacity(files.len());
    for (path, content) in files {
        let action = write_with_backup(&path, content, &root.backup_dir(), force)?;
        report.push(SeededFile { path, action });
    }
    Ok(report)
}

/// Write `content` to `path`, backing up any existing file first.
///
/// Without `force`, an existing file is reported as skipped and left
/// untouched.
fn write_with_backup(
    path: &Path,
    content: &str,
    backup_dir: &Path,
    force: bool,
) -> Result<SeedAction> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    if !path.is_file() {
        fs::write(path, content)?;
        return Ok(SeedAction::Created);
    }
    if !force {
        return Ok(SeedAction::Skipped);
    }

    fs::create_dir_all(backup_dir)?;
    let backup_path = backup_dir.join(backup_name(path));
    fs::copy(path, &backup_path)?;
    fs::write(path, content)?;
    Ok(SeedAction::Overwritten(backup_path))
}

/// `<filename>.<YYYYmmddHHMMSS>.bak`
fn backup_name(path: &Path) -> String {
    let timestamp = chrono::Local::now().format("%Y%m%d%H%M%S");
    let filename = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_else(|| "config".to_string());
    format!("{filename}.{timestamp}.bak")
}
