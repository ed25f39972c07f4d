//! Target-file locations and per-dialect pattern constants.
//!
//! Every patcher call receives its file path and pattern/key constants from
//! here; nothing in the crate keeps process-wide mutable state. The config
//! root resolves to `~/.config` and can be overridden with `-C/--config-dir`
//! or the `WMT_CONFIG_DIR` environment variable (used by the tests for
//! isolation).

use std::path::{Path, PathBuf};

use crate::{Error, Result};

/// bspwmrc directive for the gap between windows.
pub const GAP_DIRECTIVE: &str = "bspc config window_gap";
/// bspwmrc directive for the window border width.
pub const BORDER_DIRECTIVE: &str = "bspc config border_width";

/// Polybar `key = value` fields as (key token, exclusion token) pairs.
/// The exclusion token rejects suffixed sibling keys, so patching `font`
/// never touches `font-0` and patching `background` never touches
/// `background-alt`.
pub const FONT_FIELD: (&str, &str) = ("font", "font-");
pub const BACKGROUND_FIELD: (&str, &str) = ("background", "background-");
pub const FOREGROUND_FIELD: (&str, &str) = ("foreground", "foreground-");
pub const ACCENT_FIELD: (&str, &str) = ("accent", "accent-");

/// Marker used to locate the polybar module-list line. Any module slot
/// matches; the replacement is always written under [`MODULES_KEY`].
pub const MODULES_MARKER: &str = "modules-";
pub const MODULES_KEY: &str = "modules-center";

/// Resolved config root with the paths of every managed file.
#[derive(Debug, Clone)]
pub struct ConfigRoot {
    root: PathBuf,
}

impl ConfigRoot {
    /// Resolve the config root: explicit override (flag or env, handled by
    /// clap) first, then the platform config directory.
    pub fn resolve(explicit: Option<PathBuf>) -> Result<Self> {
        let root = match explicit {
            Some(path) => path,
            None => dirs::config_dir()
                .ok_or_else(|| Error::Other("could not determine config directory".to_string()))?,
        };
        Ok(Self { root })
    }

    pub fn path(&self) -> &Path {
        &self.root
    }

    /// Sibling directory holding timestamped backups of overwritten files,
    /// e.g. `~/.config_backup` next to `~/.config`.
    pub fn backup_dir(&self) -> PathBuf {
        let name = self
            .root
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_else(|| "config".to_string());
        self.root.with_file_name(format!("{name}_backup"))
    }

    pub fn bspwm_dir(&self) -> PathBuf {
        self.root.join("bspwm")
    }

    pub fn sxhkd_dir(&self) -> PathBuf {
        self.root.join("sxhkd")
    }

    pub fn polybar_dir(&self) -> PathBuf {
        self.root.join("polybar")
    }

    pub fn rofi_dir(&self) -> PathBuf {
        self.root.join("rofi")
    }

    pub fn picom_dir(&self) -> PathBuf {
        self.root.join("picom")
    }

    pub fn bspwmrc(&self) -> PathBuf {
        self.bspwm_dir().join("bspwmrc")
    }

    pub fn sxhkdrc(&self) -> PathBuf {
        self.sxhkd_dir().join("sxhkdrc")
    }

    pub fn polybar_config(&self) -> PathBuf {
        self.polybar_dir().join("config")
    }

    pub fn rofi_config(&self) -> PathBuf {
        self.rofi_dir().join("config.rasi")
    }

    pub fn picom_config(&self) -> PathBuf {
        self.picom_dir().join("picom.conf")
    }
}
