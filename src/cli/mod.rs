//! CLI argument definitions for wmtune.

use clap::{Parser, Subcommand};

/// Wmtune - seed and tune a bspwm desktop environment.
///
/// Run `wmt seed` on a fresh machine, then tune individual settings with
/// `wmt gap`, `wmt hotkey`, `wmt bar`, etc.
#[derive(Parser, Debug)]
#[command(name = "wmt")]
#[command(author, version, about = "A CLI tool for seeding and tuning a bspwm desktop", long_about = None)]
pub struct Cli {
    /// Output in JSON instead of human-readable format
    #[arg(long, global = true)]
    pub json: bool,

    /// Config root to operate on instead of ~/.config.
    /// Can also be set via WMT_CONFIG_DIR environment variable.
    #[arg(short = 'C', long = "config-dir", global = true, env = "WMT_CONFIG_DIR")]
    pub config_dir: Option<std::path::PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Top-level commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Set the bspwm window gap (pixels)
    Gap {
        /// New gap size in pixels (integer)
        pixels: String,
    },

    /// Set the bspwm window border width (pixels)
    Border {
        /// New border width in pixels (integer)
        pixels: String,
    },

    /// Sxhkd key binding management
    Hotkey {
        #[command(subcommand)]
        command: HotkeyCommands,
    },

    /// Polybar appearance and module configuration
    Bar {
        #[command(subcommand)]
        command: BarCommands,
    },

    /// Create config directories and write starter configs
    /// (bspwm, sxhkd, polybar, rofi, picom)
    Seed {
        /// Overwrite existing configs (a timestamped backup is kept)
        #[arg(long)]
        force: bool,
    },

    /// Print the current bspwm, sxhkd, and polybar configs
    Show,
}

/// Hotkey subcommands
#[derive(Subcommand, Debug)]
pub enum HotkeyCommands {
    /// Rebind an existing action to a new key chord
    Rename {
        /// Substring identifying the action line (e.g. "rofi")
        action: String,
        /// New trigger line (e.g. "super + p")
        trigger: String,
    },

    /// Add a new binding at the end of sxhkdrc
    Add {
        /// Trigger line (e.g. "super + t")
        trigger: String,
        /// Action line (e.g. "thunar")
        action: String,
    },

    /// Remove a binding (trigger and action lines) by action substring
    Remove {
        /// Substring identifying the action line
        action: String,
    },
}

/// Bar subcommands
#[derive(Subcommand, Debug)]
pub enum BarCommands {
    /// Set the bar font
    Font {
        /// Font name (e.g. "Fira Code")
        name: String,
    },

    /// Set bar colors; unmatched fields are reported and skipped
    Colors {
        /// Background color (e.g. "#1d1f21")
        #[arg(long)]
        background: Option<String>,

        /// Foreground color (e.g. "#c5c8c6")
        #[arg(long)]
        foreground: Option<String>,

        /// Accent color (e.g. "#81a2be")
        #[arg(long)]
        accent: Option<String>,
    },

    /// Replace the module list (written as modules-center)
    Modules {
        /// Module names (e.g. wlan eth volume battery)
        #[arg(required = true)]
        modules: Vec<String>,
    },
}
