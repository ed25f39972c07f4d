//! Wmtune - seed and tune a bspwm desktop environment.
//!
//! This library provides the core functionality for the `wmt` CLI tool:
//! in-place patching of line-oriented config files (bspwmrc directives,
//! sxhkdrc key bindings, polybar key=value assignments) and seeding of
//! fresh config templates with backups.

pub mod cli;
pub mod commands;
pub mod config;
pub mod patch;
pub mod setup;

/// Library-level error type for wmtune operations.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Invalid value: {0}")]
    InvalidValue(String),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for wmtune operations.
pub type Result<T> = std::result::Result<T, Error>;
