//! Common test utilities for wmtune integration tests.
//!
//! Provides `TestEnv` for isolated test environments that don't touch the
//! user's real `~/.config` directory.

#![allow(dead_code)]

use assert_cmd::Command;
use std::fs;
use std::path::{Path, PathBuf};
pub use tempfile::TempDir;

/// A test environment with an isolated config root.
///
/// The config root lives at `<tempdir>/config`, so seed backups land inside
/// the temp directory (at `<tempdir>/config_backup`) and get cleaned up with
/// it. The `wmt()` method returns a `Command` with `WMT_CONFIG_DIR` set
/// per-invocation, making tests parallel-safe.
pub struct TestEnv {
    pub dir: TempDir,
}

impl TestEnv {
    /// Create a new test environment with an empty config root.
    pub fn new() -> Self {
        let env = Self {
            dir: TempDir::new().unwrap(),
        };
        fs::create_dir_all(env.config_root()).unwrap();
        env
    }

    /// Create a new test environment and seed starter configs into it.
    pub fn seeded() -> Self {
        let env = Self::new();
        env.wmt().arg("seed").assert().success();
        env
    }

    /// Get a Command for the wmt binary with the isolated config root.
    pub fn wmt(&self) -> Command {
        let mut cmd = Command::new(env!("CARGO_BIN_EXE_wmt"));
        cmd.env("WMT_CONFIG_DIR", self.config_root());
        cmd
    }

    /// The isolated config root (`~/.config` stand-in).
    pub fn config_root(&self) -> PathBuf {
        self.dir.path().join("config")
    }

    /// Where seed backups are written.
    pub fn backup_dir(&self) -> PathBuf {
        self.dir.path().join("config_backup")
    }

    /// Write a config file under the config root, creating parent dirs.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.config_root().join(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read a config file under the config root.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.config_root().join(rel)).unwrap()
    }

    pub fn exists(&self, rel: &str) -> bool {
        self.config_root().join(rel).is_file()
    }
}

impl Default for TestEnv {
    fn default() -> Self {
        Self::new()
    }
}

/// Count the lines of a file the way the patchers see them.
pub fn line_count(path: &Path) -> usize {
    fs::read_to_string(path).unwrap().lines().count()
}
