//! Common test utilities for integration tests
//!
//! Each test gets its own temporary directory holding the store, and the
//! binary is run with that directory as its working directory.

#![allow(dead_code)]

use std::path::PathBuf;
use std::process::{Command, Output};
use tempfile::TempDir;

/// Test application wrapper around the `fitcalc` binary
pub struct TestApp {
    pub dir: TempDir,
}

impl TestApp {
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp dir"),
        }
    }

    /// Path of the store file this app writes to
    pub fn store_path(&self) -> PathBuf {
        self.dir.path().join("store.json")
    }

    /// Run the binary with the given arguments
    pub fn run(&self, args: &[&str]) -> (i32, String, String) {
        let output: Output = Command::new(env!("CARGO_BIN_EXE_fitcalc"))
            .args(args)
            .current_dir(self.dir.path())
            .env("FITCALC__STORAGE__PATH", self.store_path())
            .env("RUST_LOG", "off")
            .env_remove("RUST_ENV")
            .output()
            .expect("Failed to run fitcalc");

        (
            output.status.code().unwrap_or(-1),
            String::from_utf8_lossy(&output.stdout).to_string(),
            String::from_utf8_lossy(&output.stderr).to_string(),
        )
    }

    /// Read the raw store document
    pub fn store_json(&self) -> serde_json::Value {
        let content = std::fs::read_to_string(self.store_path()).expect("Store not written");
        serde_json::from_str(&content).expect("Store is not JSON")
    }
}

/// Arguments for the reference male form (metric)
pub const REFERENCE_FORM: &[&str] = &[
    "--gender", "male",
    "--age", "25",
    "--goal", "maintain",
    "--activity", "1.55",
    "--height", "180",
    "--weight", "75",
    "--body-fat", "15",
    "--muscle", "35",
];

/// `calc` followed by the reference form and any extra flags
pub fn calc_args<'a>(extra: &[&'a str]) -> Vec<&'a str> {
    let mut args = vec!["calc"];
    args.extend_from_slice(REFERENCE_FORM);
    args.extend_from_slice(extra);
    args
}
