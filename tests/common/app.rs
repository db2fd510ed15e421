//! Test application factory for integration tests.

use std::path::PathBuf;
use std::process::Command;
use tempfile::TempDir;

use lsb_core::PixelGrid;
use lsbstego::imaging::save_grid;
use lsbstego::models::AppConfig;
use lsbstego::services::StegoService;

/// Service plus a scratch directory that outputs default into
pub struct TestApp {
    pub dir: TempDir,
    pub service: StegoService,
}

impl TestApp {
    /// Create a service whose default outputs live in a fresh temp dir
    pub fn new() -> Self {
        Self::with_optimize(false)
    }

    /// Same as [`TestApp::new`], toggling oxipng recompression
    pub fn with_optimize(optimize: bool) -> Self {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let mut config = AppConfig::default();
        config.output.stego = dir.path().join("stego_image.png");
        config.output.difference = dir.path().join("difference_image.png");
        config.output.optimize = optimize;
        Self {
            dir,
            service: StegoService::new(config),
        }
    }

    /// Path inside the scratch directory
    pub fn path(&self, name: &str) -> PathBuf {
        self.dir.path().join(name)
    }

    /// Save a grid as PNG inside the scratch directory
    pub fn write_png(&self, name: &str, grid: &PixelGrid) -> PathBuf {
        let path = self.path(name);
        save_grid(&path, grid, false).expect("Failed to write fixture PNG");
        path
    }

    /// Run the lsbstego binary with the scratch dir as working directory
    pub fn run_cli(&self, args: &[&str]) -> CliOutput {
        let output = Command::new(env!("CARGO_BIN_EXE_lsbstego"))
            .args(args)
            .current_dir(self.dir.path())
            .env_remove("LSBSTEGO_CONFIG")
            .env_remove("RUST_LOG")
            .output()
            .expect("Failed to run lsbstego");
        CliOutput {
            success: output.status.success(),
            stdout: String::from_utf8_lossy(&output.stdout).into_owned(),
            stderr: String::from_utf8_lossy(&output.stderr).into_owned(),
        }
    }

    /// Write a YAML config file into the scratch directory
    pub fn write_config(&self, yaml: &str) -> PathBuf {
        let path = self.path("lsbstego.yaml");
        std::fs::write(&path, yaml).expect("Failed to write config");
        path
    }
}

/// Captured output of a CLI invocation
pub struct CliOutput {
    pub success: bool,
    pub stdout: String,
    pub stderr: String,
}

impl CliOutput {
    /// Parse stdout as JSON
    pub fn json(&self) -> serde_json::Value {
        serde_json::from_str(&self.stdout)
            .unwrap_or_else(|e| panic!("stdout is not JSON ({e}): {}", self.stdout))
    }
}
