//! Container packaging
//!
//! Runs the OS conversion tool once to fold the iconset directory into a
//! `.icns` bundle. Success is judged solely by the tool's exit status, and
//! stderr is captured for the failure report. A packaging failure never
//! aborts the run, so it surfaces as a status value rather than an error.

use std::path::{Path, PathBuf};
use std::process::Command;

/// Default conversion tool, shipped with macOS.
const ICONUTIL: &str = "iconutil";

/// Outcome of the single conversion attempt.
#[derive(Debug, Clone, PartialEq)]
pub enum PackageStatus {
    /// The `.icns` bundle was written.
    Packaged,
    /// The tool was missing, failed to spawn, or exited non-zero.
    Failed { detail: String },
}

/// Wraps the conversion tool invocation.
#[derive(Debug, Clone)]
pub struct Packager {
    tool: PathBuf,
}

impl Packager {
    pub fn new() -> Self {
        Self::with_tool(ICONUTIL)
    }

    /// Use a specific tool binary instead of `iconutil` from PATH.
    pub fn with_tool(tool: impl Into<PathBuf>) -> Self {
        Self { tool: tool.into() }
    }

    /// Convert `iconset_dir` into an `.icns` bundle at `icns_path`.
    pub fn package(&self, iconset_dir: &Path, icns_path: &Path) -> PackageStatus {
        let tool = if self.tool.exists() {
            self.tool.clone()
        } else {
            match which::which(&self.tool) {
                Ok(path) => path,
                Err(e) => {
                    return PackageStatus::Failed {
                        detail: format!("{} not found: {}", self.tool.display(), e),
                    }
                }
            }
        };

        tracing::debug!(
            tool = %tool.display(),
            dir = %iconset_dir.display(),
            "running icns conversion"
        );

        let output = match Command::new(&tool)
            .arg("-c")
            .arg("icns")
            .arg(iconset_dir)
            .arg("-o")
            .arg(icns_path)
            .output()
        {
            Ok(output) => output,
            Err(e) => {
                return PackageStatus::Failed {
                    detail: format!("failed to launch {}: {}", tool.display(), e),
                }
            }
        };

        if output.status.success() {
            PackageStatus::Packaged
        } else {
            let stderr = String::from_utf8_lossy(&output.stderr).trim().to_string();
            let detail = if stderr.is_empty() {
                format!("{} exited with {}", tool.display(), output.status)
            } else {
                stderr
            };
            PackageStatus::Failed { detail }
        }
    }
}

impl Default for Packager {
    fn default() -> Self {
        Self::new()
    }
}
