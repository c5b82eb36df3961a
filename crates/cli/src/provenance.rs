//! Sidecar metadata written next to every exported trace.
//!
//! `<trace>.provenance.json` records the code revision, the library version,
//! the call site and the animation parameters that produced the file.

use anyhow::{Context, Result};
use serde_json::{json, Value};
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters recorded alongside an exported trace.
pub struct Payload {
    pub params: Value,
    pub notes: Vec<String>,
}

impl Payload {
    pub fn new(params: Value) -> Self {
        Self {
            params,
            notes: Vec::new(),
        }
    }
}

/// Write the sidecar for `trace` and return its path.
#[track_caller]
pub fn write_sidecar<P: AsRef<Path>>(trace: P, payload: Payload) -> Result<PathBuf> {
    let trace = trace.as_ref();
    let path = sidecar_path(trace);
    if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }

    let at = Location::caller();
    let doc = json!({
        "code_rev": current_git_rev(),
        "lib_version": arcgauge::VERSION,
        "callsite": { "file": at.file(), "line": at.line() },
        "notes": payload.notes,
        "params": payload.params,
        "outputs": [trace.to_string_lossy()],
    });
    fs::write(&path, serde_json::to_vec_pretty(&doc)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

fn sidecar_path(trace: &Path) -> PathBuf {
    let stem = trace
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_else(|| "trace".to_string());
    trace.with_file_name(format!("{stem}.provenance.json"))
}

/// Commit hash from `GIT_COMMIT` (build or run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|s| !s.is_empty());
    if let Some(rev) = from_env {
        return rev;
    }
    Command::new("git")
        .args(["rev-parse", "HEAD"])
        .output()
        .ok()
        .filter(|out| out.status.success())
        .and_then(|out| String::from_utf8(out.stdout).ok())
        .map(|s| s.trim().to_string())
        .unwrap_or_else(|| "unknown".to_string())
}
