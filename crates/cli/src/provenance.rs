//! Hull reports on disk with a `<stem>.provenance.json` sidecar.
//!
//! The sidecar summarizes the written report (algorithm, input and vertex
//! counts, enclosed area) next to the code revision, the call site that wrote
//! it, and the point-source parameters.

use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

use crate::report::HullReport;

#[derive(Serialize, Debug)]
struct Sidecar {
    code_rev: String,
    version: &'static str,
    /// `file:line` of the caller of `write_hull_report`.
    callsite: String,
    algo: &'static str,
    input_count: usize,
    vertex_count: usize,
    area: f64,
    params: Value,
    outputs: Vec<String>,
}

/// Write `report` to `out` and its provenance sidecar next to it.
///
/// Returns the sidecar path.
#[track_caller]
pub fn write_hull_report(out: &Path, report: &HullReport, params: Value) -> Result<PathBuf> {
    let callsite = Location::caller();
    if let Some(parent) = out.parent().filter(|p| !p.as_os_str().is_empty()) {
        fs::create_dir_all(parent)
            .with_context(|| format!("creating output dir {}", parent.display()))?;
    }
    fs::write(out, serde_json::to_vec_pretty(report)?)
        .with_context(|| format!("writing {}", out.display()))?;

    let sidecar = Sidecar {
        code_rev: code_rev(),
        version: hull2d::VERSION,
        callsite: format!("{}:{}", callsite.file(), callsite.line()),
        algo: report.algo,
        input_count: report.input_count,
        vertex_count: report.vertex_count(),
        area: report.area(),
        params,
        outputs: vec![out.display().to_string()],
    };
    let path = sidecar_path(out);
    fs::write(&path, serde_json::to_vec_pretty(&sidecar)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(path)
}

/// `dir/hull.json` → `dir/hull.provenance.json`.
fn sidecar_path(out: &Path) -> PathBuf {
    out.with_extension("provenance.json")
}

/// `GIT_COMMIT` (build time, then run time), else `git rev-parse HEAD`, else `unknown`.
pub fn code_rev() -> String {
    let from_env = option_env!("GIT_COMMIT")
        .map(str::to_string)
        .or_else(|| std::env::var("GIT_COMMIT").ok())
        .filter(|rev| !rev.is_empty());
    from_env
        .or_else(|| {
            let output = Command::new("git").args(["rev-parse", "HEAD"]).output().ok()?;
            output
                .status
                .success()
                .then(|| String::from_utf8_lossy(&output.stdout).trim().to_string())
        })
        .unwrap_or_else(|| "unknown".to_string())
}
