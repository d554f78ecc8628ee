use anyhow::{Context, Result};
use serde::Serialize;
use serde_json::Value;
use std::ffi::OsString;
use std::fs;
use std::panic::Location;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Sidecar describing how a render artifact was produced.
#[derive(Debug, Serialize)]
pub struct Provenance {
    pub code_rev: String,
    pub library: &'static str,
    pub command: &'static str,
    pub callsite: Callsite,
    pub params: Value,
    pub outputs: Vec<String>,
}

#[derive(Debug, Serialize)]
pub struct Callsite {
    pub file: &'static str,
    pub line: u32,
}

impl Provenance {
    #[track_caller]
    pub fn new(command: &'static str, params: Value) -> Self {
        let callsite = Location::caller();
        Self {
            code_rev: current_git_rev(),
            library: spirograph::VERSION,
            command,
            callsite: Callsite {
                file: callsite.file(),
                line: callsite.line(),
            },
            params,
            outputs: Vec::new(),
        }
    }
}

/// Write `<artifact-stem>.provenance.json` next to `artifact`.
pub fn write_sidecar<P: AsRef<Path>>(artifact: P, mut provenance: Provenance) -> Result<PathBuf> {
    let artifact = artifact.as_ref();
    let path = provenance_path(artifact);
    provenance
        .outputs
        .push(artifact.to_string_lossy().into_owned());
    fs::write(&path, serde_json::to_vec_pretty(&provenance)?)
        .with_context(|| format!("writing {}", path.display()))?;
    tracing::debug!(path = %path.display(), "provenance written");
    Ok(path)
}

fn provenance_path(artifact: &Path) -> PathBuf {
    let mut name = artifact
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_else(|| OsString::from("artifact"));
    name.push(".provenance.json");
    artifact.with_file_name(name)
}

/// Commit of the build (`GIT_COMMIT` at compile or run time), else `git rev-parse`.
pub fn current_git_rev() -> String {
    if let Some(rev) = option_env!("GIT_COMMIT").filter(|s| !s.is_empty()) {
        return rev.to_string();
    }
    if let Some(rev) = std::env::var("GIT_COMMIT").ok().filter(|s| !s.is_empty()) {
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
