use std::path::{Path, PathBuf};
use std::process::Command;

use tagsdev_core::BackendConfig;

/// Compile the Go backend and install the binary at the configured output
/// path. Returns the installed path.
///
/// The build goes to a temporary sibling first so a failed compile never
/// clobbers a working binary.
pub fn compile(project_dir: &Path, config: &BackendConfig) -> Result<PathBuf, BuildError> {
    let output = project_dir.join(&config.output);
    let staging = staging_path(&output);

    if let Some(parent) = output.parent() {
        std::fs::create_dir_all(parent).map_err(|e| BuildError::CreateDir {
            path: parent.to_path_buf(),
            source: e,
        })?;
    }

    let status = Command::new("go")
        .arg("build")
        .arg("-mod=vendor")
        .arg("-o")
        .arg(&staging)
        .arg(&config.main)
        .current_dir(project_dir)
        .status()
        .map_err(|e| BuildError::GoNotFound { source: e })?;

    if !status.success() {
        return Err(BuildError::GoBuildFailed {
            main: config.main.clone(),
            detail: status.to_string(),
        });
    }

    install(&staging, &output)?;
    Ok(output)
}

/// Move a freshly built binary into place.
///
/// A stale binary at the destination is deleted first, best-effort: a
/// failed delete is only a warning. The rename itself is fatal.
pub fn install(built: &Path, output: &Path) -> Result<(), BuildError> {
    if output.exists() {
        if let Err(e) = std::fs::remove_file(output) {
            tracing::warn!(path = %output.display(), error = %e, "can't delete stale binary");
        }
    }

    std::fs::rename(built, output).map_err(|e| BuildError::Install {
        from: built.to_path_buf(),
        to: output.to_path_buf(),
        source: e,
    })
}

fn staging_path(output: &Path) -> PathBuf {
    let mut name = output
        .file_name()
        .map(|n| n.to_os_string())
        .unwrap_or_default();
    name.push(".tmp");
    output.with_file_name(name)
}

#[derive(Debug, thiserror::Error)]
pub enum BuildError {
    #[error("go toolchain not found — install: https://go.dev/dl/")]
    GoNotFound { source: std::io::Error },

    #[error("go build {main} failed: {detail}")]
    GoBuildFailed { main: String, detail: String },

    #[error("failed to create output directory {path}")]
    CreateDir {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to move {from} to {to}")]
    Install {
        from: PathBuf,
        to: PathBuf,
        source: std::io::Error,
    },
}
