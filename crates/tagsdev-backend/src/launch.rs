use std::path::Path;
use std::process::Command;

/// Run the backend command with the given extra environment, stdio
/// inherited, and wait for it to exit.
///
/// The env pairs are applied to the child only; the parent's environment
/// table is never mutated. Spawn failure and a non-zero exit are distinct
/// errors so callers can tell "command not found" from "command failed".
pub fn launch(
    project_dir: &Path,
    command: &[String],
    envs: &[(String, String)],
) -> Result<(), LaunchError> {
    let Some((program, args)) = command.split_first() else {
        return Err(LaunchError::EmptyCommand);
    };

    let status = Command::new(program)
        .args(args)
        .current_dir(project_dir)
        .envs(envs.iter().map(|(k, v)| (k.as_str(), v.as_str())))
        .status()
        .map_err(|e| LaunchError::Spawn {
            program: program.clone(),
            source: e,
        })?;

    if status.success() {
        return Ok(());
    }

    match status.code() {
        Some(code) => Err(LaunchError::Exited {
            program: program.clone(),
            code,
        }),
        // No exit code means the child died from a signal, i.e. the user
        // interrupted the run. Same outcome as Ctrl-C under the old
        // run script.
        None => Ok(()),
    }
}

#[derive(Debug, thiserror::Error)]
pub enum LaunchError {
    #[error("backend command is empty")]
    EmptyCommand,

    #[error("can't launch {program}")]
    Spawn {
        program: String,
        source: std::io::Error,
    },

    #[error("{program} exited with code {code}")]
    Exited { program: String, code: i32 },
}
