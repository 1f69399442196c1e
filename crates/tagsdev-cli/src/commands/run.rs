use std::path::PathBuf;

use tagsdev_core::{TagsdevConfig, envfile};

/// Load the env file, then run the backend with the loaded pairs applied
/// to the child process.
pub async fn run(env_file: Option<PathBuf>, command: Vec<String>) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = TagsdevConfig::load(&project_dir)?;

    let env_file = env_file.unwrap_or_else(|| PathBuf::from(&config.backend.env_file));
    let envs = envfile::load(&env_file)?;

    let command = if command.is_empty() {
        config.backend.command
    } else {
        command
    };

    println!(
        "Running backend with {count} vars from {path}",
        count = envs.len(),
        path = env_file.display(),
    );
    tagsdev_backend::launch(&project_dir, &command, &envs)?;

    Ok(())
}
