use std::path::PathBuf;

use tagsdev_core::TagsdevConfig;

/// Compile the Go backend and install the binary.
pub async fn build(output: Option<String>) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = TagsdevConfig::load(&project_dir)?;

    let mut backend = config.backend;
    if let Some(output) = output {
        backend.output = output;
    }

    println!("Compiling backend ({})...", backend.main);
    let installed = tagsdev_backend::compile(&project_dir, &backend)?;

    println!("Installed: {}", installed.display());
    Ok(())
}
