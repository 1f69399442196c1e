use std::path::PathBuf;

use anyhow::Context;
use clap::Args;
use tagsdev_core::TagsdevConfig;
use tagsdev_docker::DockerClient;
use tagsdev_docker::client::{BuildImageOpts, RunContainerOpts};

#[derive(Debug, Args)]
pub struct UpArgs {
    /// Name of the Docker image (default: dev-tags-drive)
    #[arg(long)]
    pub image_name: Option<String>,

    /// Tag of the Docker image (default: latest)
    #[arg(long)]
    pub image_tag: Option<String>,

    /// Name of the Docker container (default: dev-tags-drive)
    #[arg(long)]
    pub container_name: Option<String>,

    /// Host port published to the container (default: 80)
    #[arg(long)]
    pub container_port: Option<u16>,

    /// Folder the bind mounts are resolved against (default: current directory)
    #[arg(long)]
    pub mount_folder: Option<PathBuf>,

    /// Build the image without running a container
    #[arg(long)]
    pub build_only: bool,
}

/// Build the image and, unless `--build-only`, start a container.
pub async fn up(args: UpArgs) -> anyhow::Result<()> {
    let project_dir = PathBuf::from(".");
    let config = TagsdevConfig::load(&project_dir)?;
    let docker = config.docker;
    let client = DockerClient::new();

    let image_name = args.image_name.unwrap_or(docker.image_name);
    let image_tag = args.image_tag.unwrap_or(docker.image_tag);

    println!("Building Docker image {image_name}:{image_tag}...");
    client
        .build_image(&BuildImageOpts {
            image_name: image_name.clone(),
            image_tag: image_tag.clone(),
            dockerfile: docker.dockerfile,
        })
        .await?;

    if args.build_only {
        println!("Skipping container run (--build-only)");
        return Ok(());
    }

    let mount_folder = match args.mount_folder {
        Some(folder) => std::fs::canonicalize(&folder)
            .with_context(|| format!("can't resolve mount folder {}", folder.display()))?,
        None => std::env::current_dir().context("can't resolve current directory")?,
    };

    let container_name = args.container_name.unwrap_or(docker.container_name);

    println!("Starting Docker container {container_name}...");
    let id = client
        .run_container(&RunContainerOpts {
            image_name,
            image_tag,
            container_name,
            host_port: args.container_port.unwrap_or(docker.host_port),
            container_port: docker.container_port,
            mount_folder,
            mounts: docker.mounts,
        })
        .await?;

    println!("Started: {id}");
    Ok(())
}
