use std::path::PathBuf;

use tagsdev_core::Mount;

use crate::docker::DockerError;
use crate::executor::{DockerExecutor, RealExecutor};

/// Docker operations client, parameterized over the executor for testability.
pub struct DockerClient<E: DockerExecutor = RealExecutor> {
    executor: E,
}

impl DockerClient<RealExecutor> {
    pub fn new() -> Self {
        Self {
            executor: RealExecutor,
        }
    }
}

impl Default for DockerClient<RealExecutor> {
    fn default() -> Self {
        Self::new()
    }
}

/// Arguments for `docker build`.
#[derive(Debug, Clone)]
pub struct BuildImageOpts {
    pub image_name: String,
    pub image_tag: String,
    pub dockerfile: String,
}

/// Arguments for `docker run`.
#[derive(Debug, Clone)]
pub struct RunContainerOpts {
    pub image_name: String,
    pub image_tag: String,
    pub container_name: String,
    pub host_port: u16,
    pub container_port: u16,
    /// Folder the relative mount host paths are resolved against.
    pub mount_folder: PathBuf,
    pub mounts: Vec<Mount>,
}

impl<E: DockerExecutor> DockerClient<E> {
    pub fn with_executor(executor: E) -> Self {
        Self { executor }
    }

    // ── Image build ──

    /// `docker build -t name:tag -f dockerfile .`, run in the project root
    /// with output streamed through.
    pub async fn build_image(&self, opts: &BuildImageOpts) -> Result<(), DockerError> {
        let image_ref = format!("{}:{}", opts.image_name, opts.image_tag);

        self.executor
            .exec_streaming(&[
                "build".to_owned(),
                "-t".to_owned(),
                image_ref,
                "-f".to_owned(),
                opts.dockerfile.clone(),
                ".".to_owned(),
            ])
            .await
    }

    // ── Container run ──

    /// `docker run -d --rm` with the configured name, port mapping, and
    /// bind mounts. Returns the container ID the daemon prints.
    pub async fn run_container(&self, opts: &RunContainerOpts) -> Result<String, DockerError> {
        let mut args = vec![
            "run".to_owned(),
            "-d".to_owned(),
            "--rm".to_owned(),
            "--name".to_owned(),
            opts.container_name.clone(),
            "-p".to_owned(),
            format!("{}:{}", opts.host_port, opts.container_port),
        ];

        for mount in &opts.mounts {
            let host = opts.mount_folder.join(&mount.host);
            args.push("-v".to_owned());
            args.push(format!("{}:{}", host.display(), mount.container));
        }

        args.push(format!("{}:{}", opts.image_name, opts.image_tag));

        let output = self.executor.exec(&args).await?;
        Ok(output.trim().to_owned())
    }
}
