pub mod client;
pub mod docker;
pub mod executor;

pub use client::{BuildImageOpts, DockerClient, RunContainerOpts};
pub use docker::DockerError;
pub use executor::{DockerExecutor, RealExecutor};
