use serde::{Deserialize, Serialize};

/// tagsdev.toml configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TagsdevConfig {
    #[serde(default)]
    pub docker: DockerConfig,
    #[serde(default)]
    pub backend: BackendConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DockerConfig {
    /// Docker image name
    #[serde(default = "default_image_name")]
    pub image_name: String,
    /// Docker image tag
    #[serde(default = "default_image_tag")]
    pub image_tag: String,
    /// Docker container name
    #[serde(default = "default_container_name")]
    pub container_name: String,
    /// Host port published to the container
    #[serde(default = "default_port")]
    pub host_port: u16,
    /// Port the backend listens on inside the container
    #[serde(default = "default_port")]
    pub container_port: u16,
    /// Dockerfile used for the image build, relative to the project dir
    #[serde(default = "default_dockerfile")]
    pub dockerfile: String,
    /// Bind mounts, host paths relative to the mount folder.
    /// The historical run scripts disagreed on these (var/var/data in one,
    /// configs/data in the other), so they are configuration rather than
    /// hard-coded.
    #[serde(default = "default_mounts")]
    pub mounts: Vec<Mount>,
}

/// One `-v host:container` bind mount.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Mount {
    pub host: String,
    pub container: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BackendConfig {
    /// Env file loaded before launching the backend
    #[serde(default = "default_env_file")]
    pub env_file: String,
    /// Command that runs the backend
    #[serde(default = "default_command")]
    pub command: Vec<String>,
    /// Entry point handed to `go build`
    #[serde(default = "default_main")]
    pub main: String,
    /// Where the compiled backend binary is installed
    #[serde(default = "default_output")]
    pub output: String,
}

impl Default for DockerConfig {
    fn default() -> Self {
        Self {
            image_name: default_image_name(),
            image_tag: default_image_tag(),
            container_name: default_container_name(),
            host_port: default_port(),
            container_port: default_port(),
            dockerfile: default_dockerfile(),
            mounts: default_mounts(),
        }
    }
}

impl Default for BackendConfig {
    fn default() -> Self {
        Self {
            env_file: default_env_file(),
            command: default_command(),
            main: default_main(),
            output: default_output(),
        }
    }
}

impl TagsdevConfig {
    /// Load from tagsdev.toml at the given path, or return defaults if not found.
    pub fn load(project_dir: &std::path::Path) -> crate::Result<Self> {
        let config_path = project_dir.join("tagsdev.toml");
        if config_path.exists() {
            let content =
                std::fs::read_to_string(&config_path).map_err(|e| crate::Error::ConfigLoad {
                    path: config_path.clone(),
                    source: e,
                })?;
            toml::from_str(&content).map_err(|e| crate::Error::ConfigParse {
                path: config_path,
                source: e,
            })
        } else {
            Ok(Self::default())
        }
    }
}

fn default_image_name() -> String {
    "dev-tags-drive".to_owned()
}

fn default_image_tag() -> String {
    "latest".to_owned()
}

fn default_container_name() -> String {
    "dev-tags-drive".to_owned()
}

fn default_port() -> u16 {
    80
}

fn default_dockerfile() -> String {
    "scripts/docker/Dockerfile".to_owned()
}

fn default_mounts() -> Vec<Mount> {
    vec![
        Mount {
            host: "var".to_owned(),
            container: "/app/var".to_owned(),
        },
        Mount {
            host: "var/data".to_owned(),
            container: "/app/data".to_owned(),
        },
    ]
}

fn default_env_file() -> String {
    "scripts/run/run.env".to_owned()
}

fn default_command() -> Vec<String> {
    vec![
        "go".to_owned(),
        "run".to_owned(),
        "-mod=vendor".to_owned(),
        "main.go".to_owned(),
    ]
}

fn default_main() -> String {
    "main.go".to_owned()
}

fn default_output() -> String {
    "bin/tags-drive".to_owned()
}
