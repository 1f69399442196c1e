use tagsdev_core::{Mount, TagsdevConfig};
use tempfile::TempDir;

#[test]
fn load_returns_defaults_when_no_config_file() {
    let tmp = TempDir::new().unwrap();
    let config = TagsdevConfig::load(tmp.path()).unwrap();

    assert_eq!(config.docker.image_name, "dev-tags-drive");
    assert_eq!(config.docker.image_tag, "latest");
    assert_eq!(config.docker.container_name, "dev-tags-drive");
    assert_eq!(config.docker.host_port, 80);
    assert_eq!(config.docker.container_port, 80);
    assert_eq!(config.docker.dockerfile, "scripts/docker/Dockerfile");
    assert_eq!(
        config.docker.mounts,
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
    );
    assert_eq!(config.backend.env_file, "scripts/run/run.env");
    assert_eq!(config.backend.command, vec!["go", "run", "-mod=vendor", "main.go"]);
    assert_eq!(config.backend.main, "main.go");
    assert_eq!(config.backend.output, "bin/tags-drive");
}

#[test]
fn load_parses_full_config() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[docker]
image_name = "tags-drive"
image_tag = "v1.2"
container_name = "tags-drive-prod"
host_port = 8080
container_port = 80
dockerfile = "Dockerfile"

[[docker.mounts]]
host = "configs"
container = "/app/configs"

[[docker.mounts]]
host = "data"
container = "/app/data"

[backend]
env_file = ".env"
command = ["./tags-drive"]
main = "cmd/tags-drive/main.go"
output = "bin/backend"
"#;
    std::fs::write(tmp.path().join("tagsdev.toml"), toml).unwrap();

    let config = TagsdevConfig::load(tmp.path()).unwrap();

    assert_eq!(config.docker.image_name, "tags-drive");
    assert_eq!(config.docker.image_tag, "v1.2");
    assert_eq!(config.docker.container_name, "tags-drive-prod");
    assert_eq!(config.docker.host_port, 8080);
    assert_eq!(config.docker.container_port, 80);
    assert_eq!(config.docker.dockerfile, "Dockerfile");
    assert_eq!(
        config.docker.mounts,
        vec![
            Mount {
                host: "configs".to_owned(),
                container: "/app/configs".to_owned(),
            },
            Mount {
                host: "data".to_owned(),
                container: "/app/data".to_owned(),
            },
        ]
    );
    assert_eq!(config.backend.env_file, ".env");
    assert_eq!(config.backend.command, vec!["./tags-drive"]);
    assert_eq!(config.backend.main, "cmd/tags-drive/main.go");
    assert_eq!(config.backend.output, "bin/backend");
}

#[test]
fn load_partial_config_fills_defaults() {
    let tmp = TempDir::new().unwrap();
    let toml = r#"
[docker]
host_port = 3000
"#;
    std::fs::write(tmp.path().join("tagsdev.toml"), toml).unwrap();

    let config = TagsdevConfig::load(tmp.path()).unwrap();

    assert_eq!(config.docker.host_port, 3000);
    // Defaults preserved
    assert_eq!(config.docker.image_name, "dev-tags-drive");
    assert_eq!(config.docker.container_port, 80);
    assert_eq!(config.backend.env_file, "scripts/run/run.env");
}

#[test]
fn load_invalid_toml_returns_parse_error() {
    let tmp = TempDir::new().unwrap();
    std::fs::write(tmp.path().join("tagsdev.toml"), "not valid {{{{ toml").unwrap();

    let result = TagsdevConfig::load(tmp.path());
    assert!(result.is_err());

    let err = result.unwrap_err().to_string();
    assert!(err.contains("failed to parse config"));
}
