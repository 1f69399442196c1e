use std::path::PathBuf;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("failed to load config from {path}")]
    ConfigLoad {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to parse config at {path}")]
    ConfigParse {
        path: PathBuf,
        source: toml::de::Error,
    },

    // ── Env file ──
    #[error("can't open env file {path}")]
    EnvFileOpen {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("malformed line {line} in {path}: expected KEY=VALUE, got {content:?}")]
    EnvFileMalformed {
        path: PathBuf,
        line: usize,
        content: String,
    },
}
