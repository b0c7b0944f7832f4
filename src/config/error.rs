use std::path::PathBuf;

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("unable to read config file {path:?}: {source}")]
    Read {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("failed to parse config file: {0}")]
    Parse(#[from] toml::de::Error),
    #[error("bad listen address: {addr}")]
    Listen {
        addr: String,
        source: Option<std::io::Error>,
    },
    #[error("metrics path must start with '/' and not be the root: {0}")]
    Path(String),
    #[error("no command configured for the {0} report")]
    EmptyCommand(&'static str),
}
