use super::*;

#[derive(Deserialize, Debug)]
#[serde(deny_unknown_fields)]
pub struct General {
    #[serde(default = "listen")]
    pub(super) listen: String,

    // path the exposition is served on
    #[serde(default = "path")]
    pub(super) path: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            listen: listen(),
            path: path(),
        }
    }
}

impl General {
    pub fn check(&self) -> Result<(), ConfigError> {
        self.listen()?;

        if !self.path.starts_with('/') || self.path == "/" {
            return Err(ConfigError::Path(self.path.clone()));
        }

        Ok(())
    }

    pub fn listen(&self) -> Result<SocketAddr, ConfigError> {
        resolve(&self.listen)
    }

    pub fn path(&self) -> &str {
        &self.path
    }
}
