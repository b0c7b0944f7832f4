use serde::Deserialize;

use std::net::{SocketAddr, ToSocketAddrs};
use std::path::{Path, PathBuf};

mod error;
mod general;
mod log;
mod reports;

pub use error::ConfigError;
pub use general::General;
pub use log::{Level, Log};
pub use reports::Reports;

fn listen() -> String {
    "0.0.0.0:9000".into()
}

fn path() -> String {
    "/metrics".into()
}

fn pmd_stats() -> Vec<String> {
    vec!["ovs-appctl".into(), "dpif-netdev/pmd-stats-show".into()]
}

fn coverage() -> Vec<String> {
    vec!["ovs-appctl".into(), "coverage/show".into()]
}

#[derive(Deserialize, Default, Debug)]
#[serde(deny_unknown_fields)]
pub struct Config {
    #[serde(default)]
    general: General,
    #[serde(default)]
    log: Log,
    #[serde(default)]
    reports: Reports,
}

impl Config {
    pub fn load(path: &dyn AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: PathBuf::from(path),
            source,
        })?;

        let config: Config = toml::from_str(&content)?;

        config.check()?;

        Ok(config)
    }

    pub fn check(&self) -> Result<(), ConfigError> {
        self.general.check()?;
        self.reports.check()
    }

    pub fn general(&self) -> &General {
        &self.general
    }

    pub fn log(&self) -> &Log {
        &self.log
    }

    pub fn reports(&self) -> &Reports {
        &self.reports
    }

    /// Applies command line overrides on top of the file values.
    pub fn apply_overrides(
        &mut self,
        listen: Option<&str>,
        path: Option<&str>,
        level: Option<Level>,
    ) -> Result<(), ConfigError> {
        if let Some(listen) = listen {
            self.general.listen = listen.to_string();
        }

        if let Some(path) = path {
            self.general.path = path.to_string();
        }

        if let Some(level) = level {
            self.log.level = level;
        }

        self.check()
    }
}

fn resolve(addr: &str) -> Result<SocketAddr, ConfigError> {
    // accept the Go-style ":9000" shorthand for all interfaces
    let addr = if addr.starts_with(':') {
        format!("0.0.0.0{addr}")
    } else {
        addr.to_string()
    };

    addr.to_socket_addrs()
        .map_err(|source| ConfigError::Listen {
            addr: addr.clone(),
            source: Some(source),
        })?
        .next()
        .ok_or(ConfigError::Listen { addr, source: None })
}

#[cfg(test)]
mod tests {
    use super::*;

    use std::io::Write;

    #[test]
    fn defaults() {
        let config = Config::default();

        assert_eq!(
            config.general().listen().unwrap(),
            "0.0.0.0:9000".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.general().path(), "/metrics");
        assert_eq!(config.log().level(), Level::Info);
        assert_eq!(config.reports().pmd_stats(), ["ovs-appctl", "dpif-netdev/pmd-stats-show"]);
        assert_eq!(config.reports().coverage(), ["ovs-appctl", "coverage/show"]);
        assert!(config.check().is_ok());
    }

    #[test]
    fn empty_file_is_default() {
        let config: Config = toml::from_str("").unwrap();
        assert_eq!(config.general().path(), "/metrics");
    }

    #[test]
    fn load_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(
            file,
            r#"
[general]
listen = "127.0.0.1:9100"
path = "/ovs"

[log]
level = "debug"

[reports]
pmd_stats = ["ovs-appctl", "-t", "/var/run/openvswitch/ovs-vswitchd.ctl", "dpif-netdev/pmd-stats-show"]
"#
        )
        .unwrap();

        let config = Config::load(&file.path()).unwrap();

        assert_eq!(
            config.general().listen().unwrap(),
            "127.0.0.1:9100".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.general().path(), "/ovs");
        assert_eq!(config.log().level(), Level::Debug);
        assert_eq!(config.reports().pmd_stats().len(), 4);
        assert_eq!(config.reports().coverage(), ["ovs-appctl", "coverage/show"]);
    }

    #[test]
    fn missing_file() {
        let result = Config::load(&"/nonexistent/ovsdp-exporter.toml");
        assert!(matches!(result, Err(ConfigError::Read { .. })));
    }

    #[test]
    fn unknown_section() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[samplers]\nenabled = true").unwrap();

        assert!(matches!(Config::load(&file.path()), Err(ConfigError::Parse(_))));
    }

    #[test]
    fn go_style_listen() {
        assert_eq!(resolve(":9000").unwrap(), "0.0.0.0:9000".parse::<SocketAddr>().unwrap());
    }

    #[test]
    fn bad_listen() {
        assert!(matches!(resolve("not an address"), Err(ConfigError::Listen { .. })));
    }

    #[test]
    fn bad_path() {
        let mut config = Config::default();

        assert!(matches!(
            config.apply_overrides(None, Some("metrics"), None),
            Err(ConfigError::Path(_))
        ));
        assert!(matches!(
            config.apply_overrides(None, Some("/"), None),
            Err(ConfigError::Path(_))
        ));
    }

    #[test]
    fn empty_command() {
        let config: Config = toml::from_str("[reports]\ncoverage = []").unwrap();
        assert!(matches!(config.check(), Err(ConfigError::EmptyCommand("coverage"))));
    }

    #[test]
    fn overrides() {
        let mut config = Config::default();
        config
            .apply_overrides(Some("127.0.0.1:9200"), Some("/stats"), Some(Level::Trace))
            .unwrap();

        assert_eq!(
            config.general().listen().unwrap(),
            "127.0.0.1:9200".parse::<SocketAddr>().unwrap()
        );
        assert_eq!(config.general().path(), "/stats");
        assert_eq!(config.log().level(), Level::Trace);
    }
}
