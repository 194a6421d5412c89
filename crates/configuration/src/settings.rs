use crate::error::ConfigError;
use serde::Deserialize;

/// The root configuration structure for the entire application.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub server: ServerConfig,
}

/// Contains parameters for the HTTP server that feeds the dashboard.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// The interface to bind (e.g., "0.0.0.0" to accept external clients).
    pub host: String,
    /// The TCP port the dashboard API listens on.
    pub port: u16,
}

impl Config {
    /// Rejects configurations that would fail at bind time anyway, with a
    /// clearer message than the OS would give.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.server.host.trim().is_empty() {
            return Err(ConfigError::ValidationError(
                "server.host must not be empty".to_string(),
            ));
        }
        if self.server.port == 0 {
            return Err(ConfigError::ValidationError(
                "server.port must be non-zero".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(toml: &str) -> Config {
        config::Config::builder()
            .add_source(config::File::from_str(toml, config::FileFormat::Toml))
            .build()
            .unwrap()
            .try_deserialize()
            .unwrap()
    }

    #[test]
    fn parses_a_complete_config() {
        let cfg = parse("[server]\nhost = \"127.0.0.1\"\nport = 8080\n");
        assert_eq!(cfg.server.host, "127.0.0.1");
        assert_eq!(cfg.server.port, 8080);
        assert!(cfg.validate().is_ok());
    }

    #[test]
    fn rejects_a_zero_port() {
        let cfg = parse("[server]\nhost = \"0.0.0.0\"\nport = 0\n");
        assert!(matches!(
            cfg.validate(),
            Err(ConfigError::ValidationError(_))
        ));
    }

    #[test]
    fn rejects_an_empty_host() {
        let cfg = parse("[server]\nhost = \" \"\nport = 8080\n");
        assert!(cfg.validate().is_err());
    }
}
