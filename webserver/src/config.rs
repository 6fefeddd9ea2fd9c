//! Server configuration
//!
//! Values come from the command line, falling back to `JEWEL_*` environment
//! variables (a `.env` file is loaded before parsing).

use clap::Parser;
use jewel_shared::SharedError;
use std::net::{IpAddr, SocketAddr};
use std::path::PathBuf;

use crate::error::{WebServerError, WebServerResult};

const LOG_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

/// Command line arguments
#[derive(Parser, Debug, Clone)]
#[command(name = "jewel-india")]
#[command(about = "Jewel India marketplace API server")]
pub struct Args {
    /// Interface to bind the HTTP server to
    #[arg(long, env = "JEWEL_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port for HTTP server
    #[arg(long, env = "JEWEL_PORT", default_value = "8080")]
    pub port: u16,

    /// Log level (trace, debug, info, warn, error)
    #[arg(long, env = "JEWEL_LOG_LEVEL", default_value = "info")]
    pub log_level: String,

    /// Built storefront bundle to serve for non-API paths
    #[arg(long, env = "JEWEL_STATIC_DIR")]
    pub static_dir: Option<PathBuf>,
}

/// Validated runtime configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    pub bind_address: SocketAddr,
    pub log_level: String,
    pub static_dir: Option<PathBuf>,
}

impl ServerConfig {
    pub fn from_args(args: Args) -> WebServerResult<Self> {
        let ip: IpAddr = args.host.parse().map_err(|_| SharedError::InvalidConfig {
            field: "host".to_string(),
            value: args.host.clone(),
        })?;

        let log_level = args.log_level.to_lowercase();
        if !LOG_LEVELS.contains(&log_level.as_str()) {
            return Err(SharedError::InvalidConfig {
                field: "log_level".to_string(),
                value: args.log_level,
            }
            .into());
        }

        if let Some(dir) = &args.static_dir {
            if !dir.is_dir() {
                return Err(WebServerError::config(format!(
                    "Static directory not found: {}",
                    dir.display()
                )));
            }
        }

        Ok(Self {
            bind_address: SocketAddr::new(ip, args.port),
            log_level,
            static_dir: args.static_dir,
        })
    }

    /// Loopback config without static assets
    pub fn local(port: u16) -> Self {
        Self {
            bind_address: SocketAddr::from(([127, 0, 0, 1], port)),
            log_level: "info".to_string(),
            static_dir: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(extra: &[&str]) -> Args {
        let mut argv = vec!["jewel-india"];
        argv.extend_from_slice(extra);
        Args::try_parse_from(argv).unwrap()
    }

    #[test]
    fn test_defaults_validate() {
        let config = ServerConfig::from_args(parse(&[])).unwrap();
        assert_eq!(config.bind_address, "127.0.0.1:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "info");
        assert!(config.static_dir.is_none());
    }

    #[test]
    fn test_explicit_values() {
        let config = ServerConfig::from_args(parse(&["--host", "0.0.0.0", "--port", "9100", "--log-level", "DEBUG"])).unwrap();
        assert_eq!(config.bind_address, "0.0.0.0:9100".parse::<SocketAddr>().unwrap());
        assert_eq!(config.log_level, "debug");
    }

    #[test]
    fn test_invalid_host_rejected() {
        let error = ServerConfig::from_args(parse(&["--host", "not-an-ip"])).unwrap_err();
        assert!(matches!(
            error,
            WebServerError::Shared(SharedError::InvalidConfig { ref field, .. }) if field == "host"
        ));
    }

    #[test]
    fn test_invalid_log_level_rejected() {
        assert!(ServerConfig::from_args(parse(&["--log-level", "verbose"])).is_err());
    }

    #[test]
    fn test_static_dir_must_exist() {
        let dir = tempfile::tempdir().unwrap();
        let existing = dir.path().to_str().unwrap().to_string();
        let config = ServerConfig::from_args(parse(&["--static-dir", &existing])).unwrap();
        assert_eq!(config.static_dir.as_deref(), Some(dir.path()));

        let missing = dir.path().join("missing");
        let error = ServerConfig::from_args(parse(&["--static-dir", missing.to_str().unwrap()])).unwrap_err();
        assert!(matches!(error, WebServerError::Config(_)));
    }

    #[test]
    fn test_bad_port_fails_parsing() {
        assert!(Args::try_parse_from(["jewel-india", "--port", "99999"]).is_err());
    }
}
