use std::fs;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{ServerError, ServerResult};

/// Server configuration.
///
/// Every field has a default, so a TOML file only needs the keys it
/// overrides.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    pub bind_addr: SocketAddr,
    /// JSON file holding the collection.
    pub data_file: PathBuf,
    /// Write an empty collection at startup if `data_file` does not exist.
    pub init_if_missing: bool,
    pub enable_cors: bool,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_addr: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_file: PathBuf::from("data.json"),
            init_if_missing: true,
            enable_cors: false,
        }
    }
}

impl ServerConfig {
    pub fn from_toml_str(s: &str) -> ServerResult<Self> {
        toml::from_str(s).map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> ServerResult<Self> {
        let text = fs::read_to_string(path)
            .map_err(|e| ServerError::Config(format!("{}: {e}", path.display())))?;
        Self::from_toml_str(&text)
    }

    pub fn to_toml_string(&self) -> ServerResult<String> {
        toml::to_string_pretty(self).map_err(|e| ServerError::Config(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_config() {
        let c = ServerConfig::default();
        assert_eq!(c.bind_addr, "127.0.0.1:3000".parse::<SocketAddr>().unwrap());
        assert_eq!(c.data_file, PathBuf::from("data.json"));
        assert!(c.init_if_missing);
        assert!(!c.enable_cors);
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let c = ServerConfig::from_toml_str(
            r#"
            bind_addr = "0.0.0.0:8080"
            enable_cors = true
            "#,
        )
        .unwrap();
        assert_eq!(c.bind_addr.port(), 8080);
        assert!(c.enable_cors);
        assert_eq!(c.data_file, PathBuf::from("data.json"));
    }

    #[test]
    fn invalid_toml_is_config_error() {
        let err = ServerConfig::from_toml_str("bind_addr = 12").unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }

    #[test]
    fn toml_round_trip() {
        let c = ServerConfig {
            data_file: PathBuf::from("/var/lib/libcat/books.json"),
            init_if_missing: false,
            ..ServerConfig::default()
        };
        let text = c.to_toml_string().unwrap();
        assert_eq!(ServerConfig::from_toml_str(&text).unwrap(), c);
    }

    #[test]
    fn load_from_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("libcat.toml");
        fs::write(&path, "data_file = \"books.json\"\n").unwrap();
        let c = ServerConfig::load(&path).unwrap();
        assert_eq!(c.data_file, PathBuf::from("books.json"));
    }

    #[test]
    fn load_missing_file() {
        let err = ServerConfig::load(Path::new("/nonexistent/libcat.toml")).unwrap_err();
        assert!(matches!(err, ServerError::Config(_)));
    }
}
