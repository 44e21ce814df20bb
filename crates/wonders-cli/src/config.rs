//! Server configuration: JSON file, then command-line overrides.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use wonders_game::GameConfig;

use crate::cli::ServerArgs;

/// Errors raised while loading the configuration file.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read config {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config {}: {source}", path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
}

/// Everything the server needs before it can start.
///
/// Every field is optional in the file:
///
/// ```json
/// { "addr": "0.0.0.0:8080", "attempts": 8, "wordlist": "words.txt" }
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Address to listen on.
    pub addr: String,

    /// Game settings shared by all sessions.
    #[serde(flatten)]
    pub game: GameConfig,

    /// Word list file; the built-in list is used when absent.
    pub wordlist: Option<PathBuf>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            addr: wonders::DEFAULT_BIND_ADDR.to_string(),
            game: GameConfig::default(),
            wordlist: None,
        }
    }
}

impl ServerConfig {
    /// Parses a JSON configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text =
            std::fs::read_to_string(path).map_err(|source| ConfigError::Read {
                path: path.to_path_buf(),
                source,
            })?;
        serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Builds the effective configuration: the file named by `--config`
    /// (or defaults), with any flags given on the command line on top.
    pub fn resolve(args: &ServerArgs) -> Result<Self, ConfigError> {
        let mut config = match &args.config {
            Some(path) => Self::load(path)?,
            None => Self::default(),
        };

        if let Some(addr) = &args.addr {
            config.addr.clone_from(addr);
        }
        if let Some(attempts) = args.attempts {
            config.game.attempts = attempts;
        }
        if let Some(wordlist) = &args.wordlist {
            config.wordlist = Some(wordlist.clone());
        }
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn args() -> ServerArgs {
        ServerArgs {
            addr: None,
            attempts: None,
            wordlist: None,
            config: None,
        }
    }

    fn temp_config(name: &str, contents: &str) -> PathBuf {
        let path = std::env::temp_dir().join(format!(
            "wonders-{name}-{}.json",
            std::process::id()
        ));
        std::fs::write(&path, contents).unwrap();
        path
    }

    #[test]
    fn test_defaults_without_file_or_flags() {
        let config = ServerConfig::resolve(&args()).unwrap();
        assert_eq!(config, ServerConfig::default());
        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.game.attempts, 10);
    }

    #[test]
    fn test_flags_override_defaults() {
        let config = ServerConfig::resolve(&ServerArgs {
            addr: Some("0.0.0.0:1234".into()),
            attempts: Some(4),
            wordlist: Some("w.txt".into()),
            config: None,
        })
        .unwrap();
        assert_eq!(config.addr, "0.0.0.0:1234");
        assert_eq!(config.game.attempts, 4);
        assert_eq!(config.wordlist, Some(PathBuf::from("w.txt")));
    }

    #[test]
    fn test_file_then_flags() {
        let path = temp_config(
            "file-then-flags",
            r#"{ "addr": "0.0.0.0:7000", "attempts": 7, "wordlist": "a.txt" }"#,
        );
        let config = ServerConfig::resolve(&ServerArgs {
            attempts: Some(2),
            config: Some(path.clone()),
            ..args()
        })
        .unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.addr, "0.0.0.0:7000");
        assert_eq!(config.game.attempts, 2);
        assert_eq!(config.wordlist, Some(PathBuf::from("a.txt")));
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let path = temp_config("partial", r#"{ "attempts": 3 }"#);
        let config = ServerConfig::load(&path).unwrap();
        std::fs::remove_file(&path).unwrap();

        assert_eq!(config.addr, "127.0.0.1:8080");
        assert_eq!(config.game.attempts, 3);
        assert!(config.wordlist.is_none());
    }

    #[test]
    fn test_bad_file_is_reported() {
        let path = temp_config("bad", "{ not json");
        let err = ServerConfig::load(&path).unwrap_err();
        std::fs::remove_file(&path).unwrap();
        assert!(matches!(err, ConfigError::Parse { .. }));

        let err = ServerConfig::load(Path::new("/no/such/config.json"))
            .unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
