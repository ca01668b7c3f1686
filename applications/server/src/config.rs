/// Server configuration
use crate::error::{Result, ServerError};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerConfig {
    #[serde(default = "default_server")]
    pub server: ServerSettings,

    #[serde(default = "default_storage")]
    pub storage: StorageSettings,

    #[serde(default = "default_ui")]
    pub ui: UiSettings,

    #[serde(default = "default_git")]
    pub git: GitSettings,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ServerSettings {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct StorageSettings {
    /// Root of the dated journal tree
    #[serde(default = "default_journal_dir")]
    pub journal_dir: PathBuf,

    /// JSON array file backing the song registry
    #[serde(default = "default_songs_file")]
    pub songs_file: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UiSettings {
    /// Directory holding `index.html` and `src/ui/`
    #[serde(default = "default_ui_root")]
    pub root: PathBuf,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GitSettings {
    #[serde(default = "default_git_binary")]
    pub binary: PathBuf,

    /// Working tree the sync stages, commits and pushes
    #[serde(default = "default_repo_dir")]
    pub repo_dir: PathBuf,
}

impl ServerConfig {
    /// Load configuration from `config.toml` (or `path`) and environment
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let mut settings = config::Config::builder();

        match path {
            Some(path) => {
                settings = settings.add_source(config::File::from(path.to_path_buf()));
            }
            None => {
                let config_path = PathBuf::from("config.toml");
                if config_path.exists() {
                    settings = settings.add_source(config::File::from(config_path));
                }
            }
        }

        // Override with environment variables, e.g. JOURNAL_SERVER__PORT=9000
        settings = settings.add_source(
            config::Environment::with_prefix("JOURNAL")
                .prefix_separator("_")
                .separator("__")
                .try_parsing(true),
        );

        let config = settings
            .build()
            .map_err(|e| ServerError::Config(e.to_string()))?;

        config
            .try_deserialize()
            .map_err(|e| ServerError::Config(e.to_string()))
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if self.server.port == 0 {
            return Err(ServerError::Config(
                "Port must be non-zero (set JOURNAL_SERVER__PORT)".to_string(),
            ));
        }

        if self.git.binary.as_os_str().is_empty() {
            return Err(ServerError::Config(
                "Git binary must not be empty (set JOURNAL_GIT__BINARY)".to_string(),
            ));
        }

        Ok(())
    }
}

// Default values
fn default_server() -> ServerSettings {
    ServerSettings {
        host: default_host(),
        port: default_port(),
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8082
}

fn default_storage() -> StorageSettings {
    StorageSettings {
        journal_dir: default_journal_dir(),
        songs_file: default_songs_file(),
    }
}

fn default_journal_dir() -> PathBuf {
    PathBuf::from("docs").join("journal")
}

fn default_songs_file() -> PathBuf {
    PathBuf::from("docs").join("songs.json")
}

fn default_ui() -> UiSettings {
    UiSettings {
        root: default_ui_root(),
    }
}

fn default_ui_root() -> PathBuf {
    PathBuf::from(".")
}

fn default_git() -> GitSettings {
    GitSettings {
        binary: default_git_binary(),
        repo_dir: default_repo_dir(),
    }
}

fn default_git_binary() -> PathBuf {
    PathBuf::from("git")
}

fn default_repo_dir() -> PathBuf {
    PathBuf::from(".")
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            server: default_server(),
            storage: default_storage(),
            ui: default_ui(),
            git: default_git(),
        }
    }
}
