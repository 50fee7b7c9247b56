use crate::error::{Result, TodoError};
use directories::BaseDirs;
use serde::Deserialize;
use std::ffi::OsString;
use std::fs;
use std::path::{Component, Path, PathBuf};

const CONFIG_FILENAME: &str = "config.json";
const DEFAULT_DATABASE: &str = "database";

/// Configuration for todo, stored in the config dir as config.json
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
pub struct TodoConfig {
    /// File name of the record file inside the config dir
    #[serde(default = "default_database")]
    pub database: String,

    /// Answer assumed when the re-init prompt gets an empty reply
    #[serde(default = "default_confirm")]
    pub confirm_default: bool,
}

fn default_database() -> String {
    DEFAULT_DATABASE.to_string()
}

fn default_confirm() -> bool {
    true
}

impl Default for TodoConfig {
    fn default() -> Self {
        Self {
            database: default_database(),
            confirm_default: default_confirm(),
        }
    }
}

impl TodoConfig {
    /// Load config from the given directory, or return defaults if not found
    pub fn load<P: AsRef<Path>>(config_dir: P) -> Result<Self> {
        let config_path = config_dir.as_ref().join(CONFIG_FILENAME);

        if !config_path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(&config_path).map_err(TodoError::Io)?;
        let config: TodoConfig =
            serde_json::from_str(&content).map_err(TodoError::Serialization)?;
        Ok(config)
    }
}

/// Where the database lives. Resolved once at startup and passed down.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TodoPaths {
    pub config_dir: PathBuf,
    pub database: PathBuf,
}

impl TodoPaths {
    /// The database must be a plain file name inside `config_dir`.
    pub fn new(config_dir: impl Into<PathBuf>, config: &TodoConfig) -> Result<Self> {
        let name = Path::new(&config.database);
        let mut components = name.components();
        match (components.next(), components.next()) {
            (Some(Component::Normal(_)), None) => {}
            _ => {
                return Err(TodoError::Config(format!(
                    "database must be a file name inside the config dir, got {:?}",
                    config.database
                )))
            }
        }

        let config_dir = config_dir.into();
        let database = config_dir.join(name);
        Ok(Self {
            config_dir,
            database,
        })
    }

    /// Reads `XDG_CONFIG_HOME` and `HOME`, makes sure the directory exists
    /// and loads its config.
    pub fn from_env() -> Result<(Self, TodoConfig)> {
        let home = std::env::var_os("HOME")
            .filter(|h| !h.is_empty())
            .map(PathBuf::from)
            .or_else(|| BaseDirs::new().map(|bd| bd.home_dir().to_path_buf()));
        let config_dir = resolve_config_dir(std::env::var_os("XDG_CONFIG_HOME"), home)?;

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir).map_err(TodoError::Io)?;
        }

        let config = TodoConfig::load(&config_dir)?;
        log::debug!("config dir: {}", config_dir.display());
        Ok((Self::new(config_dir, &config)?, config))
    }
}

/// `$XDG_CONFIG_HOME/todo` when that is set and non-empty, `$HOME/.todo` otherwise.
pub fn resolve_config_dir(xdg_config_home: Option<OsString>, home: Option<PathBuf>) -> Result<PathBuf> {
    if let Some(xdg) = xdg_config_home.filter(|x| !x.is_empty()) {
        return Ok(PathBuf::from(xdg).join("todo"));
    }
    home.map(|h| h.join(".todo")).ok_or_else(|| {
        TodoError::Config("cannot locate config dir: neither XDG_CONFIG_HOME nor HOME is set".into())
    })
}
