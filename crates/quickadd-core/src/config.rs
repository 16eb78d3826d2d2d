//! Configuration for quickadd-core
//!
//! Service endpoints, library identity, and HTTP behaviour. The value is
//! built once by the caller and passed into each client constructor.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default bound on every outbound request
pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Environment variable holding the Zotero library id
pub const ENV_LIBRARY_ID: &str = "QUICKADD_LIBRARY_ID";
/// Environment variable holding the Zotero API key
pub const ENV_API_KEY: &str = "QUICKADD_API_KEY";
/// Environment variable selecting a user or group library
pub const ENV_LIBRARY_TYPE: &str = "QUICKADD_LIBRARY_TYPE";

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file {path}: {message}")]
    Io { path: PathBuf, message: String },

    #[error("Failed to parse config: {0}")]
    Parse(String),

    #[error("Invalid configuration: {0}")]
    Invalid(String),
}

/// Top-level configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct QuickaddConfig {
    pub http: HttpConfig,
    pub open_library: OpenLibraryConfig,
    pub crossref: CrossrefConfig,
    pub zotero: ZoteroConfig,
}

/// Shared HTTP client settings
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpConfig {
    /// Timeout for a whole request, in seconds
    pub timeout_secs: u64,
    pub user_agent: String,
}

impl Default for HttpConfig {
    fn default() -> Self {
        Self {
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            user_agent: format!("quickadd/{}", env!("CARGO_PKG_VERSION")),
        }
    }
}

/// Open Library books API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct OpenLibraryConfig {
    pub base_url: String,
}

impl Default for OpenLibraryConfig {
    fn default() -> Self {
        Self {
            base_url: "https://openlibrary.org".to_string(),
        }
    }
}

/// Crossref REST API
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct CrossrefConfig {
    pub base_url: String,
    /// Contact address for Crossref's polite pool
    pub mailto: Option<String>,
}

impl Default for CrossrefConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.crossref.org".to_string(),
            mailto: None,
        }
    }
}

/// Whether the target Zotero library belongs to a user or a group
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LibraryType {
    #[default]
    User,
    Group,
}

impl LibraryType {
    /// Path segment used by the Zotero web API
    pub fn path_segment(&self) -> &'static str {
        match self {
            LibraryType::User => "users",
            LibraryType::Group => "groups",
        }
    }
}

impl std::str::FromStr for LibraryType {
    type Err = ConfigError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "user" | "users" => Ok(LibraryType::User),
            "group" | "groups" => Ok(LibraryType::Group),
            other => Err(ConfigError::Invalid(format!(
                "unknown library type '{}'",
                other
            ))),
        }
    }
}

/// Zotero web library the citations are written to
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct ZoteroConfig {
    pub base_url: String,
    pub library_type: LibraryType,
    pub library_id: String,
    pub api_key: String,
}

impl Default for ZoteroConfig {
    fn default() -> Self {
        Self {
            base_url: "https://api.zotero.org".to_string(),
            library_type: LibraryType::User,
            library_id: String::new(),
            api_key: String::new(),
        }
    }
}

impl QuickaddConfig {
    /// Load configuration from a TOML string
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Serialize configuration to TOML
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a JSON string
    pub fn from_json(json_str: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(json_str).map_err(|e| ConfigError::Parse(e.to_string()))
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::Io {
            path: path.to_path_buf(),
            message: e.to_string(),
        })?;
        Self::from_toml(&content)
    }

    /// Load from the default location, falling back to defaults when absent
    pub fn load_or_default() -> Result<Self, ConfigError> {
        match Self::default_path() {
            Some(path) if path.exists() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }

    /// `<config dir>/quickadd/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("quickadd").join("config.toml"))
    }

    /// Override library identity from the given environment lookup.
    ///
    /// Takes the lookup as a function so the process environment is only
    /// read where the caller chooses to.
    pub fn apply_env<F>(mut self, lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(id) = lookup(ENV_LIBRARY_ID).filter(|v| !v.trim().is_empty()) {
            self.zotero.library_id = id.trim().to_string();
        }
        if let Some(key) = lookup(ENV_API_KEY).filter(|v| !v.trim().is_empty()) {
            self.zotero.api_key = key.trim().to_string();
        }
        if let Some(kind) = lookup(ENV_LIBRARY_TYPE).filter(|v| !v.trim().is_empty()) {
            self.zotero.library_type = kind.parse()?;
        }
        Ok(self)
    }

    /// Override library identity from the process environment
    pub fn apply_process_env(self) -> Result<Self, ConfigError> {
        self.apply_env(|name| std::env::var(name).ok())
    }

    /// Validate configuration values
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.http.timeout_secs == 0 {
            return Err(ConfigError::Invalid(
                "http.timeout_secs must be positive".to_string(),
            ));
        }

        for (name, base_url) in [
            ("open_library.base_url", &self.open_library.base_url),
            ("crossref.base_url", &self.crossref.base_url),
            ("zotero.base_url", &self.zotero.base_url),
        ] {
            url::Url::parse(base_url)
                .map_err(|e| ConfigError::Invalid(format!("{} is not a URL: {}", name, e)))?;
        }

        if self.zotero.library_id.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "zotero.library_id is not set (config file or {})",
                ENV_LIBRARY_ID
            )));
        }

        if self.zotero.api_key.is_empty() {
            return Err(ConfigError::Invalid(format!(
                "zotero.api_key is not set (config file or {})",
                ENV_API_KEY
            )));
        }

        Ok(())
    }
}
