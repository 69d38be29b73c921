//! Configuration constants and settings

use anyhow::{Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};

// GitHub API configuration
pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const STARS_PER_PAGE: u32 = 100; // Maximum the starred endpoint allows
pub const RATE_LIMIT_MARKER: &str = "rate limit";
pub const USER_AGENT: &str = concat!("star-mirror/", env!("CARGO_PKG_VERSION"));
pub const GITHUB_ACCEPT_HEADER: &str = "application/vnd.github+json";

// Environment overrides
pub const TOKEN_ENV_VAR: &str = "GITHUB_TOKEN";
pub const API_URL_ENV_VAR: &str = "STAR_MIRROR_API_URL";

// Config file location: $XDG_CONFIG_HOME/star-mirror/config.toml
pub const CONFIG_DIR_NAME: &str = "star-mirror";
pub const CONFIG_FILE_NAME: &str = "config.toml";

// Process exit codes
pub const EXIT_SUCCESS: i32 = 0;
pub const EXIT_FATAL: i32 = 1;
pub const EXIT_ITEM_ERRORS: i32 = 2;

// Substring in git's stderr when the mirror is already on disk
pub const ALREADY_EXISTS_MARKER: &str = "already exists";

// UI Constants
pub const FETCH_SPINNER_TEMPLATE: &str = "{spinner} {wide_msg}";
pub const FETCH_SPINNER_TICK_MS: u64 = 120;

// Display formatting constants
pub const PATH_DISPLAY_WIDTH: usize = 30;
pub const ERROR_MESSAGE_MAX_LENGTH: usize = 40;
pub const ERROR_MESSAGE_TRUNCATE_LENGTH: usize = 37;

/// Values read from the optional TOML config file
///
/// Every key is optional; command line flags take precedence over anything
/// set here.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct FileConfig {
    pub base_dir: Option<PathBuf>,
    pub username: Option<String>,
    pub token: Option<String>,
    pub api_url: Option<String>,
}

impl FileConfig {
    /// Parses a config file from disk
    pub fn load(path: &Path) -> Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read config file {}", path.display()))?;
        toml::from_str(&content)
            .with_context(|| format!("invalid config file {}", path.display()))
    }

    /// Loads the config file if there is one
    ///
    /// An explicitly requested file must exist. The default location is
    /// silently skipped when absent.
    pub fn load_optional(explicit: Option<&Path>) -> Result<Self> {
        if let Some(path) = explicit {
            return Self::load(path);
        }

        match default_config_path() {
            Some(path) if path.is_file() => Self::load(&path),
            _ => Ok(Self::default()),
        }
    }
}

/// Default config file path for the current user, if a config dir is known
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join(CONFIG_DIR_NAME).join(CONFIG_FILE_NAME))
}

/// Values supplied on the command line
#[derive(Debug, Default, Clone)]
pub struct MirrorArgs {
    pub base_dir: Option<PathBuf>,
    pub username: Option<String>,
    pub token: Option<String>,
}

/// Fully resolved settings for one mirror run
#[derive(Debug, Clone, PartialEq)]
pub struct MirrorConfig {
    pub base_dir: PathBuf,
    pub username: String,
    pub token: Option<String>,
    pub api_url: String,
}

impl MirrorConfig {
    /// Merges CLI args, the config file and the process environment
    ///
    /// Priority order:
    /// 1. command line flags
    /// 2. environment (`GITHUB_TOKEN`, `STAR_MIRROR_API_URL`)
    /// 3. config file
    /// 4. built-in defaults
    pub fn resolve(args: MirrorArgs, file: FileConfig) -> Result<Self> {
        Self::resolve_with_env(args, file, |key| std::env::var(key).ok())
    }

    /// Same as [`MirrorConfig::resolve`] with an injectable environment lookup
    pub fn resolve_with_env<E>(args: MirrorArgs, file: FileConfig, env: E) -> Result<Self>
    where
        E: Fn(&str) -> Option<String>,
    {
        let base_dir = args
            .base_dir
            .or(file.base_dir)
            .context("missing base directory: pass --base-dir or set `base_dir` in the config file")?;

        let username = non_empty(args.username)
            .or_else(|| non_empty(file.username))
            .context("missing username: pass --username or set `username` in the config file")?;

        let token = non_empty(args.token)
            .or_else(|| non_empty(env(TOKEN_ENV_VAR)))
            .or_else(|| non_empty(file.token));

        let api_url = non_empty(env(API_URL_ENV_VAR))
            .or_else(|| non_empty(file.api_url))
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());

        Ok(Self {
            base_dir,
            username,
            token,
            api_url: api_url.trim_end_matches('/').to_string(),
        })
    }
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
