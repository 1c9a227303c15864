//! Server configuration parsed from environment variables.
//!
//! DESIGN
//! ======
//! Parsing goes through a lookup function so tests can supply values without
//! touching the process environment. Leptos site options are loaded
//! separately by `leptos::config::get_configuration`.

use std::path::{Path, PathBuf};

use axum::http::HeaderName;
use client::state::page::{DEFAULT_APP_NAME, UserContext};

pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_PUBLIC_DIR: &str = "public";
pub const DEFAULT_STORAGE_DIR: &str = "storage";
pub const DEFAULT_USER_HEADER: &str = "x-dv-user";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("invalid PORT: {0}")]
    InvalidPort(String),
    #[error("invalid DV_USER_HEADER: {0}")]
    InvalidHeader(String),
    #[error("failed to read fallback user file {path}: {source}")]
    ReadUserFile { path: PathBuf, source: std::io::Error },
    #[error("failed to parse fallback user file {path}: {source}")]
    ParseUserFile { path: PathBuf, source: serde_yaml::Error },
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub port: u16,
    /// Directory holding `DALOGO.png`, `APPLOGO.png`, `default-profile.png`.
    pub public_dir: PathBuf,
    /// Directory mounted at `/storage` (profile images).
    pub storage_dir: PathBuf,
    /// Request header carrying the signed-in user as JSON.
    pub user_header: HeaderName,
    pub app_title: String,
    /// User rendered when a request carries no user header.
    pub fallback_user: Option<UserContext>,
}

impl ServerConfig {
    /// Build config from the process environment.
    ///
    /// Optional:
    /// - `PORT`: default 3000
    /// - `DV_PUBLIC_DIR`: default `public`
    /// - `DV_STORAGE_DIR`: default `storage`
    /// - `DV_USER_HEADER`: default `x-dv-user`
    /// - `DV_APP_TITLE`: default `DV Tracker`
    /// - `DV_FALLBACK_USER_FILE`: YAML user for local development
    ///
    /// # Errors
    ///
    /// Returns an error if a value is malformed or the fallback user file
    /// cannot be loaded.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from an arbitrary key lookup.
    ///
    /// # Errors
    ///
    /// See [`ServerConfig::from_env`].
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let lookup = |key: &str| lookup(key).map(|v| v.trim().to_owned()).filter(|v| !v.is_empty());

        let port = match lookup("PORT") {
            Some(raw) => raw.parse::<u16>().map_err(|_| ConfigError::InvalidPort(raw))?,
            None => DEFAULT_PORT,
        };
        let public_dir = PathBuf::from(lookup("DV_PUBLIC_DIR").unwrap_or_else(|| DEFAULT_PUBLIC_DIR.to_owned()));
        let storage_dir = PathBuf::from(lookup("DV_STORAGE_DIR").unwrap_or_else(|| DEFAULT_STORAGE_DIR.to_owned()));
        let user_header = parse_header_name(&lookup("DV_USER_HEADER").unwrap_or_else(|| DEFAULT_USER_HEADER.to_owned()))?;
        let app_title = lookup("DV_APP_TITLE").unwrap_or_else(|| DEFAULT_APP_NAME.to_owned());
        let fallback_user = lookup("DV_FALLBACK_USER_FILE")
            .map(|path| load_fallback_user(Path::new(&path)))
            .transpose()?;

        Ok(Self { port, public_dir, storage_dir, user_header, app_title, fallback_user })
    }
}

fn parse_header_name(raw: &str) -> Result<HeaderName, ConfigError> {
    HeaderName::from_bytes(raw.to_ascii_lowercase().as_bytes()).map_err(|_| ConfigError::InvalidHeader(raw.to_owned()))
}

/// Parse a YAML user document, e.g. `first_name: Ana`.
///
/// # Errors
///
/// Returns the YAML error if `yaml` is not a user mapping.
pub fn parse_fallback_user(yaml: &str) -> Result<UserContext, serde_yaml::Error> {
    serde_yaml::from_str(yaml)
}

fn load_fallback_user(path: &Path) -> Result<UserContext, ConfigError> {
    let raw = std::fs::read_to_string(path)
        .map_err(|source| ConfigError::ReadUserFile { path: path.to_path_buf(), source })?;
    parse_fallback_user(&raw).map_err(|source| ConfigError::ParseUserFile { path: path.to_path_buf(), source })
}

#[cfg(test)]
#[path = "config_test.rs"]
mod tests;
