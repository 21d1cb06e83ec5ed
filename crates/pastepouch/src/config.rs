use std::{env, fmt, io, path::Path};

use axum::http::HeaderValue;
use clap::ValueEnum;
use thiserror::Error;

/// Which database the process talks to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum StorageTarget {
    /// The local database file.
    Local,
    /// The remote database, opened with credentials.
    Remote,
}

impl StorageTarget {
    pub const ALL: [StorageTarget; 2] = [StorageTarget::Local, StorageTarget::Remote];

    pub fn label(self) -> &'static str {
        match self {
            StorageTarget::Local => "Local database",
            StorageTarget::Remote => "Remote database",
        }
    }
}

/// Which front end serves the operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Mode {
    /// JSON over HTTP.
    Http,
    /// Interactive numbered menu on stdin/stdout.
    Cli,
}

impl Mode {
    pub const ALL: [Mode; 2] = [Mode::Http, Mode::Cli];

    pub fn label(self) -> &'static str {
        match self {
            Mode::Http => "HTTP server",
            Mode::Cli => "Command-line menu",
        }
    }
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("Failed to load environment file {path}: {reason}")]
    EnvFile { path: String, reason: String },
    #[error("{0} must be set to use the remote database")]
    MissingCredential(&'static str),
    #[error("CORS_ORIGIN is not a valid header value: {0}")]
    InvalidCorsOrigin(String),
}

/// Whether an environment file was found.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EnvFile {
    Loaded,
    Missing,
}

/// Load `KEY=value` pairs from `path` into the process environment.
///
/// Variables already set in the environment keep their value. A missing
/// file is reported as [`EnvFile::Missing`]; an unreadable or malformed
/// one is an error.
pub fn load_env_file(path: &Path) -> Result<EnvFile, ConfigError> {
    match dotenvy::from_path(path) {
        Ok(()) => Ok(EnvFile::Loaded),
        Err(dotenvy::Error::Io(e)) if e.kind() == io::ErrorKind::NotFound => Ok(EnvFile::Missing),
        Err(e) => Err(ConfigError::EnvFile {
            path: path.display().to_string(),
            reason: e.to_string(),
        }),
    }
}

/// Application configuration loaded from environment variables.
#[derive(Clone)]
pub struct Config {
    /// Path to the local SQLite database (default: "pastepouch.db")
    pub sqlite_path: String,
    /// Location of the remote database (default: "pastepouch-remote.db")
    pub remote_sqlite_path: String,
    pub db_user: Option<String>,
    pub db_pass: Option<String>,
    /// Origin allowed by the CORS layer (default: "http://localhost:5173")
    pub cors_origin: String,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Environment variables:
    /// - `SQLITE_PATH` - Local SQLite database path (default: "pastepouch.db")
    /// - `REMOTE_SQLITE_PATH` - Remote database location (default: "pastepouch-remote.db")
    /// - `DB_USER` / `DB_PASS` - Remote credentials
    /// - `CORS_ORIGIN` - Allowed browser origin (default: "http://localhost:5173")
    pub fn from_env() -> Self {
        Self::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            sqlite_path: lookup("SQLITE_PATH").unwrap_or_else(|| "pastepouch.db".to_string()),
            remote_sqlite_path: lookup("REMOTE_SQLITE_PATH")
                .unwrap_or_else(|| "pastepouch-remote.db".to_string()),
            db_user: lookup("DB_USER").filter(|v| !v.is_empty()),
            db_pass: lookup("DB_PASS").filter(|v| !v.is_empty()),
            cors_origin: lookup("CORS_ORIGIN")
                .unwrap_or_else(|| "http://localhost:5173".to_string()),
        }
    }

    /// Resolve what to hand to `SqliteStore::open` for `target`.
    ///
    /// The remote target becomes an SQLite `file:` URI carrying the
    /// credentials as `user`/`password` query parameters. Only a VFS that
    /// reads those parameters authenticates with them. SQLite's default VFS
    /// ignores unknown URI parameters, so with it `DB_USER`/`DB_PASS` are
    /// required but have no effect and the remote target is just a second
    /// database file.
    pub fn database_location(&self, target: StorageTarget) -> Result<String, ConfigError> {
        match target {
            StorageTarget::Local => Ok(self.sqlite_path.clone()),
            StorageTarget::Remote => {
                let user = self
                    .db_user
                    .as_deref()
                    .ok_or(ConfigError::MissingCredential("DB_USER"))?;
                let pass = self
                    .db_pass
                    .as_deref()
                    .ok_or(ConfigError::MissingCredential("DB_PASS"))?;

                Ok(format!(
                    "file:{}?user={}&password={}",
                    self.remote_sqlite_path,
                    urlencoding::encode(user),
                    urlencoding::encode(pass),
                ))
            }
        }
    }

    /// Where `target` lives, safe to log.
    pub fn display_location(&self, target: StorageTarget) -> &str {
        match target {
            StorageTarget::Local => &self.sqlite_path,
            StorageTarget::Remote => &self.remote_sqlite_path,
        }
    }

    pub fn cors_origin(&self) -> Result<HeaderValue, ConfigError> {
        HeaderValue::from_str(&self.cors_origin)
            .map_err(|_| ConfigError::InvalidCorsOrigin(self.cors_origin.clone()))
    }
}

impl fmt::Debug for Config {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Config")
            .field("sqlite_path", &self.sqlite_path)
            .field("remote_sqlite_path", &self.remote_sqlite_path)
            .field("db_user", &self.db_user)
            .field("db_pass", &self.db_pass.as_ref().map(|_| "<redacted>"))
            .field("cors_origin", &self.cors_origin)
            .finish()
    }
}
