use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

use crate::error::{CheckError, Result};

pub const DEFAULT_TIMEOUT_SECS: u64 = 10;

/// Optional defaults read from a JSON file.
///
/// Every field can be overridden on the command line. Keeping the secret here
/// keeps it out of the process table.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub site_url: Option<String>,
    #[serde(default)]
    pub token: Option<String>,
    #[serde(default)]
    pub user: Option<String>,
    #[serde(default)]
    pub secret: Option<String>,
    #[serde(default)]
    pub insecure: Option<bool>,
    #[serde(default)]
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Load the config file.
    ///
    /// An explicitly given path must exist. Without one, the default location
    /// is used if present and an empty config is returned otherwise.
    pub fn load(explicit: Option<&Path>) -> Result<Self> {
        match explicit {
            Some(path) => Self::load_from(path),
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::load_from(&path),
                _ => Ok(Config::default()),
            },
        }
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        let data = fs::read_to_string(path).map_err(|e| {
            CheckError::config(format!("failed to read {}: {}", path.display(), e))
        })?;

        if data.trim().is_empty() {
            return Ok(Config::default());
        }

        serde_json::from_str(&data)
            .map_err(|e| CheckError::config(format!("failed to parse {}: {}", path.display(), e)))
    }

    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("check_cmk_services").join("config.json"))
    }
}

/// How to authenticate against the Check_MK site
#[derive(Clone, PartialEq, Eq)]
pub enum Credentials {
    Token(String),
    Automation { user: String, secret: String },
}

impl Credentials {
    /// Pick credentials from the available values, a token wins over a user/secret pair
    pub fn select(
        token: Option<String>,
        user: Option<String>,
        secret: Option<String>,
    ) -> Result<Self> {
        let non_empty = |value: Option<String>| value.filter(|v| !v.trim().is_empty());

        if let Some(token) = non_empty(token) {
            return Ok(Credentials::Token(token));
        }
        match (non_empty(user), non_empty(secret)) {
            (Some(user), Some(secret)) => Ok(Credentials::Automation { user, secret }),
            (Some(_), None) => Err(CheckError::usage("--user requires --secret")),
            (None, Some(_)) => Err(CheckError::usage("--secret requires --user")),
            (None, None) => Err(CheckError::usage(
                "either --token or --user and --secret must be given",
            )),
        }
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Credentials::Token(_) => f.write_str("Token(***)"),
            Credentials::Automation { user, .. } => {
                write!(f, "Automation {{ user: {:?}, secret: *** }}", user)
            }
        }
    }
}

/// Connection settings after merging the config file with command-line flags
#[derive(Debug, Clone)]
pub struct ConnectionSettings {
    pub site_url: Url,
    pub credentials: Credentials,
    pub insecure: bool,
    pub timeout: Duration,
}

/// Values given on the command line, each overriding the config file
#[derive(Debug, Clone, Default)]
pub struct ConnectionOverrides {
    pub site_url: Option<String>,
    pub token: Option<String>,
    pub user: Option<String>,
    pub secret: Option<String>,
    pub insecure: bool,
    pub timeout_secs: Option<u64>,
}

impl ConnectionSettings {
    pub fn resolve(config: Config, overrides: ConnectionOverrides) -> Result<Self> {
        let site_url = overrides
            .site_url
            .or(config.site_url)
            .ok_or_else(|| CheckError::usage("--site-url is required"))?;
        let site_url = parse_site_url(&site_url)?;

        let credentials = Credentials::select(
            overrides.token.or(config.token),
            overrides.user.or(config.user),
            overrides.secret.or(config.secret),
        )?;

        let timeout_secs = overrides
            .timeout_secs
            .or(config.timeout_secs)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        if timeout_secs == 0 {
            return Err(CheckError::usage("--timeout must be at least 1 second"));
        }

        Ok(Self {
            site_url,
            credentials,
            insecure: overrides.insecure || config.insecure.unwrap_or(false),
            timeout: Duration::from_secs(timeout_secs),
        })
    }
}

/// Parse the site URL, e.g. `https://monitor.example.com/mysite`
pub fn parse_site_url(raw: &str) -> Result<Url> {
    let trimmed = raw.trim();
    let mut url = Url::parse(trimmed)?;

    if url.scheme() != "http" && url.scheme() != "https" {
        return Err(CheckError::usage(format!(
            "site URL must use http or https, got: {}",
            url.scheme()
        )));
    }
    if url.host_str().is_none() {
        return Err(CheckError::usage("site URL has no hostname"));
    }

    // Joining relative paths onto the site needs a trailing slash
    if !url.path().ends_with('/') {
        let path = format!("{}/", url.path());
        url.set_path(&path);
    }
    url.set_query(None);
    url.set_fragment(None);
    Ok(url)
}
