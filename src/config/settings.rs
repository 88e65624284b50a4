use std::fs;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::error::{AppError, AppResult};

const DEFAULT_BASE_URL: &str = "https://api.example.com";
const DEFAULT_API_KEY_HEADER: &str = "X-API-Key";

pub const API_KEY_ENV: &str = "MAIL_API_KEY";
pub const BASE_URL_ENV: &str = "MAIL_API_BASE_URL";

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Settings {
    #[serde(default)]
    pub api_key: Option<String>,
    #[serde(default)]
    pub base_url: Option<String>,
    #[serde(default)]
    pub api_key_header: Option<String>,
}

impl Settings {
    pub fn api_key(&self) -> AppResult<&str> {
        self.api_key
            .as_deref()
            .map(str::trim)
            .filter(|key| !key.is_empty())
            .ok_or_else(|| {
                AppError::Config(format!(
                    "missing api key. set {API_KEY_ENV} or run `postbox config set --api-key <key>`"
                ))
            })
    }

    pub fn base_url(&self) -> String {
        self.base_url
            .clone()
            .unwrap_or_else(|| DEFAULT_BASE_URL.to_string())
    }

    pub fn api_key_header(&self) -> String {
        self.api_key_header
            .clone()
            .unwrap_or_else(|| DEFAULT_API_KEY_HEADER.to_string())
    }

    pub fn with_overrides<F>(mut self, lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(key) = lookup(API_KEY_ENV).filter(|value| !value.trim().is_empty()) {
            self.api_key = Some(key);
        }
        if let Some(url) = lookup(BASE_URL_ENV).filter(|value| !value.trim().is_empty()) {
            self.base_url = Some(url);
        }
        self
    }

    pub fn masked_api_key(&self) -> Option<String> {
        let key = self.api_key.as_deref()?;
        let count = key.chars().count();
        if count <= 4 {
            return Some("****".to_string());
        }

        let tail: String = key.chars().skip(count - 4).collect();
        Some(format!("****{tail}"))
    }
}

pub fn load(path: PathBuf) -> AppResult<Settings> {
    if !path.exists() {
        return Ok(Settings::default());
    }

    let raw = fs::read_to_string(path)?;
    let settings = serde_json::from_str(&raw)?;
    Ok(settings)
}

pub fn save(path: PathBuf, settings: &Settings) -> AppResult<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }

    let payload = serde_json::to_string_pretty(settings)?;
    fs::write(&path, payload)?;

    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;

        let mut perms = fs::metadata(&path)?.permissions();
        perms.set_mode(0o600);
        fs::set_permissions(&path, perms)?;
    }

    Ok(())
}
