use std::{collections::HashMap, fs, path::Path};

use anyhow::Context;
use url::Url;

use crate::error::CatalogApiError;

pub const DEFAULT_SETTINGS_FILE: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub api_base_url: String,
    pub list_path: String,
    pub create_path: String,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            api_base_url: "https://fakestoreapi.com".into(),
            list_path: "/products".into(),
            create_path: "/products".into(),
        }
    }
}

impl Settings {
    pub fn list_url(&self) -> Result<Url, CatalogApiError> {
        endpoint_url(&self.api_base_url, &self.list_path)
    }

    pub fn create_url(&self) -> Result<Url, CatalogApiError> {
        endpoint_url(&self.api_base_url, &self.create_path)
    }

    pub fn apply_toml(&mut self, raw: &str) -> anyhow::Result<()> {
        let file_cfg = toml::from_str::<HashMap<String, String>>(raw)
            .context("catalog settings must be a flat table of strings")?;
        if let Some(v) = file_cfg.get("api_base_url") {
            self.api_base_url = v.clone();
        }
        if let Some(v) = file_cfg.get("list_path") {
            self.list_path = v.clone();
        }
        if let Some(v) = file_cfg.get("create_path") {
            self.create_path = v.clone();
        }
        Ok(())
    }

    /// Later names win, so `APP__*` overrides `CATALOG_*`.
    pub fn apply_env(&mut self, lookup: impl Fn(&str) -> Option<String>) {
        for name in ["CATALOG_API_BASE_URL", "APP__API_BASE_URL"] {
            if let Some(v) = lookup(name) {
                self.api_base_url = v;
            }
        }
        for name in ["CATALOG_LIST_PATH", "APP__LIST_PATH"] {
            if let Some(v) = lookup(name) {
                self.list_path = v;
            }
        }
        for name in ["CATALOG_CREATE_PATH", "APP__CREATE_PATH"] {
            if let Some(v) = lookup(name) {
                self.create_path = v;
            }
        }
    }
}

/// Defaults, then `path` (or `catalog.toml` in the working directory) if it
/// exists, then environment overrides.
pub fn load_settings(path: Option<&Path>) -> anyhow::Result<Settings> {
    load_settings_from(path, Path::new(DEFAULT_SETTINGS_FILE), |name| {
        std::env::var(name).ok().filter(|v| !v.trim().is_empty())
    })
}

/// A missing `fallback` is not an error; a missing explicit `path` is.
pub(crate) fn load_settings_from(
    path: Option<&Path>,
    fallback: &Path,
    lookup: impl Fn(&str) -> Option<String>,
) -> anyhow::Result<Settings> {
    let mut settings = Settings::default();

    let explicit = path.is_some();
    let path = path.unwrap_or(fallback);
    match fs::read_to_string(path) {
        Ok(raw) => settings
            .apply_toml(&raw)
            .with_context(|| format!("failed to parse settings file '{}'", path.display()))?,
        Err(err) if explicit => {
            return Err(err)
                .with_context(|| format!("failed to read settings file '{}'", path.display()));
        }
        Err(_) => {}
    }

    settings.apply_env(lookup);
    Ok(settings)
}

fn endpoint_url(base: &str, path: &str) -> Result<Url, CatalogApiError> {
    let joined = format!(
        "{}/{}",
        base.trim().trim_end_matches('/'),
        path.trim().trim_start_matches('/')
    );
    Url::parse(&joined).map_err(|source| CatalogApiError::InvalidEndpoint {
        base: base.to_string(),
        path: path.to_string(),
        source,
    })
}

#[cfg(test)]
#[path = "tests/config_tests.rs"]
mod tests;
