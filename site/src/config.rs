//! Site configuration.
//!
//! Layered: built-in defaults, then an optional TOML file named by
//! `STARSITE_CONFIG`, then `STARSITE_*` environment overrides. CLI flags are
//! applied on top by the binary.

use crate::error::{SiteError, SiteResult};
use crate::page::PageMeta;
use serde::Deserialize;
use std::net::SocketAddr;
use std::path::{Path, PathBuf};

pub const CONFIG_ENV: &str = "STARSITE_CONFIG";
pub const ADDR_ENV: &str = "STARSITE_ADDR";
pub const ASSET_DIR_ENV: &str = "STARSITE_ASSET_DIR";
pub const BUNDLE_ENV: &str = "STARSITE_BUNDLE";
pub const STATIC_PREFIX_ENV: &str = "STARSITE_STATIC_PREFIX";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Listen address.
    pub addr: String,
    /// Directory holding the bundle, stylesheets and images.
    pub asset_dir: PathBuf,
    /// Logical path of the client build whose size is reported.
    pub bundle_path: String,
    /// URL prefix assets are served under; may be an absolute CDN URL.
    pub static_prefix: String,
    pub page: PageMeta,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            addr: "127.0.0.1:3000".to_string(),
            asset_dir: PathBuf::from("static"),
            bundle_path: "datastar.iife.js".to_string(),
            static_prefix: "/static/".to_string(),
            page: PageMeta::default(),
        }
    }
}

impl SiteConfig {
    pub fn from_toml_str(source: &str) -> SiteResult<Self> {
        toml::from_str(source).map_err(|e| SiteError::Config(e.to_string()))
    }

    pub fn from_file(path: impl AsRef<Path>) -> SiteResult<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .map_err(|e| SiteError::Config(format!("cannot read {}: {e}", path.display())))?;
        Self::from_toml_str(&source)
    }

    /// Defaults, the `STARSITE_CONFIG` file if set, then env overrides.
    pub fn load() -> SiteResult<Self> {
        let base = match std::env::var(CONFIG_ENV) {
            Ok(path) => {
                tracing::debug!(%path, "Loading config file");
                Self::from_file(path)?
            }
            Err(_) => Self::default(),
        };
        Ok(base.with_overrides(|key| std::env::var(key).ok()))
    }

    /// Apply `STARSITE_*` overrides from `lookup`.
    pub fn with_overrides(mut self, lookup: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(addr) = lookup(ADDR_ENV) {
            self.addr = addr;
        }
        if let Some(dir) = lookup(ASSET_DIR_ENV) {
            self.asset_dir = PathBuf::from(dir);
        }
        if let Some(bundle) = lookup(BUNDLE_ENV) {
            self.bundle_path = bundle;
        }
        if let Some(prefix) = lookup(STATIC_PREFIX_ENV) {
            self.static_prefix = prefix;
        }
        self
    }

    pub fn socket_addr(&self) -> SiteResult<SocketAddr> {
        self.addr
            .parse()
            .map_err(|e| SiteError::Config(format!("invalid addr `{}`: {e}", self.addr)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.bundle_path, "datastar.iife.js");
        assert_eq!(config.socket_addr().unwrap().port(), 3000);
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = SiteConfig::from_toml_str(
            r#"
            addr = "0.0.0.0:8080"

            [page]
            title = "Starsite"
            "#,
        )
        .unwrap();

        assert_eq!(config.addr, "0.0.0.0:8080");
        assert_eq!(config.page.title, "Starsite");
        assert_eq!(config.page.language, "en");
        assert_eq!(config.static_prefix, "/static/");
    }

    #[test]
    fn test_invalid_toml_is_config_error() {
        let err = SiteConfig::from_toml_str("addr = [").unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }

    #[test]
    fn test_env_overrides() {
        let env: HashMap<&str, &str> = [
            (ADDR_ENV, "127.0.0.1:9999"),
            (BUNDLE_ENV, "app.js"),
        ]
        .into_iter()
        .collect();

        let config =
            SiteConfig::default().with_overrides(|key| env.get(key).map(|v| v.to_string()));
        assert_eq!(config.addr, "127.0.0.1:9999");
        assert_eq!(config.bundle_path, "app.js");
        assert_eq!(config.asset_dir, PathBuf::from("static"));
    }

    #[test]
    fn test_bad_addr() {
        let config = SiteConfig {
            addr: "not-an-addr".to_string(),
            ..SiteConfig::default()
        };
        assert!(matches!(config.socket_addr(), Err(SiteError::Config(_))));
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let err = SiteConfig::from_file(dir.path().join("nope.toml")).unwrap_err();
        assert!(matches!(err, SiteError::Config(_)));
    }
}
