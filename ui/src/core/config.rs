//! Host configuration.
//!
//! | Variable                 | Meaning                                   | Default      |
//! |--------------------------|-------------------------------------------|--------------|
//! | `STYLESURFACE_CMS_URL`   | Base URL of the content API               | bundled JSON |
//! | `STYLESURFACE_NAV_THEME` | `midnight` / `daylight`                   | `midnight`   |
//! | `STYLESURFACE_LOG`       | `error`, `warn`, `info`, `debug`, `trace` | `info`       |
//!
//! Native hosts read the process environment first and fall back to values
//! baked in at compile time. WASM has no process environment, so only the
//! compile-time values apply there.

use tracing::{warn, Level};

use super::theme::NavTheme;
use crate::cms::{Cms, HttpContent};

pub const CMS_URL_VAR: &str = "STYLESURFACE_CMS_URL";
pub const NAV_THEME_VAR: &str = "STYLESURFACE_NAV_THEME";
pub const LOG_VAR: &str = "STYLESURFACE_LOG";

#[derive(Debug, Clone, PartialEq)]
pub struct SiteConfig {
    pub cms_url: Option<String>,
    pub theme: NavTheme,
    pub log_level: Level,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            cms_url: None,
            theme: NavTheme::default(),
            log_level: Level::INFO,
        }
    }
}

impl SiteConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(lookup_env)
    }

    /// Builds a config from any key/value lookup. Unparseable values are
    /// logged and replaced by their defaults.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let theme = match non_empty(NAV_THEME_VAR).map(|v| v.parse::<NavTheme>()) {
            Some(Ok(theme)) => theme,
            Some(Err(err)) => {
                warn!(%err, "falling back to default navbar theme");
                defaults.theme
            }
            None => defaults.theme,
        };

        let log_level = match non_empty(LOG_VAR).map(|v| v.trim().parse::<Level>()) {
            Some(Ok(level)) => level,
            Some(Err(_)) => {
                warn!(var = LOG_VAR, "unrecognised log level; using info");
                defaults.log_level
            }
            None => defaults.log_level,
        };

        Self {
            cms_url: non_empty(CMS_URL_VAR).map(|v| v.trim().to_string()),
            theme,
            log_level,
        }
    }

    /// Remote content when a CMS URL is configured, bundled content otherwise.
    pub fn cms(&self) -> Cms {
        match &self.cms_url {
            Some(url) => Cms::new(HttpContent::new(url.clone())),
            None => Cms::bundled(),
        }
    }
}

fn compiled_in(key: &str) -> Option<String> {
    let value = match key {
        CMS_URL_VAR => option_env!("STYLESURFACE_CMS_URL"),
        NAV_THEME_VAR => option_env!("STYLESURFACE_NAV_THEME"),
        LOG_VAR => option_env!("STYLESURFACE_LOG"),
        _ => None,
    };
    value.map(str::to_string)
}

#[cfg(not(target_arch = "wasm32"))]
fn lookup_env(key: &str) -> Option<String> {
    std::env::var(key).ok().or_else(|| compiled_in(key))
}

#[cfg(target_arch = "wasm32")]
fn lookup_env(key: &str) -> Option<String> {
    compiled_in(key)
}
