use crate::theme::Theme;
use serde::Deserialize;
use std::ops::{Deref, DerefMut};
use std::sync::Arc;

/// Top-level site configuration shared across components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SiteConfigInner {
    pub owner: OwnerConfig,
    pub appearance: AppearanceConfig,
    pub github: GithubConfig,
    pub log: LogConfig,
}

/// Thin Arc-wrapped config for inexpensive cloning into components.
#[derive(Default, Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct SiteConfig {
    #[serde(flatten, default)]
    inner: Arc<SiteConfigInner>,
}

impl Deref for SiteConfig {
    type Target = SiteConfigInner;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for SiteConfig {
    fn deref_mut(&mut self) -> &mut SiteConfigInner {
        Arc::make_mut(&mut self.inner)
    }
}

/// Who the portfolio belongs to.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct OwnerConfig {
    pub name: String,
    pub copyright_year: u16,
    pub profile_image: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct AppearanceConfig {
    pub default_theme: Theme,
    pub stylesheet: String,
}

/// Public repository listing source.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct GithubConfig {
    pub api_base: String,
    pub username: String,
}

/// Logging knobs; `filter` follows `RUST_LOG` syntax.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    pub level: String,
    pub filter: Option<String>,
}

impl GithubConfig {
    /// `GET` endpoint listing the user's public repositories.
    #[must_use]
    pub fn repos_url(&self) -> String {
        format!("{}/users/{}/repos", self.api_base.trim_end_matches('/'), self.username)
    }
}

// --- Default ---

impl Default for OwnerConfig {
    fn default() -> Self {
        Self {
            name: "Masik".to_owned(),
            copyright_year: 2025,
            profile_image: "/assets/profile.svg".to_owned(),
        }
    }
}

impl Default for AppearanceConfig {
    fn default() -> Self {
        Self { default_theme: Theme::Dark, stylesheet: "/assets/main.css".to_owned() }
    }
}

impl Default for GithubConfig {
    fn default() -> Self {
        Self { api_base: "https://api.github.com".to_owned(), username: "Marinochka0".to_owned() }
    }
}

impl Default for LogConfig {
    fn default() -> Self {
        Self { level: "info".to_owned(), filter: None }
    }
}
