//! Browser launcher for the portfolio.
//!
//! Resolves the site configuration compiled into the bundle, installs logging and
//! mounts the root component with the configuration as root context.

use dioxus::prelude::*;
use folio::domain::config::SiteConfig;
use folio::kernel::config::load_embedded;
use folio_logger::{Logger, LoggerError};
use tracing::{info, warn};

#[derive(Debug)]
pub struct WebApp {
    site: SiteConfig,
    config_warning: Option<String>,
}

impl Default for WebApp {
    fn default() -> Self {
        Self { site: SiteConfig::default(), config_warning: None }
    }
}

impl WebApp {
    /// Uses the `site.toml` bundled into the facade crate.
    #[must_use]
    pub fn from_embedded() -> Self {
        Self::from_source(folio::DEFAULT_SITE)
    }

    /// Parses `source` as TOML site configuration.
    ///
    /// A broken source does not stop the site: defaults are used and the failure
    /// is reported once logging is up.
    #[must_use]
    pub fn from_source(source: &str) -> Self {
        match load_embedded::<SiteConfig>(source) {
            Ok(site) => Self { site, config_warning: None },
            Err(err) => Self { site: SiteConfig::default(), config_warning: Some(err.to_string()) },
        }
    }

    #[must_use]
    pub fn with_site(mut self, site: SiteConfig) -> Self {
        self.site = site;
        self
    }

    #[must_use]
    pub const fn site(&self) -> &SiteConfig {
        &self.site
    }

    /// Installs the global logger using the `[log]` section of the site config.
    ///
    /// # Errors
    /// Returns [`LoggerError`] if a logger is already installed or the filter is invalid.
    pub fn init_logging(&self) -> Result<Logger, LoggerError> {
        let builder = Logger::builder()
            .name(env!("CARGO_PKG_NAME"))
            .console(true)
            .level_name(&self.site.log.level);

        let builder = match &self.site.log.filter {
            Some(filter) => builder.env_filter(filter.clone()),
            None => builder,
        };

        let logger = builder.init()?;

        if let Some(warning) = &self.config_warning {
            warn!(error = %warning, "Site config rejected, using defaults");
        }
        info!(
            owner = %self.site.owner.name,
            github = %self.site.github.username,
            theme = %self.site.appearance.default_theme,
            "Site config loaded"
        );

        Ok(logger)
    }

    /// The entry point for launching the app
    pub fn launch(self, root: fn() -> Element) {
        LaunchBuilder::web().with_context(self.site).launch(root);
    }
}
