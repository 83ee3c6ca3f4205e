use crate::error::format_context;
use folio_domain::Project;
use folio_domain::config::GithubConfig;
use reqwest::header::ACCEPT;
use std::borrow::Cow;
use std::future::Future;
use tracing::{debug, instrument};

#[cfg(not(target_arch = "wasm32"))]
const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));
const GITHUB_JSON: &str = "application/vnd.github+json";

/// Why a repository listing could not be produced.
///
/// The lister collapses all of these into a single failed state; the variants
/// only exist so the diagnostic says what went wrong.
#[derive(Debug, thiserror::Error)]
pub enum FetchError {
    /// Network or transport failure (DNS, TLS, connection reset, CORS in browsers).
    #[error("Transport error{}: {source}", format_context(.context))]
    Transport { source: reqwest::Error, context: Option<Cow<'static, str>> },

    /// The endpoint answered with a non-2xx status.
    #[error("Unexpected status {status}{}", format_context(.context))]
    Status { status: u16, context: Option<Cow<'static, str>> },

    /// The body was not a JSON array of repository objects.
    #[error("Malformed payload{}: {source}", format_context(.context))]
    Decode { source: serde_json::Error, context: Option<Cow<'static, str>> },
}

pub trait FetchErrorExt<T> {
    /// Attaches a short description of the failing step.
    ///
    /// # Errors
    /// Propagates the original error with `context` attached.
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FetchError>;
}

impl<T> FetchErrorExt<T> for Result<T, reqwest::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FetchError> {
        self.map_err(|source| FetchError::Transport { source, context: Some(context.into()) })
    }
}

impl<T> FetchErrorExt<T> for Result<T, serde_json::Error> {
    fn context(self, context: impl Into<Cow<'static, str>>) -> Result<T, FetchError> {
        self.map_err(|source| FetchError::Decode { source, context: Some(context.into()) })
    }
}

impl From<reqwest::Error> for FetchError {
    fn from(source: reqwest::Error) -> Self {
        Self::Transport { source, context: None }
    }
}

impl From<serde_json::Error> for FetchError {
    fn from(source: serde_json::Error) -> Self {
        Self::Decode { source, context: None }
    }
}

/// Anything that can produce the list of projects to show.
pub trait ProjectSource {
    fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, FetchError>>;
}

/// Unauthenticated client for `GET /users/{user}/repos`.
///
/// No pagination and no rate-limit handling: the first page GitHub returns is
/// the list that gets rendered.
#[derive(Debug, Clone)]
pub struct GithubClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GithubClient {
    /// Builds a client for the configured user.
    ///
    /// # Errors
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be constructed.
    pub fn new(config: &GithubConfig) -> Result<Self, FetchError> {
        Self::with_endpoint(config.repos_url())
    }

    /// Builds a client against an explicit listing URL.
    ///
    /// # Errors
    /// Returns [`FetchError::Transport`] if the HTTP client cannot be constructed.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Result<Self, FetchError> {
        let builder = reqwest::Client::builder();
        // Browsers set their own agent; GitHub rejects requests without one.
        #[cfg(not(target_arch = "wasm32"))]
        let builder = builder.user_agent(USER_AGENT);

        let http = builder.build().context("Failed to build HTTP client")?;
        Ok(Self { http, endpoint: endpoint.into() })
    }

    #[must_use]
    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }
}

impl ProjectSource for GithubClient {
    #[instrument(skip(self), fields(endpoint = %self.endpoint))]
    async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
        let response = self
            .http
            .get(&self.endpoint)
            .header(ACCEPT, GITHUB_JSON)
            .send()
            .await
            .context("Requesting repository list")?;

        let status = response.status();
        if !status.is_success() {
            return Err(FetchError::Status {
                status: status.as_u16(),
                context: Some("Requesting repository list".into()),
            });
        }

        let body = response.text().await.context("Reading repository list")?;
        let projects: Vec<Project> =
            serde_json::from_str(&body).context("Decoding repository list")?;

        debug!(count = projects.len(), "Repository list fetched");
        Ok(projects)
    }
}
