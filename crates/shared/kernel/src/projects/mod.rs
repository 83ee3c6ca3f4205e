//! Remote project listing: the GitHub client and the lister state machine it feeds.

mod client;
mod lister;

pub use crate::projects::client::{FetchError, FetchErrorExt, GithubClient, ProjectSource};
pub use crate::projects::lister::{ListerState, load_projects};
pub use tokio_util::sync::CancellationToken;
