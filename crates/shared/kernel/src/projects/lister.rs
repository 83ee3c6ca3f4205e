use crate::projects::client::{FetchError, ProjectSource};
use folio_domain::Project;
use tokio_util::sync::CancellationToken;
use tracing::{debug, error};

/// View state of the project list: `idle → loading → {loaded | failed}`.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub enum ListerState {
    #[default]
    Idle,
    Loading,
    Loaded(Vec<Project>),
    /// Nothing is rendered in this state: no list, no indicator, no message.
    Failed,
}

impl ListerState {
    /// Enters `loading` from `idle`. Returns `false` if a load already started.
    pub fn begin(&mut self) -> bool {
        if matches!(self, Self::Idle) {
            *self = Self::Loading;
            true
        } else {
            false
        }
    }

    /// Terminal state for a finished fetch. Failures are logged here, once.
    #[must_use]
    pub fn settle(outcome: Result<Vec<Project>, FetchError>) -> Self {
        match outcome {
            Ok(projects) => Self::Loaded(projects),
            Err(err) => {
                error!(error = %err, "Error fetching GitHub repositories");
                Self::Failed
            }
        }
    }

    #[must_use]
    pub const fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    /// Projects to render; empty unless loaded.
    #[must_use]
    pub fn projects(&self) -> &[Project] {
        match self {
            Self::Loaded(projects) => projects,
            _ => &[],
        }
    }
}

/// Runs one fetch against `source` unless `cancel` fires first.
///
/// Returns `None` when the owning view went away before or while the request
/// was in flight. A cancelled load never produces a state and never logs a
/// failure, so a late response cannot touch a dropped view.
pub async fn load_projects<S>(source: &S, cancel: &CancellationToken) -> Option<ListerState>
where
    S: ProjectSource + ?Sized,
{
    tokio::select! {
        biased;
        () = cancel.cancelled() => {
            debug!("Project load cancelled");
            None
        }
        outcome = source.fetch_projects() => {
            if cancel.is_cancelled() {
                debug!("Discarding project list for a dropped view");
                return None;
            }
            Some(ListerState::settle(outcome))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::future::{Future, pending};
    use std::sync::Arc;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use tracing::{Event, Level, Subscriber};
    use tracing_subscriber::Registry;
    use tracing_subscriber::layer::{Context, Layer, SubscriberExt};

    struct Listing(Vec<Project>);

    impl ProjectSource for Listing {
        fn fetch_projects(&self) -> impl Future<Output = Result<Vec<Project>, FetchError>> {
            let projects = self.0.clone();
            async move { Ok(projects) }
        }
    }

    struct Unavailable;

    impl ProjectSource for Unavailable {
        async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
            Err(FetchError::Status { status: 503, context: None })
        }
    }

    struct Hanging;

    impl ProjectSource for Hanging {
        async fn fetch_projects(&self) -> Result<Vec<Project>, FetchError> {
            pending().await
        }
    }

    /// Counts `ERROR` events so tests can assert on diagnostics.
    #[derive(Clone, Default)]
    struct ErrorCounter(Arc<AtomicUsize>);

    impl<S: Subscriber> Layer<S> for ErrorCounter {
        fn on_event(&self, event: &Event<'_>, _ctx: Context<'_, S>) {
            if *event.metadata().level() == Level::ERROR {
                self.0.fetch_add(1, Ordering::SeqCst);
            }
        }
    }

    fn project(id: u64) -> Project {
        Project {
            id,
            name: format!("repo-{id}"),
            description: None,
            html_url: format!("https://github.com/u/repo-{id}"),
        }
    }

    #[test]
    fn begin_only_leaves_idle_once() {
        let mut state = ListerState::default();
        assert!(state.begin());
        assert!(state.is_loading());
        assert!(!state.begin());
        assert!(state.projects().is_empty());
    }

    #[tokio::test]
    async fn successful_fetch_loads_every_record() {
        let source = Listing(vec![project(1), project(2), project(3)]);
        let state = load_projects(&source, &CancellationToken::new()).await;

        let Some(ListerState::Loaded(projects)) = state else {
            panic!("expected loaded state");
        };
        assert_eq!(projects.len(), 3);
        assert_eq!(projects[2].html_url, "https://github.com/u/repo-3");
    }

    #[tokio::test]
    async fn failed_fetch_logs_exactly_once() {
        let counter = ErrorCounter::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(counter.clone()));

        let state = load_projects(&Unavailable, &CancellationToken::new()).await;

        assert_eq!(state, Some(ListerState::Failed));
        assert!(state.as_ref().is_some_and(|s| !s.is_loading() && s.projects().is_empty()));
        assert_eq!(counter.0.load(Ordering::SeqCst), 1);
    }

    #[tokio::test]
    async fn cancelled_load_is_inert() {
        let counter = ErrorCounter::default();
        let _guard = tracing::subscriber::set_default(Registry::default().with(counter.clone()));

        let cancel = CancellationToken::new();
        cancel.cancel();

        assert_eq!(load_projects(&Unavailable, &cancel).await, None);
        assert_eq!(counter.0.load(Ordering::SeqCst), 0);
    }

    #[tokio::test]
    async fn cancelling_an_in_flight_load_resolves_to_none() {
        let cancel = CancellationToken::new();
        let trigger = cancel.clone();

        let (state, ()) = tokio::join!(load_projects(&Hanging, &cancel), async move {
            tokio::task::yield_now().await;
            trigger.cancel();
        });

        assert_eq!(state, None);
    }
}
