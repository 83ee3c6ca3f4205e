use crate::app::use_site_config;
use dioxus::prelude::*;
use folio_kernel::projects::{CancellationToken, GithubClient, ListerState, load_projects};

/// Fetches the owner's repositories once per mount.
///
/// The request is tied to a cancellation token that fires when the page unmounts,
/// so a response arriving afterwards is dropped without touching state.
#[component]
pub fn Projects() -> Element {
    let config = use_site_config();
    let mut state = use_signal(|| {
        let mut state = ListerState::default();
        state.begin();
        state
    });
    let cancel = use_hook(CancellationToken::new);

    use_hook(|| {
        let cancel = cancel.clone();
        let github = config.github.clone();
        spawn(async move {
            let next = match GithubClient::new(&github) {
                Ok(client) => load_projects(&client, &cancel).await,
                Err(err) => Some(ListerState::settle(Err(err))),
            };
            if let Some(next) = next {
                state.set(next);
            }
        })
    });

    use_drop(move || cancel.cancel());

    rsx! {
        main {
            h1 { "Projects" }
            ProjectList { state: state() }
        }
    }
}

/// Stateless rendering of a [`ListerState`]. Idle and failed render nothing.
#[component]
pub fn ProjectList(state: ListerState) -> Element {
    match state {
        ListerState::Idle | ListerState::Failed => rsx! {},
        ListerState::Loading => rsx! {
            p { class: "loading", "Loading..." }
        },
        ListerState::Loaded(projects) => rsx! {
            ul { class: "project-list",
                // Lenient decoding can leave ids and urls empty, so the position disambiguates.
                {projects.into_iter().enumerate().map(|(index, project)| {
                    let description = project.description_or_empty().to_owned();
                    rsx! {
                        li { key: "{index}-{project.html_url}",
                            h2 { "{project.name}" }
                            p { "{description}" }
                            a {
                                href: "{project.html_url}",
                                target: "_blank",
                                rel: "noopener noreferrer",
                                "View on GitHub"
                            }
                        }
                    }
                })}
            }
        },
    }
}
