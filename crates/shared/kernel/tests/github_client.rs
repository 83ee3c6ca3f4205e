use folio_kernel::domain::config::GithubConfig;
use folio_kernel::projects::{
    CancellationToken, FetchError, GithubClient, ListerState, ProjectSource, load_projects,
};
use httpmock::prelude::*;
use serde_json::json;

const REPOS_PATH: &str = "/users/octocat/repos";

fn client_for(server: &MockServer) -> GithubClient {
    let config = GithubConfig { api_base: server.base_url(), username: "octocat".to_owned() };
    GithubClient::new(&config).expect("client should build")
}

#[tokio::test]
async fn fetches_and_decodes_repository_list() {
    let server = MockServer::start_async().await;
    let mock = server
        .mock_async(|when, then| {
            when.method(GET).path(REPOS_PATH);
            then.status(200).header("Content-Type", "application/json").json_body(json!([
                { "id": 1, "name": "dotfiles", "description": null, "html_url": "https://github.com/octocat/dotfiles" },
                { "id": 2, "name": "portfolio", "description": "This site", "html_url": "https://github.com/octocat/portfolio" }
            ]));
        })
        .await;

    let client = client_for(&server);
    assert_eq!(client.endpoint(), server.url(REPOS_PATH));

    let projects = client.fetch_projects().await.expect("fetch should succeed");

    mock.assert_async().await;
    assert_eq!(projects.len(), 2);
    assert_eq!(projects[0].name, "dotfiles");
    assert_eq!(projects[0].description, None);
    assert_eq!(projects[1].description_or_empty(), "This site");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(REPOS_PATH);
            then.status(403).body("rate limited");
        })
        .await;

    let err = client_for(&server).fetch_projects().await.expect_err("403 must fail");
    assert!(matches!(err, FetchError::Status { status: 403, .. }), "got {err}");
}

#[tokio::test]
async fn malformed_payload_is_a_decode_error() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(REPOS_PATH);
            then.status(200).json_body(json!({ "message": "Not Found" }));
        })
        .await;

    let err = client_for(&server).fetch_projects().await.expect_err("object is not a list");
    assert!(matches!(err, FetchError::Decode { .. }), "got {err}");
    assert!(err.to_string().starts_with("Malformed payload (Decoding repository list)"));
}

#[tokio::test]
async fn unreachable_host_is_a_transport_error() {
    let client = GithubClient::with_endpoint("http://127.0.0.1:9/users/nobody/repos")
        .expect("client should build");

    let err = client.fetch_projects().await.expect_err("nothing listens on port 9");
    assert!(matches!(err, FetchError::Transport { .. }), "got {err}");
}

#[tokio::test]
async fn lister_renders_one_entry_per_record() {
    let server = MockServer::start_async().await;
    server
        .mock_async(|when, then| {
            when.method(GET).path(REPOS_PATH);
            then.status(200).json_body(json!([
                { "id": 10, "name": "a", "html_url": "https://github.com/octocat/a" },
                { "id": 11, "name": "b", "html_url": "https://github.com/octocat/b" },
                { "id": 12, "name": "c", "html_url": "https://github.com/octocat/c" }
            ]));
        })
        .await;

    let mut state = ListerState::default();
    assert!(state.begin());

    let client = client_for(&server);
    let next = load_projects(&client, &CancellationToken::new()).await.expect("not cancelled");
    let urls: Vec<_> = next.projects().iter().map(|p| p.html_url.as_str()).collect();

    assert_eq!(
        urls,
        ["https://github.com/octocat/a", "https://github.com/octocat/b", "https://github.com/octocat/c"]
    );
}
