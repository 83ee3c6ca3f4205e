use folio_domain::Theme;
use folio_domain::config::{GithubConfig, OwnerConfig, SiteConfig};
use serde_json::json;

#[test]
fn config_defaults_are_sane() {
    let owner = OwnerConfig::default();
    assert_eq!(owner.name, "Masik");
    assert_eq!(owner.copyright_year, 2025);

    let github = GithubConfig::default();
    assert_eq!(github.repos_url(), "https://api.github.com/users/Marinochka0/repos");

    let site = SiteConfig::default();
    assert_eq!(site.appearance.default_theme, Theme::Dark);
    assert_eq!(site.log.level, "info");
    assert!(site.log.filter.is_none());
}

#[test]
fn site_config_deserializes_partial_sources() {
    let raw = json!({
        "owner": { "name": "Marina" },
        "appearance": { "default_theme": "light" },
        "github": { "api_base": "http://127.0.0.1:9000/", "username": "octocat" }
    });

    let cfg: SiteConfig = serde_json::from_value(raw).expect("config deserialize");
    assert_eq!(cfg.owner.name, "Marina");
    assert_eq!(cfg.owner.copyright_year, 2025);
    assert_eq!(cfg.appearance.default_theme, Theme::Light);
    assert_eq!(cfg.github.repos_url(), "http://127.0.0.1:9000/users/octocat/repos");
}

#[test]
fn site_config_clones_share_until_mutated() {
    let base = SiteConfig::default();
    let mut edited = base.clone();
    edited.owner.name = "Someone Else".to_owned();

    assert_eq!(base.owner.name, "Masik");
    assert_eq!(edited.owner.name, "Someone Else");
}
