use dioxus::prelude::*;
use dioxus_history::{History, MemoryHistory};
use folio_domain::{Page, Theme};
use folio_ui::App;
use folio_ui::theme::{ThemeHandle, use_theme};
use std::rc::Rc;

const HEADINGS: [(Page, &str); 5] = [
    (Page::Home, "Всем Приветик)"),
    (Page::About, "Что-то про меня)"),
    (Page::Skills, "Мои навыки"),
    (Page::Projects, "Projects"),
    (Page::Contact, "Contact Me"),
];

#[component]
fn AppAt(path: String) -> Element {
    use_context_provider(|| Rc::new(MemoryHistory::with_initial_path(path.clone())) as Rc<dyn History>);
    rsx! { App {} }
}

fn render_at(path: &str) -> String {
    dioxus_ssr::render_element(rsx! { AppAt { path: path.to_owned() } })
}

#[test]
fn each_path_renders_exactly_one_page_inside_the_shell() {
    for (page, heading) in HEADINGS {
        let html = render_at(page.path());

        for (other, other_heading) in HEADINGS {
            let rendered = html.contains(&format!("<h1>{other_heading}</h1>"));
            assert_eq!(rendered, other == page, "{other} heading at {}", page.path());
        }
        assert!(html.contains(heading));

        for link in Page::ALL {
            assert!(html.contains(&format!(r#"href="{}""#, link.path())), "missing {link} link");
        }
        assert_eq!(html.matches(r#"class="active""#).count(), 1);
        assert!(html.contains("© 2025 Masik. All rights reserved."));
    }
}

#[test]
fn about_route_shows_text_header_and_footer() {
    let html = render_at("/about");

    assert!(html.contains("<header>"));
    assert!(html.contains("<footer>"));
    assert!(html.contains("Что-то про меня)"));
    assert!(html.contains(r#"class="theme-toggle""#));
    assert!(html.contains("Switch to light theme"));
}

#[test]
fn unknown_path_renders_home() {
    let html = render_at("/nowhere/at/all");
    assert!(html.contains("<h1>Всем Приветик)</h1>"));
    assert!(html.contains("<footer>"));
}

#[component]
fn ThemeScope(store: ThemeHandle) -> Element {
    use_context_provider(|| store.clone());
    rsx! { ThemeReader {} }
}

#[component]
fn ThemeReader() -> Element {
    let (theme, _) = use_theme();
    rsx! {
        span { "{theme}" }
    }
}

#[test]
fn theme_subscription_follows_component_lifetime() {
    let store = ThemeHandle::new(Theme::Light);
    assert_eq!(store.subscriber_count(), 0);

    let mut dom = VirtualDom::new_with_props(ThemeScope, ThemeScopeProps { store: store.clone() });
    dom.rebuild_in_place();

    assert_eq!(store.subscriber_count(), 1);
    assert!(dioxus_ssr::render(&dom).contains("light"));

    drop(dom);
    assert_eq!(store.subscriber_count(), 0);
}
