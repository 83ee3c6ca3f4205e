use dioxus::prelude::*;

const SKILLS: [&str; 6] = ["Python", "C++", "Vue", "React", "Django", "HTML/CSS"];

#[component]
pub fn Skills() -> Element {
    rsx! {
        main {
            h1 { "Мои навыки" }
            for skill in SKILLS {
                p { key: "{skill}", "{skill}" }
            }
        }
    }
}
