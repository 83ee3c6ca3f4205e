use dioxus::prelude::*;

#[component]
pub fn About() -> Element {
    rsx! {
        main {
            h1 { "Что-то про меня)" }
            p {
                "Я студентка, учусь на 3 курсе по специальности \"Системное програмирование\". "
                "Учеба не сильно нравится, планирую побыстрее закончить."
            }
        }
    }
}
