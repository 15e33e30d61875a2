use dioxus::prelude::*;

#[component]
pub fn Hero(title: String, subtitle: String) -> Element {
    rsx! {
        div { class: "hero",
            div { class: "container",
                h1 { "{title}" }
                p { "{subtitle}" }
            }
        }
    }
}
