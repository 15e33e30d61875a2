use dioxus::prelude::*;

/// Placeholder shown while a page view waits for its data.
#[component]
pub fn Loading() -> Element {
    rsx! {
        div { class: "loading",
            div { class: "spinner" }
        }
    }
}

#[component]
pub fn LoadFailed(on_retry: EventHandler<()>) -> Element {
    rsx! {
        div { class: "load-failed",
            p { "We couldn't load this page." }
            button { class: "btn", onclick: move |_| on_retry.call(()), "Try again" }
        }
    }
}
