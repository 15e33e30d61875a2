use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{Hero, LoadFailed, Loading};
use crate::load::{use_page_load, LoadState};
use crate::models::ContactInfo;

#[component]
pub fn Contact() -> Element {
    let api = use_context::<ApiClient>();
    let mut load = use_page_load((), move |()| {
        let api = api.clone();
        async move { api.contact().await }
    });

    match load.state() {
        LoadState::Loading => rsx! { Loading {} },
        LoadState::Failed(_) => rsx! { LoadFailed { on_retry: move |_| load.retry() } },
        LoadState::Ready(info) => rsx! { ContactDetails { info } },
    }
}

#[component]
pub fn ContactDetails(info: ContactInfo) -> Element {
    let social: Vec<(&'static str, String)> = info
        .social_media
        .links()
        .into_iter()
        .map(|(label, url)| (label, url.to_string()))
        .collect();

    rsx! {
        div { class: "main-content",
            Hero {
                title: "Contact Us",
                subtitle: "Get in touch with our team for any inquiries or support",
            }
            div { class: "container",
                div { class: "grid",
                    div { class: "card",
                        h2 { "📍 Contact Information" }
                        div {
                            h3 { "Address" }
                            p { "{info.address}" }
                            h3 { "Phone" }
                            p { "{info.phone}" }
                            h3 { "Email" }
                            p { "{info.email}" }
                            h3 { "Working Hours" }
                            p { "{info.working_hours}" }
                        }
                    }
                    div { class: "card",
                        h2 { "🌐 Social Media" }
                        div {
                            for (label, url) in social {
                                p { key: "{label}",
                                    a {
                                        href: "{url}",
                                        target: "_blank",
                                        rel: "noopener noreferrer",
                                        "{label}"
                                    }
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}
