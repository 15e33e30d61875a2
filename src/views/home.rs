use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{Hero, LoadFailed, Loading};
use crate::load::{use_page_load, LoadState};
use crate::models::CompanyInfo;

#[component]
pub fn Home() -> Element {
    let api = use_context::<ApiClient>();
    let mut load = use_page_load((), move |()| {
        let api = api.clone();
        async move { api.company_info().await }
    });

    match load.state() {
        LoadState::Loading => rsx! { Loading {} },
        LoadState::Failed(_) => rsx! { LoadFailed { on_retry: move |_| load.retry() } },
        LoadState::Ready(info) => rsx! { CompanyOverview { info } },
    }
}

const STRENGTHS: [(&str, &str); 4] = [
    (
        "Innovation",
        "Cutting-edge environmental technology solutions that push the boundaries of what's possible.",
    ),
    (
        "Sustainability",
        "Every product and service is designed with environmental impact in mind.",
    ),
    (
        "Quality",
        "Rigorous testing and quality control ensure reliable, long-lasting solutions.",
    ),
    (
        "Support",
        "Dedicated customer support team to help you implement and maintain our solutions.",
    ),
];

#[component]
pub fn CompanyOverview(info: CompanyInfo) -> Element {
    rsx! {
        div { class: "main-content",
            Hero { title: "Welcome to {info.name}", subtitle: "{info.description}" }
            div { class: "container",
                div { class: "grid",
                    div { class: "card",
                        h2 { "🌍 Our Mission" }
                        p { "{info.mission}" }
                    }
                    div { class: "card",
                        h2 { "🎯 Our Vision" }
                        p { "{info.vision}" }
                    }
                    div { class: "card",
                        h2 { "📈 Company Stats" }
                        div {
                            h3 { "Founded" }
                            p { "{info.founded}" }
                            h3 { "Employees" }
                            p { "{info.employees}+" }
                            h3 { "Headquarters" }
                            p { "{info.headquarters}" }
                        }
                    }
                }
                div { class: "card",
                    h2 { "🌱 Why Choose JIYER?" }
                    div { class: "grid",
                        for (title, text) in STRENGTHS {
                            div { key: "{title}",
                                h3 { "{title}" }
                                p { "{text}" }
                            }
                        }
                    }
                }
            }
        }
    }
}
