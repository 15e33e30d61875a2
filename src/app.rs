use dioxus::history::history;
use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{Footer, Navbar};
use crate::config::SiteConfig;
use crate::route::Page;
use crate::router::{use_navigator, use_router_provider};
use crate::views::{Contact, Home, ProductDetail, Products};

const MAIN_CSS: Asset = asset!("/assets/main.css");

/// Root component. Expects a [`SiteConfig`] in context, see `main`.
#[component]
pub fn App() -> Element {
    let config = use_context::<SiteConfig>();
    use_context_provider(|| ApiClient::new(config.api_base));
    // the renderer provides the history, backed by the browser on web
    use_router_provider(history);

    rsx! {
        document::Stylesheet { href: MAIN_CSS }
        Layout {}
    }
}

/// Navigation bar, the active page view and the footer.
///
/// Needs an [`ApiClient`] and a router in context.
#[component]
pub fn Layout() -> Element {
    let navigator = use_navigator();
    let page = navigator.page();
    let active = page.kind();

    rsx! {
        div {
            Navbar { active }
            {match page {
                Page::Home => rsx! { Home {} },
                Page::Products => rsx! { Products {} },
                Page::Contact => rsx! { Contact {} },
                // a fresh instance per product, so the previous one never shows under a new id
                Page::ProductDetail(id) => {
                    let key = id.to_string();
                    rsx! { ProductDetail { key: "{key}", id } }
                }
            }}
            Footer {}
        }
    }
}
