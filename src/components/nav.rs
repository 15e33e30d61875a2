use dioxus::prelude::*;

use crate::route::{Page, PageKind};
use crate::router::use_navigator;

pub const LOGO: &str = "/static/images/logo.png";

/// An anchor to one of the site's pages.
///
/// The `href` is the page's real path so the link still works when opened in a new tab; plain
/// clicks are intercepted and routed without reloading the document.
#[component]
pub fn NavLink(to: Page, #[props(default)] class: String, children: Element) -> Element {
    let mut navigator = use_navigator();
    let href = to.path();

    rsx! {
        a {
            href: "{href}",
            class: "{class}",
            onclick: move |evt: MouseEvent| {
                evt.prevent_default();
                navigator.navigate_to(to.clone());
            },
            {children}
        }
    }
}

#[component]
pub fn Navbar(active: PageKind) -> Element {
    let links = [
        (Page::Home, "Company Introduction"),
        (Page::Products, "Products"),
        (Page::Contact, "Contact Us"),
    ];

    rsx! {
        nav { class: "navbar",
            div { class: "nav-container",
                NavLink { to: Page::Home, class: "logo",
                    img { src: LOGO, alt: "JIYER", class: "logo-img" }
                    "JIYER"
                }
                ul { class: "nav-links",
                    {links.into_iter().map(|(page, label)| {
                        let class = if page.kind() == active { "active" } else { "" };
                        rsx! {
                            li { key: "{label}",
                                NavLink { to: page, class: "{class}", "{label}" }
                            }
                        }
                    })}
                }
            }
        }
    }
}
