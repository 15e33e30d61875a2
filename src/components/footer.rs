use dioxus::prelude::*;

use super::nav::{NavLink, LOGO};
use crate::route::Page;

#[component]
pub fn Footer() -> Element {
    rsx! {
        footer { class: "footer",
            div { class: "footer-content",
                div { class: "footer-section",
                    h3 {
                        img { src: LOGO, alt: "JIYER", class: "footer-logo" }
                        "JIYER"
                    }
                    p { "Leading environmental technology solutions for a sustainable future." }
                }
                div { class: "footer-section",
                    h3 { "Quick Links" }
                    NavLink { to: Page::Home, "Company Introduction" }
                    NavLink { to: Page::Products, "Products" }
                    NavLink { to: Page::Contact, "Contact Us" }
                }
                div { class: "footer-section",
                    h3 { "Contact Info" }
                    p { "123 Green Street, Shenzhen, China" }
                    p { "+86 123 4567 8900" }
                    p { "info@jiyer.com" }
                }
                div { class: "footer-section",
                    h3 { "Follow Us" }
                    a { href: "https://linkedin.com/company/jiyer", target: "_blank", rel: "noopener noreferrer", "LinkedIn" }
                    a { href: "https://twitter.com/jiyer_eco", target: "_blank", rel: "noopener noreferrer", "Twitter" }
                    a { href: "https://facebook.com/jiyercompany", target: "_blank", rel: "noopener noreferrer", "Facebook" }
                }
            }
            div { class: "footer-bottom",
                p { "© 2025 JIYER. All rights reserved. | Building a greener future together." }
            }
        }
    }
}
