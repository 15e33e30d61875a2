use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::components::{Hero, Loading};
use crate::load::{use_page_load, LoadState};
use crate::models::Product;
use crate::route::{Page, ProductId};
use crate::router::use_navigator;

/// Detail page for a single product.
///
/// Any failure, including the API reporting the product as missing, sends the visitor back to
/// the home page. The redirect replaces the broken entry in the history.
#[component]
pub fn ProductDetail(id: ProductId) -> Element {
    let api = use_context::<ApiClient>();
    let mut navigator = use_navigator();

    let load = use_page_load(id, move |id: ProductId| {
        let api = api.clone();
        async move { api.product(&id).await }
    });

    use_effect(move || {
        if let LoadState::Failed(err) = load.state() {
            tracing::warn!(%err, "product unavailable, returning home");
            navigator.redirect(Page::Home);
        }
    });

    match load.state() {
        LoadState::Ready(product) => rsx! {
            ProductSheet {
                product,
                on_back: move |_| navigator.navigate_to(Page::Products),
            }
        },
        LoadState::Loading | LoadState::Failed(_) => rsx! { Loading {} },
    }
}

#[component]
pub fn ProductSheet(product: Product, on_back: EventHandler<()>) -> Element {
    let images = product.primary_image().map(|src| {
        let gallery: Vec<(String, String)> = product
            .gallery()
            .iter()
            .enumerate()
            .map(|(index, image)| (image.clone(), format!("{} {}", product.name, index + 2)))
            .collect();

        rsx! {
            div { class: "product-images",
                div { class: "main-image",
                    img { src: "{src}", alt: "{product.name}" }
                }
                if !gallery.is_empty() {
                    div { class: "image-gallery",
                        for (src, alt) in gallery {
                            img { key: "{alt}", src: "{src}", alt: "{alt}" }
                        }
                    }
                }
            }
        }
    });

    rsx! {
        div { class: "main-content",
            Hero {
                title: "{product.name}",
                subtitle: "{product.category} • Code: {product.code}",
            }
            div { class: "container",
                div { class: "product-detail",
                    {images}
                    div { class: "product-info",
                        h2 { "Product Details" }
                        div { class: "product-meta",
                            p {
                                strong { "Category:" }
                                " {product.category}"
                            }
                            p {
                                strong { "Product Code:" }
                                " {product.code}"
                            }
                        }
                        div { class: "product-description",
                            h3 { "Description" }
                            p { "{product.description}" }
                        }
                        button { class: "btn", onclick: move |_| on_back.call(()), "← Back to Products" }
                    }
                }
            }
        }
    }
}
