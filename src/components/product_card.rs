use dioxus::prelude::*;

use crate::models::Product;
use crate::route::ProductId;

#[component]
pub fn ProductCard(product: Product, on_select: EventHandler<ProductId>) -> Element {
    let id = product.product_id();
    let image = product.primary_image().map(str::to_string);

    rsx! {
        div { class: "product-card",
            div { class: "product-image",
                {match image {
                    Some(src) => rsx! { img { src: "{src}", alt: "{product.name}" } },
                    None => rsx! { div { class: "placeholder-image", "📦" } },
                }}
            }
            div { class: "product-content",
                h3 { "{product.name}" }
                p { class: "product-code", "Code: {product.code}" }
                p { class: "product-category", "{product.category}" }
                p { class: "product-description", "{product.description}" }
                button {
                    class: "btn",
                    onclick: move |_| on_select.call(id.clone()),
                    "View Details"
                }
            }
        }
    }
}

/// Grid of product cards, or the empty-state message when there is nothing to show.
#[component]
pub fn ProductGrid(products: Vec<Product>, on_select: EventHandler<ProductId>) -> Element {
    if products.is_empty() {
        return rsx! {
            div { class: "no-products",
                p { "No products found in this category." }
            }
        };
    }

    rsx! {
        div { class: "products-grid",
            {products.into_iter().map(|product| {
                let key = product.id;
                rsx! { ProductCard { key: "{key}", product, on_select } }
            })}
        }
    }
}
