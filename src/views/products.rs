use dioxus::prelude::*;

use crate::api::ApiClient;
use crate::catalog::Catalog;
use crate::components::{Hero, LoadFailed, Loading, ProductGrid};
use crate::load::{use_page_load, LoadState};
use crate::models::Product;
use crate::route::Page;
use crate::router::use_navigator;

#[component]
pub fn Products() -> Element {
    let api = use_context::<ApiClient>();
    let mut load = use_page_load((), move |()| {
        let api = api.clone();
        async move { api.catalog().await }
    });

    match load.state() {
        LoadState::Loading => rsx! { Loading {} },
        LoadState::Failed(_) => rsx! { LoadFailed { on_retry: move |_| load.retry() } },
        LoadState::Ready((products, categories)) => rsx! { CatalogView { products, categories } },
    }
}

/// The filterable product listing. Owns the category selection, which starts at "all".
#[component]
pub fn CatalogView(products: Vec<Product>, categories: Vec<String>) -> Element {
    let mut catalog = use_signal(|| Catalog::new(products, categories));
    let mut navigator = use_navigator();

    let (options, selected, visible) = {
        let catalog = catalog.read();
        let visible: Vec<Product> = catalog.visible().into_iter().cloned().collect();
        (catalog.options(), catalog.selected().clone(), visible)
    };

    rsx! {
        div { class: "main-content",
            Hero {
                title: "Our Products",
                subtitle: "Discover our innovative environmental technology solutions",
            }
            div { class: "container",
                div { class: "category-filter",
                    {options.into_iter().map(|option| {
                        let label = option.to_string();
                        let class = if option == selected { "filter-btn active" } else { "filter-btn" };
                        rsx! {
                            button {
                                key: "{label}",
                                class: "{class}",
                                onclick: move |_| catalog.write().select(option.clone()),
                                "{label}"
                            }
                        }
                    })}
                }
                ProductGrid {
                    products: visible,
                    on_select: move |id| navigator.navigate_to(Page::ProductDetail(id)),
                }
            }
        }
    }
}
