#![allow(non_snake_case)]

//! View wiring tests
//! -----------------
//!
//! Runs the site in a virtual dom against a local stand-in for the site API and polls it the way a
//! renderer would, so the views' effects, requests and redirects all take part.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::Duration;

use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::get;
use axum::Json;
use dioxus::history::{History, MemoryHistory};
use dioxus::prelude::*;
use jiyer_site::api::ApiClient;
use jiyer_site::components::{LoadFailed, Loading};
use jiyer_site::load::{use_page_load, LoadState, PageLoad};
use jiyer_site::models::CompanyInfo;
use jiyer_site::router::{use_router_provider, Navigator};
use jiyer_site::{Layout, Page, ProductId};
use serde_json::{json, Value};

#[derive(Clone, Default)]
struct Backend {
    /// How many company info requests answer with a server error before one succeeds.
    company_failures: usize,
    company_hits: Arc<AtomicUsize>,
}

async fn company_info(State(backend): State<Backend>) -> Response {
    let hit = backend.company_hits.fetch_add(1, Ordering::SeqCst);
    if hit < backend.company_failures {
        return StatusCode::INTERNAL_SERVER_ERROR.into_response();
    }
    Json(json!({
        "name": "JIYER",
        "description": "Environmental technology",
        "mission": "Accelerate the transition",
        "vision": "Global leader",
        "founded": 2020,
        "employees": 150,
        "headquarters": "Shenzhen, China",
    }))
    .into_response()
}

fn product_json(id: u64) -> Value {
    json!({
        "id": id,
        "name": format!("Product {id}"),
        "code": format!("JY-{id:03}"),
        "category": "Water",
        "description": "Clean water",
        "images": [],
    })
}

async fn product(Path(id): Path<u64>) -> Response {
    match id {
        7 | 8 => Json(product_json(id)).into_response(),
        _ => (
            StatusCode::NOT_FOUND,
            Json(json!({ "error": "Product not found" })),
        )
            .into_response(),
    }
}

async fn products() -> Json<Value> {
    Json(json!({ "products": [product_json(7), product_json(8)] }))
}

async fn categories() -> Json<Value> {
    Json(json!({ "categories": ["Water", "Air"] }))
}

async fn contact() -> Json<Value> {
    Json(json!({
        "address": "123 Green Street, Shenzhen, China",
        "phone": "+86 123 4567 8900",
        "email": "info@jiyer.com",
        "working_hours": "Monday - Friday: 9:00 AM - 6:00 PM",
        "social_media": { "linkedin": null, "twitter": null, "facebook": null },
    }))
}

/// Serve the API on an ephemeral port and return its base address.
async fn serve(backend: Backend) -> String {
    let app = axum::Router::new()
        .route("/api/company-info", get(company_info))
        .route("/api/products", get(products))
        .route("/api/products/{id}", get(product))
        .route("/api/categories", get(categories))
        .route("/api/contact", get(contact))
        .with_state(backend);

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move { axum::serve(listener, app).await.unwrap() });

    format!("http://{addr}")
}

thread_local! {
    static SITE: RefCell<Option<(Navigator, Rc<MemoryHistory>)>> = const { RefCell::new(None) };
    static COMPANY: Cell<Option<PageLoad<CompanyInfo>>> = const { Cell::new(None) };
}

/// The app shell over an in-memory history, with the router handle kept for the test.
#[component]
fn Site(api: String, path: String) -> Element {
    use_context_provider(|| ApiClient::new(api));
    let history = use_hook(|| Rc::new(MemoryHistory::with_initial_path(path)));
    let navigator = use_router_provider({
        let history = history.clone();
        move || history as Rc<dyn History>
    });
    use_hook(move || SITE.with(|site| *site.borrow_mut() = Some((navigator, history))));

    rsx! { Layout {} }
}

fn site() -> (Navigator, Rc<MemoryHistory>) {
    SITE.with(|site| site.borrow().clone()).unwrap()
}

async fn launch(path: &str, backend: Backend) -> VirtualDom {
    let api = serve(backend).await;
    let mut dom = VirtualDom::new_with_props(
        Site,
        SiteProps {
            api,
            path: path.to_string(),
        },
    );
    dom.rebuild_in_place();
    dom
}

/// Let tasks and effects run until the rendered html contains `needle`.
async fn poll_until(dom: &mut VirtualDom, needle: &str) -> String {
    for _ in 0..100 {
        let html = dioxus_ssr::render(dom);
        if html.contains(needle) {
            return html;
        }
        _ = tokio::time::timeout(Duration::from_millis(50), dom.wait_for_work()).await;
        _ = dom.render_immediate_to_vec();
    }
    panic!("never rendered {needle:?}:\n{}", dioxus_ssr::render(dom));
}

#[tokio::test]
async fn switching_products_never_shows_the_previous_one() {
    let mut dom = launch("/product/7", Backend::default()).await;
    poll_until(&mut dom, "<h1>Product 7</h1>").await;

    let (mut navigator, history) = site();
    dom.in_runtime(|| navigator.navigate_to(Page::ProductDetail(ProductId::from(8))));
    _ = dom.render_immediate_to_vec();

    let html = dioxus_ssr::render(&dom);
    assert!(!html.contains("Product 7"), "{html}");
    assert!(html.contains(r#"<div class="spinner">"#), "{html}");

    poll_until(&mut dom, "<h1>Product 8</h1>").await;
    assert_eq!(history.current_route(), "/product/8");
}

#[tokio::test]
async fn missing_product_sends_the_visitor_home() {
    let mut dom = launch("/product/999", Backend::default()).await;

    let html = poll_until(&mut dom, "<h1>Welcome to JIYER</h1>").await;

    let (_, history) = site();
    assert_eq!(history.current_route(), "/");
    // the broken entry was replaced rather than left behind
    assert!(!history.can_go_back());
    assert!(html.contains(r#"href="/" class="active""#), "{html}");
}

#[tokio::test]
async fn failed_home_load_offers_a_retry() {
    let backend = Backend {
        company_failures: usize::MAX,
        ..Backend::default()
    };
    let mut dom = launch("/", backend).await;

    let html = poll_until(&mut dom, "Try again").await;

    assert!(html.contains("We couldn't load this page."));
    assert!(!html.contains("spinner"));
    let (_, history) = site();
    assert_eq!(history.current_route(), "/");
}

#[tokio::test]
async fn products_page_lists_the_catalog() {
    let mut dom = launch("/products", Backend::default()).await;

    let html = poll_until(&mut dom, "All Categories").await;

    assert_eq!(html.matches(r#"class="product-card""#).count(), 2);
    assert!(html.contains(r#"<button class="filter-btn">Air</button>"#), "{html}");
}

#[component]
fn CompanyName(api: String) -> Element {
    let client = use_hook(|| ApiClient::new(api));
    let mut load = use_page_load((), move |()| {
        let client = client.clone();
        async move { client.company_info().await }
    });
    use_hook(|| COMPANY.with(|company| company.set(Some(load))));

    match load.state() {
        LoadState::Loading => rsx! { Loading {} },
        LoadState::Failed(_) => rsx! { LoadFailed { on_retry: move |_| load.retry() } },
        LoadState::Ready(info) => rsx! { h1 { "{info.name}" } },
    }
}

#[tokio::test]
async fn retry_issues_the_request_again() {
    let backend = Backend {
        company_failures: 1,
        ..Backend::default()
    };
    let hits = backend.company_hits.clone();
    let api = serve(backend).await;
    let mut dom = VirtualDom::new_with_props(CompanyName, CompanyNameProps { api });
    dom.rebuild_in_place();

    poll_until(&mut dom, "Try again").await;
    assert_eq!(hits.load(Ordering::SeqCst), 1);

    let mut load = COMPANY.with(Cell::get).unwrap();
    dom.in_runtime(|| load.retry());

    poll_until(&mut dom, "<h1>JIYER</h1>").await;
    assert_eq!(hits.load(Ordering::SeqCst), 2);
}
