//! The JIYER company site.
//!
//! A single-page app: the [`router`] maps the browser path onto a [`route::Page`], the app shell
//! renders the matching view from [`views`], and each view loads its own data from the site API
//! through [`api::ApiClient`].

pub mod api;
pub mod app;
pub mod catalog;
pub mod components;
pub mod config;
pub mod error;
pub mod load;
pub mod models;
pub mod route;
pub mod router;
pub mod views;

pub use app::{App, Layout};
pub use config::SiteConfig;
pub use error::{ApiError, Result};
pub use route::{Page, ProductId};
