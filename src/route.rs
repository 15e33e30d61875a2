//! Page states and the path rules that map browser URLs onto them.
//!
//! Paths are resolved against [`ROUTES`], an ordered table evaluated first-match-wins. Every
//! [`Page`] also knows its canonical path, so navigating to a page and resolving the resulting
//! path always gives the same page back.

use std::fmt::{self, Display};
use std::str::FromStr;

use crate::error::ProductIdError;

/// Identifier of a product, kept as the digit string it was written with.
///
/// Product detail paths accept any number of digits, so the id is not narrowed to a machine
/// integer.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProductId(String);

impl ProductId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl FromStr for ProductId {
    type Err = ProductIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.is_empty() {
            return Err(ProductIdError::Empty);
        }
        if !s.bytes().all(|b| b.is_ascii_digit()) {
            return Err(ProductIdError::NotNumeric(s.to_string()));
        }
        Ok(Self(s.to_string()))
    }
}

impl From<u64> for ProductId {
    fn from(id: u64) -> Self {
        Self(id.to_string())
    }
}

impl Display for ProductId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// The page currently on screen.
///
/// Only the product detail page carries a product id.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum Page {
    #[default]
    Home,
    Products,
    Contact,
    ProductDetail(ProductId),
}

/// A [`Page`] with its parameters stripped, used to highlight navigation links.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum PageKind {
    Home,
    Products,
    Contact,
    ProductDetail,
}

impl Page {
    /// The canonical path pushed onto the history when navigating to this page.
    pub fn path(&self) -> String {
        match self {
            Page::Home => "/".to_string(),
            Page::Products => "/products".to_string(),
            Page::Contact => "/contact".to_string(),
            Page::ProductDetail(id) => format!("/product/{id}"),
        }
    }

    pub fn kind(&self) -> PageKind {
        match self {
            Page::Home => PageKind::Home,
            Page::Products => PageKind::Products,
            Page::Contact => PageKind::Contact,
            Page::ProductDetail(_) => PageKind::ProductDetail,
        }
    }

    pub fn product_id(&self) -> Option<&ProductId> {
        match self {
            Page::ProductDetail(id) => Some(id),
            _ => None,
        }
    }
}

impl Display for Page {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.path())
    }
}

/// One entry of the routing table.
pub struct RouteRule {
    /// Human readable form of the pattern, used in logs.
    pub pattern: &'static str,
    pub matcher: fn(&str) -> Option<Page>,
}

/// The routing table. Order matters: the first rule whose matcher accepts a path wins.
pub const ROUTES: &[RouteRule] = &[
    RouteRule {
        pattern: "/product/{id}",
        matcher: match_product_detail,
    },
    RouteRule {
        pattern: "/",
        matcher: match_home,
    },
    RouteRule {
        pattern: "/products",
        matcher: match_products,
    },
    RouteRule {
        pattern: "/contact",
        matcher: match_contact,
    },
];

/// Resolve a path against [`ROUTES`].
///
/// Returns `None` for paths no rule accepts. What to do with those is up to the caller.
pub fn resolve(path: &str) -> Option<Page> {
    ROUTES.iter().find_map(|rule| {
        let page = (rule.matcher)(path)?;
        tracing::trace!(path, pattern = rule.pattern, "route matched");
        Some(page)
    })
}

fn match_product_detail(path: &str) -> Option<Page> {
    let id = path.strip_prefix("/product/")?;
    id.parse().ok().map(Page::ProductDetail)
}

fn match_home(path: &str) -> Option<Page> {
    (path == "/").then_some(Page::Home)
}

fn match_products(path: &str) -> Option<Page> {
    (path == "/products").then_some(Page::Products)
}

fn match_contact(path: &str) -> Option<Page> {
    (path == "/contact").then_some(Page::Contact)
}
