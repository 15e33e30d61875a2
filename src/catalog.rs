//! Client-side category filtering of the product list.

use std::fmt::{self, Display};

use crate::models::Product;

/// The category filter selection.
#[derive(Clone, Debug, PartialEq, Eq, Hash, Default)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(String),
}

impl CategoryFilter {
    /// Exact, case-sensitive match on the product's category.
    pub fn admits(&self, product: &Product) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Only(category) => product.category == *category,
        }
    }
}

impl Display for CategoryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            CategoryFilter::All => f.write_str("All Categories"),
            CategoryFilter::Only(category) => f.write_str(category),
        }
    }
}

/// The fetched products and categories together with the current selection.
///
/// Filter options come from the categories endpoint, not from the products, so a category
/// with no products is still offered.
#[derive(Clone, Debug, PartialEq, Default)]
pub struct Catalog {
    products: Vec<Product>,
    categories: Vec<String>,
    selected: CategoryFilter,
}

impl Catalog {
    pub fn new(products: Vec<Product>, categories: Vec<String>) -> Self {
        Self {
            products,
            categories,
            selected: CategoryFilter::All,
        }
    }

    pub fn select(&mut self, filter: CategoryFilter) {
        self.selected = filter;
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    /// `All` followed by one option per fetched category, in fetched order.
    pub fn options(&self) -> Vec<CategoryFilter> {
        std::iter::once(CategoryFilter::All)
            .chain(self.categories.iter().cloned().map(CategoryFilter::Only))
            .collect()
    }

    pub fn visible(&self) -> Vec<&Product> {
        self.products
            .iter()
            .filter(|product| self.selected.admits(product))
            .collect()
    }
}
