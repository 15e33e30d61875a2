//! Client for the site API.
//!
//! Each page view asks for its own data through one of the methods on [`ApiClient`]. Bodies are
//! read as text and decoded with `serde_json` so malformed payloads surface as
//! [`ApiError::Decode`] rather than as transport errors.

use serde::de::DeserializeOwned;

use crate::error::{ApiError, Result};
use crate::models::{CategoryList, CompanyInfo, ContactInfo, Product, ProductList, ProductLookup};
use crate::route::ProductId;

#[derive(Clone, Debug)]
pub struct ApiClient {
    http: reqwest::Client,
    base: String,
}

impl ApiClient {
    /// `base` is the scheme and authority the `/api/...` paths are appended to.
    pub fn new(base: impl Into<String>) -> Self {
        let base = base.into().trim_end_matches('/').to_string();
        Self {
            http: reqwest::Client::new(),
            base,
        }
    }

    pub fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base)
    }

    pub async fn company_info(&self) -> Result<CompanyInfo> {
        self.get_json("/api/company-info").await
    }

    pub async fn contact(&self) -> Result<ContactInfo> {
        self.get_json("/api/contact").await
    }

    pub async fn products(&self) -> Result<Vec<Product>> {
        let list: ProductList = self.get_json("/api/products").await?;
        Ok(list.products)
    }

    pub async fn categories(&self) -> Result<Vec<String>> {
        let list: CategoryList = self.get_json("/api/categories").await?;
        Ok(list.categories)
    }

    /// Fetch the product list and the category list concurrently.
    ///
    /// The two lists are independent: a category may have no products.
    pub async fn catalog(&self) -> Result<(Vec<Product>, Vec<String>)> {
        futures::try_join!(self.products(), self.categories())
    }

    /// Fetch a single product. Both a 404 and an `{error}` body map to [`ApiError::NotFound`].
    pub async fn product(&self, id: &ProductId) -> Result<Product> {
        let url = self.url(&format!("/api/products/{id}"));
        let (status, body) = self.fetch(&url).await?;
        decode_product(&url, status, &body)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T> {
        let url = self.url(path);
        let (status, body) = self.fetch(&url).await?;
        decode_body(&url, status, &body)
    }

    async fn fetch(&self, url: &str) -> Result<(u16, String)> {
        tracing::debug!(url, "fetching");

        let transport = |source| ApiError::Transport {
            url: url.to_string(),
            source,
        };

        let response = self.http.get(url).send().await.map_err(transport)?;
        let status = response.status().as_u16();
        let body = response.text().await.map_err(transport)?;

        Ok((status, body))
    }
}

fn decode_body<T: DeserializeOwned>(url: &str, status: u16, body: &str) -> Result<T> {
    if !(200..300).contains(&status) {
        return Err(ApiError::Status {
            url: url.to_string(),
            status,
        });
    }
    Ok(serde_json::from_str(body)?)
}

fn decode_product(url: &str, status: u16, body: &str) -> Result<Product> {
    if status == 404 {
        return Err(ApiError::NotFound(url.to_string()));
    }
    match decode_body::<ProductLookup>(url, status, body)? {
        ProductLookup::Found(product) => Ok(product),
        ProductLookup::Missing { error } => Err(ApiError::NotFound(error)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const URL: &str = "http://site/api/products/999";

    #[test]
    fn base_is_trimmed() {
        let client = ApiClient::new("http://127.0.0.1:5000/");
        assert_eq!(
            client.url("/api/products"),
            "http://127.0.0.1:5000/api/products"
        );
    }

    #[test]
    fn error_body_is_not_found() {
        let err = decode_product(URL, 200, r#"{"error": "not found"}"#).unwrap_err();
        assert!(err.is_not_found());
        assert_eq!(err.to_string(), "not found: not found");
    }

    #[test]
    fn status_404_is_not_found_whatever_the_body() {
        assert!(decode_product(URL, 404, "<html>").unwrap_err().is_not_found());
        assert!(decode_product(URL, 404, r#"{"error": "Product not found"}"#)
            .unwrap_err()
            .is_not_found());
    }

    #[test]
    fn server_error_is_status() {
        let err = decode_body::<CompanyInfo>("http://site/api/company-info", 500, "{}").unwrap_err();
        assert!(matches!(err, ApiError::Status { status: 500, .. }));
        assert!(!err.is_not_found());
    }

    #[test]
    fn non_json_is_decode_error() {
        let err = decode_body::<ContactInfo>("http://site/api/contact", 200, "<!doctype html>")
            .unwrap_err();
        assert!(matches!(err, ApiError::Decode(_)));
    }

    #[test]
    fn product_body_decodes() {
        let product = decode_product(
            "http://site/api/products/4",
            200,
            r#"{"id": 4, "category": "Water", "name": "Filter", "code": "W-4",
                "description": "Clean water", "images": ["/static/uploads/w4.png"]}"#,
        )
        .unwrap();

        assert_eq!(product.name, "Filter");
        assert_eq!(product.primary_image(), Some("/static/uploads/w4.png"));
    }
}
