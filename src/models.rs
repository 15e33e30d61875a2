use serde::Deserialize;

use crate::route::ProductId;

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub struct CompanyInfo {
    pub name: String,
    pub description: String,
    pub mission: String,
    pub vision: String,
    pub founded: i32,
    pub employees: u32,
    pub headquarters: String,
}

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub struct ContactInfo {
    pub address: String,
    pub phone: String,
    pub email: String,
    pub working_hours: String,
    #[serde(default)]
    pub social_media: SocialMedia,
}

/// Social profile links. The backend stores them as nullable columns.
#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub struct SocialMedia {
    pub linkedin: Option<String>,
    pub twitter: Option<String>,
    pub facebook: Option<String>,
}

impl SocialMedia {
    /// The links that are set, labelled for display.
    pub fn links(&self) -> Vec<(&'static str, &str)> {
        [
            ("LinkedIn", &self.linkedin),
            ("Twitter", &self.twitter),
            ("Facebook", &self.facebook),
        ]
        .into_iter()
        .filter_map(|(label, url)| Some((label, url.as_deref()?)))
        .filter(|(_, url)| !url.is_empty())
        .collect()
    }
}

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub struct Product {
    pub id: u64,
    pub name: String,
    pub code: String,
    pub category: String,
    pub description: String,
    /// Image URLs, primary image first.
    #[serde(default)]
    pub images: Vec<String>,
}

impl Product {
    pub fn product_id(&self) -> ProductId {
        ProductId::from(self.id)
    }

    pub fn primary_image(&self) -> Option<&str> {
        self.images.first().map(String::as_str)
    }

    /// Every image after the primary one.
    pub fn gallery(&self) -> &[String] {
        self.images.get(1..).unwrap_or_default()
    }
}

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub(crate) struct ProductList {
    #[serde(default)]
    pub(crate) products: Vec<Product>,
}

#[derive(Deserialize, PartialEq, Clone, Debug, Default)]
pub(crate) struct CategoryList {
    #[serde(default)]
    pub(crate) categories: Vec<String>,
}

/// Body of `/api/products/{id}`: either the product or an `{error}` object.
#[derive(Deserialize, Debug)]
#[serde(untagged)]
pub(crate) enum ProductLookup {
    Missing { error: String },
    Found(Product),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn product_without_images_has_no_primary() {
        let product: Product = serde_json::from_str(
            r#"{"id": 3, "name": "Panel", "code": "P-3", "category": "Solar", "description": "d"}"#,
        )
        .unwrap();

        assert_eq!(product.primary_image(), None);
        assert!(product.gallery().is_empty());
        assert_eq!(product.product_id().as_str(), "3");
    }

    #[test]
    fn gallery_skips_primary() {
        let product = Product {
            images: vec!["/a.png".into(), "/b.png".into(), "/c.png".into()],
            ..Default::default()
        };

        assert_eq!(product.primary_image(), Some("/a.png"));
        assert_eq!(product.gallery(), ["/b.png", "/c.png"]);
    }

    #[test]
    fn lookup_distinguishes_error_body() {
        let missing: ProductLookup = serde_json::from_str(r#"{"error": "not found"}"#).unwrap();
        assert!(matches!(missing, ProductLookup::Missing { error } if error == "not found"));

        let found: ProductLookup = serde_json::from_str(
            r#"{"id": 9, "name": "n", "code": "c", "category": "k", "description": "d", "images": []}"#,
        )
        .unwrap();
        assert!(matches!(found, ProductLookup::Found(p) if p.id == 9));
    }

    #[test]
    fn missing_lists_decode_empty() {
        let products: ProductList = serde_json::from_str("{}").unwrap();
        let categories: CategoryList = serde_json::from_str("{}").unwrap();
        assert!(products.products.is_empty());
        assert!(categories.categories.is_empty());
    }

    #[test]
    fn null_social_links_are_skipped() {
        let contact: ContactInfo = serde_json::from_str(
            r#"{
                "address": "123 Green Street",
                "phone": "+86 123",
                "email": "info@jiyer.com",
                "working_hours": "9-6",
                "social_media": {"linkedin": "https://linkedin.com/company/jiyer", "twitter": null, "facebook": ""}
            }"#,
        )
        .unwrap();

        assert_eq!(
            contact.social_media.links(),
            vec![("LinkedIn", "https://linkedin.com/company/jiyer")]
        );
    }
}
