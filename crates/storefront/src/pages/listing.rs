//! Home page: the product listing.

use url::form_urlencoded;

use crate::catalog::{CatalogClient, CatalogError, Product};

/// One product on the listing page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProductCard {
    /// Link to the product page, `./product.html?id={id}&name={name}`.
    pub href: String,
    pub name: String,
    pub description: String,
    pub image_url: String,
    pub alt_txt: String,
}

impl From<&Product> for ProductCard {
    fn from(product: &Product) -> Self {
        let query = form_urlencoded::Serializer::new(String::new())
            .append_pair("id", product.id.as_str())
            .append_pair("name", &product.name)
            .finish();

        Self {
            href: format!("./product.html?{query}"),
            name: product.name.clone(),
            description: product.description.clone(),
            image_url: product.image_url.clone(),
            alt_txt: product.alt_txt.clone(),
        }
    }
}

/// Fetch the catalog and build one card per product, in API order.
///
/// # Errors
///
/// Returns an error if the catalog cannot be fetched.
pub async fn load_listing(client: &CatalogClient) -> Result<Vec<ProductCard>, CatalogError> {
    let products = client.list_products().await?;
    Ok(products.iter().map(ProductCard::from).collect())
}
