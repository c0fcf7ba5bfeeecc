//! Catalog browsing commands.

use kanap_core::ProductId;
use kanap_storefront::pages::{ProductPage, load_listing, product_id_from_url};
use kanap_storefront::{AppError, StorefrontConfig};

/// List every product.
pub async fn products(config: &StorefrontConfig) -> Result<(), AppError> {
    let client = super::catalog_client(config)?;
    let cards = load_listing(&client).await?;

    if cards.is_empty() {
        tracing::info!("Aucun produit.");
        return Ok(());
    }

    for card in cards {
        tracing::info!("{}", card.name);
        tracing::info!("  {}", card.description);
        tracing::info!("  {}", card.href);
    }
    Ok(())
}

/// Show one product with its color options.
///
/// `product` is either a bare id or a product page link.
pub async fn product(config: &StorefrontConfig, product: &str) -> Result<(), AppError> {
    let id = parse_product_ref(product)?;
    let client = super::catalog_client(config)?;
    let page = ProductPage::load(&client, &id, config.language).await?;

    tracing::info!("{}", page.product.name);
    tracing::info!("  Prix : {}", page.product.price);
    tracing::info!("  {}", page.product.description);
    tracing::info!("  Image : {} ({})", page.product.image_url, page.product.alt_txt);
    tracing::info!("  Couleurs :");
    for option in &page.color_options {
        tracing::info!("    {} ({})", option.label, option.value);
    }
    Ok(())
}

fn parse_product_ref(product: &str) -> Result<ProductId, AppError> {
    if product.contains('?') {
        return product_id_from_url(product)
            .ok_or_else(|| AppError::BadRequest(format!("no product id in {product}")));
    }
    Ok(ProductId::parse(product)?)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_product_ref() {
        assert_eq!(parse_product_ref("42").unwrap().as_str(), "42");
        assert_eq!(
            parse_product_ref("./product.html?id=42&name=Kanap")
                .unwrap()
                .as_str(),
            "42"
        );
        assert!(matches!(
            parse_product_ref("./product.html?name=Kanap"),
            Err(AppError::BadRequest(_))
        ));
        assert!(matches!(
            parse_product_ref(""),
            Err(AppError::InvalidIdentifier(_))
        ));
    }
}
