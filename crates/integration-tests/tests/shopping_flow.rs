//! End-to-end shopping flow against a mocked product API.
//!
//! Listing, product page, cart, checkout and confirmation, with the cart
//! reopened from disk between steps like separate CLI invocations.

#![allow(clippy::unwrap_used)]

use kanap_core::{ContactForm, Language, Price};
use kanap_integration_tests::{TestContext, product};
use kanap_storefront::pages::{
    AddToCartForm, CartPage, ProductPage, add_to_cart, change_quantity, confirmation_url,
    delete_line, load_listing, order_id_from_url, place_order, product_id_from_url,
};
use mockito::Matcher;
use serde_json::json;

fn contact() -> ContactForm {
    ContactForm {
        first_name: "Amélie".to_string(),
        last_name: "Poulain".to_string(),
        address: "15 rue des Trois Frères 75018".to_string(),
        city: "Paris".to_string(),
        email: "amelie@example.fr".to_string(),
    }
}

fn form(color: &str, quantity: &str) -> AddToCartForm {
    AddToCartForm {
        color: color.to_string(),
        quantity: quantity.to_string(),
    }
}

// ============================================================================
// Full Flow
// ============================================================================

#[tokio::test]
async fn test_listing_to_confirmation() {
    let mut ctx = TestContext::new().await;
    ctx.serve_products(&[
        product("sinope", "Kanap Sinopé", 1849, &["Blue", "White", "Black"]),
        product("cyllene", "Kanap Cyllène", 4499, &["Grey", "Purple", "Navy"]),
    ])
    .await;
    let order = ctx
        .server
        .mock("POST", "/api/products/order")
        .match_body(Matcher::PartialJson(json!({
            "contact": {
                "firstName": "Amélie",
                "lastName": "Poulain",
                "address": "15 rue des Trois Frères 75018",
                "city": "Paris",
                "email": "amelie@example.fr"
            },
            "products": ["cyllene", "sinope"]
        })))
        .with_status(201)
        .with_body(r#"{"contact": {}, "products": [], "orderId": "cmd-0001"}"#)
        .create_async()
        .await;

    let client = ctx.client();

    // Listing links to the product page.
    let cards = load_listing(&client).await.unwrap();
    assert_eq!(cards.len(), 2);
    let sinope_id = product_id_from_url(&cards[0].href).unwrap();
    let cyllene_id = product_id_from_url(&cards[1].href).unwrap();

    // Product pages add to the cart.
    let sinope = ProductPage::load(&client, &sinope_id, Language::French)
        .await
        .unwrap();
    assert_eq!(sinope.color_options[0].label, "Bleu");
    add_to_cart(&mut ctx.open_cart(), &sinope.product, &form("Blue", "2")).unwrap();
    add_to_cart(&mut ctx.open_cart(), &sinope.product, &form("Blue", "1")).unwrap();
    add_to_cart(&mut ctx.open_cart(), &sinope.product, &form("White", "1")).unwrap();

    let cyllene = ProductPage::load(&client, &cyllene_id, Language::French)
        .await
        .unwrap();
    add_to_cart(&mut ctx.open_cart(), &cyllene.product, &form("Navy", "1")).unwrap();

    // Cart page totals.
    let cart = ctx.open_cart();
    let page = CartPage::load(&client, &cart, Language::French).await.unwrap();
    assert_eq!(page.lines.len(), 3);
    assert_eq!(page.total_quantity, 5);
    assert_eq!(
        page.total_price,
        Some(Price::from_euros(1849 * 4 + 4499))
    );

    // Checkout sends each product id once and keeps the cart.
    let confirmation = place_order(&client, &cart, contact()).await.unwrap();
    order.assert_async().await;
    assert_eq!(ctx.open_cart().total_quantity().unwrap(), 5);

    let link = confirmation_url(&confirmation.order_id);
    assert_eq!(order_id_from_url(&link).unwrap().as_str(), "cmd-0001");
}

// ============================================================================
// Cart Editing
// ============================================================================

#[tokio::test]
async fn test_cart_edits_persist() {
    let mut ctx = TestContext::new().await;
    ctx.serve_products(&[product("sinope", "Kanap Sinopé", 1849, &["Blue", "White"])])
        .await;
    let client = ctx.client();
    let sinope = ProductPage::load(
        &client,
        &kanap_core::ProductId::parse("sinope").unwrap(),
        Language::English,
    )
    .await
    .unwrap();

    add_to_cart(&mut ctx.open_cart(), &sinope.product, &form("Blue", "2")).unwrap();
    add_to_cart(&mut ctx.open_cart(), &sinope.product, &form("White", "1")).unwrap();

    change_quantity(&mut ctx.open_cart(), "sinope", "Blue", "10").unwrap();
    delete_line(&mut ctx.open_cart(), "sinope", "White").unwrap();

    let cart = ctx.open_cart();
    let page = CartPage::load(&client, &cart, Language::English).await.unwrap();
    assert_eq!(page.lines.len(), 1);
    assert_eq!(page.lines[0].color_label, "Blue");
    assert_eq!(page.total_quantity, 10);
    assert_eq!(page.total_price, Some(Price::from_euros(18490)));
}

#[tokio::test]
async fn test_rejected_form_writes_nothing() {
    let mut ctx = TestContext::new().await;
    ctx.serve_products(&[product("sinope", "Kanap Sinopé", 1849, &["Blue"])])
        .await;
    let client = ctx.client();
    let sinope = client
        .get_product(&kanap_core::ProductId::parse("sinope").unwrap())
        .await
        .unwrap();

    assert!(add_to_cart(&mut ctx.open_cart(), &sinope, &form("", "1")).is_err());
    assert!(add_to_cart(&mut ctx.open_cart(), &sinope, &form("Red", "1")).is_err());
    assert!(add_to_cart(&mut ctx.open_cart(), &sinope, &form("Blue", "0")).is_err());

    assert!(ctx.open_cart().is_empty().unwrap());
    assert!(!ctx.cart_file().exists());
}
