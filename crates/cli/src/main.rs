//! Kanap CLI - the storefront from a terminal.
//!
//! # Usage
//!
//! ```bash
//! # Browse the catalog
//! kanap products
//! kanap product 107fb5b75607497b96722bda5b504926
//! kanap product "./product.html?id=107fb5b75607497b96722bda5b504926&name=Kanap"
//!
//! # Manage the cart
//! kanap cart add 107fb5b75607497b96722bda5b504926 --color Blue --quantity 2
//! kanap cart set 107fb5b75607497b96722bda5b504926 Blue 5
//! kanap cart remove 107fb5b75607497b96722bda5b504926 Blue
//! kanap cart show
//!
//! # Check out
//! kanap order --first-name Jean --last-name Dupont \
//!     --address "12 rue de la Paix 75002" --city Paris --email jean@example.fr
//! kanap confirmation "confirmation.html?orderId=..."
//! ```
//!
//! # Commands
//!
//! - `products` - List every product
//! - `product` - Show one product and its colors
//! - `cart` - Show or change the cart
//! - `order` - Place an order for the cart
//! - `confirmation` - Show the order id from a confirmation link
//!
//! Configuration comes from `KANAP_*` environment variables (see
//! `kanap_storefront::config`). Log verbosity follows `RUST_LOG`.

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use kanap_storefront::{AppError, StorefrontConfig};
use tracing_subscriber::EnvFilter;

mod commands;

#[derive(Parser)]
#[command(name = "kanap")]
#[command(author, version, about = "Kanap storefront")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List every product in the catalog
    Products,
    /// Show a product by id or product page link
    Product {
        /// Product id, or a `product.html?id=...` link
        product: String,
    },
    /// Show or change the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Place an order for everything in the cart
    Order {
        #[arg(long)]
        first_name: String,
        #[arg(long)]
        last_name: String,
        /// Street address ending with the postal code
        #[arg(long)]
        address: String,
        #[arg(long)]
        city: String,
        #[arg(long)]
        email: String,
    },
    /// Show the order id carried by a confirmation link
    Confirmation {
        /// A `confirmation.html?orderId=...` link
        url: String,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart with totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product id
        product_id: String,

        /// Color, as listed by `kanap product`
        #[arg(short, long)]
        color: String,

        /// Quantity (1-100)
        #[arg(short, long, default_value = "1")]
        quantity: String,
    },
    /// Change the quantity of a cart line
    Set {
        product_id: String,
        color: String,
        /// New quantity (1-100)
        quantity: String,
    },
    /// Remove a cart line
    Remove { product_id: String, color: String },
}

#[tokio::main]
async fn main() {
    // Initialize tracing
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new("kanap_cli=info,kanap_storefront=info,kanap_cart=info")
        }))
        .with_target(false)
        .without_time()
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli).await {
        tracing::error!(error = %e, "Command failed");
        tracing::error!("{}", e.user_message());
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), AppError> {
    let config = StorefrontConfig::from_env()?;

    match cli.command {
        Commands::Products => commands::catalog::products(&config).await?,
        Commands::Product { product } => commands::catalog::product(&config, &product).await?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(&config).await?,
            CartAction::Add {
                product_id,
                color,
                quantity,
            } => commands::cart::add(&config, &product_id, color, quantity).await?,
            CartAction::Set {
                product_id,
                color,
                quantity,
            } => commands::cart::set(&config, &product_id, &color, &quantity)?,
            CartAction::Remove { product_id, color } => {
                commands::cart::remove(&config, &product_id, &color)?;
            }
        },
        Commands::Order {
            first_name,
            last_name,
            address,
            city,
            email,
        } => {
            let form = kanap_core::ContactForm {
                first_name,
                last_name,
                address,
                city,
                email,
            };
            commands::order::place(&config, form).await?;
        }
        Commands::Confirmation { url } => commands::order::confirmation(&url)?,
    }
    Ok(())
}
