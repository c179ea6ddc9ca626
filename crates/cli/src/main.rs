//! Bistro Cart CLI - drive the cart pages from a terminal.
//!
//! Each invocation is one page load: the stored cart is read, the badge and
//! checkout views are synced, the requested action runs, and the resulting
//! page state is printed. The cart persists in a JSON file between runs.
//!
//! # Usage
//!
//! ```bash
//! # Click an add-to-cart button
//! bistro-cart add --name Burger --price 9.50
//!
//! # Show the badge count
//! bistro-cart badge
//!
//! # Open the checkout page
//! bistro-cart checkout
//!
//! # Submit the checkout form
//! bistro-cart submit --name Ada --email ada@example.com --address "1 Main St"
//!
//! # Empty the cart
//! bistro-cart clear
//! ```
//!
//! Configuration comes from `BISTRO_CART_*` environment variables (see
//! `bistro_cart_storefront::config`).

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};

use bistro_cart_storefront::checkout::CheckoutForm;
use bistro_cart_storefront::config::CartConfig;

mod commands;

#[derive(Parser)]
#[command(name = "bistro-cart")]
#[command(author, version, about = "Bistro Cart CLI tools")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Activate an add-to-cart trigger
    Add {
        /// Item name (the trigger's data-name)
        #[arg(short, long)]
        name: Option<String>,

        /// Unit price (the trigger's data-price)
        #[arg(short, long, allow_hyphen_values = true)]
        price: Option<String>,
    },
    /// Print the badge count
    Badge,
    /// Render the checkout page
    Checkout,
    /// Submit the checkout form
    Submit {
        #[command(flatten)]
        form: FormArgs,
    },
    /// Remove the stored cart
    Clear,
}

#[derive(clap::Args)]
struct FormArgs {
    /// Customer name
    #[arg(long, default_value = "")]
    name: String,

    /// Contact email (delivery)
    #[arg(long, default_value = "")]
    email: String,

    /// Delivery address (delivery)
    #[arg(long, default_value = "")]
    address: String,

    /// Contact phone (pickup)
    #[arg(long, default_value = "")]
    phone: String,

    /// Pickup time (pickup)
    #[arg(long, default_value = "")]
    pickup_time: String,
}

impl From<FormArgs> for CheckoutForm {
    fn from(args: FormArgs) -> Self {
        Self {
            name: args.name,
            email: args.email,
            address: args.address,
            phone: args.phone,
            pickup_time: args.pickup_time,
        }
    }
}

fn main() {
    // Defaults to info level for our crates if RUST_LOG is not set
    let env_filter = tracing_subscriber::EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| "bistro_cart=info,bistro_cart_storefront=info".into());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    if let Err(e) = run(cli) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    let config = CartConfig::from_env()?;
    tracing::debug!(?config, "Loaded configuration");

    match cli.command {
        Commands::Add { name, price } => commands::cart::add(&config, name, price)?,
        Commands::Badge => commands::cart::badge(&config)?,
        Commands::Checkout => commands::checkout::show(&config)?,
        Commands::Submit { form } => commands::checkout::submit(&config, &form.into())?,
        Commands::Clear => commands::cart::clear(&config)?,
    }
    Ok(())
}
