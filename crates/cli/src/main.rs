//! Velvet Bean CLI - Command-line storefront client.
//!
//! # Usage
//!
//! ```bash
//! # Browse the menu
//! vb-cli menu
//! vb-cli menu --category coffee
//! vb-cli menu --featured
//!
//! # Manage the cart (persists across invocations)
//! vb-cli cart add 1 --quantity 2
//! vb-cli cart show
//!
//! # Demo accounts (password is "password")
//! vb-cli login -e admin@cafe.com -p password
//!
//! # Place an order
//! vb-cli checkout --name "Jane Doe" --email jane@example.com \
//!     --address "12 Harbor Lane, Portside"
//! ```
//!
//! # Commands
//!
//! - `menu` / `product` - Browse the catalog
//! - `cart` - Add, update, remove, show, clear
//! - `login` / `signup` / `logout` / `whoami` - Session management
//! - `subscribe` - Newsletter subscription
//! - `checkout` - Place an order from the current cart
//! - `admin` - Product CRUD and mock orders (admin accounts only)

#![cfg_attr(not(test), forbid(unsafe_code))]

use clap::{Parser, Subcommand};
use tracing_subscriber::EnvFilter;

use velvet_bean_storefront::config::StorefrontConfig;

mod commands;

#[derive(Parser)]
#[command(name = "vb-cli")]
#[command(author, version, about = "Velvet Bean storefront CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Browse the menu
    Menu {
        /// Only show one category (coffee, food, dessert, merchandise)
        #[arg(short, long)]
        category: Option<String>,

        /// Only show featured products
        #[arg(short, long)]
        featured: bool,
    },
    /// Show a single product
    Product {
        /// Product ID
        id: String,
    },
    /// Manage the cart
    Cart {
        #[command(subcommand)]
        action: CartAction,
    },
    /// Log in with a demo account
    Login {
        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Create a new account and log in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Account email address
        #[arg(short, long)]
        email: String,

        /// Account password
        #[arg(short, long)]
        password: String,
    },
    /// Log out of the current session
    Logout,
    /// Show the current identity
    Whoami,
    /// Subscribe an email to the newsletter
    Subscribe {
        /// Email address to subscribe
        email: String,
    },
    /// Place an order from the current cart
    Checkout {
        /// Customer name (defaults to the logged-in user's name)
        #[arg(long)]
        name: Option<String>,

        /// Contact email (defaults to the logged-in user's email)
        #[arg(long)]
        email: Option<String>,

        /// Phone number
        #[arg(long)]
        phone: Option<String>,

        /// Delivery address
        #[arg(long)]
        address: String,

        /// Order notes
        #[arg(long)]
        notes: Option<String>,

        /// Also subscribe the email to the newsletter
        #[arg(long)]
        subscribe: bool,
    },
    /// Admin panel (requires an admin account)
    Admin {
        #[command(subcommand)]
        action: AdminAction,
    },
}

#[derive(Subcommand)]
enum CartAction {
    /// Show the cart lines and totals
    Show,
    /// Add a product to the cart
    Add {
        /// Product ID
        id: String,

        /// Number of units
        #[arg(short, long, default_value_t = 1)]
        quantity: u32,
    },
    /// Set the quantity of a cart line (0 removes it)
    Update {
        /// Product ID
        id: String,

        /// New quantity
        quantity: u32,
    },
    /// Remove a product from the cart
    Remove {
        /// Product ID
        id: String,
    },
    /// Empty the cart
    Clear,
}

#[derive(Subcommand)]
enum AdminAction {
    /// Manage catalog products (edits are session-local)
    Products {
        #[command(subcommand)]
        action: AdminProductAction,
    },
    /// List the mock order records
    Orders,
}

#[derive(Subcommand)]
enum AdminProductAction {
    /// List all products, including unavailable ones
    List,
    /// Create or replace a product by ID
    Upsert {
        /// Product ID
        id: String,

        /// Display name
        #[arg(long)]
        name: String,

        /// Menu description
        #[arg(long)]
        description: String,

        /// Unit price, e.g. 3.50
        #[arg(long)]
        price: String,

        /// Category (coffee, food, dessert, merchandise)
        #[arg(long)]
        category: String,

        /// Image path reference
        #[arg(long, default_value = "/placeholder.jpg")]
        image: String,

        /// Mark as featured
        #[arg(long)]
        featured: bool,

        /// Comma-separated ingredient list
        #[arg(long)]
        ingredients: Option<String>,

        /// Mark as unavailable
        #[arg(long)]
        unavailable: bool,
    },
    /// Delete a product by ID
    Remove {
        /// Product ID
        id: String,
    },
}

fn main() {
    let cli = Cli::parse();

    let config = match StorefrontConfig::from_env() {
        Ok(config) => config,
        Err(e) => {
            // Subscriber isn't up yet; plain stderr is all we have.
            #[allow(clippy::print_stderr)]
            {
                eprintln!("Configuration error: {e}");
            }
            std::process::exit(1);
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(config.log_filter.clone()))
        .with_target(false)
        .init();

    if let Err(e) = run(cli, &config) {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

fn run(cli: Cli, config: &StorefrontConfig) -> velvet_bean_storefront::error::Result<()> {
    match cli.command {
        Commands::Menu { category, featured } => {
            commands::menu::list(category.as_deref(), featured)?;
        }
        Commands::Product { id } => commands::menu::show(&id)?,
        Commands::Cart { action } => match action {
            CartAction::Show => commands::cart::show(config)?,
            CartAction::Add { id, quantity } => commands::cart::add(config, &id, quantity)?,
            CartAction::Update { id, quantity } => commands::cart::update(config, &id, quantity)?,
            CartAction::Remove { id } => commands::cart::remove(config, &id)?,
            CartAction::Clear => commands::cart::clear(config)?,
        },
        Commands::Login { email, password } => commands::account::login(config, &email, &password)?,
        Commands::Signup {
            name,
            email,
            password,
        } => commands::account::signup(config, &name, &email, &password)?,
        Commands::Logout => commands::account::logout(config)?,
        Commands::Whoami => commands::account::whoami(config)?,
        Commands::Subscribe { email } => commands::account::subscribe(config, &email)?,
        Commands::Checkout {
            name,
            email,
            phone,
            address,
            notes,
            subscribe,
        } => {
            commands::checkout::place(
                config,
                commands::checkout::CheckoutArgs {
                    name,
                    email,
                    phone,
                    address,
                    notes,
                    subscribe,
                },
            )?;
        }
        Commands::Admin { action } => match action {
            AdminAction::Products { action } => match action {
                AdminProductAction::List => commands::admin::list_products(config)?,
                AdminProductAction::Upsert {
                    id,
                    name,
                    description,
                    price,
                    category,
                    image,
                    featured,
                    ingredients,
                    unavailable,
                } => {
                    commands::admin::upsert_product(
                        config,
                        commands::admin::ProductArgs {
                            id,
                            name,
                            description,
                            price,
                            category,
                            image,
                            featured,
                            ingredients,
                            unavailable,
                        },
                    )?;
                }
                AdminProductAction::Remove { id } => commands::admin::remove_product(config, &id)?,
            },
            AdminAction::Orders => commands::admin::list_orders(config)?,
        },
    }
    Ok(())
}
