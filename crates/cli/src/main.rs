//! Moon Cookies CLI - Mission Control from the terminal.
//!
//! # Usage
//!
//! ```bash
//! # Probe the backend and show who is logged in
//! mc-cli status
//!
//! # Create a customer account
//! mc-cli signup -n "Sally Ride" -e sally@moonbase.example
//!
//! # Browse the catalog, newest first
//! mc-cli list
//!
//! # Bake a new cookie (astronauts only)
//! mc-cli bake -n "Lunar Crunch" -p 3.00 -i 10 -s dough
//!
//! # Edit or jettison one of your cookies
//! mc-cli update 12 --price 3.50
//! mc-cli jettison 12
//! ```
//!
//! # Environment Variables
//!
//! - `MOONBASE_BACKEND_URL` - Backend base URL (default: `http://localhost:1111`)
//! - `MOONBASE_EMAIL` / `MOONBASE_PASSWORD` - Credentials for commands that
//!   need a session

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::path::PathBuf;

use clap::{Parser, Subcommand};

mod commands;

#[derive(Parser)]
#[command(name = "mc-cli")]
#[command(author, version, about = "Moon Cookies Mission Control CLI")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Probe the backend and show the current session
    Status,
    /// Create a customer account and log in
    Signup {
        /// Display name
        #[arg(short, long)]
        name: String,

        /// Login email
        #[arg(short, long)]
        email: String,

        /// Password (falls back to `MOONBASE_PASSWORD`)
        #[arg(short, long)]
        password: Option<String>,
    },
    /// List the cookie catalog, newest first
    List,
    /// Bake (create) a new cookie; astronauts only
    Bake {
        /// Cookie name
        #[arg(short, long)]
        name: String,

        /// Description
        #[arg(short, long, default_value = "")]
        description: String,

        /// Price in USD, e.g. 3.00
        #[arg(short, long, default_value = "0")]
        price: String,

        /// Units in stock
        #[arg(short, long, default_value = "0")]
        inventory: String,

        /// Baking status (`dough`, `in_the_oven`, `ready_for_sale`)
        #[arg(short, long, default_value = "dough")]
        status: String,

        /// Photo to upload with the cookie
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Edit one of your cookies
    Update {
        /// Id of the cookie to edit
        id: i32,

        #[arg(long)]
        name: Option<String>,

        #[arg(long)]
        description: Option<String>,

        #[arg(long)]
        price: Option<String>,

        #[arg(long)]
        inventory: Option<String>,

        /// Baking status (`dough`, `in_the_oven`, `ready_for_sale`)
        #[arg(long)]
        status: Option<String>,

        /// Replacement photo
        #[arg(long)]
        photo: Option<PathBuf>,
    },
    /// Jettison (delete) one of your cookies, with confirmation
    Jettison {
        /// Id of the cookie to jettison
        id: i32,

        /// Skip the confirmation prompt
        #[arg(short, long)]
        yes: bool,
    },
}

#[tokio::main]
async fn main() {
    // Load .env file if present (ignore errors if not found)
    dotenvy::dotenv().ok();

    // Initialize tracing
    tracing_subscriber::fmt::init();

    let cli = Cli::parse();

    let result: Result<(), Box<dyn std::error::Error>> = run(cli).await;

    if let Err(e) = result {
        tracing::error!("Command failed: {e}");
        std::process::exit(1);
    }
}

async fn run(cli: Cli) -> Result<(), Box<dyn std::error::Error>> {
    match cli.command {
        Commands::Status => commands::status::run().await?,
        Commands::Signup {
            name,
            email,
            password,
        } => commands::account::signup(&name, &email, password).await?,
        Commands::List => commands::catalog::list().await?,
        Commands::Bake {
            name,
            description,
            price,
            inventory,
            status,
            photo,
        } => {
            commands::catalog::bake(&name, &description, &price, &inventory, &status, photo)
                .await?;
        }
        Commands::Update {
            id,
            name,
            description,
            price,
            inventory,
            status,
            photo,
        } => {
            commands::catalog::update(
                id,
                commands::catalog::FieldEdits {
                    name,
                    description,
                    price,
                    inventory,
                    status,
                    photo,
                },
            )
            .await?;
        }
        Commands::Jettison { id, yes } => commands::catalog::jettison(id, yes).await?,
    }
    Ok(())
}
