//! Bookstore Administration CLI
//!
//! Applies migrations and performs read-only lookups against the configured
//! PostgreSQL database without going through the HTTP API.

use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use dotenv::dotenv;

use bookstore_service::{
    database::{DatabaseConfig, PgStore},
    service::{CustomerService, RegistrationService},
    AppError,
};

/// Bookstore administration CLI
#[derive(Parser)]
#[command(
    name = "bookstore-admin",
    about = "Bookstore service administration CLI",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Print a user account by id
    GetUser(GetUserArgs),
    /// Print the first account registered with an email
    FindUser(FindUserArgs),
    /// Print all customers
    ListCustomers,
}

#[derive(Args)]
struct GetUserArgs {
    /// User account ID
    id: i64,
}

#[derive(Args)]
struct FindUserArgs {
    /// Email address, matched exactly
    #[arg(short, long)]
    email: String,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();
    env_logger::init();

    let cli = Cli::parse();

    let db_config = DatabaseConfig::from_env()
        .map_err(|_| AppError::Configuration("DATABASE_URL must be set".to_string()))?;
    let pool = db_config.create_pool().await?;

    if let Commands::Migrate = cli.command {
        println!("🔄 Running database migrations...");
        DatabaseConfig::run_migrations(&pool).await?;
        println!("✅ Database migrations completed");
        return Ok(());
    }

    let store = Arc::new(PgStore::new(pool));
    let registration = RegistrationService::new(store.clone(), store.clone());
    let customers = CustomerService::new(store);

    match cli.command {
        Commands::GetUser(args) => match registration.get_user(args.id).await? {
            Some(account) => print_json(&account)?,
            None => {
                eprintln!("❌ No user account with id {}", args.id);
                std::process::exit(1);
            }
        },
        Commands::FindUser(args) => match registration.find_user_by_email(&args.email).await? {
            Some(account) => print_json(&account)?,
            None => {
                eprintln!("❌ No user account registered with {}", args.email);
                std::process::exit(1);
            }
        },
        Commands::ListCustomers => print_json(&customers.list_customers().await?)?,
        Commands::Migrate => {}
    }

    Ok(())
}

fn print_json<T: serde::Serialize>(value: &T) -> Result<(), serde_json::Error> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}
