//! CLI administration tool for shop-catalog.
//!
//! Provides commands for inspecting and maintaining the database without
//! going through the HTTP API.
//!
//! # Usage
//!
//! ```bash
//! # Row counts per table
//! cargo run --bin admin -- stats
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//!
//! # Apply pending migrations
//! cargo run --bin admin -- db migrate
//!
//! # Drop and recreate all tables
//! cargo run --bin admin -- db reset
//!
//! # Create a user interactively
//! cargo run --bin admin -- user create
//! ```
//!
//! # Environment Variables
//!
//! Same as the server; `DATABASE_URL` defaults to `sqlite://shops.db`.

use shop_catalog::api::dto::user::UserRequest;
use shop_catalog::application::services::UserService;
use shop_catalog::config::Config;
use shop_catalog::infrastructure::persistence::{SqliteUserRepository, pool, schema};

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::SqlitePool;
use std::sync::Arc;
use validator::Validate;

/// CLI tool for managing shop-catalog.
#[derive(Parser)]
#[command(name = "admin")]
#[command(author, version, about, long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

/// Top-level command groups.
#[derive(Subcommand)]
enum Commands {
    /// Show row counts for every table
    Stats,

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },

    /// Manage users
    User {
        #[command(subcommand)]
        action: UserAction,
    },
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,

    /// Apply pending migrations
    Migrate,

    /// Drop every table and recreate the schema
    Reset {
        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },
}

/// User management subcommands.
#[derive(Subcommand)]
enum UserAction {
    /// Create a user
    Create {
        #[arg(short, long)]
        username: Option<String>,

        #[arg(short, long)]
        email: Option<String>,

        /// Pre-computed password hash, stored as given
        #[arg(short, long)]
        password_hash: Option<String>,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load environment variables from .env file
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let config = Config::from_env()?;
    let pool = pool::connect(&config)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Stats => handle_stats(&pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
        Commands::User { action } => handle_user_action(action, pool.clone()).await?,
    }

    pool.close().await;

    Ok(())
}

/// Displays row counts for every resource table.
///
/// # Output Format
///
/// ```text
/// 📊 Statistics
///
///   statistics      12
///   payments        3
///   ...
/// ```
async fn handle_stats(pool: &SqlitePool) -> Result<()> {
    println!("{}", "📊 Statistics".bright_blue().bold());
    println!();

    let counts = schema::table_counts(pool)
        .await
        .context("Failed to count rows (has the schema been created?)")?;

    for (table, count) in counts {
        println!(
            "  {:<15} {}",
            table.cyan(),
            count.to_string().bright_green().bold()
        );
    }
    println!();

    Ok(())
}

/// Handles database diagnostic and maintenance commands.
async fn handle_db_action(action: DbAction, pool: &SqlitePool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT sqlite_version()")
                .fetch_one(pool)
                .await?;
            let foreign_keys: i64 = sqlx::query_scalar("PRAGMA foreign_keys")
                .fetch_one(pool)
                .await?;

            println!("  SQLite:       {}", version.bright_white());
            println!(
                "  Foreign keys: {}",
                if foreign_keys == 1 {
                    "enforced".green()
                } else {
                    "not enforced".yellow()
                }
            );
            println!();
        }
        DbAction::Migrate => {
            schema::migrate(pool).await.context("Failed to migrate")?;

            println!("{}", "✅ Migrations applied".green().bold());
        }
        DbAction::Reset { yes } => {
            println!(
                "{}",
                "⚠️  This drops every table. All records will be lost."
                    .red()
                    .bold()
            );

            if !yes {
                let confirmed = Confirm::new()
                    .with_prompt("Reset the database?")
                    .default(false)
                    .interact()?;

                if !confirmed {
                    println!("{}", "❌ Cancelled".red());
                    return Ok(());
                }
            }

            schema::reset(pool)
                .await
                .context("Failed to reset database")?;

            println!("{}", "✅ Database reset".green().bold());
        }
    }

    Ok(())
}

/// Dispatches user management commands.
async fn handle_user_action(action: UserAction, pool: SqlitePool) -> Result<()> {
    let repo = Arc::new(SqliteUserRepository::new(Arc::new(pool)));
    let service = UserService::new(repo);

    match action {
        UserAction::Create {
            username,
            email,
            password_hash,
        } => {
            println!("{}", "👤 Create User".bright_blue().bold());
            println!();

            let username = match username {
                Some(u) => u,
                None => Input::new().with_prompt("Username").interact_text()?,
            };
            let email = match email {
                Some(e) => e,
                None => Input::new().with_prompt("Email").interact_text()?,
            };
            let password_hash = match password_hash {
                Some(p) => p,
                None => Input::new().with_prompt("Password hash").interact_text()?,
            };

            let request = user_request(username, email, password_hash)?;

            let user = service
                .create_user(request.into())
                .await
                .map_err(|e| anyhow::anyhow!("Failed to create user: {}", e))?;

            println!();
            println!("{}", "✅ User created".green().bold());
            println!("  ID:       {}", user.id.to_string().bright_white());
            println!("  Username: {}", user.username.cyan());
            println!("  Email:    {}", user.email.cyan());
            println!();
        }
    }

    Ok(())
}

/// Builds a user payload checked with the same rules as `POST /users`.
fn user_request(username: String, email: String, password_hash: String) -> Result<UserRequest> {
    let request = UserRequest {
        username,
        email,
        password_hash,
    };
    request.validate().context("Invalid user")?;

    Ok(request)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_request_valid() {
        let request = user_request(
            "alice".to_string(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        )
        .unwrap();

        assert_eq!(request.username, "alice");
    }

    #[test]
    fn test_user_request_rejects_empty_username() {
        let result = user_request(
            String::new(),
            "alice@example.com".to_string(),
            "hash".to_string(),
        );

        assert!(result.is_err());
    }

    #[test]
    fn test_user_request_rejects_malformed_email() {
        let result = user_request(
            "alice".to_string(),
            "not-an-email".to_string(),
            "hash".to_string(),
        );

        assert!(result.is_err());
    }
}
