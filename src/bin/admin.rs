//! CLI administration tool for board-sharing.
//!
//! Provides commands for managing API tokens, revoking public board links,
//! and performing database operations without requiring HTTP API access.
//!
//! # Usage
//!
//! ```bash
//! # Create a new API token for user 1
//! cargo run --bin admin -- token create --user-id 1
//!
//! # List all tokens
//! cargo run --bin admin -- token list
//!
//! # Revoke a token
//! cargo run --bin admin -- token revoke "Release bot"
//!
//! # Emergency revocation of a board's public link
//! cargo run --bin admin -- board unshare 42
//!
//! # List publicly shared boards
//! cargo run --bin admin -- board shared
//!
//! # Check database connection
//! cargo run --bin admin -- db check
//! ```
//!
//! # Environment Variables
//!
//! - `DATABASE_URL` (required): PostgreSQL connection string
//! - `TOKEN_SIGNING_SECRET` (required for `token create`): HMAC key, must match the server
//! - `REDIS_URL` (optional): when set, `board unshare` notifies live viewers

use board_sharing::domain::board_event::BoardEvent;
use board_sharing::domain::repositories::{BoardRepository, TokenRepository};
use board_sharing::infrastructure::notify::{NotificationBus, RedisBus};
use board_sharing::infrastructure::persistence::{PgBoardRepository, PgTokenRepository};
use board_sharing::utils::token_hash::hmac_sha256_hex;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::*;
use dialoguer::{Confirm, Input};
use sqlx::PgPool;
use std::sync::Arc;

/// CLI tool for managing board-sharing.
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
    /// Manage API tokens
    Token {
        #[command(subcommand)]
        action: TokenAction,
    },

    /// Manage public board links
    Board {
        #[command(subcommand)]
        action: BoardAction,
    },

    /// Database operations
    Db {
        #[command(subcommand)]
        action: DbAction,
    },
}

/// Token management subcommands.
#[derive(Subcommand)]
enum TokenAction {
    /// Create a new API token bound to a user
    Create {
        /// User the token authenticates as
        #[arg(short, long)]
        user_id: i64,

        /// Token name (e.g., "Release bot", "Ops laptop")
        #[arg(short, long)]
        name: Option<String>,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List all tokens
    List,

    /// Revoke a token
    Revoke {
        /// Token name or ID to revoke
        name_or_id: String,
    },
}

/// Public link subcommands.
#[derive(Subcommand)]
enum BoardAction {
    /// Revoke a board's public link immediately
    Unshare {
        board_id: i64,

        /// Skip confirmation prompt
        #[arg(short = 'y', long)]
        yes: bool,
    },

    /// List boards with an active public link
    Shared,
}

/// Database operation subcommands.
#[derive(Subcommand)]
enum DbAction {
    /// Check database connection
    Check,

    /// Show database info
    Info,
}

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let database_url = std::env::var("DATABASE_URL").context("DATABASE_URL must be set")?;

    let pool = PgPool::connect(&database_url)
        .await
        .context("Failed to connect to database")?;

    match cli.command {
        Commands::Token { action } => handle_token_action(action, &pool).await?,
        Commands::Board { action } => handle_board_action(action, &pool).await?,
        Commands::Db { action } => handle_db_action(action, &pool).await?,
    }

    Ok(())
}

/// Dispatches token management commands.
async fn handle_token_action(action: TokenAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgTokenRepository::new(Arc::new(pool.clone())));

    match action {
        TokenAction::Create { user_id, name, yes } => {
            create_token(repo, user_id, name, yes).await?;
        }
        TokenAction::List => {
            list_tokens(repo).await?;
        }
        TokenAction::Revoke { name_or_id } => {
            revoke_token(repo, name_or_id).await?;
        }
    }

    Ok(())
}

/// Creates a new API token with interactive prompts.
///
/// # Flow
///
/// 1. Prompt for token name (or use provided)
/// 2. Generate a random token
/// 3. Display token details with warning
/// 4. Confirm creation (unless `--yes` flag)
/// 5. Hash token with HMAC-SHA256 keyed by `TOKEN_SIGNING_SECRET`
/// 6. Store in database bound to `user_id`
///
/// # Security
///
/// - Only the keyed hash is stored in the database
/// - Raw token is displayed once and cannot be retrieved later
async fn create_token(
    repo: Arc<PgTokenRepository>,
    user_id: i64,
    name: Option<String>,
    skip_confirm: bool,
) -> Result<()> {
    let signing_secret = std::env::var("TOKEN_SIGNING_SECRET")
        .context("TOKEN_SIGNING_SECRET must be set to create tokens")?;

    println!("{}", "🔑 Create API Token".bright_blue().bold());
    println!();

    let token_name = match name {
        Some(n) => n,
        None => Input::new()
            .with_prompt("Token name")
            .with_initial_text(format!("user-{}", user_id))
            .interact_text()?,
    };

    let token_value = generate_token();

    println!("{}", "Token details:".bright_white().bold());
    println!("  Name:  {}", token_name.cyan());
    println!("  User:  {}", user_id.to_string().cyan());
    println!("  Token: {}", token_value.bright_yellow().bold());
    println!();
    println!(
        "{}",
        "⚠️  IMPORTANT: Save this token now! You won't be able to see it again."
            .red()
            .bold()
    );
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Create this token?")
            .default(true)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let token_hash = hmac_sha256_hex(&signing_secret, &token_value);

    repo.create_token(user_id, &token_name, &token_hash)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to create token: {}", e))?;

    println!();
    println!("{}", "✅ Token created successfully!".green().bold());
    println!();
    println!(
        "  {}: Bearer {}",
        "Authorization".bright_cyan(),
        token_value.bright_yellow()
    );
    println!();

    Ok(())
}

/// Lists all API tokens with status indicators.
async fn list_tokens(repo: Arc<PgTokenRepository>) -> Result<()> {
    println!("{}", "📋 API Tokens".bright_blue().bold());
    println!();

    let tokens = repo
        .list_tokens()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list tokens: {}", e))?;

    if tokens.is_empty() {
        println!("{}", "  No tokens found".yellow());
        return Ok(());
    }

    println!(
        "  {:<4} {:<8} {:<28} {:<18} {:<18} {:<10}",
        "ID".bright_white().bold(),
        "User".bright_white().bold(),
        "Name".bright_white().bold(),
        "Created".bright_white().bold(),
        "Last used".bright_white().bold(),
        "Status".bright_white().bold()
    );
    println!("  {}", "─".repeat(90).bright_black());

    for token in &tokens {
        let status = if token.revoked_at.is_some() {
            "REVOKED".red()
        } else {
            "ACTIVE".green()
        };
        let last_used = token
            .last_used_at
            .map(|t| t.format("%Y-%m-%d %H:%M").to_string())
            .unwrap_or_else(|| "never".to_string());

        println!(
            "  {:<4} {:<8} {:<28} {:<18} {:<18} {}",
            token.id.to_string().bright_black(),
            token.user_id.to_string(),
            token.name.cyan(),
            token.created_at.format("%Y-%m-%d %H:%M").to_string().bright_black(),
            last_used.bright_black(),
            status
        );
    }

    println!();
    println!("  Total: {}", tokens.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Revokes a token by name or ID with confirmation prompt.
///
/// Numeric input is looked up by ID, anything else by exact name.
async fn revoke_token(repo: Arc<PgTokenRepository>, name_or_id: String) -> Result<()> {
    println!("{}", "🔒 Revoke API Token".bright_blue().bold());
    println!();

    let token = match name_or_id.parse::<i64>() {
        Ok(id) => repo
            .find_by_id(id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
        Err(_) => repo
            .find_by_name(&name_or_id)
            .await
            .map_err(|e| anyhow::anyhow!("Database error: {}", e))?,
    };

    let token = token.context("Token not found")?;

    if token.revoked_at.is_some() {
        println!("{}", "⚠️  This token is already revoked".yellow());
        return Ok(());
    }

    println!("  Token: {}", token.name.cyan());
    println!("  ID:    {}", token.id.to_string().bright_black());
    println!();

    let confirmed = Confirm::new()
        .with_prompt("Revoke this token?")
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "❌ Cancelled".red());
        return Ok(());
    }

    repo.revoke_token(token.id)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke token: {}", e))?;

    println!();
    println!("{}", "✅ Token revoked successfully!".green().bold());
    println!();

    Ok(())
}

/// Dispatches public link commands.
async fn handle_board_action(action: BoardAction, pool: &PgPool) -> Result<()> {
    let repo = Arc::new(PgBoardRepository::new(Arc::new(pool.clone())));

    match action {
        BoardAction::Unshare { board_id, yes } => unshare_board(repo, board_id, yes).await?,
        BoardAction::Shared => list_shared_boards(repo).await?,
    }

    Ok(())
}

/// Clears a board's credential outside the manager-gated API.
///
/// Intended for incident response when a link leaked. Live viewers are
/// notified when `REDIS_URL` is set.
async fn unshare_board(repo: Arc<PgBoardRepository>, board_id: i64, skip_confirm: bool) -> Result<()> {
    println!("{}", "🚫 Revoke Public Link".bright_blue().bold());
    println!();

    let board = repo
        .find_by_id(board_id)
        .await
        .map_err(|e| anyhow::anyhow!("Database error: {}", e))?
        .context("Board not found")?;

    let Some(token) = &board.public_share_token else {
        println!("{}", "⚠️  This board is not publicly shared".yellow());
        return Ok(());
    };

    println!("  Board: {}", board.name.cyan());
    println!("  Link:  {}…", token.prefix().bright_black());
    println!();

    if !skip_confirm {
        let confirmed = Confirm::new()
            .with_prompt("Revoke this public link?")
            .default(false)
            .interact()?;

        if !confirmed {
            println!("{}", "❌ Cancelled".red());
            return Ok(());
        }
    }

    let updated = repo
        .set_share_token(board_id, None)
        .await
        .map_err(|e| anyhow::anyhow!("Failed to revoke link: {}", e))?
        .context("Board was deleted")?;

    println!("{}", "✅ Public link revoked".green().bold());

    if let Ok(redis_url) = std::env::var("REDIS_URL") {
        match RedisBus::connect(&redis_url).await {
            Ok(bus) => match bus.publish(&BoardEvent::updated(updated)).await {
                Ok(()) => println!("{}", "📣 Live viewers notified".green()),
                Err(e) => println!("{} {}", "⚠️  Notification failed:".yellow(), e),
            },
            Err(e) => println!("{} {}", "⚠️  Notification skipped:".yellow(), e),
        }
    }
    println!();

    Ok(())
}

/// Lists boards with an active public link, showing only a credential prefix.
async fn list_shared_boards(repo: Arc<PgBoardRepository>) -> Result<()> {
    println!("{}", "🌐 Publicly Shared Boards".bright_blue().bold());
    println!();

    let boards = repo
        .list_shared()
        .await
        .map_err(|e| anyhow::anyhow!("Failed to list boards: {}", e))?;

    if boards.is_empty() {
        println!("{}", "  No boards are publicly shared".yellow());
        return Ok(());
    }

    println!(
        "  {:<6} {:<8} {:<30} {:<10}",
        "ID".bright_white().bold(),
        "Project".bright_white().bold(),
        "Name".bright_white().bold(),
        "Link".bright_white().bold()
    );
    println!("  {}", "─".repeat(60).bright_black());

    for board in &boards {
        let prefix = board
            .public_share_token
            .as_ref()
            .map(|t| format!("{}…", t.prefix()))
            .unwrap_or_default();

        println!(
            "  {:<6} {:<8} {:<30} {}",
            board.id.to_string().bright_black(),
            board.project_id.to_string(),
            board.name.cyan(),
            prefix.bright_black()
        );
    }

    println!();
    println!("  Total: {}", boards.len().to_string().bright_white().bold());
    println!();

    Ok(())
}

/// Handles database diagnostic commands.
async fn handle_db_action(action: DbAction, pool: &PgPool) -> Result<()> {
    match action {
        DbAction::Check => {
            println!("{}", "🔍 Checking database connection...".bright_blue());

            sqlx::query("SELECT 1").fetch_one(pool).await?;

            println!("{}", "✅ Database connection OK".green().bold());
        }
        DbAction::Info => {
            println!("{}", "ℹ️  Database Information".bright_blue().bold());
            println!();

            let version: String = sqlx::query_scalar("SELECT version()")
                .fetch_one(pool)
                .await?;

            let shared_boards: i64 = sqlx::query_scalar(
                "SELECT COUNT(*) FROM boards WHERE public_share_token IS NOT NULL",
            )
            .fetch_one(pool)
            .await?;

            let active_tokens: i64 =
                sqlx::query_scalar("SELECT COUNT(*) FROM api_tokens WHERE revoked_at IS NULL")
                    .fetch_one(pool)
                    .await?;

            println!("  PostgreSQL:    {}", version.bright_white());
            println!(
                "  Shared boards: {}",
                shared_boards.to_string().bright_green().bold()
            );
            println!(
                "  Active tokens: {}",
                active_tokens.to_string().bright_green().bold()
            );
            println!();
        }
    }

    Ok(())
}

/// Generates a cryptographically random token.
///
/// # Format
///
/// - Length: 48 characters
/// - Character set: A-Z, a-z, 0-9
/// - Entropy: ~286 bits
fn generate_token() -> String {
    use rand::Rng;
    const CHARSET: &[u8] = b"ABCDEFGHIJKLMNOPQRSTUVWXYZabcdefghijklmnopqrstuvwxyz0123456789";
    const TOKEN_LEN: usize = 48;

    let mut rng = rand::rng();

    (0..TOKEN_LEN)
        .map(|_| {
            let idx = rng.random_range(0..CHARSET.len());
            CHARSET[idx] as char
        })
        .collect()
}
