use anyhow::{Context, Result};
use colored::*;
use rusqlite::Connection;

use crate::auth;
use crate::db;

// The two fixed literals this run operates on. Every invocation targets the
// same account; there are no flags or prompts.
pub const TARGET_EMAIL: &str = "jvharten@gmail.com";
pub const NEW_PASSWORD: &str = "hockey2024";

/// Business outcome of one run. All variants exit the process with status 0;
/// only infrastructure errors surface as `Err`.
#[derive(Debug, PartialEq, Eq)]
pub enum ResetOutcome {
    Updated,
    UserNotFound,
    EmptyStore,
    UpdateFailed { affected: usize },
}

// Run the reset against the fixed target.
pub fn run(conn: &Connection) -> Result<ResetOutcome> {
    reset_password(conn, TARGET_EMAIL, NEW_PASSWORD)
}

// The linear reset sequence: list users, look up the target, hash the
// replacement secret, write it back, check exactly one row changed.
pub fn reset_password(conn: &Connection, email: &str, new_password: &str) -> Result<ResetOutcome> {
    let users = db::list_users(conn)?;
    if users.is_empty() {
        println!("{}", "❌ No users found in database".red());
        return Ok(ResetOutcome::EmptyStore);
    }

    println!("Existing users:");
    for (index, user) in users.iter().enumerate() {
        println!(
            "  {}. {} (created: {})",
            index + 1,
            user.email,
            user.created_display()
        );
    }
    println!();

    println!("Resetting password for: {}", email.bold());

    let Some(user) = db::find_user(conn, email)? else {
        println!(
            "{}",
            format!("❌ User '{}' not found in database", email).red()
        );
        return Ok(ResetOutcome::UserNotFound);
    };
    println!("{}\n", format!("✅ Found user: {}", user.email).green());

    println!("{}", "🔐 Hashing password...".cyan());
    let hashed =
        auth::hash_password(new_password).context("Failed to hash the replacement password")?;

    println!("{}", "💾 Updating database...".cyan());
    let affected = db::update_password(conn, email, &hashed)?;

    if affected == 1 {
        println!("{}", "\n✅ Password successfully reset!\n".green().bold());
        println!("You can now log in with:");
        println!("   Email: {}", email);
        println!("   Password: {}\n", new_password);
        println!("🚀 Open http://localhost:3000 to log in");
        Ok(ResetOutcome::Updated)
    } else {
        println!(
            "{}",
            format!("❌ Failed to update password ({} rows affected, expected 1)", affected).red()
        );
        Ok(ResetOutcome::UpdateFailed { affected })
    }
}
