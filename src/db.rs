use anyhow::{Context, Result};
use chrono::{DateTime, NaiveDateTime, Utc};
use chrono_tz::Europe::Amsterdam;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::env;

// Default store file, next to wherever the tool is run from.
// Override with WISSELAPP_DB (a .env file works too).
const DEFAULT_STORE: &str = "wisselapp.db";

// Converts UTC timestamp strings (e.g. "2025-10-18 13:32:39") into Europe/Amsterdam time (CET/CEST).
fn to_amsterdam_time(utc_str: &str) -> Option<String> {
    if let Ok(naive) = NaiveDateTime::parse_from_str(utc_str, "%Y-%m-%d %H:%M:%S") {
        let utc_dt: DateTime<Utc> = DateTime::<Utc>::from_naive_utc_and_offset(naive, Utc);
        let local_dt = utc_dt.with_timezone(&Amsterdam);
        Some(local_dt.format("%Y-%m-%d %H:%M:%S %Z").to_string())
    } else {
        None
    }
}

/// One row of the `users` table. The stored hash is never read back;
/// the tool only overwrites it.
#[derive(Debug)]
pub struct UserRecord {
    pub id: i64,
    pub email: String,
    pub created_at: Option<String>,
}

impl UserRecord {
    // Creation timestamp in Dutch local time, or "unknown" when absent.
    pub fn created_display(&self) -> String {
        self.created_at
            .as_deref()
            .and_then(to_amsterdam_time)
            .unwrap_or_else(|| "unknown".to_string())
    }
}

// Resolve the store path from the environment.
pub fn store_path() -> String {
    env::var("WISSELAPP_DB").unwrap_or_else(|_| DEFAULT_STORE.to_string())
}

// Open the store read-write. The file must already exist: opening without
// CREATE keeps a mistyped path from leaving an empty store behind.
pub fn open_store(path: &str) -> Result<Connection> {
    let conn = Connection::open_with_flags(path, OpenFlags::SQLITE_OPEN_READ_WRITE)
        .with_context(|| format!("Failed to open store '{}'", path))?;

    conn.execute_batch(
        r#"
        PRAGMA busy_timeout=5000;
        PRAGMA foreign_keys=ON;
        "#,
    )
    .context("Failed to apply connection PRAGMA settings")?;

    Ok(conn)
}

// All registered users, oldest first.
pub fn list_users(conn: &Connection) -> Result<Vec<UserRecord>> {
    let mut stmt = conn
        .prepare("SELECT id, email, created_at FROM users ORDER BY created_at ASC")
        .context("Failed to prepare user listing query")?;

    let rows = stmt
        .query_map([], |r| {
            Ok(UserRecord {
                id: r.get(0)?,
                email: r.get(1)?,
                created_at: r.get(2)?,
            })
        })
        .context("Failed to query users")?;

    let mut users = Vec::new();
    for row in rows {
        users.push(row.context("Failed to read user row")?);
    }
    Ok(users)
}

// Look up a single user by email.
pub fn find_user(conn: &Connection, email: &str) -> Result<Option<UserRecord>> {
    conn.query_row(
        "SELECT id, email, created_at FROM users WHERE email = ?1",
        params![email],
        |r| {
            Ok(UserRecord {
                id: r.get(0)?,
                email: r.get(1)?,
                created_at: r.get(2)?,
            })
        },
    )
    .optional()
    .context("Failed to query user by email")
}

// Overwrite the stored credential hash for one email.
// Returns the affected row count; the caller checks it is exactly 1.
pub fn update_password(conn: &Connection, email: &str, hashed: &str) -> Result<usize> {
    conn.execute(
        "UPDATE users SET password = ?1 WHERE email = ?2",
        params![hashed, email],
    )
    .context("Failed to update password")
}
