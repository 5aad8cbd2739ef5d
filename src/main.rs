use anyhow::{Context, Result};
use colored::*;

use wisselapp_reset::{auth, db, reset, ui};

fn main() {
    if let Err(e) = run() {
        eprintln!("{} {:#}", "❌ Error:".red().bold(), e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    // Pick up WISSELAPP_DB from a .env file if one is present.
    dotenvy::dotenv().ok();

    ui::banner();

    // The hasher must prove itself before the store is opened.
    auth::ensure_hasher_ready().context("Password hashing is not operational")?;

    let path = db::store_path();
    let conn = db::open_store(&path)?;
    println!("{}\n", "✅ Connected to database".green());

    reset::run(&conn)?;

    Ok(())
}
