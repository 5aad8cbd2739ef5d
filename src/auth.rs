use anyhow::{bail, Context, Result};
use bcrypt::{hash, verify};

// bcrypt's MIN_COST is not re-exported in this version; mirror its value.
const MIN_COST: u32 = 4;

// Work factor for new hashes. The WisselApp server verifies with bcryptjs
// at the same cost, so the written value stays compatible.
pub const HASH_COST: u32 = 10;

// Hash a plaintext password with bcrypt (fresh random salt per call).
// Output is the modular-crypt "$2b$..." string the server expects.
pub fn hash_password(password: &str) -> Result<String> {
    hash(password, HASH_COST).context("Failed to hash password")
}

// Verify a password against a stored bcrypt hash.
pub fn verify_password(password: &str, stored_hash: &str) -> Result<bool> {
    verify(password, stored_hash).context("Invalid password hash format")
}

// Round-trip a probe value through the hasher before anything else runs.
// A hashing primitive that cannot verify its own output must never reach
// the store. MIN_COST keeps the probe fast.
pub fn ensure_hasher_ready() -> Result<()> {
    let probe = hash("preflight", MIN_COST).context("bcrypt hashing unavailable")?;
    if !verify("preflight", &probe).context("bcrypt verification unavailable")? {
        bail!("bcrypt self-check failed: probe hash did not verify");
    }
    Ok(())
}
