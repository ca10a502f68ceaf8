//! RNG seed derivation for deterministic per-game behavior.
//!
//! Game ids are opaque strings, so seeds are derived by hashing rather
//! than arithmetic. Same game id = same seed, stable across restarts.

/// Derive the seed used to sample a game's themes.
pub fn derive_theme_seed(game_id: &str) -> u64 {
    let digest = blake3::hash(game_id.as_bytes());
    let mut bytes = [0u8; 8];
    bytes.copy_from_slice(&digest.as_bytes()[..8]);
    u64::from_le_bytes(bytes)
}
