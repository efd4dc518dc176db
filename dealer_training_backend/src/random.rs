// Shuffle-training randomness

use crate::types::{
    AnnouncedBet, DynamicChipCountResult, RandomModeResult, DYNAMIC_CHIP_BANDS,
    DYNAMIC_CHIP_MAX_PERCENT,
};
use ic_cdk::management_canister::raw_rand;
use sha2::{Digest, Sha256};

// =============================================================================
// PURE HELPERS
// =============================================================================

/// Reject randomness that is too short or degenerate (all zeros / all ones).
pub fn validate_randomness(bytes: &[u8]) -> Result<(), String> {
    if bytes.len() < 8 {
        return Err("Insufficient randomness bytes".to_string());
    }

    let first_8 = &bytes[0..8];
    if first_8.iter().all(|&b| b == 0) {
        return Err("Degenerate randomness detected: all zeros".to_string());
    }
    if first_8.iter().all(|&b| b == 0xFF) {
        return Err("Degenerate randomness detected: all ones".to_string());
    }

    Ok(())
}

/// First 8 bytes as a big-endian u64.
pub fn bytes_to_u64(bytes: &[u8]) -> Result<u64, String> {
    validate_randomness(bytes)?;
    let mut byte_array = [0u8; 8];
    byte_array.copy_from_slice(&bytes[0..8]);
    Ok(u64::from_be_bytes(byte_array))
}

/// SHA-256 of the randomness, hex encoded, for display next to the outcome.
pub fn create_randomness_hash(bytes: &[u8]) -> String {
    let mut hasher = Sha256::new();
    hasher.update(bytes);
    hex::encode(hasher.finalize())
}

/// Uniform pick among the four racetrack calls.
pub fn mode_from_random(random: u64) -> AnnouncedBet {
    let index = (random % AnnouncedBet::ALL.len() as u64) as usize;
    AnnouncedBet::ALL[index]
}

/// Spread, in percent, allowed around a requested chip count. Grows with the count.
pub fn chip_spread_percent(requested: u32) -> u32 {
    DYNAMIC_CHIP_BANDS
        .iter()
        .find(|(upper, _)| requested <= *upper)
        .map(|(_, percent)| *percent)
        .unwrap_or(DYNAMIC_CHIP_MAX_PERCENT)
}

/// Chip count drawn uniformly from `requested ± spread` (at least one chip of
/// spread, never below one chip). A request for zero chips stays zero.
pub fn dynamic_chip_count(requested: u32, random: u64) -> u32 {
    if requested == 0 {
        return 0;
    }

    let percent = chip_spread_percent(requested) as u64;
    let spread = ((requested as u64 * percent + 50) / 100).max(1);
    let low = (requested as u64).saturating_sub(spread).max(1);
    let high = requested as u64 + spread;

    let count = low + random % (high - low + 1);
    u32::try_from(count).unwrap_or(u32::MAX)
}

// =============================================================================
// VRF-BACKED DRAWS
// =============================================================================

async fn fetch_randomness() -> Result<Vec<u8>, String> {
    let random_bytes = raw_rand().await
        .map_err(|e| format!("Randomness failed: {:?}", e))?;
    validate_randomness(&random_bytes)?;
    Ok(random_bytes)
}

pub async fn draw_random_mode() -> Result<RandomModeResult, String> {
    let random_bytes = fetch_randomness().await?;
    let mode = mode_from_random(bytes_to_u64(&random_bytes)?);

    Ok(RandomModeResult {
        mode: mode.name().to_string(),
        randomness_hash: create_randomness_hash(&random_bytes),
    })
}

pub async fn draw_dynamic_chip_count(requested: u32) -> Result<DynamicChipCountResult, String> {
    let random_bytes = fetch_randomness().await?;
    let chip_count = dynamic_chip_count(requested, bytes_to_u64(&random_bytes)?);

    Ok(DynamicChipCountResult {
        requested,
        chip_count,
        randomness_hash: create_randomness_hash(&random_bytes),
    })
}
