use anchor_lang::prelude::*;

/**
 * Program Constants
 *
 * This module defines all the constant values used throughout the proceeds pool program.
 * These constants control reward arithmetic precision and PDA derivation.
 */

#[constant]
/// ===== REWARD ARITHMETIC CONSTANTS =====

/// Precision multiplier for the cumulative proceeds-per-share accumulator (1e18)
/// - Scales `amount / total_shares` before the floor division so sub-unit
///   entitlements survive between injections instead of truncating to zero
/// - `u64` amounts times 1e18 always fit in u128
/// - Off-chain consumers computing pending proceeds MUST use the same constant:
///   pending = locked + (cumulative - checkpoint) * shares / PRECISION
pub const PRECISION: u128 = 1_000_000_000_000_000_000;

/// ===== PDA SEED CONSTANTS =====

/// Seed for owner nonce PDA derivation
/// - Used in: ["owner_nonce", owner]
/// - Creates unique nonce tracking accounts for each owner
/// - Enables automatic nonce assignment for pools
pub const OWNER_NONCE_SEED: &str = "owner_nonce";

/// Seed for pool PDA derivation
/// - Used in: ["pool", asset_mint, owner, nonce]
/// - Creates unique pool accounts for each (asset, owner, nonce) combination
/// - Ensures deterministic and collision-free PDA generation
pub const POOL_SEED: &str = "pool";

/// Seed for asset vault PDA derivation
/// - Used in: ["vault", pool_key]
/// - Creates a unique vault for each pool
/// - Ensures the vault is controlled by the pool PDA
pub const VAULT_SEED: &str = "vault";

/// Seed for holder position PDA derivation
/// - Used in: ["position", pool_key, holder_key]
/// - Creates unique reward bookkeeping for each (pool, holder) pair
/// - Tracks share balance, accumulator checkpoint and locked proceeds
pub const POSITION_SEED: &str = "position";
