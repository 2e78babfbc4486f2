use anchor_lang::prelude::*;

/**
 * Individual holder position account
 *
 * This struct holds the share balance and reward bookkeeping for one holder
 * in one pool. The zero-valued default is the canonical "no position" record:
 * a holder who fully withdraws simply reverts to all-zero fields.
 *
 * Derivation: ["position", pool_key, holder_key]
 *
 * Lifecycle:
 * 1. Created lazily on first deposit or first receipt of a share transfer
 *    (using init_if_needed)
 * 2. Updated by every settlement and balance change
 * 3. Can be closed once empty for rent reclamation
 *
 * Design Notes:
 * - One HolderPosition account per (pool, holder) pair
 * - checkpoint never exceeds the pool's cumulative accumulator
 * - locked_proceeds is owed unconditionally, independent of current shares
 */
#[account]
#[derive(Default, Debug)]
pub struct HolderPosition {
    /// Share balance (claim units, 1:1 with deposited underlying)
    pub shares: u64,

    /// Snapshot of the pool's cumulative proceeds-per-share at the last
    /// settlement of this position (accumulator scale, PRECISION-multiplied)
    pub checkpoint: u128,

    /// Proceeds accrued under a previous balance (detached by a share
    /// transfer), no longer tied to per-share accrual but still owed in full
    pub locked_proceeds: u64,
}

impl HolderPosition {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<HolderPosition>();
}
