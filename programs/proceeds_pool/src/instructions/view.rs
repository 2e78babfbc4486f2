use anchor_lang::prelude::*;
use anchor_spl::token_interface::TokenAccount;
use crate::state::*;
use crate::constants::*;

/**
 * Read-only instructions
 *
 * These instructions mutate nothing and hand their result back as borsh
 * return data, so off-chain callers can simulate them instead of
 * re-implementing the pending-proceeds formula. A missing position account
 * reads as the zero record: zero shares, zero checkpoint, zero locked.
 */

/// Pool-level snapshot returned by get_pool_info
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct PoolInfo {
    /// Total claim units outstanding
    pub total_shares: u64,
    /// Underlying units currently held in the vault
    pub total_assets: u64,
    /// Lifetime proceeds ever injected
    pub total_proceeds_deposited: u64,
    /// Lifetime proceeds paid out (settlements plus zero-supply bonus)
    pub total_proceeds_claimed: u64,
    /// Proceeds escrowed while no shares existed
    pub pending_zero_supply_proceeds: u64,
    /// Current accumulator value (PRECISION scale)
    pub cumulative_proceeds_per_share: u128,
}

/// Holder-level snapshot returned by get_holder_info
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug)]
pub struct HolderInfo {
    /// Share balance
    pub shares: u64,
    /// Currently claimable proceeds
    pub pending_proceeds: u64,
    /// Accumulator snapshot at last settlement (PRECISION scale)
    pub checkpoint: u128,
    /// Proceeds detached by transfers, owed unconditionally
    pub locked_proceeds: u64,
}

/**
 * Account context for reading a holder's pending proceeds
 */
#[derive(Accounts)]
pub struct GetPendingProceeds<'info> {
    /// The pool account holding the reward-accumulator ledger
    pub pool: Account<'info, ProceedsPool>,

    /// The holder's position; absent means the zero record
    /// - Derived from: ["position", pool_key, holder_key]
    #[account(
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub position: Option<Account<'info, HolderPosition>>,

    /// The holder being queried
    /// CHECK: Only used as a key for position derivation
    pub holder: AccountInfo<'info>,
}

pub fn handle_get_pending_proceeds(ctx: Context<GetPendingProceeds>) -> Result<u64> {
    let pool = &ctx.accounts.pool;
    match &ctx.accounts.position {
        Some(position) => pool.pending_proceeds(position),
        None => Ok(0),
    }
}

/**
 * Account context for reading the pool-level snapshot
 */
#[derive(Accounts)]
pub struct GetPoolInfo<'info> {
    /// The pool account holding the reward-accumulator ledger
    pub pool: Account<'info, ProceedsPool>,

    /// Asset vault, read for the total underlying held
    /// - Derived from: ["vault", pool_key]
    #[account(
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,
}

pub fn handle_get_pool_info(ctx: Context<GetPoolInfo>) -> Result<PoolInfo> {
    let pool = &ctx.accounts.pool;
    Ok(PoolInfo {
        total_shares: pool.total_shares,
        total_assets: ctx.accounts.vault.amount,
        total_proceeds_deposited: pool.total_proceeds_deposited,
        total_proceeds_claimed: pool.total_proceeds_claimed,
        pending_zero_supply_proceeds: pool.pending_zero_supply_proceeds,
        cumulative_proceeds_per_share: pool.cumulative_proceeds_per_share,
    })
}

/**
 * Account context for reading a holder-level snapshot
 */
#[derive(Accounts)]
pub struct GetHolderInfo<'info> {
    /// The pool account holding the reward-accumulator ledger
    pub pool: Account<'info, ProceedsPool>,

    /// The holder's position; absent means the zero record
    /// - Derived from: ["position", pool_key, holder_key]
    #[account(
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub position: Option<Account<'info, HolderPosition>>,

    /// The holder being queried
    /// CHECK: Only used as a key for position derivation
    pub holder: AccountInfo<'info>,
}

pub fn handle_get_holder_info(ctx: Context<GetHolderInfo>) -> Result<HolderInfo> {
    let pool = &ctx.accounts.pool;
    match &ctx.accounts.position {
        Some(position) => Ok(HolderInfo {
            shares: position.shares,
            pending_proceeds: pool.pending_proceeds(position)?,
            checkpoint: position.checkpoint,
            locked_proceeds: position.locked_proceeds,
        }),
        None => Ok(HolderInfo {
            shares: 0,
            pending_proceeds: 0,
            checkpoint: 0,
            locked_proceeds: 0,
        }),
    }
}
