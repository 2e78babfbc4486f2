use anchor_lang::prelude::*;
use crate::state::*;
use crate::error::*;
use crate::event::*;
use crate::constants::*;

/**
 * Account context for closing an empty position account
 *
 * This instruction allows a holder who has fully withdrawn to close their
 * HolderPosition account and reclaim the rent paid during creation.
 *
 * Access Control: Only the original holder can close their position
 * (enforced by PDA seeds)
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClosePosition<'info> {
    /// Position account to be closed, rent returned to holder
    /// - Must hold no shares and no locked proceeds
    /// - Derived from: ["position", pool_key, holder_key]
    #[account(
        mut,
        close = holder,
        seeds = [POSITION_SEED.as_bytes(), pool_key.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub position: Account<'info, HolderPosition>,

    /// The holder who originally created the position account
    /// - Will receive the reclaimed rent
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Pool account used for PDA derivation
    /// CHECK: Only used as a seed; the position's emptiness check does not
    /// depend on pool state
    pub pool_key: AccountInfo<'info>,
}

/**
 * Closes an empty HolderPosition account and returns rent to the holder
 *
 * @param ctx - The account context containing the position and holder accounts
 *
 * Validation Process:
 * 1. Require shares == 0 and locked_proceeds == 0 (with zero shares the
 *    accrual term is zero too, so nothing claimable is destroyed)
 * 2. Anchor automatically transfers lamports and closes the account
 */
pub fn handle_close_position(ctx: Context<ClosePosition>) -> Result<()> {
    let position = &ctx.accounts.position;

    require!(
        position.shares == 0 && position.locked_proceeds == 0,
        ProceedsPoolError::PositionNotEmpty
    );

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(PositionClosed {
        pool: ctx.accounts.pool_key.key(),
        holder: ctx.accounts.holder.key(),
    });

    Ok(())
}
