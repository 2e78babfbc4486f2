use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for withdrawing underlying assets by burning shares
 *
 * The holder is force-settled before the burn, so no pending proceeds can
 * remain on the position afterwards. Principal and any settlement payout
 * leave the vault in one transfer.
 *
 * Access Control: Any holder can withdraw up to their share balance
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Withdraw<'info> {
    /// The pool account holding the reward-accumulator ledger
    #[account(mut)]
    pub pool: Account<'info, ProceedsPool>,

    /// The holder's position in this pool
    /// - Derived from: ["position", pool_key, holder_key]
    #[account(
        mut,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), holder.key().as_ref()],
        bump
    )]
    pub position: Account<'info, HolderPosition>,

    /// Asset vault paying out the principal and settlement
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Holder's token account receiving the payout
    /// - Must be owned by the holder
    #[account(
        mut,
        token::mint = pool.asset_mint,
        token::authority = holder,
        token::token_program = token_program,
    )]
    pub holder_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The asset mint for verification
    /// - Must match the pool's asset mint
    #[account(
        token::token_program = token_program,
        constraint = asset_mint.key() == pool.asset_mint @ ProceedsPoolError::TokenMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The holder withdrawing
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Burns shares and pays out underlying 1:1, settling proceeds first
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of shares to burn (underlying paid 1:1)
 *
 * Validation Rules:
 * - amount must be positive and within the holder's share balance
 * - all validation happens before any state change
 */
pub fn handle_withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let position = &mut ctx.accounts.position;

    // ===== VALIDATION PHASE =====

    require!(amount > 0, ProceedsPoolError::ZeroAmount);
    require!(
        amount <= position.shares,
        ProceedsPoolError::InsufficientBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Force-settle so the position carries zero pending proceeds after the
    // withdrawal (hard requirement; burn itself has no settlement hook)
    let settled = pool.settle_position(position)?;
    pool.burn_shares(position, amount)?;

    let total_out = amount
        .checked_add(settled)
        .ok_or(ProceedsPoolError::ArithmeticOverflow)?;

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.vault.amount >= total_out,
        ProceedsPoolError::InsufficientVaultBalance
    );

    let pool_key = pool.key();
    let new_total_shares = pool.total_shares;
    let total_proceeds_claimed = pool.total_proceeds_claimed;

    // Prepare PDA signing seeds for the vault payout
    let nonce_bytes = pool.nonce.to_le_bytes();
    let asset_mint_key = pool.asset_mint;
    let owner_key = pool.owner;
    let pool_bump = pool.bump;
    let seeds = &[
        POOL_SEED.as_bytes(),
        asset_mint_key.as_ref(),
        owner_key.as_ref(),
        nonce_bytes.as_ref(),
        &[pool_bump],
    ];
    let signer = &[&seeds[..]];

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Pay principal plus settlement in one transfer using PDA authority
    transfer_token(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.holder_token_account.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        total_out,
        ctx.accounts.asset_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit events for off-chain indexing and monitoring
    if settled > 0 {
        emit_cpi!(ProceedsClaimed {
            pool: pool_key,
            holder: ctx.accounts.holder.key(),
            amount: settled,
            total_proceeds_claimed,
        });
    }

    emit_cpi!(SharesWithdrawn {
        pool: pool_key,
        holder: ctx.accounts.holder.key(),
        amount,
        total_shares: new_total_shares,
    });

    Ok(())
}
