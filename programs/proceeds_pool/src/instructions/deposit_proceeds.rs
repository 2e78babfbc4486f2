use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for injecting proceeds into the pool
 *
 * The injected amount is distributed pro-rata to current share-holders by
 * advancing the cumulative proceeds-per-share accumulator. If no shares
 * exist the amount is escrowed for the next depositor instead.
 *
 * Access Control: Only the pool admin can deposit proceeds
 */
#[event_cpi]
#[derive(Accounts)]
pub struct DepositProceeds<'info> {
    /// The pool account holding the reward-accumulator ledger
    #[account(mut)]
    pub pool: Account<'info, ProceedsPool>,

    /// Asset vault receiving the proceeds
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Admin's token account supplying the proceeds
    /// - Must be owned by the admin
    #[account(
        mut,
        token::mint = pool.asset_mint,
        token::authority = admin,
        token::token_program = token_program,
    )]
    pub admin_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The asset mint for verification
    /// - Must match the pool's asset mint
    #[account(
        token::token_program = token_program,
        constraint = asset_mint.key() == pool.asset_mint @ ProceedsPoolError::TokenMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The pool admin
    /// - Must match the admin stored in the pool state
    #[account(
        mut,
        constraint = admin.key() == pool.admin @ ProceedsPoolError::OnlyAdmin
    )]
    pub admin: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Injects proceeds for pro-rata distribution to current holders
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of proceeds to inject
 *
 * Accounting:
 * - total_shares > 0: accumulator += amount * PRECISION / total_shares
 *   (floor division; the sub-share remainder is forfeited dust, bounded
 *   by total_shares scaled units per injection)
 * - total_shares == 0: amount goes to the zero-supply escrow, accumulator
 *   unchanged
 * - total_proceeds_deposited grows unconditionally
 */
pub fn handle_deposit_proceeds(ctx: Context<DepositProceeds>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;

    // ===== VALIDATION PHASE =====

    require!(amount > 0, ProceedsPoolError::ZeroAmount);

    // ===== EFFECTS PHASE (State Updates) =====

    let escrowed = pool.total_shares == 0;
    pool.accrue_proceeds(amount)?;

    let pool_key = pool.key();
    let cumulative_proceeds_per_share = pool.cumulative_proceeds_per_share;
    let total_proceeds_deposited = pool.total_proceeds_deposited;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    // Pull the proceeds from the admin into the vault
    transfer_token(
        ctx.accounts.admin.to_account_info(),
        ctx.accounts.admin_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.asset_mint.decimals,
        None, // No signer seeds needed for admin-signed transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ProceedsDeposited {
        pool: pool_key,
        admin: ctx.accounts.admin.key(),
        amount,
        cumulative_proceeds_per_share,
        total_proceeds_deposited,
        escrowed,
    });

    Ok(())
}
