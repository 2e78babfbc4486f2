use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for claiming pending proceeds
 *
 * Runs the settlement primitive on the caller's position and pays the
 * pending amount from the vault. No share balance changes. Claiming with
 * nothing pending succeeds silently as a no-op.
 *
 * Access Control: Any holder with an existing position
 */
#[event_cpi]
#[derive(Accounts)]
pub struct ClaimProceeds<'info> {
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

    /// Asset vault paying out the proceeds
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Holder's token account receiving the proceeds
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

    /// The holder claiming proceeds
    #[account(mut)]
    pub holder: Signer<'info>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Settles and pays the caller's pending proceeds
 *
 * @param ctx - The account context containing all required accounts
 * @returns The amount paid (0 when nothing was pending)
 */
pub fn handle_claim_proceeds(ctx: Context<ClaimProceeds>) -> Result<u64> {
    let pool = &mut ctx.accounts.pool;
    let position = &mut ctx.accounts.position;

    // ===== EFFECTS PHASE (State Updates) =====

    let settled = pool.settle_position(position)?;
    if settled == 0 {
        // Nothing pending: silent no-op rather than an error
        return Ok(0);
    }

    // Check vault has sufficient balance before proceeding
    require!(
        ctx.accounts.vault.amount >= settled,
        ProceedsPoolError::InsufficientVaultBalance
    );

    let pool_key = pool.key();
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

    transfer_token(
        ctx.accounts.pool.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.holder_token_account.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        settled,
        ctx.accounts.asset_mint.decimals,
        Some(signer), // PDA signing for secure transfer
    )?;

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(ProceedsClaimed {
        pool: pool_key,
        holder: ctx.accounts.holder.key(),
        amount: settled,
        total_proceeds_claimed,
    });

    Ok(settled)
}
