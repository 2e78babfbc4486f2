use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for depositing underlying assets for shares
 *
 * This instruction pulls the deposit into the vault and mints claim units
 * 1:1 into the depositor's position. The mint routes through the settlement
 * hook: a re-depositing holder is paid their accrued proceeds first, so the
 * new units never inflate past distributions. If the pool's zero-supply
 * escrow is non-empty and no shares exist yet, the full escrow is paid to
 * this depositor as the first-depositor bonus.
 *
 * Access Control: Any user can deposit
 */
#[event_cpi]
#[derive(Accounts)]
pub struct Deposit<'info> {
    /// The pool account holding the reward-accumulator ledger
    #[account(mut)]
    pub pool: Account<'info, ProceedsPool>,

    /// The depositor's position in this pool
    /// - Created on first deposit; the zero record for new holders
    /// - Derived from: ["position", pool_key, depositor_key]
    #[account(
        init_if_needed,
        payer = depositor,
        space = HolderPosition::LEN,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), depositor.key().as_ref()],
        bump
    )]
    pub position: Account<'info, HolderPosition>,

    /// Asset vault receiving the deposit
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Depositor's token account supplying the underlying assets
    /// - Must be owned by the depositor
    /// - Also receives any settlement payout and the zero-supply bonus
    #[account(
        mut,
        token::mint = pool.asset_mint,
        token::authority = depositor,
        token::token_program = token_program,
    )]
    pub depositor_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The asset mint for verification
    /// - Must match the pool's asset mint
    #[account(
        token::token_program = token_program,
        constraint = asset_mint.key() == pool.asset_mint @ ProceedsPoolError::TokenMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The depositor
    #[account(mut)]
    pub depositor: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Processes a deposit of underlying assets for claim shares
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of underlying to deposit (shares minted 1:1)
 *
 * Processing order:
 * 1. Validate amount
 * 2. Drain the zero-supply escrow if this is the first deposit after it
 * 3. Mint shares through the settlement hook (freeze-then-mint)
 * 4. Pull the deposit into the vault, then pay settlement + bonus out
 */
pub fn handle_deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let position = &mut ctx.accounts.position;

    // ===== VALIDATION PHASE =====

    require!(amount > 0, ProceedsPoolError::ZeroAmount);

    // ===== EFFECTS PHASE (State Updates) =====

    // The only path draining the zero-supply escrow: proceeds injected while
    // no shares existed go in full to the next depositor
    let bonus = if pool.total_shares == 0 {
        pool.take_zero_supply_escrow()?
    } else {
        0
    };

    // Freeze-then-mint: settles a re-depositing holder on the old balance,
    // then starts the enlarged balance from a fresh checkpoint
    let settled = pool.mint_shares(position, amount)?;

    let payout = settled
        .checked_add(bonus)
        .ok_or(ProceedsPoolError::ArithmeticOverflow)?;

    // Check vault covers the payouts before any transfer
    require!(
        ctx.accounts.vault.amount >= payout,
        ProceedsPoolError::InsufficientVaultBalance
    );

    let pool_key = pool.key();
    let new_total_shares = pool.total_shares;
    let total_proceeds_claimed = pool.total_proceeds_claimed;

    // Prepare PDA signing seeds for the outbound transfer
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

    // ===== INTERACTIONS PHASE (Token Transfers) =====

    // Pull the deposit from the depositor into the vault
    transfer_token(
        ctx.accounts.depositor.to_account_info(),
        ctx.accounts.depositor_token_account.to_account_info(),
        ctx.accounts.vault.to_account_info(),
        ctx.accounts.asset_mint.to_account_info(),
        ctx.accounts.token_program.to_account_info(),
        amount,
        ctx.accounts.asset_mint.decimals,
        None, // No signer seeds needed for depositor-signed transfer
    )?;

    // Pay the settlement payout and bonus from the vault using PDA authority
    if payout > 0 {
        transfer_token(
            ctx.accounts.pool.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.depositor_token_account.to_account_info(),
            ctx.accounts.asset_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            payout,
            ctx.accounts.asset_mint.decimals,
            Some(signer), // PDA signing for secure transfer
        )?;
    }

    // Emit events for off-chain indexing and monitoring
    if settled > 0 {
        emit_cpi!(ProceedsClaimed {
            pool: pool_key,
            holder: ctx.accounts.depositor.key(),
            amount: settled,
            total_proceeds_claimed,
        });
    }

    if bonus > 0 {
        emit_cpi!(FirstDepositorBonusPaid {
            pool: pool_key,
            depositor: ctx.accounts.depositor.key(),
            amount: bonus,
        });
    }

    emit_cpi!(SharesDeposited {
        pool: pool_key,
        depositor: ctx.accounts.depositor.key(),
        amount,
        total_shares: new_total_shares,
    });

    Ok(())
}
