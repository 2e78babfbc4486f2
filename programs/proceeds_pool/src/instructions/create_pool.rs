use crate::constants::*;
use crate::error::*;
use crate::event::*;
use crate::state::*;
use anchor_lang::prelude::*;
use anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface};

/**
 * Account context for creating a new proceeds pool
 *
 * This instruction initializes a new pool with automatic nonce management:
 * - Creates or updates a nonce state PDA to track nonce numbers
 * - Creates a pool PDA with auto-incremented nonce number
 * - Creates an asset vault PDA that will hold all pool custody
 * - Sets up the admin who may inject proceeds
 *
 * Access Control: Anyone can create a pool; the creator becomes its owner
 */
#[event_cpi]
#[derive(Accounts)]
pub struct CreatePool<'info> {
    /// Nonce state account (PDA) that tracks nonce numbers for this owner
    /// - Stores the current nonce counter for automatic nonce assignment
    /// - Derived from: ["owner_nonce", owner]
    #[account(
        init_if_needed,
        payer = owner,
        space = NonceState::LEN,
        seeds = [OWNER_NONCE_SEED.as_bytes(), owner.key().as_ref()],
        bump
    )]
    pub owner_nonce: Account<'info, NonceState>,

    /// The main pool account (PDA)
    /// - Stores the pool identity and the reward-accumulator ledger
    /// - Derived from: ["pool", asset_mint, owner, current_nonce]
    /// - Nonce is automatically determined from owner_nonce.nonce + 1
    #[account(
        init,
        payer = owner,
        space = ProceedsPool::LEN,
        seeds = [
            POOL_SEED.as_bytes(),
            asset_mint.key().as_ref(),
            owner.key().as_ref(),
            (owner_nonce.nonce + 1).to_le_bytes().as_ref()
        ],
        bump
    )]
    pub pool: Account<'info, ProceedsPool>,

    /// Asset vault account (PDA) holding all pool custody
    /// - Principal deposits, injected proceeds and zero-supply escrow alike
    /// - Controlled by the pool PDA as token authority
    /// - Derived from: ["vault", pool_key]
    #[account(
        init,
        token::mint = asset_mint,
        token::authority = pool,
        token::token_program = token_program,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump,
        payer = owner,
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// The underlying asset mint
    /// - Supports both SPL Token and Token 2022 programs
    #[account(
        token::token_program = token_program,
    )]
    pub asset_mint: InterfaceAccount<'info, Mint>,

    /// The owner of the pool
    /// - Part of the pool's PDA identity; pays for account creation
    #[account(mut)]
    pub owner: Signer<'info>,

    /// The admin account allowed to deposit proceeds
    /// CHECK: This account is validated by storing its key in the pool state
    pub admin: AccountInfo<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,

    /// Rent sysvar for rent exemption calculations
    pub rent: Sysvar<'info, Rent>,
}

/**
 * Creates a new proceeds pool with automatic nonce management
 *
 * @param ctx - The account context containing all required accounts
 */
pub fn handle_create_pool(ctx: Context<CreatePool>) -> Result<()> {
    // Validate admin is not the default account
    require!(
        ctx.accounts.admin.key() != Pubkey::default(),
        ProceedsPoolError::ZeroAddress
    );

    let owner_nonce = &mut ctx.accounts.owner_nonce;
    let pool = &mut ctx.accounts.pool;

    // Calculate nonce number with overflow protection
    let current_nonce = owner_nonce
        .nonce
        .checked_add(1)
        .ok_or(ProceedsPoolError::ArithmeticOverflow)?;

    // Update nonce state with current nonce
    owner_nonce.nonce = current_nonce;

    // Initialize pool identity with auto-assigned nonce
    pool.bump = ctx.bumps.pool;
    pool.nonce = current_nonce;
    pool.owner = ctx.accounts.owner.key();
    pool.admin = ctx.accounts.admin.key();
    pool.asset_mint = ctx.accounts.asset_mint.key();
    pool.vault = ctx.accounts.vault.key();
    // Note: all ledger fields (total_shares, accumulator, counters) start at 0

    // Emit event for off-chain indexing and monitoring
    // Uses emit_cpi! for cross-program call compatibility
    emit_cpi!(PoolCreated {
        pool: pool.key(),
        nonce: current_nonce,
        owner: ctx.accounts.owner.key(),
        admin: ctx.accounts.admin.key(),
        asset_mint: ctx.accounts.asset_mint.key(),
        vault: ctx.accounts.vault.key(),
    });

    Ok(())
}
