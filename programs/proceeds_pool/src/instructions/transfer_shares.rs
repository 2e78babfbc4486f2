use anchor_lang::prelude::*;
use anchor_spl::token_interface::{TokenInterface, TokenAccount};
use crate::state::*;
use crate::error::*;
use crate::constants::*;
use crate::utils::transfer_token;
use crate::event::*;

/**
 * Account context for transferring claim shares between holders
 *
 * This is the claim ledger's transfer transition, wrapped around the
 * settlement hook so no accrued value is lost or created by the move:
 * - the sender's accrual on the outgoing balance is locked in place
 *   (claimable total unchanged by the transfer)
 * - the recipient is fully settled on the pre-transfer balance, and the
 *   received units start from a fresh checkpoint (no retroactive credit)
 *
 * Access Control: Only the sender can transfer their own shares
 */
#[event_cpi]
#[derive(Accounts)]
pub struct TransferShares<'info> {
    /// The pool account holding the reward-accumulator ledger
    #[account(mut)]
    pub pool: Account<'info, ProceedsPool>,

    /// The sender's position in this pool
    /// - Derived from: ["position", pool_key, sender_key]
    #[account(
        mut,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), sender.key().as_ref()],
        bump
    )]
    pub sender_position: Account<'info, HolderPosition>,

    /// The recipient's position in this pool
    /// - Created on first receipt; the zero record for new holders
    /// - Derived from: ["position", pool_key, recipient_key]
    #[account(
        init_if_needed,
        payer = sender,
        space = HolderPosition::LEN,
        seeds = [POSITION_SEED.as_bytes(), pool.key().as_ref(), recipient.key().as_ref()],
        bump
    )]
    pub recipient_position: Account<'info, HolderPosition>,

    /// Asset vault paying out the recipient's settlement, if any
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    #[account(
        mut,
        seeds = [VAULT_SEED.as_bytes(), pool.key().as_ref()],
        bump
    )]
    pub vault: InterfaceAccount<'info, TokenAccount>,

    /// Recipient's token account receiving their settlement payout
    /// - Must be owned by the recipient
    #[account(
        mut,
        token::mint = pool.asset_mint,
        token::authority = recipient,
        token::token_program = token_program,
    )]
    pub recipient_token_account: InterfaceAccount<'info, TokenAccount>,

    /// The asset mint for verification
    /// - Must match the pool's asset mint
    #[account(
        token::token_program = token_program,
        constraint = asset_mint.key() == pool.asset_mint @ ProceedsPoolError::TokenMintMismatch
    )]
    pub asset_mint: InterfaceAccount<'info, anchor_spl::token_interface::Mint>,

    /// The recipient of the shares
    /// CHECK: Only used as a key for position derivation and validation
    pub recipient: AccountInfo<'info>,

    /// The sender of the shares
    #[account(mut)]
    pub sender: Signer<'info>,

    /// System program for account creation
    pub system_program: Program<'info, System>,

    /// Token program (supports both SPL Token and Token 2022)
    pub token_program: Interface<'info, TokenInterface>,
}

/**
 * Moves claim shares from sender to recipient through the settlement hook
 *
 * @param ctx - The account context containing all required accounts
 * @param amount - Amount of shares to transfer
 *
 * Validation Rules:
 * - amount must be positive and within the sender's share balance
 * - recipient must be a real, distinct account (the two position PDAs
 *   would alias for a self-transfer)
 */
pub fn handle_transfer_shares(ctx: Context<TransferShares>, amount: u64) -> Result<()> {
    let pool = &mut ctx.accounts.pool;
    let sender_position = &mut ctx.accounts.sender_position;
    let recipient_position = &mut ctx.accounts.recipient_position;

    // ===== VALIDATION PHASE =====

    require!(amount > 0, ProceedsPoolError::ZeroAmount);
    require!(
        ctx.accounts.recipient.key() != Pubkey::default(),
        ProceedsPoolError::ZeroAddress
    );
    require!(
        ctx.accounts.recipient.key() != ctx.accounts.sender.key(),
        ProceedsPoolError::SelfTransfer
    );
    require!(
        amount <= sender_position.shares,
        ProceedsPoolError::InsufficientBalance
    );

    // ===== EFFECTS PHASE (State Updates) =====

    // Sender detach, recipient settle, balance move, fresh checkpoint
    let settled = pool.transfer_shares(sender_position, recipient_position, amount)?;

    let pool_key = pool.key();
    let total_proceeds_claimed = pool.total_proceeds_claimed;

    // ===== INTERACTIONS PHASE (Token Transfer) =====

    if settled > 0 {
        // Check vault has sufficient balance before proceeding
        require!(
            ctx.accounts.vault.amount >= settled,
            ProceedsPoolError::InsufficientVaultBalance
        );

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

        transfer_token(
            ctx.accounts.pool.to_account_info(),
            ctx.accounts.vault.to_account_info(),
            ctx.accounts.recipient_token_account.to_account_info(),
            ctx.accounts.asset_mint.to_account_info(),
            ctx.accounts.token_program.to_account_info(),
            settled,
            ctx.accounts.asset_mint.decimals,
            Some(signer), // PDA signing for secure transfer
        )?;

        emit_cpi!(ProceedsClaimed {
            pool: pool_key,
            holder: ctx.accounts.recipient.key(),
            amount: settled,
            total_proceeds_claimed,
        });
    }

    // Emit event for off-chain indexing and monitoring
    emit_cpi!(SharesTransferred {
        pool: pool_key,
        sender: ctx.accounts.sender.key(),
        recipient: ctx.accounts.recipient.key(),
        amount,
    });

    Ok(())
}
