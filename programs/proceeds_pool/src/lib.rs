use anchor_lang::prelude::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

pub mod constants;
pub mod error;
pub mod event;
pub mod instructions;
pub mod state;
pub mod utils;

#[cfg(test)]
pub mod test;

use instructions::*;

/**
 * Proceeds Pool Program
 *
 * A Solana program that lets participants deposit a fungible asset into a
 * pool for a proportional claim on it, and distributes admin-injected
 * "proceeds" to claim-holders strictly in proportion to their share at
 * injection time. The distribution ledger is O(1) per operation: a
 * cumulative proceeds-per-share accumulator plus per-holder checkpoints,
 * never a loop over holders.
 *
 * Key Features:
 * - 1:1 deposit/withdraw between underlying asset and claim shares
 * - Exact pro-rata proceeds distribution via a fixed-point accumulator
 * - Settlement hook on every balance change (mint, burn, transfer) so
 *   proceeds are never earned retroactively and never lost on transfers
 * - Zero-supply escrow: proceeds injected before any deposit are held for
 *   the first depositor
 * - Read-only views: pending proceeds and pool/holder snapshots are
 *   returned as borsh data from view instructions
 * - Cross-program call event emission for composability
 * - Support for both SPL Token and Token 2022
 *
 * Architecture:
 * - Nonce State PDA: Tracks nonce counter for each owner (automatic nonce management)
 * - Pool PDA: Stores the pool identity and the reward-accumulator ledger
 * - Asset Vault PDA: Holds all pool custody (principal, proceeds, escrow)
 * - Holder Position PDAs: Track each holder's shares, checkpoint and
 *   locked proceeds
 *
 * Workflow:
 * 1. Owner creates a pool and designates the proceeds admin
 * 2. Holders deposit the underlying asset for claim shares
 * 3. Admin periodically injects proceeds for pro-rata distribution
 * 4. Holders claim proceeds, transfer shares, or withdraw at any time
 * 5. Holders can optionally close empty position accounts to reclaim rent
 */
#[program]
pub mod proceeds_pool {
    use super::*;

    /**
     * Creates a new proceeds pool
     *
     * Initializes a new pool with automatic nonce management: the pool PDA,
     * its asset vault, and the owner's nonce counter. The designated admin
     * becomes the only account allowed to inject proceeds.
     *
     * @param ctx - Account context containing pool, vault, counter, and owner accounts
     *
     * Access Control: Anyone; the creator becomes the pool owner
     */
    pub fn create_pool(ctx: Context<CreatePool>) -> Result<()> {
        handle_create_pool(ctx)
    }

    /**
     * Deposits underlying assets for claim shares
     *
     * Pulls `amount` of the underlying asset into the vault and mints claim
     * shares 1:1. A re-depositing holder is settled on their old balance
     * first, so new shares never earn past proceeds. The first depositor
     * after a zero-supply injection additionally receives the escrowed
     * proceeds as a bonus.
     *
     * @param ctx - Account context containing pool, position, vault, and depositor accounts
     * @param amount - Amount of underlying to deposit (> 0)
     *
     * Access Control: Any user
     */
    pub fn deposit(ctx: Context<Deposit>, amount: u64) -> Result<()> {
        handle_deposit(ctx, amount)
    }

    /**
     * Withdraws underlying assets by burning claim shares
     *
     * Force-settles the caller's pending proceeds, burns `amount` shares
     * and pays `amount` underlying 1:1 plus the settlement from the vault.
     * The position carries zero pending proceeds afterwards.
     *
     * @param ctx - Account context containing pool, position, vault, and holder accounts
     * @param amount - Amount of shares to burn (> 0, <= balance)
     *
     * Access Control: Position holder only (enforced by PDA seeds)
     */
    pub fn withdraw(ctx: Context<Withdraw>, amount: u64) -> Result<()> {
        handle_withdraw(ctx, amount)
    }

    /**
     * Injects proceeds for pro-rata distribution
     *
     * Advances the cumulative proceeds-per-share accumulator by
     * amount * PRECISION / total_shares, or escrows the amount if no
     * shares exist yet.
     *
     * @param ctx - Account context containing pool, vault, and admin accounts
     * @param amount - Amount of proceeds to inject (> 0)
     *
     * Access Control: Pool admin only
     */
    pub fn deposit_proceeds(ctx: Context<DepositProceeds>, amount: u64) -> Result<()> {
        handle_deposit_proceeds(ctx, amount)
    }

    /**
     * Claims the caller's pending proceeds
     *
     * Settles the caller's position and pays the pending amount from the
     * vault. Claiming with nothing pending is a silent no-op.
     *
     * @param ctx - Account context containing pool, position, vault, and holder accounts
     * @returns Amount of proceeds paid (0 when nothing was pending)
     *
     * Access Control: Position holder only (enforced by PDA seeds)
     */
    pub fn claim_proceeds(ctx: Context<ClaimProceeds>) -> Result<u64> {
        handle_claim_proceeds(ctx)
    }

    /**
     * Transfers claim shares to another holder
     *
     * Routes the balance move through the settlement hook: the sender's
     * accrued proceeds are locked in place (claimable total unchanged) and
     * the recipient is settled on their pre-transfer balance before the
     * received shares start from a fresh checkpoint.
     *
     * @param ctx - Account context containing pool, both positions, vault, and sender accounts
     * @param amount - Amount of shares to transfer (> 0, <= sender balance)
     *
     * Access Control: Sender only
     */
    pub fn transfer_shares(ctx: Context<TransferShares>, amount: u64) -> Result<()> {
        handle_transfer_shares(ctx, amount)
    }

    /**
     * Closes an empty position account and reclaims rent
     *
     * @param ctx - Account context containing position and holder accounts
     *
     * Access Control: Position holder only (enforced by PDA seeds)
     *
     * Note: Requires zero shares and zero locked proceeds
     */
    pub fn close_position(ctx: Context<ClosePosition>) -> Result<()> {
        handle_close_position(ctx)
    }

    /**
     * Reads a holder's currently claimable proceeds
     *
     * @param ctx - Account context containing pool and (optional) position accounts
     * @returns Pending proceeds; 0 for a holder with no position account
     */
    pub fn get_pending_proceeds(ctx: Context<GetPendingProceeds>) -> Result<u64> {
        handle_get_pending_proceeds(ctx)
    }

    /**
     * Reads the pool-level snapshot
     *
     * @param ctx - Account context containing pool and vault accounts
     * @returns Total shares, vault balance, lifetime counters, escrow and accumulator
     */
    pub fn get_pool_info(ctx: Context<GetPoolInfo>) -> Result<PoolInfo> {
        handle_get_pool_info(ctx)
    }

    /**
     * Reads a holder-level snapshot
     *
     * @param ctx - Account context containing pool and (optional) position accounts
     * @returns Shares, pending proceeds, checkpoint and locked proceeds
     */
    pub fn get_holder_info(ctx: Context<GetHolderInfo>) -> Result<HolderInfo> {
        handle_get_holder_info(ctx)
    }
}
