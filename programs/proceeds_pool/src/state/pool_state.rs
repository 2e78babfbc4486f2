use anchor_lang::prelude::*;

use crate::constants::PRECISION;
use crate::error::ProceedsPoolError;
use crate::state::HolderPosition;

/**
 * Main pool state account
 *
 * This struct holds the identity of one proceeds pool plus the whole
 * reward-accumulator ledger. All accounting transitions live here as pure
 * methods over (pool, position) values so they can be unit tested on the
 * host without a runtime; the instruction handlers only orchestrate these
 * methods, vault transfers and events.
 *
 * Derivation: ["pool", asset_mint, owner, nonce]
 *
 * Accounting model:
 * - `cumulative_proceeds_per_share` is a monotone fixed-point accumulator
 *   (scaled by PRECISION). Each proceeds injection while shares exist adds
 *   exactly `amount * PRECISION / total_shares` (floor division; the
 *   remainder is forfeited dust, bounded by total_shares scaled units).
 * - A position's pending proceeds are
 *   `locked_proceeds + (cumulative - checkpoint) * shares / PRECISION`.
 * - Settlement is the only transition that pays pending out; it raises the
 *   checkpoint to the current accumulator and clears locked_proceeds.
 * - Every balance change (mint on deposit, burn on withdraw, transfer)
 *   reconciles the affected positions before the balance moves, so new
 *   units never earn retroactively and transfers never lose accrued value.
 * - Proceeds injected while no shares exist are escrowed in
 *   `pending_zero_supply_proceeds` and paid to the next depositor.
 *
 * Conservation invariant: over all positions,
 *   sum(pending) + total_proceeds_claimed
 *    == total_proceeds_deposited - pending_zero_supply_proceeds
 * up to the bounded floor-division dust above.
 */
#[account]
#[derive(Default, Debug)]
pub struct ProceedsPool {
    /// Bump seed for PDA derivation
    /// - Saved so the pool can sign vault transfers without recomputation
    pub bump: u8,

    /// Nonce number for this pool
    /// - Allows multiple pools for the same (asset, owner) pair
    pub nonce: u32,

    /// Owner of the pool (part of the PDA identity)
    pub owner: Pubkey,

    /// Privileged caller for deposit_proceeds
    pub admin: Pubkey,

    /// Underlying asset mint address
    pub asset_mint: Pubkey,

    /// Asset vault account address
    /// - PDA that holds all pool custody (principal, proceeds and escrow)
    /// - Controlled by the pool PDA
    /// - Derived from: ["vault", pool_key]
    pub vault: Pubkey,

    /// Total claim units outstanding (the claim ledger's total supply)
    pub total_shares: u64,

    /// Cumulative proceeds ever earned by one share, scaled by PRECISION
    /// - Monotone; increases only on injection while total_shares > 0
    pub cumulative_proceeds_per_share: u128,

    /// Lifetime sum of proceeds ever injected (monotone audit counter)
    pub total_proceeds_deposited: u64,

    /// Lifetime proceeds paid out through settlement plus the zero-supply
    /// bonus (monotone audit counter)
    pub total_proceeds_claimed: u64,

    /// Proceeds injected while total_shares == 0, escrowed for the next
    /// depositor; drained only by the first-depositor bonus path
    pub pending_zero_supply_proceeds: u64,
}

impl ProceedsPool {
    /// Calculate the space required for this account
    /// - Includes 8-byte discriminator + struct size
    pub const LEN: usize = 8 + std::mem::size_of::<ProceedsPool>();

    /// Records an injection of `amount` proceeds into the ledger.
    ///
    /// While shares exist the accumulator advances by
    /// `amount * PRECISION / total_shares` (floor). With no shares the full
    /// amount is escrowed instead and the accumulator is untouched.
    /// `total_proceeds_deposited` grows unconditionally.
    pub fn accrue_proceeds(&mut self, amount: u64) -> Result<()> {
        if self.total_shares == 0 {
            self.pending_zero_supply_proceeds = self
                .pending_zero_supply_proceeds
                .checked_add(amount)
                .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        } else {
            let delta = (amount as u128)
                .checked_mul(PRECISION)
                .ok_or(ProceedsPoolError::ArithmeticOverflow)?
                / self.total_shares as u128;
            self.cumulative_proceeds_per_share = self
                .cumulative_proceeds_per_share
                .checked_add(delta)
                .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        }
        self.total_proceeds_deposited = self
            .total_proceeds_deposited
            .checked_add(amount)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Computes the proceeds currently claimable by `position`:
    /// locked carryover plus accrual since the last checkpoint.
    pub fn pending_proceeds(&self, position: &HolderPosition) -> Result<u64> {
        let since_checkpoint = self
            .cumulative_proceeds_per_share
            .checked_sub(position.checkpoint)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        let accrued = since_checkpoint
            .checked_mul(position.shares as u128)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?
            / PRECISION;
        let accrued =
            u64::try_from(accrued).map_err(|_| ProceedsPoolError::ArithmeticOverflow)?;
        position
            .locked_proceeds
            .checked_add(accrued)
            .ok_or(ProceedsPoolError::ArithmeticOverflow.into())
    }

    /// The single settlement primitive: detaches everything `position` is
    /// owed and returns the amount the caller must pay out.
    ///
    /// Zero pending is a pure no-op (the checkpoint does not move), so the
    /// method is idempotent and safe to call redundantly. Otherwise the
    /// checkpoint is raised to the current accumulator, locked carryover is
    /// cleared and the payout is counted into `total_proceeds_claimed`.
    pub fn settle_position(&mut self, position: &mut HolderPosition) -> Result<u64> {
        let pending = self.pending_proceeds(position)?;
        if pending == 0 {
            return Ok(0);
        }
        position.checkpoint = self.cumulative_proceeds_per_share;
        position.locked_proceeds = 0;
        self.total_proceeds_claimed = self
            .total_proceeds_claimed
            .checked_add(pending)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        Ok(pending)
    }

    /// Mint transition (deposit): freeze-then-mint.
    ///
    /// A re-depositing holder is settled on the old balance first, so the
    /// new units cannot inflate proceeds accrued before they existed. The
    /// fresh checkpoint then starts the enlarged balance from zero accrual.
    /// Returns the settlement payout owed to the holder (0 for a first
    /// deposit).
    pub fn mint_shares(&mut self, position: &mut HolderPosition, amount: u64) -> Result<u64> {
        let payout = if position.shares > 0 {
            self.settle_position(position)?
        } else {
            0
        };
        position.shares = position
            .shares
            .checked_add(amount)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        self.total_shares = self
            .total_shares
            .checked_add(amount)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        position.checkpoint = self.cumulative_proceeds_per_share;
        Ok(payout)
    }

    /// Burn transition (withdraw). No settlement here: withdraw force-settles
    /// before calling this, and burn is unreachable from any other path.
    pub fn burn_shares(&mut self, position: &mut HolderPosition, amount: u64) -> Result<()> {
        position.shares = position
            .shares
            .checked_sub(amount)
            .ok_or(ProceedsPoolError::InsufficientBalance)?;
        self.total_shares = self
            .total_shares
            .checked_sub(amount)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        Ok(())
    }

    /// Sender half of the transfer hook: converts everything accrued on the
    /// current balance into locked carryover (accumulating, not overwriting)
    /// and raises the checkpoint. The sender's claimable total is unchanged.
    pub fn detach_accrued(&mut self, position: &mut HolderPosition) -> Result<()> {
        let since_checkpoint = self
            .cumulative_proceeds_per_share
            .checked_sub(position.checkpoint)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        let accrued = since_checkpoint
            .checked_mul(position.shares as u128)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?
            / PRECISION;
        let accrued =
            u64::try_from(accrued).map_err(|_| ProceedsPoolError::ArithmeticOverflow)?;
        position.locked_proceeds = position
            .locked_proceeds
            .checked_add(accrued)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        position.checkpoint = self.cumulative_proceeds_per_share;
        Ok(())
    }

    /// Transfer transition between two positions. Order matters:
    /// 1. sender accrual is detached into locked carryover,
    /// 2. the receiver is fully settled on the pre-transfer balance,
    /// 3. the balances move,
    /// 4. the receiver's checkpoint restarts on the new, larger balance.
    ///
    /// Total shares are unchanged. Returns the receiver's settlement payout.
    pub fn transfer_shares(
        &mut self,
        from: &mut HolderPosition,
        to: &mut HolderPosition,
        amount: u64,
    ) -> Result<u64> {
        self.detach_accrued(from)?;
        let payout = self.settle_position(to)?;
        from.shares = from
            .shares
            .checked_sub(amount)
            .ok_or(ProceedsPoolError::InsufficientBalance)?;
        to.shares = to
            .shares
            .checked_add(amount)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        to.checkpoint = self.cumulative_proceeds_per_share;
        Ok(payout)
    }

    /// Drains the zero-supply escrow for the first-depositor bonus and
    /// counts it as claimed. Returns the bonus amount (possibly 0).
    pub fn take_zero_supply_escrow(&mut self) -> Result<u64> {
        let bonus = self.pending_zero_supply_proceeds;
        if bonus == 0 {
            return Ok(0);
        }
        self.pending_zero_supply_proceeds = 0;
        self.total_proceeds_claimed = self
            .total_proceeds_claimed
            .checked_add(bonus)
            .ok_or(ProceedsPoolError::ArithmeticOverflow)?;
        Ok(bonus)
    }
}
