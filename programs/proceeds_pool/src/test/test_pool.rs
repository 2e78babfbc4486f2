use crate::constants::PRECISION;
use crate::error::ProceedsPoolError;
use crate::state::{HolderPosition, ProceedsPool};

/// Host-side model of the deposit instruction's accounting path:
/// escrow drain first, then freeze-then-mint. Returns (settled, bonus).
fn deposit(pool: &mut ProceedsPool, position: &mut HolderPosition, amount: u64) -> (u64, u64) {
    let bonus = if pool.total_shares == 0 {
        pool.take_zero_supply_escrow().unwrap()
    } else {
        0
    };
    let settled = pool.mint_shares(position, amount).unwrap();
    (settled, bonus)
}

/// Host-side model of the withdraw instruction's accounting path:
/// force-settle, then burn. Returns the settlement payout.
fn withdraw(pool: &mut ProceedsPool, position: &mut HolderPosition, amount: u64) -> u64 {
    let settled = pool.settle_position(position).unwrap();
    pool.burn_shares(position, amount).unwrap();
    settled
}

fn pending(pool: &ProceedsPool, position: &HolderPosition) -> u64 {
    pool.pending_proceeds(position).unwrap()
}

/// Conservation audit: sum of pending over all positions plus everything
/// already claimed must equal deposited minus escrow, up to floor-division
/// dust bounded by injections * (total_shares - 1).
fn conservation_gap(pool: &ProceedsPool, positions: &[&HolderPosition]) -> u64 {
    let total_pending: u64 = positions.iter().map(|p| pending(pool, p)).sum();
    let distributable = pool.total_proceeds_deposited - pool.pending_zero_supply_proceeds;
    distributable - total_pending - pool.total_proceeds_claimed
}

#[test]
fn test_first_deposit_earns_nothing_retroactively() {
    let mut pool = ProceedsPool::default();
    let mut early = HolderPosition::default();
    let mut late = HolderPosition::default();

    deposit(&mut pool, &mut early, 1_000);
    pool.accrue_proceeds(600).unwrap();

    // A holder joining after the injection starts with zero pending
    deposit(&mut pool, &mut late, 1_000);
    assert_eq!(pending(&pool, &late), 0);
    assert_eq!(pending(&pool, &early), 600);
}

#[test]
fn test_two_holder_scenario_with_transfer() {
    let mut pool = ProceedsPool::default();
    let mut holder1 = HolderPosition::default();
    let mut holder2 = HolderPosition::default();

    deposit(&mut pool, &mut holder1, 1_000);
    deposit(&mut pool, &mut holder2, 2_000);
    assert_eq!(pool.total_shares, 3_000);

    // 300 split 1000:2000 -> 100 / 200, exact
    pool.accrue_proceeds(300).unwrap();
    assert_eq!(pending(&pool, &holder1), 100);
    assert_eq!(pending(&pool, &holder2), 200);

    // Transfer 500 from holder1 to holder2: holder1's claimable total is
    // unchanged (now fully locked), holder2 is auto-settled on receipt
    let settled = pool
        .transfer_shares(&mut holder1, &mut holder2, 500)
        .unwrap();
    assert_eq!(settled, 200);
    assert_eq!(pending(&pool, &holder1), 100);
    assert_eq!(holder1.locked_proceeds, 100);
    assert_eq!(pending(&pool, &holder2), 0);
    assert_eq!(holder1.shares, 500);
    assert_eq!(holder2.shares, 2_500);
    assert_eq!(pool.total_shares, 3_000);

    // Another 300 split 500:2500 -> 50 / 250 on top of the locked 100
    pool.accrue_proceeds(300).unwrap();
    assert_eq!(pending(&pool, &holder1), 150);
    assert_eq!(pending(&pool, &holder2), 250);
}

#[test]
fn test_transfer_preserves_sender_claimable() {
    let mut pool = ProceedsPool::default();
    let mut sender = HolderPosition::default();
    let mut recipient = HolderPosition::default();

    deposit(&mut pool, &mut sender, 4_000);
    deposit(&mut pool, &mut recipient, 1_000);
    pool.accrue_proceeds(1_000).unwrap();

    let before = pending(&pool, &sender);
    pool.transfer_shares(&mut sender, &mut recipient, 3_999)
        .unwrap();
    assert_eq!(pending(&pool, &sender), before);

    // The received shares earn nothing retroactively
    assert_eq!(pending(&pool, &recipient), 0);
}

#[test]
fn test_withdraw_leaves_zero_pending() {
    let mut pool = ProceedsPool::default();
    let mut holder = HolderPosition::default();

    deposit(&mut pool, &mut holder, 2_500);
    pool.accrue_proceeds(500).unwrap();

    let settled = withdraw(&mut pool, &mut holder, 1_000);
    assert_eq!(settled, 500);
    assert_eq!(pending(&pool, &holder), 0);

    // Full exit reverts the position to the zero-equivalent record
    let settled = withdraw(&mut pool, &mut holder, 1_500);
    assert_eq!(settled, 0);
    assert_eq!(holder.shares, 0);
    assert_eq!(holder.locked_proceeds, 0);
    assert_eq!(pool.total_shares, 0);
}

#[test]
fn test_zero_supply_escrow_paid_to_first_depositor() {
    let mut pool = ProceedsPool::default();
    let mut first = HolderPosition::default();

    // Proceeds with no shares outstanding: escrowed, accumulator untouched
    pool.accrue_proceeds(500).unwrap();
    pool.accrue_proceeds(250).unwrap();
    assert_eq!(pool.cumulative_proceeds_per_share, 0);
    assert_eq!(pool.pending_zero_supply_proceeds, 750);
    assert_eq!(pool.total_proceeds_deposited, 750);

    let (settled, bonus) = deposit(&mut pool, &mut first, 100);
    assert_eq!(settled, 0);
    assert_eq!(bonus, 750);
    assert_eq!(pool.pending_zero_supply_proceeds, 0);
    assert_eq!(pending(&pool, &first), 0);
    assert_eq!(pool.total_proceeds_claimed, 750);
}

#[test]
fn test_escrow_refills_after_full_exit() {
    let mut pool = ProceedsPool::default();
    let mut holder = HolderPosition::default();

    deposit(&mut pool, &mut holder, 100);
    withdraw(&mut pool, &mut holder, 100);

    // Supply is back to zero, so a new injection escrows again
    pool.accrue_proceeds(40).unwrap();
    assert_eq!(pool.pending_zero_supply_proceeds, 40);

    let (_, bonus) = deposit(&mut pool, &mut holder, 100);
    assert_eq!(bonus, 40);
}

#[test]
fn test_redeposit_settles_on_old_balance() {
    let mut pool = ProceedsPool::default();
    let mut holder = HolderPosition::default();
    let mut other = HolderPosition::default();

    deposit(&mut pool, &mut holder, 1_000);
    deposit(&mut pool, &mut other, 1_000);
    pool.accrue_proceeds(200).unwrap();

    // Freeze-then-mint: the second deposit pays out the 100 accrued on the
    // old 1000 and the enlarged balance starts from a fresh checkpoint
    let (settled, _) = deposit(&mut pool, &mut holder, 9_000);
    assert_eq!(settled, 100);
    assert_eq!(pending(&pool, &holder), 0);
    assert_eq!(holder.checkpoint, pool.cumulative_proceeds_per_share);

    // The untouched holder's entitlement did not move
    assert_eq!(pending(&pool, &other), 100);
}

#[test]
fn test_settle_with_zero_pending_is_noop() {
    let mut pool = ProceedsPool::default();
    let mut a = HolderPosition::default();
    let mut b = HolderPosition::default();
    let mut c = HolderPosition::default();

    deposit(&mut pool, &mut a, 1);
    deposit(&mut pool, &mut b, 1);
    deposit(&mut pool, &mut c, 1);

    // 1 unit over 3 shares floors to zero per share
    pool.accrue_proceeds(1).unwrap();
    assert!(pool.cumulative_proceeds_per_share > 0);
    assert_eq!(pending(&pool, &a), 0);

    // No payout and no checkpoint movement, so sub-unit accrual keeps
    // building against the original checkpoint
    let checkpoint_before = a.checkpoint;
    assert_eq!(pool.settle_position(&mut a).unwrap(), 0);
    assert_eq!(a.checkpoint, checkpoint_before);

    // Two more sub-unit injections cross the whole-unit boundary
    pool.accrue_proceeds(1).unwrap();
    pool.accrue_proceeds(1).unwrap();
    assert_eq!(pending(&pool, &a), 0);
    pool.accrue_proceeds(1).unwrap();
    assert_eq!(pending(&pool, &a), 1);
    assert_eq!(pool.settle_position(&mut a).unwrap(), 1);
    assert_eq!(a.checkpoint, pool.cumulative_proceeds_per_share);
}

#[test]
fn test_accumulator_advances_by_exact_floor_quotient() {
    let mut pool = ProceedsPool::default();
    let mut holder = HolderPosition::default();

    deposit(&mut pool, &mut holder, 3);
    pool.accrue_proceeds(100).unwrap();
    assert_eq!(
        pool.cumulative_proceeds_per_share,
        100 * PRECISION / 3
    );
    pool.accrue_proceeds(100).unwrap();
    assert_eq!(
        pool.cumulative_proceeds_per_share,
        2 * (100 * PRECISION / 3)
    );
}

#[test]
fn test_conservation_exact_with_divisible_amounts() {
    let mut pool = ProceedsPool::default();
    let mut a = HolderPosition::default();
    let mut b = HolderPosition::default();
    let mut c = HolderPosition::default();

    pool.accrue_proceeds(100).unwrap(); // escrowed
    deposit(&mut pool, &mut a, 1_000); // drains escrow
    deposit(&mut pool, &mut b, 3_000);
    pool.accrue_proceeds(4_000).unwrap();
    pool.transfer_shares(&mut a, &mut b, 500).unwrap();
    deposit(&mut pool, &mut c, 4_000);
    pool.accrue_proceeds(8_000).unwrap();
    pool.settle_position(&mut b).unwrap();
    withdraw(&mut pool, &mut a, 500);

    assert_eq!(conservation_gap(&pool, &[&a, &b, &c]), 0);
}

#[test]
fn test_conservation_dust_is_bounded() {
    let mut pool = ProceedsPool::default();
    let mut a = HolderPosition::default();
    let mut b = HolderPosition::default();

    deposit(&mut pool, &mut a, 7);
    deposit(&mut pool, &mut b, 6);

    // Amounts chosen to leave a floor remainder on every injection
    let injections = 5u64;
    for _ in 0..injections {
        pool.accrue_proceeds(100).unwrap();
    }
    pool.settle_position(&mut a).unwrap();
    pool.settle_position(&mut b).unwrap();

    let gap = conservation_gap(&pool, &[&a, &b]);
    assert!(gap <= injections * (pool.total_shares - 1));
}

#[test]
fn test_burn_beyond_balance_fails() {
    let mut pool = ProceedsPool::default();
    let mut holder = HolderPosition::default();

    deposit(&mut pool, &mut holder, 10);
    let err = pool.burn_shares(&mut holder, 11).unwrap_err();
    assert_eq!(err, ProceedsPoolError::InsufficientBalance.into());

    // The failed burn changed nothing
    assert_eq!(holder.shares, 10);
    assert_eq!(pool.total_shares, 10);
}

#[test]
fn test_transfer_beyond_balance_fails() {
    let mut pool = ProceedsPool::default();
    let mut sender = HolderPosition::default();
    let mut recipient = HolderPosition::default();

    deposit(&mut pool, &mut sender, 10);
    let err = pool
        .transfer_shares(&mut sender, &mut recipient, 11)
        .unwrap_err();
    assert_eq!(err, ProceedsPoolError::InsufficientBalance.into());
}

#[test]
fn test_locked_proceeds_accumulate_across_transfers() {
    let mut pool = ProceedsPool::default();
    let mut sender = HolderPosition::default();
    let mut r1 = HolderPosition::default();
    let mut r2 = HolderPosition::default();

    deposit(&mut pool, &mut sender, 1_000);
    pool.accrue_proceeds(100).unwrap();
    pool.transfer_shares(&mut sender, &mut r1, 500).unwrap();
    assert_eq!(sender.locked_proceeds, 100);

    // Second transfer adds the accrual on the remaining 500 on top of the
    // already-locked 100 instead of overwriting it
    pool.accrue_proceeds(100).unwrap();
    pool.transfer_shares(&mut sender, &mut r2, 500).unwrap();
    assert_eq!(sender.locked_proceeds, 150);
    assert_eq!(sender.shares, 0);
    assert_eq!(pending(&pool, &sender), 150);

    // Locked carryover survives even with zero shares, until settled
    pool.accrue_proceeds(100).unwrap();
    assert_eq!(pending(&pool, &sender), 150);
    assert_eq!(pool.settle_position(&mut sender).unwrap(), 150);
    assert_eq!(sender.locked_proceeds, 0);
}

#[test]
fn test_account_sizes_cover_serialized_layout() {
    // 8-byte discriminator + field sizes; size_of may include padding and
    // is therefore a safe upper bound for the borsh layout
    assert!(ProceedsPool::LEN >= 8 + 1 + 4 + 32 * 4 + 8 + 16 + 8 + 8 + 8);
    assert!(HolderPosition::LEN >= 8 + 8 + 16 + 8);
    assert!(crate::state::NonceState::LEN >= 8 + 4);
}
