use anchor_lang::prelude::*;

/// Event emitted when a new pool is created
#[event]
pub struct PoolCreated {
    /// The pool account public key
    pub pool: Pubkey,
    /// Nonce of the pool
    pub nonce: u32,
    /// Owner of the pool
    pub owner: Pubkey,
    /// Admin allowed to deposit proceeds
    pub admin: Pubkey,
    /// Underlying asset mint address
    pub asset_mint: Pubkey,
    /// Asset vault address
    pub vault: Pubkey,
}

/// Event emitted when a holder deposits underlying for shares
#[event]
pub struct SharesDeposited {
    /// The pool account public key
    pub pool: Pubkey,
    /// Address of the depositor
    pub depositor: Pubkey,
    /// Amount deposited (shares minted 1:1)
    pub amount: u64,
    /// Total shares outstanding after the deposit
    pub total_shares: u64,
}

/// Event emitted when a holder burns shares for underlying
#[event]
pub struct SharesWithdrawn {
    /// The pool account public key
    pub pool: Pubkey,
    /// Address of the holder
    pub holder: Pubkey,
    /// Amount withdrawn (shares burned 1:1)
    pub amount: u64,
    /// Total shares outstanding after the withdrawal
    pub total_shares: u64,
}

/// Event emitted when the admin injects proceeds
#[event]
pub struct ProceedsDeposited {
    /// The pool account public key
    pub pool: Pubkey,
    /// Admin who deposited the proceeds
    pub admin: Pubkey,
    /// Amount of proceeds injected
    pub amount: u64,
    /// Accumulator value after the injection (PRECISION scale)
    pub cumulative_proceeds_per_share: u128,
    /// Lifetime proceeds deposited after the injection
    pub total_proceeds_deposited: u64,
    /// True if the amount was escrowed because no shares exist
    pub escrowed: bool,
}

/// Event emitted when a settlement pays proceeds to a holder
#[event]
pub struct ProceedsClaimed {
    /// The pool account public key
    pub pool: Pubkey,
    /// Address of the holder paid
    pub holder: Pubkey,
    /// Amount of proceeds paid in this settlement
    pub amount: u64,
    /// Lifetime proceeds claimed from the pool by all holders
    pub total_proceeds_claimed: u64,
}

/// Event emitted when the zero-supply escrow is paid to the first depositor
#[event]
pub struct FirstDepositorBonusPaid {
    /// The pool account public key
    pub pool: Pubkey,
    /// Depositor receiving the escrowed proceeds
    pub depositor: Pubkey,
    /// Escrowed amount paid out
    pub amount: u64,
}

/// Event emitted when shares move between holders
#[event]
pub struct SharesTransferred {
    /// The pool account public key
    pub pool: Pubkey,
    /// Sender of the shares
    pub sender: Pubkey,
    /// Recipient of the shares
    pub recipient: Pubkey,
    /// Amount of shares transferred
    pub amount: u64,
}

/// Event emitted when an empty position account is closed
#[event]
pub struct PositionClosed {
    /// The pool account public key
    pub pool: Pubkey,
    /// Holder who closed the position and reclaimed rent
    pub holder: Pubkey,
}
