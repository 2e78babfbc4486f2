pub mod create_pool;
pub mod deposit;
pub mod withdraw;
pub mod deposit_proceeds;
pub mod claim_proceeds;
pub mod transfer_shares;
pub mod close_position;
pub mod view;

pub use create_pool::*;
pub use deposit::*;
pub use withdraw::*;
pub use deposit_proceeds::*;
pub use claim_proceeds::*;
pub use transfer_shares::*;
pub use close_position::*;
pub use view::*;
