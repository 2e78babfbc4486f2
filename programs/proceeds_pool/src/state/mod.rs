pub mod pool_state;
pub mod position_state;
pub mod nonce_state;

pub use pool_state::*;
pub use position_state::*;
pub use nonce_state::*;
