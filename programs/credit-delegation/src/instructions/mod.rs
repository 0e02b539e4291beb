pub mod approve_borrower;
pub mod borrow;
pub mod deposit_collateral;
pub mod donate;
pub mod init_reserve;
pub mod repay_borrower;
pub mod set_reserve_state;
pub mod withdraw_collateral;

pub use approve_borrower::*;
pub use borrow::*;
pub use deposit_collateral::*;
pub use donate::*;
pub use init_reserve::*;
pub use repay_borrower::*;
pub use set_reserve_state::*;
pub use withdraw_collateral::*;
