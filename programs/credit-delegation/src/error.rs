use anchor_lang::prelude::*;

#[error_code]
pub enum ErrorCode {
    #[msg("Amount must be greater than zero")]
    InvalidAmount, // 6000
    #[msg("Interest rate mode must be stable (1) or variable (2)")]
    InvalidRateMode, // 6001
    #[msg("Unpermitted action by authority")]
    InvalidPermissions, // 6002
    #[msg("Reserve is paused")]
    ReservePaused, // 6003
    #[msg("Ledger does not hold enough uncommitted funds")]
    InsufficientContractBalance, // 6004
    #[msg("Borrow exceeds the delegate's remaining credit")]
    InsufficientCredit, // 6005
    #[msg("Delegated debt would exceed the value of the deposited collateral")]
    InsufficientCollateral, // 6006
    #[msg("Reserve does not hold enough unborrowed liquidity")]
    InsufficientReserveLiquidity, // 6007
    #[msg("Delegate has no outstanding debt to repay")]
    NoOutstandingDebt, // 6008
    #[msg("Open delegated debt blocks collateral withdrawal")]
    OutstandingCreditBlocksWithdrawal, // 6009
    #[msg("Position holds no receipts to withdraw")]
    EmptyPosition, // 6010
    #[msg("Arithmetic overflow")]
    ArithmeticOverflow, // 6011
    #[msg("Arithmetic underflow")]
    ArithmeticUnderflow, // 6012
}
