use anchor_lang::prelude::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod macros;
pub mod state;

pub use constants::*;
pub use instructions::*;
pub use state::*;

declare_id!("Fg6PaFpoGXkYsidMpWTK6W2BeZ7FEfcYkg476zPFsLnS");

#[program]
pub mod credit_delegation {
    use super::*;

    pub fn init_reserve(ctx: Context<InitReserve>) -> Result<()> {
        ctx.accounts.init_reserve(&ctx.bumps)
    }

    pub fn set_reserve_state(ctx: Context<SetReserveState>, paused: bool) -> Result<()> {
        ctx.accounts.set_reserve_state(paused)
    }

    #[access_control(DepositCollateral::validate(&ctx, amount))]
    pub fn deposit_collateral(
        ctx: Context<DepositCollateral>,
        amount: u64,
        custody_mode: CustodyMode,
    ) -> Result<()> {
        ctx.accounts
            .deposit_collateral(amount, custody_mode, &ctx.bumps)
    }

    #[access_control(Donate::validate(&ctx, amount))]
    pub fn donate(ctx: Context<Donate>, amount: u64) -> Result<()> {
        ctx.accounts.donate(amount)
    }

    pub fn approve_borrower(ctx: Context<ApproveBorrower>, amount: u64) -> Result<()> {
        ctx.accounts.approve_borrower(amount, &ctx.bumps)
    }

    #[access_control(Borrow::validate(&ctx, amount, rate_mode))]
    pub fn borrow(
        ctx: Context<Borrow>,
        amount: u64,
        rate_mode: u8,
        referral_code: u16,
    ) -> Result<()> {
        ctx.accounts.borrow(amount, rate_mode, referral_code)
    }

    #[access_control(RepayBorrower::validate(&ctx, amount))]
    pub fn repay_borrower(
        ctx: Context<RepayBorrower>,
        amount: u64,
        custody_mode: CustodyMode,
    ) -> Result<()> {
        ctx.accounts.repay_borrower(amount, custody_mode)
    }

    pub fn withdraw_collateral(ctx: Context<WithdrawCollateral>) -> Result<()> {
        ctx.accounts.withdraw_collateral()
    }
}
