use {
    crate::{
        constants::{POSITION_SEED, RESERVE_SEED},
        error::ErrorCode,
        events::CollateralDeposited,
        reserve_signer_seeds,
        state::{CustodyMode, Position, Reserve},
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

#[derive(Accounts)]
pub struct DepositCollateral<'info> {
    /// The delegator depositing collateral
    #[account(mut)]
    pub delegator: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = delegator,
        associated_token::token_program = token_program,
    )]
    pub delegator_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [RESERVE_SEED, asset_mint.key().as_ref()],
        bump = reserve.bump,
        has_one = vault,
        has_one = custody,
        has_one = asset_mint,
        constraint = !reserve.paused @ ErrorCode::ReservePaused,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(mut)]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub custody: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = delegator,
        seeds = [POSITION_SEED, delegator.key().as_ref(), asset_mint.key().as_ref()],
        bump,
        space = 8 + std::mem::size_of::<Position>(),
    )]
    pub position: Box<Account<'info, Position>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> DepositCollateral<'info> {
    pub fn validate(_ctx: &Context<DepositCollateral>, amount: u64) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::InvalidAmount);
        Ok(())
    }

    fn pull_from_delegator(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.delegator_asset_account.to_account_info(),
            mint: self.asset_mint.to_account_info(),
            to: self.custody.to_account_info(),
            authority: self.delegator.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.asset_mint.decimals)
    }

    fn forward_to_vault(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.custody.to_account_info(),
            mint: self.asset_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.reserve.to_account_info(),
        };
        let signer_seeds: &[&[&[u8]]] = &[reserve_signer_seeds!(self.reserve)];
        let cpi_ctx = CpiContext::new_with_signer(
            self.token_program.to_account_info(),
            cpi_accounts,
            signer_seeds,
        );
        token_interface::transfer_checked(cpi_ctx, amount, self.asset_mint.decimals)
    }

    pub fn deposit_collateral(
        &mut self,
        amount: u64,
        custody_mode: CustodyMode,
        bumps: &DepositCollateralBumps,
    ) -> Result<()> {
        match custody_mode {
            CustodyMode::PullFromCaller => self.pull_from_delegator(amount)?,
            CustodyMode::UseHeldFunds => {
                // Funds must already sit in custody from a prior transfer,
                // and parked borrow proceeds are not spendable.
                require_gte!(
                    self.reserve.free_custody(self.custody.amount),
                    amount,
                    ErrorCode::InsufficientContractBalance
                );
            }
        }
        self.forward_to_vault(amount)?;

        // Record the receipt units the reserve actually credited; the
        // exchange rate makes this less than 1:1 once yield has accrued.
        let receipt = self.reserve.deposit(amount)?;

        let position = &mut self.position;
        if position.delegator == Pubkey::default() {
            position.bump = bumps.position;
            position.delegator = self.delegator.key();
            position.asset_mint = self.asset_mint.key();
        }
        position.record_deposit(amount, receipt)?;

        emit!(CollateralDeposited {
            delegator: self.delegator.key(),
            asset: self.asset_mint.key(),
            amount,
            receipt,
        });

        Ok(())
    }
}
