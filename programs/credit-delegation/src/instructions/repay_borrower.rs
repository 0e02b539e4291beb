use {
    crate::{
        constants::{DELEGATION_SEED, POSITION_SEED, RESERVE_SEED},
        error::ErrorCode,
        events::CreditRepaid,
        reserve_signer_seeds,
        state::{CustodyMode, Delegation, Position, Reserve},
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

#[derive(Accounts)]
pub struct RepayBorrower<'info> {
    /// The delegate repaying their draw
    pub delegate: Signer<'info>,

    /// CHECK: The delegator whose credit line is being repaid; validated by
    /// the position and delegation PDA seeds.
    pub delegator: UncheckedAccount<'info>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = delegate,
        associated_token::token_program = token_program,
    )]
    pub delegate_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [RESERVE_SEED, asset_mint.key().as_ref()],
        bump = reserve.bump,
        has_one = vault,
        has_one = custody,
        has_one = asset_mint,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(mut)]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(mut)]
    pub custody: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, delegator.key().as_ref(), asset_mint.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, Position>>,

    #[account(
        mut,
        seeds = [
            DELEGATION_SEED,
            delegator.key().as_ref(),
            delegate.key().as_ref(),
            asset_mint.key().as_ref(),
        ],
        bump = delegation.bump,
    )]
    pub delegation: Box<Account<'info, Delegation>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> RepayBorrower<'info> {
    pub fn validate(_ctx: &Context<RepayBorrower>, amount: u64) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::InvalidAmount);
        Ok(())
    }

    fn pull_from_delegate(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.delegate_asset_account.to_account_info(),
            mint: self.asset_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.delegate.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.asset_mint.decimals)
    }

    fn forward_held_funds(&self, amount: u64) -> Result<()> {
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

    pub fn repay_borrower(&mut self, amount: u64, custody_mode: CustodyMode) -> Result<()> {
        // Only the settled amount moves; over-repaying never drives the
        // debt negative.
        let settled = self.delegation.settle(amount)?;

        match custody_mode {
            // Any proceeds still parked in custody stay earmarked as
            // liabilities; only a held-funds repayment releases them.
            CustodyMode::PullFromCaller => self.pull_from_delegate(settled)?,
            CustodyMode::UseHeldFunds => {
                // Typically the just-borrowed proceeds parked in custody.
                require_gte!(
                    self.custody.amount,
                    settled,
                    ErrorCode::InsufficientContractBalance
                );
                self.forward_held_funds(settled)?;
                self.reserve.release_custody(settled);
            }
        }

        self.reserve.repay_liquidity(settled)?;
        self.position.settle_delegated_debt(settled)?;

        emit!(CreditRepaid {
            delegator: self.delegator.key(),
            delegate: self.delegate.key(),
            asset: self.asset_mint.key(),
            amount: settled,
            remaining_debt: self.delegation.outstanding_debt,
        });

        Ok(())
    }
}
