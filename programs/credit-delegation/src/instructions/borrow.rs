use {
    crate::{
        constants::{
            DELEGATION_SEED, POSITION_SEED, RESERVE_SEED, STABLE_RATE_MODE, VARIABLE_RATE_MODE,
        },
        error::ErrorCode,
        events::CreditBorrowed,
        reserve_signer_seeds,
        state::{Delegation, Position, Reserve},
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

#[derive(Accounts)]
pub struct Borrow<'info> {
    /// The delegate drawing on the credit line
    pub delegate: Signer<'info>,

    /// CHECK: The delegator whose credit is drawn; validated by the
    /// position and delegation PDA seeds.
    pub delegator: UncheckedAccount<'info>,

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

impl<'info> Borrow<'info> {
    pub fn validate(_ctx: &Context<Borrow>, amount: u64, rate_mode: u8) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::InvalidAmount);
        require!(
            rate_mode == STABLE_RATE_MODE || rate_mode == VARIABLE_RATE_MODE,
            ErrorCode::InvalidRateMode
        );
        Ok(())
    }

    fn transfer_from_vault_to_custody(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.asset_mint.to_account_info(),
            to: self.custody.to_account_info(),
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

    pub fn borrow(&mut self, amount: u64, rate_mode: u8, referral_code: u16) -> Result<()> {
        // Headroom is re-checked against current state inside the draw.
        self.delegation.draw(amount, rate_mode)?;

        // Same-asset collateral coverage: aggregate delegated debt may not
        // exceed the current value of the delegator's receipts.
        let coverage = self
            .reserve
            .underlying_for_receipt(self.position.receipt_balance)?;
        self.position.check_borrow_coverage(amount, coverage)?;

        self.reserve.borrow_liquidity(amount)?;
        self.position.add_delegated_debt(amount)?;

        // Proceeds land in the ledger's custody, not with the delegate, so
        // repayment can be brokered the same way.
        self.transfer_from_vault_to_custody(amount)?;

        emit!(CreditBorrowed {
            delegator: self.delegator.key(),
            delegate: self.delegate.key(),
            asset: self.asset_mint.key(),
            amount,
            rate_mode,
            referral_code,
        });

        Ok(())
    }
}
