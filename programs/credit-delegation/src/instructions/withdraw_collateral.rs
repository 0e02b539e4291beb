use {
    crate::{
        constants::{POSITION_SEED, RESERVE_SEED},
        events::CollateralWithdrawn,
        reserve_signer_seeds,
        state::{Position, Reserve},
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

#[derive(Accounts)]
pub struct WithdrawCollateral<'info> {
    /// The delegator reclaiming their collateral
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
        has_one = asset_mint,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(mut)]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        mut,
        seeds = [POSITION_SEED, delegator.key().as_ref(), asset_mint.key().as_ref()],
        bump = position.bump,
    )]
    pub position: Box<Account<'info, Position>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> WithdrawCollateral<'info> {
    fn transfer_from_vault_to_delegator(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.vault.to_account_info(),
            mint: self.asset_mint.to_account_info(),
            to: self.delegator_asset_account.to_account_info(),
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

    /// Redeems the delegator's entire receipt balance, accrued yield
    /// included, and settles the position back to empty.
    pub fn withdraw_collateral(&mut self) -> Result<()> {
        let receipt = self.position.take_receipts_for_withdrawal()?;
        let amount = self.reserve.redeem(receipt)?;
        self.transfer_from_vault_to_delegator(amount)?;

        emit!(CollateralWithdrawn {
            delegator: self.delegator.key(),
            asset: self.asset_mint.key(),
            receipt,
            amount,
        });

        Ok(())
    }
}
