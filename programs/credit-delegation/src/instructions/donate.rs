use {
    crate::{
        constants::RESERVE_SEED, error::ErrorCode, events::ReserveDonation, state::Reserve,
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{self, Mint, TokenAccount, TokenInterface, TransferChecked},
};

#[derive(Accounts)]
pub struct Donate<'info> {
    /// The key of the address donating
    pub donor: Signer<'info>,

    #[account(
        mut,
        associated_token::mint = asset_mint,
        associated_token::authority = donor,
        associated_token::token_program = token_program,
    )]
    pub donor_asset_account: Box<InterfaceAccount<'info, TokenAccount>>,

    #[account(
        mut,
        seeds = [RESERVE_SEED, asset_mint.key().as_ref()],
        bump = reserve.bump,
        has_one = vault,
        has_one = asset_mint,
        constraint = !reserve.paused @ ErrorCode::ReservePaused,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    #[account(mut)]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    pub token_program: Interface<'info, TokenInterface>,
}

impl<'info> Donate<'info> {
    pub fn validate(_ctx: &Context<Donate>, amount: u64) -> Result<()> {
        require_gt!(amount, 0, ErrorCode::InvalidAmount);
        Ok(())
    }

    fn transfer_from_donor_to_vault(&self, amount: u64) -> Result<()> {
        let cpi_accounts = TransferChecked {
            from: self.donor_asset_account.to_account_info(),
            mint: self.asset_mint.to_account_info(),
            to: self.vault.to_account_info(),
            authority: self.donor.to_account_info(),
        };
        let cpi_ctx = CpiContext::new(self.token_program.to_account_info(), cpi_accounts);
        token_interface::transfer_checked(cpi_ctx, amount, self.asset_mint.decimals)
    }

    pub fn donate(&mut self, amount: u64) -> Result<()> {
        self.transfer_from_donor_to_vault(amount)?;
        self.reserve.donate(amount)?;

        emit!(ReserveDonation {
            donor: self.donor.key(),
            asset: self.asset_mint.key(),
            amount,
        });

        Ok(())
    }
}
