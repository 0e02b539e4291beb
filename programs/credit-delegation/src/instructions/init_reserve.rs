use {
    crate::{
        constants::{CUSTODY_SEED, RESERVE_SEED, VAULT_SEED},
        state::Reserve,
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::{Mint, TokenAccount, TokenInterface},
};

#[derive(Accounts)]
pub struct InitReserve<'info> {
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The key that will administer the new reserve
    pub authority: Signer<'info>,

    #[account(
        init,
        payer = payer,
        seeds = [RESERVE_SEED, asset_mint.key().as_ref()],
        bump,
        space = 8 + std::mem::size_of::<Reserve>(),
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    /// Holds the unborrowed pool liquidity
    #[account(
        init,
        payer = payer,
        seeds = [VAULT_SEED, asset_mint.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = reserve,
        token::token_program = token_program,
    )]
    pub vault: Box<InterfaceAccount<'info, TokenAccount>>,

    /// Holds funds in the ledger's own custody
    #[account(
        init,
        payer = payer,
        seeds = [CUSTODY_SEED, asset_mint.key().as_ref()],
        bump,
        token::mint = asset_mint,
        token::authority = reserve,
        token::token_program = token_program,
    )]
    pub custody: Box<InterfaceAccount<'info, TokenAccount>>,

    pub token_program: Interface<'info, TokenInterface>,
    pub system_program: Program<'info, System>,
}

impl<'info> InitReserve<'info> {
    pub fn init_reserve(&mut self, bumps: &InitReserveBumps) -> Result<()> {
        self.reserve.set_inner(Reserve {
            bump: bumps.reserve,
            authority: self.authority.key(),
            asset_mint: self.asset_mint.key(),
            vault: self.vault.key(),
            custody: self.custody.key(),
            total_liquidity: 0,
            total_borrowed: 0,
            receipt_supply: 0,
            custody_liabilities: 0,
            paused: false,
        });
        Ok(())
    }
}
