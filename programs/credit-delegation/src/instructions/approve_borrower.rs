use {
    crate::{
        constants::{DELEGATION_SEED, RESERVE_SEED},
        events::BorrowerApproved,
        state::{Delegation, Reserve},
    },
    anchor_lang::prelude::*,
    anchor_spl::token_interface::Mint,
};

#[derive(Accounts)]
pub struct ApproveBorrower<'info> {
    /// The delegator extending the credit line
    #[account(mut)]
    pub delegator: Signer<'info>,

    /// CHECK: Any address may be approved as a borrower; it only ever
    /// appears as a delegation key.
    pub delegate: UncheckedAccount<'info>,

    #[account(
        seeds = [RESERVE_SEED, asset_mint.key().as_ref()],
        bump = reserve.bump,
        has_one = asset_mint,
    )]
    pub reserve: Box<Account<'info, Reserve>>,

    pub asset_mint: Box<InterfaceAccount<'info, Mint>>,

    #[account(
        init_if_needed,
        payer = delegator,
        seeds = [
            DELEGATION_SEED,
            delegator.key().as_ref(),
            delegate.key().as_ref(),
            asset_mint.key().as_ref(),
        ],
        bump,
        space = 8 + std::mem::size_of::<Delegation>(),
    )]
    pub delegation: Box<Account<'info, Delegation>>,

    pub system_program: Program<'info, System>,
}

impl<'info> ApproveBorrower<'info> {
    /// Zero is a valid allowance here: it is the revocation path.
    pub fn approve_borrower(&mut self, amount: u64, bumps: &ApproveBorrowerBumps) -> Result<()> {
        let delegation = &mut self.delegation;
        if delegation.delegator == Pubkey::default() {
            delegation.bump = bumps.delegation;
            delegation.delegator = self.delegator.key();
            delegation.delegate = self.delegate.key();
            delegation.asset_mint = self.asset_mint.key();
        }
        delegation.approve(amount);

        emit!(BorrowerApproved {
            delegator: self.delegator.key(),
            delegate: self.delegate.key(),
            asset: self.asset_mint.key(),
            allowance: amount,
        });

        Ok(())
    }
}
