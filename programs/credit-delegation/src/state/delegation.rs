use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// A credit line from a delegator to one delegate for one asset, created on
/// first approval and re-used for every later approve / borrow / repay.
#[account]
pub struct Delegation {
    /// Bump seed for the Delegation's PDA
    pub bump: u8,
    pub delegator: Pubkey,
    pub delegate: Pubkey,
    pub asset_mint: Pubkey,
    /// Maximum the delegate may have outstanding. Overwritten, never
    /// accumulated, by each approval.
    pub allowance: u64,
    pub outstanding_debt: u64,
    /// Rate mode of the open debt (1 = stable, 2 = variable), recorded at
    /// borrow time
    pub rate_mode: u8,
}

impl Delegation {
    /// Overwrite semantics: approving twice leaves the second amount, not
    /// the sum. Approving zero revokes further borrowing.
    pub fn approve(&mut self, amount: u64) {
        self.allowance = amount;
    }

    /// Credit still drawable. Zero when the allowance was re-set below the
    /// outstanding debt, which blocks borrowing until the debt is repaid.
    pub fn available_credit(&self) -> u64 {
        self.allowance.saturating_sub(self.outstanding_debt)
    }

    /// Draws on the credit line. Headroom is checked here against current
    /// state, never against a value cached at approval time.
    pub fn draw(&mut self, amount: u64, rate_mode: u8) -> Result<()> {
        require_gte!(
            self.available_credit(),
            amount,
            ErrorCode::InsufficientCredit
        );
        self.outstanding_debt = self
            .outstanding_debt
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.rate_mode = rate_mode;
        Ok(())
    }

    /// Settles up to the outstanding debt and returns the amount actually
    /// settled; repaying more than owed never drives the debt negative.
    pub fn settle(&mut self, amount: u64) -> Result<u64> {
        require_gt!(self.outstanding_debt, 0, ErrorCode::NoOutstandingDebt);
        let settled = amount.min(self.outstanding_debt);
        self.outstanding_debt = self
            .outstanding_debt
            .checked_sub(settled)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        Ok(settled)
    }
}
