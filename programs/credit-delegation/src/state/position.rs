use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// A delegator's collateral position for one asset, created on first
/// deposit. Receipts are only moved by deposit forwarding and withdrawal
/// redemption, never set directly.
#[account]
pub struct Position {
    /// Bump seed for the Position's PDA
    pub bump: u8,
    pub delegator: Pubkey,
    pub asset_mint: Pubkey,
    /// Cumulative principal deposited, in the asset's smallest unit
    pub collateral_deposited: u64,
    /// Receipt units the ledger holds on this delegator's behalf
    pub receipt_balance: u64,
    /// Outstanding debt across every delegate borrowing against this
    /// position. Kept in aggregate so withdrawal can be gated without
    /// walking every delegation.
    pub delegated_debt: u64,
}

impl Position {
    pub fn record_deposit(&mut self, amount: u64, receipt: u64) -> Result<()> {
        self.collateral_deposited = self
            .collateral_deposited
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.receipt_balance = self
            .receipt_balance
            .checked_add(receipt)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    pub fn add_delegated_debt(&mut self, amount: u64) -> Result<()> {
        self.delegated_debt = self
            .delegated_debt
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Collateral coverage gate for a new draw: the aggregate delegated
    /// debt may not exceed the current underlying value of the held
    /// receipts, no matter how large the delegation's allowance is.
    pub fn check_borrow_coverage(&self, amount: u64, collateral_value: u64) -> Result<()> {
        let new_debt = self
            .delegated_debt
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        require_gte!(collateral_value, new_debt, ErrorCode::InsufficientCollateral);
        Ok(())
    }

    pub fn settle_delegated_debt(&mut self, amount: u64) -> Result<()> {
        self.delegated_debt = self
            .delegated_debt
            .checked_sub(amount)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        Ok(())
    }

    /// Takes the full receipt balance for redemption and settles the
    /// position back to empty. The position must be funded and no delegate
    /// may have debt open against it.
    pub fn take_receipts_for_withdrawal(&mut self) -> Result<u64> {
        require_gt!(self.receipt_balance, 0, ErrorCode::EmptyPosition);
        require_eq!(
            self.delegated_debt,
            0,
            ErrorCode::OutstandingCreditBlocksWithdrawal
        );
        let receipt = self.receipt_balance;
        self.receipt_balance = 0;
        self.collateral_deposited = 0;
        Ok(receipt)
    }
}
