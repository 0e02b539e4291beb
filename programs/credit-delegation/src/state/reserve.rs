use anchor_lang::prelude::*;

use crate::error::ErrorCode;

/// Per-asset lending reserve. Plays the lending-pool side of the ledger:
/// every instruction touches pool liquidity only through the narrow
/// deposit / redeem / borrow / repay surface below.
#[account]
pub struct Reserve {
    /// Bump seed for the Reserve's PDA
    pub bump: u8,
    /// The key allowed to change this reserve's state
    pub authority: Pubkey,
    /// The SPL mint of the asset this reserve lends
    pub asset_mint: Pubkey,
    /// Token account holding the unborrowed pool liquidity
    pub vault: Pubkey,
    /// Token account holding funds in the ledger's own custody: pulled
    /// deposits in transit, parked borrow proceeds, direct transfers
    pub custody: Pubkey,
    /// Underlying owned by the pool, including amounts out on loan
    pub total_liquidity: u64,
    /// Outstanding delegated borrows
    pub total_borrowed: u64,
    /// Receipt units issued against `total_liquidity`
    pub receipt_supply: u64,
    /// Portion of the custody balance that is parked borrow proceeds.
    /// Only a held-funds repayment releases it; proceeds left behind by a
    /// pull-mode repayment stay earmarked for later debt settlement and
    /// never become spendable by deposits.
    pub custody_liabilities: u64,
    pub paused: bool,
}

impl Reserve {
    pub fn available_liquidity(&self) -> u64 {
        self.total_liquidity.saturating_sub(self.total_borrowed)
    }

    /// Receipt units a deposit of `amount` underlying buys at the current
    /// exchange rate. 1:1 only while no receipts are outstanding; donations
    /// grow `total_liquidity` without issuance, so later deposits buy fewer
    /// receipts per unit.
    pub fn receipt_for_deposit(&self, amount: u64) -> Result<u64> {
        if self.receipt_supply == 0 || self.total_liquidity == 0 {
            return Ok(amount);
        }
        let receipt = (amount as u128)
            .checked_mul(self.receipt_supply as u128)
            .ok_or(ErrorCode::ArithmeticOverflow)?
            .checked_div(self.total_liquidity as u128)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        u64::try_from(receipt).map_err(|_| ErrorCode::ArithmeticOverflow.into())
    }

    /// Underlying value of `receipt` units at the current exchange rate.
    pub fn underlying_for_receipt(&self, receipt: u64) -> Result<u64> {
        if self.receipt_supply == 0 {
            return Ok(0);
        }
        let underlying = (receipt as u128)
            .checked_mul(self.total_liquidity as u128)
            .ok_or(ErrorCode::ArithmeticOverflow)?
            .checked_div(self.receipt_supply as u128)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        u64::try_from(underlying).map_err(|_| ErrorCode::ArithmeticOverflow.into())
    }

    /// Pool deposit primitive. Returns the receipt units actually credited.
    pub fn deposit(&mut self, amount: u64) -> Result<u64> {
        let receipt = self.receipt_for_deposit(amount)?;
        self.total_liquidity = self
            .total_liquidity
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.receipt_supply = self
            .receipt_supply
            .checked_add(receipt)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(receipt)
    }

    /// Pool redemption primitive. Burns `receipt` units and returns the
    /// underlying owed for them. Redemption can only be served out of
    /// unborrowed liquidity.
    pub fn redeem(&mut self, receipt: u64) -> Result<u64> {
        let underlying = self.underlying_for_receipt(receipt)?;
        require_gte!(
            self.available_liquidity(),
            underlying,
            ErrorCode::InsufficientReserveLiquidity
        );
        self.receipt_supply = self
            .receipt_supply
            .checked_sub(receipt)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        self.total_liquidity = self
            .total_liquidity
            .checked_sub(underlying)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        Ok(underlying)
    }

    /// Pool delegated-borrow primitive. The proceeds are parked in custody,
    /// so the same amount is recorded as a custody liability.
    pub fn borrow_liquidity(&mut self, amount: u64) -> Result<()> {
        require_gte!(
            self.available_liquidity(),
            amount,
            ErrorCode::InsufficientReserveLiquidity
        );
        self.total_borrowed = self
            .total_borrowed
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        self.custody_liabilities = self
            .custody_liabilities
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Pool repay primitive.
    pub fn repay_liquidity(&mut self, amount: u64) -> Result<()> {
        self.total_borrowed = self
            .total_borrowed
            .checked_sub(amount)
            .ok_or(ErrorCode::ArithmeticUnderflow)?;
        Ok(())
    }

    /// Grows pool liquidity without issuing receipts, raising the exchange
    /// rate for every receipt holder.
    pub fn donate(&mut self, amount: u64) -> Result<()> {
        self.total_liquidity = self
            .total_liquidity
            .checked_add(amount)
            .ok_or(ErrorCode::ArithmeticOverflow)?;
        Ok(())
    }

    /// Custody balance not spoken for by parked borrow proceeds.
    pub fn free_custody(&self, custody_balance: u64) -> u64 {
        custody_balance.saturating_sub(self.custody_liabilities)
    }

    /// Marks parked borrow proceeds as spent, e.g. when a repayment is made
    /// out of held funds.
    pub fn release_custody(&mut self, amount: u64) {
        self.custody_liabilities = self.custody_liabilities.saturating_sub(amount);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn reserve() -> Reserve {
        Reserve {
            bump: 255,
            authority: Pubkey::new_unique(),
            asset_mint: Pubkey::new_unique(),
            vault: Pubkey::new_unique(),
            custody: Pubkey::new_unique(),
            total_liquidity: 0,
            total_borrowed: 0,
            receipt_supply: 0,
            custody_liabilities: 0,
            paused: false,
        }
    }

    #[test]
    fn first_deposit_credits_receipts_one_to_one() {
        let mut r = reserve();
        assert_eq!(r.deposit(2_000).unwrap(), 2_000);
        assert_eq!(r.total_liquidity, 2_000);
        assert_eq!(r.receipt_supply, 2_000);
    }

    #[test]
    fn donation_raises_the_exchange_rate() {
        let mut r = reserve();
        r.deposit(1_000).unwrap();
        r.donate(500).unwrap();
        // 1_000 receipts now redeem for 1_500 underlying.
        assert_eq!(r.underlying_for_receipt(1_000).unwrap(), 1_500);
        // A later deposit buys receipts below par.
        assert_eq!(r.receipt_for_deposit(300).unwrap(), 200);
    }

    #[test]
    fn deposit_after_donation_records_actual_receipt_delta() {
        let mut r = reserve();
        r.deposit(1_000).unwrap();
        r.donate(1_000).unwrap();
        let receipt = r.deposit(500).unwrap();
        assert_eq!(receipt, 250);
        assert_eq!(r.receipt_supply, 1_250);
        assert_eq!(r.total_liquidity, 2_500);
    }

    #[test]
    fn borrow_parks_proceeds_as_custody_liability() {
        let mut r = reserve();
        r.deposit(2_000).unwrap();
        r.borrow_liquidity(800).unwrap();
        assert_eq!(r.total_borrowed, 800);
        assert_eq!(r.custody_liabilities, 800);
        // A custody account holding exactly the proceeds has nothing free.
        assert_eq!(r.free_custody(800), 0);
        assert_eq!(r.free_custody(1_300), 500);
    }

    #[test]
    fn pull_mode_repay_keeps_proceeds_earmarked() {
        let mut r = reserve();
        r.deposit(2_000).unwrap();
        r.borrow_liquidity(800).unwrap();
        // Debt repaid from the delegate's own wallet: the untouched parked
        // proceeds stay earmarked, not spendable by held-funds deposits.
        r.repay_liquidity(800).unwrap();
        assert_eq!(r.custody_liabilities, 800);
        assert_eq!(r.free_custody(800), 0);
    }

    #[test]
    fn borrow_beyond_pool_liquidity_is_rejected() {
        let mut r = reserve();
        r.deposit(1_000).unwrap();
        assert_eq!(
            r.borrow_liquidity(1_001),
            Err(ErrorCode::InsufficientReserveLiquidity.into())
        );
        assert_eq!(r.total_borrowed, 0);
    }

    #[test]
    fn redemption_requires_unborrowed_liquidity() {
        let mut r = reserve();
        r.deposit(2_000).unwrap();
        r.borrow_liquidity(1_500).unwrap();
        assert_eq!(
            r.redeem(2_000),
            Err(ErrorCode::InsufficientReserveLiquidity.into())
        );
        // Nothing was burned by the failed redemption.
        assert_eq!(r.receipt_supply, 2_000);

        r.repay_liquidity(1_500).unwrap();
        r.release_custody(1_500);
        assert_eq!(r.redeem(2_000).unwrap(), 2_000);
        assert_eq!(r.receipt_supply, 0);
        assert_eq!(r.total_liquidity, 0);
    }
}
