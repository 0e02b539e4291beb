pub mod custody;
pub mod delegation;
pub mod position;
pub mod reserve;

pub use custody::*;
pub use delegation::*;
pub use position::*;
pub use reserve::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::STABLE_RATE_MODE;
    use crate::error::ErrorCode;
    use anchor_lang::prelude::*;

    fn accounts() -> (Reserve, Position, Delegation) {
        let delegator = Pubkey::new_unique();
        let delegate = Pubkey::new_unique();
        let asset_mint = Pubkey::new_unique();
        let reserve = Reserve {
            bump: 255,
            authority: Pubkey::new_unique(),
            asset_mint,
            vault: Pubkey::new_unique(),
            custody: Pubkey::new_unique(),
            total_liquidity: 0,
            total_borrowed: 0,
            receipt_supply: 0,
            custody_liabilities: 0,
            paused: false,
        };
        let position = Position {
            bump: 254,
            delegator,
            asset_mint,
            collateral_deposited: 0,
            receipt_balance: 0,
            delegated_debt: 0,
        };
        let delegation = Delegation {
            bump: 253,
            delegator,
            delegate,
            asset_mint,
            allowance: 0,
            outstanding_debt: 0,
            rate_mode: 0,
        };
        (reserve, position, delegation)
    }

    /// Full lifecycle of a delegated credit line, with plain integers
    /// mirroring the token balances the instructions move on-chain.
    #[test]
    fn delegated_credit_lifecycle() {
        let (mut reserve, mut position, mut delegation) = accounts();
        let mut delegator_wallet = 5_000u64;
        let mut vault = 0u64;
        let mut custody = 0u64;

        // Delegator deposits 2_000, pulled from their wallet and forwarded
        // into the pool.
        delegator_wallet -= 2_000;
        custody += 2_000;
        custody -= 2_000;
        vault += 2_000;
        let receipt = reserve.deposit(2_000).unwrap();
        position.record_deposit(2_000, receipt).unwrap();
        assert_eq!(delegator_wallet, 3_000);
        assert_eq!(receipt, 2_000);

        // Delegator approves the delegate for half the deposit.
        delegation.approve(1_000);

        // Delegate draws the full line. Proceeds land in the ledger's
        // custody, not with the delegate.
        delegation.draw(1_000, STABLE_RATE_MODE).unwrap();
        let coverage = reserve
            .underlying_for_receipt(position.receipt_balance)
            .unwrap();
        position.check_borrow_coverage(1_000, coverage).unwrap();
        reserve.borrow_liquidity(1_000).unwrap();
        vault -= 1_000;
        custody += 1_000;
        position.add_delegated_debt(1_000).unwrap();
        assert_eq!(delegation.outstanding_debt, 1_000);
        assert_eq!(custody, 1_000);

        // Withdrawal stays blocked while the debt is open.
        assert_eq!(
            position.take_receipts_for_withdrawal(),
            Err(ErrorCode::OutstandingCreditBlocksWithdrawal.into())
        );

        // Delegate repays out of the funds the ledger already holds.
        let settled = delegation.settle(1_000).unwrap();
        assert_eq!(settled, 1_000);
        assert!(custody >= settled);
        custody -= settled;
        vault += settled;
        reserve.release_custody(settled);
        reserve.repay_liquidity(settled).unwrap();
        position.settle_delegated_debt(settled).unwrap();
        assert_eq!(delegation.outstanding_debt, 0);

        // Delegator withdraws the original principal.
        let receipt = position.take_receipts_for_withdrawal().unwrap();
        let amount = reserve.redeem(receipt).unwrap();
        vault -= amount;
        delegator_wallet += amount;
        assert_eq!(amount, 2_000);
        assert_eq!(delegator_wallet, 5_000);
        assert_eq!(vault, 0);
        assert_eq!(custody, 0);
        assert_eq!(reserve.custody_liabilities, 0);
    }

    /// An allowance larger than the deposited collateral does not widen the
    /// line: the draw is capped by the receipts' underlying value.
    #[test]
    fn borrow_beyond_collateral_value_is_rejected() {
        let (mut reserve, mut position, mut delegation) = accounts();
        let receipt = reserve.deposit(500).unwrap();
        position.record_deposit(500, receipt).unwrap();

        delegation.approve(1_000);
        assert_eq!(delegation.available_credit(), 1_000);

        let coverage = reserve
            .underlying_for_receipt(position.receipt_balance)
            .unwrap();
        assert_eq!(
            position.check_borrow_coverage(600, coverage),
            Err(ErrorCode::InsufficientCollateral.into())
        );
        // Up to the collateral value the same line is drawable.
        position.check_borrow_coverage(500, coverage).unwrap();
    }

    /// Held-funds deposits may only spend custody balance that is not
    /// parked borrow proceeds.
    #[test]
    fn held_funds_deposit_cannot_spend_parked_borrow_proceeds() {
        let (mut reserve, _, mut delegation) = accounts();
        reserve.deposit(2_000).unwrap();

        delegation.approve(1_000);
        delegation.draw(1_000, STABLE_RATE_MODE).unwrap();
        reserve.borrow_liquidity(1_000).unwrap();
        let custody_balance = 1_000u64; // exactly the parked proceeds

        assert_eq!(reserve.free_custody(custody_balance), 0);

        // A direct transfer into custody frees up exactly that much.
        let custody_balance = custody_balance + 300;
        assert_eq!(reserve.free_custody(custody_balance), 300);
    }

    /// Accrued yield flows back to the delegator on withdrawal.
    #[test]
    fn withdrawal_includes_accrued_yield() {
        let (mut reserve, mut position, _) = accounts();
        let receipt = reserve.deposit(2_000).unwrap();
        position.record_deposit(2_000, receipt).unwrap();

        reserve.donate(200).unwrap();

        let receipt = position.take_receipts_for_withdrawal().unwrap();
        assert_eq!(reserve.redeem(receipt).unwrap(), 2_200);
    }
}
