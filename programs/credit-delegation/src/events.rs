use anchor_lang::prelude::*;

#[event]
pub struct CollateralDeposited {
    pub delegator: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    /// Receipt units actually credited by the reserve, not assumed 1:1.
    pub receipt: u64,
}

#[event]
pub struct ReserveDonation {
    pub donor: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
}

#[event]
pub struct BorrowerApproved {
    pub delegator: Pubkey,
    pub delegate: Pubkey,
    pub asset: Pubkey,
    pub allowance: u64,
}

#[event]
pub struct CreditBorrowed {
    pub delegator: Pubkey,
    pub delegate: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub rate_mode: u8,
    pub referral_code: u16,
}

#[event]
pub struct CreditRepaid {
    pub delegator: Pubkey,
    pub delegate: Pubkey,
    pub asset: Pubkey,
    pub amount: u64,
    pub remaining_debt: u64,
}

#[event]
pub struct CollateralWithdrawn {
    pub delegator: Pubkey,
    pub asset: Pubkey,
    pub receipt: u64,
    pub amount: u64,
}
