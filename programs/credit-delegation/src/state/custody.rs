use anchor_lang::prelude::*;

/// Where an operation sources its funds: pulled from the caller's token
/// account, or drawn from balance the ledger already holds. Per-call
/// argument, never persisted.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub enum CustodyMode {
    PullFromCaller,
    UseHeldFunds,
}
