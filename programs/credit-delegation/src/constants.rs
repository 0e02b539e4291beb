pub const RESERVE_SEED: &[u8] = b"reserve";
pub const VAULT_SEED: &[u8] = b"vault";
pub const CUSTODY_SEED: &[u8] = b"custody";
pub const POSITION_SEED: &[u8] = b"position";
pub const DELEGATION_SEED: &[u8] = b"delegation";

/// Interest rate modes accepted on borrow. Stable debt is mode 1, variable
/// debt is mode 2; the mode is recorded on the delegation, not compounded.
pub const STABLE_RATE_MODE: u8 = 1;
pub const VARIABLE_RATE_MODE: u8 = 2;
