#[macro_export]
macro_rules! reserve_signer_seeds {
    ($reserve:expr) => {
        &[
            $crate::constants::RESERVE_SEED,
            $reserve.asset_mint.as_ref(),
            &[$reserve.bump],
        ]
    };
}
