use {
    crate::{error::ErrorCode, state::Reserve},
    anchor_lang::prelude::*,
};

#[derive(Accounts)]
pub struct SetReserveState<'info> {
    pub authority: Signer<'info>,

    #[account(
        mut,
        has_one = authority @ ErrorCode::InvalidPermissions,
    )]
    pub reserve: Account<'info, Reserve>,
}

impl<'info> SetReserveState<'info> {
    pub fn set_reserve_state(&mut self, paused: bool) -> Result<()> {
        self.reserve.paused = paused;
        Ok(())
    }
}
