use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::Lottery;

#[derive(Accounts)]
pub struct GetPlayer<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

pub fn process_get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
    ctx.accounts.lottery.get_player(index)
}
