use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::{Lottery, UpkeepStatus};

#[derive(Accounts)]
pub struct CheckUpkeep<'info> {
    #[account(
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,
}

/// Evaluates the trigger condition without changing any state. Keepers
/// simulate this instruction and read the status from the return data.
pub fn process_check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
    let clock = Clock::get()?;
    Ok(ctx.accounts.lottery.check_upkeep(clock.unix_timestamp))
}
