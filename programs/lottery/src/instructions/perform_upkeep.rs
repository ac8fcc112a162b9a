use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::RequestedLotteryWinner;
use crate::state::{Commitment, Lottery};

/// Accounts required to close the current cycle and request randomness.
///
/// Anyone may act as the keeper; the trigger condition is re-checked here,
/// so a stale or duplicate call fails with `UpkeepNotNeeded`.
#[derive(Accounts)]
pub struct PerformUpkeep<'info> {
    /// Keeper paying transaction fees.
    #[account(mut)]
    pub keeper: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// Switchboard randomness account committed in the previous slot.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,
}

pub fn process_perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
    let clock = Clock::get()?;

    // the trigger condition decides before anything about the randomness account
    ctx.accounts.lottery.require_upkeep(clock.unix_timestamp)?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
    let commitment = Commitment {
        randomness_account: ctx.accounts.randomness_account_data.key(),
        seed_slot: randomness_data.seed_slot,
    };

    let request_id =
        ctx.accounts
            .lottery
            .request_winner(clock.unix_timestamp, clock.slot, &commitment)?;

    msg!(
        "Requested lottery winner, request id {}, seed slot {}",
        request_id,
        commitment.seed_slot
    );

    emit!(RequestedLotteryWinner {
        request_id,
        randomness_account: commitment.randomness_account,
    });

    Ok(())
}
