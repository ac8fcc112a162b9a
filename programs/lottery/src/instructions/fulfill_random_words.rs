use anchor_lang::prelude::*;
use switchboard_on_demand::accounts::RandomnessAccountData;

use crate::constants::LOTTERY_SEED;
use crate::error::LotteryError;
use crate::events::WinnerPicked;
use crate::state::{random_word, Commitment, Lottery};
use crate::utils::pay_winner;

/// Accounts required to settle a randomness request.
///
/// Ensures:
/// 1. The randomness account and its seed slot are the ones committed by
///    `perform_upkeep`.
/// 2. The request id matches the pending request.
/// 3. The winner account is the player selected by the revealed value.
#[derive(Accounts)]
pub struct FulfillRandomWords<'info> {
    /// Account paying transaction fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump,
    )]
    pub lottery: Account<'info, Lottery>,

    /// The randomness oracle account providing verifiable randomness.
    /// CHECK: The account's data is validated manually within the handler.
    pub randomness_account_data: UncheckedAccount<'info>,

    /// Receives the pot. Clients derive it from the revealed value before
    /// sending the transaction.
    /// CHECK: Only the key is checked against the selected player; crediting
    /// lamports works for an account of any owner.
    #[account(mut)]
    pub winner: UncheckedAccount<'info>,
}

/// Reveals the committed randomness, picks the winner, pays out the whole
/// pot and reopens the lottery.
///
/// Any failure, including the payout, aborts the transaction and leaves the
/// lottery calculating with the same pending request.
pub fn process_fulfill_random_words(ctx: Context<FulfillRandomWords>, request_id: u64) -> Result<()> {
    let clock = Clock::get()?;

    let randomness_data =
        RandomnessAccountData::parse(ctx.accounts.randomness_account_data.data.borrow())
            .map_err(|_| LotteryError::InvalidRandomnessAccount)?;
    let commitment = Commitment {
        randomness_account: ctx.accounts.randomness_account_data.key(),
        seed_slot: randomness_data.seed_slot,
    };
    ctx.accounts.lottery.check_fulfillment(&commitment)?;

    let revealed_random_value = randomness_data
        .get_value(&clock)
        .map_err(|_| LotteryError::RandomnessNotResolved)?;

    let word = random_word(&revealed_random_value);
    msg!("Randomness result: {}", word);
    msg!("Players: {}", ctx.accounts.lottery.get_num_players());

    let payout = ctx
        .accounts
        .lottery
        .pick_winner(request_id, word, clock.unix_timestamp)?;

    msg!("Winner: {} at index {}", payout.winner, payout.index);

    pay_winner(
        &ctx.accounts.lottery.to_account_info(),
        &ctx.accounts.winner.to_account_info(),
        &payout,
    )?;

    emit!(WinnerPicked {
        winner: payout.winner,
        amount: payout.amount,
        request_id,
    });

    Ok(())
}
