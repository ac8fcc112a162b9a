use anchor_lang::prelude::*;

use crate::error::LotteryError;
use crate::state::Payout;

/// Moves the pot out of the program-owned lottery account into the winner's
/// account. The winner may be owned by any program; only its key is checked.
/// Both balances are computed before either is written, so a failure leaves
/// both accounts untouched.
pub fn pay_winner(lottery: &AccountInfo, winner: &AccountInfo, payout: &Payout) -> Result<()> {
    require_keys_eq!(
        *winner.key,
        payout.winner,
        LotteryError::IncorrectWinnerAccount
    );

    let lottery_balance = lottery
        .lamports()
        .checked_sub(payout.amount)
        .ok_or(LotteryError::TransferFailed)?;
    let winner_balance = winner
        .lamports()
        .checked_add(payout.amount)
        .ok_or(LotteryError::TransferFailed)?;

    **lottery
        .try_borrow_mut_lamports()
        .map_err(|_| LotteryError::TransferFailed)? = lottery_balance;
    **winner
        .try_borrow_mut_lamports()
        .map_err(|_| LotteryError::TransferFailed)? = winner_balance;

    Ok(())
}

/// Only the upgrade authority of the deployed program may create the lottery.
pub fn check_upgrade_authority(upgrade_authority: Option<Pubkey>, signer: Pubkey) -> Result<()> {
    require!(
        upgrade_authority == Some(signer),
        LotteryError::NotAuthorized
    );
    Ok(())
}
