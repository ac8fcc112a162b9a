use anchor_lang::prelude::*;
use anchor_lang::system_program;

use crate::constants::LOTTERY_SEED;
use crate::events::LotteryEntered;
use crate::state::Lottery;

/// Accounts required to enter the lottery.
#[derive(Accounts)]
pub struct EnterLottery<'info> {
    /// The player paying into the pot.
    #[account(mut)]
    pub player: Signer<'info>,

    #[account(
        mut,
        seeds = [LOTTERY_SEED],
        bump = lottery.bump
    )]
    pub lottery: Account<'info, Lottery>,

    /// System program for the lamports transfer.
    pub system_program: Program<'info, System>,
}

/// Enters the signer into the current cycle.
///
/// The entry is recorded first and the whole `amount` is then moved into
/// the lottery account, so a failed transfer aborts the entry.
///
/// # Arguments
/// * `ctx` - Context containing EnterLottery accounts
/// * `amount` - Lamports paid, at least the entrance fee
pub fn process_enter_lottery(ctx: Context<EnterLottery>, amount: u64) -> Result<()> {
    let player = ctx.accounts.player.key();

    ctx.accounts.lottery.enter(player, amount)?;

    system_program::transfer(
        CpiContext::new(
            ctx.accounts.system_program.to_account_info(),
            system_program::Transfer {
                from: ctx.accounts.player.to_account_info(),
                to: ctx.accounts.lottery.to_account_info(),
            },
        ),
        amount,
    )?;

    emit!(LotteryEntered { player, amount });

    Ok(())
}
