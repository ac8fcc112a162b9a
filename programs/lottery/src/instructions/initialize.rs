use anchor_lang::prelude::*;

use crate::constants::LOTTERY_SEED;
use crate::state::{Lottery, LotteryConfig};
use crate::utils::check_upgrade_authority;

/// Accounts required to create the lottery.
///
/// The lottery PDA is a singleton, so creation is restricted to the program's
/// upgrade authority.
#[derive(Accounts)]
pub struct InitializeLottery<'info> {
    /// The upgrade authority, paying for account creation and fees.
    #[account(mut)]
    pub payer: Signer<'info>,

    /// The lottery state account. Also holds the pot.
    #[account(
        init,
        payer = payer,
        space = 8 + Lottery::INIT_SPACE,
        seeds = [LOTTERY_SEED],
        bump
    )]
    pub lottery: Box<Account<'info, Lottery>>,

    /// This program, used to locate its program data account.
    #[account(constraint = program.programdata_address()? == Some(program_data.key()))]
    pub program: Program<'info, crate::program::Lottery>,

    /// Program data holding the upgrade authority.
    pub program_data: Account<'info, ProgramData>,

    /// System program to create accounts.
    pub system_program: Program<'info, System>,
}

/// Creates the lottery in the open state with an empty entrant list.
/// The interval is measured from the creation time.
///
/// # Arguments
/// * `ctx` - Context holding the InitializeLottery accounts
/// * `config` - Entrance fee and interval, fixed for the lifetime of the lottery
pub fn process_initialize(ctx: Context<InitializeLottery>, config: LotteryConfig) -> Result<()> {
    let clock = Clock::get()?;
    let rent = Rent::get()?;
    let payer = ctx.accounts.payer.key();

    check_upgrade_authority(ctx.accounts.program_data.upgrade_authority_address, payer)?;

    ctx.accounts.lottery.init(
        ctx.bumps.lottery,
        payer,
        &config,
        &rent,
        clock.unix_timestamp,
    )?;

    msg!(
        "Lottery initialized: entrance fee {} lamports, interval {}s",
        config.entrance_fee,
        config.interval
    );

    Ok(())
}
