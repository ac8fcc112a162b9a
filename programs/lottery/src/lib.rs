use anchor_lang::prelude::*;
use instructions::*;

pub mod constants;
pub mod error;
pub mod events;
pub mod instructions;
pub mod state;
pub mod utils;

use state::{LotteryConfig, UpkeepStatus};

declare_id!("2RTh2Y4e2N421EbSnUYTKdGqDHJH7etxZb3VrWDMpNMY");

#[program]
pub mod lottery {
    use super::*;

    pub fn initialize(ctx: Context<InitializeLottery>, config: LotteryConfig) -> Result<()> {
        process_initialize(ctx, config)
    }

    pub fn enter_lottery(ctx: Context<EnterLottery>, amount: u64) -> Result<()> {
        process_enter_lottery(ctx, amount)
    }

    pub fn check_upkeep(ctx: Context<CheckUpkeep>) -> Result<UpkeepStatus> {
        process_check_upkeep(ctx)
    }

    pub fn perform_upkeep(ctx: Context<PerformUpkeep>) -> Result<()> {
        process_perform_upkeep(ctx)
    }

    pub fn fulfill_random_words(ctx: Context<FulfillRandomWords>, request_id: u64) -> Result<()> {
        process_fulfill_random_words(ctx, request_id)
    }

    pub fn get_player(ctx: Context<GetPlayer>, index: u64) -> Result<Pubkey> {
        process_get_player(ctx, index)
    }
}
