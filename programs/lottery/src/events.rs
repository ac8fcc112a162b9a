use anchor_lang::prelude::*;

/// A player paid into the current cycle.
#[event]
pub struct LotteryEntered {
    pub player: Pubkey,
    /// Lamports paid, at least the entrance fee.
    pub amount: u64,
}

/// The keeper closed the cycle and committed a randomness request.
#[event]
pub struct RequestedLotteryWinner {
    pub request_id: u64,
    pub randomness_account: Pubkey,
}

#[event]
pub struct WinnerPicked {
    pub winner: Pubkey,
    /// Whole pot of the cycle, in lamports.
    pub amount: u64,
    pub request_id: u64,
}
