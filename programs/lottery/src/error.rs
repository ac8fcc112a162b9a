use anchor_lang::prelude::*;

#[error_code]
pub enum LotteryError {
    #[msg("Lottery is not open")]
    NotOpen,
    #[msg("Not enough lamports entered")]
    NotEnoughEntered,
    #[msg("Upkeep not needed")]
    UpkeepNotNeeded,
    #[msg("No player at this index")]
    IndexOutOfRange,
    #[msg("Transfer to the winner failed")]
    TransferFailed,
    #[msg("Randomness request is unknown or already fulfilled")]
    UnknownRequest,
    #[msg("Lottery is not calculating a winner")]
    NotCalculating,
    #[msg("Lottery has reached the maximum number of players")]
    LotteryFull,
    Overflow,
    #[msg("Entrance fee must cover the rent-exempt minimum")]
    InvalidEntranceFee,
    #[msg("Interval must be greater than zero")]
    InvalidInterval,
    #[msg("Randomness account data could not be parsed")]
    InvalidRandomnessAccount,
    #[msg("Randomness already revealed")]
    RandomnessAlreadyRevealed,
    #[msg("Randomness not resolved")]
    RandomnessNotResolved,
    #[msg("Incorrect randomness account")]
    IncorrectRandomnessAccount,
    #[msg("Winner account does not match the selected player")]
    IncorrectWinnerAccount,
    #[msg("Randomness account was committed again after the upkeep")]
    CommitSlotMismatch,
    #[msg("Only the program upgrade authority can initialize the lottery")]
    NotAuthorized,
}
