use anchor_lang::prelude::*;

use crate::constants::{DEFAULT_ENTRANCE_FEE, DEFAULT_INTERVAL, MAX_PLAYERS};
use crate::error::LotteryError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq, InitSpace)]
pub enum LotteryState {
    /// Accepting entries.
    Open,
    /// Waiting for the randomness request to be fulfilled.
    Calculating,
}

/// Construction-time parameters of a lottery. Never mutated afterwards.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Debug, PartialEq, Eq)]
pub struct LotteryConfig {
    /// Minimum lamports a single entry must pay.
    pub entrance_fee: u64,
    /// Minimum seconds between two winner selections.
    pub interval: i64,
}

impl Default for LotteryConfig {
    fn default() -> Self {
        Self {
            entrance_fee: DEFAULT_ENTRANCE_FEE,
            interval: DEFAULT_INTERVAL,
        }
    }
}

impl LotteryConfig {
    /// The fee must cover the rent-exempt minimum of an empty account, so
    /// that the payout can always fund a drained winner account.
    pub fn validate(&self, rent: &Rent) -> Result<()> {
        require!(
            self.entrance_fee >= rent.minimum_balance(0),
            LotteryError::InvalidEntranceFee
        );
        require!(self.interval > 0, LotteryError::InvalidInterval);
        Ok(())
    }
}

/// Result of evaluating the trigger condition. `upkeep_needed` is the
/// conjunction of the four checks; the individual flags are kept so keepers
/// can log why nothing happened.
#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct UpkeepStatus {
    pub upkeep_needed: bool,
    pub is_open: bool,
    pub time_passed: bool,
    pub has_players: bool,
    pub has_balance: bool,
}

/// A Switchboard randomness commitment as read from its account.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Commitment {
    pub randomness_account: Pubkey,
    /// Slot the randomness was committed in.
    pub seed_slot: u64,
}

/// Outcome of a fulfilled randomness request.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Payout {
    pub winner: Pubkey,
    /// Position of the winner in the entrant list of the closed cycle.
    pub index: u64,
    /// Lamports owed to the winner.
    pub amount: u64,
}

#[account]
#[derive(InitSpace)]
pub struct Lottery {
    /// The bump seed used for deriving the PDA address of this account.
    pub bump: u8,

    /// Upgrade authority of the program at creation time.
    pub authority: Pubkey,

    pub state: LotteryState,

    /// Lamports required per entry.
    pub entrance_fee: u64,

    /// Minimum seconds between winner selections.
    pub interval: i64,

    /// UNIX timestamp of construction or of the last payout.
    pub last_timestamp: i64,

    /// Winner of the last completed cycle, `Pubkey::default()` before the
    /// first one.
    pub recent_winner: Pubkey,

    /// Entrants of the current cycle, in entry order. A player appears once
    /// per entry.
    #[max_len(MAX_PLAYERS)]
    pub players: Vec<Pubkey>,

    /// Lamports collected during the current cycle. The account itself also
    /// holds its rent-exempt reserve, which is never paid out.
    pub pot: u64,

    /// Number of randomness requests issued so far. Request ids start at 1.
    pub request_counter: u64,

    /// Id of the in-flight randomness request while calculating.
    pub pending_request_id: Option<u64>,

    /// Switchboard randomness account committed for the pending request.
    pub randomness_account: Pubkey,

    /// Seed slot of that commitment. A later re-commit of the same account
    /// does not fulfill the request.
    pub commit_slot: u64,
}

impl Lottery {
    pub fn init(
        &mut self,
        bump: u8,
        authority: Pubkey,
        config: &LotteryConfig,
        rent: &Rent,
        now: i64,
    ) -> Result<()> {
        config.validate(rent)?;

        self.bump = bump;
        self.authority = authority;
        self.state = LotteryState::Open;
        self.entrance_fee = config.entrance_fee;
        self.interval = config.interval;
        self.last_timestamp = now;
        self.recent_winner = Pubkey::default();
        self.players = Vec::new();
        self.pot = 0;
        self.request_counter = 0;
        self.pending_request_id = None;
        self.randomness_account = Pubkey::default();
        self.commit_slot = 0;
        Ok(())
    }

    /// Records an entry of `amount` lamports. The caller moves the lamports.
    pub fn enter(&mut self, player: Pubkey, amount: u64) -> Result<()> {
        require!(self.state == LotteryState::Open, LotteryError::NotOpen);
        require!(
            amount >= self.entrance_fee,
            LotteryError::NotEnoughEntered
        );
        require!(self.players.len() < MAX_PLAYERS, LotteryError::LotteryFull);

        self.pot = self
            .pot
            .checked_add(amount)
            .ok_or(LotteryError::Overflow)?;
        self.players.push(player);
        Ok(())
    }

    pub fn check_upkeep(&self, now: i64) -> UpkeepStatus {
        let is_open = self.state == LotteryState::Open;
        let time_passed = now.saturating_sub(self.last_timestamp) >= self.interval;
        let has_players = !self.players.is_empty();
        let has_balance = self.pot > 0;

        UpkeepStatus {
            upkeep_needed: is_open && time_passed && has_players && has_balance,
            is_open,
            time_passed,
            has_players,
            has_balance,
        }
    }

    /// Fails with `UpkeepNotNeeded` unless the trigger condition holds at
    /// `now`.
    pub fn require_upkeep(&self, now: i64) -> Result<()> {
        if !self.check_upkeep(now).upkeep_needed {
            msg!(
                "Upkeep not needed: state={:?} players={} pot={} elapsed={} interval={}",
                self.state,
                self.players.len(),
                self.pot,
                now.saturating_sub(self.last_timestamp),
                self.interval
            );
            return Err(LotteryError::UpkeepNotNeeded.into());
        }
        Ok(())
    }

    /// Closes the cycle and opens a randomness request for it. The trigger
    /// condition is checked before the commitment, which must come from the
    /// slot right before `slot`. Returns the new request id.
    pub fn request_winner(&mut self, now: i64, slot: u64, commitment: &Commitment) -> Result<u64> {
        self.require_upkeep(now)?;

        if commitment.seed_slot != slot.saturating_sub(1) {
            msg!("Seed slot: {}", commitment.seed_slot);
            msg!("Current slot: {}", slot);
            return Err(LotteryError::RandomnessAlreadyRevealed.into());
        }

        let request_id = self
            .request_counter
            .checked_add(1)
            .ok_or(LotteryError::Overflow)?;

        self.request_counter = request_id;
        self.pending_request_id = Some(request_id);
        self.randomness_account = commitment.randomness_account;
        self.commit_slot = commitment.seed_slot;
        self.state = LotteryState::Calculating;
        Ok(request_id)
    }

    /// Checks that `commitment` is the exact one recorded by
    /// `request_winner`: same account, same seed slot.
    pub fn check_fulfillment(&self, commitment: &Commitment) -> Result<()> {
        require_keys_eq!(
            commitment.randomness_account,
            self.randomness_account,
            LotteryError::IncorrectRandomnessAccount
        );
        if commitment.seed_slot != self.commit_slot {
            msg!(
                "Randomness recommitted: seed slot {} expected {}",
                commitment.seed_slot,
                self.commit_slot
            );
            return Err(LotteryError::CommitSlotMismatch.into());
        }
        Ok(())
    }

    /// Settles the pending request with `random_word`: picks the winner,
    /// empties the pot and reopens the lottery.
    pub fn pick_winner(&mut self, request_id: u64, random_word: u64, now: i64) -> Result<Payout> {
        require!(
            self.state == LotteryState::Calculating,
            LotteryError::NotCalculating
        );
        require!(
            self.pending_request_id == Some(request_id),
            LotteryError::UnknownRequest
        );
        // performing an upkeep requires players and no entries are taken
        // while calculating
        require!(!self.players.is_empty(), LotteryError::NotCalculating);

        let index = random_word % self.players.len() as u64;
        let winner = self.players[index as usize];
        let amount = self.pot;

        self.recent_winner = winner;
        self.players.clear();
        self.pot = 0;
        self.state = LotteryState::Open;
        self.last_timestamp = now;
        self.pending_request_id = None;

        Ok(Payout {
            winner,
            index,
            amount,
        })
    }

    pub fn get_lottery_state(&self) -> LotteryState {
        self.state
    }

    pub fn get_entrance_fee(&self) -> u64 {
        self.entrance_fee
    }

    pub fn get_interval(&self) -> i64 {
        self.interval
    }

    pub fn get_player(&self, index: u64) -> Result<Pubkey> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.players.get(i))
            .copied()
            .ok_or_else(|| LotteryError::IndexOutOfRange.into())
    }

    pub fn get_num_players(&self) -> u64 {
        self.players.len() as u64
    }

    pub fn get_recent_winner(&self) -> Pubkey {
        self.recent_winner
    }

    pub fn get_latest_timestamp(&self) -> i64 {
        self.last_timestamp
    }

    pub fn get_request_counter(&self) -> u64 {
        self.request_counter
    }
}

/// Reads the random word used for winner selection from a revealed
/// Switchboard value: its first eight bytes, little-endian.
pub fn random_word(revealed: &[u8; 32]) -> u64 {
    let mut word = [0u8; 8];
    word.copy_from_slice(&revealed[..8]);
    u64::from_le_bytes(word)
}
