use anchor_lang::solana_program::native_token::LAMPORTS_PER_SOL;

/// Seed of the lottery PDA.
pub const LOTTERY_SEED: &[u8] = b"lottery";

/// Upper bound on entrants per cycle. Sizes the `players` vector of the
/// lottery account.
pub const MAX_PLAYERS: usize = 100;

/// Entrance fee used on development clusters: 0.01 SOL.
pub const DEFAULT_ENTRANCE_FEE: u64 = LAMPORTS_PER_SOL / 100;

/// Seconds between winner selections on development clusters.
pub const DEFAULT_INTERVAL: i64 = 30;
