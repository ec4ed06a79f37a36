//! Protocol constants.

pub const ONE_HOUR: i64 = 60 * 60;
pub const ONE_DAY: i64 = 24 * ONE_HOUR;

/// A challenge must start at least this far in the future.
pub const MIN_START_DELAY: i64 = ONE_DAY;

/// A challenge must start no further than this in the future.
pub const MAX_START_DELAY: i64 = 7 * ONE_DAY;

/// Upper bound on the daily screen-time window.
pub const MAX_DAILY_TIMER: i64 = 2 * ONE_HOUR;

/// Every challenge runs for exactly three weeks.
pub const CHALLENGE_DURATION: i64 = 21 * ONE_DAY;

/// Window after `end` during which participants contend for the winner seat.
pub const CONTENTION_PERIOD: i64 = 5 * ONE_DAY;

/// Stake taken from a participant on every daily sync (~$1-2).
pub const DAILY_LAMPORTS: u64 = 10_000_000;

/// Basis points denominator (100 = 1%).
pub const BPS_DENOMINATOR: u64 = 10_000;

/// Share of `locked_balance` forfeited on a failed or missed day.
pub const PENALTY_BPS: u64 = 2_500;

/// Winner's share of the slashed pool.
pub const WINNER_SHARE_BPS: u64 = 5_000;

/// Creator's share of the slashed pool. The protocol keeps the remainder.
pub const CREATOR_SHARE_BPS: u64 = 1_000;
