//! Time phases of a challenge.
//!
//! Nothing about the phase is stored on chain. Every instruction derives it
//! from the clock and the challenge's `start`/`end` and checks the one it
//! needs.

use crate::constants::{CONTENTION_PERIOD, ONE_DAY};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Phase {
    /// `now < start`: users may join.
    Joinable,
    /// `start <= now < end`: daily syncs.
    Active,
    /// `end <= now < end + 5 days`: highest streak claims the winner seat.
    Contention,
    /// `now >= end + 5 days`: withdrawals and reward claims.
    Claimable,
}

impl Phase {
    pub fn at(now: i64, start: i64, end: i64) -> Self {
        if now < start {
            Phase::Joinable
        } else if now < end {
            Phase::Active
        } else if now < end.saturating_add(CONTENTION_PERIOD) {
            Phase::Contention
        } else {
            Phase::Claimable
        }
    }
}

/// 0-based challenge day `now` falls into. Only meaningful while active.
pub fn challenge_day(now: i64, start: i64) -> u8 {
    let elapsed = now.saturating_sub(start).max(0);
    u8::try_from(elapsed / ONE_DAY).unwrap_or(u8::MAX)
}

/// Challenge days before `today` on which the participant never synced.
pub fn unsynced_days(last_synced_day: Option<u8>, today: u8) -> u8 {
    match last_synced_day {
        Some(last) => today.saturating_sub(last).saturating_sub(1),
        None => today,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::CHALLENGE_DURATION;

    const START: i64 = 1_700_000_000;
    const END: i64 = START + CHALLENGE_DURATION;

    #[test]
    fn phase_boundaries() {
        assert_eq!(Phase::at(START - 1, START, END), Phase::Joinable);
        assert_eq!(Phase::at(START, START, END), Phase::Active);
        assert_eq!(Phase::at(END - 1, START, END), Phase::Active);
        assert_eq!(Phase::at(END, START, END), Phase::Contention);
        assert_eq!(
            Phase::at(END + CONTENTION_PERIOD - 1, START, END),
            Phase::Contention
        );
        assert_eq!(
            Phase::at(END + CONTENTION_PERIOD, START, END),
            Phase::Claimable
        );
    }

    #[test]
    fn phase_is_a_pure_function_of_time() {
        let first = Phase::at(END + 1, START, END);
        let second = Phase::at(END + 1, START, END);
        assert_eq!(first, second);
    }

    #[test]
    fn challenge_day_counts_from_start() {
        assert_eq!(challenge_day(START, START), 0);
        assert_eq!(challenge_day(START + ONE_DAY - 1, START), 0);
        assert_eq!(challenge_day(START + ONE_DAY, START), 1);
        assert_eq!(challenge_day(END - 1, START), 20);
    }

    #[test]
    fn challenge_day_before_start_is_zero() {
        assert_eq!(challenge_day(START - ONE_DAY, START), 0);
    }

    #[test]
    fn unsynced_days_since_last_sync() {
        assert_eq!(unsynced_days(None, 0), 0);
        assert_eq!(unsynced_days(None, 3), 3);
        assert_eq!(unsynced_days(Some(2), 3), 0);
        assert_eq!(unsynced_days(Some(2), 6), 3);
    }
}
