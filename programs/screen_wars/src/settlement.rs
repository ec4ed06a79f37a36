//! Lamport accounting for daily syncs and the end-of-challenge split.

use anchor_lang::prelude::*;

use crate::constants::{
    BPS_DENOMINATOR, CREATOR_SHARE_BPS, DAILY_LAMPORTS, PENALTY_BPS, WINNER_SHARE_BPS,
};
use crate::errors::ScreenWarsError;
use crate::oracle::DailyOutcome;

/// Enrollment values after one daily sync, plus what the day forfeited.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DaySettlement {
    pub locked_balance: u64,
    pub streak: u8,
    pub slashed: u64,
}

fn bps_of(amount: u64, bps: u64) -> Result<u64> {
    Ok(amount
        .checked_mul(bps)
        .ok_or(ScreenWarsError::MathOverflow)?
        .checked_div(BPS_DENOMINATOR)
        .ok_or(ScreenWarsError::MathOverflow)?)
}

/// 25% of the locked balance, rounded down.
pub fn locked_balance_penalty(locked_balance: u64) -> Result<u64> {
    bps_of(locked_balance, PENALTY_BPS)
}

/// Applies one day's outcome to an enrollment. The caller has already paid
/// `DAILY_LAMPORTS` into the treasury; this decides whether that stake is
/// locked or slashed and how much of the existing lock is forfeited.
pub fn settle_day(locked_balance: u64, streak: u8, outcome: DailyOutcome) -> Result<DaySettlement> {
    if !outcome.passed {
        let penalty = locked_balance_penalty(locked_balance)?;
        let slashed = penalty
            .checked_add(DAILY_LAMPORTS)
            .ok_or(ScreenWarsError::MathOverflow)?;
        let locked_balance = locked_balance
            .checked_sub(penalty)
            .ok_or(ScreenWarsError::MathUnderflow)?;
        return Ok(DaySettlement {
            locked_balance,
            streak: 0,
            slashed,
        });
    }

    if outcome.days_not_synced > 0 && locked_balance > 0 {
        // Missed days break the streak; today's pass starts a new one.
        let penalty = locked_balance_penalty(locked_balance)?;
        let locked_balance = locked_balance
            .checked_sub(penalty)
            .ok_or(ScreenWarsError::MathUnderflow)?
            .checked_add(DAILY_LAMPORTS)
            .ok_or(ScreenWarsError::MathOverflow)?;
        return Ok(DaySettlement {
            locked_balance,
            streak: 1,
            slashed: penalty,
        });
    }

    Ok(DaySettlement {
        locked_balance: locked_balance
            .checked_add(DAILY_LAMPORTS)
            .ok_or(ScreenWarsError::MathOverflow)?,
        streak: streak.checked_add(1).ok_or(ScreenWarsError::MathOverflow)?,
        slashed: 0,
    })
}

/// Division of a challenge's slashed pool between winner, creator and protocol.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct RewardSplit {
    pub winner: u64,
    pub creator: u64,
    pub protocol: u64,
}

impl RewardSplit {
    /// 50% winner, 10% creator, remainder (40% plus rounding dust) protocol.
    pub fn from_slashed(total_slashed: u64) -> Result<Self> {
        let winner = bps_of(total_slashed, WINNER_SHARE_BPS)?;
        let creator = bps_of(total_slashed, CREATOR_SHARE_BPS)?;
        let protocol = total_slashed
            .checked_sub(winner)
            .and_then(|rest| rest.checked_sub(creator))
            .ok_or(ScreenWarsError::MathUnderflow)?;

        Ok(Self {
            winner,
            creator,
            protocol,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn passed() -> DailyOutcome {
        DailyOutcome {
            passed: true,
            days_not_synced: 0,
        }
    }

    fn failed() -> DailyOutcome {
        DailyOutcome {
            passed: false,
            days_not_synced: 0,
        }
    }

    #[test]
    fn first_pass_locks_the_daily_stake() {
        let day = settle_day(0, 0, passed()).unwrap();
        assert_eq!(day.locked_balance, DAILY_LAMPORTS);
        assert_eq!(day.streak, 1);
        assert_eq!(day.slashed, 0);
    }

    #[test]
    fn consecutive_pass_grows_lock_and_streak() {
        let day = settle_day(3 * DAILY_LAMPORTS, 3, passed()).unwrap();
        assert_eq!(day.locked_balance, 4 * DAILY_LAMPORTS);
        assert_eq!(day.streak, 4);
        assert_eq!(day.slashed, 0);
    }

    #[test]
    fn first_fail_slashes_only_the_daily_stake() {
        let day = settle_day(0, 0, failed()).unwrap();
        assert_eq!(day.locked_balance, 0);
        assert_eq!(day.streak, 0);
        assert_eq!(day.slashed, DAILY_LAMPORTS);
    }

    #[test]
    fn fail_with_streak_slashes_a_quarter_plus_stake() {
        let locked = 4 * DAILY_LAMPORTS;
        let day = settle_day(locked, 4, failed()).unwrap();
        assert_eq!(day.locked_balance, locked * 3 / 4);
        assert_eq!(day.streak, 0);
        assert_eq!(day.slashed, locked / 4 + DAILY_LAMPORTS);
    }

    #[test]
    fn repeated_fail_keeps_taking_a_quarter_of_the_lock() {
        let locked = 3 * DAILY_LAMPORTS;
        let day = settle_day(locked, 0, failed()).unwrap();
        assert_eq!(day.locked_balance, locked - locked / 4);
        assert_eq!(day.streak, 0);
        assert_eq!(day.slashed, locked / 4 + DAILY_LAMPORTS);
    }

    #[test]
    fn pass_after_gap_slashes_before_locking_today() {
        let locked = 2 * DAILY_LAMPORTS;
        let outcome = DailyOutcome {
            passed: true,
            days_not_synced: 2,
        };
        let day = settle_day(locked, 2, outcome).unwrap();
        assert_eq!(day.slashed, locked / 4);
        assert_eq!(day.locked_balance, locked - locked / 4 + DAILY_LAMPORTS);
        assert_eq!(day.streak, 1);
    }

    #[test]
    fn gap_with_nothing_locked_is_a_plain_pass() {
        let outcome = DailyOutcome {
            passed: true,
            days_not_synced: 3,
        };
        let day = settle_day(0, 0, outcome).unwrap();
        assert_eq!(day.locked_balance, DAILY_LAMPORTS);
        assert_eq!(day.streak, 1);
        assert_eq!(day.slashed, 0);
    }

    #[test]
    fn stake_is_conserved_across_a_day() {
        // Whatever was locked plus today's stake ends up either locked or slashed.
        for (locked, streak, outcome) in [
            (0, 0, passed()),
            (0, 0, failed()),
            (7 * DAILY_LAMPORTS + 3, 7, failed()),
            (
                5 * DAILY_LAMPORTS + 1,
                5,
                DailyOutcome {
                    passed: true,
                    days_not_synced: 1,
                },
            ),
        ] {
            let day = settle_day(locked, streak, outcome).unwrap();
            assert_eq!(day.locked_balance + day.slashed, locked + DAILY_LAMPORTS);
        }
    }

    #[test]
    fn streak_overflow_is_an_error() {
        assert!(settle_day(DAILY_LAMPORTS, u8::MAX, passed()).is_err());
    }

    #[test]
    fn split_of_a_single_slashed_stake() {
        let split = RewardSplit::from_slashed(DAILY_LAMPORTS).unwrap();
        assert_eq!(split.winner, 5_000_000);
        assert_eq!(split.creator, 1_000_000);
        assert_eq!(split.protocol, 4_000_000);
    }

    #[test]
    fn split_rounding_dust_goes_to_protocol() {
        let split = RewardSplit::from_slashed(19).unwrap();
        assert_eq!(split.winner, 9);
        assert_eq!(split.creator, 1);
        assert_eq!(split.protocol, 9);
        assert_eq!(split.winner + split.creator + split.protocol, 19);
    }

    #[test]
    fn empty_pool_splits_to_zero() {
        let split = RewardSplit::from_slashed(0).unwrap();
        assert_eq!(split.winner + split.creator + split.protocol, 0);
    }
}
