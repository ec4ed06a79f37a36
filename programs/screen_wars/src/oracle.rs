//! Daily pass/fail signal.
//!
//! Whether a participant stayed under their screen-time limit is decided off
//! chain and handed to `sync_and_lock` as an attestation. The program only
//! sanity-checks it against the challenge clock.

use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;

#[derive(AnchorSerialize, AnchorDeserialize, Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyAttestation {
    /// Participant stayed within today's limit.
    pub user_passed: bool,
    /// Challenge days skipped since the participant's previous sync.
    pub days_not_synced: u8,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct DailyOutcome {
    pub passed: bool,
    pub days_not_synced: u8,
}

/// `max_gap` is the number of challenge days that went by unsynced according
/// to the clock. An absent attestation counts as a pass with that clock gap.
pub fn resolve_daily_outcome(
    attestation: Option<DailyAttestation>,
    max_gap: u8,
) -> Result<DailyOutcome> {
    let outcome = match attestation {
        Some(data) => DailyOutcome {
            passed: data.user_passed,
            days_not_synced: data.days_not_synced,
        },
        None => DailyOutcome {
            passed: true,
            days_not_synced: max_gap,
        },
    };

    require!(
        outcome.days_not_synced <= max_gap,
        ScreenWarsError::InvalidAttestation
    );

    Ok(outcome)
}
