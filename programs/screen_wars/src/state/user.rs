use anchor_lang::prelude::*;

use crate::constants::CHALLENGE_DURATION;
use crate::phase::Phase;

/// Enrollment record. Seeded by the wallet alone, so a wallet can be enrolled
/// in at most one challenge at a time.
#[account]
#[derive(InitSpace)]
pub struct User {
    /// Wallet that owns this enrollment.
    pub user: Pubkey,
    /// Challenge the wallet is enrolled in.
    pub challenge_id: u32,
    /// Staked lamports not yet slashed or withdrawn.
    pub locked_balance: u64,
    /// Consecutive passed days.
    pub streak: u8,
    /// PDA bump seed.
    pub bump: u8,
    /// Copy of the challenge `end`, so withdrawal outlives the challenge account.
    pub challenge_end: i64,
    /// Challenge day (0-based) of the last sync.
    pub last_synced_day: Option<u8>,
}

impl User {
    pub const SEED: &'static [u8] = b"user";

    /// Phase of the enrolled challenge, derived from the `challenge_end` copy.
    pub fn challenge_phase(&self, now: i64) -> Phase {
        let start = self.challenge_end.saturating_sub(CHALLENGE_DURATION);
        Phase::at(now, start, self.challenge_end)
    }
}
