use anchor_lang::prelude::*;

use crate::phase::Phase;

#[account]
#[derive(InitSpace)]
pub struct Challenge {
    /// Wallet that created the challenge and earns the creator share.
    pub creator: Pubkey,
    /// Sequential challenge identifier.
    pub challenge_id: u32,
    /// Daily screen-time window in seconds.
    pub daily_timer: i64,
    /// Unix timestamp when the challenge starts.
    pub start: i64,
    /// Unix timestamp when the challenge ends (`start` + 21 days).
    pub end: i64,
    /// Lamports forfeited by participants so far.
    pub total_slashed: u64,
    /// Current winner claimant (`Pubkey::default()` until claimed).
    pub winner: Pubkey,
    /// Streak backing the current winner claim.
    pub winner_streak: u8,
    pub winner_has_claimed: bool,
    pub creator_has_claimed: bool,
    /// Number of users that joined.
    pub total_participants: u32,
    /// PDA bump seed.
    pub bump: u8,
}

impl Challenge {
    pub const SEED: &'static [u8] = b"challenge";

    pub fn phase(&self, now: i64) -> Phase {
        Phase::at(now, self.start, self.end)
    }

    pub fn has_winner(&self) -> bool {
        self.winner != Pubkey::default()
    }

    /// The winner side is settled once the winner claimed, or when nobody
    /// ever took the seat.
    pub fn winner_settled(&self) -> bool {
        self.winner_has_claimed || !self.has_winner()
    }

    pub fn nothing_claimed(&self) -> bool {
        !self.winner_has_claimed && !self.creator_has_claimed
    }
}
