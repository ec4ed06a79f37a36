use anchor_lang::prelude::*;

#[event]
pub struct GlobalInitialized {
    pub admin: Pubkey,
    pub treasury: Pubkey,
}

#[event]
pub struct ChallengeCreationToggled {
    pub admin: Pubkey,
    pub paused: bool,
}

#[event]
pub struct ChallengeCreated {
    pub challenge_id: u32,
    pub creator: Pubkey,
    pub start: i64,
    pub end: i64,
    pub daily_timer: i64,
}

#[event]
pub struct ChallengeJoined {
    pub challenge_id: u32,
    pub user: Pubkey,
    pub total_participants: u32,
}

#[event]
pub struct DailySynced {
    pub challenge_id: u32,
    pub user: Pubkey,
    pub day: u8,
    pub passed: bool,
    pub days_not_synced: u8,
    pub slashed: u64,
    pub locked_balance: u64,
    pub streak: u8,
}

#[event]
pub struct WinnerPositionClaimed {
    pub challenge_id: u32,
    pub winner: Pubkey,
    pub streak: u8,
    pub previous_winner: Pubkey,
}

#[event]
pub struct EnrollmentWithdrawn {
    pub challenge_id: u32,
    pub user: Pubkey,
    pub amount: u64,
}

#[event]
pub struct RewardsClaimed {
    pub challenge_id: u32,
    pub claimant: Pubkey,
    pub as_winner: bool,
    pub amount: u64,
    pub protocol_booked: u64,
}

#[event]
pub struct ChallengeClosed {
    pub challenge_id: u32,
    pub rent_receiver: Pubkey,
}

#[event]
pub struct ProtocolProfitsTaken {
    pub admin: Pubkey,
    pub recipient: Pubkey,
    pub amount: u64,
    pub remaining_profits: u64,
}
