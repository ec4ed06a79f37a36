use anchor_lang::prelude::*;

#[error_code]
pub enum ScreenWarsError {
    #[msg("Only the protocol admin can perform this action.")]
    Unauthorized,
    #[msg("Challenge creation is currently paused.")]
    ChallengeCreationPaused,
    #[msg("Challenge creation is already in the requested state.")]
    ChallengeStateAlreadySet,
    #[msg("Challenge must start at least 24 hours from now.")]
    ChallengeStartsTooSoon,
    #[msg("Challenge can't start more than one week from now.")]
    ChallengeStartsTooFar,
    #[msg("Daily timer must be at most 2 hours.")]
    DailyTimerTooLong,
    #[msg("Can't join because the challenge has already started.")]
    JoinedLate,
    #[msg("Challenge has not started yet.")]
    ChallengeNotStarted,
    #[msg("Challenge has already ended.")]
    ChallengeEnded,
    #[msg("User has already synced for today.")]
    AlreadySyncedToday,
    #[msg("Attestation reports more missed days than have elapsed.")]
    InvalidAttestation,
    #[msg("Challenge has not ended yet.")]
    ChallengeNotEnded,
    #[msg("Contention period for the winner position is over.")]
    ContentionExpired,
    #[msg("Rewards can't be claimed during the contention period.")]
    ContentionPhase,
    #[msg("User is not enrolled in this challenge.")]
    NotEnrolled,
    #[msg("Streak must be higher than the current winner's streak.")]
    LowerStreak,
    #[msg("Only the winner can claim winner rewards.")]
    NotWinner,
    #[msg("Only the creator can claim creator rewards.")]
    NotCreator,
    #[msg("Rewards have already been claimed.")]
    AlreadyClaimed,
    #[msg("Amount must be greater than zero.")]
    ZeroAmount,
    #[msg("Amount exceeds accumulated treasury profits.")]
    OverClaim,
    #[msg("Recipient account does not match the requested destination.")]
    InvalidRecipient,
    #[msg("Treasury must remain rent-exempt after the transfer.")]
    TreasuryBelowRent,
    #[msg("Arithmetic overflow.")]
    MathOverflow,
    #[msg("Arithmetic underflow.")]
    MathUnderflow,
}
