use anchor_lang::prelude::*;

pub mod constants;
pub mod errors;
pub mod events;
pub mod instructions;
pub mod oracle;
pub mod phase;
pub mod settlement;
pub mod state;
pub mod treasury;

use instructions::*;
pub use oracle::DailyAttestation;

declare_id!("4jqrWDfeR2RAzSPYNoiVq2dcVrZUrsp3ZWEPHehVwCtW");

#[program]
pub mod screen_wars {
    use super::*;

    /// One-time setup of the global config and treasury PDA.
    pub fn initialize(ctx: Context<Initialize>) -> Result<()> {
        instructions::initialize::handler(ctx)
    }

    /// Admin switch for challenge creation.
    pub fn set_challenge_creation_paused(
        ctx: Context<SetChallengeCreationPaused>,
        pause: bool,
    ) -> Result<()> {
        instructions::set_challenge_creation_paused::handler(ctx, pause)
    }

    /// Open a 21-day challenge starting between one and seven days from now.
    pub fn create_challenge(
        ctx: Context<CreateChallenge>,
        start_time: i64,
        daily_timer: i64,
    ) -> Result<()> {
        instructions::create_challenge::handler(ctx, start_time, daily_timer)
    }

    /// Enroll the signer in a challenge that has not started yet.
    pub fn join_challenge(ctx: Context<JoinChallenge>, challenge_id: u32) -> Result<()> {
        instructions::join_challenge::handler(ctx, challenge_id)
    }

    /// Daily check-in: stake today's lamports and settle the day.
    /// Pass `attestation = None` for a plain pass.
    pub fn sync_and_lock(
        ctx: Context<SyncAndLock>,
        challenge_id: u32,
        attestation: Option<DailyAttestation>,
    ) -> Result<()> {
        instructions::sync_and_lock::handler(ctx, challenge_id, attestation)
    }

    /// Take the winner seat during the contention window.
    pub fn claim_winner_position(
        ctx: Context<ClaimWinnerPosition>,
        challenge_id: u32,
    ) -> Result<()> {
        instructions::claim_winner_position::handler(ctx, challenge_id)
    }

    /// Return the locked balance and close the enrollment.
    pub fn withdraw_and_close(ctx: Context<WithdrawAndClose>, challenge_id: u32) -> Result<()> {
        instructions::withdraw_and_close::handler(ctx, challenge_id)
    }

    /// Winner collects their share of the slashed pool.
    pub fn claim_rewards_as_winner(ctx: Context<ClaimRewards>, challenge_id: u32) -> Result<()> {
        instructions::claim_rewards::winner_handler(ctx, challenge_id)
    }

    /// Creator collects their share of the slashed pool.
    pub fn claim_rewards_as_creator(ctx: Context<ClaimRewards>, challenge_id: u32) -> Result<()> {
        instructions::claim_rewards::creator_handler(ctx, challenge_id)
    }

    /// Admin withdraws booked protocol profits, to `destination` or to themselves.
    pub fn take_protocol_profits(
        ctx: Context<TakeProtocolProfits>,
        amount: u64,
        destination: Option<Pubkey>,
    ) -> Result<()> {
        instructions::take_protocol_profits::handler(ctx, amount, destination)
    }
}
