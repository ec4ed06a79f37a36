use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;
use crate::events::WinnerPositionClaimed;
use crate::phase::Phase;
use crate::state::{Challenge, User};

#[derive(Accounts)]
#[instruction(challenge_id: u32)]
pub struct ClaimWinnerPosition<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [Challenge::SEED, challenge_id.to_le_bytes().as_ref()],
        bump = challenge.bump,
    )]
    pub challenge: Account<'info, Challenge>,

    #[account(
        seeds = [User::SEED, user.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.challenge_id == challenge.challenge_id @ ScreenWarsError::NotEnrolled,
    )]
    pub user_account: Account<'info, User>,
}

pub fn handler(ctx: Context<ClaimWinnerPosition>, challenge_id: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let challenge = &mut ctx.accounts.challenge;
    let user_account = &ctx.accounts.user_account;

    match challenge.phase(now) {
        Phase::Contention => {}
        Phase::Joinable | Phase::Active => return err!(ScreenWarsError::ChallengeNotEnded),
        Phase::Claimable => return err!(ScreenWarsError::ContentionExpired),
    }

    // An empty seat goes to the first enrolled claimant; after that only a
    // strictly higher streak takes it over.
    if challenge.has_winner() {
        require!(
            user_account.streak > challenge.winner_streak,
            ScreenWarsError::LowerStreak
        );
    }

    let previous_winner = challenge.winner;
    challenge.winner = user_account.user;
    challenge.winner_streak = user_account.streak;

    emit!(WinnerPositionClaimed {
        challenge_id,
        winner: challenge.winner,
        streak: challenge.winner_streak,
        previous_winner,
    });

    Ok(())
}
