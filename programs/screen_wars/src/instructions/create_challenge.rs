use anchor_lang::prelude::*;

use crate::constants::{CHALLENGE_DURATION, MAX_DAILY_TIMER, MAX_START_DELAY, MIN_START_DELAY};
use crate::errors::ScreenWarsError;
use crate::events::ChallengeCreated;
use crate::state::{Challenge, Global};

#[derive(Accounts)]
pub struct CreateChallenge<'info> {
    #[account(mut)]
    pub creator: Signer<'info>,

    #[account(
        mut,
        seeds = [Global::SEED],
        bump = global.bump,
    )]
    pub global: Account<'info, Global>,

    #[account(
        init,
        payer = creator,
        space = 8 + Challenge::INIT_SPACE,
        seeds = [Challenge::SEED, global.next_challenge_id.to_le_bytes().as_ref()],
        bump,
    )]
    pub challenge: Account<'info, Challenge>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<CreateChallenge>, start_time: i64, daily_timer: i64) -> Result<()> {
    require!(
        !ctx.accounts.global.challenge_creation_paused,
        ScreenWarsError::ChallengeCreationPaused
    );

    let now = Clock::get()?.unix_timestamp;
    let earliest_start = now
        .checked_add(MIN_START_DELAY)
        .ok_or(ScreenWarsError::MathOverflow)?;
    let latest_start = now
        .checked_add(MAX_START_DELAY)
        .ok_or(ScreenWarsError::MathOverflow)?;

    require!(
        start_time >= earliest_start,
        ScreenWarsError::ChallengeStartsTooSoon
    );
    require!(
        start_time <= latest_start,
        ScreenWarsError::ChallengeStartsTooFar
    );
    require!(
        daily_timer <= MAX_DAILY_TIMER,
        ScreenWarsError::DailyTimerTooLong
    );

    let end = start_time
        .checked_add(CHALLENGE_DURATION)
        .ok_or(ScreenWarsError::MathOverflow)?;

    let global = &mut ctx.accounts.global;
    let challenge_id = global.next_challenge_id;
    global.next_challenge_id = challenge_id
        .checked_add(1)
        .ok_or(ScreenWarsError::MathOverflow)?;

    let challenge = &mut ctx.accounts.challenge;
    challenge.creator = ctx.accounts.creator.key();
    challenge.challenge_id = challenge_id;
    challenge.daily_timer = daily_timer;
    challenge.start = start_time;
    challenge.end = end;
    challenge.total_slashed = 0;
    challenge.winner = Pubkey::default();
    challenge.winner_streak = 0;
    challenge.winner_has_claimed = false;
    challenge.creator_has_claimed = false;
    challenge.total_participants = 0;
    challenge.bump = ctx.bumps.challenge;

    emit!(ChallengeCreated {
        challenge_id,
        creator: challenge.creator,
        start: start_time,
        end,
        daily_timer,
    });

    Ok(())
}
