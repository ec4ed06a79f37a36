use anchor_lang::prelude::*;

use crate::constants::DAILY_LAMPORTS;
use crate::errors::ScreenWarsError;
use crate::events::DailySynced;
use crate::oracle::{resolve_daily_outcome, DailyAttestation};
use crate::phase::{challenge_day, unsynced_days, Phase};
use crate::settlement::settle_day;
use crate::state::{Challenge, Global, User};
use crate::treasury::deposit_to_treasury;

#[derive(Accounts)]
#[instruction(challenge_id: u32)]
pub struct SyncAndLock<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    /// Treasury; receives the daily stake.
    #[account(
        mut,
        seeds = [Global::SEED],
        bump = global.bump,
    )]
    pub global: Account<'info, Global>,

    #[account(
        mut,
        seeds = [Challenge::SEED, challenge_id.to_le_bytes().as_ref()],
        bump = challenge.bump,
    )]
    pub challenge: Account<'info, Challenge>,

    #[account(
        mut,
        seeds = [User::SEED, user.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.challenge_id == challenge.challenge_id @ ScreenWarsError::NotEnrolled,
    )]
    pub user_account: Account<'info, User>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<SyncAndLock>,
    challenge_id: u32,
    attestation: Option<DailyAttestation>,
) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;

    match ctx.accounts.challenge.phase(now) {
        Phase::Active => {}
        Phase::Joinable => return err!(ScreenWarsError::ChallengeNotStarted),
        Phase::Contention | Phase::Claimable => return err!(ScreenWarsError::ChallengeEnded),
    }

    let today = challenge_day(now, ctx.accounts.challenge.start);
    let last_synced_day = ctx.accounts.user_account.last_synced_day;
    require!(
        last_synced_day != Some(today),
        ScreenWarsError::AlreadySyncedToday
    );

    let outcome = resolve_daily_outcome(attestation, unsynced_days(last_synced_day, today))?;

    // Today's stake is paid whether the day is passed or failed.
    deposit_to_treasury(
        &ctx.accounts.system_program,
        &ctx.accounts.user,
        &ctx.accounts.global.to_account_info(),
        DAILY_LAMPORTS,
    )?;

    let user_account = &mut ctx.accounts.user_account;
    let day = settle_day(user_account.locked_balance, user_account.streak, outcome)?;
    user_account.locked_balance = day.locked_balance;
    user_account.streak = day.streak;
    user_account.last_synced_day = Some(today);

    let challenge = &mut ctx.accounts.challenge;
    challenge.total_slashed = challenge
        .total_slashed
        .checked_add(day.slashed)
        .ok_or(ScreenWarsError::MathOverflow)?;

    emit!(DailySynced {
        challenge_id,
        user: user_account.user,
        day: today,
        passed: outcome.passed,
        days_not_synced: outcome.days_not_synced,
        slashed: day.slashed,
        locked_balance: day.locked_balance,
        streak: day.streak,
    });

    Ok(())
}
