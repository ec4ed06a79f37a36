use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;
use crate::events::ChallengeJoined;
use crate::phase::Phase;
use crate::state::{Challenge, Global, User};

#[derive(Accounts)]
#[instruction(challenge_id: u32)]
pub struct JoinChallenge<'info> {
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
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

    /// Fails to initialize while the wallet is still enrolled anywhere.
    #[account(
        init,
        payer = user,
        space = 8 + User::INIT_SPACE,
        seeds = [User::SEED, user.key().as_ref()],
        bump,
    )]
    pub user_account: Account<'info, User>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<JoinChallenge>, challenge_id: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let challenge = &mut ctx.accounts.challenge;

    require!(
        challenge.phase(now) == Phase::Joinable,
        ScreenWarsError::JoinedLate
    );

    challenge.total_participants = challenge
        .total_participants
        .checked_add(1)
        .ok_or(ScreenWarsError::MathOverflow)?;

    let user_account = &mut ctx.accounts.user_account;
    user_account.user = ctx.accounts.user.key();
    user_account.challenge_id = challenge_id;
    user_account.locked_balance = 0;
    user_account.streak = 0;
    user_account.bump = ctx.bumps.user_account;
    user_account.challenge_end = challenge.end;
    user_account.last_synced_day = None;

    emit!(ChallengeJoined {
        challenge_id,
        user: user_account.user,
        total_participants: challenge.total_participants,
    });

    Ok(())
}
