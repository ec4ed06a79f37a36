use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;
use crate::events::EnrollmentWithdrawn;
use crate::phase::Phase;
use crate::state::{Global, User};
use crate::treasury::transfer_from_treasury;

#[derive(Accounts)]
#[instruction(challenge_id: u32)]
pub struct WithdrawAndClose<'info> {
    /// Receives the locked balance and the enrollment's rent.
    #[account(mut)]
    pub user: Signer<'info>,

    #[account(
        mut,
        seeds = [Global::SEED],
        bump = global.bump,
    )]
    pub global: Account<'info, Global>,

    #[account(
        mut,
        seeds = [User::SEED, user.key().as_ref()],
        bump = user_account.bump,
        constraint = user_account.challenge_id == challenge_id @ ScreenWarsError::NotEnrolled,
        close = user,
    )]
    pub user_account: Account<'info, User>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<WithdrawAndClose>, challenge_id: u32) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    let user_account = &ctx.accounts.user_account;

    match user_account.challenge_phase(now) {
        Phase::Claimable => {}
        Phase::Joinable | Phase::Active => return err!(ScreenWarsError::ChallengeNotEnded),
        Phase::Contention => return err!(ScreenWarsError::ContentionPhase),
    }

    let amount = user_account.locked_balance;
    transfer_from_treasury(
        &ctx.accounts.global.to_account_info(),
        &ctx.accounts.user.to_account_info(),
        amount,
    )?;

    emit!(EnrollmentWithdrawn {
        challenge_id,
        user: ctx.accounts.user.key(),
        amount,
    });

    Ok(())
}
