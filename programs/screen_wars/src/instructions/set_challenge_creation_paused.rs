use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;
use crate::events::ChallengeCreationToggled;
use crate::state::Global;

#[derive(Accounts)]
pub struct SetChallengeCreationPaused<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Global::SEED],
        bump = global.bump,
        has_one = admin @ ScreenWarsError::Unauthorized,
    )]
    pub global: Account<'info, Global>,
}

pub fn handler(ctx: Context<SetChallengeCreationPaused>, pause: bool) -> Result<()> {
    let global = &mut ctx.accounts.global;
    require!(
        global.challenge_creation_paused != pause,
        ScreenWarsError::ChallengeStateAlreadySet
    );

    global.challenge_creation_paused = pause;

    emit!(ChallengeCreationToggled {
        admin: global.admin,
        paused: pause,
    });

    Ok(())
}
