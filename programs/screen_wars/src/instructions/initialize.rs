use anchor_lang::prelude::*;

use crate::events::GlobalInitialized;
use crate::state::Global;

#[derive(Accounts)]
pub struct Initialize<'info> {
    #[account(mut)]
    pub admin: Signer<'info>,

    #[account(
        init,
        payer = admin,
        space = 8 + Global::INIT_SPACE,
        seeds = [Global::SEED],
        bump,
    )]
    pub global: Account<'info, Global>,

    pub system_program: Program<'info, System>,
}

pub fn handler(ctx: Context<Initialize>) -> Result<()> {
    // The global PDA custodies every stake itself.
    let treasury = ctx.accounts.global.key();

    let global = &mut ctx.accounts.global;
    global.admin = ctx.accounts.admin.key();
    global.treasury = treasury;
    global.treasury_profits = 0;
    global.next_challenge_id = 1;
    global.challenge_creation_paused = false;
    global.bump = ctx.bumps.global;

    emit!(GlobalInitialized {
        admin: global.admin,
        treasury,
    });

    Ok(())
}
