use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;
use crate::events::ProtocolProfitsTaken;
use crate::state::Global;
use crate::treasury::transfer_from_treasury;

#[derive(Accounts)]
#[instruction(amount: u64, destination: Option<Pubkey>)]
pub struct TakeProtocolProfits<'info> {
    pub admin: Signer<'info>,

    #[account(
        mut,
        seeds = [Global::SEED],
        bump = global.bump,
        has_one = admin @ ScreenWarsError::Unauthorized,
    )]
    pub global: Account<'info, Global>,

    /// CHECK: plain lamport destination; must equal `destination`, or the
    /// admin when no destination is given.
    #[account(
        mut,
        constraint = recipient.key() == destination.unwrap_or(admin.key()) @ ScreenWarsError::InvalidRecipient,
    )]
    pub recipient: UncheckedAccount<'info>,

    pub system_program: Program<'info, System>,
}

pub fn handler(
    ctx: Context<TakeProtocolProfits>,
    amount: u64,
    _destination: Option<Pubkey>,
) -> Result<()> {
    require!(amount > 0, ScreenWarsError::ZeroAmount);
    require!(
        amount <= ctx.accounts.global.treasury_profits,
        ScreenWarsError::OverClaim
    );

    transfer_from_treasury(
        &ctx.accounts.global.to_account_info(),
        &ctx.accounts.recipient.to_account_info(),
        amount,
    )?;

    let global = &mut ctx.accounts.global;
    global.treasury_profits = global
        .treasury_profits
        .checked_sub(amount)
        .ok_or(ScreenWarsError::MathUnderflow)?;

    emit!(ProtocolProfitsTaken {
        admin: global.admin,
        recipient: ctx.accounts.recipient.key(),
        amount,
        remaining_profits: global.treasury_profits,
    });

    Ok(())
}
