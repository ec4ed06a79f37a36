use anchor_lang::prelude::*;

use crate::errors::ScreenWarsError;
use crate::events::{ChallengeClosed, RewardsClaimed};
use crate::phase::Phase;
use crate::settlement::RewardSplit;
use crate::state::{Challenge, Global};
use crate::treasury::transfer_from_treasury;

/// Shared by the winner and creator claims. The claim that settles the last
/// outstanding side also closes the challenge, returning its rent to the
/// claimant.
#[derive(Accounts)]
#[instruction(challenge_id: u32)]
pub struct ClaimRewards<'info> {
    #[account(mut)]
    pub claimant: Signer<'info>,

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

    pub system_program: Program<'info, System>,
}

fn require_claimable(challenge: &Challenge) -> Result<()> {
    let now = Clock::get()?.unix_timestamp;
    match challenge.phase(now) {
        Phase::Claimable => Ok(()),
        Phase::Contention => err!(ScreenWarsError::ContentionPhase),
        Phase::Joinable | Phase::Active => err!(ScreenWarsError::ChallengeNotEnded),
    }
}

fn book_protocol_profits(global: &mut Global, amount: u64) -> Result<()> {
    global.treasury_profits = global
        .treasury_profits
        .checked_add(amount)
        .ok_or(ScreenWarsError::MathOverflow)?;
    Ok(())
}

fn close_if_settled<'info>(
    challenge: &Account<'info, Challenge>,
    claimant: &Signer<'info>,
) -> Result<()> {
    if !(challenge.winner_settled() && challenge.creator_has_claimed) {
        return Ok(());
    }

    challenge.close(claimant.to_account_info())?;
    msg!(
        "Challenge {} closed, rent returned to {}",
        challenge.challenge_id,
        claimant.key()
    );
    emit!(ChallengeClosed {
        challenge_id: challenge.challenge_id,
        rent_receiver: claimant.key(),
    });
    Ok(())
}

pub fn winner_handler(ctx: Context<ClaimRewards>, challenge_id: u32) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let challenge = &ctx.accounts.challenge;

    require_claimable(challenge)?;
    require!(
        challenge.has_winner() && challenge.winner == claimant,
        ScreenWarsError::NotWinner
    );
    require!(
        !challenge.winner_has_claimed,
        ScreenWarsError::AlreadyClaimed
    );

    let split = RewardSplit::from_slashed(challenge.total_slashed)?;
    let protocol_booked = if challenge.nothing_claimed() {
        split.protocol
    } else {
        0
    };
    book_protocol_profits(&mut ctx.accounts.global, protocol_booked)?;

    transfer_from_treasury(
        &ctx.accounts.global.to_account_info(),
        &ctx.accounts.claimant.to_account_info(),
        split.winner,
    )?;

    let challenge = &mut ctx.accounts.challenge;
    challenge.winner_has_claimed = true;

    emit!(RewardsClaimed {
        challenge_id,
        claimant,
        as_winner: true,
        amount: split.winner,
        protocol_booked,
    });

    close_if_settled(&ctx.accounts.challenge, &ctx.accounts.claimant)
}

pub fn creator_handler(ctx: Context<ClaimRewards>, challenge_id: u32) -> Result<()> {
    let claimant = ctx.accounts.claimant.key();
    let challenge = &ctx.accounts.challenge;

    require_claimable(challenge)?;
    require_keys_eq!(challenge.creator, claimant, ScreenWarsError::NotCreator);
    require!(
        !challenge.creator_has_claimed,
        ScreenWarsError::AlreadyClaimed
    );

    let split = RewardSplit::from_slashed(challenge.total_slashed)?;
    let mut protocol_booked = if challenge.nothing_claimed() {
        split.protocol
    } else {
        0
    };
    // Nobody took the winner seat: its share stays with the protocol.
    if !challenge.has_winner() {
        protocol_booked = protocol_booked
            .checked_add(split.winner)
            .ok_or(ScreenWarsError::MathOverflow)?;
    }
    book_protocol_profits(&mut ctx.accounts.global, protocol_booked)?;

    transfer_from_treasury(
        &ctx.accounts.global.to_account_info(),
        &ctx.accounts.claimant.to_account_info(),
        split.creator,
    )?;

    let challenge = &mut ctx.accounts.challenge;
    challenge.creator_has_claimed = true;

    emit!(RewardsClaimed {
        challenge_id,
        claimant,
        as_winner: false,
        amount: split.creator,
        protocol_booked,
    });

    close_if_settled(&ctx.accounts.challenge, &ctx.accounts.claimant)
}
