use anchor_lang::prelude::*;
use anchor_lang::system_program::{self, Transfer};

use crate::errors::ScreenWarsError;

/// Moves lamports from a wallet into the treasury through the system program.
pub fn deposit_to_treasury<'info>(
    system_program: &Program<'info, System>,
    from: &Signer<'info>,
    treasury: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }

    let transfer_ctx = CpiContext::new(
        system_program.to_account_info(),
        Transfer {
            from: from.to_account_info(),
            to: treasury.clone(),
        },
    );
    system_program::transfer(transfer_ctx, amount)
}

/// Pays lamports out of the program-owned treasury PDA. The treasury must
/// stay rent-exempt afterwards.
pub fn transfer_from_treasury<'info>(
    treasury: &AccountInfo<'info>,
    to: &AccountInfo<'info>,
    amount: u64,
) -> Result<()> {
    if amount == 0 {
        return Ok(());
    }
    require_keys_neq!(treasury.key(), to.key(), ScreenWarsError::InvalidRecipient);

    let treasury_balance = treasury.lamports();
    let remaining = treasury_balance
        .checked_sub(amount)
        .ok_or(ScreenWarsError::MathUnderflow)?;
    let rent_floor = Rent::get()?.minimum_balance(treasury.data_len());
    require!(remaining >= rent_floor, ScreenWarsError::TreasuryBelowRent);

    let to_balance = to
        .lamports()
        .checked_add(amount)
        .ok_or(ScreenWarsError::MathOverflow)?;

    **treasury.try_borrow_mut_lamports()? = remaining;
    **to.try_borrow_mut_lamports()? = to_balance;
    Ok(())
}
