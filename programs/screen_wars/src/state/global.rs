use anchor_lang::prelude::*;

#[account]
#[derive(InitSpace)]
pub struct Global {
    /// Admin who can pause challenge creation and withdraw profits.
    pub admin: Pubkey,
    /// Account custodying every stake. Always the global PDA itself.
    pub treasury: Pubkey,
    /// Protocol share of settled slash pools not yet withdrawn.
    pub treasury_profits: u64,
    /// Id assigned to the next created challenge. Starts at 1.
    pub next_challenge_id: u32,
    /// Gate on `create_challenge`.
    pub challenge_creation_paused: bool,
    /// PDA bump seed.
    pub bump: u8,
}

impl Global {
    pub const SEED: &'static [u8] = b"global";
}
