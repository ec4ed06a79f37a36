pub mod claim_rewards;
pub mod claim_winner_position;
pub mod create_challenge;
pub mod initialize;
pub mod join_challenge;
pub mod set_challenge_creation_paused;
pub mod sync_and_lock;
pub mod take_protocol_profits;
pub mod withdraw_and_close;

pub use claim_rewards::*;
pub use claim_winner_position::*;
pub use create_challenge::*;
pub use initialize::*;
pub use join_challenge::*;
pub use set_challenge_creation_paused::*;
pub use sync_and_lock::*;
pub use take_protocol_profits::*;
pub use withdraw_and_close::*;
