pub mod challenge;
pub mod global;
pub mod user;

pub use challenge::*;
pub use global::*;
pub use user::*;
