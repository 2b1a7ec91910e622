pub mod account_kind; // AccountKind
pub mod bet;          // Bet
pub mod race;         // Race
pub mod race_status;  // RaceStatus

// Re-export the types so everyone can `use crate::state::{...}`.
pub use account_kind::AccountKind;
pub use bet::Bet;
pub use race::Race;
pub use race_status::RaceStatus;
