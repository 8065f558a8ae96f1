//! The match store and its combat timer.

pub mod schedule;
pub mod store;

pub use schedule::{CombatTicket, CombatTimer};
pub use store::GameStore;
