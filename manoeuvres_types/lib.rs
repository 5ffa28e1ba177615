pub mod battle;
pub mod common;
pub mod errors;
pub mod forces;
pub mod orders;
pub mod reports;
pub mod rituals;

pub use errors::Result;
