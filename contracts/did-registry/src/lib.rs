pub mod contract;
pub mod error;
pub mod ledger;
pub mod msg;
pub mod state;
pub mod world_state;

pub use crate::error::ContractError;
