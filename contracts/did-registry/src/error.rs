use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ContractError {
    #[error("{0}")]
    Std(#[from] StdError),

    #[error("Failed to put to world state. {source}")]
    PutState { key: String, source: StdError },

    #[error("Failed to read from world state. {source}")]
    GetState { key: String, source: StdError },

    #[error("Failed to scan world state. {source}")]
    ScanState { source: StdError },

    #[error("{key} does not exist")]
    KeyNotFound { key: String },

    #[error("{id} does not exist")]
    IdNotFound { id: String },

    #[error("Malformed DID record at {key}: {msg}")]
    SerializationFault { key: String, msg: String },
}

impl ContractError {
    /// The requested key or identifier has no record.
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            ContractError::KeyNotFound { .. } | ContractError::IdNotFound { .. }
        )
    }

    /// The underlying world state failed a get, put, scan or step.
    pub fn is_store_error(&self) -> bool {
        matches!(
            self,
            ContractError::Std(_)
                | ContractError::PutState { .. }
                | ContractError::GetState { .. }
                | ContractError::ScanState { .. }
        )
    }

    pub fn is_serialization_fault(&self) -> bool {
        matches!(self, ContractError::SerializationFault { .. })
    }
}
