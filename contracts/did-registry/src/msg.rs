use cosmwasm_schema::{cw_serde, QueryResponses};

use crate::state::{DidRecord, QueryResult, ScanRange};

#[cw_serde]
pub struct InstantiateMsg {
    /// Key bracket for id lookups and enumeration (default ["DID0", "DID99"))
    pub scan_range: Option<ScanRange>,
}

#[cw_serde]
pub enum ExecuteMsg {
    /// Write the fixed seed records under DID0, DID1, ...
    InitLedger {},
    /// Create or overwrite the record stored under `key`
    CreateDid {
        key: String,
        id: String,
        authentication_id: String,
        authentication_type: String,
        authentication_controller: String,
        authentication_public_key_perm: String,
        service_id: String,
        service_type: String,
        service_end_point: String,
    },
}

#[cw_serde]
#[derive(QueryResponses)]
pub enum QueryMsg {
    /// Get configuration
    #[returns(ConfigResponse)]
    Config {},

    /// Get the record stored under a key
    #[returns(DidRecord)]
    QueryDidByKey { key: String },

    /// Get the first record (in key order) with the given DID
    #[returns(DidRecord)]
    QueryDidById { id: String },

    /// List every record in the scan range with its key
    #[returns(Vec<QueryResult>)]
    QueryAllDids {},
}

// Response types

#[cw_serde]
pub struct ConfigResponse {
    pub scan_range: ScanRange,
}
