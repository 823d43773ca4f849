use cosmwasm_schema::cw_serde;
use cosmwasm_std::{from_json, to_json_vec};
use cw_storage_plus::Item;
use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use crate::error::ContractError;

/// Prefix of the keys written by the seed loader (`DID0`, `DID1`, ...).
pub const KEY_PREFIX: &str = "DID";

/// Default scan bracket, sized for two-digit key suffixes.
pub const DEFAULT_SCAN_START: &str = "DID0";
pub const DEFAULT_SCAN_END: &str = "DID99";

/// A DID document with one authentication key and one service endpoint.
///
/// Stored as a flat JSON object of strings. Missing fields decode as empty
/// strings and unknown fields are ignored.
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq, JsonSchema)]
#[serde(rename_all = "camelCase", default)]
pub struct DidRecord {
    /// Document identifier (did:method:...)
    pub id: String,
    pub authentication_id: String,
    pub authentication_type: String,
    pub authentication_controller: String,
    pub authentication_public_key_perm: String,
    pub service_id: String,
    pub service_type: String,
    pub service_end_point: String,
}

impl DidRecord {
    pub fn to_bytes(&self, key: &str) -> Result<Vec<u8>, ContractError> {
        to_json_vec(self).map_err(|err| ContractError::SerializationFault {
            key: key.to_string(),
            msg: err.to_string(),
        })
    }

    pub fn from_bytes(key: &str, bytes: &[u8]) -> Result<Self, ContractError> {
        from_json(bytes).map_err(|err| ContractError::SerializationFault {
            key: key.to_string(),
            msg: err.to_string(),
        })
    }
}

/// A record paired with the key it was read from.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, JsonSchema)]
pub struct QueryResult {
    #[serde(rename = "Key")]
    pub key: String,
    #[serde(rename = "Record")]
    pub record: DidRecord,
}

/// Key bracket walked by the finder and the enumerator.
#[cw_serde]
pub struct ScanRange {
    /// Inclusive start key
    pub start: String,
    /// Exclusive end key (None = every record from `start` onwards)
    pub end: Option<String>,
}

impl Default for ScanRange {
    fn default() -> Self {
        ScanRange {
            start: DEFAULT_SCAN_START.to_string(),
            end: Some(DEFAULT_SCAN_END.to_string()),
        }
    }
}

#[cw_serde]
pub struct Config {
    pub scan_range: ScanRange,
}

pub const CONFIG: Item<Config> = Item::new("config");

/// Storage key of the `index`-th seeded record.
pub fn seed_key(index: usize) -> String {
    format!("{}{}", KEY_PREFIX, index)
}

/// The records written by `InitLedger`, in key order.
pub fn seed_records() -> Vec<DidRecord> {
    vec![
        DidRecord {
            id: "did:example:12346789abcdefghi".to_string(),
            authentication_id: "did:example:12346789abcdefghi#keys-1".to_string(),
            authentication_type: "RsaVerificationKey2018".to_string(),
            authentication_controller: "did:example:12346789abcdefghi".to_string(),
            authentication_public_key_perm: "-----BEGIN PUBLIC KEY...END PUBLIC KEY-----\r\n"
                .to_string(),
            service_id: "did:example:12346789abcdefghi#vcs".to_string(),
            service_type: "VerifiableCredentialService".to_string(),
            service_end_point: "https://example.com/vc/".to_string(),
        },
        DidRecord {
            id: "did:example:12346789asdfghjkl".to_string(),
            authentication_id: "did:example:12346789asdfghjkl#keys-1".to_string(),
            authentication_type: "RsaVerificationKey2018".to_string(),
            authentication_controller: "did:example:12346789asdfghjkl".to_string(),
            authentication_public_key_perm: "-----BEGIN PUBLIC KEY...END PUBLIC KEY-----\r\n"
                .to_string(),
            service_id: "did:example:12346789aasdfghjkl#vcs".to_string(),
            service_type: "VerifiableCredentialService".to_string(),
            service_end_point: "https://example2.com/vc/".to_string(),
        },
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> DidRecord {
        DidRecord {
            id: "did:example:alice".to_string(),
            authentication_id: "did:example:alice#keys-1".to_string(),
            authentication_type: "Ed25519VerificationKey2018".to_string(),
            authentication_controller: "did:example:alice".to_string(),
            authentication_public_key_perm: "pem".to_string(),
            service_id: "did:example:alice#vcs".to_string(),
            service_type: "VerifiableCredentialService".to_string(),
            service_end_point: "https://alice.example/vc/".to_string(),
        }
    }

    #[test]
    fn record_round_trips() {
        let did = sample();
        let bytes = did.to_bytes("DID0").unwrap();
        assert_eq!(DidRecord::from_bytes("DID0", &bytes).unwrap(), did);
    }

    #[test]
    fn wire_shape_uses_stable_field_names() {
        let bytes = sample().to_bytes("DID0").unwrap();
        let json = String::from_utf8(bytes).unwrap();
        assert!(json.starts_with(r#"{"id":"did:example:alice","authenticationId":"#));
        for field in [
            "authenticationType",
            "authenticationController",
            "authenticationPublicKeyPerm",
            "serviceId",
            "serviceType",
            "serviceEndPoint",
        ] {
            assert!(json.contains(&format!("\"{}\":", field)), "missing {}", field);
        }
        // Serialization is stable
        assert_eq!(json.into_bytes(), sample().to_bytes("DID0").unwrap());
    }

    #[test]
    fn missing_fields_decode_as_empty_strings() {
        let did = DidRecord::from_bytes("DID3", br#"{"id":"did:example:bob"}"#).unwrap();
        assert_eq!(did.id, "did:example:bob");
        assert_eq!(did.service_end_point, "");
        assert_eq!(did.authentication_id, "");
    }

    #[test]
    fn garbage_is_a_serialization_fault() {
        let err = DidRecord::from_bytes("DID4", b"not json").unwrap_err();
        match err {
            ContractError::SerializationFault { key, .. } => assert_eq!(key, "DID4"),
            other => panic!("unexpected error: {}", other),
        }
    }

    #[test]
    fn query_result_uses_capitalised_keys() {
        let result = QueryResult {
            key: "DID0".to_string(),
            record: DidRecord::default(),
        };
        let json = String::from_utf8(to_json_vec(&result).unwrap()).unwrap();
        assert!(json.starts_with(r#"{"Key":"DID0","Record":{"#));
    }

    #[test]
    fn seed_keys_follow_index() {
        assert_eq!(seed_key(0), "DID0");
        assert_eq!(seed_key(1), "DID1");
        assert_eq!(seed_records().len(), 2);
    }
}
