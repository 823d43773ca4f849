//! Record operations over a `WorldState`.
//!
//! These take the store explicitly so the contract entry points and the
//! tests drive the same code.

use crate::error::ContractError;
use crate::state::{seed_key, seed_records, DidRecord, QueryResult, ScanRange};
use crate::world_state::{StateIterator, WorldState};

/// Write the fixed seed records under `DID0`, `DID1`, ...
///
/// Stops at the first failed put. Records already written stay written.
/// Returns the number of records seeded.
pub fn init_ledger<S: WorldState + ?Sized>(store: &mut S) -> Result<usize, ContractError> {
    let dids = seed_records();
    for (i, did) in dids.iter().enumerate() {
        put_did(store, &seed_key(i), did)?;
    }
    Ok(dids.len())
}

/// Store `did` under `key`, replacing whatever was there.
pub fn create_did<S: WorldState + ?Sized>(
    store: &mut S,
    key: &str,
    did: &DidRecord,
) -> Result<(), ContractError> {
    put_did(store, key, did)
}

fn put_did<S: WorldState + ?Sized>(
    store: &mut S,
    key: &str,
    did: &DidRecord,
) -> Result<(), ContractError> {
    let bytes = did.to_bytes(key)?;
    store
        .put_state(key, &bytes)
        .map_err(|source| ContractError::PutState {
            key: key.to_string(),
            source,
        })
}

pub fn query_did_by_key<S: WorldState + ?Sized>(
    store: &S,
    key: &str,
) -> Result<DidRecord, ContractError> {
    let bytes = store
        .get_state(key)
        .map_err(|source| ContractError::GetState {
            key: key.to_string(),
            source,
        })?
        .ok_or_else(|| ContractError::KeyNotFound {
            key: key.to_string(),
        })?;

    DidRecord::from_bytes(key, &bytes)
}

/// First record in `range` whose `id` equals `id`, in ascending key order.
pub fn query_did_by_id<S: WorldState + ?Sized>(
    store: &S,
    range: &ScanRange,
    id: &str,
) -> Result<DidRecord, ContractError> {
    for item in scan(store, range)? {
        let (_, did) = item?;
        if did.id == id {
            return Ok(did);
        }
    }

    Err(ContractError::IdNotFound { id: id.to_string() })
}

/// Every record in `range` with its key, in scan order.
pub fn query_all_dids<S: WorldState + ?Sized>(
    store: &S,
    range: &ScanRange,
) -> Result<Vec<QueryResult>, ContractError> {
    scan(store, range)?
        .map(|item| item.map(|(key, record)| QueryResult { key, record }))
        .collect()
}

/// Open a scan over `range`, decoding each entry as it is produced.
fn scan<'a, S: WorldState + ?Sized>(
    store: &'a S,
    range: &ScanRange,
) -> Result<DecodedRecords<'a>, ContractError> {
    let cursor = store
        .state_by_range(&range.start, range.end.as_deref())
        .map_err(|source| ContractError::ScanState { source })?;
    Ok(DecodedRecords { cursor })
}

struct DecodedRecords<'a> {
    cursor: StateIterator<'a>,
}

impl<'a> Iterator for DecodedRecords<'a> {
    type Item = Result<(String, DidRecord), ContractError>;

    fn next(&mut self) -> Option<Self::Item> {
        let item = self.cursor.next()?;
        Some(
            item.map_err(|source| ContractError::ScanState { source })
                .and_then(|(key, bytes)| {
                    let did = DidRecord::from_bytes(&key, &bytes)?;
                    Ok((key, did))
                }),
        )
    }
}
