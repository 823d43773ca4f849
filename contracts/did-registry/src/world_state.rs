//! Key-value world state consumed by the ledger operations.
//!
//! `WorldState` is the boundary to the host store: point get/put by string
//! key and ascending range scans. Every `cosmwasm_std::Storage` implements it,
//! with record keys kept under `RECORD_NAMESPACE` so scans never see contract
//! metadata such as the cw2 version or the config item.
//!
//! A scan hands out a boxed iterator. Dropping it releases the cursor, so
//! early returns and `?` propagation close the scan on every path.

use cosmwasm_std::{Order, StdError, StdResult, Storage};

/// Raw-key prefix of every record written through `WorldState`.
pub const RECORD_NAMESPACE: &[u8] = b"world_state/";

/// First raw key past the record namespace.
const NAMESPACE_END: &[u8] = b"world_state0";

/// Cursor over `(key, bytes)` pairs in ascending key order.
pub type StateIterator<'a> = Box<dyn Iterator<Item = StdResult<(String, Vec<u8>)>> + 'a>;

pub trait WorldState {
    /// Write `value` under `key`, replacing any previous value.
    fn put_state(&mut self, key: &str, value: &[u8]) -> StdResult<()>;

    /// Read the bytes under `key`. `Ok(None)` when the key was never written.
    fn get_state(&self, key: &str) -> StdResult<Option<Vec<u8>>>;

    /// Open a scan over `[start, end)`. `end = None` runs to the last record.
    fn state_by_range<'a>(&'a self, start: &str, end: Option<&str>)
        -> StdResult<StateIterator<'a>>;
}

fn record_key(key: &str) -> Vec<u8> {
    let mut raw = Vec::with_capacity(RECORD_NAMESPACE.len() + key.len());
    raw.extend_from_slice(RECORD_NAMESPACE);
    raw.extend_from_slice(key.as_bytes());
    raw
}

fn strip_namespace(raw: Vec<u8>) -> StdResult<String> {
    let key = raw
        .strip_prefix(RECORD_NAMESPACE)
        .ok_or_else(|| StdError::generic_err("scanned key outside record namespace"))?;
    String::from_utf8(key.to_vec()).map_err(|err| StdError::invalid_utf8(err.to_string()))
}

impl<T: Storage + ?Sized> WorldState for T {
    fn put_state(&mut self, key: &str, value: &[u8]) -> StdResult<()> {
        if value.is_empty() {
            return Err(StdError::generic_err("cannot store an empty value"));
        }
        self.set(&record_key(key), value);
        Ok(())
    }

    fn get_state(&self, key: &str) -> StdResult<Option<Vec<u8>>> {
        Ok(self.get(&record_key(key)))
    }

    fn state_by_range<'a>(
        &'a self,
        start: &str,
        end: Option<&str>,
    ) -> StdResult<StateIterator<'a>> {
        let start = record_key(start);
        let end = match end {
            Some(end) => record_key(end),
            None => NAMESPACE_END.to_vec(),
        };
        if end <= start {
            return Ok(Box::new(std::iter::empty()));
        }

        let iter = self
            .range(Some(&start), Some(&end), Order::Ascending)
            .map(|(key, value)| strip_namespace(key).map(|key| (key, value)));
        Ok(Box::new(iter))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use cosmwasm_std::testing::MockStorage;

    fn keys(store: &MockStorage, start: &str, end: Option<&str>) -> Vec<String> {
        store
            .state_by_range(start, end)
            .unwrap()
            .map(|item| item.unwrap().0)
            .collect()
    }

    #[test]
    fn get_returns_none_for_missing_key() {
        let store = MockStorage::new();
        assert_eq!(store.get_state("DID0").unwrap(), None);
    }

    #[test]
    fn put_overwrites() {
        let mut store = MockStorage::new();
        store.put_state("DID0", b"first").unwrap();
        store.put_state("DID0", b"second").unwrap();
        assert_eq!(store.get_state("DID0").unwrap(), Some(b"second".to_vec()));
    }

    #[test]
    fn range_is_half_open_and_lexicographic() {
        let mut store = MockStorage::new();
        for key in ["DID0", "DID1", "DID10", "DID2", "DID99", "DIE0"] {
            store.put_state(key, b"x").unwrap();
        }
        assert_eq!(
            keys(&store, "DID0", Some("DID99")),
            vec!["DID0", "DID1", "DID10", "DID2"]
        );
        assert_eq!(
            keys(&store, "DID0", None),
            vec!["DID0", "DID1", "DID10", "DID2", "DID99", "DIE0"]
        );
    }

    #[test]
    fn scan_ignores_keys_outside_namespace() {
        let mut store = MockStorage::new();
        store.set(b"config", b"{}");
        store.set(b"DID5", b"raw");
        store.put_state("DID1", b"x").unwrap();
        assert_eq!(keys(&store, "", None), vec!["DID1"]);
    }

    #[test]
    fn inverted_range_is_empty() {
        let mut store = MockStorage::new();
        store.put_state("DID5", b"x").unwrap();
        assert!(keys(&store, "DID9", Some("DID0")).is_empty());
    }

    #[test]
    fn empty_value_is_rejected() {
        let mut store = MockStorage::new();
        assert!(store.put_state("DID0", b"").is_err());
    }
}
