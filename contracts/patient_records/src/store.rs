use alloc::vec;
use alloc::vec::Vec;

use soroban_sdk::{contracttype, Bytes, Env, String};

const TTL_THRESHOLD: u32 = 17_280;
const TTL_EXTEND_TO: u32 = 518_400;

/// Failure reported by a ledger read or write primitive.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct StoreError;

/// Key-value state supplied by the hosting ledger.
pub trait LedgerStore {
    /// Returns the bytes stored under `key`, or `None` if nothing was ever written.
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError>;

    /// Stores `value` under `key`, replacing any previous value.
    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError>;
}

/// Storage keys for the contract
#[contracttype]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum DataKey {
    Patient(String),
}

/// Ledger store backed by the contract's persistent storage.
///
/// Only writes extend an entry's TTL. Reads leave it untouched, so a record
/// that is never rewritten expires on the host's schedule.
pub struct PersistentLedger<'a> {
    env: &'a Env,
}

impl<'a> PersistentLedger<'a> {
    pub fn new(env: &'a Env) -> Self {
        Self { env }
    }

    fn key(&self, key: &str) -> DataKey {
        DataKey::Patient(String::from_str(self.env, key))
    }
}

impl LedgerStore for PersistentLedger<'_> {
    fn get_state(&self, key: &str) -> Result<Option<Vec<u8>>, StoreError> {
        let stored: Option<Bytes> = self.env.storage().persistent().get(&self.key(key));
        Ok(stored.map(|bytes| {
            let mut buf = vec![0u8; bytes.len() as usize];
            bytes.copy_into_slice(&mut buf);
            buf
        }))
    }

    fn put_state(&self, key: &str, value: &[u8]) -> Result<(), StoreError> {
        let key = self.key(key);
        let storage = self.env.storage().persistent();
        storage.set(&key, &Bytes::from_slice(self.env, value));
        storage.extend_ttl(&key, TTL_THRESHOLD, TTL_EXTEND_TO);
        Ok(())
    }
}
