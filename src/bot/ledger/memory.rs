use std::sync::{Arc, RwLock};

use super::{
    account::Ledger,
    storage::{LedgerStorage, StoreError},
};

// An in-memory ledger storage for testing and development.
#[derive(Default, Debug, Clone)]
pub struct MemoryStorage {
    ledger: Arc<RwLock<Option<Ledger>>>,
}

impl MemoryStorage {
    pub fn new() -> MemoryStorage {
        MemoryStorage::default()
    }

    // Whether anything has ever been saved.
    pub fn is_persisted(&self) -> bool {
        self.ledger.read().map(|l| l.is_some()).unwrap_or(false)
    }
}

impl LedgerStorage for MemoryStorage {
    fn load(&self) -> Result<Ledger, StoreError> {
        let ledger = self
            .ledger
            .read()
            .map_err(|err| StoreError::CorruptDataError(err.to_string()))?;
        Ok(ledger.clone().unwrap_or_default())
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let mut stored = self
            .ledger
            .write()
            .map_err(|err| StoreError::PersistenceError(err.to_string()))?;
        *stored = Some(ledger.clone());
        Ok(())
    }
}

// Tests
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_memory_storage() {
        let storage = MemoryStorage::new();
        assert!(!storage.is_persisted());
        assert!(storage.load().unwrap().is_empty());

        let mut ledger = Ledger::new();
        ledger.get_or_create("42", "miner").balance = 1000;
        storage.save(&ledger).unwrap();

        assert!(storage.is_persisted());
        assert_eq!(storage.load().unwrap(), ledger);
    }
}
