use super::account::Ledger;

/* Storage is the seam between the ledger and wherever it is persisted.
 * The whole ledger is loaded and saved as one document. Implementations do not
 * lock; callers that mutate must serialize the load-modify-save cycle themselves.
 */

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum StoreError {
    #[error("Ledger data is corrupt: {0}")]
    CorruptDataError(String),
    #[error("Ledger could not be persisted: {0}")]
    PersistenceError(String),
}

pub trait LedgerStorage: Send + Sync {
    // Returns an empty ledger if nothing has been persisted yet.
    fn load(&self) -> Result<Ledger, StoreError>;

    // Overwrites any previously persisted ledger.
    fn save(&self, ledger: &Ledger) -> Result<(), StoreError>;
}
