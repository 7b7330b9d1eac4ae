// Exported structs and types
pub use self::account::{AccountRecord, Ledger, LeaderboardEntry};
pub use self::file::JsonFileStorage;
pub use self::memory::MemoryStorage;
pub use self::storage::{LedgerStorage, StoreError};

// Submodules
mod account;
mod file;
mod memory;
mod storage;
