// bot/mod.rs

// Exported functions
pub use self::dispatcher::run_dispatcher;

// Exported structs and types
pub use self::config::{Config, ConfigError};
pub use self::dispatcher::{BotError, Command, Controller, HandlerResult};
pub use self::ledger::{
    AccountRecord, JsonFileStorage, LeaderboardEntry, Ledger, LedgerStorage, MemoryStorage,
    StoreError,
};
pub use self::processor::{ClaimOutcome, ProcessError, RewardController};

// Declare submodules
mod config;
mod dispatcher;
mod handler;
mod ledger;
mod processor;
