use std::sync::{Mutex, MutexGuard, PoisonError};

use chrono::{Duration, Local, NaiveDateTime, SubsecRound};

use super::ledger::{LeaderboardEntry, LedgerStorage, StoreError};

/* Processor is the overall logic center of the bot.
 * It holds the reward rules, communicating with the front-facing handler
 * and the back-facing ledger storage.
 * Every operation runs a full load (and, when mutating, save) cycle against storage,
 * so a failed command leaves nothing behind for the next one.
 */

pub const REWARD_AMOUNT: u64 = 1000;
pub const COOLDOWN_SECONDS: i64 = 60 * 60;
pub const LEADERBOARD_LIMIT: usize = 10;

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ProcessError {
    #[error("{0}")]
    StoreError(StoreError),
    #[error("Balance of user {0} cannot hold another reward")]
    BalanceOverflowError(String),
}

// Implement the From trait to convert from StoreError to ProcessError
impl From<StoreError> for ProcessError {
    fn from(store_error: StoreError) -> ProcessError {
        ProcessError::StoreError(store_error)
    }
}

#[derive(Debug, PartialEq, Clone)]
pub enum ClaimOutcome {
    Granted { balance: u64 },
    Denied { remaining: Duration },
}

impl ClaimOutcome {
    // Remaining wait split into whole minutes and leftover seconds, for display.
    pub fn remaining_parts(&self) -> Option<(i64, i64)> {
        match self {
            ClaimOutcome::Denied { remaining } => {
                let seconds = remaining.num_seconds();
                Some((seconds / 60, seconds % 60))
            }
            ClaimOutcome::Granted { .. } => None,
        }
    }
}

// Current local time, at the microsecond precision the ledger file uses.
pub fn current_time() -> NaiveDateTime {
    Local::now().naive_local().trunc_subsecs(6)
}

pub fn cooldown() -> Duration {
    Duration::seconds(COOLDOWN_SECONDS)
}

/* Remaining cooldown for an account, if it is still cooling down.
 * An account never rewarded, or rewarded at least one cooldown ago, is eligible.
 */
pub fn remaining_cooldown(
    last_reward_at: Option<NaiveDateTime>,
    now: NaiveDateTime,
) -> Option<Duration> {
    let last_reward_at = last_reward_at?;
    let elapsed = now - last_reward_at;
    if elapsed < cooldown() {
        Some(cooldown() - elapsed)
    } else {
        None
    }
}

pub struct RewardController<S: LedgerStorage> {
    storage: S,
    lock: Mutex<()>,
}

impl<S: LedgerStorage> RewardController<S> {
    pub fn new(storage: S) -> RewardController<S> {
        RewardController {
            storage,
            lock: Mutex::new(()),
        }
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    // The guard protects no data, so a panic elsewhere must not lock everyone out.
    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /* Claims the hourly reward for a user.
     * Execution flow: load ledger, fetch or create account, check cooldown.
     * If eligible, credits the reward, stamps the claim time, refreshes the display name, saves.
     * A denied claim does not touch storage beyond the load.
     */
    pub fn claim_reward(
        &self,
        user_id: &str,
        display_name: &str,
        now: NaiveDateTime,
    ) -> Result<ClaimOutcome, ProcessError> {
        let _guard = self.acquire();

        let mut ledger = self.storage.load()?;
        let account = ledger.get_or_create(user_id, display_name);

        if let Some(remaining) = remaining_cooldown(account.last_reward_at, now) {
            return Ok(ClaimOutcome::Denied { remaining });
        }

        account.balance = account
            .balance
            .checked_add(REWARD_AMOUNT)
            .ok_or_else(|| ProcessError::BalanceOverflowError(user_id.to_string()))?;
        account.last_reward_at = Some(now);
        account.display_name = display_name.to_string();
        let balance = account.balance;

        self.storage.save(&ledger)?;
        Ok(ClaimOutcome::Granted { balance })
    }

    /* Retrieves a user's balance.
     * None if the user has never claimed a reward.
     */
    pub fn get_balance(&self, user_id: &str) -> Result<Option<u64>, ProcessError> {
        let _guard = self.acquire();
        let ledger = self.storage.load()?;
        Ok(ledger.get(user_id).map(|account| account.balance))
    }

    /* Retrieves the top accounts by balance.
     * Empty if no one has any account yet.
     */
    pub fn get_leaderboard(&self, limit: usize) -> Result<Vec<LeaderboardEntry>, ProcessError> {
        let _guard = self.acquire();
        let ledger = self.storage.load()?;
        Ok(ledger.leaderboard(limit))
    }
}
