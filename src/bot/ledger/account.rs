use std::collections::BTreeMap;

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

/* A single user's account, keyed by user id in the Ledger.
 * Field names match the persisted document layout.
 */
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
pub struct AccountRecord {
    pub balance: u64,
    #[serde(rename = "last_mine", default)]
    pub last_reward_at: Option<NaiveDateTime>,
    #[serde(rename = "username", default)]
    pub display_name: String,
}

#[derive(Debug, PartialEq, Clone)]
pub struct LeaderboardEntry {
    pub rank: usize,
    pub user_id: String,
    pub display_name: String,
    pub balance: u64,
}

// All accounts, persisted as one JSON object.
#[derive(Serialize, Deserialize, Debug, PartialEq, Clone, Default)]
#[serde(transparent)]
pub struct Ledger {
    accounts: BTreeMap<String, AccountRecord>,
}

impl Ledger {
    pub fn new() -> Ledger {
        Ledger::default()
    }

    pub fn is_empty(&self) -> bool {
        self.accounts.is_empty()
    }

    pub fn len(&self) -> usize {
        self.accounts.len()
    }

    pub fn get(&self, user_id: &str) -> Option<&AccountRecord> {
        self.accounts.get(user_id)
    }

    // Fetches an account, creating an empty one if the user is new.
    pub fn get_or_create(&mut self, user_id: &str, display_name: &str) -> &mut AccountRecord {
        self.accounts
            .entry(user_id.to_string())
            .or_insert_with(|| AccountRecord {
                balance: 0,
                last_reward_at: None,
                display_name: display_name.to_string(),
            })
    }

    /* Accounts by balance, highest first, at most `limit` of them.
     * Equal balances are ordered by user id so the ranking is stable across reloads.
     */
    pub fn leaderboard(&self, limit: usize) -> Vec<LeaderboardEntry> {
        let mut accounts: Vec<(&String, &AccountRecord)> = self.accounts.iter().collect();
        accounts.sort_by(|(id_a, a), (id_b, b)| b.balance.cmp(&a.balance).then(id_a.cmp(id_b)));

        accounts
            .into_iter()
            .take(limit)
            .enumerate()
            .map(|(index, (user_id, account))| LeaderboardEntry {
                rank: index + 1,
                user_id: user_id.clone(),
                display_name: account.display_name.clone(),
                balance: account.balance,
            })
            .collect()
    }
}
