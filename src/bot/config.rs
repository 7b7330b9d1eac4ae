use std::{env, path::PathBuf};

/* Config holds everything the bot needs at startup.
 * Built once in main and handed to the dispatcher, which passes the ledger path
 * down to the storage layer. Nothing here is read from global state afterwards.
 */

pub const TOKEN_VAR: &str = "TELOXIDE_TOKEN";
pub const LEDGER_FILE_VAR: &str = "LEDGER_FILE";
pub const LEDGER_FILE_DEFAULT: &str = "user_data.json";

#[derive(thiserror::Error, Debug, PartialEq)]
pub enum ConfigError {
    #[error("Missing environment variable: {0}")]
    MissingVar(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct Config {
    pub token: String,
    pub ledger_file: PathBuf,
}

impl Config {
    pub fn new(token: &str, ledger_file: impl Into<PathBuf>) -> Config {
        Config {
            token: token.to_string(),
            ledger_file: ledger_file.into(),
        }
    }

    // Reads the config from the process environment.
    pub fn from_env() -> Result<Config, ConfigError> {
        Config::from_lookup(|key| env::var(key).ok())
    }

    fn from_lookup<F>(lookup: F) -> Result<Config, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let token = match lookup(TOKEN_VAR) {
            Some(token) if !token.trim().is_empty() => token,
            _ => return Err(ConfigError::MissingVar(TOKEN_VAR.to_string())),
        };

        let ledger_file = lookup(LEDGER_FILE_VAR)
            .filter(|path| !path.trim().is_empty())
            .unwrap_or_else(|| LEDGER_FILE_DEFAULT.to_string());

        Ok(Config::new(&token, ledger_file))
    }
}
