use std::{fs, io::ErrorKind, path::PathBuf};

use super::{
    account::Ledger,
    storage::{LedgerStorage, StoreError},
};

/* Persists the ledger as a single pretty-printed JSON file.
 * Saves write a sibling temp file and rename it over the ledger,
 * so readers never see a half-written document.
 */
#[derive(Debug, Clone)]
pub struct JsonFileStorage {
    path: PathBuf,
}

impl JsonFileStorage {
    pub fn new(path: impl Into<PathBuf>) -> JsonFileStorage {
        JsonFileStorage { path: path.into() }
    }

    fn temp_path(&self) -> PathBuf {
        let mut file_name = self.path.file_name().unwrap_or_default().to_os_string();
        file_name.push(".tmp");
        self.path.with_file_name(file_name)
    }
}

impl LedgerStorage for JsonFileStorage {
    fn load(&self) -> Result<Ledger, StoreError> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(Ledger::new()),
            Err(err) => {
                return Err(StoreError::CorruptDataError(format!(
                    "failed to read {}: {}",
                    self.path.display(),
                    err
                )))
            }
        };

        serde_json::from_str(&contents).map_err(|err| {
            StoreError::CorruptDataError(format!(
                "failed to parse {}: {}",
                self.path.display(),
                err
            ))
        })
    }

    fn save(&self, ledger: &Ledger) -> Result<(), StoreError> {
        let contents = serde_json::to_string_pretty(ledger)
            .map_err(|err| StoreError::PersistenceError(err.to_string()))?;

        let temp_path = self.temp_path();
        fs::write(&temp_path, contents).map_err(|err| {
            StoreError::PersistenceError(format!(
                "failed to write {}: {}",
                temp_path.display(),
                err
            ))
        })?;

        fs::rename(&temp_path, &self.path).map_err(|err| {
            StoreError::PersistenceError(format!(
                "failed to replace {}: {}",
                self.path.display(),
                err
            ))
        })
    }
}
