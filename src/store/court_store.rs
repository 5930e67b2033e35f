use log::{error, info};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard};

use crate::config::settings::StoreSettings;
use crate::domain::CourtCollection;
use crate::errors::StoreError;

/// Flat-file store holding the whole court collection as one JSON document.
///
/// Reads and writes always move the full collection. The external scripts
/// write the same file directly; within this process the mutex keeps a
/// recovery write from interleaving with a save.
pub struct CourtStore {
    path: PathBuf,
    court_count: usize,
    default_status: String,
    lock: Mutex<()>,
}

impl CourtStore {
    pub fn new<P: AsRef<Path>>(path: P, court_count: usize, default_status: &str) -> Self {
        Self {
            path: path.as_ref().to_path_buf(),
            court_count,
            default_status: default_status.to_string(),
            lock: Mutex::new(()),
        }
    }

    pub fn from_settings(settings: &StoreSettings) -> Self {
        Self::new(&settings.data_file, settings.court_count, &settings.default_status)
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Current collection. Never fails: a file that is missing, unreadable,
    /// not JSON or not an array is replaced by freshly initialized courts,
    /// which are persisted right away. Record contents are never validated.
    pub fn load(&self) -> CourtCollection {
        let _guard = self.acquire();

        match self.read_file() {
            Ok(courts) => courts,
            Err(e) => {
                error!("{}; initializing {} default courts", e, self.court_count);
                let courts = self.initial();
                if let Err(e) = self.write_file(&courts) {
                    error!("Could not persist default courts: {}", e);
                }
                courts
            }
        }
    }

    /// Replace the persisted collection in full
    pub fn save(&self, courts: &CourtCollection) -> Result<(), StoreError> {
        let _guard = self.acquire();
        self.write_file(courts)
    }

    /// Read without recovery; used where the caller wants to see the failure
    pub fn try_load(&self) -> Result<CourtCollection, StoreError> {
        let _guard = self.acquire();
        self.read_file()
    }

    /// Overwrite the file with default courts regardless of its contents
    pub fn reset(&self) -> Result<CourtCollection, StoreError> {
        let _guard = self.acquire();
        let courts = self.initial();
        self.write_file(&courts)?;
        info!("Reset {} to {} default courts", self.path.display(), courts.len());
        Ok(courts)
    }

    fn initial(&self) -> CourtCollection {
        CourtCollection::initial(self.court_count, &self.default_status)
    }

    fn acquire(&self) -> MutexGuard<'_, ()> {
        self.lock.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }

    fn read_file(&self) -> Result<CourtCollection, StoreError> {
        let json = fs::read_to_string(&self.path).map_err(|source| StoreError::Read {
            path: self.path.clone(),
            source,
        })?;

        serde_json::from_str(&json).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn write_file(&self, courts: &CourtCollection) -> Result<(), StoreError> {
        let json = serde_json::to_string_pretty(courts).map_err(StoreError::Serialize)?;

        let tmp_path = self.temp_path();
        fs::write(&tmp_path, json)
            .and_then(|_| fs::rename(&tmp_path, &self.path))
            .map_err(|source| StoreError::Write {
                path: self.path.clone(),
                source,
            })
    }

    fn temp_path(&self) -> PathBuf {
        let mut name = self
            .path
            .file_name()
            .map(|n| n.to_os_string())
            .unwrap_or_else(|| "courts.json".into());
        name.push(".tmp");
        self.path.with_file_name(name)
    }
}
