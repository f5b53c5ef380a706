//! # Persistence
//!
//! The whole data store is exported to one string slot (`"data"`). It is read
//! once at startup and written back on a fixed interval and on exit.
//!
//! The file-backed store keeps one JSON file per slot under the data
//! directory (`~/.nucleus/` by default). Writes use atomic rename (write
//! `.tmp`, then `rename()`) for crash safety.
//!
//! Save failures are logged and dropped; navigation never waits on storage.
//!
//! Stored data that cannot be read or imported is copied to `data.corrupt`
//! first. If that copy cannot be made, saving stays off for the session so
//! the only copy is never overwritten.

use log::{debug, info, warn};
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use crate::core::data::DataStore;
use crate::core::timer::Interval;

pub const DATA_SLOT: &str = "data";
/// Where unreadable data is copied before the app starts over with an empty store.
pub const CORRUPT_SLOT: &str = "data.corrupt";

/// String-keyed storage for serialized state.
pub trait SlotStore {
    /// `Ok(None)` when the slot was never written.
    fn read(&self, key: &str) -> io::Result<Option<String>>;

    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;

    /// Copy slot `from` to `to` byte for byte, whatever it contains.
    fn copy_raw(&mut self, from: &str, to: &str) -> io::Result<()>;
}

/// One `<key>.json` file per slot.
#[derive(Debug)]
pub struct FileStore {
    dir: PathBuf,
}

impl FileStore {
    /// Creates `dir` if needed.
    pub fn open(dir: impl Into<PathBuf>) -> io::Result<Self> {
        let dir = dir.into();
        fs::create_dir_all(&dir)?;
        Ok(Self { dir })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    fn slot_path(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{key}.json"))
    }
}

impl SlotStore for FileStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        match fs::read_to_string(self.slot_path(key)) {
            Ok(text) => Ok(Some(text)),
            Err(e) if e.kind() == io::ErrorKind::NotFound => Ok(None),
            Err(e) => Err(e),
        }
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        let path = self.slot_path(key);
        let tmp_path = path.with_extension("tmp");
        fs::write(&tmp_path, value)?;
        fs::rename(&tmp_path, &path)?;
        Ok(())
    }

    fn copy_raw(&mut self, from: &str, to: &str) -> io::Result<()> {
        fs::copy(self.slot_path(from), self.slot_path(to))?;
        Ok(())
    }
}

/// Volatile store for `--ephemeral` runs and tests.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slots: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_slot(mut self, key: &str, value: &str) -> Self {
        self.slots.insert(key.to_string(), value.to_string());
        self
    }
}

impl SlotStore for MemoryStore {
    fn read(&self, key: &str) -> io::Result<Option<String>> {
        Ok(self.slots.get(key).cloned())
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.slots.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn copy_raw(&mut self, from: &str, to: &str) -> io::Result<()> {
        let value = self
            .slots
            .get(from)
            .cloned()
            .ok_or_else(|| io::Error::new(io::ErrorKind::NotFound, from.to_string()))?;
        self.slots.insert(to.to_string(), value);
        Ok(())
    }
}

/// Loads the data store at startup and saves it every `interval`.
pub struct Persistence {
    store: Box<dyn SlotStore>,
    timer: Interval,
    saves: u64,
    saving_disabled: bool,
}

impl Persistence {
    pub fn new(store: Box<dyn SlotStore>, interval: Duration, now: Instant) -> Self {
        Self {
            store,
            timer: Interval::new(interval, now),
            saves: 0,
            saving_disabled: false,
        }
    }

    pub fn store(&self) -> &dyn SlotStore {
        self.store.as_ref()
    }

    /// Successful saves so far.
    pub fn saves(&self) -> u64 {
        self.saves
    }

    /// True after stored data could neither be loaded nor kept aside.
    pub fn saving_disabled(&self) -> bool {
        self.saving_disabled
    }

    pub fn time_until_save(&self, now: Instant) -> Duration {
        self.timer.time_until(now)
    }

    /// Import the stored slot into `data`.
    ///
    /// Data that cannot be imported is copied to `CORRUPT_SLOT` and `data`
    /// starts empty. A slot that cannot be read at all leaves `data` as it
    /// is. Either way, when no backup could be made, saving is disabled.
    pub fn load(&mut self, data: &mut dyn DataStore) {
        let stored = match self.store.read(DATA_SLOT) {
            Ok(stored) => stored,
            Err(e) => {
                warn!("Failed to read stored data: {}", e);
                if let Err(e) = self.store.copy_raw(DATA_SLOT, CORRUPT_SLOT) {
                    warn!("Failed to back up unreadable data: {}", e);
                }
                self.disable_saving();
                return;
            }
        };

        match data.import(stored.as_deref()) {
            Ok(()) => info!("Loaded {} nuclei from storage", data.nuclei().len()),
            Err(e) => {
                warn!("Stored data could not be imported: {}", e);
                if let Some(raw) = stored
                    && let Err(e) = self.store.write(CORRUPT_SLOT, &raw)
                {
                    warn!("Failed to back up unreadable data: {}", e);
                    self.disable_saving();
                }
                if let Err(e) = data.import(None) {
                    warn!("Failed to reset data store: {}", e);
                }
            }
        }
    }

    fn disable_saving(&mut self) {
        warn!("Saving disabled for this session to keep {} intact", DATA_SLOT);
        self.saving_disabled = true;
    }

    /// Export `data` into the slot. Returns whether the write happened.
    pub fn save(&mut self, data: &dyn DataStore) -> bool {
        if self.saving_disabled {
            debug!("Save skipped, saving is disabled");
            return false;
        }
        let exported = match data.export() {
            Ok(text) => text,
            Err(e) => {
                warn!("Failed to export data: {}", e);
                return false;
            }
        };
        match self.store.write(DATA_SLOT, &exported) {
            Ok(()) => {
                self.saves += 1;
                debug!("Saved {} bytes", exported.len());
                true
            }
            Err(e) => {
                warn!("Failed to save data: {}", e);
                false
            }
        }
    }

    /// Save if the interval has elapsed.
    pub fn tick(&mut self, now: Instant, data: &dyn DataStore) -> bool {
        self.timer.poll(now) && self.save(data)
    }
}
