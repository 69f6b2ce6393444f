//! The owned record sequence and title, mirrored to local storage.
//!
//! Two independent entries under the data directory:
//! - `records.json` — the JSON-encoded record sequence, rewritten as a whole
//!   after every mutation
//! - `title` — the plain user-editable title string, written immediately on
//!   each change

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use tracing::warn;

use petlog_core::FoodRecord;

const RECORDS_FILE_NAME: &str = "records.json";
const TITLE_FILE_NAME: &str = "title";

/// Title used until the user sets their own.
pub const DEFAULT_TITLE: &str = "Pet Food Challenge";

/// Owner of the record sequence for the process lifetime.
#[derive(Debug, Clone)]
pub struct RecordStore {
    base_dir: PathBuf,
    records: Vec<FoodRecord>,
    title: String,
    /// Set once `load` has run. `persist` is a no-op before that, so a
    /// freshly constructed store can never clobber persisted data.
    loaded: bool,
}

impl RecordStore {
    /// Create a store rooted at `base_dir` without reading anything.
    pub fn new(base_dir: PathBuf) -> Self {
        Self {
            base_dir,
            records: Vec::new(),
            title: DEFAULT_TITLE.to_string(),
            loaded: false,
        }
    }

    /// Load persisted state from `base_dir`.
    ///
    /// A malformed or unreadable record blob is logged and replaced with an
    /// empty sequence; it never fails the caller. A missing title falls back
    /// to [`DEFAULT_TITLE`].
    pub fn load(base_dir: PathBuf) -> Self {
        let mut store = Self::new(base_dir);

        match store.read_records() {
            Ok(records) => store.records = records,
            Err(error) => {
                warn!(
                    path = %store.records_path().display(),
                    error = %format!("{error:#}"),
                    "failed to load records, starting with an empty sequence"
                );
            }
        }

        if let Some(title) = store.read_title() {
            store.title = title;
        }

        store.loaded = true;
        store
    }

    pub fn base_dir(&self) -> &Path {
        &self.base_dir
    }

    pub fn records(&self) -> &[FoodRecord] {
        &self.records
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn find(&self, id: &str) -> Option<&FoodRecord> {
        self.records.iter().find(|record| record.id == id)
    }

    /// Insert or update a record, then persist the sequence.
    ///
    /// A record whose id is already present replaces the existing one at its
    /// original position; a new id is prepended to the front.
    pub fn save_record(&mut self, record: FoodRecord) -> Result<()> {
        match self.records.iter().position(|r| r.id == record.id) {
            Some(index) => self.records[index] = record,
            None => self.records.insert(0, record),
        }

        self.persist()
    }

    /// Write the full sequence to `records.json` (atomic tmp-file rename).
    ///
    /// Skipped while the store has not completed its initial load.
    pub fn persist(&self) -> Result<()> {
        if !self.loaded {
            return Ok(());
        }

        self.ensure_base_dir()?;

        let contents =
            serde_json::to_string_pretty(&self.records).context("Failed to serialize records")?;

        let tmp_path = self.base_dir.join(format!("{RECORDS_FILE_NAME}.tmp"));
        fs::write(&tmp_path, contents)
            .with_context(|| format!("Failed to write records file: {}", tmp_path.display()))?;

        let records_path = self.records_path();
        fs::rename(&tmp_path, &records_path).with_context(|| {
            format!(
                "Failed to atomically replace records file: {}",
                records_path.display()
            )
        })?;

        Ok(())
    }

    /// Update the title and persist it immediately, independent of records.
    pub fn set_title(&mut self, title: impl Into<String>) -> Result<()> {
        self.title = title.into();
        self.ensure_base_dir()?;

        let title_path = self.title_path();
        fs::write(&title_path, &self.title)
            .with_context(|| format!("Failed to write title file: {}", title_path.display()))?;

        Ok(())
    }

    fn records_path(&self) -> PathBuf {
        self.base_dir.join(RECORDS_FILE_NAME)
    }

    fn title_path(&self) -> PathBuf {
        self.base_dir.join(TITLE_FILE_NAME)
    }

    fn ensure_base_dir(&self) -> Result<()> {
        fs::create_dir_all(&self.base_dir).with_context(|| {
            format!(
                "Failed to create data directory: {}",
                self.base_dir.display()
            )
        })
    }

    fn read_records(&self) -> Result<Vec<FoodRecord>> {
        let path = self.records_path();
        if !path.exists() {
            return Ok(Vec::new());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read records file: {}", path.display()))?;

        serde_json::from_str(&contents)
            .with_context(|| format!("Failed to parse records file: {}", path.display()))
    }

    fn read_title(&self) -> Option<String> {
        fs::read_to_string(self.title_path())
            .ok()
            .map(|raw| raw.trim_end_matches('\n').to_string())
            .filter(|title| !title.is_empty())
    }
}
