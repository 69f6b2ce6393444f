//! Editor contract: turn a submitted form into a record to save.

use chrono::Utc;

use crate::error::AppError;
use crate::id::new_record_id;
use crate::types::{Category, FoodRecord, Reactions};

/// The editable fields of a record, as submitted by the editor.
///
/// `build` is the single path from form input to a saveable record; it owns
/// the empty-name rejection and the id/timestamp rules for create vs. edit.
#[derive(Debug, Clone, Default)]
pub struct RecordDraft {
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub reactions: Reactions,
    pub notes: String,
    pub image: Option<String>,
}

impl RecordDraft {
    /// Pre-fill the editor from an existing record
    pub fn from_record(record: &FoodRecord) -> Self {
        Self {
            name: record.name.clone(),
            brand: record.brand.clone(),
            category: record.category,
            reactions: record.reactions,
            notes: record.notes.clone(),
            image: record.image.clone(),
        }
    }

    /// Produce the record to save.
    ///
    /// Editing (`existing` is `Some`) carries over the original id and
    /// creation timestamp; creating mints a fresh ULID and stamps now.
    /// A name that is empty after trimming rejects the submission.
    pub fn build(self, existing: Option<&FoodRecord>) -> Result<FoodRecord, AppError> {
        if self.name.trim().is_empty() {
            return Err(AppError::EmptyName);
        }

        let (id, recorded_at) = match existing {
            Some(record) => (record.id.clone(), record.recorded_at),
            None => (new_record_id(), Utc::now()),
        };

        Ok(FoodRecord {
            id,
            name: self.name,
            brand: self.brand,
            category: self.category,
            reactions: self.reactions,
            notes: self.notes,
            recorded_at,
            image: self.image,
        })
    }
}
