//! Domain types for the pet food log.

pub mod draft;
pub mod error;
pub mod id;
pub mod types;

pub use draft::RecordDraft;
pub use error::AppError;
pub use id::{new_record_id, resolve_record_prefix, validate_record_id};
pub use types::{Category, FoodRecord, OutputFormat, PetId, Reaction, Reactions};
