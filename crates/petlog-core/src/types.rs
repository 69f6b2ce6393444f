//! Record types shared by every crate in the workspace.

use chrono::{DateTime, Utc};
use clap::ValueEnum;
use serde::{Deserialize, Serialize};

/// Food form factor
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Wet,
    Puree,
    Treat,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Wet, Category::Puree, Category::Treat];

    /// Returns the CLI-facing name for this category
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Wet => "wet",
            Self::Puree => "puree",
            Self::Treat => "treat",
        }
    }
}

/// One pet's response to a food
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Reaction {
    #[default]
    Like,
    /// "ok" is accepted on read for blobs exported from the original app.
    #[serde(alias = "ok")]
    Neutral,
    Dislike,
}

impl Reaction {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Like => "like",
            Self::Neutral => "neutral",
            Self::Dislike => "dislike",
        }
    }
}

/// The two pets whose reactions are tracked
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PetId {
    Kodee,
    Eda,
}

impl PetId {
    pub const ALL: [PetId; 2] = [PetId::Kodee, PetId::Eda];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Kodee => "kodee",
            Self::Eda => "eda",
        }
    }

    /// Display name as shown in list/preview output
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Kodee => "KODEE",
            Self::Eda => "EDA",
        }
    }
}

/// Both pets' reactions to one food.
///
/// A struct with one field per pet rather than a map: every record carries
/// exactly the two known pet entries, by construction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Reactions {
    pub kodee: Reaction,
    pub eda: Reaction,
}

impl Reactions {
    pub fn new(kodee: Reaction, eda: Reaction) -> Self {
        Self { kodee, eda }
    }

    pub fn get(&self, pet: PetId) -> Reaction {
        match pet {
            PetId::Kodee => self.kodee,
            PetId::Eda => self.eda,
        }
    }

    pub fn set(&mut self, pet: PetId, reaction: Reaction) {
        match pet {
            PetId::Kodee => self.kodee = reaction,
            PetId::Eda => self.eda = reaction,
        }
    }
}

/// One logged food item plus both pets' reactions to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FoodRecord {
    /// ULID identifier (26 characters, Crockford Base32). Immutable after creation.
    pub id: String,

    /// Food name (required, non-empty after trimming)
    pub name: String,

    /// Brand; empty string when not provided
    #[serde(default)]
    pub brand: String,

    /// Food form factor
    pub category: Category,

    /// Both pets' reactions
    pub reactions: Reactions,

    /// Free-form notes, may be empty
    #[serde(default)]
    pub notes: String,

    /// When this record was created. Preserved across edits.
    pub recorded_at: DateTime<Utc>,

    /// Embedded image as a data URL. Contents are not validated.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub image: Option<String>,
}

/// Output format for CLI commands
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn sample_record() -> FoodRecord {
        FoodRecord {
            id: "01ARZ3NDEKTSV4RRFFQ69G5FAV".to_string(),
            name: "Chicken freeze-dried".to_string(),
            brand: "Wang Meow".to_string(),
            category: Category::Treat,
            reactions: Reactions::new(Reaction::Like, Reaction::Dislike),
            notes: String::new(),
            recorded_at: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
            image: None,
        }
    }

    #[test]
    fn test_category_round_trip() {
        for category in Category::ALL {
            let json = serde_json::to_string(&category).unwrap();
            assert_eq!(json, format!("\"{}\"", category.as_str()));
            let back: Category = serde_json::from_str(&json).unwrap();
            assert_eq!(back, category);
        }
    }

    #[test]
    fn test_reaction_accepts_legacy_ok_spelling() {
        let reaction: Reaction = serde_json::from_str("\"ok\"").unwrap();
        assert_eq!(reaction, Reaction::Neutral);
        // New writes always use "neutral"
        assert_eq!(serde_json::to_string(&reaction).unwrap(), "\"neutral\"");
    }

    #[test]
    fn test_reactions_get_set() {
        let mut reactions = Reactions::default();
        assert_eq!(reactions.get(PetId::Kodee), Reaction::Like);
        reactions.set(PetId::Eda, Reaction::Dislike);
        assert_eq!(reactions.get(PetId::Eda), Reaction::Dislike);
        assert_eq!(reactions.kodee, Reaction::Like);
    }

    #[test]
    fn test_record_round_trip_preserves_all_fields() {
        let record = sample_record();
        let json = serde_json::to_string(&record).unwrap();
        let back: FoodRecord = serde_json::from_str(&json).unwrap();
        assert_eq!(back, record);
    }

    #[test]
    fn test_record_image_omitted_when_absent() {
        let json = serde_json::to_string(&sample_record()).unwrap();
        assert!(!json.contains("image"));
    }

    #[test]
    fn test_record_tolerates_missing_optional_fields() {
        // brand/notes/image absent: the blob still parses
        let json = r#"{
            "id": "01ARZ3NDEKTSV4RRFFQ69G5FAV",
            "name": "Tuna puree",
            "category": "puree",
            "reactions": {"kodee": "like", "eda": "ok"},
            "recorded_at": "2026-01-15T09:30:00Z"
        }"#;
        let record: FoodRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.brand, "");
        assert_eq!(record.notes, "");
        assert_eq!(record.image, None);
        assert_eq!(record.reactions.eda, Reaction::Neutral);
    }
}
