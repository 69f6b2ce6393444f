//! Aggregate counts over the record sequence.

use serde::Serialize;

use petlog_core::{Category, FoodRecord, Reaction};

/// Per-category record counts
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct CategoryCounts {
    pub wet: usize,
    pub puree: usize,
    pub treat: usize,
}

impl CategoryCounts {
    pub fn get(&self, category: Category) -> usize {
        match category {
            Category::Wet => self.wet,
            Category::Puree => self.puree,
            Category::Treat => self.treat,
        }
    }
}

/// Who-likes-what summary across all records
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ReactionStats {
    pub total: usize,
    pub both_like: usize,
    pub only_kodee_likes: usize,
    pub only_eda_likes: usize,
    pub neither_likes: usize,
    pub by_category: CategoryCounts,
}

/// Compute stats over the full (unfiltered) sequence.
pub fn summarize(records: &[FoodRecord]) -> ReactionStats {
    let mut stats = ReactionStats {
        total: records.len(),
        ..Default::default()
    };

    for record in records {
        let kodee_likes = record.reactions.kodee == Reaction::Like;
        let eda_likes = record.reactions.eda == Reaction::Like;
        match (kodee_likes, eda_likes) {
            (true, true) => stats.both_like += 1,
            (true, false) => stats.only_kodee_likes += 1,
            (false, true) => stats.only_eda_likes += 1,
            (false, false) => stats.neither_likes += 1,
        }

        match record.category {
            Category::Wet => stats.by_category.wet += 1,
            Category::Puree => stats.by_category.puree += 1,
            Category::Treat => stats.by_category.treat += 1,
        }
    }

    stats
}
