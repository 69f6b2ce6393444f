//! Derived browse view: text/category filtering and display order.

use petlog_core::{Category, FoodRecord};

/// Category restriction for the browse view
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum CategoryFilter {
    #[default]
    All,
    Only(Category),
}

impl CategoryFilter {
    fn matches(&self, category: Category) -> bool {
        match self {
            Self::All => true,
            Self::Only(only) => *only == category,
        }
    }
}

impl From<Option<Category>> for CategoryFilter {
    fn from(category: Option<Category>) -> Self {
        match category {
            Some(category) => Self::Only(category),
            None => Self::All,
        }
    }
}

/// Records matching a case-insensitive substring on name-or-brand AND the
/// category filter, newest first.
pub fn filter_records<'a>(
    records: &'a [FoodRecord],
    search: &str,
    filter: CategoryFilter,
) -> Vec<&'a FoodRecord> {
    let needle = search.to_lowercase();

    let mut matched: Vec<&FoodRecord> = records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&needle)
                || record.brand.to_lowercase().contains(&needle)
        })
        .filter(|record| filter.matches(record.category))
        .collect();

    matched.sort_by(|a, b| b.recorded_at.cmp(&a.recorded_at));
    matched
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{TimeZone, Utc};
    use petlog_core::Reactions;

    fn record(id: &str, name: &str, brand: &str, category: Category, day: u32) -> FoodRecord {
        FoodRecord {
            id: id.to_string(),
            name: name.to_string(),
            brand: brand.to_string(),
            category,
            reactions: Reactions::default(),
            notes: String::new(),
            recorded_at: Utc.with_ymd_and_hms(2026, 3, day, 12, 0, 0).unwrap(),
            image: None,
        }
    }

    fn sample() -> Vec<FoodRecord> {
        vec![
            // Insertion order is deliberately not date order
            record("01A", "Chicken jelly", "Ciao", Category::Wet, 2),
            record("01B", "Tuna TREAT bites", "", Category::Treat, 5),
            record("01C", "Salmon puree", "Wang Meow", Category::Puree, 3),
        ]
    }

    #[test]
    fn test_unfiltered_is_sorted_newest_first() {
        let records = sample();
        let view = filter_records(&records, "", CategoryFilter::All);
        let ids: Vec<&str> = view.iter().map(|r| r.id.as_str()).collect();
        assert_eq!(ids, vec!["01B", "01C", "01A"]);
    }

    #[test]
    fn test_category_filter_returns_only_that_category() {
        let records = sample();
        let view = filter_records(&records, "", CategoryFilter::Only(Category::Treat));
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "01B");
    }

    #[test]
    fn test_text_filter_matches_name_case_insensitively() {
        let records = sample();
        let view = filter_records(&records, "treat", CategoryFilter::All);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "01B");
    }

    #[test]
    fn test_text_filter_matches_brand() {
        let records = sample();
        let view = filter_records(&records, "wang", CategoryFilter::All);
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "01C");
    }

    #[test]
    fn test_text_and_category_filters_combine() {
        let records = sample();
        let view = filter_records(&records, "a", CategoryFilter::Only(Category::Wet));
        // "Chicken jelly"/"Ciao" matches "a" via brand; only wet survives
        assert_eq!(view.len(), 1);
        assert_eq!(view[0].id, "01A");
    }

    #[test]
    fn test_no_match_yields_empty_view() {
        let records = sample();
        let view = filter_records(&records, "beef", CategoryFilter::All);
        assert!(view.is_empty());
    }

    #[test]
    fn test_newer_record_sorts_first_and_survives_category_filter() {
        // A(t1, wet) and B(t2 > t1, treat): order [B, A]; treat filter -> [B]
        let records = vec![
            record("A", "canned chicken", "", Category::Wet, 1),
            record("B", "duck jerky", "", Category::Treat, 9),
        ];
        let all = filter_records(&records, "", CategoryFilter::All);
        assert_eq!(
            all.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["B", "A"]
        );
        let treats = filter_records(&records, "", CategoryFilter::Only(Category::Treat));
        assert_eq!(
            treats.iter().map(|r| r.id.as_str()).collect::<Vec<_>>(),
            vec!["B"]
        );
    }
}
