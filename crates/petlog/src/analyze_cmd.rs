//! The `analyze` command: run the configured analysis backend on one record.

use std::path::Path;

use anyhow::Result;

use petlog_analysis::FoodAnalysis;
use petlog_core::{OutputFormat, resolve_record_prefix};
use petlog_store::RecordStore;

pub(crate) async fn handle_analyze(data_dir: &Path, id: &str, format: OutputFormat) -> Result<()> {
    let store = RecordStore::load(data_dir.to_path_buf());
    let record = resolve_record_prefix(store.records(), id)?.clone();

    let client = petlog_analysis::client_from_env();
    let result = client
        .analyze(&record.name, &record.brand, &record.notes)
        .await;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&result)?);
        }
        OutputFormat::Text => {
            println!("{}", record.name);
            if result.tags.is_empty() {
                println!("Tags:    -");
            } else {
                println!("Tags:    {}", result.tags.join(", "));
            }
            if !result.summary.is_empty() {
                println!("Summary: {}", result.summary);
            }
            println!(
                "Safety:  {}",
                if result.is_generally_safe {
                    "generally safe"
                } else {
                    "check with a vet"
                }
            );
        }
    }

    Ok(())
}
