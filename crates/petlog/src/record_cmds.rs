//! Record commands: add, edit, list, show, title, stats.

use std::path::{Path, PathBuf};

use anyhow::Result;
use tracing::info;

use petlog_core::{
    Category, FoodRecord, OutputFormat, PetId, Reaction, Reactions, RecordDraft,
    resolve_record_prefix,
};
use petlog_store::{CategoryFilter, RecordStore, filter_records, summarize};

use crate::image::data_url_from_file;

/// Form fields for `add`
pub(crate) struct AddArgs {
    pub name: String,
    pub brand: String,
    pub category: Category,
    pub kodee: Reaction,
    pub eda: Reaction,
    pub notes: String,
    pub image: Option<PathBuf>,
}

/// Field overrides for `edit`; `None` leaves the stored value alone
#[derive(Default)]
pub(crate) struct EditArgs {
    pub name: Option<String>,
    pub brand: Option<String>,
    pub category: Option<Category>,
    pub kodee: Option<Reaction>,
    pub eda: Option<Reaction>,
    pub notes: Option<String>,
    pub image: Option<PathBuf>,
    pub clear_image: bool,
}

pub(crate) fn handle_add(data_dir: &Path, args: AddArgs, format: OutputFormat) -> Result<()> {
    let mut store = RecordStore::load(data_dir.to_path_buf());

    let image = match args.image {
        Some(path) => Some(data_url_from_file(&path)?),
        None => None,
    };

    let draft = RecordDraft {
        name: args.name,
        brand: args.brand,
        category: args.category,
        reactions: Reactions::new(args.kodee, args.eda),
        notes: args.notes,
        image,
    };

    let record = draft.build(None)?;
    info!(id = %record.id, name = %record.name, "adding record");
    store.save_record(record.clone())?;

    print_saved(&record, "Saved", format)?;
    Ok(())
}

pub(crate) fn handle_edit(
    data_dir: &Path,
    id: &str,
    args: EditArgs,
    format: OutputFormat,
) -> Result<()> {
    let mut store = RecordStore::load(data_dir.to_path_buf());
    let existing = resolve_record_prefix(store.records(), id)?.clone();

    let mut draft = RecordDraft::from_record(&existing);
    if let Some(name) = args.name {
        draft.name = name;
    }
    if let Some(brand) = args.brand {
        draft.brand = brand;
    }
    if let Some(category) = args.category {
        draft.category = category;
    }
    if let Some(kodee) = args.kodee {
        draft.reactions.kodee = kodee;
    }
    if let Some(eda) = args.eda {
        draft.reactions.eda = eda;
    }
    if let Some(notes) = args.notes {
        draft.notes = notes;
    }
    if args.clear_image {
        draft.image = None;
    } else if let Some(path) = args.image {
        draft.image = Some(data_url_from_file(&path)?);
    }

    let record = draft.build(Some(&existing))?;
    info!(id = %record.id, "updating record");
    store.save_record(record.clone())?;

    print_saved(&record, "Updated", format)?;
    Ok(())
}

pub(crate) fn handle_list(
    data_dir: &Path,
    search: &str,
    category: Option<Category>,
    format: OutputFormat,
) -> Result<()> {
    let store = RecordStore::load(data_dir.to_path_buf());
    let view = filter_records(store.records(), search, CategoryFilter::from(category));

    if view.is_empty() {
        match format {
            OutputFormat::Json => println!("[]"),
            OutputFormat::Text => eprintln!("No matching records."),
        }
        return Ok(());
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&view)?);
        }
        OutputFormat::Text => {
            println!("{}\n", store.title());
            println!(
                "{:<11}  {:<16}  {:<6}  {:<15}  {:<30}  {:<8}  {:<8}",
                "RECORD", "DATE", "CAT", "BRAND", "NAME", "KODEE", "EDA"
            );
            println!("{}", "-".repeat(106));
            for record in view {
                // Truncate ULID to 11 chars for readability; char-based so a
                // hand-edited blob with a non-ASCII id cannot panic here
                let short_id: String = record.id.chars().take(11).collect();
                let brand = if record.brand.is_empty() {
                    "-"
                } else {
                    record.brand.as_str()
                };
                println!(
                    "{:<11}  {:<16}  {:<6}  {:<15}  {:<30}  {:<8}  {:<8}",
                    short_id,
                    record.recorded_at.format("%Y-%m-%d %H:%M"),
                    record.category.as_str(),
                    truncate(brand, 15),
                    truncate(&record.name, 30),
                    record.reactions.kodee.as_str(),
                    record.reactions.eda.as_str(),
                );
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_show(data_dir: &Path, id: &str, format: OutputFormat) -> Result<()> {
    let store = RecordStore::load(data_dir.to_path_buf());
    let record = resolve_record_prefix(store.records(), id)?;

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text => {
            println!("{}", record.name);
            if !record.brand.is_empty() {
                println!("Brand:    {}", record.brand);
            }
            println!("Record:   {}", record.id);
            println!("Category: {}", record.category.as_str());
            println!("Date:     {}", record.recorded_at.format("%Y-%m-%d %H:%M"));
            for pet in PetId::ALL {
                println!(
                    "{:<9} {}",
                    format!("{}:", pet.display_name()),
                    record.reactions.get(pet).as_str()
                );
            }
            if !record.notes.is_empty() {
                println!("\n{}", record.notes);
            }
            if let Some(image) = &record.image {
                println!("\nImage:    embedded ({} bytes)", image.len());
            }
        }
    }

    Ok(())
}

pub(crate) fn handle_title(
    data_dir: &Path,
    title: Option<String>,
    format: OutputFormat,
) -> Result<()> {
    let mut store = RecordStore::load(data_dir.to_path_buf());

    if let Some(title) = title {
        store.set_title(title)?;
    }

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::json!({ "title": store.title() }));
        }
        OutputFormat::Text => println!("{}", store.title()),
    }

    Ok(())
}

pub(crate) fn handle_stats(data_dir: &Path, format: OutputFormat) -> Result<()> {
    let store = RecordStore::load(data_dir.to_path_buf());
    let stats = summarize(store.records());

    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(&stats)?);
        }
        OutputFormat::Text => {
            println!("Records: {}", stats.total);
            println!();
            println!("Both like:        {}", stats.both_like);
            println!("Only Kodee likes: {}", stats.only_kodee_likes);
            println!("Only Eda likes:   {}", stats.only_eda_likes);
            println!("Neither likes:    {}", stats.neither_likes);
            println!();
            println!(
                "By category: wet {}, puree {}, treat {}",
                stats.by_category.wet, stats.by_category.puree, stats.by_category.treat
            );
        }
    }

    Ok(())
}

fn print_saved(record: &FoodRecord, verb: &str, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            println!("{}", serde_json::to_string_pretty(record)?);
        }
        OutputFormat::Text => {
            println!("{verb} {}  {}", record.id, record.name);
        }
    }
    Ok(())
}

fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() > max {
        let cut: String = text.chars().take(max.saturating_sub(3)).collect();
        format!("{cut}...")
    } else {
        text.to_string()
    }
}

#[cfg(test)]
#[path = "record_cmds_tests.rs"]
mod tests;
