use anyhow::Result;
use clap::Parser;

mod analyze_cmd;
mod cli;
mod image;
mod record_cmds;

use cli::{Cli, Commands};

#[tokio::main]
async fn main() -> Result<()> {
    // Initialize tracing (output to stderr, initialize only once)
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init()
        .ok();

    let cli = Cli::parse();
    let format = cli.format;

    let data_dir = match cli.data_dir {
        Some(dir) => dir,
        None => petlog_store::paths::data_dir()?,
    };

    match cli.command {
        Commands::Add {
            name,
            brand,
            category,
            kodee,
            eda,
            notes,
            image,
        } => record_cmds::handle_add(
            &data_dir,
            record_cmds::AddArgs {
                name,
                brand,
                category,
                kodee,
                eda,
                notes,
                image,
            },
            format,
        ),
        Commands::Edit {
            id,
            name,
            brand,
            category,
            kodee,
            eda,
            notes,
            image,
            clear_image,
        } => record_cmds::handle_edit(
            &data_dir,
            &id,
            record_cmds::EditArgs {
                name,
                brand,
                category,
                kodee,
                eda,
                notes,
                image,
                clear_image,
            },
            format,
        ),
        Commands::List { search, category } => {
            record_cmds::handle_list(&data_dir, &search, category, format)
        }
        Commands::Show { id } => record_cmds::handle_show(&data_dir, &id, format),
        Commands::Title { title } => record_cmds::handle_title(&data_dir, title, format),
        Commands::Stats => record_cmds::handle_stats(&data_dir, format),
        Commands::Analyze { id } => analyze_cmd::handle_analyze(&data_dir, &id, format).await,
    }
}
