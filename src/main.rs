//! Value Hierarchy - catalogue, group and export personal value answers
//!
//! Command-line front end over the local store: every mutating command
//! loads the aggregate, applies one change, and saves it back.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use value_hierarchy::{
    config::ValueHierarchyConfig,
    export::{export, export_filename, ExportFormat},
    sample::sample_data,
    schema::{CATEGORIES, PURPOSE_INDEX},
    storage::{needs_entry, KeyValueStore, UserDataStore},
    UserData,
};

#[derive(Parser)]
#[command(name = "value-hierarchy")]
#[command(author = "Value Hierarchy Team")]
#[command(version)]
#[command(about = "Catalogue, group and export personal value answers")]
struct Cli {
    /// Configuration file path
    #[arg(short, long, env = "VALUE_HIERARCHY_CONFIG")]
    config: Option<PathBuf>,

    /// Override the storage directory
    #[arg(long)]
    data_dir: Option<PathBuf>,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List the eight categories
    Categories,

    /// Record one answer
    Answer {
        /// Category (1-8)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=8))]
        category: u32,

        /// Answer slot within the category (1-3)
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=3))]
        index: u32,

        /// Answer text
        #[arg(long)]
        text: String,

        /// What it is for (slot 2 only)
        #[arg(long)]
        purpose: Option<String>,
    },

    /// Manage value groups
    Group {
        #[command(subcommand)]
        action: GroupCommand,
    },

    /// Write the reflection for a group
    Insight {
        /// Group ID
        #[arg(short, long)]
        group: String,

        /// Reflection text
        #[arg(short, long)]
        reflection: String,
    },

    /// Print the text report
    Show,

    /// Export to a file
    Export {
        /// json or text
        #[arg(short, long, default_value = "json")]
        format: ExportFormat,

        /// Output path (defaults to value-hierarchy-YYYY-MM-DD.<ext>)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// Replace stored data with the demo data set
    Sample,

    /// Delete stored data
    Reset,

    /// Show configuration
    Config {
        /// Show default configuration
        #[arg(long)]
        default: bool,
    },
}

#[derive(Subcommand)]
enum GroupCommand {
    /// Group answers under a label
    Create {
        /// Group label
        #[arg(short, long)]
        label: String,

        /// Answer IDs (1-24), comma separated
        #[arg(short, long, value_delimiter = ',', required = true)]
        answers: Vec<u32>,
    },

    /// Remove a group and its reflection
    Remove {
        /// Group ID
        id: String,
    },

    /// List groups with member counts
    List,
}

type Store = UserDataStore<Box<dyn KeyValueStore>>;

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| format!("value_hierarchy={}", log_level).into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    // Load configuration
    let mut config = match &cli.config {
        Some(path) => ValueHierarchyConfig::load(path)?,
        None => ValueHierarchyConfig::default(),
    };
    if let Some(dir) = cli.data_dir {
        config.storage.data_dir = dir;
    }

    let open_store = || -> Result<Store> {
        UserDataStore::from_config(&config.storage).context("Failed to open storage")
    };

    match cli.command {
        Commands::Categories => list_categories(),
        Commands::Answer {
            category,
            index,
            text,
            purpose,
        } => {
            if purpose.is_some() && index != PURPOSE_INDEX {
                tracing::warn!("Purpose is only shown for slot {}", PURPOSE_INDEX);
            }
            let store = open_store()?;
            let data = store
                .load_or_initial()
                .update_answer(category, index, text, purpose)?;
            persist(&store, &data)?;
            println!("Saved answer {}-{}", category, index);
        }
        Commands::Group { action } => run_group(&open_store()?, action)?,
        Commands::Insight { group, reflection } => {
            let store = open_store()?;
            let data = store.load_or_initial();
            if data.group(&group).is_none() {
                tracing::warn!("No group with id '{}'", group);
            }
            persist(&store, &data.set_insight(&group, reflection))?;
            println!("Saved reflection for {}", group);
        }
        Commands::Show => {
            let data = open_store()?.load();
            match data {
                Some(data) if !needs_entry(Some(&data)) => {
                    print!("{}", export(&data, ExportFormat::Text)?);
                }
                _ => println!("No answers yet. Start with `value-hierarchy answer`."),
            }
        }
        Commands::Export { format, output } => {
            let data = match open_store()?.load() {
                Some(data) if !needs_entry(Some(&data)) => data,
                _ => {
                    println!("No answers yet. Start with `value-hierarchy answer`.");
                    return Ok(());
                }
            };
            let content = export(&data, format)?;
            let path = output.unwrap_or_else(|| {
                PathBuf::from(export_filename(format, chrono::Local::now().date_naive()))
            });
            std::fs::write(&path, content)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            println!("Exported to {}", path.display());
        }
        Commands::Sample => {
            persist(&open_store()?, &sample_data())?;
            println!("Loaded sample data");
        }
        Commands::Reset => {
            open_store()?.reset()?;
            println!("Data reset");
        }
        Commands::Config { default } => {
            let shown = if default {
                ValueHierarchyConfig::default()
            } else {
                config.clone()
            };
            println!("{}", shown.to_toml()?);
        }
    }

    Ok(())
}

fn run_group(store: &Store, action: GroupCommand) -> Result<()> {
    match action {
        GroupCommand::Create { label, answers } => {
            let data = store.load_or_initial().create_group(&label, &answers)?;
            persist(store, &data)?;
            if let Some(group) = data.groups.last() {
                println!("Created group {} ({})", group.id, group.color);
            }
        }
        GroupCommand::Remove { id } => {
            let data = store.load_or_initial();
            if data.group(&id).is_none() {
                println!("No group with id '{}'", id);
                return Ok(());
            }
            persist(store, &data.remove_group(&id))?;
            println!("Removed group {}", id);
        }
        GroupCommand::List => {
            let data = store.load_or_initial();
            for summary in data.group_summaries() {
                println!(
                    "{}  {}  [{} answers]  {}",
                    summary.group_id, summary.label, summary.count, summary.color
                );
            }
        }
    }
    Ok(())
}

fn persist(store: &Store, data: &UserData) -> Result<()> {
    store.save(data).context("Failed to save data")?;
    Ok(())
}

fn list_categories() {
    for category in CATEGORIES.iter() {
        println!("{}. {}", category.id, category.title);
        println!("   {}", category.description);
        println!("   例: {}", category.examples.join(" / "));
    }
}
