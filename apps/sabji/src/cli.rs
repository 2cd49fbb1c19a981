//! CLI argument definitions using clap derive, and their dispatch.
//!
//! Every command prints JSON. List commands load and save a snapshot file
//! so lists survive between runs.

use std::path::{Path, PathBuf};
use std::sync::Arc;

use clap::{Args, Parser, Subcommand};
use sabji_core::types::{Category, MeasureUnit, Mode};
use sabji_core::Catalog;
use sabji_store::MemoryListRepository;
use serde::Serialize;
use serde_json::Value;
use tracing::{debug, info};

use crate::commands::lists::ListService;
use crate::commands::{catalog as catalog_cmd, config as config_cmd, pricing};
use crate::error::{ApiError, ErrorCode};
use crate::state::ConfigState;

#[derive(Parser, Debug)]
#[command(name = "sabji")]
#[command(version, about = "Vegetable, dairy and kirana price fan-out")]
#[command(long_about = "Turns one observed price into the full table of everyday quantities, \
with the amounts read out in Hindi and Marathi.")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Price every standard quantity from one observed price
    RateCard(PriceArgs),

    /// Price one custom quantity
    Quote {
        #[command(flatten)]
        price: PriceArgs,

        /// Quantity to price
        #[arg(long)]
        at: f64,

        /// Unit of --qty and --at (g, kg, ml, L); defaults to the mode's base measure
        #[arg(long)]
        unit: Option<MeasureUnit>,
    },

    /// Read an amount out in Hindi and Marathi
    Words {
        amount: f64,
    },

    /// Browse the item catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Manage shopping lists
    List {
        /// Snapshot file holding the lists
        #[arg(long, env = "SABJI_STORE", default_value = "sabji-lists.json")]
        store: PathBuf,

        #[command(subcommand)]
        command: ListCommands,
    },

    /// Show the active configuration
    Config,
}

/// An observed price: "<qty> of <item> costs <price>".
#[derive(Args, Debug, Clone)]
pub struct PriceArgs {
    /// Catalog item id (e.g. v1, d1, k3)
    #[arg(long)]
    pub item: String,

    /// Sale mode; defaults to the item's usual mode
    #[arg(long)]
    pub mode: Option<Mode>,

    /// Quantity the price was observed at (g, ml, packets or dozens)
    #[arg(long = "qty")]
    pub quantity: f64,

    /// Observed price in rupees
    #[arg(long)]
    pub price: f64,
}

impl From<PriceArgs> for pricing::PriceRequest {
    fn from(args: PriceArgs) -> Self {
        pricing::PriceRequest {
            item_id: args.item,
            mode: args.mode,
            quantity: args.quantity,
            price: args.price,
        }
    }
}

#[derive(Subcommand, Debug)]
pub enum CatalogCommands {
    /// Search items by English, Hindi or Marathi name
    Search {
        #[arg(default_value = "")]
        query: String,

        #[arg(long)]
        category: Option<Category>,
    },

    /// Show one item with its default mode and quantities
    Show {
        id: String,
    },
}

#[derive(Subcommand, Debug)]
pub enum ListCommands {
    /// Create a list from catalog item ids
    Create {
        #[arg(required = true)]
        items: Vec<String>,
    },

    /// List current lists, or history with --history
    Ls {
        #[arg(long)]
        history: bool,
    },

    Show {
        list_id: String,
    },

    Rename {
        list_id: String,
        name: String,
    },

    /// Add a catalog item
    Add {
        list_id: String,
        item: String,
    },

    /// Add an item that is not in the catalog
    AddCustom {
        list_id: String,
        name: String,
        #[arg(long)]
        category: Category,
    },

    /// Record the price observed for an item
    Price {
        list_id: String,
        item_id: String,
        #[arg(long)]
        mode: Mode,
        #[arg(long = "qty")]
        quantity: f64,
        #[arg(long)]
        price: f64,
    },

    /// Tick or untick an item
    Check {
        list_id: String,
        item_id: String,
    },

    Remove {
        list_id: String,
        item_id: String,
    },

    /// Move a list to history
    Archive {
        list_id: String,
    },

    /// Bring a list back from history
    Restore {
        list_id: String,
    },

    Delete {
        list_id: String,
    },

    /// Expected spend for a list
    Total {
        list_id: String,
    },
}

impl ListCommands {
    fn is_read_only(&self) -> bool {
        matches!(
            self,
            ListCommands::Ls { .. } | ListCommands::Show { .. } | ListCommands::Total { .. }
        )
    }
}

// =============================================================================
// Dispatch
// =============================================================================

/// Runs a parsed command and returns its JSON output.
pub async fn execute(cli: Cli, config: &ConfigState) -> Result<Value, ApiError> {
    let catalog = Catalog::standard();

    match cli.command {
        Commands::RateCard(args) => to_json(pricing::rate_card(config, catalog, &args.into())?),
        Commands::Quote { price, at, unit } => {
            to_json(pricing::quote(config, catalog, &price.into(), at, unit)?)
        }
        Commands::Words { amount } => to_json(pricing::words(config, amount)?),
        Commands::Catalog(CatalogCommands::Search { query, category }) => {
            to_json(catalog_cmd::search_catalog(catalog, &query, category))
        }
        Commands::Catalog(CatalogCommands::Show { id }) => {
            to_json(catalog_cmd::get_catalog_item(catalog, &id)?)
        }
        Commands::List { store, command } => run_list(&store, command, config).await,
        Commands::Config => to_json(config_cmd::get_config(config)),
    }
}

async fn run_list(
    store: &Path,
    command: ListCommands,
    config: &ConfigState,
) -> Result<Value, ApiError> {
    let repo = Arc::new(load_store(store).await?);
    let read_only = command.is_read_only();
    let service = ListService::new(Arc::clone(&repo), config.clone());

    let output = match command {
        ListCommands::Create { items } => to_json(service.create_list(&items).await?),
        ListCommands::Ls { history: false } => to_json(service.current_lists().await?),
        ListCommands::Ls { history: true } => to_json(service.history().await?),
        ListCommands::Show { list_id } => to_json(service.get_list(&list_id).await?),
        ListCommands::Rename { list_id, name } => {
            to_json(service.rename_list(&list_id, &name).await?)
        }
        ListCommands::Add { list_id, item } => {
            to_json(service.add_catalog_item(&list_id, &item).await?)
        }
        ListCommands::AddCustom {
            list_id,
            name,
            category,
        } => to_json(service.add_custom_item(&list_id, &name, category).await?),
        ListCommands::Price {
            list_id,
            item_id,
            mode,
            quantity,
            price,
        } => to_json(
            service
                .price_item(&list_id, &item_id, mode, quantity, price)
                .await?,
        ),
        ListCommands::Check { list_id, item_id } => {
            to_json(service.toggle_checked(&list_id, &item_id).await?)
        }
        ListCommands::Remove { list_id, item_id } => {
            to_json(service.remove_item(&list_id, &item_id).await?)
        }
        ListCommands::Archive { list_id } => to_json(service.archive_list(&list_id).await?),
        ListCommands::Restore { list_id } => to_json(service.restore_list(&list_id).await?),
        ListCommands::Delete { list_id } => {
            service.delete_list(&list_id).await?;
            to_json(serde_json::json!({ "deleted": list_id }))
        }
        ListCommands::Total { list_id } => to_json(service.total(&list_id).await?),
    }?;

    if !read_only {
        save_store(store, &repo).await?;
    }
    Ok(output)
}

// =============================================================================
// Snapshot File
// =============================================================================

/// Loads lists from `path`. A missing file is an empty store.
async fn load_store(path: &Path) -> Result<MemoryListRepository, ApiError> {
    match tokio::fs::read_to_string(path).await {
        Ok(json) => {
            debug!(path = %path.display(), "Loading list snapshot");
            Ok(MemoryListRepository::from_json(&json).await?)
        }
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            info!(path = %path.display(), "No list snapshot yet, starting empty");
            Ok(MemoryListRepository::new())
        }
        Err(e) => Err(storage_error(path, e)),
    }
}

async fn save_store(path: &Path, repo: &MemoryListRepository) -> Result<(), ApiError> {
    let json = repo.export_json().await?;
    tokio::fs::write(path, json)
        .await
        .map_err(|e| storage_error(path, e))?;
    debug!(path = %path.display(), "Saved list snapshot");
    Ok(())
}

fn storage_error(path: &Path, err: std::io::Error) -> ApiError {
    tracing::error!("List snapshot {} failed: {}", path.display(), err);
    ApiError::new(
        ErrorCode::StorageError,
        format!("Cannot access list file {}", path.display()),
    )
}

fn to_json<T: Serialize>(value: T) -> Result<Value, ApiError> {
    serde_json::to_value(value).map_err(|e| {
        tracing::error!("Serialization error: {}", e);
        ApiError::internal("Failed to serialize output")
    })
}

// =============================================================================
// Unit Tests
// =============================================================================
