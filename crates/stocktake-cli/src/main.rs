//! Stocktake CLI - persistent inventory tracking
//!
//! Usage:
//!   stk                                   Interactive menu
//!   stk add -i NAME -q QTY -p PRICE       Add incoming stock
//!   stk remove -i NAME -q QTY             Remove outgoing stock
//!   stk view                              Print the inventory summary
//!   stk --inventory-file PATH view        Override the persisted file
//!
//! Paths default to data/inventory.csv and logs/inventory.log, overridable
//! via stocktake.toml ([store] section) and the global flags.

use anyhow::Result;
use clap::{Parser, Subcommand};
use dialoguer::{theme::ColorfulTheme, Input, Select};
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

use stocktake_inventory::{FileLedger, InventoryService, InventorySummary};

mod config;
use config::StoreConfig;

#[derive(Parser)]
#[command(name = "stk")]
#[command(about = "Stocktake inventory tracker", long_about = None)]
#[command(version)]
struct Cli {
    /// Inventory file path (overrides stocktake.toml)
    #[arg(long, global = true, value_name = "PATH")]
    inventory_file: Option<PathBuf>,

    /// Activity log path (overrides stocktake.toml)
    #[arg(long, global = true, value_name = "PATH")]
    log_file: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Subcommand)]
enum Commands {
    /// Add incoming stock
    Add {
        /// Item name
        #[arg(short, long)]
        item: String,

        /// Quantity to add
        #[arg(short, long)]
        quantity: String,

        /// Unit price (ignored for items already tracked)
        #[arg(short, long)]
        price: String,
    },
    /// Remove outgoing stock
    Remove {
        /// Item name
        #[arg(short, long)]
        item: String,

        /// Quantity to remove
        #[arg(short, long)]
        quantity: String,
    },
    /// View the inventory summary
    View,
    /// Interactive menu (the default when no subcommand is given)
    Menu,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    let config = StoreConfig::load()?;
    let inventory_file = cli.inventory_file.unwrap_or(config.inventory_file);
    let log_file = cli.log_file.unwrap_or(config.log_file);
    tracing::debug!(
        inventory_file = %inventory_file.display(),
        log_file = %log_file.display(),
        "resolved store paths"
    );
    let service = InventoryService::new(inventory_file, FileLedger::new(log_file));

    match cli.command {
        Some(Commands::Add {
            item,
            quantity,
            price,
        }) => {
            service.add_stock(&item, &quantity, &price)?;
            println!("Stock added successfully.");
        }
        Some(Commands::Remove { item, quantity }) => {
            service.remove_stock(&item, &quantity)?;
            println!("Stock removed successfully.");
        }
        Some(Commands::View) => {
            render_summary(&service.view()?);
        }
        Some(Commands::Menu) | None => run_menu(&service)?,
    }
    Ok(())
}

/// Menu loop: one store operation per round, errors printed and swallowed
fn run_menu(service: &InventoryService<FileLedger>) -> Result<()> {
    let theme = ColorfulTheme::default();
    let choices = [
        "Add Incoming Stock",
        "Remove Outgoing Stock",
        "View Inventory",
        "Exit",
    ];

    loop {
        let selection = Select::with_theme(&theme)
            .with_prompt("Inventory Menu")
            .items(&choices)
            .default(0)
            .interact()?;

        match selection {
            0 => {
                let item: String = Input::with_theme(&theme)
                    .with_prompt("Enter item name")
                    .interact_text()?;
                let quantity: String = Input::with_theme(&theme)
                    .with_prompt("Enter quantity")
                    .interact_text()?;
                let price: String = Input::with_theme(&theme)
                    .with_prompt("Enter unit price")
                    .interact_text()?;
                match service.add_stock(&item, &quantity, &price) {
                    Ok(()) => println!("Stock added successfully."),
                    Err(err) => println!("{err}"),
                }
            }
            1 => {
                let item: String = Input::with_theme(&theme)
                    .with_prompt("Enter item name")
                    .interact_text()?;
                let quantity: String = Input::with_theme(&theme)
                    .with_prompt("Enter quantity to remove")
                    .interact_text()?;
                match service.remove_stock(&item, &quantity) {
                    Ok(()) => println!("Stock removed successfully."),
                    Err(err) => println!("{err}"),
                }
            }
            2 => match service.view() {
                Ok(summary) => render_summary(&summary),
                Err(err) => println!("{err}"),
            },
            _ => {
                println!("Exiting...");
                break;
            }
        }
    }
    Ok(())
}

fn render_summary(summary: &InventorySummary) {
    match summary {
        InventorySummary::Empty => println!("Inventory is empty."),
        InventorySummary::Items { rows, grand_total } => {
            println!(
                "{:<20}{:<10}{:<12}{:<12}",
                "Item Name", "Quantity", "Unit Price", "Total Price"
            );
            println!("{}", "-".repeat(54));
            for row in rows {
                println!(
                    "{:<20}{:<10}{:<12}{:<12}",
                    row.name,
                    row.quantity,
                    format!("{:.2}", row.unit_price),
                    format!("{:.2}", row.total_value)
                );
            }
            println!("{}", "-".repeat(54));
            println!(
                "{:<42}${}",
                "Total Inventory Value:",
                format!("{grand_total:.2}")
            );
        }
    }
}
