use clap::{Args, Subcommand};
use till_app::domain::inventory::InventoryItem;

use super::Shell;

mod create;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct InventoryCommand {
    #[command(subcommand)]
    command: InventorySubcommand,
}

#[derive(Debug, Subcommand)]
enum InventorySubcommand {
    List(list::ListInventoryArgs),
    Create(create::CreateInventoryArgs),
    Update(update::UpdateInventoryArgs),
}

pub(crate) fn print_item(item: &InventoryItem) {
    println!("inventory_id: {}", item.id);
    println!("product_id: {}", item.product_id);
    println!("product_name: {}", item.product_name);
    println!("quantity: {}", item.quantity);
    println!("low_stock_threshold: {}", item.low_stock_threshold);
    println!(
        "status: {}",
        if item.is_low_stock() { "low stock" } else { "in stock" }
    );
    println!();
}

pub(crate) async fn run(command: InventoryCommand, shell: &Shell) -> Result<(), String> {
    match command.command {
        InventorySubcommand::List(args) => list::run(args, shell).await,
        InventorySubcommand::Create(args) => create::run(args, shell).await,
        InventorySubcommand::Update(args) => update::run(args, shell).await,
    }
}
