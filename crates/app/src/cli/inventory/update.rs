use clap::Args;
use till::products::ProductId;
use till_app::domain::inventory::{InventoryItem, InventoryItemId, NewInventoryItem};

use super::{Shell, print_item};

#[derive(Debug, Args)]
pub(crate) struct UpdateInventoryArgs {
    /// Record to update
    #[arg(long)]
    id: String,

    /// Product the stock belongs to
    #[arg(long)]
    product: String,

    /// Product display name
    #[arg(long, default_value = "")]
    product_name: String,

    /// Units on hand
    #[arg(long)]
    quantity: u32,

    /// Quantity at or below which the product is low on stock
    #[arg(long)]
    threshold: u32,
}

pub(crate) async fn run(args: UpdateInventoryArgs, shell: &Shell) -> Result<(), String> {
    let item = NewInventoryItem {
        product_id: ProductId::new(args.product),
        quantity: args.quantity,
        low_stock_threshold: args.threshold,
    };

    item.validate().map_err(|error| error.to_string())?;

    let updated = shell
        .app
        .inventory
        .update_inventory_item(InventoryItem {
            id: InventoryItemId::new(args.id),
            product_id: item.product_id,
            product_name: args.product_name,
            quantity: item.quantity,
            low_stock_threshold: item.low_stock_threshold,
        })
        .await
        .map_err(|error| format!("failed to update inventory record: {error}"))?;

    print_item(&updated);

    Ok(())
}
