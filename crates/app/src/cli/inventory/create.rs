use clap::Args;
use till::products::ProductId;
use till_app::domain::inventory::NewInventoryItem;

use super::{Shell, print_item};

#[derive(Debug, Args)]
pub(crate) struct CreateInventoryArgs {
    /// Product the stock belongs to
    #[arg(long)]
    product: String,

    /// Units on hand
    #[arg(long, default_value_t = 0)]
    quantity: u32,

    /// Quantity at or below which the product is low on stock
    #[arg(long, default_value_t = 10)]
    threshold: u32,
}

pub(crate) async fn run(args: CreateInventoryArgs, shell: &Shell) -> Result<(), String> {
    let item = NewInventoryItem {
        product_id: ProductId::new(args.product),
        quantity: args.quantity,
        low_stock_threshold: args.threshold,
    };

    item.validate().map_err(|error| error.to_string())?;

    let created = shell
        .app
        .inventory
        .create_inventory_item(item)
        .await
        .map_err(|error| format!("failed to create inventory record: {error}"))?;

    print_item(&created);

    Ok(())
}
