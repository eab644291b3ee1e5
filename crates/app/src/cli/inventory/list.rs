use clap::Args;

use super::{Shell, print_item};

#[derive(Debug, Args)]
pub(crate) struct ListInventoryArgs {
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Only records whose product matches
    #[arg(long, default_value = "")]
    search: String,

    /// Only records at or below their threshold
    #[arg(long)]
    low_stock: bool,
}

pub(crate) async fn run(args: ListInventoryArgs, shell: &Shell) -> Result<(), String> {
    let page = args.page.max(1);

    let inventory = shell
        .app
        .inventory
        .list_inventory(page, args.search)
        .await
        .map_err(|error| format!("failed to list inventory: {error}"))?;

    for item in inventory
        .items
        .iter()
        .filter(|item| !args.low_stock || item.is_low_stock())
    {
        print_item(item);
    }

    println!("page {page} of {}", inventory.total_pages);

    Ok(())
}
