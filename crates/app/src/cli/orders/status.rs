use clap::Args;
use till::orders::{OrderId, OrderStatus};

use super::{Shell, print_order};

#[derive(Debug, Args)]
pub(crate) struct UpdateStatusArgs {
    /// Order to update
    #[arg(long)]
    id: String,

    /// New status (pending, completed, cancelled)
    #[arg(long)]
    status: OrderStatus,
}

pub(crate) async fn run(args: UpdateStatusArgs, shell: &Shell) -> Result<(), String> {
    let order = shell
        .app
        .orders
        .update_order_status(OrderId::new(args.id), args.status)
        .await
        .map_err(|error| format!("failed to update order: {error}"))?;

    print_order(&order, shell);

    Ok(())
}
