use clap::{Args, Subcommand};
use till_app::domain::orders::Order;

use super::Shell;

mod list;
mod status;

#[derive(Debug, Args)]
pub(crate) struct OrdersCommand {
    #[command(subcommand)]
    command: OrdersSubcommand,
}

#[derive(Debug, Subcommand)]
enum OrdersSubcommand {
    List,
    Status(status::UpdateStatusArgs),
}

pub(crate) fn print_order(order: &Order, shell: &Shell) {
    println!("order_id: {}", order.id);
    println!("customer_id: {}", order.customer_id);
    println!("created_at: {}", order.created_at);
    println!("status: {}", order.status);
    println!(
        "payment_method: {}",
        order
            .payment_method
            .map_or_else(|| "unknown".to_string(), |method| method.to_string())
    );
    println!("items: {}", order.items.len());
    println!("total: {}", shell.money(order.total));
    println!();
}

pub(crate) async fn run(command: OrdersCommand, shell: &Shell) -> Result<(), String> {
    match command.command {
        OrdersSubcommand::List => list::run(shell).await,
        OrdersSubcommand::Status(args) => status::run(args, shell).await,
    }
}
