use clap::{Args, Subcommand};
use till::customers::Customer;

use super::Shell;

mod create;
mod list;

#[derive(Debug, Args)]
pub(crate) struct CustomersCommand {
    #[command(subcommand)]
    command: CustomersSubcommand,
}

#[derive(Debug, Subcommand)]
enum CustomersSubcommand {
    List(list::ListCustomersArgs),
    Create(create::CreateCustomerArgs),
}

pub(crate) fn print_customer(customer: &Customer) {
    println!("customer_id: {}", customer.id);
    println!("name: {}", customer.name);
    println!("email: {}", customer.email);
    println!("phone: {}", customer.phone);
    println!("total_orders: {}", customer.total_orders);
    println!("loyalty_points: {}", customer.loyalty_points);
    println!();
}

pub(crate) async fn run(command: CustomersCommand, shell: &Shell) -> Result<(), String> {
    match command.command {
        CustomersSubcommand::List(args) => list::run(args, shell).await,
        CustomersSubcommand::Create(args) => create::run(args, shell).await,
    }
}
