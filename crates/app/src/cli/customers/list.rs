use clap::Args;

use super::{Shell, print_customer};

#[derive(Debug, Args)]
pub(crate) struct ListCustomersArgs {
    /// Page to show, starting at 1
    #[arg(long, default_value_t = 1)]
    page: u32,

    /// Only customers whose name matches
    #[arg(long, default_value = "")]
    search: String,
}

pub(crate) async fn run(args: ListCustomersArgs, shell: &Shell) -> Result<(), String> {
    let page = shell
        .app
        .customers
        .list_customers(args.page.max(1), args.search)
        .await
        .map_err(|error| format!("failed to list customers: {error}"))?;

    for customer in &page.customers {
        print_customer(customer);
    }

    println!("page {} of {}", args.page.max(1), page.total_pages);

    Ok(())
}
