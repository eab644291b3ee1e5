use clap::Args;
use till::customers::NewCustomer;
use till_app::domain::customers::validate_new_customer;

use super::{Shell, print_customer};

#[derive(Debug, Args)]
pub(crate) struct CreateCustomerArgs {
    /// Display name
    #[arg(long)]
    name: String,

    /// Email address
    #[arg(long)]
    email: String,

    /// Phone number
    #[arg(long)]
    phone: String,
}

pub(crate) async fn run(args: CreateCustomerArgs, shell: &Shell) -> Result<(), String> {
    let customer = NewCustomer {
        name: args.name,
        email: args.email,
        phone: args.phone,
    };

    validate_new_customer(&customer).map_err(|error| error.to_string())?;

    let created = shell
        .app
        .customers
        .create_customer(customer)
        .await
        .map_err(|error| format!("failed to create customer: {error}"))?;

    print_customer(&created);

    Ok(())
}
