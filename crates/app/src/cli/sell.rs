use std::io;

use clap::Args;
use till::{
    customers::CustomerId,
    payment::PaymentForm,
    products::ProductId,
    receipt::{write_cart, write_receipt},
};
use till_app::session::TerminalSession;

use super::Shell;

#[derive(Debug, Args)]
pub(crate) struct SellArgs {
    /// Barcode to scan; repeat once per unit
    #[arg(short = 'b', long = "barcode")]
    pub(crate) barcodes: Vec<String>,

    /// Product id to add; repeat once per unit
    #[arg(short = 'p', long = "product")]
    pub(crate) products: Vec<String>,

    /// Customer id to bind to the sale
    #[arg(short, long)]
    pub(crate) customer: Option<String>,

    /// Payment method (cash, card, loyalty_points)
    #[arg(short, long, default_value = "cash")]
    pub(crate) method: String,

    /// Amount tendered; defaults to the cart total
    #[arg(short, long)]
    pub(crate) amount: Option<String>,
}

pub(crate) async fn run(args: SellArgs, shell: &Shell) -> Result<(), String> {
    let mut session = TerminalSession::connect(shell.app.clone())
        .await
        .map_err(|error| error.to_string())?;

    let terminal = session.terminal_mut();

    for barcode in &args.barcodes {
        terminal
            .scan(barcode)
            .map_err(|error| format!("cannot scan {barcode}: {error}"))?;
    }

    for product in args.products {
        terminal
            .add_product(&ProductId::new(product))
            .map_err(|error| error.to_string())?;
    }

    if let Some(customer) = args.customer {
        terminal
            .select_customer(&CustomerId::new(customer))
            .map_err(|error| error.to_string())?;
    }

    write_cart(
        io::stdout(),
        terminal.cart(),
        terminal.catalog().current(),
        shell.currency,
    )
    .map_err(|error| error.to_string())?;

    let amount = match args.amount {
        Some(amount) => amount,
        None => terminal
            .total()
            .map_err(|error| error.to_string())?
            .to_string(),
    };

    let form = PaymentForm::parse(&amount, &args.method).map_err(|error| error.to_string())?;

    terminal.open_payment().map_err(|error| error.to_string())?;

    let sale = session
        .submit_payment(form)
        .await
        .map_err(|error| error.to_string())?;

    write_receipt(
        io::stdout(),
        &sale.order.id,
        &sale.submission,
        session.terminal().catalog().current(),
        shell.currency,
    )
    .map_err(|error| error.to_string())?;

    if let Some(award) = &sale.loyalty {
        println!("loyalty_points: {} to {}", award.points, award.customer_id);
    }

    if let Some(task) = sale.loyalty_task {
        task.await
            .map_err(|error| format!("loyalty task aborted: {error}"))?;
    }

    session
        .acknowledge()
        .await
        .map_err(|error| error.to_string())
}
