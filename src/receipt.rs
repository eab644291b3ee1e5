//! Receipt

use std::io;

use rust_decimal::Decimal;
use rusty_money::{Money, iso::Currency};
use tabled::{
    builder::Builder,
    settings::{
        Alignment, Color, Style,
        object::{Columns, Rows},
    },
};
use thiserror::Error;

use crate::{
    cart::{Cart, CartError},
    catalog::CatalogSnapshot,
    checkout::Submission,
    orders::OrderId,
};

/// Errors that can occur when rendering a cart or receipt.
#[derive(Debug, Error)]
pub enum ReceiptError {
    /// A cart line could not be resolved against the catalog.
    #[error(transparent)]
    Cart(#[from] CartError),

    /// IO error
    #[error("IO error")]
    IO,
}

/// Write the cart as a table followed by its running total.
///
/// # Errors
///
/// Returns a [`ReceiptError`] if a line cannot be resolved or writing fails.
pub fn write_cart(
    mut out: impl io::Write,
    cart: &Cart,
    catalog: &CatalogSnapshot,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    let mut builder = Builder::default();

    push_header(&mut builder);

    for resolved in cart.resolved(catalog) {
        let (line, product) = resolved?;

        push_row(
            &mut builder,
            &product.name,
            line.quantity(),
            product.price,
            currency,
        );
    }

    write_table(&mut out, builder)?;

    write_summary_line(&mut out, "Total:", money(cart.total(catalog)?, currency))
}

/// Write the receipt for a completed sale.
///
/// Lines use the prices frozen in the submission; names come from `catalog`
/// and fall back to the product id.
///
/// # Errors
///
/// Returns [`ReceiptError::IO`] if writing fails.
pub fn write_receipt(
    mut out: impl io::Write,
    order_id: &OrderId,
    submission: &Submission,
    catalog: &CatalogSnapshot,
    currency: &'static Currency,
) -> Result<(), ReceiptError> {
    writeln!(out, "\nOrder {order_id}").map_err(|_err| ReceiptError::IO)?;

    let mut builder = Builder::default();

    push_header(&mut builder);

    for item in &submission.order.items {
        let name = catalog
            .lookup_by_id(&item.product_id)
            .map_or_else(|| item.product_id.to_string(), |product| product.name.clone());

        push_row(&mut builder, &name, item.quantity, item.price, currency);
    }

    write_table(&mut out, builder)?;

    let order = &submission.order;

    write_summary_line(&mut out, "Total:", money(order.total, currency))?;
    write_summary_line(
        &mut out,
        &format!("Paid ({}):", order.payment_method),
        money(submission.tendered, currency),
    )?;

    if let Some(change) = submission.change_due() {
        write_summary_line(&mut out, "Change:", money(change, currency))?;
    }

    Ok(())
}

fn money(amount: Decimal, currency: &'static Currency) -> Money<'static, Currency> {
    Money::from_decimal(amount, currency)
}

fn push_header(builder: &mut Builder) {
    builder.push_record(["Item", "Qty", "Unit Price", "Line Total"]);
}

fn push_row(
    builder: &mut Builder,
    name: &str,
    quantity: u32,
    price: Decimal,
    currency: &'static Currency,
) {
    let line_total = price * Decimal::from(quantity);

    builder.push_record([
        name.to_string(),
        quantity.to_string(),
        money(price, currency).to_string(),
        money(line_total, currency).to_string(),
    ]);
}

fn write_table(out: &mut impl io::Write, builder: Builder) -> Result<(), ReceiptError> {
    let mut table = builder.build();

    table.with(Style::modern_rounded());
    table.modify(Rows::first(), Color::BOLD);
    table.modify(Columns::new(1..4), Alignment::right());

    writeln!(out, "{table}").map_err(|_err| ReceiptError::IO)
}

fn write_summary_line(
    out: &mut impl io::Write,
    label: &str,
    value: Money<'_, Currency>,
) -> Result<(), ReceiptError> {
    writeln!(out, " {label:<14}{value:>12}").map_err(|_err| ReceiptError::IO)
}

#[cfg(test)]
mod tests {
    use rusty_money::iso;
    use testresult::TestResult;

    use crate::{
        checkout::CheckoutFlow,
        customers::CustomerId,
        orders::PendingOrder,
        payment::PaymentMethod,
        products::{Product, ProductId},
    };

    use super::*;

    fn catalog() -> CatalogSnapshot {
        CatalogSnapshot::new(
            vec![
                Product {
                    id: ProductId::new("a"),
                    name: "Apple".to_string(),
                    price: Decimal::new(1000, 2),
                    category: String::new(),
                    stock: 3,
                    barcode: String::new(),
                },
                Product {
                    id: ProductId::new("b"),
                    name: "Banana".to_string(),
                    price: Decimal::new(500, 2),
                    category: String::new(),
                    stock: 3,
                    barcode: String::new(),
                },
            ],
            vec![],
        )
    }

    #[test]
    fn write_cart_lists_lines_and_total() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add_product(&catalog, &ProductId::new("a"))?;
        cart.add_product(&catalog, &ProductId::new("a"))?;
        cart.add_product(&catalog, &ProductId::new("b"))?;

        let mut out = Vec::new();
        write_cart(&mut out, &cart, &catalog, iso::USD)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("Apple"), "missing Apple in {output}");
        assert!(output.contains("Banana"), "missing Banana in {output}");
        assert!(output.contains("$25.00"), "missing total in {output}");

        Ok(())
    }

    #[test]
    fn write_receipt_shows_change_for_cash() -> TestResult {
        let catalog = catalog();
        let mut cart = Cart::new();

        cart.add_product(&catalog, &ProductId::new("b"))?;

        let order = PendingOrder::snapshot(
            &cart,
            &catalog,
            CustomerId::new("walk-in-customer"),
            PaymentMethod::Cash,
        )?;

        let mut flow = CheckoutFlow::new();
        flow.open_payment(&cart)?;
        let submission = flow.submit(order, Decimal::TEN)?;

        let mut out = Vec::new();
        write_receipt(&mut out, &OrderId::new("o-42"), &submission, &catalog, iso::USD)?;

        let output = String::from_utf8(out)?;

        assert!(output.contains("o-42"), "missing order id in {output}");
        assert!(output.contains("Change:"), "missing change in {output}");
        assert!(output.contains("$5.00"), "missing amounts in {output}");

        Ok(())
    }
}
