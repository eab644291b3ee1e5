use super::{ReportRange, Shell};

pub(crate) async fn run(range: ReportRange, shell: &Shell) -> Result<(), String> {
    let products = shell
        .app
        .reports
        .top_products(range.days)
        .await
        .map_err(|error| format!("failed to load top products: {error}"))?;

    if products.is_empty() {
        println!("no sales in the last {} days", range.days);
        return Ok(());
    }

    for product in &products {
        println!("{:<32} {:>6}", product.product_name, product.quantity);
    }

    Ok(())
}
