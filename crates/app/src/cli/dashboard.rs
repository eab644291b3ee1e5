use jiff::Timestamp;
use till_app::dashboard;

use super::Shell;

pub(crate) async fn run(shell: &Shell) -> Result<(), String> {
    let (orders, products, customers) = dashboard::load(&shell.app)
        .await
        .map_err(|error| format!("failed to load dashboard: {error}"))?;

    let summary = dashboard::summarize(&orders, &products, customers, Timestamp::now())
        .map_err(|error| error.to_string())?;

    println!("total_sales: {}", shell.money(summary.total_sales));
    println!("total_orders: {}", summary.total_orders);
    println!("total_products: {}", summary.total_products);
    println!("total_customers: {}", summary.total_customers);
    println!("last_7_days: {}", shell.money(summary.current_week_revenue));
    println!("previous_7_days: {}", shell.money(summary.previous_week_revenue));
    println!("revenue_growth: {}%", summary.revenue_growth);

    println!();
    println!("top_products:");

    for top in &summary.top_products {
        println!("  {:<32} {:>6}", top.name, top.units);
    }

    println!();
    println!("low_stock:");

    if summary.low_stock.is_empty() {
        println!("  none");
    }

    for product in &summary.low_stock {
        println!("  {:<32} {:>6}", product.name, product.stock);
    }

    Ok(())
}
