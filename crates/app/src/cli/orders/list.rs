use super::{Shell, print_order};

pub(crate) async fn run(shell: &Shell) -> Result<(), String> {
    let mut orders = shell
        .app
        .orders
        .list_orders()
        .await
        .map_err(|error| format!("failed to list orders: {error}"))?;

    if orders.is_empty() {
        println!("no orders found");
        return Ok(());
    }

    orders.sort_by(|a, b| b.created_at.cmp(&a.created_at));

    for order in &orders {
        print_order(order, shell);
    }

    Ok(())
}
