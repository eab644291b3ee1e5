use super::{Shell, print_product};

pub(crate) async fn run(shell: &Shell) -> Result<(), String> {
    let products = shell
        .app
        .products
        .list_products()
        .await
        .map_err(|error| format!("failed to list products: {error}"))?;

    if products.is_empty() {
        println!("no products found");
        return Ok(());
    }

    for product in &products {
        print_product(product, shell);
    }

    Ok(())
}
