use clap::Args;
use till::products::ProductId;

use super::Shell;

#[derive(Debug, Args)]
pub(crate) struct DeleteProductArgs {
    /// Product to delete
    #[arg(long)]
    id: String,
}

pub(crate) async fn run(args: DeleteProductArgs, shell: &Shell) -> Result<(), String> {
    let product = ProductId::new(args.id);

    shell
        .app
        .products
        .delete_product(product.clone())
        .await
        .map_err(|error| format!("failed to delete product: {error}"))?;

    println!("deleted product {product}");

    Ok(())
}
