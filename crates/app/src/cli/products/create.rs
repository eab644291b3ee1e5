use clap::Args;
use till::products::NewProduct;

use super::{ProductDetails, Shell, print_product};

#[derive(Debug, Args)]
pub(crate) struct CreateProductArgs {
    #[command(flatten)]
    details: ProductDetails,
}

pub(crate) async fn run(args: CreateProductArgs, shell: &Shell) -> Result<(), String> {
    let product = NewProduct::try_from(args.details)?;

    let created = shell
        .app
        .products
        .create_product(product)
        .await
        .map_err(|error| format!("failed to create product: {error}"))?;

    print_product(&created, shell);

    Ok(())
}
