use clap::Args;
use till::products::{NewProduct, Product, ProductId};

use super::{ProductDetails, Shell, print_product};

#[derive(Debug, Args)]
pub(crate) struct UpdateProductArgs {
    /// Product to update
    #[arg(long)]
    id: String,

    #[command(flatten)]
    details: ProductDetails,
}

pub(crate) async fn run(args: UpdateProductArgs, shell: &Shell) -> Result<(), String> {
    let NewProduct {
        name,
        price,
        category,
        stock,
        barcode,
    } = NewProduct::try_from(args.details)?;

    let updated = shell
        .app
        .products
        .update_product(Product {
            id: ProductId::new(args.id),
            name,
            price,
            category,
            stock,
            barcode,
        })
        .await
        .map_err(|error| format!("failed to update product: {error}"))?;

    print_product(&updated, shell);

    Ok(())
}
