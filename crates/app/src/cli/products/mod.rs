use clap::{Args, Subcommand};
use rust_decimal::Decimal;
use till::products::{NewProduct, Product};

use super::Shell;

mod create;
mod delete;
mod list;
mod update;

#[derive(Debug, Args)]
pub(crate) struct ProductsCommand {
    #[command(subcommand)]
    command: ProductsSubcommand,
}

#[derive(Debug, Subcommand)]
enum ProductsSubcommand {
    List,
    Create(create::CreateProductArgs),
    Update(update::UpdateProductArgs),
    Delete(delete::DeleteProductArgs),
}

/// Product fields shared by create and update.
#[derive(Debug, Args)]
pub(crate) struct ProductDetails {
    /// Display name
    #[arg(long)]
    name: String,

    /// Unit price
    #[arg(long)]
    price: Decimal,

    /// Category label
    #[arg(long, default_value = "")]
    category: String,

    /// Units in stock
    #[arg(long, default_value_t = 0)]
    stock: u32,

    /// Scannable barcode
    #[arg(long, default_value = "")]
    barcode: String,
}

impl TryFrom<ProductDetails> for NewProduct {
    type Error = String;

    fn try_from(details: ProductDetails) -> Result<Self, Self::Error> {
        if details.name.trim().is_empty() {
            return Err("product name cannot be empty".to_string());
        }

        if details.price < Decimal::ZERO {
            return Err(format!("price cannot be negative: {}", details.price));
        }

        Ok(NewProduct {
            name: details.name,
            price: details.price,
            category: details.category,
            stock: details.stock,
            barcode: details.barcode,
        })
    }
}

pub(crate) fn print_product(product: &Product, shell: &Shell) {
    println!("product_id: {}", product.id);
    println!("name: {}", product.name);
    println!("price: {}", shell.money(product.price));
    println!("category: {}", product.category);
    println!("stock: {}", product.stock);
    println!("barcode: {}", product.barcode);
    println!();
}

pub(crate) async fn run(command: ProductsCommand, shell: &Shell) -> Result<(), String> {
    match command.command {
        ProductsSubcommand::List => list::run(shell).await,
        ProductsSubcommand::Create(args) => create::run(args, shell).await,
        ProductsSubcommand::Update(args) => update::run(args, shell).await,
        ProductsSubcommand::Delete(args) => delete::run(args, shell).await,
    }
}
