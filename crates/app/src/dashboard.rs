//! Dashboard
//!
//! Headline figures computed from the raw order, product and customer lists.

use jiff::{SignedDuration, Timestamp};
use rust_decimal::Decimal;
use till::products::Product;

use crate::{
    client::ApiError,
    context::AppContext,
    domain::{customers::list_all_customers, orders::Order},
};

/// Length of each revenue comparison window.
const WINDOW: SignedDuration = SignedDuration::from_hours(7 * 24);

/// How many best sellers the dashboard lists.
const TOP_PRODUCTS: usize = 5;

/// Units sold of one product across all orders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TopProduct {
    pub name: String,
    pub units: u64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct DashboardSummary {
    pub total_sales: Decimal,
    pub total_orders: usize,
    pub total_products: usize,
    pub total_customers: usize,

    /// Revenue over the last seven days
    pub current_week_revenue: Decimal,

    /// Revenue over the seven days before that
    pub previous_week_revenue: Decimal,

    /// Week-on-week change in percent, rounded to two places. 100 when the
    /// previous week took nothing.
    pub revenue_growth: Decimal,

    pub top_products: Vec<TopProduct>,
    pub low_stock: Vec<Product>,
}

/// Summarise the shop as of `now`.
///
/// # Errors
///
/// Returns an error if `now` is too close to the start of time for the
/// comparison windows.
pub fn summarize(
    orders: &[Order],
    products: &[Product],
    total_customers: usize,
    now: Timestamp,
) -> Result<DashboardSummary, jiff::Error> {
    let week_ago = now.checked_sub(WINDOW)?;
    let fortnight_ago = week_ago.checked_sub(WINDOW)?;

    let revenue_between = |from: Timestamp, to: Option<Timestamp>| -> Decimal {
        orders
            .iter()
            .filter(|order| order.created_at >= from && to.is_none_or(|to| order.created_at < to))
            .map(|order| order.total)
            .sum()
    };

    let current_week_revenue = revenue_between(week_ago, None);
    let previous_week_revenue = revenue_between(fortnight_ago, Some(week_ago));

    let revenue_growth = if previous_week_revenue.is_zero() {
        Decimal::ONE_HUNDRED
    } else {
        ((current_week_revenue - previous_week_revenue) / previous_week_revenue
            * Decimal::ONE_HUNDRED)
            .round_dp(2)
    };

    let mut top_products: Vec<TopProduct> = products
        .iter()
        .map(|product| TopProduct {
            name: product.name.clone(),
            units: orders
                .iter()
                .map(|order| order.units_of(product.id.as_str()))
                .sum(),
        })
        .collect();

    top_products.sort_by(|a, b| b.units.cmp(&a.units));
    top_products.truncate(TOP_PRODUCTS);

    Ok(DashboardSummary {
        total_sales: orders.iter().map(|order| order.total).sum(),
        total_orders: orders.len(),
        total_products: products.len(),
        total_customers,
        current_week_revenue,
        previous_week_revenue,
        revenue_growth,
        top_products,
        low_stock: products
            .iter()
            .filter(|product| product.is_low_stock())
            .cloned()
            .collect(),
    })
}

/// Fetch everything the dashboard needs.
///
/// # Errors
///
/// Returns the first fetch error.
pub async fn load(context: &AppContext) -> Result<(Vec<Order>, Vec<Product>, usize), ApiError> {
    let (orders, products, customers) = tokio::try_join!(
        context.orders.list_orders(),
        context.products.list_products(),
        list_all_customers(context.customers.as_ref()),
    )?;

    Ok((orders, products, customers.len()))
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;
    use till::{
        customers::CustomerId,
        orders::{OrderId, OrderItem, OrderStatus},
        products::ProductId,
    };

    use super::*;

    const DAY: SignedDuration = SignedDuration::from_hours(24);

    fn now() -> Result<Timestamp, jiff::Error> {
        "2026-03-15T12:00:00Z".parse()
    }

    fn product(id: &str, stock: u32) -> Product {
        Product {
            id: ProductId::new(id),
            name: id.to_uppercase(),
            price: Decimal::ONE,
            category: String::new(),
            stock,
            barcode: String::new(),
        }
    }

    fn order(days_ago: i32, total: i64, items: &[(&str, u32)]) -> Result<Order, jiff::Error> {
        Ok(Order {
            id: OrderId::new(format!("o-{days_ago}-{total}")),
            customer_id: CustomerId::new("walk-in-customer"),
            items: items
                .iter()
                .map(|&(product, quantity)| OrderItem {
                    product_id: ProductId::new(product),
                    quantity,
                    price: Decimal::ONE,
                })
                .collect(),
            total: Decimal::new(total, 0),
            payment_method: None,
            status: OrderStatus::Completed,
            created_at: now()?.checked_sub(DAY * days_ago)?,
        })
    }

    #[test]
    fn growth_compares_last_two_weeks() -> TestResult {
        let orders = [
            order(1, 150, &[])?,
            order(8, 100, &[])?,
            order(20, 999, &[])?,
        ];

        let summary = summarize(&orders, &[], 0, now()?)?;

        assert_eq!(summary.total_sales, Decimal::new(1249, 0));
        assert_eq!(summary.current_week_revenue, Decimal::new(150, 0));
        assert_eq!(summary.previous_week_revenue, Decimal::new(100, 0));
        assert_eq!(summary.revenue_growth, Decimal::new(50, 0));

        Ok(())
    }

    #[test]
    fn growth_is_one_hundred_without_previous_revenue() -> TestResult {
        let summary = summarize(&[order(2, 40, &[])?], &[], 0, now()?)?;

        assert_eq!(summary.revenue_growth, Decimal::ONE_HUNDRED);

        Ok(())
    }

    #[test]
    fn growth_can_be_negative() -> TestResult {
        let orders = [order(1, 25, &[])?, order(9, 100, &[])?];

        let summary = summarize(&orders, &[], 0, now()?)?;

        assert_eq!(summary.revenue_growth, Decimal::new(-75, 0));

        Ok(())
    }

    #[test]
    fn top_products_rank_by_units_and_keep_five() -> TestResult {
        let products: Vec<_> = ["a", "b", "c", "d", "e", "f"]
            .into_iter()
            .map(|id| product(id, 50))
            .collect();

        let orders = [
            order(1, 10, &[("b", 3), ("a", 1)])?,
            order(3, 10, &[("b", 2), ("c", 4)])?,
        ];

        let summary = summarize(&orders, &products, 0, now()?)?;

        let ranked: Vec<_> = summary
            .top_products
            .iter()
            .map(|top| (top.name.as_str(), top.units))
            .collect();

        assert_eq!(
            ranked,
            [("B", 5), ("C", 4), ("A", 1), ("D", 0), ("E", 0)]
        );

        Ok(())
    }

    #[test]
    fn low_stock_lists_products_at_ten_or_fewer() -> TestResult {
        let products = [product("a", 10), product("b", 11), product("c", 0)];

        let summary = summarize(&[], &products, 2, now()?)?;

        let low: Vec<_> = summary.low_stock.iter().map(|p| p.id.as_str()).collect();

        assert_eq!(low, ["a", "c"]);
        assert_eq!(summary.total_products, 3);
        assert_eq!(summary.total_customers, 2);

        Ok(())
    }
}
