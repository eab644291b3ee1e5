//! Report Models

use jiff::{ToSpan, civil::Date};
use rust_decimal::Decimal;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Revenue taken on one day.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct SalesPoint {
    pub date: Date,

    #[serde(with = "rust_decimal::serde::float")]
    pub total: Decimal,
}

/// Units sold of one product.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSales {
    pub product_name: String,
    pub quantity: u64,
}

/// Expand sparse report rows into one point per day, oldest first, for the
/// `days` days ending on `today`. Days without a row are zero.
///
/// # Errors
///
/// Returns an error if the window reaches outside jiff's supported range.
pub fn daily_series(
    points: &[SalesPoint],
    today: Date,
    days: u32,
) -> Result<Vec<SalesPoint>, jiff::Error> {
    let by_date: FxHashMap<Date, Decimal> =
        points.iter().map(|point| (point.date, point.total)).collect();

    (0..i64::from(days))
        .rev()
        .map(|back| -> Result<SalesPoint, jiff::Error> {
            let date = today.checked_sub(back.days())?;

            Ok(SalesPoint {
                date,
                total: by_date.get(&date).copied().unwrap_or_default(),
            })
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use jiff::civil::date;
    use testresult::TestResult;

    use super::*;

    #[test]
    fn decodes_rows() -> TestResult {
        let sales: Vec<SalesPoint> =
            serde_json::from_str(r#"[{"date":"2026-03-01","total":12.5}]"#)?;
        let top: Vec<ProductSales> =
            serde_json::from_str(r#"[{"productName":"Oat Milk","quantity":9}]"#)?;

        assert_eq!(sales.first().map(|s| s.date), Some(date(2026, 3, 1)));
        assert_eq!(sales.first().map(|s| s.total), Some(Decimal::new(125, 1)));
        assert_eq!(top.first().map(|p| p.quantity), Some(9));

        Ok(())
    }

    #[test]
    fn daily_series_fills_gaps_with_zero() -> TestResult {
        let points = [SalesPoint {
            date: date(2026, 3, 2),
            total: Decimal::TEN,
        }];

        let series = daily_series(&points, date(2026, 3, 3), 3)?;

        let dates: Vec<_> = series.iter().map(|p| p.date).collect();
        let totals: Vec<_> = series.iter().map(|p| p.total).collect();

        assert_eq!(dates, [date(2026, 3, 1), date(2026, 3, 2), date(2026, 3, 3)]);
        assert_eq!(totals, [Decimal::ZERO, Decimal::TEN, Decimal::ZERO]);

        Ok(())
    }

    #[test]
    fn daily_series_ignores_rows_outside_window() -> TestResult {
        let points = [SalesPoint {
            date: date(2026, 1, 1),
            total: Decimal::TEN,
        }];

        let series = daily_series(&points, date(2026, 3, 3), 2)?;

        assert!(series.iter().all(|p| p.total.is_zero()));

        Ok(())
    }
}
