use jiff::Zoned;
use till_app::domain::reports::daily_series;

use super::{ReportRange, Shell};

pub(crate) async fn run(range: ReportRange, shell: &Shell) -> Result<(), String> {
    let points = shell
        .app
        .reports
        .sales(range.days)
        .await
        .map_err(|error| format!("failed to load sales report: {error}"))?;

    let series = daily_series(&points, Zoned::now().date(), range.days)
        .map_err(|error| error.to_string())?;

    for point in &series {
        println!("{}  {:>14}", point.date, shell.money(point.total).to_string());
    }

    Ok(())
}
