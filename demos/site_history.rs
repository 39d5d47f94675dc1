use chrono::NaiveDate;
use londonair::{LondonAir, LondonAirError, Snapshot, HOUR_LABELS};

#[tokio::main]
async fn main() -> Result<(), LondonAirError> {
    env_logger::init();

    let snapshot = Snapshot::from_page_json(include_str!("../tests/fixtures/page_data.json"))?;
    let client = LondonAir::new(snapshot);

    let date = NaiveDate::from_ymd_opt(2024, 3, 15);
    let Some(history) = client.site_history().site("MY1").maybe_date(date).call().await? else {
        println!("No data (check the log for why)");
        return Ok(());
    };

    for series in history.renderable() {
        println!("{}", series.pollutant.display_name());
        for (hour, value) in HOUR_LABELS.iter().zip(series.hourly_values()) {
            println!("  {} {:>6.1}", hour, value);
        }
    }

    if let Some(chart) = client.site_chart().site("MY1").maybe_date(date).call().await? {
        println!("{}", serde_json::to_string(&chart).unwrap_or_default());
    }

    Ok(())
}
