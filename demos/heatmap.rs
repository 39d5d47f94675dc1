use londonair::{LondonAir, LondonAirError, Pollutant, Snapshot};

fn main() -> Result<(), LondonAirError> {
    // Set RUST_LOG=info (or debug) to see what the snapshot loader reports.
    env_logger::init();

    let snapshot = Snapshot::from_page_json(include_str!("../tests/fixtures/page_data.json"))?;
    let client = LondonAir::new(snapshot);

    for pollutant in Pollutant::ALL {
        let heatmap = client.heatmap().pollutant(pollutant.code()).call();
        println!(
            "{:<18} {} points (scale max {})",
            pollutant.display_name(),
            heatmap.data.len(),
            heatmap.max
        );
    }

    let info = client.pollutant_info().pollutant("NO2").call()?;
    println!("\n{}: {}", info.name, info.health_effect);
    if let Some(link) = info.link() {
        println!("More: {}", link);
    }

    let heatmap = client.heatmap().call();
    println!("\n{}", serde_json::to_string_pretty(&heatmap).unwrap_or_default());

    Ok(())
}
