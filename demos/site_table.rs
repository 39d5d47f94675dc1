use londonair::{LondonAir, LondonAirError, Pollutant, Snapshot};

fn main() -> Result<(), LondonAirError> {
    env_logger::init();

    let snapshot = Snapshot::from_page_json(include_str!("../tests/fixtures/page_data.json"))?;
    let client = LondonAir::new(snapshot);

    let local_authority = std::env::args().nth(1).unwrap_or_else(|| "Westminster".to_string());
    let boundary = client.boundary().local_authority(&local_authority).call()?;
    if let Some(bbox) = boundary.bounding_box() {
        println!("Zoom to {:?}", bbox.to_leaflet());
    }

    let table = client.site_table().local_authority(&local_authority).call()?;

    print!("{:<36}", "Site");
    for pollutant in Pollutant::ALL {
        print!("{:>8}", pollutant.code());
    }
    println!();
    for row in &table.active {
        print!("{:<36}", row.site_name);
        for cell in &row.cells {
            print!("{:>8}", cell.display);
        }
        println!();
    }

    println!("\nClosed sites:");
    for site in &table.inactive {
        println!(
            "  {} ({}) {} - {}",
            site.site_name,
            site.site_type,
            site.date_opened.map(|d| d.to_string()).unwrap_or_default(),
            site.date_closed.map(|d| d.to_string()).unwrap_or_default()
        );
    }

    Ok(())
}
