use londonair::{LatLon, LondonAir, LondonAirError, Snapshot, LONDON_BOUNDS};

fn main() -> Result<(), LondonAirError> {
    env_logger::init();

    let snapshot = Snapshot::from_page_json(include_str!("../tests/fixtures/page_data.json"))?;
    let client = LondonAir::new(snapshot);

    // Oxford Circus
    let here = LatLon(51.5152, -0.1419);
    if !LONDON_BOUNDS.contains(here) {
        println!("Outside London, showing {:?}", LONDON_BOUNDS.to_leaflet());
        return Ok(());
    }

    let sites = client
        .nearest_sites()
        .location(here)
        .max_distance_km(10.0)
        .site_limit(3)
        .active_only(true)
        .call();

    for (site, distance_km) in sites {
        println!("{:<36} {} {:.2} km", site.name, site.code, distance_km);
    }

    Ok(())
}
