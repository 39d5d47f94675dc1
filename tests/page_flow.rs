use londonair::{
    bounding_box, emission_levels, LatLon, LondonAir, LondonAirError, LookupError, Pollutant,
    Severity, Snapshot, SnapshotError, LONDON_BOUNDS, MISSING_VALUE,
};

const PAGE_DATA: &str = include_str!("fixtures/page_data.json");

fn client() -> LondonAir {
    LondonAir::new(Snapshot::from_page_json(PAGE_DATA).unwrap())
}

#[test]
fn heatmap_follows_pollutant_selection() {
    let client = client();

    let no2 = client.heatmap().pollutant("NO2").call();
    assert_eq!(no2.max, 10.0);
    assert_eq!(no2.data.len(), 4);
    assert_eq!(no2.data[1].value, 10.0);
    assert_eq!((no2.data[1].lat, no2.data[1].lng), (51.51393, -0.15279));

    // Only Eltham measures ozone.
    let o3 = client.heatmap().pollutant("O3").call();
    assert_eq!(o3.data.len(), 1);
    assert_eq!(o3.data[0].value, 3.0);

    assert!(client.heatmap().pollutant("NOX").call().data.is_empty());
}

#[test]
fn heatmap_points_are_a_subset_of_readings() {
    let snapshot = Snapshot::from_page_json(PAGE_DATA).unwrap();
    for pollutant in Pollutant::ALL {
        let heatmap = emission_levels(snapshot.readings(), pollutant.code());
        for point in &heatmap.data {
            assert!(snapshot.readings().iter().any(|r| {
                r.latitude == point.lat
                    && r.longitude == point.lng
                    && r.level(pollutant.code()) == Some(point.value)
            }));
        }
    }
}

#[test]
fn selecting_a_local_authority() -> Result<(), LondonAirError> {
    let client = client();

    let sites = client.sites_in().local_authority("Westminster").call()?;
    let codes: Vec<&str> = sites.iter().map(|s| s.code.as_str()).collect();
    assert_eq!(codes, vec!["MY1", "WM6", "WM0"]);

    let boundary = client.boundary().local_authority("Westminster").call()?;
    assert_eq!(boundary.properties.extra["gss_code"], "E09000033");
    let bbox = boundary.bounding_box().unwrap();
    assert_eq!(bbox.to_leaflet(), [[51.485, -0.216], [51.532, -0.11]]);
    assert!(LONDON_BOUNDS.contains(bbox.south_west));
    assert!(LONDON_BOUNDS.contains(bbox.north_east));

    // Both parts of a MultiPolygon count.
    let camden = client.boundary().local_authority("Camden").call()?;
    assert_eq!(
        camden.bounding_box().unwrap().to_leaflet(),
        [[51.518, -0.213], [51.573, -0.105]]
    );

    Ok(())
}

#[test]
fn site_table_for_westminster() -> Result<(), LondonAirError> {
    let table = client().site_table().local_authority("Westminster").call()?;

    assert_eq!(table.local_authority, "Westminster");
    assert_eq!(table.active.len(), 2);
    assert_eq!(table.inactive.len(), 1);

    let marylebone = &table.active[0];
    assert_eq!(marylebone.site_code, "MY1");
    assert_eq!(marylebone.cells.len(), Pollutant::ALL.len());

    let no2 = marylebone
        .cells
        .iter()
        .find(|c| c.pollutant == Pollutant::NitrogenDioxide)
        .unwrap();
    assert_eq!(no2.display, "7");
    assert_eq!(no2.severity, Some(Severity::High));

    let ozone = marylebone
        .cells
        .iter()
        .find(|c| c.pollutant == Pollutant::Ozone)
        .unwrap();
    assert_eq!(ozone.display, MISSING_VALUE);
    assert_eq!(ozone.severity, None);

    let closed = &table.inactive[0];
    assert_eq!(closed.site_code, "WM0");
    assert_eq!(closed.date_closed.unwrap().to_string(), "2019-06-30");

    Ok(())
}

#[test]
fn site_table_zero_is_shown_as_missing() -> Result<(), LondonAirError> {
    let table = client().site_table().local_authority("Camden").call()?;
    let pm25 = table.active[0]
        .cells
        .iter()
        .find(|c| c.pollutant == Pollutant::Pm25)
        .unwrap();
    assert_eq!(pm25.display, MISSING_VALUE);
    Ok(())
}

#[test]
fn active_and_inactive_partition_the_local_authority() -> Result<(), LondonAirError> {
    let client = client();
    for la in client.snapshot().local_authorities() {
        let sites = client.sites_in().local_authority(&la.name).call()?;
        let table = client.site_table().local_authority(&la.name).call()?;

        let mut codes: Vec<&str> = table
            .active
            .iter()
            .map(|row| row.site_code.as_str())
            .chain(table.inactive.iter().map(|site| site.site_code.as_str()))
            .collect();
        let mut expected: Vec<&str> = sites.iter().map(|s| s.code.as_str()).collect();
        codes.sort_unstable();
        expected.sort_unstable();
        assert_eq!(codes, expected);
    }
    Ok(())
}

#[test]
fn unknown_local_authority() {
    let client = client();
    assert!(matches!(
        client.site_table().local_authority("Gotham").call(),
        Err(LondonAirError::Lookup(LookupError::UnknownLocalAuthority(name))) if name == "Gotham"
    ));
}

#[test]
fn nearest_active_sites_to_oxford_circus() {
    let results = client()
        .nearest_sites()
        .location(LatLon(51.5152, -0.1419))
        .site_limit(2)
        .active_only(true)
        .call();

    let codes: Vec<&str> = results.iter().map(|(s, _)| s.code.as_str()).collect();
    assert_eq!(codes, vec!["WM6", "MY1"]);
    assert!(results[0].1 <= results[1].1);
}

#[test]
fn bounding_box_skips_nan_pairs() {
    let bbox = bounding_box(&[[1.0, 2.0], [f64::NAN, 3.0], [4.0, 5.0]]).unwrap();
    assert_eq!(bbox.to_leaflet(), [[2.0, 1.0], [5.0, 4.0]]);
    assert!(bounding_box(&[[f64::NAN, f64::NAN]]).is_none());
}

#[test]
fn duplicate_local_authority_rejected() {
    let result = Snapshot::from_json()
        .local_authorities(r#"[{"name": "Camden", "code": "7"}, {"name": "Camden", "code": "8"}]"#)
        .call();
    assert!(matches!(
        result,
        Err(SnapshotError::DuplicateLocalAuthorityName(name)) if name == "Camden"
    ));
}
