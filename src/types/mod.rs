pub mod geo;
pub mod pollutant;
pub mod reading;
pub mod site;
pub mod time_series;
