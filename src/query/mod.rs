pub mod chart;
pub mod error;
pub mod heatmap;
pub mod local_authority;
pub mod site_table;
