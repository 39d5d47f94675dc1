pub mod locate_site;
