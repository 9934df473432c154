#[path = "property/scan_properties.rs"]
mod scan_properties;
