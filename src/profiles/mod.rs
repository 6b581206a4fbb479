/// Browser capability descriptors and the static registry.
pub mod browsers;
/// Weighted locale, architecture and device-model catalogs.
pub mod catalogs;
