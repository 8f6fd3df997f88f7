// Library exports for the binary and integration tests
pub mod config;
pub mod constants;
pub mod generate;
pub mod icon;
pub mod raster;
