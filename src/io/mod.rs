//! I/O modules for reading rasters and writing GeoTIFF products

pub mod geotiff;
pub mod raster;

pub use geotiff::{GeoTiffOptions, GeoTiffWriter};
pub use raster::{RasterData, RasterReader};
