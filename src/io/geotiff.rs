use crate::types::{BurnError, BurnResult, GeoTransform};
use gdal::raster::{Buffer, GdalDataType, GdalType, RasterCreationOption};
use gdal::DriverManager;
use ndarray::Array2;
use num_traits::{NumCast, Zero};
use std::path::Path;

/// Creation options for GeoTIFF outputs
#[derive(Debug, Clone)]
pub struct GeoTiffOptions {
    /// Compression codec ("LZW", "DEFLATE", ...), or None for uncompressed
    pub compression: Option<String>,
    /// BigTIFF for outputs that may exceed 4GB
    pub big_tiff: bool,
    /// No-data sentinel to declare on the output band
    pub no_data: Option<f64>,
}

impl Default for GeoTiffOptions {
    fn default() -> Self {
        Self {
            compression: Some("LZW".to_string()),
            big_tiff: false,
            no_data: None,
        }
    }
}

/// Single-band GeoTIFF writer
pub struct GeoTiffWriter;

impl GeoTiffWriter {
    /// Write a grid to a single-band GeoTIFF with the given band type
    ///
    /// Pixel values are cast from f32 to the requested type cell by cell,
    /// so a DEM read from an Int16 source can be written back as Int16.
    /// The supported types mirror what GeoTIFF elevation products carry;
    /// complex and 64-bit integer bands are rejected.
    pub fn write_grid_as<P: AsRef<Path>>(
        path: P,
        grid: &Array2<f32>,
        band_type: GdalDataType,
        geo_transform: &GeoTransform,
        projection: &str,
        options: &GeoTiffOptions,
    ) -> BurnResult<()> {
        match band_type {
            GdalDataType::UInt8 => Self::write_grid::<u8, _>(path, grid, geo_transform, projection, options),
            GdalDataType::Int16 => Self::write_grid::<i16, _>(path, grid, geo_transform, projection, options),
            GdalDataType::UInt16 => Self::write_grid::<u16, _>(path, grid, geo_transform, projection, options),
            GdalDataType::UInt32 => Self::write_grid::<u32, _>(path, grid, geo_transform, projection, options),
            GdalDataType::Int32 => Self::write_grid::<i32, _>(path, grid, geo_transform, projection, options),
            GdalDataType::Float32 => Self::write_grid::<f32, _>(path, grid, geo_transform, projection, options),
            GdalDataType::Float64 => Self::write_grid::<f64, _>(path, grid, geo_transform, projection, options),
            other => Err(BurnError::InvalidFormat(format!(
                "Unsupported output band type: {:?}",
                other
            ))),
        }
    }

    /// Write a grid to a single-band GeoTIFF of type `T`
    pub fn write_grid<T, P>(
        path: P,
        grid: &Array2<f32>,
        geo_transform: &GeoTransform,
        projection: &str,
        options: &GeoTiffOptions,
    ) -> BurnResult<()>
    where
        T: GdalType + NumCast + Zero + Copy,
        P: AsRef<Path>,
    {
        log::info!("Writing GeoTIFF to: {}", path.as_ref().display());

        let (rows, cols) = grid.dim();
        let driver = DriverManager::get_driver_by_name("GTiff")?;

        let mut creation_options = Vec::new();
        if let Some(compression) = &options.compression {
            creation_options.push(RasterCreationOption {
                key: "COMPRESS",
                value: compression.as_str(),
            });
        }
        if options.big_tiff {
            creation_options.push(RasterCreationOption {
                key: "BIGTIFF",
                value: "YES",
            });
        }

        let mut dataset = driver.create_with_band_type_with_options::<T, _>(
            path.as_ref(),
            cols as isize,
            rows as isize,
            1,
            &creation_options,
        )?;

        dataset.set_geo_transform(&geo_transform.to_gdal())?;
        if !projection.is_empty() {
            dataset.set_projection(projection)?;
        }

        let mut band = dataset.rasterband(1)?;
        if let Some(nd) = options.no_data {
            band.set_no_data_value(Some(nd))?;
        }

        let data: Vec<T> = grid
            .iter()
            .map(|&v| NumCast::from(v).unwrap_or_else(T::zero))
            .collect();
        let buffer = Buffer::new((cols, rows), data);
        band.write((0, 0), (cols, rows), &buffer)?;

        Ok(())
    }
}
