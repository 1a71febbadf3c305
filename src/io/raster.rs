use crate::types::{BoundingBox, BurnError, BurnResult, GeoTransform, GridStats};
use gdal::raster::GdalDataType;
use gdal::Dataset;
use ndarray::Array2;
use std::path::Path;

/// A raster band loaded into memory together with its georeferencing
#[derive(Debug, Clone)]
pub struct RasterData {
    /// Pixel values, rows x cols; no-data cells hold NaN
    pub data: Array2<f32>,
    pub geo_transform: GeoTransform,
    /// Projection as a WKT string (may be empty for unreferenced rasters)
    pub projection: String,
    /// Declared no-data sentinel, if any
    pub no_data: Option<f64>,
    /// Native data type of the band this raster was read from
    pub band_type: GdalDataType,
}

impl RasterData {
    pub fn width(&self) -> usize {
        self.data.ncols()
    }

    pub fn height(&self) -> usize {
        self.data.nrows()
    }

    /// Bounding box of the full grid in map units
    pub fn bounds(&self) -> BoundingBox {
        self.geo_transform.bounds(self.width(), self.height())
    }
}

/// Raster grid reader
pub struct RasterReader;

impl RasterReader {
    /// Read band 1 of a raster file
    ///
    /// Cells equal to the band's declared no-data sentinel are replaced by
    /// NaN in the returned array; every other cell is left untouched. The
    /// dataset handle is released before this returns.
    pub fn read<P: AsRef<Path>>(path: P) -> BurnResult<RasterData> {
        log::info!("Reading raster from: {}", path.as_ref().display());

        let dataset = Dataset::open(path.as_ref())?;
        let gdal_transform = dataset.geo_transform()?;
        let projection = dataset.projection();
        let (width, height) = dataset.raster_size();

        log::debug!("Raster size: {}x{}", width, height);
        log::debug!("Raster geotransform: {:?}", gdal_transform);

        let rasterband = dataset.rasterband(1)?;
        let no_data = rasterband.no_data_value();
        let band_type = rasterband.band_type();
        let band_data = rasterband.read_as::<f32>((0, 0), (width, height), (width, height), None)?;

        let mut data = Array2::from_shape_vec((height, width), band_data.data)
            .map_err(|e| BurnError::Processing(format!("Failed to reshape raster data: {}", e)))?;

        if let Some(nd) = no_data {
            mask_no_data(&mut data, nd as f32);
        }

        match GridStats::compute(&data) {
            Some(stats) => log::info!("[ STATS ] = {}", stats),
            None => log::warn!("Raster {} holds no valid cells", path.as_ref().display()),
        }

        Ok(RasterData {
            data,
            geo_transform: GeoTransform::from_gdal(gdal_transform),
            projection,
            no_data,
            band_type,
        })
    }
}

/// Replace cells equal to the declared no-data sentinel with NaN
pub fn mask_no_data(grid: &mut Array2<f32>, no_data: f32) {
    let mut masked = 0usize;
    for v in grid.iter_mut() {
        if *v == no_data {
            *v = f32::NAN;
            masked += 1;
        }
    }
    log::debug!("Masked {} no-data cells", masked);
}
