use crate::core::tools::run_tool;
use crate::types::{BoundingBox, BurnResult, GeoTransform};
use std::path::Path;
use std::process::Command;

/// Parameters for burning a vector layer onto a target grid
#[derive(Debug, Clone)]
pub struct RasterizeParams {
    /// Attribute field whose value is written into river cells
    pub attribute_field: String,
    /// Cell size in X, map units
    pub pixel_size_x: f64,
    /// Cell size in Y, map units (positive)
    pub pixel_size_y: f64,
    /// Target extent; the output raster is aligned to these bounds
    pub bounds: BoundingBox,
}

impl RasterizeParams {
    /// Target grid parameters matching a reference raster
    ///
    /// Pixel sizes and bounds are taken from the reference geotransform so
    /// the rasterized mask lands cell-for-cell on the reference grid.
    pub fn from_grid(
        geo_transform: &GeoTransform,
        width: usize,
        height: usize,
        attribute_field: impl Into<String>,
    ) -> Self {
        Self {
            attribute_field: attribute_field.into(),
            pixel_size_x: geo_transform.pixel_size_x(),
            pixel_size_y: geo_transform.pixel_size_y(),
            bounds: geo_transform.bounds(width, height),
        }
    }
}

/// External rasterizer invocation (`gdal_rasterize`)
pub struct VectorRasterizer {
    params: RasterizeParams,
}

impl VectorRasterizer {
    pub fn new(params: RasterizeParams) -> Self {
        Self { params }
    }

    /// Argument vector for a `gdal_rasterize` run
    ///
    /// Numeric arguments use Rust's shortest-roundtrip float formatting,
    /// so the values the geotransform arithmetic produced are embedded
    /// without truncation.
    pub fn args(&self, vector_path: &Path, output_path: &Path) -> Vec<String> {
        let layer = vector_path
            .file_stem()
            .map(|s| s.to_string_lossy().into_owned())
            .unwrap_or_default();

        vec![
            "-a".to_string(),
            self.params.attribute_field.clone(),
            "-tr".to_string(),
            self.params.pixel_size_x.to_string(),
            self.params.pixel_size_y.to_string(),
            "-te".to_string(),
            self.params.bounds.min_x.to_string(),
            self.params.bounds.min_y.to_string(),
            self.params.bounds.max_x.to_string(),
            self.params.bounds.max_y.to_string(),
            "-l".to_string(),
            layer,
            vector_path.to_string_lossy().into_owned(),
            output_path.to_string_lossy().into_owned(),
        ]
    }

    /// Rasterize the vector file onto the target grid
    pub fn rasterize(&self, vector_path: &Path, output_path: &Path) -> BurnResult<()> {
        log::info!(
            "Rasterizing {} -> {}",
            vector_path.display(),
            output_path.display()
        );

        let mut command = Command::new("gdal_rasterize");
        command.args(self.args(vector_path, output_path));
        run_tool("gdal_rasterize", &mut command)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    fn test_params() -> RasterizeParams {
        let gt = GeoTransform::north_up(500_000.0, 4_600_000.0, 30.0, -30.0);
        RasterizeParams::from_grid(&gt, 100, 80, "RiverLine")
    }

    #[test]
    fn test_grid_parameters_from_reference_raster() {
        let params = test_params();

        assert_eq!(params.pixel_size_x, 30.0);
        assert_eq!(params.pixel_size_y, 30.0);
        assert_eq!(params.bounds.min_x, 500_000.0);
        assert_eq!(params.bounds.min_y, 4_600_000.0 - 80.0 * 30.0);
        assert_eq!(params.bounds.max_x, 500_000.0 + 100.0 * 30.0);
        assert_eq!(params.bounds.max_y, 4_600_000.0);
    }

    #[test]
    fn test_args_embed_grid_numbers_without_truncation() {
        let gt = GeoTransform::north_up(-93.62871, 42.04554, 0.0002777777778, -0.0002777777778);
        let params = RasterizeParams::from_grid(&gt, 3600, 3600, "RiverLine");
        let rasterizer = VectorRasterizer::new(params.clone());

        let args = rasterizer.args(
            &PathBuf::from("/data/NHDriver.shp"),
            &PathBuf::from("/data/NHDriver.tif"),
        );

        // exactly the values the geotransform arithmetic produced
        assert_eq!(args[3], params.pixel_size_x.to_string());
        assert_eq!(args[4], params.pixel_size_y.to_string());
        assert_eq!(args[6], params.bounds.min_x.to_string());
        assert_eq!(args[7], params.bounds.min_y.to_string());
        assert_eq!(args[8], params.bounds.max_x.to_string());
        assert_eq!(args[9], params.bounds.max_y.to_string());
    }

    #[test]
    fn test_args_layer_and_file_order() {
        let rasterizer = VectorRasterizer::new(test_params());
        let args = rasterizer.args(
            &PathBuf::from("/data/NHDriver.shp"),
            &PathBuf::from("/data/NHDriver.tif"),
        );

        assert_eq!(args[0], "-a");
        assert_eq!(args[1], "RiverLine");
        assert_eq!(args[10], "-l");
        assert_eq!(args[11], "NHDriver");
        assert_eq!(args[12], "/data/NHDriver.shp");
        assert_eq!(args[13], "/data/NHDriver.tif");
    }
}
