use ndarray::Array2;
use serde::{Deserialize, Serialize};

/// Elevation sample type used throughout the pipeline
pub type Elevation = f32;

/// 2D elevation grid (rows x cols)
pub type ElevationGrid = Array2<Elevation>;

/// 2D river-mask grid; cells with value > 0 lie on a stream centerline
pub type MaskGrid = Array2<f32>;

/// Geospatial bounding box in map units
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BoundingBox {
    pub min_x: f64,
    pub min_y: f64,
    pub max_x: f64,
    pub max_y: f64,
}

/// Geospatial transformation parameters (GDAL coefficient order)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoTransform {
    pub top_left_x: f64,
    pub pixel_width: f64,
    pub rotation_x: f64,
    pub top_left_y: f64,
    pub rotation_y: f64,
    pub pixel_height: f64,
}

impl GeoTransform {
    /// Create a north-up transform with no rotation terms
    pub fn north_up(top_left_x: f64, top_left_y: f64, pixel_width: f64, pixel_height: f64) -> Self {
        Self {
            top_left_x,
            pixel_width,
            rotation_x: 0.0,
            top_left_y,
            rotation_y: 0.0,
            pixel_height,
        }
    }

    /// Create from a GDAL-style coefficient array
    /// [top_left_x, pixel_width, rotation_x, top_left_y, rotation_y, pixel_height]
    pub fn from_gdal(coeffs: [f64; 6]) -> Self {
        Self {
            top_left_x: coeffs[0],
            pixel_width: coeffs[1],
            rotation_x: coeffs[2],
            top_left_y: coeffs[3],
            rotation_y: coeffs[4],
            pixel_height: coeffs[5],
        }
    }

    /// Convert back to a GDAL-style coefficient array
    pub fn to_gdal(&self) -> [f64; 6] {
        [
            self.top_left_x,
            self.pixel_width,
            self.rotation_x,
            self.top_left_y,
            self.rotation_y,
            self.pixel_height,
        ]
    }

    /// Cell size in the X direction, in map units
    pub fn pixel_size_x(&self) -> f64 {
        self.pixel_width
    }

    /// Cell size in the Y direction, in map units (positive)
    ///
    /// North-up rasters carry a negative `pixel_height`; rasterization
    /// targets want the magnitude.
    pub fn pixel_size_y(&self) -> f64 {
        -self.pixel_height
    }

    /// Bounding box of a raster with the given dimensions, in closed form.
    ///
    /// Rotation terms participate so the result stays exact for rasters
    /// that are not strictly north-up:
    /// `min_y = top_left_y + width * rotation_y + height * pixel_height`,
    /// `max_x = top_left_x + width * pixel_width + height * rotation_x`.
    pub fn bounds(&self, width: usize, height: usize) -> BoundingBox {
        let w = width as f64;
        let h = height as f64;
        BoundingBox {
            min_x: self.top_left_x,
            min_y: self.top_left_y + w * self.rotation_y + h * self.pixel_height,
            max_x: self.top_left_x + w * self.pixel_width + h * self.rotation_x,
            max_y: self.top_left_y,
        }
    }
}

/// Summary statistics over the valid (non-NaN) cells of a grid
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GridStats {
    pub min: f32,
    pub max: f32,
    pub mean: f32,
    pub std_dev: f32,
    pub valid_count: usize,
}

impl GridStats {
    /// Compute statistics, skipping NaN cells
    ///
    /// Returns `None` when the grid holds no valid cell at all.
    pub fn compute(grid: &Array2<f32>) -> Option<Self> {
        let mut min = f32::INFINITY;
        let mut max = f32::NEG_INFINITY;
        let mut sum = 0.0f64;
        let mut count = 0usize;

        for &v in grid.iter() {
            if v.is_nan() {
                continue;
            }
            min = min.min(v);
            max = max.max(v);
            sum += v as f64;
            count += 1;
        }

        if count == 0 {
            return None;
        }

        let mean = sum / count as f64;
        let mut sq_sum = 0.0f64;
        for &v in grid.iter() {
            if v.is_nan() {
                continue;
            }
            let d = v as f64 - mean;
            sq_sum += d * d;
        }
        let std_dev = (sq_sum / count as f64).sqrt();

        Some(Self {
            min,
            max,
            mean: mean as f32,
            std_dev: std_dev as f32,
            valid_count: count,
        })
    }
}

impl std::fmt::Display for GridStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Minimum={:.3}, Maximum={:.3}, Mean={:.3}, StdDev={:.3}",
            self.min, self.max, self.mean, self.std_dev
        )
    }
}

/// Error types for stream-burn processing
#[derive(Debug, thiserror::Error)]
pub enum BurnError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid data format: {0}")]
    InvalidFormat(String),

    #[error("Processing error: {0}")]
    Processing(String),

    #[error("GDAL error: {0}")]
    Gdal(#[from] gdal::errors::GdalError),

    #[error("External tool error: `{tool}` exited with {status}")]
    ExternalTool { tool: String, status: String },
}

/// Result type for stream-burn operations
pub type BurnResult<T> = Result<T, BurnError>;
