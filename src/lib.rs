//! streamburn: A Stream-Burning Preprocessor for DEMs
//!
//! Burns mapped river centerlines into a digital elevation model so that
//! flow-accumulation algorithms follow the surveyed channels instead of
//! flat or noisy valley floors. Rasterization, proximity grids and format
//! translation are delegated to external geoprocessing tools
//! (`gdal_rasterize`, `saga_cmd`, `gdal_translate`); the compositing and
//! raster I/O happen in-process through GDAL.

use pyo3::prelude::*;

pub mod core;
pub mod io;
pub mod types;

// Re-export main types and functions for easier access
pub use types::{
    BoundingBox, BurnError, BurnResult, Elevation, ElevationGrid, GeoTransform, GridStats,
    MaskGrid,
};

pub use io::{GeoTiffOptions, GeoTiffWriter, RasterData, RasterReader};

pub use crate::core::{
    BurnParams, BurnPipeline, DistanceParams, PipelineOutputs, PipelineParams, StreamBurner,
};

/// Python module definition
#[pymodule]
fn _core(_py: Python, m: &PyModule) -> PyResult<()> {
    // Add Python bindings here
    m.add_class::<PyBurnPipeline>()?;
    m.add_class::<PyPipelineOutputs>()?;
    Ok(())
}

/// Python wrapper for BurnPipeline
#[pyclass(name = "BurnPipeline")]
struct PyBurnPipeline {
    dem_path: String,
    river_path: String,
    params: PipelineParams,
}

#[pymethods]
impl PyBurnPipeline {
    #[new]
    fn new(input_dem: String, input_river: String) -> Self {
        PyBurnPipeline {
            dem_path: input_dem,
            river_path: input_river,
            params: PipelineParams::default(),
        }
    }

    /// Run the burn compositor after the proximity grids are produced
    fn set_apply_burn(&mut self, apply: bool) {
        self.params.apply_burn = apply;
    }

    fn set_burn_elevation(&mut self, elevation: f32) {
        self.params.burn.burn_elevation = elevation;
    }

    fn set_attribute_field(&mut self, field: String) {
        self.params.attribute_field = field;
    }

    fn set_buffer_distance(&mut self, distance: f64) {
        self.params.distance.buffer_distance = distance;
    }

    fn set_verify_output(&mut self, verify: bool) {
        self.params.verify_output = verify;
    }

    fn run(&self) -> PyResult<PyPipelineOutputs> {
        let pipeline = BurnPipeline::with_params(
            &self.dem_path,
            &self.river_path,
            self.params.clone(),
        );

        let outputs = pipeline
            .run()
            .map_err(|e| PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!("{}", e)))?;

        Ok(PyPipelineOutputs { inner: outputs })
    }

    fn planned_outputs(&self) -> PyPipelineOutputs {
        let pipeline = BurnPipeline::with_params(
            &self.dem_path,
            &self.river_path,
            self.params.clone(),
        );

        PyPipelineOutputs {
            inner: pipeline.planned_outputs(),
        }
    }
}

/// Python wrapper for PipelineOutputs
#[pyclass(name = "PipelineOutputs")]
struct PyPipelineOutputs {
    inner: PipelineOutputs,
}

#[pymethods]
impl PyPipelineOutputs {
    #[getter]
    fn river_raster(&self) -> String {
        self.inner.river_raster.to_string_lossy().into_owned()
    }

    #[getter]
    fn distance_grid(&self) -> String {
        self.inner.distance_grid.to_string_lossy().into_owned()
    }

    #[getter]
    fn allocation_grid(&self) -> String {
        self.inner.allocation_grid.to_string_lossy().into_owned()
    }

    #[getter]
    fn buffer_grid(&self) -> String {
        self.inner.buffer_grid.to_string_lossy().into_owned()
    }

    #[getter]
    fn burned_dem(&self) -> Option<String> {
        self.inner
            .burned_dem
            .as_ref()
            .map(|p| p.to_string_lossy().into_owned())
    }

    fn __str__(&self) -> String {
        format!(
            "PipelineOutputs(river_raster='{}', distance_grid='{}', allocation_grid='{}', buffer_grid='{}')",
            self.inner.river_raster.display(),
            self.inner.distance_grid.display(),
            self.inner.allocation_grid.display(),
            self.inner.buffer_grid.display()
        )
    }
}
