use crate::core::tools::run_tool;
use crate::types::BurnResult;
use std::path::{Path, PathBuf};
use std::process::Command;

/// Parameters for the grid proximity computation
#[derive(Debug, Clone)]
pub struct DistanceParams {
    /// Buffer radius in map units
    pub buffer_distance: f64,
    /// Equidistance interval for the buffer zones
    pub equidistance: i64,
}

impl Default for DistanceParams {
    fn default() -> Self {
        Self {
            buffer_distance: 500.0,
            equidistance: 100,
        }
    }
}

/// Output grids of one proximity run, in the distance tool's native format
#[derive(Debug, Clone)]
pub struct DistanceGridPaths {
    pub distance: PathBuf,
    pub allocation: PathBuf,
    pub buffer: PathBuf,
}

impl DistanceGridPaths {
    /// Derive output grid names from a base stem
    ///
    /// SAGA grids are addressed by their `.sgrd` header; the raster
    /// payload lands next to it as `.sdat`.
    pub fn from_stem(stem: &str) -> Self {
        Self {
            distance: PathBuf::from(format!("{}_dist.sgrd", stem)),
            allocation: PathBuf::from(format!("{}_alloc.sgrd", stem)),
            buffer: PathBuf::from(format!("{}_buf.sgrd", stem)),
        }
    }
}

/// External grid-distance invocation (`saga_cmd grid_tools 10`)
///
/// Computes, for every cell, the Euclidean distance to the nearest source
/// cell, the id of that nearest source (allocation), and buffer zones out
/// to the configured radius.
pub struct DistanceProcessor {
    params: DistanceParams,
}

impl DistanceProcessor {
    pub fn new(params: DistanceParams) -> Self {
        Self { params }
    }

    /// Processor with the tool's stock buffer radius and interval
    pub fn standard() -> Self {
        Self::new(DistanceParams::default())
    }

    /// Argument vector for a `saga_cmd grid_tools 10` run
    pub fn args(&self, source: &Path, outputs: &DistanceGridPaths) -> Vec<String> {
        vec![
            "grid_tools".to_string(),
            "10".to_string(),
            "-SOURCE".to_string(),
            source.to_string_lossy().into_owned(),
            "-DISTANCE".to_string(),
            outputs.distance.to_string_lossy().into_owned(),
            "-ALLOC".to_string(),
            outputs.allocation.to_string_lossy().into_owned(),
            "-BUFFER".to_string(),
            outputs.buffer.to_string_lossy().into_owned(),
            "-DIST".to_string(),
            self.params.buffer_distance.to_string(),
            "-IVAL".to_string(),
            self.params.equidistance.to_string(),
        ]
    }

    /// Compute distance, allocation and buffer grids from a source raster
    pub fn compute(&self, source: &Path, outputs: &DistanceGridPaths) -> BurnResult<()> {
        log::info!(
            "Computing proximity grids from {} (buffer {} / interval {})",
            source.display(),
            self.params.buffer_distance,
            self.params.equidistance
        );

        let mut command = Command::new("saga_cmd");
        command.args(self.args(source, outputs));
        run_tool("saga_cmd", &mut command)
    }
}
