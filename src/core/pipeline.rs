use crate::core::burn::{BurnParams, StreamBurner};
use crate::core::distance::{DistanceGridPaths, DistanceParams, DistanceProcessor};
use crate::core::rasterize::{RasterizeParams, VectorRasterizer};
use crate::core::translate::GridTranslator;
use crate::io::raster::RasterReader;
use crate::types::BurnResult;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Parameters for a full stream-burn run
#[derive(Debug, Clone)]
pub struct PipelineParams {
    /// Vector attribute field marking river cells
    pub attribute_field: String,
    /// Proximity-step parameters
    pub distance: DistanceParams,
    /// Compositor parameters
    pub burn: BurnParams,
    /// Run the burn compositor after the proximity grids are produced
    pub apply_burn: bool,
    /// Re-open the burned DEM and log its statistics
    pub verify_output: bool,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            attribute_field: "RiverLine".to_string(),
            distance: DistanceParams::default(),
            burn: BurnParams::default(),
            apply_burn: false,
            verify_output: false,
        }
    }
}

/// Files produced by a pipeline run
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PipelineOutputs {
    /// River mask aligned to the DEM grid
    pub river_raster: PathBuf,
    /// Euclidean distance to the nearest river cell (GeoTIFF)
    pub distance_grid: PathBuf,
    /// Nearest-river-cell allocation (GeoTIFF)
    pub allocation_grid: PathBuf,
    /// Buffer zones out to the configured radius (GeoTIFF)
    pub buffer_grid: PathBuf,
    /// Burned DEM, present when the compositor ran
    pub burned_dem: Option<PathBuf>,
}

/// Sequential stream-burn pipeline
///
/// Load DEM -> rasterize river vector -> proximity grids -> GeoTIFF
/// translation, with an opt-in burn step at the end. Each step depends on
/// the previous step's output file; a failing step stops the run.
pub struct BurnPipeline {
    dem_path: PathBuf,
    river_path: PathBuf,
    params: PipelineParams,
}

impl BurnPipeline {
    pub fn new<P: AsRef<Path>>(dem_path: P, river_path: P) -> Self {
        Self::with_params(dem_path, river_path, PipelineParams::default())
    }

    pub fn with_params<P: AsRef<Path>>(dem_path: P, river_path: P, params: PipelineParams) -> Self {
        Self {
            dem_path: dem_path.as_ref().to_path_buf(),
            river_path: river_path.as_ref().to_path_buf(),
            params,
        }
    }

    pub fn params(&self) -> &PipelineParams {
        &self.params
    }

    /// Output paths this pipeline will produce, derived from the input
    /// file names without touching the file system
    pub fn planned_outputs(&self) -> PipelineOutputs {
        let (river_root, _) = split_ext(&self.river_path);
        let burned_dem = self.params.apply_burn.then(|| self.burned_dem_path());

        PipelineOutputs {
            river_raster: PathBuf::from(format!("{}.tif", river_root)),
            distance_grid: PathBuf::from(format!("{}_dist.tif", river_root)),
            allocation_grid: PathBuf::from(format!("{}_alloc.tif", river_root)),
            buffer_grid: PathBuf::from(format!("{}_buf.tif", river_root)),
            burned_dem,
        }
    }

    /// `<dem-stem>_streamburn1<dem-ext>`, next to the input DEM
    pub fn burned_dem_path(&self) -> PathBuf {
        let (dem_root, dem_ext) = split_ext(&self.dem_path);
        PathBuf::from(format!("{}_streamburn1{}", dem_root, dem_ext))
    }

    /// Run the pipeline
    pub fn run(&self) -> BurnResult<PipelineOutputs> {
        log::info!(
            "Starting stream-burn pipeline: DEM={}, river={}",
            self.dem_path.display(),
            self.river_path.display()
        );

        let outputs = self.planned_outputs();
        let (river_root, _) = split_ext(&self.river_path);

        // Step 1: load the DEM; its grid defines every later step
        let dem = RasterReader::read(&self.dem_path)?;
        log::info!("DEM info loaded: {}x{} cells", dem.width(), dem.height());

        // Step 2: rasterize the river vector onto the DEM grid
        let rasterize_params = RasterizeParams::from_grid(
            &dem.geo_transform,
            dem.width(),
            dem.height(),
            self.params.attribute_field.clone(),
        );
        VectorRasterizer::new(rasterize_params)
            .rasterize(&self.river_path, &outputs.river_raster)?;

        // Step 3: Euclidean distance, allocation and buffer grids
        let native_grids = DistanceGridPaths::from_stem(&river_root);
        DistanceProcessor::new(self.params.distance.clone())
            .compute(&outputs.river_raster, &native_grids)?;

        // Step 4: convert the native grid payloads to compressed GeoTIFF
        let translator = GridTranslator::standard();
        translator.translate(&native_grids.buffer.with_extension("sdat"), &outputs.buffer_grid)?;
        translator.translate(&native_grids.distance.with_extension("sdat"), &outputs.distance_grid)?;
        translator.translate(
            &native_grids.allocation.with_extension("sdat"),
            &outputs.allocation_grid,
        )?;

        // Step 5 (opt-in): burn the rasterized channels into the DEM
        if self.params.apply_burn {
            let river = RasterReader::read(&outputs.river_raster)?;
            let burned_path = self.burned_dem_path();

            StreamBurner::new(self.params.burn.clone())
                .burn_to_file(&dem, &river.data, &burned_path)?;

            if self.params.verify_output {
                let check = RasterReader::read(&burned_path)?;
                log::info!(
                    "Verified burned DEM: {}x{} cells",
                    check.width(),
                    check.height()
                );
            }
        }

        log::info!("Stream-burn pipeline finished");
        Ok(outputs)
    }
}

/// Split a path into its extension-free prefix and the extension with its
/// leading dot, mirroring how the output names are concatenated
fn split_ext(path: &Path) -> (String, String) {
    let full = path.to_string_lossy().into_owned();
    match path.extension() {
        Some(ext) => {
            let ext = format!(".{}", ext.to_string_lossy());
            let root = full[..full.len() - ext.len()].to_string();
            (root, ext)
        }
        None => (full, String::new()),
    }
}
