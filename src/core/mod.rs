//! Core stream-burn processing steps

pub mod burn;
pub mod distance;
pub mod pipeline;
pub mod rasterize;
pub mod tools;
pub mod translate;

// Re-export main types
pub use burn::{BurnParams, StreamBurner};
pub use distance::{DistanceGridPaths, DistanceParams, DistanceProcessor};
pub use pipeline::{BurnPipeline, PipelineOutputs, PipelineParams};
pub use rasterize::{RasterizeParams, VectorRasterizer};
pub use translate::{GridTranslator, TranslateParams};
