use crate::core::tools::run_tool;
use crate::types::BurnResult;
use std::path::Path;
use std::process::Command;

/// Parameters for the format-translation step
#[derive(Debug, Clone)]
pub struct TranslateParams {
    /// GDAL output format token
    pub output_format: String,
    /// Compression creation option for the output
    pub compression: String,
}

impl Default for TranslateParams {
    fn default() -> Self {
        Self {
            output_format: "GTiff".to_string(),
            compression: "LZW".to_string(),
        }
    }
}

/// External format-translation invocation (`gdal_translate`)
pub struct GridTranslator {
    params: TranslateParams,
}

impl GridTranslator {
    pub fn new(params: TranslateParams) -> Self {
        Self { params }
    }

    /// Translator producing LZW-compressed GeoTIFF
    pub fn standard() -> Self {
        Self::new(TranslateParams::default())
    }

    /// Argument vector for a `gdal_translate` run
    pub fn args(&self, input: &Path, output: &Path) -> Vec<String> {
        vec![
            "-of".to_string(),
            self.params.output_format.clone(),
            "-co".to_string(),
            format!("COMPRESS={}", self.params.compression),
            input.to_string_lossy().into_owned(),
            output.to_string_lossy().into_owned(),
        ]
    }

    /// Convert a grid file into the configured output format
    pub fn translate(&self, input: &Path, output: &Path) -> BurnResult<()> {
        log::info!("Translating {} -> {}", input.display(), output.display());

        let mut command = Command::new("gdal_translate");
        command.args(self.args(input, output));
        run_tool("gdal_translate", &mut command)
    }
}
