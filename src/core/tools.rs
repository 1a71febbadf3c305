use crate::types::{BurnError, BurnResult};
use std::process::Command;

/// Run an external geoprocessing command to completion
///
/// The child inherits stdout/stderr so tool diagnostics stay visible.
/// A spawn failure or non-zero exit becomes `BurnError::ExternalTool`;
/// callers must not proceed to steps that depend on the tool's output.
pub fn run_tool(tool: &str, command: &mut Command) -> BurnResult<()> {
    log::info!("Invoking {}: {:?}", tool, command);

    let status = command.status().map_err(|e| BurnError::ExternalTool {
        tool: tool.to_string(),
        status: format!("failed to spawn: {}", e),
    })?;

    if !status.success() {
        return Err(BurnError::ExternalTool {
            tool: tool.to_string(),
            status: status.to_string(),
        });
    }

    log::debug!("{} finished successfully", tool);
    Ok(())
}

/// Check whether an external tool can be spawned at all
///
/// Used by callers that want to skip optional work (and by tests) when a
/// collaborator is not installed.
pub fn tool_available(tool: &str) -> bool {
    Command::new(tool)
        .arg("--version")
        .output()
        .map(|out| out.status.success())
        .unwrap_or(false)
}
