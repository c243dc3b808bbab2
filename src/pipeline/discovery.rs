use std::path::Path;

use super::error::PipelineError;

/// Shader sources the pipeline knows how to build. Anything else in the
/// folder is ignored.
pub const SHADER_NAMES: [&str; 2] = ["default.frag", "default.vert"];

/// Lists the recognized shader files directly inside `dir` (non-recursive).
pub fn discover_shaders(dir: &Path) -> Result<Vec<String>, PipelineError> {
    let discovery_err = |source| PipelineError::Discovery {
        dir: dir.to_path_buf(),
        source,
    };

    let mut matched = Vec::new();
    for entry in std::fs::read_dir(dir).map_err(discovery_err)? {
        let entry = entry.map_err(discovery_err)?;
        if !entry.file_type().map_err(discovery_err)?.is_file() {
            continue;
        }
        if let Some(name) = entry.file_name().to_str() {
            if SHADER_NAMES.contains(&name) {
                matched.push(name.to_string());
            }
        }
    }

    // Listing order is platform dependent; sort so runs are deterministic.
    matched.sort();
    Ok(matched)
}
