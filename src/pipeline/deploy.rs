use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use super::error::PipelineError;

/// Copies a compiled artifact into the deployment directory, creating the
/// directory if absent. An existing artifact of the same name is overwritten.
pub fn deploy_artifact(artifact: &Path, dest_dir: &Path) -> Result<PathBuf, PipelineError> {
    let deploy_err = |source| PipelineError::Deploy {
        artifact: artifact.to_path_buf(),
        source,
    };

    if !artifact.is_file() {
        return Err(deploy_err(io::Error::new(
            io::ErrorKind::NotFound,
            "compiled artifact not found",
        )));
    }

    if !dest_dir.exists() {
        log::info!("Creating deployment folder {}", dest_dir.display());
        fs::create_dir_all(dest_dir).map_err(deploy_err)?;
    }

    let file_name = artifact.file_name().ok_or_else(|| {
        deploy_err(io::Error::new(
            io::ErrorKind::InvalidInput,
            "artifact path has no file name",
        ))
    })?;

    let dest = dest_dir.join(file_name);
    fs::copy(artifact, &dest).map_err(deploy_err)?;
    Ok(dest)
}
