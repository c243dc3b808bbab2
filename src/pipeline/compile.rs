use std::path::{Path, PathBuf};
use std::process::Command;

use super::error::PipelineError;

/// A single invocation of the external compiler.
pub struct CompileRequest {
    pub input: PathBuf,
    pub output: PathBuf,
    pub verbose: bool,
}

impl CompileRequest {
    /// Builds the request for one recognized shader file. The artifact name
    /// comes from the source extension: `default.vert` becomes `vert.spv`.
    pub fn new(shader_dir: &Path, shader_name: &str, work_dir: &Path, verbose: bool) -> Self {
        let ext = Path::new(shader_name)
            .extension()
            .and_then(|e| e.to_str())
            .unwrap_or("");
        Self {
            input: shader_dir.join(shader_name),
            output: work_dir.join(format!("{ext}.spv")),
            verbose,
        }
    }
}

/// Diagnostic text captured from a successful compiler run.
#[derive(Debug)]
pub struct CompileOutput {
    pub stdout: String,
    pub stderr: String,
}

/// Runs `<compiler> <input> -o <output>` and waits for it to finish.
///
/// A spawn failure (compiler not on the search path) comes back as
/// `Launch`, a non-zero exit as `Compile` with the captured stderr.
pub fn compile_shader(
    compiler: &str,
    request: &CompileRequest,
) -> Result<CompileOutput, PipelineError> {
    let output = Command::new(compiler)
        .arg(&request.input)
        .arg("-o")
        .arg(&request.output)
        .output()
        .map_err(|source| PipelineError::Launch {
            compiler: compiler.to_string(),
            source,
        })?;

    let stdout = String::from_utf8_lossy(&output.stdout).into_owned();
    let stderr = String::from_utf8_lossy(&output.stderr).into_owned();

    if !output.status.success() {
        return Err(PipelineError::Compile {
            shader: request.input.display().to_string(),
            code: output.status.code(),
            stderr,
        });
    }

    log::info!("Shader {} compiled.", request.input.display());
    if request.verbose && !stdout.is_empty() {
        println!("{stdout}");
    }

    Ok(CompileOutput { stdout, stderr })
}
