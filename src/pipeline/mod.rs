mod compile;
mod deploy;
mod discovery;
mod error;

pub use compile::{compile_shader, CompileOutput, CompileRequest};
pub use deploy::deploy_artifact;
pub use discovery::{discover_shaders, SHADER_NAMES};
pub use error::PipelineError;


use std::path::PathBuf;

use anyhow::Result;

/// Configuration for one run, resolved once at startup.
pub struct Config {
    /// Folder containing the shader sources.
    pub shader_dir: PathBuf,
    /// Folder the compiled artifacts are copied into.
    pub deploy_dir: PathBuf,
    /// Folder the intermediate artifacts are written to.
    pub work_dir: PathBuf,
    /// External compiler executable, looked up on the search path.
    pub compiler: String,
    pub verbose: bool,
}

/// Outcome for one shader file: the deployed artifact path, or the first
/// error hit while building it.
pub struct FileReport {
    pub shader: String,
    pub result: Result<PathBuf, PipelineError>,
}

pub struct RunSummary {
    pub reports: Vec<FileReport>,
}

impl RunSummary {
    pub fn all_succeeded(&self) -> bool {
        self.reports.iter().all(|r| r.result.is_ok())
    }

    pub fn failed_count(&self) -> usize {
        self.reports.iter().filter(|r| r.result.is_err()).count()
    }
}

/// Runs the whole pipeline: discover the shader sources, then compile and
/// deploy each match in turn. A failing shader is reported and skipped so
/// the remaining ones still build; a bad source directory aborts the run.
pub fn run(config: &Config) -> Result<RunSummary> {
    let shaders = discover_shaders(&config.shader_dir)?;
    log::info!("shader files = {shaders:?}");

    let mut reports = Vec::new();
    for shader in shaders {
        let result = build_one(config, &shader);
        match &result {
            Ok(dest) => log::info!("{shader} deployed to {}", dest.display()),
            Err(err) => log::error!("{shader}: {err}"),
        }
        reports.push(FileReport { shader, result });
    }

    Ok(RunSummary { reports })
}

// Deployment only happens after a confirmed compile success.
fn build_one(config: &Config, shader: &str) -> Result<PathBuf, PipelineError> {
    let request = CompileRequest::new(&config.shader_dir, shader, &config.work_dir, config.verbose);
    compile_shader(&config.compiler, &request)?;
    deploy_artifact(&request.output, &config.deploy_dir)
}
