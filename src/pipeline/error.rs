use std::fmt;
use std::io;
use std::path::PathBuf;

/// Failure classes of the pipeline. `Discovery` aborts the run; the other
/// three are recorded per file and processing continues.
#[derive(Debug)]
pub enum PipelineError {
    /// The shader source directory could not be read.
    Discovery { dir: PathBuf, source: io::Error },
    /// The external compiler could not be started at all.
    Launch { compiler: String, source: io::Error },
    /// The compiler ran and reported failure.
    Compile {
        shader: String,
        code: Option<i32>,
        stderr: String,
    },
    /// Copying the artifact into the deployment directory failed.
    Deploy { artifact: PathBuf, source: io::Error },
}

impl fmt::Display for PipelineError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PipelineError::Discovery { dir, source } => {
                write!(f, "Failed to read shader folder {}: {}", dir.display(), source)
            }
            PipelineError::Launch { compiler, source } => {
                write!(f, "Failed to start compiler {compiler}: {source}")
            }
            PipelineError::Compile { shader, code, stderr } => {
                match code {
                    Some(code) => write!(f, "Compilation of {shader} failed (exit code {code})")?,
                    None => write!(f, "Compilation of {shader} was terminated by a signal")?,
                }
                if !stderr.is_empty() {
                    write!(f, ": {}", stderr.trim_end())?;
                }
                Ok(())
            }
            PipelineError::Deploy { artifact, source } => {
                write!(f, "Failed to deploy {}: {}", artifact.display(), source)
            }
        }
    }
}

impl std::error::Error for PipelineError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            PipelineError::Discovery { source, .. }
            | PipelineError::Launch { source, .. }
            | PipelineError::Deploy { source, .. } => Some(source),
            PipelineError::Compile { .. } => None,
        }
    }
}
