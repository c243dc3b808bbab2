pub mod pipeline;
pub mod platform;

pub use pipeline::{run, Config, PipelineError, RunSummary};
pub use platform::Layout;
