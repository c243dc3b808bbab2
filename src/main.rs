use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use shader_deploy::{pipeline, platform};

#[derive(Parser)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// The folder containing the shader sources
    shader_dir: PathBuf,

    /// The full compiler output will be shown
    #[arg(long)]
    verbose: bool,

    /// External shader compiler executable
    #[arg(long, default_value = "glslc")]
    compiler: String,

    /// Copy artifacts into this folder instead of the layout default
    #[arg(long)]
    deploy_dir: Option<PathBuf>,

    /// Deployment layout to use when --deploy-dir is not given
    #[arg(long, value_enum)]
    layout: Option<platform::Layout>,
}

fn main() -> ExitCode {
    env_logger::init();
    let args = Args::parse();

    let config = pipeline::Config {
        deploy_dir: platform::resolve_deploy_dir(args.deploy_dir, args.layout),
        shader_dir: args.shader_dir,
        work_dir: PathBuf::from("."),
        compiler: args.compiler,
        verbose: args.verbose,
    };

    log::info!("shader folder: {}", config.shader_dir.display());

    let summary = match pipeline::run(&config) {
        Ok(summary) => summary,
        Err(err) => {
            eprintln!("Error: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    for report in &summary.reports {
        match &report.result {
            Ok(dest) => println!("{} -> {}", report.shader, dest.display()),
            Err(err) => println!("{} failed: {err}", report.shader),
        }
    }

    if summary.all_succeeded() {
        ExitCode::SUCCESS
    } else {
        eprintln!("{} shader(s) failed to build", summary.failed_count());
        ExitCode::FAILURE
    }
}
