use std::path::PathBuf;

use clap::ValueEnum;

/// Deployment layouts known to the pipeline. `Debug` mirrors the Windows
/// build tree, `Posix` the flat Unix one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Layout {
    Debug,
    Posix,
}

impl Layout {
    /// Picks the layout matching the host operating system.
    pub fn detect() -> Self {
        cfg_if::cfg_if! {
            if #[cfg(target_os = "windows")] {
                Layout::Debug
            } else {
                Layout::Posix
            }
        }
    }

    pub fn deploy_dir(self) -> PathBuf {
        match self {
            Layout::Debug => PathBuf::from("../bin/debug/shaders"),
            Layout::Posix => PathBuf::from("../bin/shaders"),
        }
    }
}

/// Resolves the deployment directory once at startup: an explicit override
/// wins, then a requested layout, then host detection.
pub fn resolve_deploy_dir(explicit: Option<PathBuf>, layout: Option<Layout>) -> PathBuf {
    match explicit {
        Some(dir) => dir,
        None => layout.unwrap_or_else(Layout::detect).deploy_dir(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_explicit_dir_wins() {
        let dir = resolve_deploy_dir(Some(PathBuf::from("out/shaders")), Some(Layout::Debug));
        assert_eq!(dir, PathBuf::from("out/shaders"));
    }

    #[test]
    fn test_layout_dirs() {
        assert_eq!(
            resolve_deploy_dir(None, Some(Layout::Debug)),
            PathBuf::from("../bin/debug/shaders")
        );
        assert_eq!(
            resolve_deploy_dir(None, Some(Layout::Posix)),
            PathBuf::from("../bin/shaders")
        );
    }

    #[test]
    fn test_detected_layout_is_a_known_one() {
        let dir = resolve_deploy_dir(None, None);
        assert!(
            dir == PathBuf::from("../bin/debug/shaders") || dir == PathBuf::from("../bin/shaders")
        );
    }
}
