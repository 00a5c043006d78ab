//! Process configuration, computed once at startup.
//!
//! Each location comes from (in order) an explicit command-line value, an
//! environment variable (handled by clap), or a per-user default.

use anyhow::{Context, Result};
use log::debug;
use std::path::PathBuf;

use crate::runtime::Runtime;

/// Environment variable naming the package source directory.
pub const PACKAGE_SOURCE_ENV: &str = "CUSTOM_MODULE_PATH";
/// Environment variable naming the install root.
pub const PACKAGE_PATH_ENV: &str = "CUSTOM_PACKAGE_PATH";

const APP_DIR: &str = "localpkg";
const HOME_APP_DIR: &str = ".localpkg";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Report isolated per-package failures and hook output
    pub verbose: bool,
    /// Directory containing one entry per available package
    pub package_source: PathBuf,
    /// Packages are installed to `<install_root>/<name>`
    pub install_root: PathBuf,
}

impl Config {
    pub fn resolve<R: Runtime>(
        runtime: &R,
        package_source: Option<PathBuf>,
        install_root: Option<PathBuf>,
        verbose: bool,
    ) -> Result<Self> {
        let package_source = match package_source {
            Some(path) => path,
            None => default_app_dir(runtime)?.join("packages"),
        };
        let install_root = match install_root {
            Some(path) => path,
            None => default_app_dir(runtime)?.join("installed"),
        };

        debug!(
            "Using package source {:?} and install root {:?}",
            package_source, install_root
        );

        Ok(Self {
            verbose,
            package_source,
            install_root,
        })
    }
}

/// Per-user application directory: the platform's local data directory,
/// falling back to a dot-directory in the home directory.
#[tracing::instrument(skip(runtime))]
fn default_app_dir<R: Runtime>(runtime: &R) -> Result<PathBuf> {
    if let Some(data_dir) = runtime.data_local_dir() {
        return Ok(data_dir.join(APP_DIR));
    }
    let home_dir = runtime
        .home_dir()
        .context("Could not find a local data or home directory")?;
    Ok(home_dir.join(HOME_APP_DIR))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::runtime::MockRuntime;

    #[test]
    fn test_explicit_paths_win() {
        // No expectations: explicit values must not touch the platform dirs
        let runtime = MockRuntime::new();

        let config = Config::resolve(
            &runtime,
            Some(PathBuf::from("/srv/packages")),
            Some(PathBuf::from("/opt/installed")),
            true,
        )
        .unwrap();

        assert_eq!(config.package_source, PathBuf::from("/srv/packages"));
        assert_eq!(config.install_root, PathBuf::from("/opt/installed"));
        assert!(config.verbose);
    }

    #[test]
    fn test_defaults_use_local_data_dir() {
        let mut runtime = MockRuntime::new();
        runtime
            .expect_data_local_dir()
            .returning(|| Some(PathBuf::from("/home/user/.local/share")));

        let config = Config::resolve(&runtime, None, None, false).unwrap();

        assert_eq!(
            config.package_source,
            PathBuf::from("/home/user/.local/share/localpkg/packages")
        );
        assert_eq!(
            config.install_root,
            PathBuf::from("/home/user/.local/share/localpkg/installed")
        );
        assert!(!config.verbose);
    }

    #[test]
    fn test_defaults_fall_back_to_home() {
        let mut runtime = MockRuntime::new();
        runtime.expect_data_local_dir().returning(|| None);
        runtime
            .expect_home_dir()
            .returning(|| Some(PathBuf::from("/home/user")));

        let config = Config::resolve(&runtime, Some(PathBuf::from("/src")), None, false).unwrap();

        assert_eq!(config.package_source, PathBuf::from("/src"));
        assert_eq!(
            config.install_root,
            PathBuf::from("/home/user/.localpkg/installed")
        );
    }

    #[test]
    fn test_no_directories_available() {
        let mut runtime = MockRuntime::new();
        runtime.expect_data_local_dir().returning(|| None);
        runtime.expect_home_dir().returning(|| None);

        let result = Config::resolve(&runtime, None, None, false);
        assert!(result.is_err());
    }
}
