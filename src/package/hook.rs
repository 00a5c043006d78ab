//! Install hooks: the capability a package uses to install itself.

use anyhow::{Context, Result, bail};
use async_trait::async_trait;
use log::debug;
use std::fmt;
use std::path::{Component, Path, PathBuf};
use std::process::Stdio;
use std::sync::Arc;
use tokio::process::Command;

use super::manifest::InstallSpec;
use crate::runtime::Runtime;

/// Environment variable carrying the install path to a `run` program.
pub const INSTALL_PATH_ENV: &str = "LOCALPKG_INSTALL_PATH";
/// Environment variable carrying the package directory to a `run` program.
pub const PACKAGE_DIR_ENV: &str = "LOCALPKG_PACKAGE_DIR";

/// Per-attempt values handed to a hook.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InstallContext {
    /// Absolute directory the package installs into
    pub install_path: PathBuf,
    /// Directory holding the package's own files
    pub package_dir: PathBuf,
}

/// Whatever a hook reports back. Not interpreted by the installer.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InstallOutput {
    pub summary: Option<String>,
}

/// A package's way of installing itself. File access goes through `runtime`.
#[async_trait]
pub trait InstallHook: Send + Sync + fmt::Debug {
    async fn install(
        &self,
        runtime: &dyn Runtime,
        context: &InstallContext,
    ) -> Result<InstallOutput>;
}

/// Build the hook for a manifest's install section.
///
/// Returns `None` when the section cannot be invoked (a `run` without a program).
pub(crate) fn from_spec(spec: &InstallSpec) -> Option<Arc<dyn InstallHook>> {
    match spec {
        InstallSpec::Run(run) if run.program.trim().is_empty() => None,
        InstallSpec::Run(run) => Some(Arc::new(RunHook {
            program: run.program.clone(),
            args: run.args.clone(),
        })),
        InstallSpec::Copy(files) => Some(Arc::new(CopyHook {
            files: files.clone(),
        })),
    }
}

/// Runs an entry-point program from the package directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunHook {
    pub program: String,
    pub args: Vec<String>,
}

impl RunHook {
    /// A program shipped inside the package wins over one on `PATH`.
    fn resolve_program(&self, runtime: &dyn Runtime, package_dir: &Path) -> PathBuf {
        let bundled = package_dir.join(&self.program);
        if runtime.is_file(&bundled) {
            bundled
        } else {
            PathBuf::from(&self.program)
        }
    }
}

#[async_trait]
impl InstallHook for RunHook {
    #[tracing::instrument(skip(self, runtime))]
    async fn install(
        &self,
        runtime: &dyn Runtime,
        context: &InstallContext,
    ) -> Result<InstallOutput> {
        let program = self.resolve_program(runtime, &context.package_dir);
        debug!("Running {:?} with args {:?}", program, self.args);

        let output = Command::new(&program)
            .args(&self.args)
            .current_dir(&context.package_dir)
            .env(INSTALL_PATH_ENV, &context.install_path)
            .env(PACKAGE_DIR_ENV, &context.package_dir)
            .stdin(Stdio::null())
            .output()
            .await
            .with_context(|| format!("Failed to run install program {:?}", program))?;

        if !output.status.success() {
            let stderr = String::from_utf8_lossy(&output.stderr);
            bail!(
                "Install program {:?} exited with {}: {}",
                program,
                output.status,
                stderr.trim()
            );
        }

        let stdout = String::from_utf8_lossy(&output.stdout).trim().to_string();
        Ok(InstallOutput {
            summary: (!stdout.is_empty()).then_some(stdout),
        })
    }
}

/// Copies files from the package directory, keeping their relative layout.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CopyHook {
    pub files: Vec<PathBuf>,
}

#[async_trait]
impl InstallHook for CopyHook {
    #[tracing::instrument(skip(self, runtime))]
    async fn install(
        &self,
        runtime: &dyn Runtime,
        context: &InstallContext,
    ) -> Result<InstallOutput> {
        // Validate everything up front so a bad entry copies nothing
        for file in &self.files {
            if !stays_inside(file) {
                bail!("Refusing to copy {:?}: path leaves the package directory", file);
            }
        }

        for file in &self.files {
            let from = context.package_dir.join(file);
            let to = context.install_path.join(file);
            if let Some(parent) = to.parent() {
                runtime
                    .create_dir_all(parent)
                    .await
                    .with_context(|| format!("Failed to create directory {:?}", parent))?;
            }
            debug!("Copying {:?} -> {:?}", from, to);
            runtime
                .copy(&from, &to)
                .await
                .with_context(|| format!("Failed to copy {:?} to {:?}", from, to))?;
        }

        Ok(InstallOutput {
            summary: Some(format!("copied {} file(s)", self.files.len())),
        })
    }
}

fn stays_inside(path: &Path) -> bool {
    path.components().next().is_some()
        && path
            .components()
            .all(|c| matches!(c, Component::Normal(_) | Component::CurDir))
}
