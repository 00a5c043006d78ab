use anyhow::anyhow;
use log::info;
use std::path::Path;

use crate::error::{NO_INSTALL_FUNCTION, PackageError};
use crate::runtime::Runtime;

use super::hook::{InstallContext, InstallOutput};
use super::is_plain_component;
use super::loader::load;

/// Install one package into `<install_root>/<name>`.
///
/// Every failure is reported as [`PackageError::InstallFailed`] for `identifier`.
/// The hook's output is returned as-is. Nothing is rolled back on failure.
#[tracing::instrument(skip(runtime))]
pub async fn install<R: Runtime>(
    runtime: &R,
    identifier: &str,
    source_dir: &Path,
    install_root: &Path,
) -> Result<InstallOutput, PackageError> {
    let failed = |cause: anyhow::Error| PackageError::install_failed(identifier, cause);

    let descriptor = load(runtime, identifier, source_dir)
        .await
        .map_err(|e| failed(e.into()))?;

    let hook = descriptor
        .install
        .clone()
        .ok_or_else(|| failed(anyhow!(NO_INSTALL_FUNCTION)))?;

    // The name becomes a directory under the install root
    if !is_plain_component(&descriptor.name) {
        return Err(failed(anyhow!(
            "invalid package name {:?}: must be a single path component",
            descriptor.name
        )));
    }

    let target_dir = install_root.join(&descriptor.name);
    runtime
        .create_dir_all(&target_dir)
        .await
        .map_err(|e| failed(e.context(format!("Failed to create {:?}", target_dir))))?;
    let install_path = runtime.canonicalize(&target_dir).await.map_err(failed)?;

    info!("Installing '{}' into {:?}", identifier, install_path);
    let context = InstallContext {
        install_path,
        package_dir: descriptor.package_dir,
    };
    hook.install(runtime, &context).await.map_err(failed)
}
