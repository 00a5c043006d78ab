use log::debug;
use std::path::{Path, PathBuf};

use crate::error::PackageError;
use crate::runtime::Runtime;

use super::descriptor::Descriptor;
use super::hook;
use super::is_plain_component;
use super::manifest::{MANIFEST_FILE, Manifest};

/// Load and validate the package named `identifier` from `source_dir`.
///
/// `<source_dir>/<identifier>` may be a directory holding `package.json`, or a
/// manifest file itself; `<identifier>.json` is tried when neither exists.
#[tracing::instrument(skip(runtime))]
pub async fn load<R: Runtime>(
    runtime: &R,
    identifier: &str,
    source_dir: &Path,
) -> Result<Descriptor, PackageError> {
    let (manifest_path, package_dir) = locate(runtime, identifier, source_dir)?;
    debug!("Loading package '{}' from {:?}", identifier, manifest_path);

    let content = runtime
        .read_to_string(&manifest_path)
        .await
        .map_err(|e| PackageError::invalid(identifier, format!("malformed manifest: {:#}", e)))?;
    let manifest = Manifest::parse(&content)
        .map_err(|e| PackageError::invalid(identifier, format!("malformed manifest: {}", e)))?;

    let (name, description) = manifest.require_fields(identifier)?;
    let install = manifest.install.as_ref().and_then(hook::from_spec);

    Ok(Descriptor {
        identifier: identifier.to_string(),
        name,
        description,
        package_dir,
        install,
    })
}

/// Resolve the manifest file and package directory for an identifier.
fn locate<R: Runtime>(
    runtime: &R,
    identifier: &str,
    source_dir: &Path,
) -> Result<(PathBuf, PathBuf), PackageError> {
    let entry = source_dir.join(identifier);
    let not_found = |path: PathBuf| PackageError::NotFound {
        identifier: identifier.to_string(),
        path,
    };

    // Identifiers name entries directly inside the source directory
    if !is_plain_component(identifier) {
        return Err(not_found(entry));
    }

    if runtime.is_dir(&entry) {
        let manifest = entry.join(MANIFEST_FILE);
        if runtime.exists(&manifest) {
            return Ok((manifest, entry));
        }
        return Err(not_found(manifest));
    }

    if runtime.exists(&entry) {
        return Ok((entry, source_dir.to_path_buf()));
    }

    let with_extension = source_dir.join(format!("{}.json", identifier));
    if runtime.exists(&with_extension) {
        return Ok((with_extension, source_dir.to_path_buf()));
    }

    Err(not_found(entry))
}
