use futures_util::future::join_all;
use log::debug;
use std::path::Path;

use crate::error::{NON_UTF8_NAME, PackageError};
use crate::runtime::Runtime;

use super::descriptor::Descriptor;
use super::loader::load;

/// Result of scanning a source directory.
#[derive(Debug, Default)]
pub struct Scan {
    /// Packages that passed validation, in no particular order
    pub packages: Vec<Descriptor>,
    /// Entries that failed to load, with the reason
    pub skipped: Vec<(String, PackageError)>,
}

/// Load every entry of `source_dir` concurrently.
///
/// Only an unreadable source directory is an error; a bad entry lands in
/// [`Scan::skipped`] and never stops the other entries from loading.
#[tracing::instrument(skip(runtime))]
pub async fn scan<R: Runtime>(runtime: &R, source_dir: &Path) -> Result<Scan, PackageError> {
    let entries = runtime
        .read_dir(source_dir)
        .await
        .map_err(|source| PackageError::SourceUnreadable {
            path: source_dir.to_path_buf(),
            source,
        })?;

    let mut scan = Scan::default();
    let mut identifiers = Vec::new();
    for entry in &entries {
        let Some(file_name) = entry.file_name() else {
            continue;
        };
        match file_name.to_str() {
            Some(name) => identifiers.push(name.to_string()),
            None => {
                let identifier = file_name.to_string_lossy().into_owned();
                debug!("Skipping entry with a non UTF-8 name: {:?}", entry);
                let error = PackageError::invalid(&identifier, NON_UTF8_NAME);
                scan.skipped.push((identifier, error));
            }
        }
    }
    debug!("Found {} entries in {:?}", entries.len(), source_dir);

    let attempts = identifiers.into_iter().map(move |identifier| async move {
        let result = load(runtime, &identifier, source_dir).await;
        (identifier, result)
    });

    for (identifier, result) in join_all(attempts).await {
        match result {
            Ok(descriptor) => scan.packages.push(descriptor),
            Err(e) => {
                debug!("Skipping package '{}': {}", identifier, e);
                scan.skipped.push((identifier, e));
            }
        }
    }

    Ok(scan)
}

/// The valid packages in `source_dir`.
pub async fn scan_all<R: Runtime>(
    runtime: &R,
    source_dir: &Path,
) -> Result<Vec<Descriptor>, PackageError> {
    Ok(scan(runtime, source_dir).await?.packages)
}
