use anyhow::{Result, bail};
use futures_util::StreamExt;
use futures_util::stream::FuturesUnordered;
use log::debug;

use crate::{config::Config, package, runtime::Runtime};

/// Install each identifier independently, reporting every outcome as it completes.
///
/// Returns an error only after all installs have finished, if any of them failed.
#[tracing::instrument(skip(runtime, config))]
pub async fn install<R: Runtime>(
    runtime: &R,
    config: &Config,
    identifiers: &[String],
) -> Result<()> {
    debug!(
        "Installing {} package(s) from {:?} into {:?}",
        identifiers.len(),
        config.package_source,
        config.install_root
    );

    let mut pending: FuturesUnordered<_> = identifiers
        .iter()
        .map(move |identifier| async move {
            let result = package::install(
                runtime,
                identifier,
                &config.package_source,
                &config.install_root,
            )
            .await;
            (identifier, result)
        })
        .collect();

    let mut failed = 0;
    while let Some((identifier, result)) = pending.next().await {
        match result {
            Ok(output) => {
                println!("[info] Installed package: {}", identifier);
                if config.verbose {
                    if let Some(summary) = output.summary {
                        println!("       {}", summary);
                    }
                }
            }
            Err(e) => {
                eprintln!("[error] {}", e);
                failed += 1;
            }
        }
    }

    if failed > 0 {
        bail!(
            "{} of {} package(s) failed to install",
            failed,
            identifiers.len()
        );
    }
    Ok(())
}
