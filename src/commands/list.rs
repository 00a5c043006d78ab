use anyhow::Result;
use log::debug;

use crate::{config::Config, package::Descriptor, package::scan, runtime::Runtime};

const MIN_COLUMN_WIDTH: usize = 15;

/// List all packages available in the package source
#[tracing::instrument(skip(runtime, config))]
pub async fn list<R: Runtime>(runtime: &R, config: &Config) -> Result<()> {
    debug!("Listing packages from {:?}", config.package_source);

    let scan = scan(runtime, &config.package_source).await?;

    if config.verbose {
        for (identifier, err) in &scan.skipped {
            eprintln!("[error] Unable to load package '{}': {}", identifier, err);
        }
    }

    if scan.packages.is_empty() {
        println!("No packages available.");
        return Ok(());
    }

    debug!("Found {} package(s)", scan.packages.len());
    print!("{}", render_table(scan.packages));
    Ok(())
}

/// Render packages as a two-column Name/Description table, sorted by name.
pub fn render_table(mut packages: Vec<Descriptor>) -> String {
    packages.sort_by(|a, b| a.name.cmp(&b.name));

    let width = packages
        .iter()
        .map(|p| p.name.chars().count())
        .max()
        .unwrap_or_default()
        .max(MIN_COLUMN_WIDTH);

    let mut table = format!("{:<width$} {}\n", "Name", "Description", width = width);
    for package in &packages {
        table.push_str(&format!(
            "{:<width$} {}\n",
            package.name,
            package.description,
            width = width
        ));
    }
    table
}
