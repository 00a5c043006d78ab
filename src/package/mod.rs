//! Package discovery, validation and installation
//!
//! Packages live in a source directory, one entry per package. Each entry is
//! loaded into a [`Descriptor`] by [`load`]; [`scan_all`] loads every entry and
//! keeps the valid ones, and [`install`] runs a single package's install hook.

mod descriptor;
mod hook;
mod installer;
mod loader;
mod manifest;
mod scanner;

use std::path::{Component, Path};

pub use descriptor::Descriptor;
pub use hook::{
    CopyHook, INSTALL_PATH_ENV, InstallContext, InstallHook, InstallOutput, PACKAGE_DIR_ENV,
    RunHook,
};
pub use installer::install;
pub use loader::load;
pub use manifest::{InstallSpec, MANIFEST_FILE, Manifest, RunSpec};
pub use scanner::{Scan, scan, scan_all};

/// True if `name` is exactly one ordinary path component (no separators, `.` or `..`).
pub(crate) fn is_plain_component(name: &str) -> bool {
    let mut components = Path::new(name).components();
    matches!(
        (components.next(), components.next()),
        (Some(Component::Normal(_)), None)
    )
}
