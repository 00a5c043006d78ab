//! Command handlers: render pipeline results for the terminal.

mod install;
mod list;

pub use install::install;
pub use list::{list, render_table};
