//! VizVault - Backup for your Vizzes
//!
//! Command-line entry point: prints build metadata, answers a health probe,
//! or prints the banner.

pub mod build_info;
pub mod cli;
pub mod exitcode;
pub mod util;

pub use build_info::BuildInfo;
