//! Error types for command construction and executable discovery.

use std::path::PathBuf;

use thiserror::Error;

/// Convenience alias used across the crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Error during command construction or executable discovery.
#[derive(Debug, Error)]
pub enum Error {
    /// `construct` was handed an empty configuration. A build cannot
    /// proceed without at least the baseline defaults.
    #[error("No options specified!")]
    ConfigurationMissing,

    /// Every candidate install location was probed and none held a usable
    /// build executable.
    #[error("MSBuild executable not found; searched {} locations", .searched.len())]
    ExecutableNotFound {
        /// The candidate paths that were probed, most preferred first.
        searched: Vec<PathBuf>,
    },
}
