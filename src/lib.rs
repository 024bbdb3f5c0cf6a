//! msbuild-cmd - MSBuild command construction and executable discovery.
//!
//! This crate turns a typed set of build options into the exact argument
//! list understood by MSBuild (or Mono's xbuild) and locates an installed
//! executable when the caller does not name one. It never runs the build:
//! the resulting [`MsBuildCommand`] is handed to whatever process runner
//! the caller prefers.

pub mod builder;
pub mod error;
pub mod finder;
pub mod options;
pub mod probe;
pub mod template;

pub use builder::{build_arguments, construct, construct_with, MsBuildCommand};
pub use error::{Error, Result};
pub use finder::{find, MsBuildFinder};
pub use options::{Architecture, MsBuildOptions};
pub use template::BuildInput;
