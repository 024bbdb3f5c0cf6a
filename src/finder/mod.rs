//! MSBuild executable discovery.
//!
//! Locates an installed build tool without running it. Candidates are
//! probed in a deterministic most-preferred-first order and the first one
//! that exists wins. On Windows the search walks conventional install
//! directories derived from environment hints; elsewhere it looks for
//! `msbuild` (Mono 5+) and `xbuild` on PATH.

mod candidates;

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::options::MsBuildOptions;
use crate::probe::{EnvSource, FsProbe, HostProbe};

/// Discover the best available build executable for `options`.
///
/// Results are not cached; each call probes the host afresh.
pub fn find(options: &MsBuildOptions) -> Result<PathBuf> {
    MsBuildFinder::new(HostProbe).find(options)
}

/// Executable finder parameterized over host probes.
pub struct MsBuildFinder<H> {
    host: H,
}

impl<H: FsProbe + EnvSource> MsBuildFinder<H> {
    /// Create a finder that probes through `host`.
    pub fn new(host: H) -> Self {
        MsBuildFinder { host }
    }

    /// Discover the best available build executable for `options`.
    pub fn find(&self, options: &MsBuildOptions) -> Result<PathBuf> {
        if cfg!(target_os = "windows") {
            self.find_windows(options)
        } else {
            self.find_unix()
        }
    }

    fn find_unix(&self) -> Result<PathBuf> {
        let mut searched = Vec::new();

        for name in candidates::UNIX_TOOLS {
            match self.host.which(name) {
                Some(path) => {
                    tracing::debug!(tool = name, path = %path.display(), "found build tool on PATH");
                    return Ok(path);
                }
                None => {
                    tracing::debug!(tool = name, "build tool not on PATH, trying next candidate");
                    searched.push(PathBuf::from(name));
                }
            }
        }

        Err(Error::ExecutableNotFound { searched })
    }

    fn find_windows(&self, options: &MsBuildOptions) -> Result<PathBuf> {
        let mut searched = Vec::new();

        for candidate in candidates::windows(options, &self.host) {
            if self.host.exists(&candidate) {
                tracing::debug!(path = %candidate.display(), "found MSBuild");
                return Ok(candidate);
            }
            tracing::debug!(path = %candidate.display(), "no MSBuild at candidate path");
            searched.push(candidate);
        }

        Err(Error::ExecutableNotFound { searched })
    }
}
