//! Host probing seams used by the executable finder.
//!
//! The finder only ever asks two questions of the host: "does this path
//! exist?" and "what does this environment variable / PATH lookup say?".
//! Keeping those behind traits lets tests fabricate a Windows install tree
//! on any platform.

use std::path::{Path, PathBuf};

/// Filesystem existence checks.
pub trait FsProbe {
    /// Whether a candidate executable exists at `path`.
    fn exists(&self, path: &Path) -> bool;
}

/// Environment lookups.
pub trait EnvSource {
    /// Read an environment variable, `None` when unset.
    fn var(&self, key: &str) -> Option<String>;

    /// Locate `name` on PATH.
    fn which(&self, name: &str) -> Option<PathBuf>;
}

impl<T: FsProbe + ?Sized> FsProbe for &T {
    fn exists(&self, path: &Path) -> bool {
        (**self).exists(path)
    }
}

impl<T: EnvSource + ?Sized> EnvSource for &T {
    fn var(&self, key: &str) -> Option<String> {
        (**self).var(key)
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        (**self).which(name)
    }
}

/// Probes backed by the real host.
#[derive(Debug, Clone, Copy, Default)]
pub struct HostProbe;

impl FsProbe for HostProbe {
    fn exists(&self, path: &Path) -> bool {
        path.exists()
    }
}

impl EnvSource for HostProbe {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }

    fn which(&self, name: &str) -> Option<PathBuf> {
        which::which(name).ok()
    }
}
