//! Candidate install locations for the build executable.
//!
//! Path construction only; existence checks happen in the finder. The
//! enumeration order encodes preference: a classic toolsVersion pins its
//! .NET Framework directory first, then Visual Studio installs (newest
//! year, fullest edition first), then standalone MSBuild, then the newest
//! Framework MSBuild as a last resort.

use std::path::PathBuf;

use crate::options::{Architecture, MsBuildOptions};
use crate::probe::EnvSource;

/// Tool names probed on PATH for non-Windows hosts, most preferred first.
pub const UNIX_TOOLS: &[&str] = &["msbuild", "xbuild"];

/// Visual Studio release years, newest first.
const VS_YEARS: &[&str] = &["2019", "2017"];

/// Visual Studio editions, fullest first.
const VS_EDITIONS: &[&str] = &["Enterprise", "Professional", "Community", "BuildTools"];

/// MSBuild directory names inside a Visual Studio install, newest first.
const VS_MSBUILD_DIRS: &[&str] = &["Current", "15.0"];

/// Standalone versions under `%ProgramFiles%\MSBuild`, newest first.
const STANDALONE_VERSIONS: &[&str] = &["14.0", "12.0"];

/// toolsVersion values served by the .NET Framework install directories.
const FRAMEWORK_DIRS: &[(&str, &str)] = &[
    ("2.0", "v2.0.50727"),
    ("3.5", "v3.5"),
    ("4.0", "v4.0.30319"),
];

/// Enumerate Windows candidate paths for `options`, most preferred first.
pub fn windows(options: &MsBuildOptions, env: &dyn EnvSource) -> Vec<PathBuf> {
    let arch = options.architecture.unwrap_or_else(Architecture::host);
    let mut candidates = Vec::new();

    if let Some(version_dir) = framework_dir(options) {
        push_framework(&mut candidates, env, arch, version_dir);
    }

    let program_files = PathBuf::from(
        env.var("ProgramFiles(x86)")
            .or_else(|| env.var("ProgramFiles"))
            .unwrap_or_else(|| r"C:\Program Files (x86)".to_string()),
    );

    for year in VS_YEARS {
        for edition in VS_EDITIONS {
            for msbuild_dir in VS_MSBUILD_DIRS {
                let bin = program_files
                    .join("Microsoft Visual Studio")
                    .join(year)
                    .join(edition)
                    .join("MSBuild")
                    .join(msbuild_dir)
                    .join("Bin");
                push_bin(&mut candidates, bin, arch);
            }
        }
    }

    for version in STANDALONE_VERSIONS {
        let bin = program_files.join("MSBuild").join(version).join("Bin");
        push_bin(&mut candidates, bin, arch);
    }

    push_framework(&mut candidates, env, arch, "v4.0.30319");

    dedup(candidates)
}

/// The Framework directory pinned by a classic (pre-VS2013) toolsVersion.
fn framework_dir(options: &MsBuildOptions) -> Option<&'static str> {
    let requested = options.tools_version.as_deref()?;
    FRAMEWORK_DIRS
        .iter()
        .find(|(version, _)| *version == requested)
        .map(|(_, dir)| *dir)
}

fn push_bin(candidates: &mut Vec<PathBuf>, bin: PathBuf, arch: Architecture) {
    if arch == Architecture::X64 {
        candidates.push(bin.join("amd64").join("MSBuild.exe"));
    }
    candidates.push(bin.join("MSBuild.exe"));
}

fn push_framework(
    candidates: &mut Vec<PathBuf>,
    env: &dyn EnvSource,
    arch: Architecture,
    version_dir: &str,
) {
    let root = PathBuf::from(env.var("WINDIR").unwrap_or_else(|| r"C:\Windows".to_string()))
        .join("Microsoft.NET");

    if arch == Architecture::X64 {
        candidates.push(root.join("Framework64").join(version_dir).join("MSBuild.exe"));
    }
    candidates.push(root.join("Framework").join(version_dir).join("MSBuild.exe"));
}

fn dedup(candidates: Vec<PathBuf>) -> Vec<PathBuf> {
    let mut seen = std::collections::HashSet::new();
    candidates.into_iter().filter(|c| seen.insert(c.clone())).collect()
}
