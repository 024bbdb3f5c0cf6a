//! Build options - the typed configuration consumed by the command builder.
//!
//! Every field is independently optional; unset fields degrade to "omit the
//! flag" (or to a per-field default where one exists) rather than erroring.
//! Options can be populated in code or loaded from a TOML file whose keys
//! use the camelCase names MSBuild users know (`toolsVersion`,
//! `solutionPlatform`, ...).

use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// Processor word size, used to pick between 32- and 64-bit MSBuild
/// install directories on Windows.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Architecture {
    X86,
    X64,
}

impl Architecture {
    /// The architecture of the host this process runs on.
    pub fn host() -> Self {
        if cfg!(target_pointer_width = "64") {
            Architecture::X64
        } else {
            Architecture::X86
        }
    }
}

/// MSBuild invocation options.
///
/// `MsBuildOptions::default()` is the all-unset configuration;
/// [`MsBuildOptions::defaults`] is the baseline most callers want to start
/// from.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct MsBuildOptions {
    /// Build target name. Emitted as `/target:<name>`, default `Rebuild`.
    pub target: Option<String>,

    /// Logging verbosity. Emitted as `/verbosity:<level>`, default `normal`.
    pub verbosity: Option<String>,

    /// Tools version for `/toolsversion:`. The sentinel `"auto"` resolves
    /// to `4.0`; unset omits the flag entirely.
    pub tools_version: Option<String>,

    /// Suppress the startup banner (`/nologo`).
    pub nologo: Option<bool>,

    /// Parallel build node count. Unset or `0` emit a bare `/maxcpucount`
    /// (unbounded); a positive count is emitted verbatim; a negative value
    /// disables the flag. Never emitted for xbuild, which does not support
    /// it.
    #[serde(rename = "maxcpucount")]
    pub max_cpu_count: Option<i32>,

    /// File logger parameters (`/flp:`).
    pub file_logger_parameters: Option<String>,

    /// Console logger parameters (`/clp:`).
    pub console_logger_parameters: Option<String>,

    /// Custom logger specification (`/logger:`).
    pub logger_parameters: Option<String>,

    /// Explicitly `false` emits `/nodeReuse:False`; anything else leaves
    /// the tool default in place.
    pub node_reuse: Option<bool>,

    /// Value for the synthesized `Configuration` property, default
    /// `Release`. A `Configuration` key in [`properties`](Self::properties)
    /// takes precedence.
    pub configuration: Option<String>,

    /// Value for the synthesized `Platform` property. A `Platform` key in
    /// [`properties`](Self::properties) takes precedence.
    pub solution_platform: Option<String>,

    /// Steers the Windows executable search between 32- and 64-bit install
    /// directories. Defaults to the host architecture. Has no effect on
    /// argument emission.
    pub architecture: Option<Architecture>,

    /// Custom build properties, emitted as `/property:<Name>=<Value>` in
    /// insertion order. Values may reference the file being built with a
    /// `<%= file.path %>` placeholder.
    pub properties: IndexMap<String, String>,

    /// Raw arguments appended verbatim at the end of the command line.
    pub custom_args: Vec<String>,

    /// Explicit path (or bare tool name) of the build executable. When
    /// unset the finder is consulted.
    pub msbuild_path: Option<PathBuf>,
}

impl MsBuildOptions {
    /// The baseline configuration: rebuild in Release with the 4.0 tools,
    /// banner suppressed, unbounded parallelism.
    pub fn defaults() -> Self {
        MsBuildOptions {
            target: Some("Rebuild".to_string()),
            verbosity: Some("normal".to_string()),
            tools_version: Some("4.0".to_string()),
            nologo: Some(true),
            max_cpu_count: Some(0),
            node_reuse: Some(true),
            configuration: Some("Release".to_string()),
            ..MsBuildOptions::default()
        }
    }

    /// Whether no option has been set at all.
    pub fn is_empty(&self) -> bool {
        *self == MsBuildOptions::default()
    }

    /// Load options from a TOML file.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read build options: {}", path.display()))?;

        toml::from_str(&contents)
            .with_context(|| format!("failed to parse build options: {}", path.display()))
    }

    /// Load options from a TOML file, falling back to [`defaults`](Self::defaults)
    /// when the file is missing or malformed.
    pub fn load_or_default(path: &Path) -> Self {
        if path.exists() {
            Self::load(path).unwrap_or_else(|e| {
                tracing::warn!("Failed to load build options from {}: {}", path.display(), e);
                Self::defaults()
            })
        } else {
            Self::defaults()
        }
    }

    /// Merge another set of options into this one (other takes precedence).
    pub fn merge(&mut self, other: MsBuildOptions) {
        if other.target.is_some() {
            self.target = other.target;
        }
        if other.verbosity.is_some() {
            self.verbosity = other.verbosity;
        }
        if other.tools_version.is_some() {
            self.tools_version = other.tools_version;
        }
        if other.nologo.is_some() {
            self.nologo = other.nologo;
        }
        if other.max_cpu_count.is_some() {
            self.max_cpu_count = other.max_cpu_count;
        }
        if other.file_logger_parameters.is_some() {
            self.file_logger_parameters = other.file_logger_parameters;
        }
        if other.console_logger_parameters.is_some() {
            self.console_logger_parameters = other.console_logger_parameters;
        }
        if other.logger_parameters.is_some() {
            self.logger_parameters = other.logger_parameters;
        }
        if other.node_reuse.is_some() {
            self.node_reuse = other.node_reuse;
        }
        if other.configuration.is_some() {
            self.configuration = other.configuration;
        }
        if other.solution_platform.is_some() {
            self.solution_platform = other.solution_platform;
        }
        if other.architecture.is_some() {
            self.architecture = other.architecture;
        }
        if !other.properties.is_empty() {
            self.properties.extend(other.properties);
        }
        if !other.custom_args.is_empty() {
            self.custom_args = other.custom_args;
        }
        if other.msbuild_path.is_some() {
            self.msbuild_path = other.msbuild_path;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_empty() {
        assert!(MsBuildOptions::default().is_empty());
        assert!(!MsBuildOptions::defaults().is_empty());
    }

    #[test]
    fn test_defaults_baseline() {
        let options = MsBuildOptions::defaults();

        assert_eq!(options.target.as_deref(), Some("Rebuild"));
        assert_eq!(options.verbosity.as_deref(), Some("normal"));
        assert_eq!(options.tools_version.as_deref(), Some("4.0"));
        assert_eq!(options.nologo, Some(true));
        assert_eq!(options.max_cpu_count, Some(0));
        assert_eq!(options.configuration.as_deref(), Some("Release"));
        assert!(options.msbuild_path.is_none());
    }

    #[test]
    fn test_load_from_toml() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("build.toml");
        std::fs::write(
            &path,
            r#"
target = "Clean"
toolsVersion = "auto"
maxcpucount = 4
solutionPlatform = "AnyCPU"
customArgs = ["/validate"]

[properties]
WarningLevel = "2"
OutDir = "<%= file.path %>"
"#,
        )
        .unwrap();

        let options = MsBuildOptions::load(&path).unwrap();

        assert_eq!(options.target.as_deref(), Some("Clean"));
        assert_eq!(options.tools_version.as_deref(), Some("auto"));
        assert_eq!(options.max_cpu_count, Some(4));
        assert_eq!(options.solution_platform.as_deref(), Some("AnyCPU"));
        assert_eq!(options.custom_args, vec!["/validate".to_string()]);
        // Insertion order of the properties table is preserved.
        let keys: Vec<_> = options.properties.keys().cloned().collect();
        assert_eq!(keys, vec!["WarningLevel".to_string(), "OutDir".to_string()]);
    }

    #[test]
    fn test_load_missing_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let err = MsBuildOptions::load(&dir.path().join("absent.toml")).unwrap_err();

        assert!(err.to_string().contains("failed to read build options"));
    }

    #[test]
    fn test_load_or_default_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let options = MsBuildOptions::load_or_default(&dir.path().join("absent.toml"));

        assert_eq!(options, MsBuildOptions::defaults());
    }

    #[test]
    fn test_merge_prefers_other() {
        let mut base = MsBuildOptions::defaults();
        let mut overlay = MsBuildOptions::default();
        overlay.configuration = Some("Debug".to_string());
        overlay.properties.insert("WarningLevel".to_string(), "2".to_string());

        base.merge(overlay);

        assert_eq!(base.configuration.as_deref(), Some("Debug"));
        assert_eq!(base.target.as_deref(), Some("Rebuild"));
        assert_eq!(base.properties.get("WarningLevel").map(String::as_str), Some("2"));
    }
}
