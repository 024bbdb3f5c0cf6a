//! MSBuild command construction.
//!
//! This module assembles the full invocation for a project or solution
//! file: the executable (explicit or discovered) plus the ordered argument
//! list produced by [`build_arguments`].

mod args;

pub use args::build_arguments;

use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::finder::MsBuildFinder;
use crate::options::MsBuildOptions;
use crate::probe::{EnvSource, FsProbe, HostProbe};
use crate::template::{self, BuildInput};

/// A fully resolved MSBuild invocation: executable plus ordered arguments.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MsBuildCommand {
    /// The build executable to run.
    pub executable: PathBuf,
    /// Arguments in emission order, starting with the project file.
    pub args: Vec<String>,
}

impl MsBuildCommand {
    /// Render the command on one line for log output.
    pub fn display_command(&self) -> String {
        let mut parts = vec![self.executable.display().to_string()];
        parts.extend(self.args.iter().cloned());
        parts.join(" ")
    }
}

/// Construct the full command for building `input`.
///
/// Fails when `options` is entirely unset. When `msbuild_path` is not
/// given, the executable finder runs once against the real host.
pub fn construct(input: &BuildInput, options: &MsBuildOptions) -> Result<MsBuildCommand> {
    construct_with(input, options, &MsBuildFinder::new(HostProbe))
}

/// [`construct`] with an explicit finder, for callers that probe the host
/// through their own [`FsProbe`]/[`EnvSource`] implementations.
pub fn construct_with<H: FsProbe + EnvSource>(
    input: &BuildInput,
    options: &MsBuildOptions,
    finder: &MsBuildFinder<H>,
) -> Result<MsBuildCommand> {
    if options.is_empty() {
        return Err(Error::ConfigurationMissing);
    }

    let executable = match &options.msbuild_path {
        Some(path) => path.clone(),
        None => finder.find(options)?,
    };

    // Argument emission must see the resolved executable (xbuild has no
    // /maxcpucount) and the substituted property values.
    let mut effective = options.clone();
    effective.msbuild_path = Some(executable.clone());
    for value in effective.properties.values_mut() {
        *value = template::expand(value, input);
    }

    let mut command_args = vec![input.path().display().to_string()];
    command_args.extend(build_arguments(&effective));

    tracing::debug!(executable = %executable.display(), "constructed build command");

    Ok(MsBuildCommand { executable, args: command_args })
}

#[cfg(test)]
mod tests {
    use std::cell::Cell;
    use std::collections::HashMap;
    use std::path::{Path, PathBuf};

    use super::*;

    /// Fabricated host whose PATH lookups are counted.
    #[derive(Default)]
    struct FakeHost {
        tools: HashMap<String, PathBuf>,
        which_calls: Cell<usize>,
    }

    impl FsProbe for FakeHost {
        fn exists(&self, _path: &Path) -> bool {
            false
        }
    }

    impl EnvSource for FakeHost {
        fn var(&self, _key: &str) -> Option<String> {
            None
        }

        fn which(&self, name: &str) -> Option<PathBuf> {
            self.which_calls.set(self.which_calls.get() + 1);
            self.tools.get(name).cloned()
        }
    }

    #[test]
    fn test_construct_fails_with_no_options() {
        let err = construct(&BuildInput::new(""), &MsBuildOptions::default()).unwrap_err();

        assert!(matches!(err, Error::ConfigurationMissing));
        assert_eq!(err.to_string(), "No options specified!");
    }

    #[test]
    fn test_construct_uses_msbuild_path_without_finder() {
        let host = FakeHost::default();
        let finder = MsBuildFinder::new(&host);

        let mut options = MsBuildOptions::defaults();
        options.msbuild_path = Some(PathBuf::from("here"));
        let command = construct_with(&BuildInput::new("test.sln"), &options, &finder).unwrap();

        assert_eq!(command.executable, PathBuf::from("here"));
        assert_eq!(host.which_calls.get(), 0);
    }

    #[cfg(unix)]
    #[test]
    fn test_construct_consults_finder_exactly_once() {
        let mut host = FakeHost::default();
        host.tools.insert("msbuild".to_string(), PathBuf::from("/opt/mono/bin/msbuild"));
        let finder = MsBuildFinder::new(&host);

        let command =
            construct_with(&BuildInput::new("test.sln"), &MsBuildOptions::defaults(), &finder)
                .unwrap();

        assert_eq!(command.executable, PathBuf::from("/opt/mono/bin/msbuild"));
        assert_eq!(host.which_calls.get(), 1);
    }

    #[test]
    fn test_construct_names_the_project_file_first() {
        let mut options = MsBuildOptions::defaults();
        options.msbuild_path = Some(PathBuf::from("here"));
        let command = construct(&BuildInput::new("test.sln"), &options).unwrap();

        assert_eq!(command.args[0], "test.sln");
        assert!(command.args.contains(&"/target:Rebuild".to_string()));
    }

    #[test]
    fn test_construct_substitutes_property_templates() {
        let mut options = MsBuildOptions::defaults();
        options.msbuild_path = Some(PathBuf::from("here"));
        options
            .properties
            .insert("someProp".to_string(), "<%= file.path %>".to_string());
        options.properties.insert("anotherProp".to_string(), "noTemplate".to_string());

        let command = construct(&BuildInput::new("test.sln"), &options).unwrap();

        assert!(command.args.contains(&"/property:someProp=test.sln".to_string()));
        assert!(command.args.contains(&"/property:anotherProp=noTemplate".to_string()));
    }

    #[cfg(unix)]
    #[test]
    fn test_construct_suppresses_maxcpucount_for_resolved_xbuild() {
        let mut host = FakeHost::default();
        host.tools.insert("msbuild".to_string(), PathBuf::from("/usr/bin/xbuild"));
        host.tools.insert("xbuild".to_string(), PathBuf::from("/usr/bin/xbuild"));
        let finder = MsBuildFinder::new(&host);

        let mut options = MsBuildOptions::defaults();
        options.max_cpu_count = Some(4);
        let command =
            construct_with(&BuildInput::new("test.sln"), &options, &finder).unwrap();

        assert!(!command.args.iter().any(|a| a.starts_with("/maxcpucount")));
    }

    #[test]
    fn test_display_command() {
        let command = MsBuildCommand {
            executable: PathBuf::from("msbuild"),
            args: vec!["test.sln".to_string(), "/target:Rebuild".to_string()],
        };

        assert_eq!(command.display_command(), "msbuild test.sln /target:Rebuild");
    }
}
