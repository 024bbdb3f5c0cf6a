//! Ordered argument emission.
//!
//! MSBuild accepts flags in any order, but downstream consumers diff and
//! log the command line, so emission order is fixed by category: target,
//! verbosity, tools version, banner, loggers, parallelism, node reuse,
//! properties, custom arguments.

use std::path::Path;

use crate::options::MsBuildOptions;

const DEFAULT_TARGET: &str = "Rebuild";
const DEFAULT_VERBOSITY: &str = "normal";
const DEFAULT_CONFIGURATION: &str = "Release";

/// What `toolsVersion = "auto"` resolves to.
const AUTO_TOOLS_VERSION: &str = "4.0";

/// Build the ordered argument list for `options`.
///
/// Pure: property values are emitted as-is, so callers wanting placeholder
/// substitution run it before this (as [`construct`](crate::construct)
/// does).
pub fn build_arguments(options: &MsBuildOptions) -> Vec<String> {
    let mut args = Vec::new();

    let target = options.target.as_deref().unwrap_or(DEFAULT_TARGET);
    args.push(format!("/target:{target}"));

    let verbosity = options.verbosity.as_deref().unwrap_or(DEFAULT_VERBOSITY);
    args.push(format!("/verbosity:{verbosity}"));

    if let Some(tools_version) = options.tools_version.as_deref() {
        let resolved = if tools_version == "auto" { AUTO_TOOLS_VERSION } else { tools_version };
        args.push(format!("/toolsversion:{resolved}"));
    }

    if options.nologo == Some(true) {
        args.push("/nologo".to_string());
    }

    if let Some(flp) = &options.file_logger_parameters {
        args.push(format!("/flp:{flp}"));
    }
    if let Some(clp) = &options.console_logger_parameters {
        args.push(format!("/clp:{clp}"));
    }
    if let Some(logger) = &options.logger_parameters {
        args.push(format!("/logger:{logger}"));
    }

    // xbuild does not support /maxcpucount. Zero means "unbounded", not
    // "disabled"; only a negative count turns the flag off.
    if !targets_xbuild(options) {
        match options.max_cpu_count {
            None | Some(0) => args.push("/maxcpucount".to_string()),
            Some(n) if n > 0 => args.push(format!("/maxcpucount:{n}")),
            Some(_) => {}
        }
    }

    if options.node_reuse == Some(false) {
        args.push("/nodeReuse:False".to_string());
    }

    for (name, value) in &options.properties {
        args.push(format!("/property:{name}={value}"));
    }
    // Explicit entries in `properties` win over the synthesized pair.
    if !options.properties.contains_key("Platform") {
        if let Some(platform) = &options.solution_platform {
            args.push(format!("/property:Platform={platform}"));
        }
    }
    if !options.properties.contains_key("Configuration") {
        let configuration = options.configuration.as_deref().unwrap_or(DEFAULT_CONFIGURATION);
        args.push(format!("/property:Configuration={configuration}"));
    }

    args.extend(options.custom_args.iter().cloned());

    args
}

fn targets_xbuild(options: &MsBuildOptions) -> bool {
    options.msbuild_path.as_deref().is_some_and(is_xbuild)
}

fn is_xbuild(path: &Path) -> bool {
    path.file_stem()
        .and_then(|stem| stem.to_str())
        .is_some_and(|stem| stem.eq_ignore_ascii_case("xbuild"))
}
