//! Placeholder substitution over property values.
//!
//! Property values may reference the file being built with a
//! `<%= file.path %>` placeholder. Substitution is confined to this module
//! so the rest of the crate carries no templating knowledge.

use std::path::{Path, PathBuf};
use std::sync::OnceLock;

use regex::{NoExpand, Regex};

/// The artifact a command is being constructed for, typically a `.sln` or
/// `.csproj` file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BuildInput {
    path: PathBuf,
}

impl BuildInput {
    /// Create an input for the given project or solution file.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        BuildInput { path: path.into() }
    }

    /// The project or solution file path.
    pub fn path(&self) -> &Path {
        &self.path
    }
}

fn placeholder() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"<%=\s*file\.path\s*%>").unwrap())
}

/// Replace every `<%= file.path %>` placeholder in `value` with the input's
/// path. Values without a placeholder pass through unchanged.
pub fn expand(value: &str, input: &BuildInput) -> String {
    let path = input.path.display().to_string();
    placeholder().replace_all(value, NoExpand(&path)).into_owned()
}
