//! Placeholder substitution for launch configuration values.
//!
//! Configuration strings may contain `${workspaceDir}` and
//! `${fileDirname}` tokens. Both resolve to the workspace directory,
//! derived once from the location of the launch file itself. An older
//! revision of this tool substituted `${workspaceFolder}` with the
//! base name of the process working directory instead; that alias has
//! been removed and such tokens now pass through untouched.

use std::path::{Path, PathBuf};

/// The workspace directory could not be resolved to an absolute path.
#[derive(Debug, thiserror::Error)]
#[error("unable to resolve path {} to absolute: {source}", path.display())]
pub struct PathResolutionError {
    pub path: PathBuf,
    #[source]
    pub source: std::io::Error,
}

/// Values substituted into configuration strings, derived once from
/// the launch file's location and read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Variables {
    /// Absolute path to the workspace containing the launch file
    pub workspace_dir: PathBuf,
}

impl Variables {
    /// Derive the workspace directory from the launch file path. By
    /// convention the file lives in a `.vscode`-like subdirectory of
    /// the project root, so the workspace is the parent of the file's
    /// own directory.
    pub fn from_launch_path(launch_path: impl AsRef<Path>) -> Result<Self, PathResolutionError> {
        let launch_path = launch_path.as_ref();
        let launch_dir = match launch_path.parent() {
            Some(parent) if !parent.as_os_str().is_empty() => parent,
            _ => Path::new("."),
        };

        let absolute_launch_dir =
            std::path::absolute(launch_dir).map_err(|source| PathResolutionError {
                path: launch_path.to_path_buf(),
                source,
            })?;

        let workspace_dir = match absolute_launch_dir.parent() {
            Some(parent) => parent.to_path_buf(),
            // the launch file sits in the filesystem root
            None => absolute_launch_dir,
        };

        tracing::debug!(workspace_dir = %workspace_dir.display(), "resolved workspace directory");

        Ok(Self { workspace_dir })
    }

    /// Replace every occurrence of `${workspaceDir}` and
    /// `${fileDirname}` with the workspace directory. One
    /// left-to-right scan over the input; inserted text is never
    /// re-scanned, so a workspace path that itself contains a token
    /// stays literal. Unrecognised `${...}` tokens are left verbatim.
    pub fn substitute(&self, input: &str) -> String {
        let workspace_dir = self.workspace_dir.to_string_lossy();
        let tokens = ["${workspaceDir}", "${fileDirname}"];

        let mut out = String::with_capacity(input.len());
        let mut rest = input;
        while let Some(pos) = rest.find("${") {
            let (head, tail) = rest.split_at(pos);
            out.push_str(head);
            if let Some(token) = tokens.iter().find(|token| tail.starts_with(*token)) {
                out.push_str(&workspace_dir);
                rest = &tail[token.len()..];
            } else {
                out.push_str("${");
                rest = &tail[2..];
            }
        }
        out.push_str(rest);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn variables(workspace_dir: &str) -> Variables {
        Variables {
            workspace_dir: PathBuf::from(workspace_dir),
        }
    }

    #[test]
    fn workspace_is_parent_of_launch_dir() {
        let vars = Variables::from_launch_path("/proj/.vscode/launch.json").unwrap();
        assert_eq!(vars.workspace_dir, PathBuf::from("/proj"));
    }

    #[test]
    fn relative_launch_path_resolves_against_cwd() {
        let vars = Variables::from_launch_path(".vscode/launch.json").unwrap();
        assert!(vars.workspace_dir.is_absolute());

        // the .vscode directory sits directly under the workspace, so
        // for a relative default path that is the current directory
        let cwd = std::env::current_dir().unwrap();
        assert_eq!(vars.workspace_dir, cwd);
    }

    #[test]
    fn substitute_workspace_dir() {
        let vars = variables("/proj");
        assert_eq!(vars.substitute("${workspaceDir}/bin"), "/proj/bin");
    }

    #[test]
    fn substitute_file_dirname() {
        let vars = variables("/proj");
        assert_eq!(vars.substitute("${fileDirname}/x"), "/proj/x");
    }

    #[test]
    fn substitute_all_occurrences() {
        let vars = variables("/proj");
        assert_eq!(
            vars.substitute("${workspaceDir}:${workspaceDir}"),
            "/proj:/proj"
        );
    }

    #[test]
    fn unknown_tokens_pass_through() {
        let vars = variables("/proj");
        assert_eq!(vars.substitute("${unknownVar}/x"), "${unknownVar}/x");
        assert_eq!(vars.substitute("${workspaceFolder}"), "${workspaceFolder}");
    }

    #[test]
    fn inserted_text_is_not_rescanned() {
        let vars = variables("/odd/${fileDirname}");
        assert_eq!(
            vars.substitute("${workspaceDir}/x"),
            "/odd/${fileDirname}/x"
        );
    }

    #[test]
    fn no_tokens_is_identity() {
        let vars = variables("/proj");
        assert_eq!(vars.substitute("plain value"), "plain value");
    }
}
