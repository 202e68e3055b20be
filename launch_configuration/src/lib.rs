//! Reading VS Code style launch.json files.
//!
//! These files are close to JSON but permit editor extensions that
//! strict parsers reject: full-line `//` comments and a trailing
//! comma before a closing brace. [`normalize`] rewrites the text into
//! strict JSON before it reaches serde.

mod normalize;

pub use normalize::normalize;

use std::collections::BTreeMap;
use std::collections::HashMap;
use std::collections::hash_map::Entry;
use std::path::{Path, PathBuf};

use serde::Deserialize;

/// A single named run configuration from a launch file.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct LaunchConfiguration {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub program: String,
    // BTreeMap so iteration order is stable across runs
    #[serde(default)]
    pub env: BTreeMap<String, String>,
    #[serde(default)]
    pub args: Vec<String>,
    #[serde(default)]
    pub request: String,
}

/// A parsed launch file: a version string plus the list of named
/// configurations, in document order.
#[derive(Debug, Clone, Deserialize)]
pub struct LaunchFile {
    #[serde(default)]
    pub version: String,
    #[serde(default)]
    pub configurations: Vec<LaunchConfiguration>,
    #[serde(skip)]
    index: HashMap<String, usize>,
}

impl LaunchFile {
    fn build_index(&mut self) {
        for (idx, configuration) in self.configurations.iter().enumerate() {
            match self.index.entry(configuration.name.clone()) {
                Entry::Vacant(entry) => {
                    entry.insert(idx);
                }
                Entry::Occupied(_) => {
                    tracing::warn!(
                        name = %configuration.name,
                        "duplicate configuration name, keeping the first"
                    );
                }
            }
        }
    }

    /// Look up a configuration by name. If the document defines the
    /// same name twice, the first occurrence wins.
    pub fn get(&self, name: impl AsRef<str>) -> Option<&LaunchConfiguration> {
        self.index
            .get(name.as_ref())
            .map(|&idx| &self.configurations[idx])
    }
}

/// The text was not valid JSON even after [`normalize`].
#[derive(Debug, thiserror::Error)]
#[error("couldn't parse launch file: {source}\n{normalized}")]
pub struct ParseError {
    #[source]
    pub source: serde_json::Error,
    /// The normalized text serde actually saw, kept for operator
    /// debugging.
    pub normalized: String,
}

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("couldn't read launch file {}: {source}", path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Parse launch file contents, normalizing lenient JSON first.
pub fn from_str(contents: &str) -> Result<LaunchFile, ParseError> {
    let normalized = normalize(contents);
    let mut launch_file = match serde_json::from_str::<LaunchFile>(&normalized) {
        Ok(launch_file) => launch_file,
        Err(source) => return Err(ParseError { source, normalized }),
    };
    launch_file.build_index();
    tracing::debug!(
        version = %launch_file.version,
        configurations = launch_file.configurations.len(),
        "parsed launch file"
    );
    Ok(launch_file)
}

/// Read and parse the launch file at `path`.
pub fn load_from_path(path: impl AsRef<Path>) -> Result<LaunchFile, LoadError> {
    let path = path.as_ref();
    let contents = std::fs::read_to_string(path).map_err(|source| LoadError::Read {
        path: path.to_path_buf(),
        source,
    })?;
    let launch_file = from_str(&contents)?;
    Ok(launch_file)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_by_name() {
        let launch_file = from_str(
            r#"{
            "version": "0.2.0",
            "configurations": [
                {"name": "A", "program": "a", "request": "launch"},
                {"name": "B", "program": "b", "request": "attach", "args": ["-v"]}
            ]
        }"#,
        )
        .unwrap();

        assert_eq!(launch_file.version, "0.2.0");

        let b = launch_file.get("B").unwrap();
        assert_eq!(b.name, "B");
        assert_eq!(b.program, "b");
        assert_eq!(b.request, "attach");
        assert_eq!(b.args, vec!["-v".to_string()]);
        assert!(b.env.is_empty());

        assert!(launch_file.get("C").is_none());
    }

    #[test]
    fn missing_fields_default() {
        let launch_file = from_str(r#"{"configurations": [{"name": "bare"}]}"#).unwrap();
        let config = launch_file.get("bare").unwrap();
        assert_eq!(config.program, "");
        assert_eq!(config.request, "");
        assert!(config.env.is_empty());
        assert!(config.args.is_empty());
    }

    #[test]
    fn unknown_fields_are_ignored() {
        let launch_file = from_str(
            r#"{
            "version": "0.2.0",
            "configurations": [
                {"name": "run", "type": "debugpy", "justMyCode": false}
            ]
        }"#,
        )
        .unwrap();
        assert!(launch_file.get("run").is_some());
    }

    #[test]
    fn duplicate_names_first_wins() {
        let launch_file = from_str(
            r#"{
            "configurations": [
                {"name": "run", "program": "first"},
                {"name": "run", "program": "second"}
            ]
        }"#,
        )
        .unwrap();
        assert_eq!(launch_file.get("run").unwrap().program, "first");
    }

    #[test]
    fn invalid_json_reports_normalized_text() {
        let err = from_str("{ not json }").unwrap_err();
        assert_eq!(err.normalized, "{ not json }\n");
    }
}
