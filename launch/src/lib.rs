//! Turn a named launch.json configuration into a runnable shell
//! script.
//!
//! The pipeline is linear: resolve substitution variables from the
//! launch file's location, load and normalize the file, find the
//! requested configuration by name, then emit the script. [`run`]
//! performs the whole pipeline without touching the process exit
//! code; the binary maps [`Error`] values to exit codes at the top
//! level so everything below stays testable.

pub mod shell;

use std::io::Write;
use std::path::PathBuf;

use clap::Parser;
use launch_configuration::LoadError;
use variables::Variables;

pub use shell::EmitError;

/// Export a launch.json configuration as a shell script.
#[derive(Debug, Parser)]
pub struct Args {
    /// Name of the launch configuration to export
    pub name: String,

    /// Path to the launch file
    #[clap(default_value = ".vscode/launch.json")]
    pub launch_path: PathBuf,
}

#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error(transparent)]
    Usage(#[from] clap::Error),
    #[error(transparent)]
    Resolve(#[from] variables::PathResolutionError),
    #[error(transparent)]
    Load(#[from] LoadError),
    #[error("{name} not found")]
    NotFound { name: String },
    #[error(transparent)]
    Emit(#[from] EmitError),
}

impl Error {
    /// The process exit code for this error. Each failure class has
    /// its own code:
    ///
    /// - 1: missing or invalid command line arguments
    /// - 2: launch file unreadable
    /// - 3: launch file unparseable, or workspace path resolution
    ///   failed
    /// - 4: configuration found but cannot be emitted
    /// - 5: no configuration with the requested name
    pub fn exit_code(&self) -> i32 {
        match self {
            Error::Usage(_) => 1,
            Error::Load(LoadError::Read { .. }) => 2,
            Error::Load(LoadError::Parse(_)) | Error::Resolve(_) => 3,
            Error::Emit(_) => 4,
            Error::NotFound { .. } => 5,
        }
    }
}

/// Run the whole pipeline, writing the generated script to `out`.
///
/// Nothing is written to `out` unless the configuration is found and
/// supported.
pub fn run(args: &Args, out: impl Write) -> Result<(), Error> {
    let variables = Variables::from_launch_path(&args.launch_path)?;

    let launch_file = launch_configuration::load_from_path(&args.launch_path)?;
    tracing::debug!(
        path = %args.launch_path.display(),
        configurations = launch_file.configurations.len(),
        "loaded launch file"
    );

    let configuration = launch_file.get(&args.name).ok_or_else(|| Error::NotFound {
        name: args.name.clone(),
    })?;

    shell::write_script(configuration, &variables, out)?;
    Ok(())
}
