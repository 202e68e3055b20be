//! POSIX shell script generation.

use std::io::Write;

use launch_configuration::LaunchConfiguration;
use variables::Variables;

#[derive(Debug, thiserror::Error)]
pub enum EmitError {
    #[error("configuration not supported: request {request:?}, only \"launch\" is supported")]
    UnsupportedRequest { request: String },
    #[error("writing script: {0}")]
    Write(#[from] std::io::Error),
}

/// Write an `sh` compatible script that exports the configuration's
/// environment variables and executes its program.
///
/// Only these options are handled:
/// - `env`: exported in key order, values substituted and double
///   quoted but not otherwise escaped
/// - `program`: executed relative to the script's directory
/// - `request`: must be `"launch"`, anything else is rejected before
///   any output is written
///
/// `args` is accepted in the data model but never emitted.
pub fn write_script(
    configuration: &LaunchConfiguration,
    variables: &Variables,
    mut out: impl Write,
) -> Result<(), EmitError> {
    if configuration.request != "launch" {
        return Err(EmitError::UnsupportedRequest {
            request: configuration.request.clone(),
        });
    }

    writeln!(out, "#!/bin/sh")?;

    for (name, value) in &configuration.env {
        writeln!(out, "export {name}=\"{}\"", variables.substitute(value))?;
    }

    let program = variables.substitute(&configuration.program);
    writeln!(out, "./{program}")?;

    Ok(())
}
