// ABOUTME: Subprocess invocation for the deckconv application
// ABOUTME: Runs external tools and maps their exit status to typed outcomes

use crate::errors::{DeckError, Result};
use log::debug;
use std::ffi::OsStr;
use std::path::Path;
use std::process::{Command, Output};

/// Run an external tool to completion and capture its output.
///
/// The tool runs with `cwd` as its working directory. A nonzero exit status
/// becomes an error carrying the captured stderr/stdout; the captured output
/// of successful runs is only surfaced at debug level.
pub fn run_tool<P, I, S>(program: P, args: I, cwd: &Path) -> Result<Output>
where
    P: AsRef<OsStr>,
    I: IntoIterator<Item = S>,
    S: AsRef<OsStr>,
{
    let name = tool_name(program.as_ref());

    let mut command = Command::new(program.as_ref());
    command.args(args).current_dir(cwd);

    debug!("Running `{}` in {:?}", name, cwd);
    let output = command.output().map_err(|e| DeckError::ToolLaunchError {
        tool: name.clone(),
        source: e,
    })?;

    if !output.status.success() {
        return Err(DeckError::ToolFailed {
            tool: name,
            status: output.status,
            diagnostics: collect_diagnostics(&output),
        });
    }

    let stderr = String::from_utf8_lossy(&output.stderr);
    if !stderr.trim().is_empty() {
        debug!("`{}` stderr: {}", name, stderr.trim());
    }

    Ok(output)
}

/// Short tool name for messages: the executable's file name when the
/// program is given as a path
fn tool_name(program: &OsStr) -> String {
    Path::new(program)
        .file_name()
        .unwrap_or(program)
        .to_string_lossy()
        .into_owned()
}

/// Gather captured stderr and stdout into one diagnostic block
fn collect_diagnostics(output: &Output) -> String {
    let mut diagnostics = String::new();

    let stderr = String::from_utf8_lossy(&output.stderr);
    let stderr = stderr.trim();
    if !stderr.is_empty() {
        diagnostics.push('\n');
        diagnostics.push_str(stderr);
    }

    let stdout = String::from_utf8_lossy(&output.stdout);
    let stdout = stdout.trim();
    if !stdout.is_empty() {
        diagnostics.push_str("\nStdout:\n");
        diagnostics.push_str(stdout);
    }

    diagnostics
}
