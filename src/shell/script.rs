//! Batch execution of command files.

use super::ShellOptions;
use crate::error::ErrorKind;
use crate::interpreter::Interpreter;
use log::{error, info};
use std::fs;
use std::io::{self, Write};
use std::path::Path;

/// Run every non-blank line of `lines` in order.
///
/// Stops at the first command that leaves the interpreter's last outcome
/// failed and returns that outcome's exit code. Returns 0 when all commands
/// succeed.
pub fn run_lines<'a, I, W>(interp: &mut Interpreter, lines: I, options: &ShellOptions, out: &mut W) -> io::Result<i32>
where
    I: IntoIterator<Item = &'a str>,
    W: Write,
{
    for line in lines {
        let command = line.trim();
        if command.is_empty() {
            continue;
        }
        if options.echo {
            writeln!(out, "{}{}", options.prompt, command)?;
        }
        let outcome = interp.execute(command);
        let rendered = outcome.to_string();
        if !rendered.is_empty() {
            writeln!(out, "{rendered}")?;
        }

        if let Some(last) = interp.last_error().filter(|o| !o.succeeded()) {
            info!("script stopped at '{command}' with code {}", last.code());
            return Ok(last.code());
        }
    }
    Ok(0)
}

/// Run the command file at `path`.
///
/// A script that cannot be read is reported on `out` and yields the
/// `FileOpenError` exit code without running anything.
pub fn run_script<W: Write>(interp: &mut Interpreter, path: &Path, options: &ShellOptions, out: &mut W) -> io::Result<i32> {
    let content = match fs::read_to_string(path) {
        Ok(content) => content,
        Err(err) => {
            error!("cannot read script {}: {err}", path.display());
            writeln!(out, "Failed to read script {}: {err}", path.display())?;
            return Ok(ErrorKind::FileOpenError.code());
        }
    };
    info!("running script {}", path.display());
    run_lines(interp, content.lines(), options, out)
}
