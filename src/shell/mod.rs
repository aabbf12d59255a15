//! Front ends that feed command lines into an [`Interpreter`].
//!
//! Both front ends write to any [`io::Write`], so they can be driven against
//! a buffer in tests. Neither touches interpreter state directly: they only
//! dispatch lines and inspect the outcomes.

mod interactive;
mod script;

pub use interactive::run_interactive;
pub use script::{run_lines, run_script};

use crate::interpreter::Interpreter;
use std::io::{self, Write};

/// Exit code when the shell itself fails to read input or write output.
///
/// This is `EX_IOERR` from sysexits(3); it does not collide with any
/// [`ErrorKind`](crate::error::ErrorKind) code.
pub const IO_ERROR_EXIT_CODE: i32 = 74;

/// Front end behaviour shared by the interactive and script modes.
#[derive(Debug, Clone)]
pub struct ShellOptions {
    /// Echo each script command before running it.
    pub echo: bool,
    pub prompt: String,
}

impl Default for ShellOptions {
    fn default() -> Self {
        ShellOptions {
            echo: true,
            prompt: "ibp> ".to_string(),
        }
    }
}

/// Print a usage line for every registered command.
pub fn write_help<W: Write>(interp: &Interpreter, out: &mut W) -> io::Result<()> {
    let width = interp.commands().iter().map(|c| c.usage.len()).max().unwrap_or(0);
    for command in interp.commands().iter() {
        writeln!(out, "  {:<width$}  {}", command.usage, command.about)?;
    }
    writeln!(out, "  {:<width$}  {}", "help", "show this message")?;
    writeln!(out, "  {:<width$}  {}", "exit", "leave the shell")
}
