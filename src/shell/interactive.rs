//! Line-at-a-time interactive shell.

use super::{write_help, ShellOptions};
use crate::interpreter::Interpreter;
use log::debug;
use std::io::{self, BufRead, Write};

/// Read commands from `input` until end of input or `exit`/`quit`.
///
/// Failures are printed and the loop carries on.
pub fn run_interactive<R, W>(interp: &mut Interpreter, input: R, options: &ShellOptions, out: &mut W) -> io::Result<()>
where
    R: BufRead,
    W: Write,
{
    let mut lines = input.lines();
    loop {
        write!(out, "{}", options.prompt)?;
        out.flush()?;

        let Some(line) = lines.next().transpose()? else {
            writeln!(out)?;
            break;
        };
        let command = line.trim();
        match command {
            "" => continue,
            "exit" | "quit" => break,
            "help" => write_help(interp, out)?,
            _ => {
                let outcome = interp.execute(command);
                let rendered = outcome.to_string();
                if !rendered.is_empty() {
                    writeln!(out, "{rendered}")?;
                }
            }
        }
    }
    debug!("interactive session finished");
    writeln!(out, "Goodbye.")
}
