//! Command dispatch table.
//!
//! A command line is split on whitespace; the first token selects an entry
//! in the [`CommandTable`] and the rest are passed to its handler. Names not
//! in the table resolve to [`Dispatch::Fallback`], which the interpreter
//! turns into an `UnknownCommand` failure. A built-in called with the wrong
//! number of arguments fails on its own and never reaches the fallback.

use super::{ExecutionOutcome, Interpreter};
use crate::error::InterpreterError;
use std::fmt;

/// Signature shared by every command handler.
pub type Handler = fn(&mut Interpreter, &[&str]) -> ExecutionOutcome;

#[derive(Clone, Copy)]
pub struct Command {
    pub name: &'static str,
    pub usage: &'static str,
    pub about: &'static str,
    pub handler: Handler,
}

impl fmt::Debug for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Command")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .finish_non_exhaustive()
    }
}

/// Result of looking up a command name.
#[derive(Clone, Copy)]
pub enum Dispatch {
    Command(Handler),
    Fallback,
}

/// Registered commands, kept in registration order for help output.
#[derive(Debug, Clone)]
pub struct CommandTable {
    commands: Vec<Command>,
}

impl CommandTable {
    pub fn empty() -> Self {
        CommandTable { commands: Vec::new() }
    }

    /// Table holding the built-in commands.
    pub fn builtin() -> Self {
        let mut table = CommandTable::empty();
        for command in BUILTINS {
            table.register(*command);
        }
        table
    }

    /// Add `command`, replacing any entry with the same name.
    pub fn register(&mut self, command: Command) {
        match self.commands.iter_mut().find(|c| c.name == command.name) {
            Some(existing) => *existing = command,
            None => self.commands.push(command),
        }
    }

    pub fn get(&self, name: &str) -> Option<&Command> {
        self.commands.iter().find(|c| c.name == name)
    }

    pub fn resolve(&self, name: &str) -> Dispatch {
        match self.get(name) {
            Some(command) => Dispatch::Command(command.handler),
            None => Dispatch::Fallback,
        }
    }

    pub fn iter(&self) -> impl Iterator<Item = &Command> {
        self.commands.iter()
    }
}

impl Default for CommandTable {
    fn default() -> Self {
        CommandTable::builtin()
    }
}

const BUILTINS: &[Command] = &[
    Command {
        name: "ld",
        usage: "ld <path>",
        about: "open a binary file and reset the cursor to 0",
        handler: cmd_load,
    },
    Command {
        name: "r",
        usage: "r <type> [<type> ...]",
        about: "read values at the cursor: i32 i64 u32 u64 f32 f64",
        handler: cmd_read,
    },
    Command {
        name: "rv",
        usage: "rv <type> [<type> ...]",
        about: "read values at the cursor and move past them",
        handler: cmd_read_advance,
    },
    Command {
        name: "mv",
        usage: "mv <offset>",
        about: "move the cursor relative to its position: mv 4, mv -4",
        handler: cmd_move_relative,
    },
    Command {
        name: "ma",
        usage: "ma <offset>",
        about: "move the cursor to an absolute position: ma 0, ma 0x10",
        handler: cmd_move_absolute,
    },
    Command {
        name: "pos",
        usage: "pos",
        about: "show the cursor position and file length",
        handler: cmd_position,
    },
];

fn single_arg<'a>(name: &str, args: &[&'a str]) -> Result<&'a str, InterpreterError> {
    match args {
        [arg] => Ok(*arg),
        _ => Err(InterpreterError::InvalidArgument(format!(
            "{name} expects 1 argument, got {}",
            args.len()
        ))),
    }
}

fn cmd_load(interp: &mut Interpreter, args: &[&str]) -> ExecutionOutcome {
    match single_arg("ld", args) {
        Ok(path) => interp.open(path),
        Err(err) => interp.reject(err),
    }
}

fn cmd_read(interp: &mut Interpreter, args: &[&str]) -> ExecutionOutcome {
    interp.read_tokens(args, false)
}

fn cmd_read_advance(interp: &mut Interpreter, args: &[&str]) -> ExecutionOutcome {
    interp.read_tokens(args, true)
}

fn cmd_move_relative(interp: &mut Interpreter, args: &[&str]) -> ExecutionOutcome {
    match single_arg("mv", args) {
        Ok(offset) => interp.move_cursor(offset, false),
        Err(err) => interp.reject(err),
    }
}

fn cmd_move_absolute(interp: &mut Interpreter, args: &[&str]) -> ExecutionOutcome {
    match single_arg("ma", args) {
        Ok(offset) => interp.move_cursor(offset, true),
        Err(err) => interp.reject(err),
    }
}

fn cmd_position(interp: &mut Interpreter, args: &[&str]) -> ExecutionOutcome {
    if !args.is_empty() {
        return interp.reject(InterpreterError::InvalidArgument(format!(
            "pos expects no arguments, got {}",
            args.len()
        )));
    }
    interp.status()
}
