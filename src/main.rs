use clap::Parser;
use ibp::interpreter::Interpreter;
use ibp::shell::{self, ShellOptions};
use std::io::{self, Write};
use std::path::PathBuf;
use std::process;

/// ibp - Interactive Binary Processing
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Script of commands to run instead of starting the interactive shell
    #[arg(short, long)]
    input_file: Option<PathBuf>,

    /// Don't echo script commands as they run
    #[arg(short, long)]
    quiet: bool,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let args = Args::parse();
    let options = ShellOptions {
        echo: !args.quiet,
        ..ShellOptions::default()
    };

    let mut interpreter = Interpreter::new();
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let result = match &args.input_file {
        Some(path) => shell::run_script(&mut interpreter, path, &options, &mut out),
        None => shell::run_interactive(&mut interpreter, io::stdin().lock(), &options, &mut out).map(|()| 0),
    };

    let _ = out.flush();
    match result {
        Ok(0) => {}
        Ok(code) => process::exit(code),
        Err(e) => {
            eprintln!("Error: {}", e);
            process::exit(shell::IO_ERROR_EXIT_CODE);
        }
    }
}
