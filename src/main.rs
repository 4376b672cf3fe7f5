use std::path::{Path, PathBuf};
use std::{fs, process};

use log::debug;
use pylet::{logging, parse_source, Error, Interpreter};

fn main() {
    logging::setup_logger().expect("failed to set up logging");

    let mut args = std::env::args().skip(1);
    let mut repl = false;
    let mut file: Option<PathBuf> = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => {
                print_help();
                return;
            }
            "-r" | "--repl" => repl = true,
            path => file = Some(PathBuf::from(path)),
        }
    }

    if repl {
        run_repl();
        return;
    }

    match file {
        Some(path) => run_file(&path),
        None => report(Error::missing_file("No input file provided")),
    }
}

fn run_file(path: &Path) {
    let src = match fs::read_to_string(path) {
        Ok(src) => src,
        Err(_) => report(Error::file_open(format!(
            "Could not open input file: {}",
            path.display()
        ))),
    };

    let program = match parse_source(&src) {
        Ok(program) => program,
        Err(e) => report(e),
    };
    debug!("parsed {} top-level statements", program.statements.len());

    let mut interp = Interpreter::new();
    if let Err(e) = interp.run(&program) {
        report(e);
    }
}

fn report(e: Error) -> ! {
    eprintln!("{e}");
    process::exit(1);
}

fn run_repl() {
    use rustyline::{error::ReadlineError, DefaultEditor};

    let mut rl = DefaultEditor::new().expect("failed to init REPL");
    let mut interp = Interpreter::new();
    println!("Pylet REPL. Ctrl-D to exit.");
    loop {
        match rl.readline(">>> ") {
            Ok(line) => {
                if line.trim().is_empty() {
                    continue;
                }
                rl.add_history_entry(line.as_str()).ok();
                let mut source = line.clone();
                // A compound statement keeps reading until a blank line
                // closes the block.
                if line.trim_end().ends_with(':') {
                    loop {
                        match rl.readline("... ") {
                            Ok(more) => {
                                if more.trim().is_empty() {
                                    break;
                                }
                                rl.add_history_entry(more.as_str()).ok();
                                source.push('\n');
                                source.push_str(&more);
                            }
                            Err(_) => break,
                        }
                    }
                }
                source.push('\n');
                match parse_source(&source) {
                    Ok(program) => {
                        if let Err(e) = interp.run(&program) {
                            eprintln!("{e}");
                        }
                    }
                    Err(e) => eprintln!("{e}"),
                }
            }
            Err(ReadlineError::Interrupted) => { /* Ctrl-C: drop the line */ }
            Err(ReadlineError::Eof) => break,
            Err(e) => {
                eprintln!("REPL error: {e}");
                break;
            }
        }
    }
}

fn print_help() {
    println!("pylet - interpreter for a small indentation-delimited language\n");
    println!("Usage: pylet [options] <file>\n");
    println!("Options:\n  -r, --repl   Start an interactive session\n  -h, --help   Show this help");
}
