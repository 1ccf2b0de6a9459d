//! # Stackline
//!
//! Reads a program from standard input, runs it, and writes program
//! output to standard output. Diagnostics go to standard error.

use ansi_term::Colour::{Red, Yellow};
use stackline::mach::Runtime;
use std::io;
use std::process::exit;

fn main() {
    let mut runtime = Runtime::new();
    let stdin = io::stdin();
    if let Err(error) = runtime.load(stdin.lock()) {
        eprintln!("{}", Red.paint(error.to_string()));
        exit(1);
    }
    for warning in runtime.warnings() {
        eprintln!("{}", Yellow.paint(warning.to_string()));
    }
    let stdout = io::stdout();
    let mut output = stdout.lock();
    if let Err(error) = runtime.run(&mut output) {
        eprintln!("{}", Red.paint(error.to_string()));
    }
}
