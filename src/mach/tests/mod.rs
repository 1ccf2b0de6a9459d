use crate::lang::Error;
use crate::mach::{LoadPolicy, Runtime};


fn load(lines: &[&str]) -> Runtime {
    let mut runtime = Runtime::new();
    for line in lines {
        runtime.load_line(line).unwrap();
    }
    runtime
}

fn run(lines: &[&str]) -> String {
    let (output, result) = run_result(lines);
    result.unwrap();
    output
}

fn run_err(lines: &[&str]) -> (String, Error) {
    let (output, result) = run_result(lines);
    (output, result.unwrap_err())
}

fn run_result(lines: &[&str]) -> (String, Result<(), Error>) {
    let mut runtime = load(lines);
    let mut output = Vec::new();
    let result = runtime.run(&mut output);
    (String::from_utf8(output).unwrap(), result)
}
