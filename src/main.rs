#![allow(non_snake_case)]
use RustedLinSys::Examples::linsys_examples::linsys_examples;
use RustedLinSys::Utils::task_parser::LinSysTask;
use std::env;
use std::process::ExitCode;

/// `RustedLinSys task.toml` solves the task from the file,
/// without arguments the built-in examples are run.
fn main() -> ExitCode {
    let args: Vec<String> = env::args().collect();
    match args.get(1) {
        Some(path) => {
            let task = match LinSysTask::from_file(path) {
                Ok(task) => task,
                Err(e) => {
                    eprintln!("{}", e);
                    return ExitCode::FAILURE;
                }
            };
            let (system, selector) = task.into_system();
            match system.run_with_logging(selector) {
                Ok(report) => {
                    print!("{}", report);
                    for d in report.diagnostics() {
                        eprintln!("{}", d);
                    }
                    ExitCode::SUCCESS
                }
                Err(e) => {
                    eprintln!("{}", e);
                    ExitCode::FAILURE
                }
            }
        }
        None => {
            let example = 0;
            linsys_examples(example);
            ExitCode::SUCCESS
        }
    }
}
