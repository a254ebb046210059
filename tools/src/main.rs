//! test-runner: thin CLI wrapper around the MockCall npm test suite.
//!
//! Usage:
//!   test-runner [command]
//!   test-runner --help

use anyhow::Result;
use std::env;
use std::path::Path;
use std::process;

mod colors;
mod command;
mod preflight;
mod runner;

fn main() -> Result<()> {
    env_logger::init();

    let args: Vec<String> = env::args().skip(1).collect();
    let code = runner::run(&args, Path::new("."), &mut runner::ProcessInvoker)?;
    process::exit(code)
}
