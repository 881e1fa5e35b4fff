mod cli;

use std::env;
use std::ffi::OsString;
use std::process;

fn main() {
    let args: Vec<OsString> = env::args_os().skip(1).collect();
    process::exit(cli::run(&args));
}
