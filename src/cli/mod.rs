mod args;
mod config;
mod env_util;

#[cfg(test)]
mod test_support;

use anyhow::{Context, Result};
use args::{Action, Operation};
use config::Settings;
use std::ffi::OsString;
use std::io::{self, Write};
use std::os::unix::ffi::OsStrExt;
use vfspath::Separator;

/// Exit status for usage, config and output errors.
pub const EXIT_ERROR: i32 = 2;
/// Exit status when `is-abs` finds a relative path.
pub const EXIT_NOT_ABSOLUTE: i32 = 1;

const HELP: &str = "\
Lexical path normalization for virtual file systems.

Usage: vfspath [OPTIONS] <OPERATION> [PATH]...

Operations:
  clean <path>...    print the lexically cleaned form of each path
  split <path>...    print `<dir>\\t<file>` for each path
  join [elem]...     join all elements and clean the result
  ext <path>...      print the extension of each path
  base <path>...     print the final segment of each path
  dir <path>...      print the cleaned directory of each path
  is-abs <path>...   print true/false; exit 1 unless every path is absolute

Options:
  -s, --separator <CHAR>  path separator (default `/`)
  -v, --verbose           report resolved settings on stderr
  -h, --help              print this help
  -V, --version           print version

Environment:
  VFSPATH_SEPARATOR  separator used when --separator is absent
  VFSPATH_VERBOSE    enable verbose output (1/true/yes/on)
  VFSPATH_CONFIG     config file path (default: $XDG_CONFIG_HOME/vfspath/vfspath.toml)
";

pub fn run(raw_args: &[OsString]) -> i32 {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    match run_inner(raw_args, &mut out) {
        Ok(code) => code,
        Err(err) => {
            eprintln!("vfspath: {err:#}");
            EXIT_ERROR
        }
    }
}

fn run_inner(raw_args: &[OsString], out: &mut impl Write) -> Result<i32> {
    let invocation = args::parse_args(raw_args)?;
    let (operation, operands) = match invocation.action {
        Action::Help => {
            out.write_all(HELP.as_bytes())?;
            return Ok(0);
        }
        Action::Version => {
            writeln!(out, "vfspath {}", env!("CARGO_PKG_VERSION"))?;
            return Ok(0);
        }
        Action::Run {
            operation,
            operands,
        } => (operation, operands),
    };

    let settings = config::resolve(invocation.separator.as_deref(), invocation.verbose)?;
    if settings.verbose {
        report_settings(&settings);
    }

    let code = execute(settings.separator, operation, &operands, out)?;
    out.flush().context("failed to flush stdout")?;
    Ok(code)
}

fn report_settings(settings: &Settings) {
    match (&settings.config_path, settings.config_found) {
        (Some(path), true) => eprintln!("vfspath: loaded config {}", path.display()),
        (Some(path), false) => eprintln!("vfspath: no config at {}", path.display()),
        (None, _) => eprintln!("vfspath: no config directory available"),
    }
    eprintln!(
        "vfspath: separator `{}` ({})",
        settings.separator, settings.separator_source
    );
}

/// Paths are written back as raw bytes, so operands that are not UTF-8 come
/// out exactly as they went in.
fn execute(
    sep: Separator,
    operation: Operation,
    operands: &[OsString],
    out: &mut impl Write,
) -> Result<i32> {
    let mut code = 0;
    match operation {
        Operation::Join => {
            let joined = sep.join_bytes(operands.iter().map(|path| path.as_bytes()));
            write_line(out, &joined)?;
        }
        Operation::IsAbs => {
            for path in operands {
                let absolute = sep.is_abs_bytes(path.as_bytes());
                if !absolute {
                    code = EXIT_NOT_ABSOLUTE;
                }
                writeln!(out, "{absolute}")?;
            }
        }
        Operation::Split => {
            for path in operands {
                let (dir, file) = sep.split_bytes(path.as_bytes());
                out.write_all(dir)?;
                out.write_all(b"\t")?;
                write_line(out, file)?;
            }
        }
        Operation::Clean => {
            for path in operands {
                write_line(out, &sep.clean_bytes(path.as_bytes()))?;
            }
        }
        Operation::Ext => {
            for path in operands {
                write_line(out, sep.ext_bytes(path.as_bytes()))?;
            }
        }
        Operation::Base => {
            for path in operands {
                write_line(out, sep.base_bytes(path.as_bytes()))?;
            }
        }
        Operation::Dir => {
            for path in operands {
                write_line(out, &sep.dir_bytes(path.as_bytes()))?;
            }
        }
    }
    Ok(code)
}

fn write_line(out: &mut impl Write, bytes: &[u8]) -> io::Result<()> {
    out.write_all(bytes)?;
    out.write_all(b"\n")
}
