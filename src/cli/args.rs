use anyhow::{anyhow, Result};
use std::ffi::OsString;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Operation {
    Clean,
    Split,
    Join,
    Ext,
    Base,
    Dir,
    IsAbs,
}

impl Operation {
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "clean" => Some(Self::Clean),
            "split" => Some(Self::Split),
            "join" => Some(Self::Join),
            "ext" => Some(Self::Ext),
            "base" => Some(Self::Base),
            "dir" => Some(Self::Dir),
            "is-abs" => Some(Self::IsAbs),
            _ => None,
        }
    }

    /// `join` folds every operand into a single result, so it is the only
    /// operation that accepts an empty operand list.
    pub fn requires_operands(self) -> bool {
        !matches!(self, Self::Join)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Help,
    Version,
    Run {
        operation: Operation,
        operands: Vec<OsString>,
    },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Invocation {
    pub action: Action,
    pub separator: Option<String>,
    pub verbose: bool,
}

/// Options are only recognized before the operation name. Everything after
/// it is an operand, so paths starting with `-` need no escaping. Operands
/// are kept as raw OS strings; only options and the operation name must be
/// UTF-8.
pub fn parse_args(raw_args: &[OsString]) -> Result<Invocation> {
    let mut separator = None;
    let mut verbose = false;
    let mut iter = raw_args.iter();

    while let Some(raw) = iter.next() {
        let Some(arg) = raw.to_str() else {
            return Err(anyhow!("argument {raw:?} is not valid UTF-8"));
        };
        match arg {
            "-h" | "--help" => {
                return Ok(Invocation {
                    action: Action::Help,
                    separator,
                    verbose,
                });
            }
            "-V" | "--version" => {
                return Ok(Invocation {
                    action: Action::Version,
                    separator,
                    verbose,
                });
            }
            "-v" | "--verbose" => verbose = true,
            "-s" | "--separator" => {
                let Some(value) = iter.next() else {
                    return Err(anyhow!("option `{arg}` requires a value"));
                };
                let Some(value) = value.to_str() else {
                    return Err(anyhow!("separator {value:?} is not valid UTF-8"));
                };
                separator = Some(value.to_string());
            }
            other => {
                if let Some(value) = other.strip_prefix("--separator=") {
                    separator = Some(value.to_string());
                    continue;
                }
                if other.starts_with('-') {
                    return Err(anyhow!("unknown option `{other}`; see `vfspath --help`"));
                }
                let Some(operation) = Operation::from_name(other) else {
                    return Err(anyhow!(
                        "unknown operation `{other}`; expected one of clean, split, join, ext, base, dir, is-abs"
                    ));
                };
                let operands: Vec<OsString> = iter.by_ref().cloned().collect();
                if operands.is_empty() && operation.requires_operands() {
                    return Err(anyhow!("operation `{other}` requires at least one path"));
                }
                return Ok(Invocation {
                    action: Action::Run {
                        operation,
                        operands,
                    },
                    separator,
                    verbose,
                });
            }
        }
    }

    Err(anyhow!("usage: vfspath [OPTIONS] <OPERATION> [PATH]..."))
}
