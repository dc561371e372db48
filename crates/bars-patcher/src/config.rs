//! Command-line configuration.
//!
//! The patcher takes four required file arguments. The historical spellings
//! use a single dash even for multi-letter flags (`-og`, `-patch`), which
//! clap would read as clustered short flags, so arguments are normalized
//! before parsing.
//!
//! | Flag | Long form | Meaning |
//! |---|---|---|
//! | `-i <path>` | `--input` | Input BARS file |
//! | `-o <path>` | `--output` | Output BARS file (overwritten) |
//! | `-og <path>` | `--og` | Original BWAV file |
//! | `-patch <path>` | `--patch` | Patch BWAV file |
//!
//! # Example
//!
//! ```
//! use bars_patcher::PatchConfig;
//!
//! let config = PatchConfig::try_from_args([
//!     "bars-patcher", "-i", "in.bars", "-o", "out.bars", "-og", "old.bwav", "-patch", "new.bwav",
//! ])
//! .expect("valid arguments");
//!
//! assert_eq!(config.original.to_str(), Some("old.bwav"));
//! ```

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;
use tracing::Level;

/// Single-dash multi-letter flags and their clap spelling
const LEGACY_FLAGS: [(&str, &str); 2] = [("-og", "--og"), ("-patch", "--patch")];

/// Flags that consume the following argument as their value
const VALUE_FLAGS: [&str; 10] = [
    "-i",
    "--input",
    "-o",
    "--output",
    "-og",
    "--og",
    "-patch",
    "--patch",
    "-l",
    "--log-level",
];

/// Patcher configuration loaded from CLI args and environment variables.
#[derive(Debug, Clone, Parser)]
#[command(
    name = "bars-patcher",
    about = "Replace a BWAV header embedded in a BARS archive",
    long_about = "Finds the BWAV header embedded in a BARS archive by the CRC32 of an original BWAV file and overwrites it with the header of a patch BWAV file.",
    version,
    arg_required_else_help = true
)]
pub struct PatchConfig {
    /// Input BARS file
    #[arg(short = 'i', long = "input", value_name = "FILE", allow_hyphen_values = true)]
    pub input: PathBuf,

    /// Output BARS file
    #[arg(short = 'o', long = "output", value_name = "FILE", allow_hyphen_values = true)]
    pub output: PathBuf,

    /// Original BWAV file
    #[arg(long = "og", value_name = "FILE", allow_hyphen_values = true)]
    pub original: PathBuf,

    /// Patch BWAV file
    #[arg(long = "patch", value_name = "FILE", allow_hyphen_values = true)]
    pub patch: PathBuf,

    /// Set the logging level
    #[arg(
        short,
        long,
        value_enum,
        env = "BARS_PATCHER_LOG_LEVEL",
        default_value = "info"
    )]
    pub log_level: LogLevel,
}

impl PatchConfig {
    /// Parse configuration from an argument list, program name first.
    pub fn try_from_args<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        Self::try_parse_from(normalize_args(args))
    }
}

/// Rewrite legacy single-dash flags to their long form.
///
/// Values are never rewritten, so a file literally named `-og` still works
/// when it follows a flag.
pub fn normalize_args<I, T>(args: I) -> Vec<OsString>
where
    I: IntoIterator<Item = T>,
    T: Into<OsString>,
{
    let mut expecting_value = false;
    args.into_iter()
        .map(Into::into)
        .enumerate()
        .map(|(index, arg)| {
            if index == 0 || expecting_value {
                expecting_value = false;
                return arg;
            }
            let Some(text) = arg.to_str() else {
                return arg;
            };
            expecting_value = VALUE_FLAGS.contains(&text);
            let long = LEGACY_FLAGS
                .iter()
                .find(|(legacy, _)| *legacy == text)
                .map(|(_, long)| OsString::from(*long));
            long.unwrap_or(arg)
        })
        .collect()
}

/// Logging verbosity.
#[derive(ValueEnum, Clone, Copy, Debug, PartialEq, Eq)]
pub enum LogLevel {
    /// Everything, including per-field decoding
    Trace,
    /// Diagnostic detail
    Debug,
    /// Progress messages
    Info,
    /// Warnings only
    Warn,
    /// Errors only
    Error,
}

impl From<LogLevel> for Level {
    fn from(level: LogLevel) -> Self {
        match level {
            LogLevel::Trace => Self::TRACE,
            LogLevel::Debug => Self::DEBUG,
            LogLevel::Info => Self::INFO,
            LogLevel::Warn => Self::WARN,
            LogLevel::Error => Self::ERROR,
        }
    }
}
