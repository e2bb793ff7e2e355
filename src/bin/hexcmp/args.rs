//! Command-line arguments: exactly two input files, no flags.

use std::ffi::OsString;
use std::path::PathBuf;

use clap::Parser;
use clap::error::ErrorKind;

pub const USAGE: &str = "Usage: hexcmp <file1.hex> <file2.hex>";

#[derive(Debug, Parser)]
#[command(
    name = "hexcmp",
    about = "Compare the decoded contents of two Intel HEX files",
    disable_help_flag = true,
    disable_version_flag = true
)]
pub struct Args {
    /// First Intel HEX file
    #[arg(allow_hyphen_values = true)]
    pub first: PathBuf,

    /// Second Intel HEX file
    #[arg(allow_hyphen_values = true)]
    pub second: PathBuf,
}

impl Args {
    /// Parse a full argv (program name first). The count is checked before
    /// clap sees it, so `--` is counted like any other argument.
    pub fn parse_exact<I, T>(args: I) -> Result<Self, clap::Error>
    where
        I: IntoIterator<Item = T>,
        T: Into<OsString>,
    {
        let args: Vec<OsString> = args.into_iter().map(Into::into).collect();
        if args.len() != 3 {
            return Err(clap::Error::raw(
                ErrorKind::WrongNumberOfValues,
                format!("expected 2 files, got {}\n", args.len().saturating_sub(1)),
            ));
        }
        Self::try_parse_from(args)
    }
}
