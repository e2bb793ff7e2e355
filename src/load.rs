use std::path::Path;

use crate::Error;
use crate::io::{ParsedHex, parse_intel_hex};

/// Read and parse an Intel-HEX file.
///
/// The whole file is loaded into memory. Invalid UTF-8 is replaced rather
/// than rejected, so such bytes surface as warnings or hex-digit errors on
/// the line that contains them.
pub fn load_intel_hex(path: impl AsRef<Path>) -> Result<ParsedHex, Error> {
    let path = path.as_ref();
    let content = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;

    log::debug!("read {} bytes from {}", content.len(), path.display());

    parse_intel_hex(&String::from_utf8_lossy(&content)).map_err(|source| Error::Parse {
        path: path.to_path_buf(),
        source,
    })
}
