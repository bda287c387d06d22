//! Text file loading for shader sources.

use std::path::Path;

use crate::error::{Error, Result};

/// Read a whole file as UTF-8 text.
///
/// The file is read as raw bytes first so that line endings are kept exactly
/// as stored, then decoded.
pub fn read_text_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    let bytes = std::fs::read(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    log::debug!("Read {} bytes from {}", bytes.len(), path.display());

    String::from_utf8(bytes).map_err(|_| Error::Encoding {
        path: path.to_path_buf(),
    })
}
