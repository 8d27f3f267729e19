//! Input acquisition.

use std::fs::File;
use std::io::{self, Read};

use tracing::debug;

use crate::{Error, InputSource, Result};

/// Read up to `limit` bytes from `reader` (`None` = until EOF).
///
/// # Errors
///
/// Returns any error from the underlying reader.
pub fn read_capped<R: Read>(reader: R, limit: Option<usize>) -> io::Result<Vec<u8>> {
    let mut data = Vec::new();
    match limit {
        Some(limit) => {
            let _ = reader.take(limit as u64).read_to_end(&mut data)?;
        }
        None => {
            let mut reader = reader;
            let _ = reader.read_to_end(&mut data)?;
        }
    }
    Ok(data)
}

/// Read instruction bytes from the configured source.
///
/// # Errors
///
/// Returns [`Error::ReadInput`] if a file cannot be opened or read, and
/// [`Error::Io`] if standard input cannot be read.
pub fn read_input(source: &InputSource, limit: Option<usize>) -> Result<Vec<u8>> {
    let data = match source {
        InputSource::Stdin => read_capped(io::stdin().lock(), limit)?,
        InputSource::File(path) => File::open(path)
            .and_then(|file| read_capped(file, limit))
            .map_err(|source| Error::ReadInput {
                path: path.clone(),
                source,
            })?,
    };
    debug!(bytes = data.len(), ?limit, "read input");
    Ok(data)
}

#[cfg(test)]
mod tests {
    use std::io::Write;

    use super::*;

    #[test]
    fn test_read_capped() {
        let data: Vec<u8> = (0..=255).collect();
        assert_eq!(read_capped(&data[..], Some(16)).unwrap(), &data[..16]);
        assert_eq!(read_capped(&data[..], Some(1024)).unwrap(), data);
        assert_eq!(read_capped(&data[..], None).unwrap(), data);
    }

    #[test]
    fn test_read_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        file.write_all(&[0x13, 0x05, 0x50, 0x00, 0x73, 0x00]).unwrap();
        let source = InputSource::File(file.path().to_path_buf());
        assert_eq!(read_input(&source, Some(4)).unwrap(), [0x13, 0x05, 0x50, 0x00]);
        assert_eq!(read_input(&source, None).unwrap().len(), 6);
    }

    #[test]
    fn test_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let source = InputSource::File(dir.path().join("missing.bin"));
        let err = read_input(&source, None).unwrap_err();
        assert!(matches!(err, Error::ReadInput { .. }));
        assert!(err.to_string().contains("missing.bin"));
    }
}
