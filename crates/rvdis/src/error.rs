use std::path::PathBuf;

use thiserror::Error;

/// Disassembler errors.
#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to read {}: {source}", path.display())]
    ReadInput {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error(transparent)]
    Decode(#[from] rvdis_isa::DecodeError),
}

pub type Result<T> = std::result::Result<T, Error>;
