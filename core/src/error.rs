use std::collections::TryReserveError;
use std::io;

/// Errors a host can run into while setting a machine up.
///
/// Nothing that happens while instructions execute is an error; see
/// `diagnostics::Anomaly` for those.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("unable to allocate {what}: {source}")]
    Allocation {
        what: &'static str,
        #[source]
        source: TryReserveError,
    },

    #[error("program of {len} bytes at offset {offset:#05X} does not fit in {capacity} bytes of memory")]
    ProgramTooLarge {
        offset: u16,
        len: usize,
        capacity: usize,
    },

    #[error("unable to read program: {0}")]
    Io(#[from] io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
