//! Library-wide error and result types.

use std::fmt;
use std::io;

/// Result alias used throughout nacpkit.
pub type Result<T> = std::result::Result<T, Error>;

/// All errors the library can produce.
///
/// Error messages are kept intentionally terse; callers that need richer
/// context should wrap `Error` in their own type.
#[derive(Debug)]
pub enum Error {
    /// The compressed title block could not be turned into a legacy-sized
    /// table. See [`DecompressError`] for the individual causes.
    Decompress(DecompressError),
    /// A language index outside `0..=30`.
    UnknownLanguage(u8),
    /// An underlying I/O operation failed.
    Io(io::Error),
}

/// Why a compressed NACP title block could not be decompressed.
#[derive(Debug)]
pub enum DecompressError {
    /// The buffer ends before the `u16` size header, or before the end of
    /// the compressed data that header announces.
    BufferTooSmall { len: usize },
    /// `2 + compressed_size` runs past the 0x3000-byte title block region.
    CompressedRegionOverflow { compressed_size: u16, data_end: usize },
    /// The raw-DEFLATE stream is corrupt or ends prematurely.
    Inflate(io::Error),
    /// The stream inflated cleanly but holds fewer than 16 entries.
    DecompressedTooShort { len: usize },
}

impl Error {
    /// Returns true if this error came from title block decompression.
    pub fn is_decompression_failure(&self) -> bool {
        matches!(self, Error::Decompress(_))
    }
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Decompress(e) => write!(f, "title block decompression failed: {e}"),
            Error::UnknownLanguage(v) => write!(f, "unknown language index: {v}"),
            Error::Io(e) => write!(f, "I/O error: {e}"),
        }
    }
}

impl fmt::Display for DecompressError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DecompressError::BufferTooSmall { len } => {
                write!(f, "buffer too small for size header ({len} bytes)")
            }
            DecompressError::CompressedRegionOverflow {
                compressed_size,
                data_end,
            } => write!(
                f,
                "compressed size {compressed_size:#X} ends at {data_end:#X}, past the title block"
            ),
            DecompressError::Inflate(e) => write!(f, "inflate error: {e}"),
            DecompressError::DecompressedTooShort { len } => {
                write!(f, "decompressed block is {len:#X} bytes, expected at least 0x3000")
            }
        }
    }
}

impl std::error::Error for Error {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Error::Decompress(e) => Some(e),
            Error::Io(e) => Some(e),
            Error::UnknownLanguage(_) => None,
        }
    }
}

impl std::error::Error for DecompressError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        if let DecompressError::Inflate(e) = self {
            Some(e)
        } else {
            None
        }
    }
}

impl From<io::Error> for Error {
    fn from(e: io::Error) -> Self {
        Error::Io(e)
    }
}

impl From<DecompressError> for Error {
    fn from(e: DecompressError) -> Self {
        Error::Decompress(e)
    }
}
