//! Raw DEFLATE decompression.
//!
//! Compressed NACP title blocks store a bare DEFLATE stream: no zlib header,
//! no gzip header, no trailing checksum (zlib's `windowBits = -15`).
//!
//! [`flate2::read::DeflateDecoder`] treats an input that runs dry before the
//! final block as a clean end of stream, so this module drives
//! [`flate2::Decompress`] directly and insists on [`flate2::Status::StreamEnd`].

use std::io;

use flate2::{Decompress, FlushDecompress, Status};
use log::trace;

/// Output grows in steps of this many bytes once the initial capacity is used.
const CHUNK: usize = 0x1000;

/// Inflate a complete raw-DEFLATE stream.
///
/// `capacity` pre-sizes the output buffer when the caller knows roughly how
/// large the result will be. Output larger than `limit` bytes is rejected.
///
/// Errors are reported as [`io::Error`]s:
/// * [`io::ErrorKind::UnexpectedEof`] - the input ends before the final block.
/// * [`io::ErrorKind::InvalidData`] - corrupt stream, or output over `limit`.
pub fn inflate_raw(data: &[u8], capacity: usize, limit: usize) -> io::Result<Vec<u8>> {
    let mut inflater = Decompress::new(false);
    let mut out = Vec::with_capacity(capacity.min(limit).max(CHUNK));

    loop {
        if out.len() == out.capacity() {
            out.reserve(CHUNK);
        }

        let in_before = inflater.total_in();
        let out_before = inflater.total_out();
        let input = data.get(in_before as usize..).unwrap_or_default();

        let status = inflater
            .decompress_vec(input, &mut out, FlushDecompress::None)
            .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;

        if out.len() > limit {
            return Err(io::Error::new(
                io::ErrorKind::InvalidData,
                "inflated data exceeds limit",
            ));
        }

        match status {
            Status::StreamEnd => break,
            Status::Ok | Status::BufError => {
                let stalled =
                    inflater.total_in() == in_before && inflater.total_out() == out_before;
                // No progress with room to spare means the inflater wants input we don't have.
                if stalled && out.len() < out.capacity() {
                    return Err(io::Error::new(
                        io::ErrorKind::UnexpectedEof,
                        "deflate stream ended before its final block",
                    ));
                }
            }
        }
    }

    trace!("inflated {} bytes -> {} bytes", inflater.total_in(), out.len());
    Ok(out)
}
