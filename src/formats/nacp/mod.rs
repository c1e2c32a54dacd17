//! NACP (Nintendo Application Control Property) - title metadata.
//!
//! Found as `control.nacp` in the RomFS of a Control NCA. This module only
//! deals with the title block; the rest of the file is treated as an opaque
//! metadata region and passed through untouched.
//!
//! ## File Layout
//! ```text
//! [0x0000] Title block      (0x3000 bytes, format-dependent)
//! [0x3000] Metadata fields  (0x1000 bytes, format-independent)
//!   [0x3215] Title block format flag (u8): 0 = legacy, nonzero = compressed
//! ```
//!
//! ## Legacy Title Block
//! ```text
//! [0x0000 + N×0x300] Title entry for language N, N = 0..16
//! ```
//!
//! ## Compressed Title Block
//! ```text
//! [0x0000] CompressedSize                     (u16 LE)
//! [0x0002] Raw DEFLATE data                   (CompressedSize bytes)
//! [...]    Padding up to 0x3000
//! ```
//! The stream inflates to between 16 and 31 title entries, laid out exactly
//! like the legacy table. Entries 16+ hold the extended languages.
//!
//! ## Title Entry (0x300 bytes)
//! ```text
//! [0x000] Name       (NUL-padded UTF-8, 0x200 bytes)
//! [0x200] Publisher  (NUL-padded UTF-8, 0x100 bytes)
//! ```
//!
//! ## Typical usage with nacpkit
//! 1. Extract `control.nacp` bytes from the Control NCA.
//! 2. Wrap them with [`ControlData::from_bytes`], or call [`to_canonical`] and
//!    [`extended_entries`] directly.
//! 3. Hand [`ControlData::canonical_bytes`] to any decoder that understands
//!    the legacy layout.

use std::result::Result as StdResult;

use log::debug;

use crate::compression::deflate::inflate_raw;
use crate::error::DecompressError;
use crate::utils::{le_u16_at, u8_at};
use crate::Result;

mod control;
mod language;
mod title;

pub use control::ControlData;
pub use language::Language;
pub use title::{Title, TitleBlock, TitleEntry, extended_entries, legacy_entries};

/// Size of the title block region at the start of the file.
pub const TITLE_BLOCK_SIZE: usize = 0x3000;
/// Offset of the format-independent metadata region.
pub const METADATA_OFFSET: usize = 0x3000;
/// Offset of the title block format flag.
pub const FORMAT_FLAG_OFFSET: usize = 0x3215;
/// Size of one title entry.
pub const ENTRY_SIZE: usize = 0x300;
/// Size of the name field at the start of a title entry.
pub const NAME_SIZE: usize = 0x200;
/// Size of the publisher field following the name.
pub const PUBLISHER_SIZE: usize = 0x100;
/// Number of languages the legacy title block holds.
pub const LEGACY_LANGUAGE_COUNT: usize = 16;
/// Number of languages the compressed title block can hold.
pub const MAX_LANGUAGE_COUNT: usize = 31;
/// Size of a fully populated decompressed title block.
pub const MAX_DECOMPRESSED_SIZE: usize = MAX_LANGUAGE_COUNT * ENTRY_SIZE;

/// Hard cap on inflated output. Leaves room past [`MAX_DECOMPRESSED_SIZE`]
/// for entries newer firmware may add; anything bigger is not a title block.
const INFLATE_LIMIT: usize = 0x10000;

/// Size of the compressed-size header.
const SIZE_HEADER_LEN: usize = 2;

/// How the title block of a NACP is stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TitleBlockFormat {
    /// 16 plain title entries.
    Legacy,
    /// Size-prefixed raw DEFLATE stream.
    Compressed,
}

impl TitleBlockFormat {
    /// Classify a raw NACP buffer. See [`is_compressed`].
    pub fn detect(nacp: &[u8]) -> Self {
        if is_compressed(nacp) {
            Self::Compressed
        } else {
            Self::Legacy
        }
    }
}

/// Returns true if `nacp` uses the compressed title block format.
///
/// Buffers too short to contain the flag byte are legacy.
#[inline]
pub fn is_compressed(nacp: &[u8]) -> bool {
    u8_at(nacp, FORMAT_FLAG_OFFSET).is_some_and(|flag| flag != 0)
}

/// Inflate the compressed title block of `nacp`.
///
/// Does not check the format flag; legacy input fails with one of the
/// [`DecompressError`] kinds. The returned block holds at least 16 entries.
pub fn decompress(nacp: &[u8]) -> Result<TitleBlock> {
    Ok(inflate_title_block(nacp)?)
}

pub(crate) fn inflate_title_block(nacp: &[u8]) -> StdResult<TitleBlock, DecompressError> {
    let compressed_size = le_u16_at(nacp, 0).ok_or(DecompressError::BufferTooSmall {
        len: nacp.len(),
    })?;

    let data_end = SIZE_HEADER_LEN + compressed_size as usize;
    if data_end > TITLE_BLOCK_SIZE {
        return Err(DecompressError::CompressedRegionOverflow {
            compressed_size,
            data_end,
        });
    }

    // The region check does not cover inputs shorter than the title block.
    let data = nacp
        .get(SIZE_HEADER_LEN..data_end)
        .ok_or(DecompressError::BufferTooSmall { len: nacp.len() })?;

    let inflated =
        inflate_raw(data, MAX_DECOMPRESSED_SIZE, INFLATE_LIMIT).map_err(DecompressError::Inflate)?;
    if inflated.len() < TITLE_BLOCK_SIZE {
        return Err(DecompressError::DecompressedTooShort {
            len: inflated.len(),
        });
    }

    debug!(
        "decompressed title block: {compressed_size:#X} -> {:#X} bytes",
        inflated.len()
    );
    Ok(TitleBlock::new(inflated))
}

/// Convert `nacp` to the legacy layout.
///
/// Legacy input is returned as an unchanged copy. Compressed input is
/// rebuilt as the first 16 decompressed entries followed by every byte of
/// `nacp` from [`METADATA_OFFSET`] on, so the output length is always
/// `0x3000 + max(0, nacp.len() - 0x3000)`.
pub fn to_canonical(nacp: &[u8]) -> Result<Vec<u8>> {
    if !is_compressed(nacp) {
        return Ok(nacp.to_vec());
    }
    let block = decompress(nacp)?;
    Ok(assemble(&block, nacp))
}

/// Join the legacy part of `block` with the metadata region of `nacp`.
pub(crate) fn assemble(block: &TitleBlock, nacp: &[u8]) -> Vec<u8> {
    let metadata = nacp.get(METADATA_OFFSET..).unwrap_or_default();
    let mut out = Vec::with_capacity(TITLE_BLOCK_SIZE + metadata.len());
    out.extend_from_slice(block.legacy_region());
    out.extend_from_slice(metadata);
    out
}

#[cfg(test)]
pub(crate) mod tests {
    use std::io::Write;

    use flate2::Compression;
    use flate2::write::DeflateEncoder;

    use super::*;
    use crate::Error;

    pub(crate) const NACP_SIZE: usize = 0x4000;

    /// A title table with `count` entries named after their index.
    pub(crate) fn title_table(count: usize) -> Vec<u8> {
        let mut table = vec![0u8; count * ENTRY_SIZE];
        for i in 0..count {
            let slot = &mut table[i * ENTRY_SIZE..(i + 1) * ENTRY_SIZE];
            let name = format!("Title {i}");
            let publisher = format!("Publisher {i}");
            slot[..name.len()].copy_from_slice(name.as_bytes());
            slot[NAME_SIZE..NAME_SIZE + publisher.len()].copy_from_slice(publisher.as_bytes());
        }
        table
    }

    pub(crate) fn deflate(data: &[u8]) -> Vec<u8> {
        let mut enc = DeflateEncoder::new(Vec::new(), Compression::best());
        enc.write_all(data).unwrap();
        enc.finish().unwrap()
    }

    /// A full-size compressed NACP whose title block inflates to `table`.
    pub(crate) fn compressed_nacp(table: &[u8]) -> Vec<u8> {
        let packed = deflate(table);
        let mut nacp = vec![0u8; NACP_SIZE];
        nacp[..2].copy_from_slice(&(packed.len() as u16).to_le_bytes());
        nacp[2..2 + packed.len()].copy_from_slice(&packed);
        for (i, b) in nacp[METADATA_OFFSET..].iter_mut().enumerate() {
            *b = (i % 0xFB) as u8;
        }
        nacp[FORMAT_FLAG_OFFSET] = 1;
        nacp
    }

    #[test]
    fn detects_flag_byte() {
        let mut nacp = vec![0u8; NACP_SIZE];
        assert!(!is_compressed(&nacp));
        assert_eq!(TitleBlockFormat::detect(&nacp), TitleBlockFormat::Legacy);
        nacp[FORMAT_FLAG_OFFSET] = 0x80;
        assert!(is_compressed(&nacp));
        assert_eq!(TitleBlockFormat::detect(&nacp), TitleBlockFormat::Compressed);
    }

    #[test]
    fn short_buffers_are_legacy() {
        let mut nacp = vec![0xFFu8; FORMAT_FLAG_OFFSET];
        assert!(!is_compressed(&nacp));
        nacp.push(1);
        assert!(is_compressed(&nacp));
        assert!(!is_compressed(&[]));
    }

    #[test]
    fn decompress_returns_whole_block() {
        let table = title_table(20);
        let block = decompress(&compressed_nacp(&table)).unwrap();
        assert_eq!(block.len(), 0x3C00);
        assert_eq!(block.as_bytes(), &table[..]);
    }

    #[test]
    fn decompress_needs_size_header() {
        assert!(matches!(
            decompress(&[0x01]),
            Err(Error::Decompress(DecompressError::BufferTooSmall { len: 1 }))
        ));
    }

    #[test]
    fn decompress_rejects_region_overflow() {
        let mut nacp = compressed_nacp(&title_table(16));
        nacp[..2].copy_from_slice(&0x3000u16.to_le_bytes());
        assert!(matches!(
            decompress(&nacp),
            Err(Error::Decompress(DecompressError::CompressedRegionOverflow {
                compressed_size: 0x3000,
                data_end: 0x3002,
            }))
        ));
    }

    #[test]
    fn decompress_accepts_region_boundary() {
        // Data may run right up to 0x3000; padding after the stream end is ignored.
        let mut nacp = compressed_nacp(&title_table(16));
        nacp[..2].copy_from_slice(&0x2FFEu16.to_le_bytes());
        assert_eq!(decompress(&nacp).unwrap().len(), TITLE_BLOCK_SIZE);
    }

    #[test]
    fn decompress_rejects_truncated_input_buffer() {
        let nacp = compressed_nacp(&title_table(16));
        let size = u16::from_le_bytes([nacp[0], nacp[1]]) as usize;
        assert!(matches!(
            decompress(&nacp[..size]),
            Err(Error::Decompress(DecompressError::BufferTooSmall { .. }))
        ));
    }

    #[test]
    fn decompress_rejects_short_table() {
        let nacp = compressed_nacp(&title_table(15));
        assert!(matches!(
            decompress(&nacp),
            Err(Error::Decompress(DecompressError::DecompressedTooShort { len: 0x2D00 }))
        ));
    }

    #[test]
    fn decompress_rejects_corrupt_stream() {
        let mut nacp = compressed_nacp(&title_table(16));
        let size = u16::from_le_bytes([nacp[0], nacp[1]]);
        nacp[..2].copy_from_slice(&(size / 2).to_le_bytes());
        assert!(matches!(
            decompress(&nacp),
            Err(Error::Decompress(DecompressError::Inflate(_)))
        ));
    }

    #[test]
    fn canonical_legacy_is_identity() {
        let mut nacp = title_table(16);
        nacp.resize(NACP_SIZE, 0);
        nacp[0x3100] = 0x42;
        assert_eq!(to_canonical(&nacp).unwrap(), nacp);
    }

    #[test]
    fn canonical_compressed_keeps_metadata() {
        let table = title_table(20);
        let nacp = compressed_nacp(&table);
        let canonical = to_canonical(&nacp).unwrap();
        assert_eq!(canonical.len(), NACP_SIZE);
        assert_eq!(&canonical[..TITLE_BLOCK_SIZE], &table[..TITLE_BLOCK_SIZE]);
        assert_eq!(&canonical[METADATA_OFFSET..], &nacp[METADATA_OFFSET..]);
        // The flag is part of the metadata and survives.
        assert_eq!(canonical[FORMAT_FLAG_OFFSET], 1);
    }

    #[test]
    fn canonical_tracks_input_tail_length() {
        let table = title_table(16);
        let mut nacp = compressed_nacp(&table);
        nacp.extend_from_slice(&[0xAA; 0x20]);
        let canonical = to_canonical(&nacp).unwrap();
        assert_eq!(canonical.len(), NACP_SIZE + 0x20);
        assert_eq!(&canonical[NACP_SIZE..], &[0xAA; 0x20]);
    }

    #[test]
    fn canonical_propagates_failure() {
        let mut nacp = compressed_nacp(&title_table(16));
        nacp[..2].copy_from_slice(&0xFFFFu16.to_le_bytes());
        let err = to_canonical(&nacp).unwrap_err();
        assert!(err.is_decompression_failure());
    }
}
