//! Low-level byte primitives shared by the decoders.
//!
//! Slice helpers never panic on short input; they return [`None`] and leave
//! the policy to the caller.

use std::io::Read;

use crate::Result;

/// Read the byte at `offset`.
#[inline]
pub(crate) fn u8_at(buf: &[u8], offset: usize) -> Option<u8> {
    buf.get(offset).copied()
}

/// Read a little-endian `u16` at `offset`.
#[inline]
pub(crate) fn le_u16_at(buf: &[u8], offset: usize) -> Option<u16> {
    let b = buf.get(offset..offset.checked_add(2)?)?;
    Some(u16::from_le_bytes([b[0], b[1]]))
}

/// Decode a fixed-width, NUL-padded UTF-8 field.
///
/// The string ends at the first NUL even if non-NUL bytes follow it. Invalid
/// UTF-8 is replaced rather than rejected.
#[inline]
pub(crate) fn null_padded_string(field: &[u8]) -> String {
    let end = field.iter().position(|&b| b == 0).unwrap_or(field.len());
    String::from_utf8_lossy(&field[..end]).into_owned()
}

/// Read everything left in `r` into a `Vec`.
pub(crate) fn read_all<R: Read>(r: &mut R) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    r.read_to_end(&mut bytes)?;
    Ok(bytes)
}
