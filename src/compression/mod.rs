//! Decompression helpers.
//!
//! Parsers in [`crate::formats`] receive already-extracted bytes and call into
//! this module when a region of those bytes is compressed.
//!
//! ## Submodules
//!
//! | Module | Algorithm | Typical use in nacpkit |
//! |--------|-----------|------------------------|
//! | [`deflate`] | Raw DEFLATE | Compressed NACP title blocks |

pub mod deflate;
