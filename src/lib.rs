//! **nacpkit** - a Rust library for decoding Nintendo Switch NACP title data.
//!
//! `control.nacp` stores one name/publisher pair per language. Older files
//! hold 16 languages in a plain table; newer firmware compresses the table
//! with raw DEFLATE so it can carry 31. This crate detects the format,
//! decompresses when needed, and rebuilds a legacy-layout buffer so existing
//! decoders keep working, while exposing the extra languages separately.
//!
//! # Modules
//! | Module | Purpose |
//! |--------|---------|
//! | [`formats::nacp`]       | Format detection, decompression, canonical buffer, title entries |
//! | [`compression::deflate`] | Raw DEFLATE inflate |
//!
//! # Example
//! ```no_run
//! use std::fs::File;
//!
//! use nacpkit::formats::nacp::{ControlData, Language};
//!
//! # fn main() -> nacpkit::Result<()> {
//! let nacp = ControlData::parse(&mut File::open("control.nacp")?)?;
//! if let Some(title) = nacp.title(Language::Polish) {
//!     println!("{} by {}", title.name, title.publisher);
//! }
//! # Ok(())
//! # }
//! ```

pub mod compression;
pub mod error;
pub mod formats;
pub(crate) mod utils;

pub use error::{DecompressError, Error, Result};
