//! Parsers for Nintendo Switch binary formats.
//!
//! Parsers follow the same conventions:
//!
//! * **Byte slices in, owned values out** - callers extract the file from its
//!   container first; nothing here touches the file system.
//! * **Crypto and container access are out of scope** - parsers receive
//!   already-decrypted bytes. Decompression of embedded regions goes through
//!   [`crate::compression`].
//!
//! ## Format overview
//!
//! | Module   | Format | Description |
//! |----------|--------|-------------|
//! | [`nacp`] | NACP   | Application control property (`control.nacp`); localized titles in legacy or compressed form |

pub mod nacp;
