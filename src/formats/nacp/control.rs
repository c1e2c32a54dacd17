//! Loading a `control.nacp` in either title block format.

use std::collections::BTreeMap;
use std::io::Read;

use log::{debug, warn};

use super::title::legacy_entries;
use super::{
    Language, METADATA_OFFSET, Title, TitleBlock, TitleBlockFormat, TitleEntry, assemble,
    inflate_title_block,
};
use crate::Result;
use crate::error::DecompressError;
use crate::utils::read_all;

/// A loaded `control.nacp`, normalized to the legacy layout.
///
/// Loading never fails on bad title block data. If a compressed title block
/// cannot be decompressed, the raw bytes are kept as a degraded stand-in for
/// the canonical buffer so the metadata region stays reachable, and no titles
/// are reported.
#[derive(Debug)]
pub struct ControlData {
    canonical: Vec<u8>,
    format: TitleBlockFormat,
    degradation: Option<DecompressError>,
    extended: BTreeMap<Language, TitleEntry>,
}

impl ControlData {
    /// Read a whole `control.nacp` from `r`.
    ///
    /// Only I/O failures are returned.
    pub fn parse<R: Read>(r: &mut R) -> Result<Self> {
        Ok(Self::from_bytes(read_all(r)?))
    }

    /// Wrap raw `control.nacp` bytes.
    pub fn from_bytes(raw: Vec<u8>) -> Self {
        let format = TitleBlockFormat::detect(&raw);
        debug!("NACP title block format: {format:?} ({:#X} bytes)", raw.len());

        if format == TitleBlockFormat::Legacy {
            return Self {
                canonical: raw,
                format,
                degradation: None,
                extended: BTreeMap::new(),
            };
        }

        match inflate_title_block(&raw) {
            Ok(block) => Self {
                canonical: assemble(&block, &raw),
                format,
                degradation: None,
                extended: block.extended_entries(),
            },
            Err(e) => {
                warn!("NACP title block unreadable, using raw bytes: {e}");
                Self {
                    canonical: raw,
                    format,
                    degradation: Some(e),
                    extended: BTreeMap::new(),
                }
            }
        }
    }

    /// Title block format detected in the source bytes.
    pub fn format(&self) -> TitleBlockFormat {
        self.format
    }

    /// Returns true if the buffer could not be normalized.
    pub fn is_degraded(&self) -> bool {
        self.degradation.is_some()
    }

    /// Why normalization failed, if it did.
    pub fn degradation(&self) -> Option<&DecompressError> {
        self.degradation.as_ref()
    }

    /// Legacy-layout bytes (or the raw source bytes when degraded).
    pub fn canonical_bytes(&self) -> &[u8] {
        &self.canonical
    }

    pub fn into_canonical_bytes(self) -> Vec<u8> {
        self.canonical
    }

    /// The format-independent region from 0x3000 on. Empty for short files.
    pub fn metadata(&self) -> &[u8] {
        self.canonical.get(METADATA_OFFSET..).unwrap_or_default()
    }

    /// Titles for languages 16 and up.
    pub fn extended_entries(&self) -> &BTreeMap<Language, TitleEntry> {
        &self.extended
    }

    /// Title for one language, if localized.
    pub fn title(&self, language: Language) -> Option<TitleEntry> {
        if self.is_degraded() {
            None
        } else if language.is_extended() {
            self.extended.get(&language).cloned()
        } else {
            TitleBlock::from_canonical(&self.canonical).entry(language)
        }
    }

    /// All localized titles in language order.
    pub fn titles(&self) -> Vec<Title> {
        if self.is_degraded() {
            return Vec::new();
        }
        legacy_entries(&self.canonical)
            .into_iter()
            .chain(self.extended.iter().map(|(&l, e)| (l, e.clone())))
            .map(|(language, entry)| Title { language, entry })
            .collect()
    }
}
