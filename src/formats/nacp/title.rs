//! Title entries and the tables that hold them.

use std::collections::BTreeMap;
use std::fmt;

use log::{debug, warn};

use super::{ENTRY_SIZE, Language, NAME_SIZE, TITLE_BLOCK_SIZE, decompress, is_compressed};
use crate::utils::null_padded_string;

/// Localized application name and publisher for one language.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TitleEntry {
    pub name: String,
    pub publisher: String,
}

impl TitleEntry {
    /// Decode a 0x300-byte title entry slot.
    ///
    /// Both fields end at their first NUL byte.
    fn parse(slot: &[u8]) -> Self {
        let (name, publisher) = slot.split_at(NAME_SIZE.min(slot.len()));
        Self {
            name: null_padded_string(name),
            publisher: null_padded_string(publisher),
        }
    }
}

/// A [`TitleEntry`] tagged with its language.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Title {
    pub language: Language,
    pub entry: TitleEntry,
}

impl fmt::Display for Title {
    /// `"{name} - {publisher} ({language})"`, dropping the publisher part when
    /// it is empty. Blank titles render as an empty string.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let TitleEntry { name, publisher } = &self.entry;
        if name.trim().is_empty() && publisher.trim().is_empty() {
            return Ok(());
        }
        write!(f, "{name}")?;
        if !publisher.is_empty() {
            write!(f, " - {publisher}")?;
        }
        write!(f, " ({})", self.language)
    }
}

/// A title table: consecutive 0x300-byte entries indexed by [`Language`].
///
/// Produced by [`decompress`](super::decompress) (16 to 31 entries) or viewed
/// over a legacy-layout buffer with [`TitleBlock::from_canonical`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TitleBlock {
    data: Vec<u8>,
}

impl TitleBlock {
    pub(crate) fn new(data: Vec<u8>) -> Self {
        Self { data }
    }

    /// Copy the title block region of a legacy-layout buffer.
    ///
    /// Short buffers yield a block with fewer entries.
    pub fn from_canonical(nacp: &[u8]) -> Self {
        let end = nacp.len().min(TITLE_BLOCK_SIZE);
        Self::new(nacp[..end].to_vec())
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }

    pub fn into_bytes(self) -> Vec<u8> {
        self.data
    }

    pub fn len(&self) -> usize {
        self.data.len()
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Number of complete entries in the block.
    pub fn entry_count(&self) -> usize {
        self.data.len() / ENTRY_SIZE
    }

    /// The first 0x3000 bytes, i.e. the 16 entries a legacy table holds.
    pub fn legacy_region(&self) -> &[u8] {
        &self.data[..self.data.len().min(TITLE_BLOCK_SIZE)]
    }

    /// Entry for `language`, or [`None`] if the block is too short to hold
    /// it or the name is empty.
    pub fn entry(&self, language: Language) -> Option<TitleEntry> {
        let start = language.index() * ENTRY_SIZE;
        let slot = self.data.get(start..start + ENTRY_SIZE)?;
        let entry = TitleEntry::parse(slot);
        (!entry.name.is_empty()).then_some(entry)
    }

    /// Every localized entry among `languages`.
    pub(crate) fn entries<'a>(
        &self,
        languages: impl IntoIterator<Item = &'a Language>,
    ) -> BTreeMap<Language, TitleEntry> {
        languages
            .into_iter()
            .filter_map(|&lang| self.entry(lang).map(|entry| (lang, entry)))
            .collect()
    }

    /// Localized entries for languages 16 and up.
    pub fn extended_entries(&self) -> BTreeMap<Language, TitleEntry> {
        self.entries(Language::extended())
    }
}

/// Extended-language titles carried by a compressed NACP.
///
/// Never fails: legacy input, and input that does not decompress, both
/// produce an empty map. Only languages with a non-empty name are included.
pub fn extended_entries(nacp: &[u8]) -> BTreeMap<Language, TitleEntry> {
    if !is_compressed(nacp) {
        return BTreeMap::new();
    }
    match decompress(nacp) {
        Ok(block) => {
            let entries = block.extended_entries();
            debug!(
                "{} of {} title entries are extended languages",
                entries.len(),
                block.entry_count()
            );
            entries
        }
        Err(e) => {
            warn!("skipping extended title entries: {e}");
            BTreeMap::new()
        }
    }
}

/// Titles for languages 0–15 from a legacy-layout buffer.
///
/// Pass the output of [`to_canonical`](super::to_canonical) when the source
/// may be compressed. Only languages with a non-empty name are included.
pub fn legacy_entries(canonical: &[u8]) -> BTreeMap<Language, TitleEntry> {
    TitleBlock::from_canonical(canonical).entries(Language::legacy())
}
