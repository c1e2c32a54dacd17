//! NACP title languages.
//!
//! The title table is indexed by language. Indices 0–15 are the original
//! set every NACP carries; 16–30 were added together with the compressed
//! title block and only exist in that format.

use std::fmt;

use crate::{Error, Result};

/// A language slot in the NACP title table.
///
/// The discriminant is the slot index. Ordering follows the index.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[repr(u8)]
pub enum Language {
    AmericanEnglish = 0,
    BritishEnglish = 1,
    Japanese = 2,
    French = 3,
    German = 4,
    LatinAmericanSpanish = 5,
    Spanish = 6,
    Italian = 7,
    Dutch = 8,
    CanadianFrench = 9,
    Portuguese = 10,
    Russian = 11,
    Korean = 12,
    /// Listed as "Taiwanese" in some documentation.
    TraditionalChinese = 13,
    /// Listed as "Chinese" in some documentation.
    SimplifiedChinese = 14,
    BrazilianPortuguese = 15,
    Polish = 16,
    Thai = 17,
    Indonesian = 18,
    Romanian = 19,
    Vietnamese = 20,
    Arabic = 21,
    Ukrainian = 22,
    Czech = 23,
    Slovak = 24,
    Greek = 25,
    Hungarian = 26,
    Norwegian = 27,
    Finnish = 28,
    Swedish = 29,
    Danish = 30,
}

impl Language {
    /// Every language, in index order.
    pub const ALL: [Language; 31] = [
        Language::AmericanEnglish,
        Language::BritishEnglish,
        Language::Japanese,
        Language::French,
        Language::German,
        Language::LatinAmericanSpanish,
        Language::Spanish,
        Language::Italian,
        Language::Dutch,
        Language::CanadianFrench,
        Language::Portuguese,
        Language::Russian,
        Language::Korean,
        Language::TraditionalChinese,
        Language::SimplifiedChinese,
        Language::BrazilianPortuguese,
        Language::Polish,
        Language::Thai,
        Language::Indonesian,
        Language::Romanian,
        Language::Vietnamese,
        Language::Arabic,
        Language::Ukrainian,
        Language::Czech,
        Language::Slovak,
        Language::Greek,
        Language::Hungarian,
        Language::Norwegian,
        Language::Finnish,
        Language::Swedish,
        Language::Danish,
    ];

    /// Languages present in both title block formats (indices 0–15).
    pub fn legacy() -> &'static [Language] {
        &LANGUAGES[..super::LEGACY_LANGUAGE_COUNT]
    }

    /// Languages only present in the compressed format (indices 16–30).
    pub fn extended() -> &'static [Language] {
        &LANGUAGES[super::LEGACY_LANGUAGE_COUNT..]
    }

    /// Slot index in the title table.
    #[inline]
    pub fn index(self) -> usize {
        self as usize
    }

    /// Returns true for languages only the compressed format can carry.
    #[inline]
    pub fn is_extended(self) -> bool {
        self.index() >= super::LEGACY_LANGUAGE_COUNT
    }

    /// The language's name, e.g. `"TraditionalChinese"`.
    pub fn name(self) -> &'static str {
        match self {
            Language::AmericanEnglish => "AmericanEnglish",
            Language::BritishEnglish => "BritishEnglish",
            Language::Japanese => "Japanese",
            Language::French => "French",
            Language::German => "German",
            Language::LatinAmericanSpanish => "LatinAmericanSpanish",
            Language::Spanish => "Spanish",
            Language::Italian => "Italian",
            Language::Dutch => "Dutch",
            Language::CanadianFrench => "CanadianFrench",
            Language::Portuguese => "Portuguese",
            Language::Russian => "Russian",
            Language::Korean => "Korean",
            Language::TraditionalChinese => "TraditionalChinese",
            Language::SimplifiedChinese => "SimplifiedChinese",
            Language::BrazilianPortuguese => "BrazilianPortuguese",
            Language::Polish => "Polish",
            Language::Thai => "Thai",
            Language::Indonesian => "Indonesian",
            Language::Romanian => "Romanian",
            Language::Vietnamese => "Vietnamese",
            Language::Arabic => "Arabic",
            Language::Ukrainian => "Ukrainian",
            Language::Czech => "Czech",
            Language::Slovak => "Slovak",
            Language::Greek => "Greek",
            Language::Hungarian => "Hungarian",
            Language::Norwegian => "Norwegian",
            Language::Finnish => "Finnish",
            Language::Swedish => "Swedish",
            Language::Danish => "Danish",
        }
    }
}

static LANGUAGES: [Language; 31] = Language::ALL;

impl TryFrom<u8> for Language {
    type Error = Error;
    fn try_from(v: u8) -> Result<Self> {
        Self::ALL
            .get(v as usize)
            .copied()
            .ok_or(Error::UnknownLanguage(v))
    }
}

impl fmt::Display for Language {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
