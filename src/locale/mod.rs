//! Locale grammar tables.
//!
//! Everything language-specific lives here as data: word classifications for
//! the number grammar, unit vocabularies for the duration grammar, and (for
//! locales that glue number words together) a morpheme table the compound
//! decomposer can split against. The grammar engines themselves are
//! locale-blind, so adding a locale means adding a table, not code.

use once_cell::sync::Lazy;
use std::collections::HashMap;
use thiserror::Error;

mod de_de;
mod en_us;

/// Locale used by translators constructed with `new()`.
pub const DEFAULT_LOCALE: &str = "en-US";

/// Error returned when a locale identifier is not recognized.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LocaleError {
    /// The identifier did not match any registered locale table.
    #[error("unknown locale `{0}`")]
    Unknown(String),
}

/// How a word participates in the number grammar.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum WordClass {
    /// Unit values 0..=19, including the teens.
    Ones(i64),
    /// Whole tens 20..=90.
    Tens(i64),
    /// The hundred word. Not a scale word: it multiplies within a group
    /// instead of closing one.
    Hundred,
    /// Scale words (thousand and up), as the multiplier they apply.
    Scale(f64),
    /// Fraction prefixes (half, quarter), as the factor they apply.
    Fraction(f64),
    /// Glue words allowed between a fraction prefix and its magnitude.
    Filler,
    /// The additive connector ("and"/"und"). Only valid after a hundred.
    Connector,
}

/// One locale's grammar tables.
#[derive(Debug)]
pub(crate) struct Locale {
    pub id: &'static str,
    words: HashMap<&'static str, WordClass>,
    units: HashMap<&'static str, f64>,
    articles: &'static [&'static str],
    compounds: Option<CompoundTable>,
}

impl Locale {
    /// Classify a lowercased word for the number grammar.
    pub(crate) fn classify(&self, word: &str) -> Option<WordClass> {
        self.words.get(word).copied()
    }

    /// Millisecond multiplier for a lowercased duration unit word.
    pub(crate) fn unit_millis(&self, word: &str) -> Option<f64> {
        self.units.get(word).copied()
    }

    /// Whether a lowercased word implies a quantity of one ("a day").
    pub(crate) fn is_article(&self, word: &str) -> bool {
        self.articles.contains(&word)
    }

    pub(crate) fn compounds(&self) -> Option<&CompoundTable> {
        self.compounds.as_ref()
    }
}

/// Morpheme table for locales that agglutinate number words into compounds.
///
/// Entries are held longest-first so a greedy scan picks "achtzehn" over
/// "acht".
#[derive(Debug)]
pub(crate) struct CompoundTable {
    morphemes: Vec<(&'static str, WordClass)>,
}

impl CompoundTable {
    pub(crate) fn new(entries: &[(&'static str, WordClass)]) -> Self {
        let mut morphemes = entries.to_vec();
        morphemes.sort_by(|a, b| b.0.len().cmp(&a.0.len()).then(a.0.cmp(b.0)));
        CompoundTable { morphemes }
    }

    /// Longest morpheme that prefixes `rest`, if any.
    pub(crate) fn longest_prefix(&self, rest: &str) -> Option<(&'static str, WordClass)> {
        self.morphemes.iter().copied().find(|(m, _)| rest.starts_with(m))
    }
}

static EN_US: Lazy<Locale> = Lazy::new(en_us::table);
static DE_DE: Lazy<Locale> = Lazy::new(de_de::table);

/// Locale identifiers this build knows about.
pub fn supported_locales() -> &'static [&'static str] {
    &["en-US", "de-DE"]
}

pub(crate) fn default_locale() -> &'static Locale {
    &EN_US
}

/// Look up a locale table by identifier. Matching is ASCII case-insensitive.
pub(crate) fn lookup(id: &str) -> Result<&'static Locale, LocaleError> {
    if id.eq_ignore_ascii_case("en-US") {
        Ok(&EN_US)
    } else if id.eq_ignore_ascii_case("de-DE") {
        Ok(&DE_DE)
    } else {
        Err(LocaleError::Unknown(id.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn lookup_is_case_insensitive() {
        assert_eq!(lookup("en-us").unwrap().id, "en-US");
        assert_eq!(lookup("DE-DE").unwrap().id, "de-DE");
    }

    #[test]
    fn lookup_rejects_unknown_identifiers() {
        let err = lookup("xx-XX").unwrap_err();
        assert_eq!(err, LocaleError::Unknown("xx-XX".to_string()));
        assert_eq!(err.to_string(), "unknown locale `xx-XX`");
    }

    #[test]
    fn every_supported_locale_resolves() {
        for id in supported_locales() {
            assert_eq!(lookup(id).unwrap().id, *id);
        }
    }

    #[test]
    fn compound_prefixes_prefer_the_longest_morpheme() {
        let table =
            CompoundTable::new(&[("acht", WordClass::Ones(8)), ("achtzehn", WordClass::Ones(18))]);
        let (m, class) = table.longest_prefix("achtzehnte").unwrap();
        assert_eq!(m, "achtzehn");
        assert_eq!(class, WordClass::Ones(18));
        assert!(table.longest_prefix("neun").is_none());
    }
}
