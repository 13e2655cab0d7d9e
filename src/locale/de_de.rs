//! German grammar tables.
//!
//! German writes numbers below the scale words as single compound words
//! ("dreiundfünfzig"), so besides the whole-word table this locale carries a
//! morpheme table for the compound decomposer. Inside compounds the ones come
//! before the tens; the decomposer reorders them before the accumulator runs.
//!
//! Note the long scale: German "Billion" is 1e12, not 1e9.

use std::collections::HashMap;

use crate::duration_value::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use crate::locale::{CompoundTable, Locale, WordClass};

pub(super) fn table() -> Locale {
    Locale {
        id: "de-DE",
        words: words(),
        units: units(),
        articles: &["ein", "eine"],
        compounds: Some(CompoundTable::new(MORPHEMES)),
    }
}

/// Morphemes the compound decomposer may split a written number into.
/// "dreissig" is the accepted ASCII spelling of "dreißig".
const MORPHEMES: &[(&str, WordClass)] = {
    use WordClass::*;

    &[
        ("ein", Ones(1)),
        ("eins", Ones(1)),
        ("zwei", Ones(2)),
        ("drei", Ones(3)),
        ("vier", Ones(4)),
        ("fünf", Ones(5)),
        ("sechs", Ones(6)),
        ("sieben", Ones(7)),
        ("acht", Ones(8)),
        ("neun", Ones(9)),
        ("zehn", Ones(10)),
        ("elf", Ones(11)),
        ("zwölf", Ones(12)),
        ("dreizehn", Ones(13)),
        ("vierzehn", Ones(14)),
        ("fünfzehn", Ones(15)),
        ("sechzehn", Ones(16)),
        ("siebzehn", Ones(17)),
        ("achtzehn", Ones(18)),
        ("neunzehn", Ones(19)),
        ("zwanzig", Tens(20)),
        ("dreißig", Tens(30)),
        ("dreissig", Tens(30)),
        ("vierzig", Tens(40)),
        ("fünfzig", Tens(50)),
        ("sechzig", Tens(60)),
        ("siebzig", Tens(70)),
        ("achtzig", Tens(80)),
        ("neunzig", Tens(90)),
        ("hundert", Hundred),
        ("tausend", Scale(1e3)),
        ("million", Scale(1e6)),
        ("millionen", Scale(1e6)),
        ("milliarde", Scale(1e9)),
        ("milliarden", Scale(1e9)),
        ("und", Connector),
    ]
};

/// Whole-word vocabulary. Every morpheme also stands alone, plus forms that
/// never appear inside compounds ("eine", the long-scale billions, the
/// fraction words).
fn words() -> HashMap<&'static str, WordClass> {
    use WordClass::*;

    let mut map = HashMap::from([
        ("null", Ones(0)),
        ("eine", Ones(1)),
        ("billion", Scale(1e12)),
        ("billionen", Scale(1e12)),
        ("halb", Fraction(0.5)),
        ("halbe", Fraction(0.5)),
        ("viertel", Fraction(0.25)),
    ]);
    map.extend(MORPHEMES.iter().copied());
    map
}

/// Duration unit vocabulary, as millisecond multipliers.
fn units() -> HashMap<&'static str, f64> {
    let (second, minute, hour, day) =
        (MS_PER_SECOND as f64, MS_PER_MINUTE as f64, MS_PER_HOUR as f64, MS_PER_DAY as f64);

    HashMap::from([
        ("sekunde", second),
        ("sekunden", second),
        ("sek", second),
        ("minute", minute),
        ("minuten", minute),
        ("min", minute),
        ("stunde", hour),
        ("stunden", hour),
        ("std", hour),
        ("tag", day),
        ("tage", day),
        ("tagen", day),
    ])
}
