//! English (US) grammar tables.

use std::collections::HashMap;

use crate::duration_value::{MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use crate::locale::{Locale, WordClass};

pub(super) fn table() -> Locale {
    Locale { id: "en-US", words: words(), units: units(), articles: &["a", "an"], compounds: None }
}

/// Number vocabulary: values 0..19, the tens, the hundred word, scale words
/// with their plurals, and the shorthand scale forms seen in casual writing
/// ("mil", "bill").
fn words() -> HashMap<&'static str, WordClass> {
    use WordClass::*;

    HashMap::from([
        ("zero", Ones(0)),
        ("one", Ones(1)),
        ("two", Ones(2)),
        ("three", Ones(3)),
        ("four", Ones(4)),
        ("five", Ones(5)),
        ("six", Ones(6)),
        ("seven", Ones(7)),
        ("eight", Ones(8)),
        ("nine", Ones(9)),
        ("ten", Ones(10)),
        ("eleven", Ones(11)),
        ("twelve", Ones(12)),
        ("thirteen", Ones(13)),
        ("fourteen", Ones(14)),
        ("fifteen", Ones(15)),
        ("sixteen", Ones(16)),
        ("seventeen", Ones(17)),
        ("eighteen", Ones(18)),
        ("nineteen", Ones(19)),
        ("twenty", Tens(20)),
        ("thirty", Tens(30)),
        ("forty", Tens(40)),
        ("fourty", Tens(40)),
        ("fifty", Tens(50)),
        ("sixty", Tens(60)),
        ("seventy", Tens(70)),
        ("eighty", Tens(80)),
        ("ninety", Tens(90)),
        ("hundred", Hundred),
        ("thousand", Scale(1e3)),
        ("thousands", Scale(1e3)),
        ("thou", Scale(1e3)),
        ("million", Scale(1e6)),
        ("millions", Scale(1e6)),
        ("mil", Scale(1e6)),
        ("billion", Scale(1e9)),
        ("billions", Scale(1e9)),
        ("bill", Scale(1e9)),
        ("bil", Scale(1e9)),
        ("trillion", Scale(1e12)),
        ("trillions", Scale(1e12)),
        ("tril", Scale(1e12)),
        ("half", Fraction(0.5)),
        ("quarter", Fraction(0.25)),
        ("a", Filler),
        ("an", Filler),
        ("of", Filler),
        ("and", Connector),
    ])
}

/// Duration unit vocabulary, as millisecond multipliers. Single-letter
/// abbreviations are deliberately absent; bare "m" is too ambiguous.
fn units() -> HashMap<&'static str, f64> {
    let (second, minute, hour, day) =
        (MS_PER_SECOND as f64, MS_PER_MINUTE as f64, MS_PER_HOUR as f64, MS_PER_DAY as f64);

    HashMap::from([
        ("second", second),
        ("seconds", second),
        ("sec", second),
        ("secs", second),
        ("minute", minute),
        ("minutes", minute),
        ("min", minute),
        ("mins", minute),
        ("hour", hour),
        ("hours", hour),
        ("hr", hour),
        ("hrs", hour),
        ("day", day),
        ("days", day),
    ])
}
