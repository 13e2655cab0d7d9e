//! Duration matching.
//!
//! Two surface forms share one entry point:
//!
//! - Clock form: `h:m:s` or `d:h:m:s`, with an optional `.fraction` on the
//!   seconds. Only tried when the input has both digits and a colon.
//! - Phrase form: a chain of quantity + unit components. Components connect
//!   by direct adjacency, the locale's connector word, or nothing but glue
//!   ("1hr30min", "an hour and thirty minutes", "1 hr 30 mins").
//!
//! Like the number grammar, the phrase form is greedy with rollback: "an
//! hour and thirty cats" keeps the hour and leaves the cats alone.

use crate::duration_value::{DurationValue, MS_PER_DAY, MS_PER_HOUR, MS_PER_MINUTE, MS_PER_SECOND};
use crate::engine::lexer::{self, Atom, AtomKind};
use crate::engine::trigger::{BucketMask, TriggerInfo};
use crate::grammar::number;
use crate::locale::{Locale, WordClass};

const SECOND: f64 = MS_PER_SECOND as f64;
const MINUTE: f64 = MS_PER_MINUTE as f64;
const HOUR: f64 = MS_PER_HOUR as f64;
const DAY: f64 = MS_PER_DAY as f64;

/// A recognized duration: its value and the atom count it covers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct DurationMatch {
    pub value: DurationValue,
    pub consumed: usize,
}

/// Read the longest duration starting at `start`.
pub(crate) fn try_match(
    input: &str,
    atoms: &[Atom],
    start: usize,
    locale: &Locale,
    trigger: TriggerInfo,
) -> Option<DurationMatch> {
    if trigger.buckets.contains(BucketMask::HAS_DIGITS | BucketMask::HAS_COLON) {
        if let Some(m) = colon_form(input, atoms, start) {
            return Some(m);
        }
    }
    word_form(atoms, start, locale)
}

// --- Clock form ------------------------------------------------------------

fn colon_form(input: &str, atoms: &[Atom], start: usize) -> Option<DurationMatch> {
    let first = atoms.get(start)?;
    if first.kind != AtomKind::Digits {
        return None;
    }

    let m = regex!(r"^\d+:\d+:\d+(?::\d+)?(?:\.\d+)?").find(&input[first.span.start..])?;
    let end = first.span.start + m.end();

    // A colon on either side means this is a slice of something longer,
    // not a clock expression.
    if input[..first.span.start].ends_with(':') || input[end..].starts_with(':') {
        return None;
    }

    let (clock, frac) = match m.as_str().split_once('.') {
        Some((clock, frac)) => (clock, Some(frac)),
        None => (m.as_str(), None),
    };

    let fields: Vec<i64> = clock.split(':').map(str::parse).collect::<Result<_, _>>().ok()?;
    let mut millis = match fields[..] {
        [h, m, s] => h as f64 * HOUR + m as f64 * MINUTE + s as f64 * SECOND,
        [d, h, m, s] => d as f64 * DAY + h as f64 * HOUR + m as f64 * MINUTE + s as f64 * SECOND,
        _ => return None,
    };
    millis += frac_millis(frac);
    let value = DurationValue::checked_from_millis(millis)?;

    let mut last = start;
    while atoms[last].span.end < end {
        last += 1;
    }

    Some(DurationMatch { value, consumed: last - start + 1 })
}

/// Milliseconds contributed by a fractional-seconds suffix.
///
/// Scaling the integer numerator keeps short fractions exact: ".05" is
/// 5 * 1000 / 100, which is 50 with no rounding step.
fn frac_millis(frac: Option<&str>) -> f64 {
    let Some(digits) = frac else { return 0.0 };
    let numerator: f64 = digits.parse().unwrap_or(0.0);
    numerator * 1000.0 / 10f64.powi(digits.len() as i32)
}

// --- Phrase form -------------------------------------------------------------

fn word_form(atoms: &[Atom], start: usize, locale: &Locale) -> Option<DurationMatch> {
    let mut total = 0.0;
    let mut cursor = start;
    let mut best: Option<DurationMatch> = None;

    loop {
        let at = if best.is_none() {
            cursor
        } else {
            match continuation(atoms, cursor, locale) {
                Some(at) => at,
                None => break,
            }
        };

        let Some((quantity, unit_from)) = quantity_at(atoms, at, locale) else { break };
        let unit_at = lexer::skip_joiners(atoms, unit_from);
        let Some(unit) = unit_millis_at(atoms, unit_at, locale) else { break };

        total += quantity * unit;
        // A component that pushes the total past what the value type reports
        // rolls back to the chain matched so far, like any other bad tail.
        let Some(value) = DurationValue::checked_from_millis(total) else { break };
        cursor = unit_at + 1;
        best = Some(DurationMatch { value, consumed: cursor - start });
    }

    best
}

/// Where the next component may start, if the chain continues at all.
///
/// A connector word carries the chain past itself; otherwise the next atom
/// must open a quantity on its own. Articles do not reopen a chain, so "an
/// hour a minute" stays two durations.
fn continuation(atoms: &[Atom], cursor: usize, locale: &Locale) -> Option<usize> {
    let next = lexer::skip_joiners(atoms, cursor);
    let atom = atoms.get(next)?;

    if atom.kind == AtomKind::Word
        && locale.classify(&atom.text.to_lowercase()) == Some(WordClass::Connector)
    {
        return Some(lexer::skip_joiners(atoms, next + 1));
    }
    opens_quantity(atoms, next, locale).then_some(next)
}

fn opens_quantity(atoms: &[Atom], at: usize, locale: &Locale) -> bool {
    let Some(atom) = atoms.get(at) else { return false };
    match atom.kind {
        AtomKind::Digits => true,
        AtomKind::Word => {
            let word = atom.text.to_lowercase();
            matches!(locale.classify(&word), Some(WordClass::Fraction(_)))
                || number::terms_at(atoms, at, locale).is_some()
        }
        _ => false,
    }
}

/// The quantity at `at`, plus the position right after it.
fn quantity_at(atoms: &[Atom], at: usize, locale: &Locale) -> Option<(f64, usize)> {
    let atom = atoms.get(at)?;
    let word =
        if atom.kind == AtomKind::Word { atom.text.to_lowercase() } else { String::new() };

    // An article directly before a fraction word quantifies nothing by
    // itself: "a half hour" and "eine halbe Stunde" read as the fraction.
    if locale.is_article(&word) {
        let next = lexer::skip_joiners(atoms, at + 1);
        let fraction_follows = atoms.get(next).is_some_and(|a| {
            a.kind == AtomKind::Word
                && matches!(
                    locale.classify(&a.text.to_lowercase()),
                    Some(WordClass::Fraction(_))
                )
        });
        if fraction_follows {
            return quantity_at(atoms, next, locale);
        }
    }

    if let Some(m) = number::try_match(atoms, at, locale) {
        return Some((m.value, at + m.consumed));
    }

    if locale.is_article(&word) {
        return Some((1.0, at + 1));
    }

    // A bare fraction quantifies the unit directly: "half (of) (a) day".
    if let Some(WordClass::Fraction(fraction)) = locale.classify(&word) {
        let mut cursor = at + 1;
        loop {
            let next = lexer::skip_joiners(atoms, cursor);
            let filler = atoms.get(next).is_some_and(|a| {
                a.kind == AtomKind::Word
                    && (locale.is_article(&a.text.to_lowercase())
                        || locale.classify(&a.text.to_lowercase()) == Some(WordClass::Filler))
            });
            if !filler {
                break;
            }
            cursor = next + 1;
        }
        return Some((fraction, cursor));
    }

    None
}

fn unit_millis_at(atoms: &[Atom], at: usize, locale: &Locale) -> Option<f64> {
    let atom = atoms.get(at)?;
    if atom.kind != AtomKind::Word {
        return None;
    }
    locale.unit_millis(&atom.text.to_lowercase())
}
