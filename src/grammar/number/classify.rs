//! Atom classification for the number grammar.

use crate::engine::lexer::{Atom, AtomKind};
use crate::grammar::number::morphemes;
use crate::locale::{Locale, WordClass};

/// One step of a written number, as the accumulator consumes it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub(crate) enum Term {
    /// A literal digit run ("22").
    Digits(f64),
    /// 0..=19.
    Ones(i64),
    /// 20, 30, .. 90.
    Tens(i64),
    /// The hundred word, multiplying the open group.
    Hundred,
    /// A scale word closing the open group (thousand, million, ..).
    Scale(f64),
    /// The additive connector inside a compound or after a hundred.
    Connector,
}

impl Term {
    /// The number-grammar reading of a word class, if it has one.
    ///
    /// Fractions and fillers return `None`: they prefix or pad a quantity but
    /// never take part in the fold itself.
    pub(crate) fn from_class(class: WordClass) -> Option<Term> {
        match class {
            WordClass::Ones(v) => Some(Term::Ones(v)),
            WordClass::Tens(v) => Some(Term::Tens(v)),
            WordClass::Hundred => Some(Term::Hundred),
            WordClass::Scale(m) => Some(Term::Scale(m)),
            WordClass::Connector => Some(Term::Connector),
            WordClass::Fraction(_) | WordClass::Filler => None,
        }
    }
}

/// The terms contributed by the atom at `at`, or `None` if it contributes
/// nothing to a number.
///
/// A digit run or a plain vocabulary word yields one term. A compound word
/// yields the whole decomposed sequence, so the caller applies it all or not
/// at all.
pub(crate) fn terms_at(atoms: &[Atom], at: usize, locale: &Locale) -> Option<Vec<Term>> {
    let atom = atoms.get(at)?;
    match atom.kind {
        AtomKind::Digits => {
            // runs long enough to overflow f64 parse as infinity; those stay
            // literal rather than rewrite as "inf"
            let value: f64 = atom.text.parse().ok()?;
            value.is_finite().then(|| vec![Term::Digits(value)])
        }
        AtomKind::Word => {
            let word = atom.text.to_lowercase();
            if let Some(class) = locale.classify(&word) {
                return Some(vec![Term::from_class(class)?]);
            }
            morphemes::decompose(&word, locale.compounds()?)
        }
        _ => None,
    }
}
