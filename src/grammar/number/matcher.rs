//! The number accumulator.
//!
//! A written number is folded left to right into a running total plus an
//! open group: tens and ones add into the group, the hundred word multiplies
//! it, and a scale word multiplies the group into the total and opens a fresh
//! one. "three hundred sixty five thousand" walks through
//!
//! ```text
//! three    group 3
//! hundred  group 300
//! sixty    group 360
//! five     group 365
//! thousand total 365_000, group empty
//! ```
//!
//! Matching is greedy with rollback: the matcher keeps absorbing words while
//! they extend a well-formed number and remembers the last position that
//! was one. A trailing word that cannot follow ("three hundred and" with
//! nothing after the connector) rolls back to that position instead of
//! poisoning the whole match.

use crate::engine::lexer::{self, Atom, AtomKind};
use crate::grammar::number::classify::{self, Term};
use crate::locale::{Locale, WordClass};

/// A recognized number: its value and the atom count it covers.
#[derive(Debug, Clone, Copy)]
pub(crate) struct NumberMatch {
    pub value: f64,
    pub consumed: usize,
}

/// Read the longest well-formed number starting at `start`.
pub(crate) fn try_match(atoms: &[Atom], start: usize, locale: &Locale) -> Option<NumberMatch> {
    match atoms.get(start)?.kind {
        AtomKind::Word | AtomKind::Digits => {}
        _ => return None,
    }

    let (fraction, mut cursor) = fraction_prefix(atoms, start, locale).unwrap_or((1.0, start));
    let mut acc = Accumulator::default();
    let mut best = None;

    loop {
        let next = lexer::skip_joiners(atoms, cursor);
        let Some(terms) = classify::terms_at(atoms, next, locale) else { break };

        // A compound word applies all of its terms or none of them.
        let mut trial = acc;
        if !terms.iter().all(|&term| trial.apply(term)) {
            break;
        }
        acc = trial;
        cursor = next + 1;

        if !acc.pending_connector {
            best = Some(NumberMatch { value: fraction * acc.value(), consumed: cursor - start });
        }
    }

    best
}

/// A fraction word and any filler words after it ("half of a ..."), yielding
/// the multiplier and the position where the number proper must start.
fn fraction_prefix(atoms: &[Atom], start: usize, locale: &Locale) -> Option<(f64, usize)> {
    let atom = atoms.get(start)?;
    if atom.kind != AtomKind::Word {
        return None;
    }
    let Some(WordClass::Fraction(fraction)) = locale.classify(&atom.text.to_lowercase()) else {
        return None;
    };

    let mut cursor = start + 1;
    loop {
        let next = lexer::skip_joiners(atoms, cursor);
        let filler = atoms.get(next).is_some_and(|a| {
            a.kind == AtomKind::Word
                && locale.classify(&a.text.to_lowercase()) == Some(WordClass::Filler)
        });
        if !filler {
            break;
        }
        cursor = next + 1;
    }

    Some((fraction, cursor))
}

// --- Accumulator ---------------------------------------------------------

/// Fold state. `apply` either absorbs a term or reports that it cannot
/// follow what came before; callers apply to a scratch copy so refusal
/// leaves the real state untouched.
#[derive(Debug, Default, Clone, Copy)]
struct Accumulator {
    /// Closed groups, already multiplied by their scale words.
    total: f64,
    /// The group still being built.
    group: f64,
    /// Whether any word has landed in the open group.
    group_open: bool,
    /// The open group already saw its hundred word.
    group_has_hundred: bool,
    /// The last landed word was a hundred word.
    after_hundred: bool,
    /// The last landed word was a tens word.
    after_tens: bool,
    /// A connector is waiting for the value that justifies it.
    pending_connector: bool,
    /// At least one value term has been absorbed.
    any_value: bool,
    /// Nothing further may attach (bare zero).
    closed: bool,
}

impl Accumulator {
    fn value(&self) -> f64 {
        self.total + self.group
    }

    fn apply(&mut self, term: Term) -> bool {
        if self.closed {
            return false;
        }
        match term {
            Term::Digits(v) => {
                let fits = !self.group_open
                    || (self.after_tens && v > 0.0 && v < 10.0)
                    || (self.after_hundred && v > 0.0 && v < 100.0);
                if !fits {
                    return false;
                }
                self.land(v);
                true
            }
            // Zero never combines with anything else.
            Term::Ones(0) => {
                if self.any_value {
                    return false;
                }
                self.any_value = true;
                self.closed = true;
                true
            }
            Term::Ones(v) => {
                let fits =
                    !self.group_open || self.after_hundred || (self.after_tens && v < 10);
                if !fits {
                    return false;
                }
                self.land(v as f64);
                true
            }
            Term::Tens(v) => {
                if self.group_open && !self.after_hundred {
                    return false;
                }
                self.land(v as f64);
                self.after_tens = true;
                true
            }
            Term::Hundred => {
                if self.group_has_hundred || self.pending_connector {
                    return false;
                }
                let group = if self.group_open { self.group * 100.0 } else { 100.0 };
                if !group.is_finite() {
                    return false;
                }
                self.group = group;
                self.group_open = true;
                self.group_has_hundred = true;
                self.after_hundred = true;
                self.after_tens = false;
                self.any_value = true;
                true
            }
            Term::Scale(multiplier) => {
                if self.pending_connector {
                    return false;
                }
                // A scale with no open group means an implicit one: "a
                // billion" and "half a billion" both scale from 1.
                let group = if self.group_open { self.group } else { 1.0 };
                let total = self.total + group * multiplier;
                if !total.is_finite() {
                    return false;
                }
                self.total = total;
                self.group = 0.0;
                self.group_open = false;
                self.group_has_hundred = false;
                self.after_hundred = false;
                self.after_tens = false;
                self.any_value = true;
                true
            }
            Term::Connector => {
                if !self.after_hundred || self.pending_connector {
                    return false;
                }
                self.pending_connector = true;
                true
            }
        }
    }

    /// Add a plain value into the open group.
    fn land(&mut self, v: f64) {
        self.group += v;
        self.group_open = true;
        self.after_hundred = false;
        self.after_tens = false;
        self.pending_connector = false;
        self.any_value = true;
    }
}
