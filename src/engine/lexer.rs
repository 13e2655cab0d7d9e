//! Atom lexer.
//!
//! Splits the input into a flat list of typed atoms. The lexer is
//! deliberately dumb: it knows nothing about numbers, units, or locales, and
//! it never drops a byte. Adjacent characters of the same kind merge into one
//! atom for words, digit runs, and whitespace; separators and punctuation stay
//! single-character so the grammars can reason about them individually.
//!
//! Spans are byte offsets into the original input, and the atoms tile it:
//! concatenating `atom.text` in order reproduces the input exactly.

use crate::Span;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum AtomKind {
    /// A run of alphabetic characters, any script.
    Word,
    /// A run of ASCII digits.
    Digits,
    /// A run of whitespace.
    Whitespace,
    /// A single `-`, which may join the words of one quantity.
    Separator,
    /// Any other single character.
    Punctuation,
}

#[derive(Debug, Clone, Copy)]
pub(crate) struct Atom<'a> {
    pub kind: AtomKind,
    pub text: &'a str,
    pub span: Span,
}

/// Split `input` into atoms.
pub(crate) fn lex(input: &str) -> Vec<Atom<'_>> {
    let mut atoms = Vec::new();
    let mut chars = input.char_indices().peekable();

    while let Some((start, ch)) = chars.next() {
        let kind = kind_of(ch);
        let mut end = start + ch.len_utf8();

        if matches!(kind, AtomKind::Word | AtomKind::Digits | AtomKind::Whitespace) {
            while let Some(&(idx, next)) = chars.peek() {
                if kind_of(next) != kind {
                    break;
                }
                end = idx + next.len_utf8();
                chars.next();
            }
        }

        atoms.push(Atom { kind, text: &input[start..end], span: Span::new(start, end) });
    }

    atoms
}

fn kind_of(ch: char) -> AtomKind {
    if ch.is_alphabetic() {
        AtomKind::Word
    } else if ch.is_ascii_digit() {
        AtomKind::Digits
    } else if ch.is_whitespace() {
        AtomKind::Whitespace
    } else if ch == '-' {
        AtomKind::Separator
    } else {
        AtomKind::Punctuation
    }
}

/// First index at or after `from` that is neither whitespace nor a separator.
///
/// Grammars use this to step between the words of one candidate quantity.
pub(crate) fn skip_joiners(atoms: &[Atom], mut from: usize) -> usize {
    while from < atoms.len()
        && matches!(atoms[from].kind, AtomKind::Whitespace | AtomKind::Separator)
    {
        from += 1;
    }
    from
}
