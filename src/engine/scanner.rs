//! The scanner: drives grammars over the atom list.
//!
//! ```text
//! atoms:   [fifty] [ ] [cats] [ ] [flew] ...
//!             │
//!             v
//!      for each position, in caller order:
//!            duration grammar?  ──hit──> value token, jump past it
//!            number grammar?    ──hit──> value token, jump past it
//!            no grammar         ──────>  pool into the pending literal
//! ```
//!
//! Each grammar returns the longest phrase it can read from the current
//! position, so matching is greedy and never reconsiders a committed token.
//! Positions no grammar wants pool into literal tokens, one per gap, so the
//! output tokens tile the input exactly.

use std::time::Instant;

use log::{debug, trace};

use crate::engine::RunMetrics;
use crate::engine::lexer::{self, Atom};
use crate::engine::trigger::TriggerInfo;
use crate::grammar::{duration, number};
use crate::locale::Locale;
use crate::{Span, Token, TokenKind};

/// Grammars a scan may apply, in the order they get first refusal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum Dimension {
    Duration,
    Number,
}

/// Scan `input` and produce the full token sequence plus timings.
pub(crate) fn scan(
    input: &str,
    locale: &Locale,
    dimensions: &[Dimension],
) -> (Vec<Token>, RunMetrics) {
    let started = Instant::now();

    let atoms = lexer::lex(input);
    let lex = started.elapsed();

    let trigger = TriggerInfo::scan(input);

    let mut tokens = Vec::new();
    let mut literal_from: Option<usize> = None;
    let mut i = 0;

    while i < atoms.len() {
        let hit = if trigger.inert() {
            None
        } else {
            match_at(input, &atoms, i, locale, trigger, dimensions)
        };

        match hit {
            Some((kind, consumed)) => {
                flush_literal(input, &atoms, literal_from.take(), i, &mut tokens);
                let span = Span::new(atoms[i].span.start, atoms[i + consumed - 1].span.end);
                trace!("{:?} at {}..{}", kind, span.start, span.end);
                tokens.push(token_at(input, kind, span));
                i += consumed;
            }
            None => {
                literal_from.get_or_insert(i);
                i += 1;
            }
        }
    }
    flush_literal(input, &atoms, literal_from.take(), atoms.len(), &mut tokens);

    let total = started.elapsed();
    let metrics = RunMetrics { total, lex, scan: total - lex };

    debug!("scanned {} atoms into {} tokens", atoms.len(), tokens.len());

    (tokens, metrics)
}

/// Offer the position to each grammar in order; first hit wins.
fn match_at(
    input: &str,
    atoms: &[Atom],
    at: usize,
    locale: &Locale,
    trigger: TriggerInfo,
    dimensions: &[Dimension],
) -> Option<(TokenKind, usize)> {
    dimensions.iter().find_map(|dimension| match dimension {
        Dimension::Duration => duration::try_match(input, atoms, at, locale, trigger)
            .map(|m| (TokenKind::Duration(m.value), m.consumed)),
        Dimension::Number => number::try_match(atoms, at, locale)
            .map(|m| (TokenKind::Number(m.value), m.consumed)),
    })
}

/// Close the pending literal, if any, covering atoms `[from, until)`.
fn flush_literal(
    input: &str,
    atoms: &[Atom],
    from: Option<usize>,
    until: usize,
    tokens: &mut Vec<Token>,
) {
    if let Some(from) = from {
        let span = Span::new(atoms[from].span.start, atoms[until - 1].span.end);
        tokens.push(token_at(input, TokenKind::Literal, span));
    }
}

fn token_at(input: &str, kind: TokenKind, span: Span) -> Token {
    Token { kind, body: input[span.start..span.end].to_string(), span }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale;

    fn scan_numbers(input: &str) -> Vec<Token> {
        scan(input, locale::default_locale(), &[Dimension::Number]).0
    }

    #[test]
    fn tokens_tile_the_input() {
        let input = "fifty cats flew twenty 2 miles";
        let tokens = scan_numbers(input);

        let rebuilt: String = tokens.iter().map(|t| t.body.as_str()).collect();
        assert_eq!(rebuilt, input);

        let mut expected_start = 0;
        for token in &tokens {
            assert_eq!(token.span.start, expected_start);
            expected_start = token.span.end;
        }
        assert_eq!(expected_start, input.len());
    }

    #[test]
    fn value_spans_exclude_surrounding_whitespace() {
        let tokens = scan_numbers("fifty cats");
        assert_eq!(tokens[0].body, "fifty");
        assert_eq!(tokens[0].number(), Some(50.0));
        assert_eq!(tokens[1].body, " cats");
        assert!(tokens[1].is_literal());
    }

    #[test]
    fn plain_prose_is_one_literal() {
        let tokens = scan_numbers("no quantities here at all");
        assert_eq!(tokens.len(), 1);
        assert!(tokens[0].is_literal());
    }

    #[test]
    fn dimension_order_gives_first_refusal() {
        let tokens = scan(
            "wait 2 hours",
            locale::default_locale(),
            &[Dimension::Duration, Dimension::Number],
        )
        .0;
        assert_eq!(tokens[1].duration().map(|d| d.as_millis()), Some(7_200_000));
    }

    #[test]
    fn empty_input_yields_no_tokens() {
        assert!(scan_numbers("").is_empty());
    }
}
