//! Public API: translators and the token sequences they produce.

use std::time::Duration;

use log::debug;

use crate::engine::RunMetrics;
use crate::engine::scanner::{self, Dimension};
use crate::locale::{self, Locale, LocaleError};
use crate::{DurationValue, Token, TokenKind};

const NUMBERS_ONLY: &[Dimension] = &[Dimension::Number];
const DURATIONS_FIRST: &[Dimension] = &[Dimension::Duration, Dimension::Number];

/// Result of one translation run.
///
/// `tokens` tile `text`: every byte of the input belongs to exactly one
/// token, in order, so the sequence is lossless.
#[derive(Debug, Clone)]
pub struct TokenSequence {
    /// The translated input text.
    pub text: String,
    /// Literal and value tokens, in input order.
    pub tokens: Vec<Token>,
    /// Timing measurements for the run.
    pub metrics: RunMetrics,
}

impl TokenSequence {
    /// Rewrite the input with every recognized quantity as digits.
    ///
    /// Numbers print as plain decimal values, durations as their total
    /// millisecond count, and literals verbatim.
    pub fn digify(&self) -> String {
        let mut out = String::with_capacity(self.text.len());
        for token in &self.tokens {
            match token.kind {
                TokenKind::Literal => out.push_str(&token.body),
                TokenKind::Number(value) => out.push_str(&format_number(value)),
                TokenKind::Duration(value) => out.push_str(&value.as_millis().to_string()),
            }
        }
        out
    }

    /// Recognized numbers, in input order.
    pub fn numbers(&self) -> impl Iterator<Item = f64> + '_ {
        self.tokens.iter().filter_map(Token::number)
    }

    /// Recognized durations, in input order.
    pub fn durations(&self) -> impl Iterator<Item = DurationValue> + '_ {
        self.tokens.iter().filter_map(Token::duration)
    }

    /// Total elapsed time of the run.
    pub fn elapsed(&self) -> Duration {
        self.metrics.total
    }
}

fn format_number(v: f64) -> String {
    if v.fract() == 0.0 {
        // whole number: `{:.0}` prints the exact integral expansion, where a
        // plain `{}` would shorten large values to round-trip digits
        format!("{:.0}", v)
    } else {
        format!("{}", v)
    }
}

/// Recognizes written numbers and digit runs, nothing else.
///
/// A translator is a lightweight handle holding only the session locale, so
/// it is `Copy`; keep one around or build one per call, whichever reads
/// better.
#[derive(Debug, Clone, Copy)]
pub struct NumberTranslator {
    locale: &'static Locale,
}

impl NumberTranslator {
    /// A translator for the default locale.
    pub fn new() -> Self {
        NumberTranslator { locale: locale::default_locale() }
    }

    /// A translator for `locale_id`.
    pub fn with_locale(locale_id: &str) -> Result<Self, LocaleError> {
        Ok(NumberTranslator { locale: locale::lookup(locale_id)? })
    }

    /// The session locale.
    pub fn locale(&self) -> &'static str {
        self.locale.id
    }

    /// Switch the session locale. An unknown id fails without touching the
    /// session.
    pub fn set_locale(&mut self, locale_id: &str) -> Result<(), LocaleError> {
        self.locale = locale::lookup(locale_id)?;
        debug!("number translator switched to {}", self.locale.id);
        Ok(())
    }

    /// Translate `text` under the session locale.
    pub fn translate(&self, text: &str) -> TokenSequence {
        run(text, self.locale, NUMBERS_ONLY)
    }

    /// Translate `text` under `locale_id` for this call only.
    pub fn translate_in(&self, text: &str, locale_id: &str) -> Result<TokenSequence, LocaleError> {
        Ok(run(text, locale::lookup(locale_id)?, NUMBERS_ONLY))
    }
}

impl Default for NumberTranslator {
    fn default() -> Self {
        Self::new()
    }
}

/// Recognizes durations first and plain numbers second.
///
/// Duration phrases win at every position; quantities that do not carry a
/// unit still come out as numbers, so "five cats" translates the same way it
/// would under a [`NumberTranslator`].
#[derive(Debug, Clone, Copy)]
pub struct DurationTranslator {
    locale: &'static Locale,
}

impl DurationTranslator {
    /// A translator for the default locale.
    pub fn new() -> Self {
        DurationTranslator { locale: locale::default_locale() }
    }

    /// A translator for `locale_id`.
    pub fn with_locale(locale_id: &str) -> Result<Self, LocaleError> {
        Ok(DurationTranslator { locale: locale::lookup(locale_id)? })
    }

    /// The session locale.
    pub fn locale(&self) -> &'static str {
        self.locale.id
    }

    /// Switch the session locale. An unknown id fails without touching the
    /// session.
    pub fn set_locale(&mut self, locale_id: &str) -> Result<(), LocaleError> {
        self.locale = locale::lookup(locale_id)?;
        debug!("duration translator switched to {}", self.locale.id);
        Ok(())
    }

    /// Translate `text` under the session locale.
    pub fn translate(&self, text: &str) -> TokenSequence {
        run(text, self.locale, DURATIONS_FIRST)
    }

    /// Translate `text` under `locale_id` for this call only.
    pub fn translate_in(&self, text: &str, locale_id: &str) -> Result<TokenSequence, LocaleError> {
        Ok(run(text, locale::lookup(locale_id)?, DURATIONS_FIRST))
    }
}

impl Default for DurationTranslator {
    fn default() -> Self {
        Self::new()
    }
}

fn run(text: &str, locale: &Locale, dimensions: &[Dimension]) -> TokenSequence {
    let (tokens, metrics) = scanner::scan(text, locale, dimensions);
    TokenSequence { text: text.to_string(), tokens, metrics }
}

/// Translate `text` with a default-locale [`NumberTranslator`].
///
/// # Example
/// ```
/// use digify::translate_numbers;
///
/// let run = translate_numbers("fifty cats flew twenty 2 miles");
/// assert_eq!(run.digify(), "50 cats flew 22 miles");
/// ```
pub fn translate_numbers(text: &str) -> TokenSequence {
    NumberTranslator::new().translate(text)
}

/// Translate `text` with a default-locale [`DurationTranslator`].
///
/// # Example
/// ```
/// use digify::translate_durations;
///
/// let run = translate_durations("be there in 1hr30min");
/// let eta = run.durations().next().unwrap();
/// assert_eq!(eta.as_millis(), 5_400_000);
/// ```
pub fn translate_durations(text: &str) -> TokenSequence {
    DurationTranslator::new().translate(text)
}
