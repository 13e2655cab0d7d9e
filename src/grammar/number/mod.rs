//! Written-number grammar.
//!
//! Reads phrases like "three hundred and sixty five", "twenty-two", "half a
//! billion", or plain digit runs, and folds them into a single value. The
//! submodules split the work:
//!
//! - `classify.rs`: turns one atom into grammar terms.
//! - `morphemes.rs`: decomposes agglutinated compounds ("dreiundfünfzig").
//! - `matcher.rs`: the accumulator that folds terms into a value.

mod classify;
mod matcher;
mod morphemes;
#[cfg(test)]
mod tests;

pub(crate) use classify::terms_at;
pub(crate) use matcher::try_match;
