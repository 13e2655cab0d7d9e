//! Quantity grammars.
//!
//! Each submodule recognizes one dimension of quantity from a position in the
//! atom list. Grammars are locale-blind: all vocabulary comes from the
//! `Locale` tables passed in.

pub(crate) mod duration;
pub(crate) mod number;
