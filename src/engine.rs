//! Recognition engine.
//!
//! This module is the entry point for turning raw text into a token sequence.
//! It is split into focused submodules under `src/engine/` while keeping
//! internal paths stable (for example `crate::engine::lexer::Atom` and
//! `crate::engine::RunMetrics`).
//!
//! ## How the parts work together
//!
//! At a high level, a run over an input string is a pipeline:
//!
//! ```text
//! input ── lex ───────────────── Vec<Atom> ──────┐
//!         (lexer.rs)                             │
//!                                                │
//! input ── TriggerInfo::scan ─── coarse buckets ─┤
//!         (trigger.rs)                           │
//!                                                v
//!                                    scan (scanner.rs)
//!                                      - walk atoms left to right
//!                                      - offer each grammar the cursor,
//!                                        first hit wins
//!                                      - gaps pool into literal tokens
//!                                                │
//!                                                v
//!                                    Vec<Token> + RunMetrics
//! ```
//!
//! The grammars themselves live under `src/grammar/**`; the engine knows them
//! only through the [`scanner::Dimension`] list a caller passes in. Every
//! byte of the input lands in exactly one token, so joining the token bodies
//! reproduces the input.
//!
//! ## Responsibilities by module
//!
//! - `lexer.rs`: splits the input into typed atoms without dropping a byte.
//! - `trigger.rs`: one cheap pass over the raw input to compute coarse
//!   buckets, so grammars can skip work that cannot possibly apply.
//! - `scanner.rs`: drives the grammars over the atom list and assembles the
//!   final token sequence.
//! - `metrics.rs`: timing data collected on every run.
//!
//! ## Adding a new dimension
//!
//! - Add a grammar module under `src/grammar/` with a `try_match` entry
//!   point, add a [`scanner::Dimension`] variant, and route it in
//!   `scanner::match_at`.
//! - If the new grammar needs a new coarse trigger, add a `BucketMask` bit
//!   and teach `TriggerInfo::scan` to set it.
//!
//! ## Debugging
//!
//! The scanner emits `log` records: one `debug!` summary per run and a
//! `trace!` line per recognized token. Point any `log` backend at them.

#[path = "engine/lexer.rs"]
pub(crate) mod lexer;
#[path = "engine/metrics.rs"]
mod metrics;
#[path = "engine/scanner.rs"]
pub(crate) mod scanner;
#[path = "engine/trigger.rs"]
pub(crate) mod trigger;

pub use metrics::RunMetrics;
