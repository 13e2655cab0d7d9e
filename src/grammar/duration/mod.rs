//! Duration grammar.
//!
//! Reads clock-style forms ("1:30:30", "1:0:0:30.5") and unit phrases ("an
//! hour and thirty minutes", "1hr30min", "half a day") into a millisecond
//! total.

mod matcher;
#[cfg(test)]
mod tests;

pub(crate) use matcher::try_match;
