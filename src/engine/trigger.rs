//! Trigger scanning (input pre-classification).
//!
//! One cheap pass over the raw input produces coarse signals that let the
//! scanner and the grammars skip work that cannot possibly pay off:
//!
//! - An input without a colon never carries a clock-style duration, so the
//!   duration grammar skips its regex outright.
//! - An input with neither letters nor digits cannot contain a quantity at
//!   all, so the scanner emits one literal token without consulting any
//!   grammar.
//!
//! This is a heuristic scan. False positives are fine because the grammars
//! still have to match in full; false negatives are not, so every bucket is
//! derived from a property the gated code path genuinely requires.

bitflags::bitflags! {
    /// Coarse buckets for fast input classification.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct BucketMask: u8 {
        const HAS_DIGITS = 1 << 0;
        const HAS_COLON  = 1 << 1;
        const HAS_ALPHA  = 1 << 2;
    }
}

/// Input characteristics detected from the raw input.
#[derive(Debug, Clone, Copy)]
pub struct TriggerInfo {
    pub buckets: BucketMask,
}

impl TriggerInfo {
    /// Scan `input` for coarse buckets.
    pub fn scan(input: &str) -> Self {
        let mut buckets = BucketMask::empty();

        if input.bytes().any(|b| b.is_ascii_digit()) {
            buckets |= BucketMask::HAS_DIGITS;
        }
        if input.contains(':') {
            buckets |= BucketMask::HAS_COLON;
        }
        if input.chars().any(char::is_alphabetic) {
            buckets |= BucketMask::HAS_ALPHA;
        }

        TriggerInfo { buckets }
    }

    /// True when no grammar can match anywhere in the input.
    pub fn inert(&self) -> bool {
        !self.buckets.intersects(BucketMask::HAS_DIGITS | BucketMask::HAS_ALPHA)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_reflect_input_contents() {
        let info = TriggerInfo::scan("1:30:30");
        assert!(info.buckets.contains(BucketMask::HAS_DIGITS | BucketMask::HAS_COLON));
        assert!(!info.buckets.contains(BucketMask::HAS_ALPHA));

        let info = TriggerInfo::scan("fünf Hunde");
        assert_eq!(info.buckets, BucketMask::HAS_ALPHA);
    }

    #[test]
    fn symbol_soup_is_inert() {
        assert!(TriggerInfo::scan("?!, ...").inert());
        assert!(TriggerInfo::scan("").inert());
        assert!(!TriggerInfo::scan("ten").inert());
        assert!(!TriggerInfo::scan("10").inert());
    }
}
