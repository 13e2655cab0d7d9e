//! Compound-word decomposition.
//!
//! Some locales write numbers below their scale words as one agglutinated
//! word: "dreiundfünfzig", "hundertdreiundfünfzigtausend". This module splits
//! such a word into grammar terms by repeatedly taking the longest known
//! morpheme off the front.
//!
//! Decomposition is all or nothing. If any residue remains the word is not a
//! number ("hunde" must not half-match against "hundert"), and a word that
//! mixes number morphemes with anything else is rejected the same way.

use crate::grammar::number::classify::Term;
use crate::locale::CompoundTable;

/// Split `word` into terms, or `None` if it is not entirely number morphemes.
pub(crate) fn decompose(word: &str, table: &CompoundTable) -> Option<Vec<Term>> {
    let mut terms = Vec::new();
    let mut rest = word;

    while !rest.is_empty() {
        let (morpheme, class) = table.longest_prefix(rest)?;
        terms.push(Term::from_class(class)?);
        rest = &rest[morpheme.len()..];
    }

    if terms.is_empty() {
        return None;
    }
    normalize_inversion(&mut terms);
    Some(terms)
}

/// Rewrite inverted ones-connector-tens runs into tens-then-ones order.
///
/// German compounds put the ones first ("einundzwanzig" is one-and-twenty);
/// the accumulator wants them the other way around.
fn normalize_inversion(terms: &mut Vec<Term>) {
    let mut i = 0;
    while i + 2 < terms.len() {
        if let (Term::Ones(ones), Term::Connector, Term::Tens(tens)) =
            (terms[i], terms[i + 1], terms[i + 2])
        {
            terms[i] = Term::Tens(tens);
            terms[i + 1] = Term::Ones(ones);
            terms.remove(i + 2);
        }
        i += 1;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::locale::WordClass;

    fn table() -> CompoundTable {
        CompoundTable::new(&[
            ("ein", WordClass::Ones(1)),
            ("drei", WordClass::Ones(3)),
            ("acht", WordClass::Ones(8)),
            ("achtzehn", WordClass::Ones(18)),
            ("zwanzig", WordClass::Tens(20)),
            ("fünfzig", WordClass::Tens(50)),
            ("hundert", WordClass::Hundred),
            ("tausend", WordClass::Scale(1e3)),
            ("und", WordClass::Connector),
        ])
    }

    #[test]
    fn inverted_compounds_normalize() {
        let terms = decompose("einundzwanzig", &table()).unwrap();
        assert_eq!(terms, vec![Term::Tens(20), Term::Ones(1)]);
    }

    #[test]
    fn long_compounds_decompose_in_order() {
        let terms = decompose("hundertdreiundfünfzigtausend", &table()).unwrap();
        assert_eq!(
            terms,
            vec![Term::Hundred, Term::Tens(50), Term::Ones(3), Term::Scale(1e3)]
        );
    }

    #[test]
    fn longest_morpheme_wins() {
        let terms = decompose("achtzehn", &table()).unwrap();
        assert_eq!(terms, vec![Term::Ones(18)]);
    }

    #[test]
    fn residue_rejects_the_whole_word() {
        assert_eq!(decompose("hunde", &table()), None);
        assert_eq!(decompose("dreihundertkatzen", &table()), None);
        assert_eq!(decompose("", &table()), None);
    }
}
