use crate::engine::lexer;
use crate::grammar::number;
use crate::locale;

fn match_at_start(input: &str, locale_id: &str) -> Option<(f64, usize)> {
    let locale = locale::lookup(locale_id).unwrap();
    let atoms = lexer::lex(input);
    number::try_match(&atoms, 0, locale).map(|m| (m.value, m.consumed))
}

#[test]
fn english_numbers_match_whole_phrases() {
    // Array of (expected_value, input_string); every case must consume the
    // entire input.
    let cases: Vec<(f64, &str)> = vec![
        (0.0, "zero"),
        (0.0, "0"),
        (1.0, "one"),
        (5.0, "five"),
        (17.0, "seventeen"),
        (22.0, "twenty two"),
        (22.0, "twenty-two"),
        (22.0, "twenty 2"),
        (22.0, "TWENTY Two"),
        (33.0, "33"),
        (40.0, "fourty"),
        (100.0, "hundred"),
        (100.0, "one hundred"),
        (112.0, "one hundred twelve"),
        (365.0, "three hundred and sixty five"),
        (1500.0, "one thousand five hundred"),
        (1900.0, "nineteen hundred"),
        (1e6, "million"),
        (500000.0, "half a mil"),
        (500000.0, "half-a-mil"),
        (5e8, "half a billion"),
        (5e8, "half-a-bill"),
        (3e9, "three billions"),
        (1e12, "one trillion"),
        (
            1251365.0,
            "one million two hundred fifty one thousand three hundred and sixty five",
        ),
    ];

    for (expected, input) in cases {
        let atom_count = lexer::lex(input).len();
        let (value, consumed) = match_at_start(input, "en-US")
            .unwrap_or_else(|| panic!("no number recognized in '{}'", input));

        assert!(
            (value - expected).abs() < 1e-9,
            "expected {} for '{}', got {}",
            expected,
            input,
            value
        );
        assert_eq!(consumed, atom_count, "'{}' only partially consumed", input);
    }
}

#[test]
fn german_numbers_match_whole_phrases() {
    let cases: Vec<(f64, &str)> = vec![
        (0.0, "null"),
        (1.0, "eins"),
        (21.0, "einundzwanzig"),
        (30.0, "dreißig"),
        (30.0, "dreissig"),
        (53.0, "dreiundfünfzig"),
        (101.0, "hunderteins"),
        (153.0, "hundertdreiundfünfzig"),
        (153000.0, "hundertdreiundfünfzigtausend"),
        (370.0, "drei hundert siebzig"),
        (653000.0, "sechs hundertdreiundfünfzigtausend"),
        (1e6, "eine million"),
        (1653001.0, "eine million sechs hundertdreiundfünfzigtausend eins"),
        (243687.0, "zweihundertdreiundvierzigtausendsechshundertsiebenundachtzig"),
        (2e9, "zwei milliarden"),
        (1e12, "eine billion"),
    ];

    for (expected, input) in cases {
        let atom_count = lexer::lex(input).len();
        let (value, consumed) = match_at_start(input, "de-DE")
            .unwrap_or_else(|| panic!("no number recognized in '{}'", input));

        assert!(
            (value - expected).abs() < 1e-9,
            "expected {} for '{}', got {}",
            expected,
            input,
            value
        );
        assert_eq!(consumed, atom_count, "'{}' only partially consumed", input);
    }
}

#[test]
fn trailing_connector_rolls_back() {
    let (value, consumed) = match_at_start("three hundred and", "en-US").unwrap();
    assert_eq!(value, 300.0);
    assert_eq!(consumed, 3);
}

#[test]
fn adjacent_plain_values_stay_separate() {
    let (value, consumed) = match_at_start("five five", "en-US").unwrap();
    assert_eq!(value, 5.0);
    assert_eq!(consumed, 1);

    let (value, consumed) = match_at_start("zero five", "en-US").unwrap();
    assert_eq!(value, 0.0);
    assert_eq!(consumed, 1);
}

#[test]
fn non_numbers_do_not_match() {
    for input in ["cat", "and", "half a cat", "hunde", "", "  ", "?"] {
        assert_eq!(match_at_start(input, "en-US"), None, "'{}' should not match", input);
    }
    assert_eq!(match_at_start("zweihundertkatzen", "de-DE"), None);
}

#[test]
fn values_past_the_float_range_stay_unmatched() {
    // 340 digits overflow f64 entirely; no number may come out of them.
    let digits = "9".repeat(340);
    assert_eq!(match_at_start(&digits, "en-US"), None);

    // 308 digits still fit, but scaling them by a hundred would not. The
    // match rolls back to the plain digit run.
    let phrase = format!("{} hundred", "9".repeat(308));
    let (value, consumed) = match_at_start(&phrase, "en-US").unwrap();
    assert!(value.is_finite());
    assert_eq!(consumed, 1);
}
