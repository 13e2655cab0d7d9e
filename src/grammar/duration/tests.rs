use crate::engine::lexer;
use crate::engine::trigger::TriggerInfo;
use crate::grammar::duration;
use crate::locale;

fn match_at_start(input: &str, locale_id: &str) -> Option<(i64, usize)> {
    let locale = locale::lookup(locale_id).unwrap();
    let atoms = lexer::lex(input);
    let trigger = TriggerInfo::scan(input);
    duration::try_match(input, &atoms, 0, locale, trigger)
        .map(|m| (m.value.as_millis(), m.consumed))
}

#[test]
fn clock_forms_match() {
    // Array of (expected_millis, input_string); every case must consume the
    // entire input.
    let cases: Vec<(i64, &str)> = vec![
        (5_430_000, "1:30:30"),
        (5_430_000, "1:30:30.0"),
        (5_430_500, "1:30:30.5"),
        (5_430_050, "1:30:30.05"),
        (5_430_005, "1:30:30.005"),
        (86_430_000, "1:0:0:30"),
        (86_430_000, "1:0:0:30.0"),
    ];

    for (expected, input) in cases {
        let atom_count = lexer::lex(input).len();
        let (millis, consumed) = match_at_start(input, "en-US")
            .unwrap_or_else(|| panic!("no duration recognized in '{}'", input));

        assert_eq!(millis, expected, "wrong value for '{}'", input);
        assert_eq!(consumed, atom_count, "'{}' only partially consumed", input);
    }
}

#[test]
fn english_unit_phrases_match() {
    let cases: Vec<(i64, &str)> = vec![
        (1_000, "a second"),
        (250, "quarter second"),
        (500, "half second"),
        (500, "half a second"),
        (500, "half of a second"),
        (60_000, "a minute"),
        (15_000, "quarter minute"),
        (30_000, "half minute"),
        (30_000, "half a minute"),
        (30_000, "half of a minute"),
        (3_600_000, "an hour"),
        (900_000, "quarter hour"),
        (1_800_000, "half hour"),
        (1_800_000, "half an hour"),
        (1_800_000, "half of an hour"),
        (1_800_000, "a half hour"),
        (86_400_000, "a day"),
        (21_600_000, "quarter day"),
        (43_200_000, "half day"),
        (43_200_000, "half a day"),
        (43_200_000, "half of a day"),
        (5_400_000, "one hour and thirty minutes"),
        (5_400_000, "1hr30min"),
        (5_400_000, "1 hr 30 mins"),
        (5_400_000, "an hour 30 minutes"),
        (91_440_000, "25 hours and 24 minutes"),
        (7_200_000, "two hours"),
        (172_800_000, "2 days"),
        (300_000, "5min"),
        (45_000, "45 sec"),
    ];

    for (expected, input) in cases {
        let atom_count = lexer::lex(input).len();
        let (millis, consumed) = match_at_start(input, "en-US")
            .unwrap_or_else(|| panic!("no duration recognized in '{}'", input));

        assert_eq!(millis, expected, "wrong value for '{}'", input);
        assert_eq!(consumed, atom_count, "'{}' only partially consumed", input);
    }
}

#[test]
fn german_unit_phrases_match() {
    let cases: Vec<(i64, &str)> = vec![
        (3_600_000, "eine stunde"),
        (1_800_000, "eine halbe stunde"),
        (5_400_000, "eine stunde und dreißig minuten"),
        (86_400_000, "ein tag"),
        (90_000, "90 sekunden"),
    ];

    for (expected, input) in cases {
        let atom_count = lexer::lex(input).len();
        let (millis, consumed) = match_at_start(input, "de-DE")
            .unwrap_or_else(|| panic!("no duration recognized in '{}'", input));

        assert_eq!(millis, expected, "wrong value for '{}'", input);
        assert_eq!(consumed, atom_count, "'{}' only partially consumed", input);
    }
}

#[test]
fn malformed_clock_forms_do_not_match() {
    for input in ["1:30", "1:2:3:4:5", "::", "30:30"] {
        assert_eq!(match_at_start(input, "en-US"), None, "'{}' should not match", input);
    }
}

#[test]
fn chain_rolls_back_to_the_last_complete_component() {
    let (millis, consumed) = match_at_start("an hour and thirty cats", "en-US").unwrap();
    assert_eq!(millis, 3_600_000);
    assert_eq!(consumed, 3);
}

#[test]
fn totals_past_the_millisecond_range_do_not_match() {
    // Twenty digits of hours round past the largest reportable total, and so
    // does a fourteen-digit day field.
    assert_eq!(match_at_start("99999999999999999999 hours", "en-US"), None);
    assert_eq!(match_at_start("99999999999999:0:0:0", "en-US"), None);

    // In a chain, the component that overflows rolls back like any bad tail.
    let (millis, consumed) =
        match_at_start("an hour and 99999999999999999999 hours", "en-US").unwrap();
    assert_eq!(millis, 3_600_000);
    assert_eq!(consumed, 3);
}

#[test]
fn bare_quantities_are_not_durations() {
    for input in ["five", "5", "half a billion", "half a cat"] {
        assert_eq!(match_at_start(input, "en-US"), None, "'{}' should not match", input);
    }
}
