//! Swedish spoken text for drill questions.
//!
//! These strings are what the speech engine reads aloud. They mirror the
//! atom decompositions in [`crate::atoms`]: every atom corresponds to one
//! spoken word or word part below.

use crate::atoms::clock_hour;

const UNITS: [&str; 20] = [
    "noll", "ett", "två", "tre", "fyra", "fem", "sex", "sju", "åtta", "nio", "tio", "elva", "tolv",
    "tretton", "fjorton", "femton", "sexton", "sjutton", "arton", "nitton",
];

const TENS: [&str; 10] = [
    "", "", "tjugo", "trettio", "fyrtio", "femtio", "sextio", "sjuttio", "åttio", "nittio",
];

/// Swedish words for `number`, written as one compound word
/// (`123` → "etthundratjugotre"). Numbers above 1000 fall back to digits.
pub fn cardinal_words(number: u32) -> String {
    match number {
        0..=19 => UNITS[number as usize].to_string(),
        20..=99 => {
            let ones = number % 10;
            let tens = TENS[(number / 10) as usize];
            if ones == 0 {
                tens.to_string()
            } else {
                format!("{tens}{}", UNITS[ones as usize])
            }
        }
        100..=999 => {
            let rest = number % 100;
            let hundreds = format!("{}hundra", UNITS[(number / 100) as usize]);
            if rest == 0 {
                hundreds
            } else {
                format!("{hundreds}{}", cardinal_words(rest))
            }
        }
        1000 => "ettusen".to_string(),
        _ => number.to_string(),
    }
}

/// Written ordinal suffix: `1:a`, `2:a`, `3:e`, `11:e`, `21:a`.
pub fn ordinal_suffix(number: u32) -> &'static str {
    match (number % 100, number % 10) {
        (11 | 12, _) => ":e",
        (_, 1 | 2) => ":a",
        _ => ":e",
    }
}

/// Ordinal as displayed to the learner, e.g. "3:e".
pub fn ordinal_text(number: u32) -> String {
    format!("{number}{}", ordinal_suffix(number))
}

/// Colloquial phrase for a clock time, e.g. "fem i halv tre".
pub fn informal_time_phrase(hour: u32, minute: u32) -> String {
    let current = cardinal_words(clock_hour(hour));
    let next = cardinal_words(clock_hour(hour + 1));

    match minute {
        0 => format!("klockan {current}"),
        15 => format!("kvart över {current}"),
        45 => format!("kvart i {next}"),
        30 => format!("halv {next}"),
        1..=20 => format!("{} över {current}", cardinal_words(minute)),
        21..=29 => format!("{} i halv {next}", cardinal_words(30 - minute)),
        31..=39 => format!("{} över halv {next}", cardinal_words(minute - 30)),
        _ => format!("{} i {next}", cardinal_words(60 - minute)),
    }
}

fn denominator_name(denominator: u32) -> Option<&'static str> {
    Some(match denominator {
        2 => "halv",
        3 => "tredjedel",
        4 => "fjärdedel",
        5 => "femtedel",
        6 => "sjättedel",
        7 => "sjundedel",
        8 => "åttondel",
        9 => "niondel",
        10 => "tiondel",
        _ => return None,
    })
}

/// Fraction phrase: "en halv", "två halvor", "tre fjärdedelar".
pub fn fraction_phrase(numerator: u32, denominator: u32) -> String {
    let count = if numerator == 1 {
        "en".to_string()
    } else {
        cardinal_words(numerator)
    };

    let name = match (denominator_name(denominator), numerator) {
        (Some("halv"), 1) => "halv".to_string(),
        (Some("halv"), _) => "halvor".to_string(),
        (Some(name), 1) => name.to_string(),
        (Some(name), _) => format!("{name}ar"),
        (None, _) => format!("{denominator}:del"),
    };

    format!("{count} {name}")
}

/// Decimal phrase: "två komma tjugofem", "noll komma noll fem".
///
/// Each leading zero of the fractional digits is read as "noll"; the rest is
/// read as one number.
pub fn decimal_phrase(integer: u32, fraction_digits: &str) -> String {
    let mut words = vec![cardinal_words(integer), "komma".to_string()];

    let significant = fraction_digits.trim_start_matches('0');
    let zeros = fraction_digits.len() - significant.len();
    words.extend((0..zeros).map(|_| cardinal_words(0)));
    if let Ok(value) = significant.parse::<u32>() {
        words.push(cardinal_words(value));
    }

    words.join(" ")
}
