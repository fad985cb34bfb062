//! Atom identifiers and the shared decomposition functions.
//!
//! Generators call these to populate `Question::atoms`; strategies call the
//! very same functions to decompose learner input. Keeping a single copy is
//! what keeps both sides in agreement.
//!
//! Atom families:
//! - cardinal: a plain numeral (`"20"`, `"5"`, `"14"`)
//! - ordinal: a cardinal with the `ord:` prefix (`"ord:4"`)
//! - concept: a `#` word with no numeric value (`"#kvart"`, `"#over"`)

use std::fmt;

/// Prefix marking ordinal atoms.
pub const ORDINAL_PREFIX: &str = "ord:";

/// Leading character of concept atoms.
pub const CONCEPT_MARKER: char = '#';

/// Number of digits in a phone number drill item.
pub const PHONE_NUMBER_DIGITS: usize = 10;

/// Structural and directional words of informal clock phrases.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Concept {
    /// "kvart", quarter.
    Quarter,
    /// "halv", half.
    Half,
    /// "över", past.
    Past,
    /// "i", to.
    To,
}

impl Concept {
    pub fn as_str(&self) -> &'static str {
        match self {
            Concept::Quarter => "#kvart",
            Concept::Half => "#halv",
            Concept::Past => "#over",
            Concept::To => "#i",
        }
    }

    /// Classify an atom identifier, if it names a known concept.
    pub fn from_atom(atom: &str) -> Option<Self> {
        match atom {
            "#kvart" => Some(Concept::Quarter),
            "#halv" => Some(Concept::Half),
            "#over" => Some(Concept::Past),
            "#i" => Some(Concept::To),
            _ => None,
        }
    }

    /// Past and to name a direction relative to an anchor.
    pub fn is_directional(&self) -> bool {
        matches!(self, Concept::Past | Concept::To)
    }
}

impl fmt::Display for Concept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Whether `atom` is a concept atom (carries no numeric value).
pub fn is_concept(atom: &str) -> bool {
    atom.starts_with(CONCEPT_MARKER)
}

/// Whether `atom` is an ordinal atom.
pub fn is_ordinal(atom: &str) -> bool {
    atom.starts_with(ORDINAL_PREFIX)
}

/// Decompose a number in `0..=1000` into its spoken parts, prefixing each
/// atom with `prefix`.
///
/// - 0 → `["0"]`, 1000 → `["1"]`
/// - 1–19 are atomic
/// - 20–99 → tens then ones (ones omitted when zero)
/// - 100–999 → hundreds digit then the remainder by the same rule
///
/// Returns an empty list outside `0..=1000`.
pub fn decompose_number(number: i64, prefix: &str) -> Vec<String> {
    if !(0..=1000).contains(&number) {
        return Vec::new();
    }
    if number == 1000 {
        return vec![format!("{prefix}1")];
    }
    if number == 0 {
        return vec![format!("{prefix}0")];
    }

    let mut atoms = Vec::with_capacity(3);
    let hundreds = number / 100;
    if hundreds > 0 {
        atoms.push(format!("{prefix}{hundreds}"));
    }

    let remainder = number % 100;
    if remainder > 0 {
        if remainder < 20 {
            atoms.push(format!("{prefix}{remainder}"));
        } else {
            let tens = remainder / 10 * 10;
            atoms.push(format!("{prefix}{tens}"));
            let ones = remainder % 10;
            if ones > 0 {
                atoms.push(format!("{prefix}{ones}"));
            }
        }
    }
    atoms
}

/// [`decompose_number`] without a prefix.
pub fn decompose_cardinal(number: i64) -> Vec<String> {
    decompose_number(number, "")
}

/// [`decompose_number`] with the `ord:` prefix.
pub fn decompose_ordinal(number: i64) -> Vec<String> {
    decompose_number(number, ORDINAL_PREFIX)
}

/// Decompose one positional two-digit field (an hour, a minute, a phone
/// pair read as a clock field).
///
/// Differs from [`decompose_cardinal`] only below ten, where the leading
/// zero is voiced: 0 → `["0","0"]`, 7 → `["0","7"]`. Returns an empty list
/// above 99.
pub fn decompose_two_digit_part(value: u32) -> Vec<String> {
    match value {
        0 => vec!["0".to_string(), "0".to_string()],
        1..=9 => vec!["0".to_string(), value.to_string()],
        10..=99 => decompose_cardinal(i64::from(value)),
        _ => Vec::new(),
    }
}

/// Atoms of a digital clock time: hour field then minute field.
pub fn decompose_digital_time(hour: u32, minute: u32) -> Vec<String> {
    let mut atoms = decompose_two_digit_part(hour);
    atoms.extend(decompose_two_digit_part(minute));
    atoms
}

/// Decompose the digits after a decimal separator.
///
/// Each leading zero is spoken ("noll") and becomes a `"0"` atom; the
/// nonzero remainder is decomposed as a cardinal. Empty or non-digit input
/// yields no atoms.
pub fn decompose_decimal_fraction(digits: &str) -> Vec<String> {
    let digits = digits.trim();
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Vec::new();
    }
    let Ok(number) = digits.parse::<i64>() else {
        return Vec::new();
    };

    let leading_zeros = digits.bytes().take_while(|&b| b == b'0').count();
    let mut atoms: Vec<String> = (0..leading_zeros)
        .flat_map(|_| decompose_cardinal(0))
        .collect();
    if number > 0 {
        atoms.extend(decompose_cardinal(number));
    }
    atoms
}

/// Atoms of a decimal number: integer part then fractional digits.
pub fn decompose_decimal(integer: i64, fraction_digits: &str) -> Vec<String> {
    let mut atoms = decompose_cardinal(integer);
    atoms.extend(decompose_decimal_fraction(fraction_digits));
    atoms
}

/// Atoms of a fraction: the numerator as a cardinal, the denominator as an
/// ordinal.
pub fn fraction_atoms(
    numerator: impl fmt::Display,
    denominator: impl fmt::Display,
) -> Vec<String> {
    vec![
        numerator.to_string(),
        format!("{ORDINAL_PREFIX}{denominator}"),
    ]
}

/// Decompose a trailing phone-number pair.
///
/// Pairs below ten are read digit by digit with the leading zero; the rest
/// are read as a cardinal.
pub fn decompose_phone_pair(pair: u32) -> Vec<String> {
    if pair < 10 {
        vec!["0".to_string(), pair.to_string()]
    } else {
        decompose_cardinal(i64::from(pair))
    }
}

/// Decompose a ten-digit phone number.
///
/// The first six digits become one atom each; the two trailing pairs go
/// through [`decompose_phone_pair`]. Returns `None` unless `digits` is
/// exactly ten ASCII digits.
pub fn decompose_phone_number(digits: &str) -> Option<Vec<String>> {
    if digits.len() != PHONE_NUMBER_DIGITS || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }

    let mut atoms: Vec<String> = digits[..6].chars().map(|c| c.to_string()).collect();
    for pair in [&digits[6..8], &digits[8..10]] {
        atoms.extend(decompose_phone_pair(pair.parse().ok()?));
    }
    Some(atoms)
}

/// Twelve-hour clock value (1–12) for a 24-hour hour.
pub fn clock_hour(hour: u32) -> u32 {
    match hour % 12 {
        0 => 12,
        h => h,
    }
}

/// Atoms of an informal clock phrase, in spoken order.
///
/// The hour atom is always last; phrases anchored on the coming hour
/// ("kvart i", "halv", "fem i halv") name `hour + 1`.
pub fn informal_time_atoms(hour: u32, minute: u32) -> Vec<String> {
    let current = clock_hour(hour).to_string();
    let next = clock_hour(hour + 1).to_string();
    let concept = |c: Concept| c.as_str().to_string();

    match minute {
        0 => vec![current],
        15 => vec![concept(Concept::Quarter), concept(Concept::Past), current],
        45 => vec![concept(Concept::Quarter), concept(Concept::To), next],
        30 => vec![concept(Concept::Half), next],
        1..=20 => vec![minute.to_string(), concept(Concept::Past), current],
        21..=29 => vec![
            (30 - minute).to_string(),
            concept(Concept::To),
            concept(Concept::Half),
            next,
        ],
        31..=39 => vec![
            (minute - 30).to_string(),
            concept(Concept::Past),
            concept(Concept::Half),
            next,
        ],
        _ => vec![(60 - minute).to_string(), concept(Concept::To), next],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn atoms(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn standard_decomposition_ranges() {
        assert_eq!(decompose_cardinal(0), atoms(&["0"]));
        assert_eq!(decompose_cardinal(7), atoms(&["7"]));
        assert_eq!(decompose_cardinal(14), atoms(&["14"]));
        assert_eq!(decompose_cardinal(20), atoms(&["20"]));
        assert_eq!(decompose_cardinal(42), atoms(&["40", "2"]));
        assert_eq!(decompose_cardinal(100), atoms(&["1"]));
        assert_eq!(decompose_cardinal(115), atoms(&["1", "15"]));
        assert_eq!(decompose_cardinal(123), atoms(&["1", "20", "3"]));
        assert_eq!(decompose_cardinal(905), atoms(&["9", "5"]));
        assert_eq!(decompose_cardinal(1000), atoms(&["1"]));
    }

    #[test]
    fn out_of_range_is_empty() {
        assert!(decompose_cardinal(-1).is_empty());
        assert!(decompose_cardinal(1001).is_empty());
    }

    #[test]
    fn ordinal_prefix_applies_to_every_atom() {
        assert_eq!(decompose_ordinal(4), atoms(&["ord:4"]));
        assert_eq!(decompose_ordinal(21), atoms(&["ord:20", "ord:1"]));
    }

    #[test]
    fn two_digit_part_voices_leading_zero() {
        assert_eq!(decompose_two_digit_part(0), atoms(&["0", "0"]));
        assert_eq!(decompose_two_digit_part(5), atoms(&["0", "5"]));
        assert_eq!(decompose_two_digit_part(10), atoms(&["10"]));
        assert_eq!(decompose_two_digit_part(19), atoms(&["19"]));
        assert_eq!(decompose_two_digit_part(30), atoms(&["30"]));
        assert_eq!(decompose_two_digit_part(47), atoms(&["40", "7"]));
        assert!(decompose_two_digit_part(100).is_empty());
    }

    #[test]
    fn digital_time_concatenates_fields() {
        assert_eq!(decompose_digital_time(0, 3), atoms(&["0", "0", "0", "3"]));
        assert_eq!(decompose_digital_time(14, 30), atoms(&["14", "30"]));
    }

    #[test]
    fn decimal_fraction_leading_zeros() {
        assert_eq!(decompose_decimal_fraction("5"), atoms(&["5"]));
        assert_eq!(decompose_decimal_fraction("25"), atoms(&["20", "5"]));
        assert_eq!(decompose_decimal_fraction("05"), atoms(&["0", "5"]));
        assert_eq!(decompose_decimal_fraction("00"), atoms(&["0", "0"]));
        assert_eq!(decompose_decimal_fraction("0"), atoms(&["0"]));
        assert!(decompose_decimal_fraction("").is_empty());
        assert!(decompose_decimal_fraction("5a").is_empty());
    }

    #[test]
    fn decimal_joins_parts() {
        assert_eq!(decompose_decimal(2, "25"), atoms(&["2", "20", "5"]));
        assert_eq!(decompose_decimal(0, "05"), atoms(&["0", "0", "5"]));
    }

    #[test]
    fn fraction_mixes_cardinal_and_ordinal() {
        assert_eq!(fraction_atoms(3, 4), atoms(&["3", "ord:4"]));
    }

    #[test]
    fn phone_number_hybrid_decomposition() {
        assert_eq!(
            decompose_phone_number("0701230567").unwrap(),
            atoms(&["0", "7", "0", "1", "2", "3", "0", "5", "60", "7"])
        );
        assert_eq!(
            decompose_phone_number("0709991200").unwrap(),
            atoms(&["0", "7", "0", "9", "9", "9", "12", "0", "0"])
        );
        assert!(decompose_phone_number("070123056").is_none());
        assert!(decompose_phone_number("07012305a7").is_none());
    }

    #[test]
    fn informal_atoms_follow_phrase_shape() {
        assert_eq!(informal_time_atoms(14, 0), atoms(&["2"]));
        assert_eq!(informal_time_atoms(0, 0), atoms(&["12"]));
        assert_eq!(informal_time_atoms(4, 15), atoms(&["#kvart", "#over", "4"]));
        assert_eq!(informal_time_atoms(4, 45), atoms(&["#kvart", "#i", "5"]));
        assert_eq!(informal_time_atoms(2, 30), atoms(&["#halv", "3"]));
        assert_eq!(informal_time_atoms(10, 10), atoms(&["10", "#over", "10"]));
        assert_eq!(
            informal_time_atoms(2, 25),
            atoms(&["5", "#i", "#halv", "3"])
        );
        assert_eq!(
            informal_time_atoms(2, 35),
            atoms(&["5", "#over", "#halv", "3"])
        );
        assert_eq!(informal_time_atoms(11, 50), atoms(&["10", "#i", "12"]));
        assert_eq!(informal_time_atoms(23, 40), atoms(&["20", "#i", "12"]));
    }

    #[test]
    fn concept_classification() {
        assert_eq!(Concept::from_atom("#halv"), Some(Concept::Half));
        assert_eq!(Concept::from_atom("4"), None);
        assert!(Concept::Past.is_directional());
        assert!(!Concept::Quarter.is_directional());
        assert!(is_concept("#i"));
        assert!(is_ordinal("ord:3"));
    }

    #[test]
    fn decomposition_is_deterministic() {
        for n in 0..=1000 {
            assert_eq!(decompose_cardinal(n), decompose_cardinal(n));
        }
    }
}
