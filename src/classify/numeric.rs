// Numeric classifiers — digits, spelled-out numbers, and how many of each.

use std::collections::BTreeSet;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::Serialize;

static DIGITS: Lazy<Regex> = Lazy::new(|| Regex::new(r"\d+").expect("digit pattern compiles"));

/// Closed vocabulary of spelled-out Spanish numbers.
pub const NUMBER_WORDS: [&str; 35] = [
    "uno", "dos", "tres", "cuatro", "cinco", "seis", "siete", "ocho", "nueve", "diez", "once",
    "doce", "trece", "catorce", "quince", "dieciséis", "diecisiete", "dieciocho", "diecinueve",
    "veinte", "treinta", "cuarenta", "cincuenta", "sesenta", "setenta", "ochenta", "noventa",
    "cien", "ciento", "doscientos", "quinientos", "mil", "millón", "millones", "billón",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum NumericFormat {
    None,
    Digit,
    Spelled,
    Both,
}

impl NumericFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            NumericFormat::None => "none",
            NumericFormat::Digit => "digit",
            NumericFormat::Spelled => "spelled",
            NumericFormat::Both => "both",
        }
    }
}

impl std::fmt::Display for NumericFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// All three numeric facets of a title, computed from one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct NumericProfile {
    pub format: NumericFormat,
    pub has_numbers: bool,
    pub count: usize,
}

/// Number of `\d+` runs in the title ("1.500" is two runs).
pub fn digit_matches(title: &str) -> usize {
    DIGITS.find_iter(title).count()
}

/// Distinct number words present among the title's whitespace-separated
/// tokens, ignoring case and surrounding punctuation.
pub fn spelled_numbers(title: &str) -> BTreeSet<&'static str> {
    title
        .split_whitespace()
        .map(|token| {
            token
                .trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter_map(|token| NUMBER_WORDS.iter().copied().find(|w| *w == token))
        .collect()
}

pub fn numeric_profile(title: &str) -> NumericProfile {
    let digits = digit_matches(title);
    let spelled = spelled_numbers(title).len();

    let format = match (digits > 0, spelled > 0) {
        (true, true) => NumericFormat::Both,
        (true, false) => NumericFormat::Digit,
        (false, true) => NumericFormat::Spelled,
        (false, false) => NumericFormat::None,
    };

    NumericProfile {
        format,
        has_numbers: digits > 0 || spelled > 0,
        count: digits + spelled,
    }
}

pub fn numeric_format(title: &str) -> NumericFormat {
    numeric_profile(title).format
}

pub fn has_numbers(title: &str) -> bool {
    numeric_profile(title).has_numbers
}

pub fn number_count(title: &str) -> usize {
    numeric_profile(title).count
}
