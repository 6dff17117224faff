//! Numerals written as digits, roman numerals or english words.

use phf::phf_map;

static ENGLISH_NUMERALS: phf::Map<&'static str, u32> = phf_map! {
    "zero" => 0,
    "one" => 1,
    "two" => 2,
    "three" => 3,
    "four" => 4,
    "five" => 5,
    "six" => 6,
    "seven" => 7,
    "eight" => 8,
    "nine" => 9,
    "ten" => 10,
    "eleven" => 11,
    "twelve" => 12,
    "thirteen" => 13,
    "fourteen" => 14,
    "fifteen" => 15,
    "sixteen" => 16,
    "seventeen" => 17,
    "eighteen" => 18,
    "nineteen" => 19,
    "twenty" => 20,
};

/// Canonical roman numeral, up to 4999.
const ROMAN: &str = r"M{0,4}(?:CM|CD|D?C{0,3})(?:XC|XL|L?X{0,3})(?:IX|IV|V?I{0,3})";

/// Regex fragment matching any numeral [`parse_numeral`] understands.
///
/// Word alternatives are ordered longest first so `seventeen` is not read as
/// `seven`. The fragment has no capture groups.
pub fn numeral_pattern() -> String {
    let mut words: Vec<&str> = ENGLISH_NUMERALS.keys().copied().collect();
    words.sort_by(|a, b| b.len().cmp(&a.len()).then(a.cmp(b)));
    format!(r"(?:\d+|{}|{ROMAN})", words.join("|"))
}

/// Convert a numeral to its value.
///
/// Returns `None` for anything that is not a digit string, a known english
/// word, or a non-empty roman numeral.
pub fn parse_numeral(text: &str) -> Option<u32> {
    let lower = text.trim().to_ascii_lowercase();
    if lower.is_empty() {
        return None;
    }
    if lower.bytes().all(|b| b.is_ascii_digit()) {
        return lower.parse().ok();
    }
    if let Some(n) = ENGLISH_NUMERALS.get(lower.as_str()) {
        return Some(*n);
    }
    parse_roman(&lower)
}

fn roman_digit(c: char) -> Option<u32> {
    match c {
        'i' => Some(1),
        'v' => Some(5),
        'x' => Some(10),
        'l' => Some(50),
        'c' => Some(100),
        'd' => Some(500),
        'm' => Some(1000),
        _ => None,
    }
}

fn parse_roman(lower: &str) -> Option<u32> {
    let digits: Vec<i64> = lower
        .chars()
        .map(|c| roman_digit(c).map(i64::from))
        .collect::<Option<_>>()?;
    // A digit followed by a larger one is subtracted (IV, XC, CM).
    let total: i64 = digits
        .iter()
        .enumerate()
        .map(|(i, v)| match digits.get(i + 1) {
            Some(next) if next > v => -v,
            _ => *v,
        })
        .sum();
    if total <= 0 {
        return None;
    }
    u32::try_from(total).ok()
}
