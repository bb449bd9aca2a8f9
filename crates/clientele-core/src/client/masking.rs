//! Input masking for form text.

/// Format typed text as a progressive `DD/MM/YYYY` date.
///
/// Non-digits are dropped and at most eight digits are kept:
/// `"3102"` becomes `"31/02"`, `"31022020"` becomes `"31/02/2020"`.
pub fn mask_date_input(text: &str) -> String {
    let digits: Vec<char> = text.chars().filter(char::is_ascii_digit).take(8).collect();

    let mut formatted = String::with_capacity(10);
    for (i, digit) in digits.iter().enumerate() {
        if i == 2 || i == 4 {
            formatted.push('/');
        }
        formatted.push(*digit);
    }
    formatted
}

/// Parse the leading integer of typed text.
///
/// Leading whitespace is skipped and parsing stops at the first non-digit.
/// Zero, overflow or text without leading digits yields `None`, which the
/// form treats as "not entered".
pub fn parse_numeric_input(text: &str) -> Option<u64> {
    let digits: String = text
        .trim_start()
        .chars()
        .take_while(char::is_ascii_digit)
        .collect();

    digits.parse::<u64>().ok().filter(|n| *n != 0)
}

/// Keep the countries whose name contains `query`, ignoring case.
///
/// An empty query keeps everything. Input order is preserved.
pub fn filter_countries<'a>(countries: &'a [String], query: &str) -> Vec<&'a str> {
    let query = query.trim().to_lowercase();
    countries
        .iter()
        .map(String::as_str)
        .filter(|name| query.is_empty() || name.to_lowercase().contains(&query))
        .collect()
}
