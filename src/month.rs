//! Month-name handling for the input side.
//!
//! The selector model offers twelve fixed English month names; the CLI
//! accepts either a name (case-insensitive) or a 1-based number.

pub const MONTHS: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// Resolves a month given as a name or a number to its 1–12 index.
pub fn parse_month(input: &str) -> Option<u32> {
    let input = input.trim();

    if let Ok(n) = input.parse::<u32>() {
        return (1..=12).contains(&n).then_some(n);
    }

    MONTHS
        .iter()
        .position(|name| name.eq_ignore_ascii_case(input))
        .map(|i| i as u32 + 1)
}

/// Name of a 1-based month number, for echoing the selection back.
pub fn month_name(month: u32) -> Option<&'static str> {
    MONTHS.get(month.checked_sub(1)? as usize).copied()
}
