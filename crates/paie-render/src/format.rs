//! # French Locale Formatting
//!
//! Formats amounts, rates, day counts and dates the way they appear on a
//! French bulletin. All formatting happens here, on the engine side of the
//! document contract — backends receive finished strings.

use chrono::{Datelike, NaiveDate};
use paie_core::{Money, Rate};
use rust_decimal::Decimal;

const MONTHS: [&str; 12] = [
    "janvier",
    "février",
    "mars",
    "avril",
    "mai",
    "juin",
    "juillet",
    "août",
    "septembre",
    "octobre",
    "novembre",
    "décembre",
];

/// `1234.56` → `1 234,56 €`. Negative amounts keep a leading minus.
pub fn eur(amount: Money) -> String {
    format!("{} €", decimal_fr(amount.round2().as_decimal(), 2))
}

/// `0.069` → `6,90 %`.
pub fn percent(rate: Rate) -> String {
    let hundred = Decimal::new(100, 0);
    format!("{} %", decimal_fr(rate.as_decimal() * hundred, 2))
}

/// Day counts with two decimals: `2.5` → `2,50`.
pub fn days(value: Decimal) -> String {
    decimal_fr(value, 2)
}

/// `2025-03-31` → `31 mars 2025`.
pub fn date(d: NaiveDate) -> String {
    let month = MONTHS[(d.month() - 1) as usize];
    format!("{} {} {}", d.day(), month, d.year())
}

/// Month-year heading: `mars 2025`.
pub fn month_year(d: NaiveDate) -> String {
    let month = MONTHS[(d.month() - 1) as usize];
    format!("{} {}", month, d.year())
}

/// French decimal notation: space-grouped thousands, comma separator,
/// fixed number of decimals.
fn decimal_fr(value: Decimal, decimals: u32) -> String {
    let rounded = value.round_dp_with_strategy(
        decimals,
        rust_decimal::RoundingStrategy::MidpointAwayFromZero,
    );
    let plain = format!("{rounded:.prec$}", prec = decimals as usize);
    let (sign, unsigned) = match plain.strip_prefix('-') {
        Some(rest) => ("-", rest),
        None => ("", plain.as_str()),
    };
    let (int_part, frac_part) = match unsigned.split_once('.') {
        Some((i, f)) => (i, Some(f)),
        None => (unsigned, None),
    };

    let mut grouped = String::with_capacity(unsigned.len() + unsigned.len() / 3);
    let digits = int_part.as_bytes();
    for (i, b) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(' ');
        }
        grouped.push(*b as char);
    }

    match frac_part {
        Some(f) => format!("{sign}{grouped},{f}"),
        None => format!("{sign}{grouped}"),
    }
}
