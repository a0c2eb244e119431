// Numeric Phrase Humanizer
// Converts raw numeric tokens (byte counts, currency amounts, relative time
// expressions) into natural-language phrasing via ordered substitution
// passes. Rule order is a contract: each pass operates on the previous
// pass's output.

use regex::{Captures, Regex};

const CRORE: u128 = 10_000_000;
const LAKH: u128 = 100_000;

/// Rewrite numeric expressions in `text` into natural phrasing.
///
/// Total function: never fails, returns the input unchanged when nothing
/// matches. Each rule consumes its unit marker, so re-running on already
/// humanized output does not re-trigger the byte or currency rules.
pub fn humanize_numbers(text: &str) -> String {
    if text.is_empty() {
        return String::new();
    }

    let passes: [fn(&str) -> String; 3] = [humanize_bytes, humanize_currency, humanize_relative_time];
    passes.iter().fold(text.to_string(), |acc, pass| pass(&acc))
}

/// Rule 1: `15000000 bytes` → `15.0 MB`. Requires at least five digits so
/// small literal counts are left alone.
fn humanize_bytes(text: &str) -> String {
    let re = Regex::new(r"(\d{5,})\s?(?:bytes|Byte|B)").unwrap();
    re.replace_all(text, |caps: &Captures<'_>| match caps[1].parse::<u128>() {
        Ok(n) => natural_size(n),
        Err(_) => caps[0].to_string(),
    })
    .into_owned()
}

/// Decimal (1000-based) size rendering with one decimal place, matching the
/// default of the `humanize.naturalsize` routine the reference used.
fn natural_size(bytes: u128) -> String {
    if bytes < 1000 {
        return format!("{} Bytes", bytes);
    }
    let mut value = bytes as f64;
    for unit in ["kB", "MB", "GB", "TB", "PB", "EB", "ZB"] {
        value /= 1000.0;
        if value < 1000.0 {
            return format!("{:.1} {}", value, unit);
        }
    }
    format!("{:.1} YB", value / 1000.0)
}

/// Rule 2: magnitude-banded lakh/crore phrasing, applied for every currency
/// code alike. Below the lakh band the amount is thousands-grouped.
fn humanize_currency(text: &str) -> String {
    let re = Regex::new(r"(\d{5,})\s?(INR|USD|Rs\.?)").unwrap();
    re.replace_all(text, |caps: &Captures<'_>| {
        let amount: u128 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => return caps[0].to_string(),
        };
        let currency = &caps[2];
        if amount >= CRORE {
            format!("{:.1} crore {}", amount as f64 / CRORE as f64, currency)
        } else if amount >= LAKH {
            format!("{:.1} lakh {}", amount as f64 / LAKH as f64, currency)
        } else {
            format!("{} {}", group_thousands(amount), currency)
        }
    })
    .into_owned()
}

fn group_thousands(amount: u128) -> String {
    let digits = amount.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Rule 3: `{n} {unit}s ago` → `{n} {unit} ago`. The unit is singularized
/// unconditionally, even when the plural was grammatically correct
/// (`3 hours ago` → `3 hour ago`); that quirk is kept on purpose.
fn humanize_relative_time(text: &str) -> String {
    let re = Regex::new(r"(\d+)\s?(seconds?|minutes?|hours?|days?)\sago").unwrap();
    re.replace_all(text, |caps: &Captures<'_>| {
        let number: u64 = match caps[1].parse() {
            Ok(n) => n,
            Err(_) => return caps[0].to_string(),
        };
        let unit = caps[2].strip_suffix('s').unwrap_or(&caps[2]);
        format!("{} {} ago", number, unit)
    })
    .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_byte_counts_are_humanized() {
        assert_eq!(humanize_numbers("15000000 bytes"), "15.0 MB");
        assert_eq!(humanize_numbers("10000 B"), "10.0 kB");
        assert_eq!(humanize_numbers("2500000000 bytes of data"), "2.5 GB of data");
    }

    #[test]
    fn test_byte_counts_roll_through_the_largest_units() {
        // 10^21 and 2x10^24 land on the top rungs of the unit ladder.
        assert_eq!(humanize_numbers("1000000000000000000000 bytes"), "1.0 ZB");
        assert_eq!(humanize_numbers("2000000000000000000000000 bytes"), "2.0 YB");
    }

    #[test]
    fn test_small_byte_counts_are_left_alone() {
        // Fewer than five digits never matches.
        assert_eq!(humanize_numbers("9999 bytes"), "9999 bytes");
    }

    #[test]
    fn test_currency_lakh_band() {
        assert_eq!(humanize_numbers("500000 INR"), "5.0 lakh INR");
        assert_eq!(humanize_numbers("150000 USD"), "1.5 lakh USD");
    }

    #[test]
    fn test_currency_crore_band() {
        assert_eq!(humanize_numbers("20000000 INR"), "2.0 crore INR");
        assert_eq!(humanize_numbers("15000000 Rs."), "1.5 crore Rs.");
    }

    #[test]
    fn test_currency_below_lakh_is_grouped() {
        assert_eq!(humanize_numbers("99999 USD"), "99,999 USD");
        assert_eq!(humanize_numbers("12345 Rs"), "12,345 Rs");
    }

    #[test]
    fn test_lakh_phrasing_applies_to_all_codes() {
        // Deliberate simplification: no special-casing by currency.
        assert_eq!(humanize_numbers("500000 USD"), "5.0 lakh USD");
    }

    #[test]
    fn test_relative_time_is_singularized() {
        assert_eq!(humanize_numbers("3 hours ago"), "3 hour ago");
        assert_eq!(humanize_numbers("1 minute ago"), "1 minute ago");
        assert_eq!(humanize_numbers("45 seconds ago"), "45 second ago");
        assert_eq!(humanize_numbers("10 days ago"), "10 day ago");
    }

    #[test]
    fn test_no_match_is_identity() {
        let text = "A sentence without any digit-plus-unit patterns.";
        assert_eq!(humanize_numbers(text), text);
        assert_eq!(humanize_numbers(""), "");
    }

    #[test]
    fn test_idempotent_on_own_output() {
        let once = humanize_numbers("15000000 bytes and 500000 INR");
        assert_eq!(humanize_numbers(&once), once);
    }

    #[test]
    fn test_multiple_matches_in_one_text() {
        let out = humanize_numbers("Storage: 15000000 bytes, budget: 500000 INR, updated 2 hours ago.");
        assert_eq!(out, "Storage: 15.0 MB, budget: 5.0 lakh INR, updated 2 hour ago.");
    }

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(12345), "12,345");
        assert_eq!(group_thousands(1234567), "1,234,567");
    }
}
