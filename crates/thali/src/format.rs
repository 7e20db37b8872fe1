//! Display formatters for counts, currency, percentages and ratings.
//!
//! Formatting an already-formatted string is not supported; these functions
//! take numbers only.

/// Group an integer with thousands separators: 6694 -> "6,694".
pub fn group_thousands(value: u64) -> String {
    let digits = value.to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

/// Cost in whole rupees: 850 -> "₹850", 1350 -> "₹1,350".
pub fn currency(value: u64) -> String {
    format!("₹{}", group_thousands(value))
}

/// Share values arrive pre-scaled 0-100; rendered at one decimal place.
pub fn percentage(value: f64) -> String {
    format!("{:.1}%", value)
}

/// Ratings are echoed as given, in minimal decimal form: 4.2, 4.15, 4.
pub fn rating(value: f64) -> String {
    format!("{}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_group_thousands() {
        assert_eq!(group_thousands(0), "0");
        assert_eq!(group_thousands(89), "89");
        assert_eq!(group_thousands(436), "436");
        assert_eq!(group_thousands(6694), "6,694");
        assert_eq!(group_thousands(1247), "1,247");
        assert_eq!(group_thousands(1_000_000), "1,000,000");
    }

    #[test]
    fn test_currency() {
        assert_eq!(currency(850), "₹850");
        assert_eq!(currency(1350), "₹1,350");
        assert_eq!(currency(380), "₹380");
    }

    #[test]
    fn test_percentage_one_decimal() {
        assert_eq!(percentage(18.6), "18.6%");
        assert_eq!(percentage(35.0), "35.0%");
        assert_eq!(percentage(4.0), "4.0%");
        assert_eq!(percentage(100.0), "100.0%");
    }

    #[test]
    fn test_rating_minimal_form() {
        assert_eq!(rating(4.2), "4.2");
        assert_eq!(rating(4.15), "4.15");
        assert_eq!(rating(4.0), "4");
    }
}
