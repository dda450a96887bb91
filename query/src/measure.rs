//! Numeric parsing of creature features
//!
//! Weights and heights are stored as text with a comma decimal separator
//! and a unit suffix of fixed width: `"6,9 kg"`, `"0,7 m"`. Any other unit
//! width is not supported.

use serde_json::Value;

/// Width of the weight unit suffix (`" kg"`)
const WEIGHT_SUFFIX_LEN: usize = 3;

/// Width of the height unit suffix (`" m"`)
const HEIGHT_SUFFIX_LEN: usize = 2;

/// Parse a weight such as `"6,9 kg"` into kilograms
pub fn parse_weight(weight: &str) -> Option<f64> {
    parse_with_suffix(weight, WEIGHT_SUFFIX_LEN)
}

/// Parse a height such as `"0,7 m"` into metres
pub fn parse_height(height: &str) -> Option<f64> {
    parse_with_suffix(height, HEIGHT_SUFFIX_LEN)
}

/// Coerce a raw field value to a number.
///
/// Numbers are taken as they are, booleans count as 1 and 0, and strings are
/// parsed after trimming surrounding whitespace.
pub fn coerce_number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(number) => number.as_f64(),
        Value::Bool(flag) => Some(if *flag { 1.0 } else { 0.0 }),
        Value::String(text) => text.trim().parse().ok(),
        _ => None,
    }
}

fn parse_with_suffix(text: &str, suffix_len: usize) -> Option<f64> {
    let text = text.replacen(',', ".", 1);
    let keep = text.chars().count().checked_sub(suffix_len)?;
    let number: String = text.chars().take(keep).collect();
    number.trim().parse().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_weight() {
        assert_eq!(parse_weight("6,9 kg"), Some(6.9));
        assert_eq!(parse_weight("100,0 kg"), Some(100.0));
        assert_eq!(parse_weight("460,0 kg"), Some(460.0));
    }

    #[test]
    fn test_parse_height() {
        assert_eq!(parse_height("0,7 m"), Some(0.7));
        assert_eq!(parse_height("14,5 m"), Some(14.5));
    }

    #[test]
    fn test_only_first_comma_replaced() {
        assert_eq!(parse_weight("1,000,5 kg"), None);
    }

    #[test]
    fn test_suffix_width_is_fixed() {
        // A two-character unit loses a digit instead of parsing as grams
        assert_eq!(parse_weight("12,5 g"), Some(12.0));
        // Without the separating space the last digit is cut off
        assert_eq!(parse_height("1,5m"), Some(1.0));
    }

    #[test]
    fn test_too_short() {
        assert_eq!(parse_weight("kg"), None);
        assert_eq!(parse_height(""), None);
    }

    #[test]
    fn test_coerce_number() {
        assert_eq!(coerce_number(&json!(118)), Some(118.0));
        assert_eq!(coerce_number(&json!(6.94)), Some(6.94));
        assert_eq!(coerce_number(&json!("001")), Some(1.0));
        assert_eq!(coerce_number(&json!(" 2.5 ")), Some(2.5));
        assert_eq!(coerce_number(&json!(true)), Some(1.0));
        assert_eq!(coerce_number(&json!("Seed Pokemon")), None);
        assert_eq!(coerce_number(&json!(["Grass"])), None);
        assert_eq!(coerce_number(&json!(null)), None);
    }
}
