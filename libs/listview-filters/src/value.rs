use serde::{Deserialize, Serialize};

/// A single filter parameter value.
///
/// The three sources of filter state (request query, persisted session blob,
/// configured defaults) freely mix numbers and strings for the same key, so
/// values stay tagged until the caller asks for a concrete type via
/// [`FilterValue::coerce_int`] / [`FilterValue::coerce_text`]. Absence is
/// `Option<FilterValue>` at the lookup boundary, not a variant.
///
/// Untagged serde representation: a persisted JSON blob like
/// `{"limit": 50, "orderBy": "name"}` loads without any adornment.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FilterValue {
    Int(i64),
    Text(String),
}

impl FilterValue {
    /// Best-effort integer coercion, total over all inputs.
    ///
    /// Text parses its leading numeric prefix (optional sign, then digits);
    /// anything that yields no prefix coerces to `0`. `"50"` is 50,
    /// `"123abc"` is 123, `"abc"` and `""` are 0.
    #[must_use]
    pub fn coerce_int(&self) -> i64 {
        match self {
            FilterValue::Int(i) => *i,
            FilterValue::Text(s) => int_prefix(s),
        }
    }

    /// String coercion: text as-is, integers stringified.
    #[must_use]
    pub fn coerce_text(&self) -> String {
        match self {
            FilterValue::Int(i) => i.to_string(),
            FilterValue::Text(s) => s.clone(),
        }
    }

    #[must_use]
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FilterValue::Text(s) => Some(s),
            FilterValue::Int(_) => None,
        }
    }
}

impl From<i64> for FilterValue {
    fn from(i: i64) -> Self {
        FilterValue::Int(i)
    }
}

impl From<&str> for FilterValue {
    fn from(s: &str) -> Self {
        FilterValue::Text(s.to_string())
    }
}

impl From<String> for FilterValue {
    fn from(s: String) -> Self {
        FilterValue::Text(s)
    }
}

/// Parse the leading numeric prefix of a string, `0` when there is none.
///
/// Mirrors the permissive cast the web layer applied historically: leading
/// whitespace is skipped, a single sign is honored, digits are consumed until
/// the first non-digit. Overflow saturates rather than wrapping.
fn int_prefix(s: &str) -> i64 {
    let trimmed = s.trim_start();
    let (negative, digits) = match trimmed.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, trimmed.strip_prefix('+').unwrap_or(trimmed)),
    };

    let mut value: i64 = 0;
    let mut seen = false;
    for c in digits.chars() {
        let Some(d) = c.to_digit(10) else { break };
        seen = true;
        value = value
            .saturating_mul(10)
            .saturating_add(i64::from(d));
    }

    if !seen {
        return 0;
    }
    if negative {
        -value
    } else {
        value
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_int_prefix_plain_and_signed() {
        assert_eq!(int_prefix("50"), 50);
        assert_eq!(int_prefix("-5"), -5);
        assert_eq!(int_prefix("+7"), 7);
        assert_eq!(int_prefix("  42"), 42);
    }

    #[test]
    fn test_int_prefix_truncates_trailing_garbage() {
        assert_eq!(int_prefix("123abc"), 123);
        assert_eq!(int_prefix("10 items"), 10);
    }

    #[test]
    fn test_int_prefix_no_digits_is_zero() {
        assert_eq!(int_prefix(""), 0);
        assert_eq!(int_prefix("abc"), 0);
        assert_eq!(int_prefix("-"), 0);
        assert_eq!(int_prefix("--3"), 0);
    }

    #[test]
    fn test_int_prefix_saturates_on_overflow() {
        assert_eq!(int_prefix("99999999999999999999"), i64::MAX);
        assert_eq!(int_prefix("-99999999999999999999"), i64::MIN + 1);
    }
}
