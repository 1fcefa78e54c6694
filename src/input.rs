//! Shared input normalisation: slider values, link fragments and data attributes.
//!
//! Everything here works on plain strings read from the DOM, so the handlers
//! in `main.rs` stay thin and these rules can be unit tested.

/// Integer prefix parse with browser `parseInt(s, 10)` semantics:
/// leading whitespace, optional sign, then as many digits as present.
/// Returns `None` when there are no digits. Saturates on overflow.
pub fn parse_int_prefix(raw: &str) -> Option<i64> {
    let s = raw.trim_start();
    let (negative, digits) = match s.as_bytes().first() {
        Some(b'-') => (true, &s[1..]),
        Some(b'+') => (false, &s[1..]),
        _ => (false, s),
    };
    let len = digits.bytes().take_while(u8::is_ascii_digit).count();
    if len == 0 {
        return None;
    }
    let magnitude = digits[..len].bytes().fold(0i64, |acc, b| {
        acc.saturating_mul(10).saturating_add(i64::from(b - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Session count from the slider's `value`, clamped to `0..=u32::MAX`.
pub fn parse_session_count(raw: &str) -> Option<u32> {
    parse_int_prefix(raw).map(|n| n.clamp(0, i64::from(u32::MAX)) as u32)
}

/// Counter target from a `data-target` attribute. Negative targets are rejected.
pub fn parse_counter_target(raw: &str) -> Option<u64> {
    parse_int_prefix(raw).and_then(|n| u64::try_from(n).ok())
}

/// Element id an in-page link points at (`"#pricing"` → `"pricing"`).
/// A bare `#` or a non-fragment href points at nothing.
pub fn anchor_fragment(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn int_prefix_plain() {
        assert_eq!(parse_int_prefix("42"), Some(42));
        assert_eq!(parse_int_prefix("0"), Some(0));
        assert_eq!(parse_int_prefix("  7"), Some(7));
        assert_eq!(parse_int_prefix("+3"), Some(3));
    }

    #[test]
    fn int_prefix_stops_at_non_digit() {
        assert_eq!(parse_int_prefix("12abc"), Some(12));
        assert_eq!(parse_int_prefix("3.9"), Some(3));
        assert_eq!(parse_int_prefix("10 sessions"), Some(10));
    }

    #[test]
    fn int_prefix_negative() {
        assert_eq!(parse_int_prefix("-5"), Some(-5));
        assert_eq!(parse_int_prefix("-"), None);
    }

    #[test]
    fn int_prefix_no_digits() {
        assert_eq!(parse_int_prefix(""), None);
        assert_eq!(parse_int_prefix("abc"), None);
        assert_eq!(parse_int_prefix("NaN"), None);
        assert_eq!(parse_int_prefix("- 5"), None);
    }

    #[test]
    fn int_prefix_saturates() {
        assert_eq!(parse_int_prefix("99999999999999999999999"), Some(i64::MAX));
    }

    #[test]
    fn session_count_clamps() {
        assert_eq!(parse_session_count("-12"), Some(0));
        assert_eq!(parse_session_count("50"), Some(50));
        assert_eq!(parse_session_count("99999999999"), Some(u32::MAX));
        assert_eq!(parse_session_count("x"), None);
    }

    #[test]
    fn counter_target() {
        assert_eq!(parse_counter_target("15000"), Some(15_000));
        assert_eq!(parse_counter_target("98%"), Some(98));
        assert_eq!(parse_counter_target("-1"), None);
        assert_eq!(parse_counter_target(""), None);
    }

    #[test]
    fn fragments() {
        assert_eq!(anchor_fragment("#pricing"), Some("pricing"));
        assert_eq!(anchor_fragment("#"), None);
        assert_eq!(anchor_fragment("/about"), None);
        assert_eq!(anchor_fragment(""), None);
    }
}
