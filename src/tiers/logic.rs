//! Credit calculator logic. Pure functions, no DOM access.

use super::state::{TierCatalog, TierError, TierKey, AVERAGE_SESSION_CHARGE};

/// Credits earned in one tier for a given number of sessions.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct CreditBreakdown {
    /// Credit-back on charging spend. Unrounded.
    pub base_credits: f64,
    /// Annual + birthday + seasonal bonuses.
    pub bonus_credits: f64,
    pub total_credits: f64,
}

/// Credits a member of `key` would earn over `sessions` charging sessions.
pub fn compute_credits(
    catalog: &TierCatalog,
    sessions: u32,
    key: TierKey,
) -> Result<CreditBreakdown, TierError> {
    let tier = catalog.get(key)?;
    let base_credits =
        f64::from(sessions) * AVERAGE_SESSION_CHARGE * f64::from(tier.credit_back_percent) / 100.0;
    let bonus_credits = f64::from(tier.bonus_total());
    Ok(CreditBreakdown {
        base_credits,
        bonus_credits,
        total_credits: base_credits + bonus_credits,
    })
}

/// Highest auto-qualifying tier reachable with `sessions`.
///
/// Invite-only tiers are never returned.
pub fn qualified_tier(catalog: &TierCatalog, sessions: u32) -> TierKey {
    catalog
        .tiers()
        .iter()
        .rev()
        .find(|t| t.sessions_required.is_some_and(|req| sessions >= req))
        .map(|t| t.key)
        // A validated catalog always has a zero-session tier.
        .unwrap_or(TierKey::Explorer)
}

/// The tier after `current` in the fixed progression.
pub fn next_tier(current: TierKey) -> Option<TierKey> {
    current.next()
}

/// Sessions still missing before `sessions` reaches `required`.
pub fn sessions_needed(sessions: u32, required: Option<u32>) -> Option<u32> {
    required.filter(|&req| sessions < req).map(|req| req - sessions)
}

/// Format a number with commas, dropping the fraction (e.g. 1234567.8 → "1,234,567").
pub fn format_number(n: f64) -> String {
    if n < 0.0 {
        return format!("-{}", format_number(-n));
    }
    let s = (n.floor() as u64).to_string();
    let mut result = String::new();
    for (i, c) in s.chars().rev().enumerate() {
        if i > 0 && i % 3 == 0 {
            result.push(',');
        }
        result.push(c);
    }
    result.chars().rev().collect()
}

/// Whole-dollar currency display, rounded half away from zero (e.g. 1234.5 → "$1,235").
pub fn format_money(amount: f64) -> String {
    let rounded = amount.round();
    if rounded < 0.0 {
        format!("-${}", format_number(-rounded))
    } else {
        format!("${}", format_number(rounded))
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    fn arb_tier_key() -> impl Strategy<Value = TierKey> {
        prop_oneof![
            Just(TierKey::Explorer),
            Just(TierKey::Voyager),
            Just(TierKey::Pioneer),
            Just(TierKey::Trailblazer),
        ]
    }

    // ── Qualification properties ──────────────────────────

    proptest! {
        #[test]
        fn prop_qualified_tier_matches_thresholds(sessions in 0u32..10_000) {
            let tier = qualified_tier(&TierCatalog::standard().unwrap(), sessions);
            let expected = if sessions >= 25 {
                TierKey::Pioneer
            } else if sessions >= 10 {
                TierKey::Voyager
            } else {
                TierKey::Explorer
            };
            prop_assert_eq!(tier, expected);
        }

        #[test]
        fn prop_never_qualifies_for_invite_only(sessions in any::<u32>()) {
            prop_assert_ne!(qualified_tier(&TierCatalog::standard().unwrap(), sessions), TierKey::Trailblazer);
        }

        #[test]
        fn prop_qualified_tier_is_monotonic(a in 0u32..500, b in 0u32..500) {
            let catalog = TierCatalog::standard().unwrap();
            let pos = |s| TierKey::all().iter().position(|k| *k == qualified_tier(&catalog, s));
            let (lo, hi) = if a <= b { (a, b) } else { (b, a) };
            prop_assert!(pos(lo) <= pos(hi));
        }
    }

    // ── Credit properties ─────────────────────────────────

    proptest! {
        #[test]
        fn prop_zero_sessions_total_is_bonus(key in arb_tier_key()) {
            let c = compute_credits(&TierCatalog::standard().unwrap(), 0, key).unwrap();
            prop_assert_eq!(c.base_credits, 0.0);
            prop_assert_eq!(c.total_credits, c.bonus_credits);
        }

        #[test]
        fn prop_total_is_base_plus_bonus(sessions in 0u32..100_000, key in arb_tier_key()) {
            let c = compute_credits(&TierCatalog::standard().unwrap(), sessions, key).unwrap();
            prop_assert!((c.total_credits - (c.base_credits + c.bonus_credits)).abs() < 1e-6);
            prop_assert!(c.base_credits >= 0.0);
        }

        #[test]
        fn prop_more_sessions_never_fewer_credits(sessions in 0u32..100_000, key in arb_tier_key()) {
            let catalog = TierCatalog::standard().unwrap();
            let now = compute_credits(&catalog, sessions, key).unwrap();
            let later = compute_credits(&catalog, sessions + 1, key).unwrap();
            prop_assert!(later.total_credits >= now.total_credits);
        }
    }

    // ── Formatting properties ─────────────────────────────

    proptest! {
        #[test]
        fn prop_format_number_commas_at_correct_positions(int_val in 0u64..1_000_000_000) {
            let s = format_number(int_val as f64);
            let stripped: String = s.chars().filter(|c| *c != ',').collect();
            prop_assert_eq!(stripped, int_val.to_string());
        }

        #[test]
        fn prop_format_money_has_no_fraction(n in 0.0f64..1e9) {
            let s = format_money(n);
            prop_assert!(s.starts_with('$'), "got: {}", s);
            prop_assert!(!s.contains('.'), "got: {}", s);
        }
    }
}
