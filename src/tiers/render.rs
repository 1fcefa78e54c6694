//! Calculator result cards: per-tier display records and their markup.

use super::logic::{self, CreditBreakdown};
use super::state::{Tier, TierCatalog, TierKey};

/// Badge shown on a result card.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum TierStatus {
    Qualified,
    NextGoal,
    None,
}

/// Everything one result card displays.
#[derive(Clone, Debug, PartialEq)]
pub struct TierDisplay {
    pub key: TierKey,
    pub name: &'static str,
    pub status: TierStatus,
    pub qualification_text: String,
    pub credits: CreditBreakdown,
    pub total_display: String,
    pub earning_description: String,
}

/// Build one display record per catalog tier for `sessions`.
pub fn tier_displays(catalog: &TierCatalog, sessions: u32) -> Vec<TierDisplay> {
    let qualified = logic::qualified_tier(catalog, sessions);
    let next_goal = logic::next_tier(qualified);

    catalog
        .tiers()
        .iter()
        .filter_map(|tier| {
            let status = if tier.key == qualified {
                TierStatus::Qualified
            } else if Some(tier.key) == next_goal {
                TierStatus::NextGoal
            } else {
                TierStatus::None
            };
            // The key comes from the catalog itself, so the lookup cannot miss.
            let credits = logic::compute_credits(catalog, sessions, tier.key).ok()?;
            Some(TierDisplay {
                key: tier.key,
                name: tier.name,
                status,
                qualification_text: qualification_text(tier, sessions, status),
                credits,
                total_display: logic::format_money(credits.total_credits),
                earning_description: earning_description(tier),
            })
        })
        .collect()
}

/// Static rule, plus how many sessions are still missing for tiers not yet reached.
pub fn qualification_text(tier: &Tier, sessions: u32, status: TierStatus) -> String {
    if status == TierStatus::Qualified {
        return tier.qualification.to_string();
    }
    match logic::sessions_needed(sessions, tier.sessions_required) {
        Some(needed) => format!(
            "{} • {} more session{} to qualify",
            tier.qualification,
            needed,
            if needed == 1 { "" } else { "s" }
        ),
        None => tier.qualification.to_string(),
    }
}

/// Non-zero reward components joined with " + ".
pub fn earning_description(tier: &Tier) -> String {
    let mut parts = Vec::new();
    if tier.credit_back_percent > 0 {
        parts.push(format!("{}% back on charging", tier.credit_back_percent));
    }
    if tier.annual_credit > 0 {
        parts.push(format!("${} annual credit", tier.annual_credit));
    }
    if tier.birthday_credit > 0 {
        parts.push(format!("${} birthday credit", tier.birthday_credit));
    }
    if tier.seasonal_bonus > 0 {
        parts.push(format!("${} seasonal bonus", tier.seasonal_bonus));
    }
    if parts.is_empty() {
        "No credits earned".to_string()
    } else {
        parts.join(" + ")
    }
}

/// Markup for the results container. Replaces the previous content wholesale.
pub fn results_html(cards: &[TierDisplay]) -> String {
    cards.iter().map(card_html).collect()
}

fn card_html(card: &TierDisplay) -> String {
    let (modifier, badge) = match card.status {
        TierStatus::Qualified => (
            " recommended",
            r#"<div class="calc-status-badge qualified">YOUR STATUS</div>"#,
        ),
        TierStatus::NextGoal => (
            " next-tier",
            r#"<div class="calc-status-badge next-goal">NEXT GOAL</div>"#,
        ),
        TierStatus::None => ("", ""),
    };
    format!(
        concat!(
            r#"<div class="calc-result-card{}" data-tier="{}">"#,
            "{}",
            r#"<div class="calc-tier-name">{}</div>"#,
            r#"<div class="calc-tier-qualification">{}</div>"#,
            r#"<div class="calc-metric">"#,
            r#"<div class="calc-metric-label">Credits Earned</div>"#,
            r#"<div class="calc-metric-value">{}</div>"#,
            "</div>",
            r#"<div class="calc-credit-breakdown">{}</div>"#,
            "</div>"
        ),
        modifier,
        card.key,
        badge,
        card.name,
        card.qualification_text,
        card.total_display,
        card.earning_description,
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn displays(sessions: u32) -> Vec<TierDisplay> {
        tier_displays(&TierCatalog::standard().unwrap(), sessions)
    }

    fn statuses(sessions: u32) -> Vec<TierStatus> {
        displays(sessions).iter().map(|d| d.status).collect()
    }

    #[test]
    fn one_record_per_tier_in_catalog_order() {
        let keys: Vec<TierKey> = displays(12).iter().map(|d| d.key).collect();
        assert_eq!(keys, TierKey::all());
    }

    #[test]
    fn statuses_at_zero_sessions() {
        assert_eq!(
            statuses(0),
            vec![
                TierStatus::Qualified,
                TierStatus::NextGoal,
                TierStatus::None,
                TierStatus::None
            ]
        );
    }

    #[test]
    fn pioneer_points_at_invite_only_goal() {
        assert_eq!(
            statuses(30),
            vec![
                TierStatus::None,
                TierStatus::None,
                TierStatus::Qualified,
                TierStatus::NextGoal
            ]
        );
    }

    #[test]
    fn nine_sessions_qualification_texts() {
        let d = displays(9);
        assert_eq!(d[0].qualification_text, "Automatic");
        assert_eq!(d[1].qualification_text, "10-24 sessions/year • 1 more session to qualify");
        assert_eq!(d[2].qualification_text, "25-49 sessions/year • 16 more sessions to qualify");
        assert_eq!(d[3].qualification_text, "Invite Only");
    }

    #[test]
    fn plural_boundary() {
        let catalog = TierCatalog::standard().unwrap();
        let voyager = &catalog.tiers()[1];
        assert!(qualification_text(voyager, 9, TierStatus::NextGoal).contains("1 more session to"));
        assert!(qualification_text(voyager, 8, TierStatus::NextGoal).contains("2 more sessions to"));
    }

    #[test]
    fn passed_tiers_show_plain_rule() {
        let d = displays(40);
        assert_eq!(d[1].qualification_text, "10-24 sessions/year");
    }

    #[test]
    fn earning_descriptions() {
        let d = displays(0);
        assert_eq!(d[0].earning_description, "No credits earned");
        assert_eq!(d[1].earning_description, "5% back on charging + $25 birthday credit");
        assert_eq!(
            d[2].earning_description,
            "10% back on charging + $100 annual credit + $25 seasonal bonus"
        );
        assert_eq!(d[3].earning_description, "15% back on charging + $500 annual credit");
    }

    #[test]
    fn totals_formatted_as_whole_dollars() {
        let d = displays(25);
        assert_eq!(d[0].total_display, "$0");
        assert_eq!(d[1].total_display, "$75");
        assert_eq!(d[2].total_display, "$225");
        assert_eq!(d[3].total_display, "$650");
    }

    #[test]
    fn render_is_idempotent() {
        assert_eq!(displays(17), displays(17));
        assert_eq!(results_html(&displays(17)), results_html(&displays(17)));
    }

    #[test]
    fn html_marks_qualified_and_next_cards() {
        let html = results_html(&displays(12));
        assert_eq!(html.matches("calc-result-card").count(), 4);
        assert_eq!(html.matches("YOUR STATUS").count(), 1);
        assert_eq!(html.matches("NEXT GOAL").count(), 1);
        assert!(html.contains(r#"<div class="calc-result-card recommended" data-tier="voyager">"#));
        assert!(html.contains(r#"<div class="calc-result-card next-tier" data-tier="pioneer">"#));
        assert!(html.contains(r#"<div class="calc-result-card" data-tier="explorer">"#));
    }

    #[test]
    fn html_contains_card_fields() {
        let html = results_html(&displays(25));
        assert!(html.contains(r#"<div class="calc-metric-value">$225</div>"#));
        assert!(html.contains(r#"<div class="calc-tier-name">Pioneer</div>"#));
        assert!(html.contains("Credits Earned"));
    }
}
