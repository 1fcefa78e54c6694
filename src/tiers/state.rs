//! Loyalty tier definitions and the catalog they live in.

use std::fmt;

use thiserror::Error;

/// Average charge per session in whole dollars ($0.50/kWh * 80 kWh).
pub const AVERAGE_SESSION_CHARGE: f64 = 40.0;

/// Tier identifiers, in progression order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TierKey {
    Explorer,
    Voyager,
    Pioneer,
    Trailblazer,
}

impl TierKey {
    /// All tier keys in progression order.
    pub fn all() -> &'static [TierKey] {
        &[
            TierKey::Explorer,
            TierKey::Voyager,
            TierKey::Pioneer,
            TierKey::Trailblazer,
        ]
    }

    /// Identifier used in markup (`data-tier`) and logs.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierKey::Explorer => "explorer",
            TierKey::Voyager => "voyager",
            TierKey::Pioneer => "pioneer",
            TierKey::Trailblazer => "trailblazer",
        }
    }

    /// The tier after this one in the progression, if any.
    pub fn next(&self) -> Option<TierKey> {
        let all = Self::all();
        let idx = all.iter().position(|k| k == self)?;
        all.get(idx + 1).copied()
    }
}

impl fmt::Display for TierKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum TierError {
    #[error("unknown tier `{0}`")]
    UnknownTier(String),
}

#[derive(Debug, Error, PartialEq)]
pub enum CatalogError {
    #[error("tier catalog is empty")]
    Empty,
    #[error("tier `{0}` appears more than once")]
    Duplicate(TierKey),
    #[error("tier `{later}` requires fewer sessions than `{earlier}`")]
    OutOfOrder { earlier: TierKey, later: TierKey },
    #[error("no tier qualifies at zero sessions")]
    NoEntryTier,
}

/// A single loyalty tier and its reward rules.
#[derive(Clone, Debug, PartialEq)]
pub struct Tier {
    pub key: TierKey,
    pub name: &'static str,
    /// Human-readable qualification rule shown on the card.
    pub qualification: &'static str,
    /// Percentage (0-100) of charging spend returned as credit.
    pub credit_back_percent: u8,
    pub annual_credit: u32,
    pub birthday_credit: u32,
    pub seasonal_bonus: u32,
    /// Minimum sessions to auto-qualify. `None` = invite only.
    pub sessions_required: Option<u32>,
}

impl Tier {
    /// Sum of the fixed bonuses.
    pub fn bonus_total(&self) -> u32 {
        self.annual_credit + self.birthday_credit + self.seasonal_bonus
    }
}

/// Ordered, validated set of tiers.
#[derive(Clone, Debug)]
pub struct TierCatalog {
    tiers: Vec<Tier>,
}

impl TierCatalog {
    /// Build a catalog, checking that tiers ascend by `sessions_required`
    /// with invite-only tiers last, and that some tier needs zero sessions.
    pub fn new(tiers: Vec<Tier>) -> Result<Self, CatalogError> {
        if tiers.is_empty() {
            return Err(CatalogError::Empty);
        }
        for (i, tier) in tiers.iter().enumerate() {
            if tiers[..i].iter().any(|t| t.key == tier.key) {
                return Err(CatalogError::Duplicate(tier.key));
            }
        }
        for pair in tiers.windows(2) {
            let in_order = match (pair[0].sessions_required, pair[1].sessions_required) {
                (Some(a), Some(b)) => a < b,
                (Some(_), None) => true,
                (None, _) => false,
            };
            if !in_order {
                return Err(CatalogError::OutOfOrder {
                    earlier: pair[0].key,
                    later: pair[1].key,
                });
            }
        }
        if tiers[0].sessions_required != Some(0) {
            return Err(CatalogError::NoEntryTier);
        }
        Ok(Self { tiers })
    }

    /// The charging-network loyalty program as published on the site.
    pub fn standard() -> Result<Self, CatalogError> {
        Self::new(standard_tiers())
    }

    pub fn tiers(&self) -> &[Tier] {
        &self.tiers
    }

    pub fn get(&self, key: TierKey) -> Result<&Tier, TierError> {
        self.tiers
            .iter()
            .find(|t| t.key == key)
            .ok_or_else(|| TierError::UnknownTier(key.to_string()))
    }
}

fn standard_tiers() -> Vec<Tier> {
    vec![
        Tier {
            key: TierKey::Explorer,
            name: "Explorer",
            qualification: "Automatic",
            credit_back_percent: 0,
            annual_credit: 0,
            birthday_credit: 0,
            seasonal_bonus: 0,
            sessions_required: Some(0),
        },
        Tier {
            key: TierKey::Voyager,
            name: "Voyager",
            qualification: "10-24 sessions/year",
            credit_back_percent: 5,
            annual_credit: 0,
            birthday_credit: 25,
            seasonal_bonus: 0,
            sessions_required: Some(10),
        },
        Tier {
            key: TierKey::Pioneer,
            name: "Pioneer",
            qualification: "25-49 sessions/year",
            credit_back_percent: 10,
            annual_credit: 100,
            birthday_credit: 0,
            seasonal_bonus: 25, // summer bonus
            sessions_required: Some(25),
        },
        Tier {
            key: TierKey::Trailblazer,
            name: "Trailblazer",
            qualification: "Invite Only",
            credit_back_percent: 15,
            annual_credit: 500,
            birthday_credit: 0,
            seasonal_bonus: 0,
            sessions_required: None,
        },
    ]
}
