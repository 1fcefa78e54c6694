//! Page behaviour tuning: timings, thresholds and breakpoints.
//!
//! Defaults match the published site. A page may override any subset with
//! a JSON block:
//!
//! ```html
//! <script id="site-config" type="application/json">{"fade_ms": 200}</script>
//! ```

use serde::{Deserialize, Serialize};

use crate::view_toggle::TierView;

/// Element id of the optional JSON override block.
pub const CONFIG_ELEMENT_ID: &str = "site-config";

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    /// Distance (px) above a section's top at which scroll-spy selects it.
    pub scroll_spy_offset: f64,
    /// Grid/table cross-fade duration.
    pub fade_ms: u32,
    /// How long result values keep the `updating` class.
    pub value_pulse_ms: u32,
    pub counter_duration_ms: u32,
    pub counter_tick_ms: u32,
    /// Widest viewport (px) at which the docs sidebar behaves as an overlay.
    pub sidebar_breakpoint: f64,
    /// Used when the page has no `.navbar` to measure.
    pub fallback_nav_height: f64,
    pub reveal_threshold: f64,
    pub reveal_root_margin: String,
    pub stats_threshold: f64,
    pub initial_view: TierView,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            scroll_spy_offset: 150.0,
            fade_ms: 300,
            value_pulse_ms: 300,
            counter_duration_ms: 1500,
            counter_tick_ms: 16, // ~60fps
            sidebar_breakpoint: 1024.0,
            fallback_nav_height: 80.0,
            reveal_threshold: 0.1,
            reveal_root_margin: "0px 0px -50px 0px".to_string(),
            stats_threshold: 0.3,
            initial_view: TierView::Grid,
        }
    }
}

impl SiteConfig {
    /// Parse an override block. Missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }
}
