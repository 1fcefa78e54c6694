//! Charging-rewards calculator: slider-driven tier comparison.

pub mod logic;
pub mod render;
pub mod state;

use crate::input;

use render::TierDisplay;
use state::TierCatalog;

/// One full redraw of the calculator: counter text plus result cards.
#[derive(Clone, Debug, PartialEq)]
pub struct CalculatorRender {
    pub count_text: String,
    pub cards: Vec<TierDisplay>,
    pub html: String,
}

/// Owns the session count currently shown by the calculator.
pub struct Calculator {
    catalog: TierCatalog,
    sessions: u32,
}

impl Calculator {
    pub fn new(catalog: TierCatalog, sessions: u32) -> Self {
        Self { catalog, sessions }
    }

    /// Build from the slider's initial `value`; unparsable values start at zero.
    pub fn from_slider_value(catalog: TierCatalog, raw: &str) -> Self {
        Self::new(catalog, input::parse_session_count(raw).unwrap_or(0))
    }

    pub fn sessions(&self) -> u32 {
        self.sessions
    }

    /// Apply a slider `input` event. Returns `None` when the value has no
    /// leading digits, leaving the previous render on screen.
    pub fn handle_input(&mut self, raw: &str) -> Option<CalculatorRender> {
        self.sessions = input::parse_session_count(raw)?;
        Some(self.render())
    }

    pub fn render(&self) -> CalculatorRender {
        let cards = render::tier_displays(&self.catalog, self.sessions);
        let html = render::results_html(&cards);
        CalculatorRender {
            count_text: self.sessions.to_string(),
            cards,
            html,
        }
    }
}
