//! Grid/table switch for the tier comparison, with a timed cross-fade.
//!
//! A click produces a [`Transition`] (button classes + fade-out start). The
//! caller schedules [`ViewToggle::complete`] after the fade duration with the
//! transition's generation; completions from superseded clicks are dropped.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TierView {
    Grid,
    Table,
}

impl TierView {
    /// Value of the toggle button's `data-view` attribute.
    pub fn as_str(&self) -> &'static str {
        match self {
            TierView::Grid => "grid",
            TierView::Table => "table",
        }
    }

    pub fn other(&self) -> TierView {
        match self {
            TierView::Grid => TierView::Table,
            TierView::Table => TierView::Grid,
        }
    }

    /// Inline `display` value when this view is shown.
    pub fn display(&self) -> &'static str {
        match self {
            TierView::Grid => "grid",
            TierView::Table => "block",
        }
    }
}

impl FromStr for TierView {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "grid" => Ok(TierView::Grid),
            "table" => Ok(TierView::Table),
            _ => Err(()),
        }
    }
}

/// Immediate effects of a toggle click.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Transition {
    pub activate: TierView,
    /// View that receives the `fade-out` class now.
    pub fade_out: TierView,
    pub generation: u64,
}

/// Effects once the fade has finished.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Settle {
    /// View to set `display: none`, if it differs from the one being shown.
    pub hide: Option<TierView>,
    pub show: TierView,
}

pub struct ViewToggle {
    /// View currently on screen.
    visible: TierView,
    /// View selected by the last click (active button).
    target: TierView,
    generation: u64,
}

impl ViewToggle {
    pub fn new(initial: TierView) -> Self {
        Self {
            visible: initial,
            target: initial,
            generation: 0,
        }
    }

    /// Page state to apply at startup, before any click: the initial view
    /// shown and the other one hidden.
    pub fn settled(&self) -> Settle {
        Settle {
            hide: Some(self.visible.other()),
            show: self.visible,
        }
    }

    #[cfg(test)]
    pub fn visible(&self) -> TierView {
        self.visible
    }

    #[cfg(test)]
    pub fn target(&self) -> TierView {
        self.target
    }

    #[cfg(test)]
    pub fn is_fading(&self) -> bool {
        self.visible != self.target
    }

    /// Toggle button for `view` clicked. Re-clicking the selected view is a no-op.
    pub fn click(&mut self, view: TierView) -> Option<Transition> {
        if view == self.target {
            return None;
        }
        self.target = view;
        self.generation += 1;
        Some(Transition {
            activate: view,
            fade_out: self.visible,
            generation: self.generation,
        })
    }

    /// Fade timer for `generation` fired.
    pub fn complete(&mut self, generation: u64) -> Option<Settle> {
        if generation != self.generation {
            return None;
        }
        let hide = (self.visible != self.target).then_some(self.visible);
        self.visible = self.target;
        Some(Settle {
            hide,
            show: self.target,
        })
    }
}
