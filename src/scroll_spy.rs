//! Scroll-spy for the docs sidebar: highlight the nav link of the section
//! currently being read.

use thiserror::Error;

/// A page section and its top offset in document coordinates.
#[derive(Clone, Debug, PartialEq)]
pub struct Section {
    pub id: String,
    pub top: f64,
}

#[derive(Debug, Error, PartialEq)]
pub enum ScrollSpyError {
    #[error("section `{later}` (top {later_top}) sits above `{earlier}` (top {earlier_top})")]
    OutOfOrder {
        earlier: String,
        earlier_top: f64,
        later: String,
        later_top: f64,
    },
    #[error("measured {got} section offsets for {expected} sections")]
    LengthMismatch { expected: usize, got: usize },
}

pub struct ScrollSpy {
    /// Sorted by `top`, ascending.
    sections: Vec<Section>,
    /// How far above a section's top it already counts as current.
    offset: f64,
    active: Option<String>,
}

impl ScrollSpy {
    /// Sections must already be in document order (ascending `top`).
    pub fn new(sections: Vec<Section>, offset: f64) -> Result<Self, ScrollSpyError> {
        check_order(&sections)?;
        Ok(Self {
            sections,
            offset,
            active: None,
        })
    }

    /// Sort sections by `top` first. Ties keep their given order.
    pub fn sorted(mut sections: Vec<Section>, offset: f64) -> Self {
        sections.sort_by(|a, b| a.top.total_cmp(&b.top));
        Self {
            sections,
            offset,
            active: None,
        }
    }

    /// Replace section offsets after a layout change. Ids and order are kept;
    /// the new tops must still ascend.
    pub fn set_tops(&mut self, tops: &[f64]) -> Result<(), ScrollSpyError> {
        if tops.len() != self.sections.len() {
            return Err(ScrollSpyError::LengthMismatch {
                expected: self.sections.len(),
                got: tops.len(),
            });
        }
        let mut updated = self.sections.clone();
        for (section, &top) in updated.iter_mut().zip(tops) {
            section.top = top;
        }
        check_order(&updated)?;
        self.sections = updated;
        Ok(())
    }

    pub fn sections(&self) -> &[Section] {
        &self.sections
    }

    pub fn active(&self) -> Option<&str> {
        self.active.as_deref()
    }

    /// Recompute the active section for `scroll_y`: the lowest section whose
    /// top minus the offset has been scrolled past, or none above the first.
    pub fn on_scroll(&mut self, scroll_y: f64) -> Option<&str> {
        self.active = self
            .sections
            .iter()
            .filter(|s| scroll_y >= s.top - self.offset)
            .last()
            .map(|s| s.id.clone());
        self.active()
    }

    /// Whether a nav link `href` should carry the `active` class.
    pub fn is_link_active(&self, href: &str) -> bool {
        match (&self.active, href.strip_prefix('#')) {
            (Some(active), Some(id)) => active == id,
            _ => false,
        }
    }
}

fn check_order(sections: &[Section]) -> Result<(), ScrollSpyError> {
    for pair in sections.windows(2) {
        if pair[1].top < pair[0].top {
            return Err(ScrollSpyError::OutOfOrder {
                earlier: pair[0].id.clone(),
                earlier_top: pair[0].top,
                later: pair[1].id.clone(),
                later_top: pair[1].top,
            });
        }
    }
    Ok(())
}
