//! Fade-in-on-scroll styling for tier and benefit cards.

/// Cards that fade in the first time they enter the viewport.
pub const REVEAL_SELECTOR: &str = ".tier-card, .benefit-card";

/// Inline styles applied before the card has been seen.
pub const HIDDEN_STYLE: &[(&str, &str)] = &[
    ("opacity", "0"),
    ("transform", "translateY(30px)"),
    ("transition", "opacity 0.6s ease-out, transform 0.6s ease-out"),
];

/// Inline styles applied once the card intersects.
pub const SHOWN_STYLE: &[(&str, &str)] = &[("opacity", "1"), ("transform", "translateY(0)")];

/// Tracks which cards have been revealed, by index in document order.
///
/// Reveal is one-way: a card that scrolls back out keeps its shown style.
pub struct RevealSet {
    revealed: Vec<bool>,
}

impl RevealSet {
    pub fn new(count: usize) -> Self {
        Self {
            revealed: vec![false; count],
        }
    }

    /// Intersection update for card `index`. Returns true when the card
    /// should switch to [`SHOWN_STYLE`] now.
    pub fn on_intersect(&mut self, index: usize, is_intersecting: bool) -> bool {
        if !is_intersecting {
            return false;
        }
        match self.revealed.get_mut(index) {
            Some(seen) if !*seen => {
                *seen = true;
                true
            }
            _ => false,
        }
    }

    #[cfg(test)]
    pub fn revealed_count(&self) -> usize {
        self.revealed.iter().filter(|r| **r).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reveals_once() {
        let mut set = RevealSet::new(3);
        assert!(set.on_intersect(1, true));
        assert!(!set.on_intersect(1, true));
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn leaving_viewport_does_not_hide() {
        let mut set = RevealSet::new(1);
        assert!(!set.on_intersect(0, false));
        assert!(set.on_intersect(0, true));
        assert!(!set.on_intersect(0, false));
        assert_eq!(set.revealed_count(), 1);
    }

    #[test]
    fn unknown_index_ignored() {
        let mut set = RevealSet::new(2);
        assert!(!set.on_intersect(5, true));
        assert_eq!(set.revealed_count(), 0);
    }

    #[test]
    fn hidden_and_shown_touch_same_properties() {
        for (prop, _) in SHOWN_STYLE {
            assert!(HIDDEN_STYLE.iter().any(|(p, _)| p == prop));
        }
    }
}
