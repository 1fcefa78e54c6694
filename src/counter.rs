//! Animated statistics counter: counts from zero up to a target in fixed ticks.

use crate::tiers::logic::format_number;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum CounterPhase {
    Idle,
    Animating,
    Settled,
}

/// Counter state machine driven by an interval timer.
///
/// `Idle → Animating` on [`start`](Self::start), `Animating → Settled` once the
/// target is reached; the caller clears its timer when [`tick`](Self::tick)
/// reports `Settled`. Calling `start` again restarts from zero.
#[derive(Clone, Debug)]
pub struct CounterAnimation {
    target: u64,
    suffix: String,
    /// Amount added per tick.
    increment: f64,
    current: f64,
    phase: CounterPhase,
}

impl CounterAnimation {
    pub fn new(target: u64, suffix: impl Into<String>, duration_ms: u32, tick_ms: u32) -> Self {
        let steps = if tick_ms == 0 {
            1.0
        } else {
            (f64::from(duration_ms) / f64::from(tick_ms)).max(1.0)
        };
        Self {
            target,
            suffix: suffix.into(),
            increment: target as f64 / steps,
            current: 0.0,
            phase: CounterPhase::Idle,
        }
    }

    pub fn phase(&self) -> CounterPhase {
        self.phase
    }

    pub fn start(&mut self) {
        self.current = 0.0;
        self.phase = CounterPhase::Animating;
    }

    /// Advance one tick and return the text to display, or `None` when not animating.
    pub fn tick(&mut self) -> Option<String> {
        if self.phase != CounterPhase::Animating {
            return None;
        }
        self.current += self.increment;
        if self.current >= self.target as f64 {
            self.phase = CounterPhase::Settled;
            Some(self.final_text())
        } else {
            Some(format!("{}{}", format_number(self.current), self.suffix))
        }
    }

    pub fn final_text(&self) -> String {
        format!("{}{}", format_number(self.target as f64), self.suffix)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run_to_end(c: &mut CounterAnimation) -> Vec<String> {
        let mut frames = Vec::new();
        while let Some(text) = c.tick() {
            frames.push(text);
            assert!(frames.len() < 10_000, "counter never settled");
        }
        frames
    }

    #[test]
    fn idle_until_started() {
        let mut c = CounterAnimation::new(100, "", 1500, 16);
        assert_eq!(c.phase(), CounterPhase::Idle);
        assert_eq!(c.tick(), None);
    }

    #[test]
    fn counts_up_and_settles_on_exact_target() {
        let mut c = CounterAnimation::new(15_000, "+", 1500, 16);
        c.start();
        let frames = run_to_end(&mut c);
        assert_eq!(c.phase(), CounterPhase::Settled);
        assert_eq!(frames.last().unwrap(), "15,000+");
        // 1500ms / 16ms = 93.75 steps → 94 ticks
        assert_eq!(frames.len(), 94);
        assert_eq!(frames[0], "160+");
    }

    #[test]
    fn frames_never_decrease() {
        let mut c = CounterAnimation::new(987, "%", 1500, 16);
        c.start();
        let values: Vec<u64> = run_to_end(&mut c)
            .iter()
            .map(|f| f.trim_end_matches('%').replace(',', "").parse().unwrap())
            .collect();
        assert!(values.windows(2).all(|w| w[0] <= w[1]));
        assert_eq!(*values.last().unwrap(), 987);
    }

    #[test]
    fn zero_target_settles_immediately() {
        let mut c = CounterAnimation::new(0, "", 1500, 16);
        c.start();
        assert_eq!(c.tick(), Some("0".to_string()));
        assert_eq!(c.phase(), CounterPhase::Settled);
        assert_eq!(c.tick(), None);
    }

    #[test]
    fn restart_resets_progress() {
        let mut c = CounterAnimation::new(1_000, "", 160, 16);
        c.start();
        c.tick();
        c.tick();
        c.start();
        assert_eq!(c.tick(), Some("100".to_string()));
    }

    #[test]
    fn zero_tick_interval_finishes_in_one_step() {
        let mut c = CounterAnimation::new(50, "", 1500, 0);
        c.start();
        assert_eq!(c.tick(), Some("50".to_string()));
    }
}
