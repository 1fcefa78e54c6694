//! Open/closed state for the mobile nav menu and the docs sidebar.

/// When clicks outside the menu (and outside its toggle button) close it.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum OutsideClose {
    /// Any outside click closes the menu.
    Always,
    /// Only when the viewport is at most this wide (px).
    AtOrBelow(f64),
}

/// Where a document click landed, relative to the menu.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ClickOrigin {
    pub inside_menu: bool,
    pub inside_toggle: bool,
}

pub struct Menu {
    open: bool,
    outside_close: OutsideClose,
}

impl Menu {
    pub fn new(outside_close: OutsideClose) -> Self {
        Self {
            open: false,
            outside_close,
        }
    }

    #[cfg(test)]
    pub fn is_open(&self) -> bool {
        self.open
    }

    /// Toggle button clicked. Returns the new state.
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    /// Force closed. Returns true if the menu was open.
    pub fn close(&mut self) -> bool {
        std::mem::replace(&mut self.open, false)
    }

    fn narrow_enough(&self, viewport_width: f64) -> bool {
        match self.outside_close {
            OutsideClose::Always => true,
            OutsideClose::AtOrBelow(breakpoint) => viewport_width <= breakpoint,
        }
    }

    /// Document click. Returns true if the menu closed because of it.
    pub fn on_document_click(&mut self, origin: ClickOrigin, viewport_width: f64) -> bool {
        if origin.inside_menu || origin.inside_toggle || !self.narrow_enough(viewport_width) {
            return false;
        }
        self.close()
    }

    /// A link inside the page was followed. Returns true if the menu closed.
    pub fn on_navigate(&mut self, viewport_width: f64) -> bool {
        if !self.narrow_enough(viewport_width) {
            return false;
        }
        self.close()
    }
}
