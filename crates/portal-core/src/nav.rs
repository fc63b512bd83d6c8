//! Open/closed state of the slide-out navigation menu.

/// Inline style for one bar of the hamburger icon.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct BarStyle {
    pub transform: &'static str,
    pub opacity: &'static str,
}

const OPEN_BARS: [BarStyle; 3] = [
    BarStyle {
        transform: "rotate(45deg) translate(5px, 5px)",
        opacity: "1",
    },
    BarStyle {
        transform: "none",
        opacity: "0",
    },
    BarStyle {
        transform: "rotate(-45deg) translate(7px, -6px)",
        opacity: "1",
    },
];

const CLOSED_BARS: [BarStyle; 3] = [BarStyle {
    transform: "none",
    opacity: "1",
}; 3];

/// Bar styles that draw a cross when the menu is open and three lines when closed.
#[inline]
pub fn hamburger_bars(open: bool) -> [BarStyle; 3] {
    if open {
        OPEN_BARS
    } else {
        CLOSED_BARS
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct NavState {
    pub open: bool,
}

impl NavState {
    pub fn toggle(&mut self) -> bool {
        self.open = !self.open;
        self.open
    }

    pub fn close(&mut self) {
        self.open = false;
    }

    /// Escape closes an open menu. Returns whether the state changed.
    pub fn on_escape(&mut self) -> bool {
        let was_open = self.open;
        self.open = false;
        was_open
    }

    /// A click landing outside both the menu and its toggle closes the menu.
    pub fn on_outside_click(&mut self, inside_nav: bool, inside_hamburger: bool) -> bool {
        if self.open && !inside_nav && !inside_hamburger {
            self.open = false;
            return true;
        }
        false
    }
}

/// Whether a click dismisses a modal popup. Only clicks that land on the
/// popup's own backdrop count; clicks on its content bubble up with a
/// different target and leave it open.
#[inline]
pub fn backdrop_click_dismisses(target_is_backdrop: bool, popup_visible: bool) -> bool {
    target_is_backdrop && popup_visible
}
