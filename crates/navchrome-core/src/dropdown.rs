//! Open/close state shared by the header dropdowns.

/// State of a click-to-open dropdown that closes on an outside press.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DropdownState {
    open: bool,
}

impl DropdownState {
    /// A closed dropdown.
    #[must_use]
    pub const fn new() -> Self {
        Self { open: false }
    }

    /// Whether the panel is showing.
    #[must_use]
    pub const fn is_open(self) -> bool {
        self.open
    }

    /// Flip the panel.
    pub const fn toggle(&mut self) {
        self.open = !self.open;
    }

    /// Hide the panel.
    pub const fn close(&mut self) {
        self.open = false;
    }

    /// A mouse press happened somewhere in the document.
    ///
    /// Presses inside the dropdown root are ignored; anything else closes it.
    pub const fn handle_outside_press(&mut self, inside: bool) {
        if !inside {
            self.open = false;
        }
    }

    /// Value for the trigger's `aria-expanded` attribute.
    #[must_use]
    pub const fn aria_expanded(self) -> &'static str {
        if self.open { "true" } else { "false" }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle() {
        let mut state = DropdownState::new();
        assert!(!state.is_open());
        state.toggle();
        assert!(state.is_open());
        assert_eq!(state.aria_expanded(), "true");
        state.toggle();
        assert!(!state.is_open());
        assert_eq!(state.aria_expanded(), "false");
    }

    #[test]
    fn test_outside_press_closes() {
        let mut state = DropdownState::new();
        state.toggle();
        state.handle_outside_press(true);
        assert!(state.is_open());
        state.handle_outside_press(false);
        assert!(!state.is_open());
    }

    #[test]
    fn test_close_is_idempotent() {
        let mut state = DropdownState::new();
        state.close();
        state.close();
        assert!(!state.is_open());
    }
}
