//! Interaction state for the dropdown selector.
//!
//! `SelectState` holds the open flag and the most recent locally chosen
//! value. The displayed label is derived through `display_text`, which
//! prefers the externally supplied selection, so later updates to the
//! owner's value are always reflected on the next render.

/// Open/closed and chosen-value state for one dropdown instance.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct SelectState {
    /// Whether the option list is visible.
    pub is_open: bool,
    chosen: Option<String>,
}

impl SelectState {
    /// A closed state with nothing chosen.
    pub fn new() -> Self {
        Self::default()
    }

    /// Invert the open flag.
    pub fn toggle(&mut self) {
        self.is_open = !self.is_open;
    }

    /// Force the option list closed.
    pub fn close(&mut self) {
        self.is_open = false;
    }

    /// Record a chosen value and close the option list.
    pub fn select(&mut self, value: impl Into<String>) {
        self.chosen = Some(value.into());
        self.is_open = false;
    }

    /// The most recent locally chosen value, if any.
    pub fn chosen(&self) -> Option<&str> {
        self.chosen.as_deref()
    }

    /// Label for the trigger. The external `selected_value` wins whenever
    /// present; the local choice covers the window where the owner has not
    /// reflected a selection back; otherwise the placeholder.
    pub fn display_text<'a>(
        &'a self,
        selected_value: Option<&'a str>,
        placeholder: &'a str,
    ) -> &'a str {
        selected_value
            .or_else(|| self.chosen.as_deref())
            .unwrap_or(placeholder)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fresh_state_shows_placeholder() {
        let state = SelectState::new();
        assert!(!state.is_open);
        assert_eq!(state.chosen(), None);
        assert_eq!(state.display_text(None, "Pick one"), "Pick one");
    }

    #[test]
    fn test_toggle_round_trip() {
        let mut state = SelectState::new();
        state.toggle();
        assert!(state.is_open);
        state.toggle();
        assert!(!state.is_open);
    }

    #[test]
    fn test_select_records_value_and_closes() {
        let mut state = SelectState::new();
        state.toggle();
        state.select("B");
        assert!(!state.is_open);
        assert_eq!(state.chosen(), Some("B"));
        assert_eq!(state.display_text(None, "Pick one"), "B");
    }

    #[test]
    fn test_close_when_already_closed_changes_nothing() {
        let mut state = SelectState::new();
        let before = state.clone();
        state.close();
        assert_eq!(state, before);
    }

    #[test]
    fn test_close_discards_nothing_but_the_open_flag() {
        let mut state = SelectState::new();
        state.select("A");
        state.toggle();
        state.close();
        assert!(!state.is_open);
        assert_eq!(state.chosen(), Some("A"));
    }

    #[test]
    fn test_reselect_overwrites_previous_choice() {
        let mut state = SelectState::new();
        state.select("A");
        state.toggle();
        state.select("B");
        assert_eq!(state.chosen(), Some("B"));
        assert!(!state.is_open);
    }

    #[test]
    fn test_external_value_outranks_local_choice() {
        let mut state = SelectState::new();
        state.select("B");
        assert_eq!(state.display_text(Some("C"), "Pick one"), "C");
    }

    #[test]
    fn test_external_updates_are_reflected() {
        let state = SelectState::new();
        assert_eq!(state.display_text(Some("A"), "Pick one"), "A");
        assert_eq!(state.display_text(Some("C"), "Pick one"), "C");
    }

    #[test]
    fn test_selection_scenario() {
        // options A, B, C; placeholder "Pick one"; no external selection
        let mut state = SelectState::new();
        assert_eq!(state.display_text(None, "Pick one"), "Pick one");
        state.toggle();
        assert!(state.is_open);
        state.select("B");
        assert!(!state.is_open);
        assert_eq!(state.display_text(None, "Pick one"), "B");
    }
}
