//! Per-panel hover flags, owned by the rendering layer.
//!
//! The core scene description is immutable; the only mutable rendering state
//! is this table of booleans keyed by panel index. It is toggled by the
//! renderer's pointer-enter/pointer-leave events and used solely to pick a
//! panel's fill color. Nothing here is persisted or shared across panels.

use crate::scene::theme;

#[derive(Debug, Clone)]
pub struct HoverState {
    hovered: Vec<bool>,
}

impl HoverState {
    /// Creates the table with every panel un-hovered.
    pub fn new(panel_count: usize) -> Self {
        Self {
            hovered: vec![false; panel_count],
        }
    }

    /// Marks a panel hovered. Out-of-range indices are ignored.
    pub fn pointer_enter(&mut self, panel: usize) {
        if let Some(flag) = self.hovered.get_mut(panel) {
            *flag = true;
        }
    }

    /// Clears a panel's hover flag. Out-of-range indices are ignored.
    pub fn pointer_leave(&mut self, panel: usize) {
        if let Some(flag) = self.hovered.get_mut(panel) {
            *flag = false;
        }
    }

    pub fn is_hovered(&self, panel: usize) -> bool {
        self.hovered.get(panel).copied().unwrap_or(false)
    }

    /// Fill color for a panel quad: the highlight while hovered, the base
    /// otherwise. Both carry the panel opacity.
    pub fn fill_color(&self, panel: usize) -> [f32; 4] {
        let hex = if self.is_hovered(panel) {
            theme::PANEL_HOVER_HEX
        } else {
            theme::PANEL_BASE_HEX
        };
        theme::rgba(hex, theme::PANEL_OPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn enter_and_leave_toggle_a_single_panel() {
        let mut hover = HoverState::new(5);
        let base = hover.fill_color(2);

        hover.pointer_enter(2);
        assert!(hover.is_hovered(2));
        assert_ne!(hover.fill_color(2), base);

        hover.pointer_leave(2);
        assert!(!hover.is_hovered(2));
        assert_eq!(hover.fill_color(2), base);
    }

    #[test]
    fn panels_hover_independently() {
        let mut hover = HoverState::new(5);

        hover.pointer_enter(1);
        hover.pointer_enter(3);
        hover.pointer_leave(3);

        assert!(hover.is_hovered(1));
        assert!(!hover.is_hovered(3));
        assert!(!hover.is_hovered(0));
    }

    #[test]
    fn out_of_range_indices_are_ignored() {
        let mut hover = HoverState::new(2);

        hover.pointer_enter(9);
        assert!(!hover.is_hovered(9));

        // An unknown panel still reads as the base fill.
        assert_eq!(
            hover.fill_color(9),
            theme::rgba(theme::PANEL_BASE_HEX, theme::PANEL_OPACITY)
        );
    }
}
