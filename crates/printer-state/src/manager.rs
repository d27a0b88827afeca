//! Pairs a `PrinterState` with its own bounded undo log.
//!
//! `PrinterState`'s own methods (`move_to`, `form_feed`, ...) never record
//! anything — they're the primitive state transitions the render/bitmap
//! pipelines call on every byte, where paying for a snapshot each time
//! would be wasted work. `PrinterStateManager` is the separate owner a test
//! harness reaches for instead: every mutation goes through `update_state`,
//! which snapshots the state first, so a harness can drive a sequence of
//! operations and `undo()` back to any point in it.

use escp_style::Style;
use escp_types::{Dots, Paper};

use crate::history::StateHistory;
use crate::state::PrinterState;

#[derive(Debug, Clone)]
pub struct PrinterStateManager {
    state: PrinterState,
    history: StateHistory,
}

impl PrinterStateManager {
    pub fn new(paper: Paper) -> Self {
        Self { state: PrinterState::new(paper), history: StateHistory::new() }
    }

    pub fn state(&self) -> &PrinterState {
        &self.state
    }

    /// Snapshots the current state, then applies `f` to it. Every named
    /// wrapper below is built on this, so no mutating path can forget to
    /// record its "before" snapshot.
    pub fn update_state(&mut self, f: impl FnOnce(&mut PrinterState)) {
        self.history.push(self.state.clone());
        f(&mut self.state);
    }

    /// Replaces the active style wholesale (`updateFont`/`updateFontStyle`
    /// in spec terms — a typeface, weight, or CPI change all land here).
    pub fn update_style(&mut self, f: impl FnOnce(&mut Style)) {
        self.update_state(|s| f(&mut s.style));
    }

    pub fn move_to(&mut self, x: Dots, y: Dots) {
        self.update_state(|s| s.move_to(x, y));
    }

    pub fn move_by(&mut self, dx: Dots, dy: Dots) {
        self.update_state(|s| s.move_by(dx, dy));
    }

    pub fn advance_x(&mut self, dots: Dots) {
        self.update_state(|s| s.advance_x(dots));
    }

    pub fn carriage_return(&mut self) {
        self.update_state(|s| s.carriage_return());
    }

    pub fn line_feed(&mut self) {
        self.update_state(|s| s.line_feed());
    }

    pub fn new_line(&mut self) {
        self.update_state(|s| s.new_line());
    }

    pub fn form_feed(&mut self) {
        self.update_state(|s| s.form_feed());
    }

    /// Restores the most recent snapshot, or does nothing if the log is
    /// empty.
    pub fn undo(&mut self) -> Option<PrinterState> {
        let restored = self.history.undo()?;
        self.state = restored.clone();
        Some(restored)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use escp_types::Paper;

    #[test]
    fn undo_restores_the_state_from_immediately_before_the_mutation() {
        let mut mgr = PrinterStateManager::new(Paper::default());
        let before = mgr.state().clone();

        mgr.move_to(500, 600);
        assert_ne!(mgr.state().cursor, before.cursor);

        let restored = mgr.undo().unwrap();
        assert_eq!(restored, before);
        assert_eq!(mgr.state(), &before);
    }

    #[test]
    fn undo_with_an_empty_log_does_nothing() {
        let mut mgr = PrinterStateManager::new(Paper::default());
        assert_eq!(mgr.undo(), None);
    }

    #[test]
    fn snapshot_restore_round_trips_map_valued_fields() {
        let mut mgr = PrinterStateManager::new(Paper::default());
        mgr.update_state(|s| {
            s.graphics.reassigned_modes.insert(1, 33);
        });
        let snapshot = mgr.state().clone();

        mgr.update_state(|s| {
            s.graphics.reassigned_modes.insert(2, 40);
        });
        assert_eq!(mgr.state().graphics.reassigned_modes.len(), 2);

        let restored = mgr.undo().unwrap();
        assert_eq!(restored.graphics.reassigned_modes, snapshot.graphics.reassigned_modes);
        assert_eq!(restored.graphics.reassigned_modes.len(), 1);
    }

    #[test]
    fn two_undos_unwind_two_mutations_in_order() {
        let mut mgr = PrinterStateManager::new(Paper::default());
        mgr.move_to(100, 100);
        let after_first = mgr.state().clone();
        mgr.move_to(200, 200);

        assert_eq!(mgr.undo().unwrap(), after_first);
        assert_eq!(mgr.state(), &after_first);
    }
}
