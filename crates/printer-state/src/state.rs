use std::collections::HashMap;

use escp_style::{Align, Style};
use escp_types::{Dots, Paper};

/// The print head's current position, relative to the top-left of the
/// physical sheet (not the printable area).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Point {
    pub x: Dots,
    pub y: Dots,
}

/// Bit-image mode reassignment table (`ESC ?`): maps a bit-image mode
/// selector to the mode it has been redefined to behave as.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GraphicsState {
    pub mode: u8,
    pub reassigned_modes: HashMap<u8, u8>,
}

/// Everything about the physical printer that a command sequence can
/// change: cursor position, active style, page geometry and the handful
/// of global modes (tabs, character table, unit scale) that persist across
/// individual print calls.
#[derive(Debug, Clone, PartialEq)]
pub struct PrinterState {
    pub cursor: Point,
    pub page: u32,
    pub paper: Paper,
    pub style: Style,
    pub line_spacing: Dots,
    pub char_table: u8,
    pub international_charset: u8,
    pub justification: Align,
    pub unidirectional: bool,
    pub horizontal_tabs: Vec<Dots>,
    pub vertical_tabs: Vec<Dots>,
    pub units: u8,
    pub graphics: GraphicsState,
}

impl PrinterState {
    /// A freshly initialized printer: cursor at the top-left of the
    /// printable area, page 1, default style and 1/6" line spacing.
    pub fn new(paper: Paper) -> Self {
        let area = paper.printable_area();
        Self {
            cursor: Point { x: area.x, y: area.y },
            page: 1,
            paper,
            style: Style::default(),
            line_spacing: 60,
            char_table: 0,
            international_charset: 0,
            justification: Align::Left,
            unidirectional: false,
            horizontal_tabs: Vec::new(),
            vertical_tabs: Vec::new(),
            units: 0,
            graphics: GraphicsState::default(),
        }
    }

    /// Moves the cursor to `(x, y)`, clamped to the paper's printable
    /// margins — a position outside them is a layout bug, not something
    /// the physical print head can reach, so it's clipped rather than
    /// propagated.
    pub fn move_to(&mut self, x: Dots, y: Dots) {
        let area = self.paper.printable_area();
        self.cursor = Point { x: x.clamp(area.x, area.right()), y: y.clamp(area.y, area.bottom()) };
    }

    pub fn move_by(&mut self, dx: Dots, dy: Dots) {
        self.cursor.x += dx;
        self.cursor.y += dy;
    }

    /// Advances the cursor horizontally, e.g. after printing a character
    /// at the current HMI.
    pub fn advance_x(&mut self, dots: Dots) {
        self.cursor.x += dots;
    }

    /// HMI at the current style: the per-character horizontal advance.
    pub fn hmi(&self) -> Dots {
        self.style.hmi()
    }

    pub fn carriage_return(&mut self) {
        self.cursor.x = self.paper.printable_area().x;
    }

    pub fn line_feed(&mut self) {
        self.cursor.y += self.line_spacing;
    }

    pub fn new_line(&mut self) {
        self.carriage_return();
        self.line_feed();
    }

    /// Ejects the current sheet and resets the cursor to the top of a
    /// fresh page, preserving every other mode.
    pub fn form_feed(&mut self) {
        self.page += 1;
        let area = self.paper.printable_area();
        self.cursor = Point { x: area.x, y: area.y };
    }

    /// True once the cursor has advanced past the bottom printable margin.
    pub fn check_page_break(&self) -> bool {
        self.cursor.y > self.paper.printable_area().bottom()
    }

    /// True if printing `width` dots from the current cursor would cross
    /// the right printable margin.
    pub fn check_line_wrap(&self, width: Dots) -> bool {
        self.cursor.x + width > self.paper.printable_area().right()
    }

    /// Wraps to a new line the same way a natural line feed would; kept
    /// distinct from `new_line` so callers can log/trace the two triggers
    /// separately.
    pub fn wrap_line(&mut self) {
        self.new_line();
    }

    /// Advances the cursor to the next horizontal tab stop past the
    /// current position. Leaves the cursor unchanged if there isn't one.
    pub fn horizontal_tab(&mut self) {
        if let Some(&next) = self.horizontal_tabs.iter().find(|&&t| t > self.cursor.x) {
            self.cursor.x = next;
        } else {
            log::debug!("horizontal_tab: no tab stop past x={}", self.cursor.x);
        }
    }

    /// Restores a freshly-initialized state for the same paper, clearing
    /// every mode back to power-on defaults.
    pub fn reset(&mut self) {
        *self = Self::new(self.paper);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_state_starts_at_the_printable_origin() {
        let state = PrinterState::new(Paper::default());
        let area = state.paper.printable_area();
        assert_eq!(state.cursor, Point { x: area.x, y: area.y });
        assert_eq!(state.page, 1);
    }

    #[test]
    fn new_line_returns_to_the_left_margin_and_advances_down() {
        let mut state = PrinterState::new(Paper::default());
        state.cursor.x += 500;
        let start_y = state.cursor.y;
        state.new_line();
        assert_eq!(state.cursor.x, state.paper.printable_area().x);
        assert_eq!(state.cursor.y, start_y + state.line_spacing);
    }

    #[test]
    fn form_feed_advances_the_page_counter_and_resets_the_cursor() {
        let mut state = PrinterState::new(Paper::default());
        state.cursor.y += 5000;
        state.form_feed();
        assert_eq!(state.page, 2);
        assert_eq!(state.cursor.y, state.paper.printable_area().y);
    }

    #[test]
    fn page_break_triggers_once_past_the_bottom_margin() {
        let mut state = PrinterState::new(Paper::default());
        assert!(!state.check_page_break());
        state.cursor.y = state.paper.printable_area().bottom() + 1;
        assert!(state.check_page_break());
    }

    #[test]
    fn horizontal_tab_jumps_to_the_next_stop() {
        let mut state = PrinterState::new(Paper::default());
        state.horizontal_tabs = vec![400, 800, 1200];
        state.cursor.x = 500;
        state.horizontal_tab();
        assert_eq!(state.cursor.x, 800);
    }
}
