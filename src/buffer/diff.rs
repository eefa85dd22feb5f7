//! Diffing Engine: Generate minimal ANSI sequences from buffer changes.
//!
//! Bar animations touch only a handful of columns per frame, so comparing
//! the visible buffer against the next one keeps terminal output small:
//! 1. Compare Current and Next buffers cell by cell
//! 2. Skip cursor moves when writing adjacent cells
//! 3. Track color and style state to avoid redundant SGR sequences
//!
//! All output is accumulated in a single buffer and flushed with one syscall.

use super::{Buffer, Cell, Modifiers, Rgb};
use std::io::Write;

/// State tracker for the diffing algorithm.
///
/// Tracks the terminal's cursor position, colors, and modifiers so that
/// only the escape sequences that change something are emitted.
#[derive(Debug, Clone)]
pub struct DiffState {
    cursor_x: u16,
    cursor_y: u16,
    fg: Option<Rgb>,
    bg: Option<Rgb>,
    modifiers: Option<Modifiers>,
}

impl Default for DiffState {
    fn default() -> Self {
        Self::new()
    }
}

impl DiffState {
    /// Create a new diff state with unknown terminal state.
    pub const fn new() -> Self {
        Self {
            cursor_x: 0,
            cursor_y: 0,
            fg: None,
            bg: None,
            modifiers: None,
        }
    }

    /// Reset the state (e.g., after a full screen redraw).
    pub const fn reset(&mut self) {
        self.fg = None;
        self.bg = None;
        self.modifiers = None;
        // Force cursor move on next write
        self.cursor_x = u16::MAX;
        self.cursor_y = u16::MAX;
    }
}

/// Result of a diff operation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct DiffResult {
    /// Number of cells that were different.
    pub cells_changed: usize,
    /// Number of cursor move sequences emitted.
    pub cursor_moves: usize,
    /// Number of color change sequences emitted.
    pub color_changes: usize,
}

/// Render the difference between two buffers into an ANSI sequence buffer.
///
/// Both buffers must have the same dimensions.
pub fn render_diff(
    current: &Buffer,
    next: &Buffer,
    output: &mut Vec<u8>,
    state: &mut DiffState,
) -> DiffResult {
    debug_assert_eq!(current.width(), next.width());
    debug_assert_eq!(current.height(), next.height());

    let mut result = DiffResult::default();
    let width = next.width() as usize;

    for (idx, (before, after)) in current.cells().iter().zip(next.cells()).enumerate() {
        if before == after {
            continue;
        }
        result.cells_changed += 1;

        #[allow(clippy::cast_possible_truncation)]
        let (x, y) = ((idx % width) as u16, (idx / width) as u16);
        if state.cursor_y != y || state.cursor_x != x {
            emit_cursor_move(output, x, y);
            state.cursor_x = x;
            state.cursor_y = y;
            result.cursor_moves += 1;
        }

        result.color_changes += emit_style(output, after, state);
        emit_symbol(output, after);
        state.cursor_x = state.cursor_x.saturating_add(1);
    }

    result
}

/// Generate a full redraw sequence (no diffing).
///
/// Used for the first frame, after a resize, or whenever the terminal state
/// is unknown.
pub fn render_full(buffer: &Buffer, output: &mut Vec<u8>) {
    output.extend_from_slice(b"\x1b[?25l\x1b[H");

    let mut state = DiffState::new();
    for (y, row) in buffer.rows().enumerate() {
        if y > 0 {
            output.extend_from_slice(b"\r\n");
        }
        for cell in row {
            emit_style(output, cell, &mut state);
            emit_symbol(output, cell);
        }
    }

    output.extend_from_slice(b"\x1b[0m");
}

/// Emit whatever SGR sequences are needed to draw `cell`.
///
/// Returns the number of color sequences written.
fn emit_style(output: &mut Vec<u8>, cell: &Cell, state: &mut DiffState) -> usize {
    let mut color_changes = 0;

    // Removing a modifier needs a full reset, which also clears colors.
    let current_mods = state.modifiers.unwrap_or(Modifiers::empty());
    if !current_mods.difference(cell.modifiers()).is_empty() {
        output.extend_from_slice(b"\x1b[0m");
        state.fg = None;
        state.bg = None;
        state.modifiers = None;
    }

    if state.fg != Some(cell.fg()) {
        let c = cell.fg();
        let _ = write!(output, "\x1b[38;2;{};{};{}m", c.r, c.g, c.b);
        state.fg = Some(c);
        color_changes += 1;
    }
    if state.bg != Some(cell.bg()) {
        let c = cell.bg();
        let _ = write!(output, "\x1b[48;2;{};{};{}m", c.r, c.g, c.b);
        state.bg = Some(c);
        color_changes += 1;
    }

    if state.modifiers != Some(cell.modifiers()) {
        let added = cell
            .modifiers()
            .difference(state.modifiers.unwrap_or(Modifiers::empty()));
        emit_modifier_set(output, added);
        state.modifiers = Some(cell.modifiers());
    }

    color_changes
}

/// Emit a cursor move sequence.
///
/// Uses the most compact representation:
/// - `\x1b[H` for home (1,1)
/// - `\x1b[{row}H` for column 1
/// - `\x1b[{row};{col}H` otherwise
#[inline]
fn emit_cursor_move(output: &mut Vec<u8>, x: u16, y: u16) {
    // ANSI uses 1-indexed positions
    let row = y + 1;
    let col = x + 1;

    if row == 1 && col == 1 {
        output.extend_from_slice(b"\x1b[H");
    } else if col == 1 {
        let _ = write!(output, "\x1b[{row}H");
    } else {
        let _ = write!(output, "\x1b[{row};{col}H");
    }
}

/// Emit SGR sequences for a set of modifiers.
fn emit_modifier_set(output: &mut Vec<u8>, modifiers: Modifiers) {
    if modifiers.contains(Modifiers::BOLD) {
        output.extend_from_slice(b"\x1b[1m");
    }
    if modifiers.contains(Modifiers::DIM) {
        output.extend_from_slice(b"\x1b[2m");
    }
    if modifiers.contains(Modifiers::UNDERLINE) {
        output.extend_from_slice(b"\x1b[4m");
    }
    if modifiers.contains(Modifiers::REVERSED) {
        output.extend_from_slice(b"\x1b[7m");
    }
}

#[inline]
fn emit_symbol(output: &mut Vec<u8>, cell: &Cell) {
    let mut utf8 = [0u8; 4];
    output.extend_from_slice(cell.symbol().encode_utf8(&mut utf8).as_bytes());
}

#[cfg(test)]
mod tests {
    use super::*;

    fn screen(bytes: &[u8], width: u16, height: u16) -> vt100::Parser {
        let mut parser = vt100::Parser::new(height, width, 0);
        parser.process(bytes);
        parser
    }

    /// Read a screen row back, blank cells as spaces.
    fn row(parser: &vt100::Parser, row: u16) -> String {
        let (_, cols) = parser.screen().size();
        (0..cols)
            .map(|col| {
                let contents = parser
                    .screen()
                    .cell(row, col)
                    .map(|c| c.contents())
                    .unwrap_or_default();
                if contents.is_empty() {
                    " ".to_string()
                } else {
                    contents.to_string()
                }
            })
            .collect()
    }

    #[test]
    fn test_diff_identical_buffers() {
        let a = Buffer::new(10, 5);
        let b = Buffer::new(10, 5);
        let mut output = Vec::new();
        let mut state = DiffState::new();

        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 0);
        assert!(output.is_empty());
    }

    #[test]
    fn test_diff_single_cell_change() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        b.set(5, 2, Cell::new('X'));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 1);
        assert_eq!(result.cursor_moves, 1);
        let parser = screen(&output, 10, 5);
        assert_eq!(parser.screen().cell(2, 5).unwrap().contents(), "X");
    }

    #[test]
    fn test_diff_adjacent_cells_no_cursor_move() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        b.set(0, 0, Cell::new('A'));
        b.set(1, 0, Cell::new('B'));
        b.set(2, 0, Cell::new('C'));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        assert_eq!(result.cells_changed, 3);
        // Cursor starts at (0,0) and the cells are adjacent.
        assert_eq!(result.cursor_moves, 0);
    }

    #[test]
    fn test_diff_color_tracking() {
        let a = Buffer::new(10, 5);
        let mut b = Buffer::new(10, 5);
        let red = Rgb::new(239, 68, 68);
        b.set(0, 0, Cell::new('█').with_fg(red));
        b.set(1, 0, Cell::new('█').with_fg(red));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        let result = render_diff(&a, &b, &mut output, &mut state);

        // fg and bg for the first cell, nothing new for the second.
        assert_eq!(result.color_changes, 2);

        let parser = screen(&output, 10, 5);
        let cell = parser.screen().cell(0, 1).unwrap();
        assert_eq!(cell.contents(), "█");
        assert_eq!(cell.fgcolor(), vt100::Color::Rgb(239, 68, 68));
    }

    #[test]
    fn test_modifier_removal_resets() {
        let a = Buffer::new(4, 1);
        let mut b = Buffer::new(4, 1);
        b.set(0, 0, Cell::new('A').with_modifiers(Modifiers::BOLD));
        b.set(1, 0, Cell::new('B'));

        let mut output = Vec::new();
        let mut state = DiffState::new();
        render_diff(&a, &b, &mut output, &mut state);

        let parser = screen(&output, 4, 1);
        assert!(parser.screen().cell(0, 0).unwrap().bold());
        assert!(!parser.screen().cell(0, 1).unwrap().bold());
    }

    #[test]
    fn test_cursor_move_optimization() {
        let mut output = Vec::new();

        emit_cursor_move(&mut output, 0, 0);
        assert_eq!(&output, b"\x1b[H");

        output.clear();
        emit_cursor_move(&mut output, 0, 5);
        assert_eq!(&output, b"\x1b[6H");

        output.clear();
        emit_cursor_move(&mut output, 10, 5);
        assert_eq!(&output, b"\x1b[6;11H");
    }

    #[test]
    fn test_render_full() {
        let mut buffer = Buffer::new(3, 2);
        buffer.set(0, 0, Cell::new('A'));
        buffer.set(1, 0, Cell::new('B'));
        buffer.set(2, 1, Cell::new('C'));

        let mut output = Vec::new();
        render_full(&buffer, &mut output);

        assert!(output.starts_with(b"\x1b[?25l\x1b[H"));
        assert!(output.ends_with(b"\x1b[0m"));

        let parser = screen(&output, 3, 2);
        assert_eq!(row(&parser, 0), "AB ");
        assert_eq!(row(&parser, 1), "  C");
    }

    #[test]
    fn test_full_then_diff_reaches_next_frame() {
        let mut first = Buffer::new(6, 2);
        first.draw_text(0, 0, "idle", Rgb::WHITE, Rgb::BLACK, Modifiers::empty());
        let mut second = first.clone();
        second.draw_text(0, 0, "busy", Rgb::WHITE, Rgb::BLACK, Modifiers::empty());
        second.set(5, 1, Cell::new('▄'));

        let mut output = Vec::new();
        render_full(&first, &mut output);
        let mut state = DiffState::new();
        state.reset();
        render_diff(&first, &second, &mut output, &mut state);

        let parser = screen(&output, 6, 2);
        assert_eq!(row(&parser, 0), "busy  ");
        assert_eq!(row(&parser, 1), "     ▄");
    }
}
