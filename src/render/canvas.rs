//! `BarCanvas`: draws frames as vertical bars into a cell buffer.
//!
//! ```text
//!  row 0   │ Bubble Sort in progress...         │  status
//!  row 1   │                                    │
//!  row 2.. │ ▂ █   ▅ █ ▇   ▃ ▁ █ ▆ ...          │  bars, bottom aligned
//! ```
//!
//! Bar heights are scaled to the rows available, with eighth-block glyphs
//! for the partial top cell.

use super::{Palette, RenderAdapter};
use crate::buffer::{Buffer, Cell, Modifiers};
use crate::layout::Rect;
use crate::sort::{Height, Step};

/// Rows reserved above the bars.
const STATUS_ROWS: u16 = 2;

const FULL_BLOCK: char = '█';

/// Partial blocks indexed by eighths (index 0 is never drawn).
const PARTIAL_BLOCKS: [char; 8] = [' ', '▁', '▂', '▃', '▄', '▅', '▆', '▇'];

/// Terminal render adapter over a borrowed buffer.
pub struct BarCanvas<'a> {
    buffer: &'a mut Buffer,
    palette: &'a Palette,
    scale: Height,
}

impl<'a> BarCanvas<'a> {
    /// Create a canvas drawing into `buffer`.
    ///
    /// `scale` is the height that fills the whole bar area; taller values
    /// are clipped.
    ///
    /// # Panics
    ///
    /// Panics if `scale` is 0.
    pub fn new(buffer: &'a mut Buffer, palette: &'a Palette, scale: Height) -> Self {
        assert!(scale > 0, "bar scale must be non-zero");
        Self {
            buffer,
            palette,
            scale,
        }
    }

    /// The region bars are drawn in.
    pub fn bar_area(&self) -> Rect {
        self.buffer.area().split_vertical(STATUS_ROWS).1
    }

    /// Height of `value` in eighths of a row.
    fn eighths(&self, value: Height, rows: u16) -> u64 {
        let value = u64::from(value.min(self.scale));
        value * u64::from(rows) * 8 / u64::from(self.scale)
    }

    fn blank(&self) -> Cell {
        Cell::new(' ').with_bg(self.palette.background)
    }
}

impl RenderAdapter for BarCanvas<'_> {
    fn draw(&mut self, values: &[Height], step: Option<&Step>) {
        self.buffer.fill(self.blank());

        let area = self.bar_area();
        if area.is_empty() {
            return;
        }

        for (index, &value) in values.iter().enumerate() {
            let mut slot = area.column(index, values.len());
            if slot.width > 1 {
                // One column of spacing between bars.
                slot.width -= 1;
            }
            if slot.is_empty() {
                continue;
            }

            let color = self.palette.bar_color(step, index);
            let eighths = self.eighths(value, area.height);
            let full = eighths / 8;
            #[allow(clippy::cast_possible_truncation)]
            let partial = (eighths % 8) as usize;

            for level in 0..u64::from(area.height) {
                let symbol = if level < full {
                    FULL_BLOCK
                } else if level == full && partial > 0 {
                    PARTIAL_BLOCKS[partial]
                } else {
                    break;
                };
                #[allow(clippy::cast_possible_truncation)]
                let y = area.bottom() - 1 - level as u16;
                let cell = Cell::new(symbol)
                    .with_fg(color)
                    .with_bg(self.palette.background);
                self.buffer.fill_rect(Rect::new(slot.x, y, slot.width, 1), cell);
            }
        }
    }

    fn show_status(&mut self, text: &str) {
        let width = self.buffer.width();
        self.buffer.fill_rect(Rect::new(0, 0, width, 1), self.blank());
        self.buffer.draw_text(
            1,
            0,
            text,
            self.palette.text,
            self.palette.background,
            Modifiers::BOLD,
        );
    }
}
