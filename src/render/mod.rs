//! Render adapter boundary.
//!
//! The session hands every frame to a [`RenderAdapter`]: the current array,
//! its per-index highlight, and a status line. Adapters only draw; they never
//! touch the array or the playback state.
//!
//! [`BarCanvas`] is the terminal implementation, drawing into a cell
//! [`Buffer`](crate::buffer::Buffer) that the engine then diffs onto screen.

mod canvas;

pub use canvas::BarCanvas;

use crate::buffer::Rgb;
use crate::sort::{Height, Role, Step};

/// A drawing backend for visualizer frames.
pub trait RenderAdapter {
    /// Draw the bars. `step` is `None` on idle frames.
    fn draw(&mut self, values: &[Height], step: Option<&Step>);

    /// Overlay a status line.
    fn show_status(&mut self, text: &str);
}

/// Concrete colors for each highlight role.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Palette {
    /// Screen background.
    pub background: Rgb,
    /// Status line text.
    pub text: Rgb,
    /// Bars while nothing is running.
    pub idle: Rgb,
    /// [`Role::Default`] bars during a run.
    pub default: Rgb,
    /// [`Role::CompareLow`].
    pub compare_low: Rgb,
    /// [`Role::CompareHigh`].
    pub compare_high: Rgb,
    /// [`Role::Pivot`].
    pub pivot: Rgb,
    /// [`Role::MergeCursor`].
    pub merge_cursor: Rgb,
    /// [`Role::Sorted`].
    pub sorted: Rgb,
}

impl Default for Palette {
    fn default() -> Self {
        Self {
            background: Rgb::new(10, 15, 25),
            text: Rgb::new(235, 235, 235),
            idle: Rgb::new(147, 51, 234),
            default: Rgb::new(235, 235, 235),
            compare_low: Rgb::new(239, 68, 68),
            compare_high: Rgb::new(59, 130, 246),
            pivot: Rgb::new(59, 130, 246),
            merge_cursor: Rgb::new(6, 182, 212),
            sorted: Rgb::new(16, 185, 129),
        }
    }
}

impl Palette {
    /// Color for a role.
    pub const fn color(&self, role: Role) -> Rgb {
        match role {
            Role::Default => self.default,
            Role::CompareLow => self.compare_low,
            Role::CompareHigh => self.compare_high,
            Role::Pivot => self.pivot,
            Role::MergeCursor => self.merge_cursor,
            Role::Sorted => self.sorted,
        }
    }

    /// Color of bar `index` for a frame.
    pub fn bar_color(&self, step: Option<&Step>, index: usize) -> Rgb {
        step.map_or(self.idle, |step| self.color(step.role_at(index)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_palette_roles() {
        let palette = Palette::default();
        assert_eq!(palette.color(Role::Sorted), Rgb::new(16, 185, 129));
        assert_eq!(palette.color(Role::MergeCursor), Rgb::new(6, 182, 212));
    }

    #[test]
    fn test_bar_color_idle_and_marked() {
        let palette = Palette::default();
        let step = Step::pair(1, Role::CompareLow, 2, Role::CompareHigh);

        assert_eq!(palette.bar_color(None, 1), palette.idle);
        assert_eq!(palette.bar_color(Some(&step), 0), palette.default);
        assert_eq!(palette.bar_color(Some(&step), 1), palette.compare_low);
        assert_eq!(palette.bar_color(Some(&step), 2), palette.compare_high);
    }
}
