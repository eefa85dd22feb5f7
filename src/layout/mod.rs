//! Layout: screen rectangles for the status row and the bar area.

mod rect;

pub use rect::Rect;
