use crate::units::*;

/// A width and height pair, used both for the configured label bounds and for
/// the content size a layout pass settles on.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Size {
    pub width: Px,
    pub height: Px,
}

impl Size {
    pub fn new(width: f32, height: f32) -> Size {
        Size {
            width: Px(width),
            height: Px(height),
        }
    }

    /// Shrink both axes by `inset` on every side. The result may be negative
    /// if the inset is wider than the size itself.
    pub fn inset(&self, inset: Px) -> Size {
        Size {
            width: self.width - inset * 2.0,
            height: self.height - inset * 2.0,
        }
    }

    /// Whether either axis is below zero
    pub fn is_negative(&self) -> bool {
        self.width < Px::ZERO || self.height < Px::ZERO
    }
}

/// A point in device coordinates, origin at the top-left.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Point {
    pub x: Px,
    pub y: Px,
}

impl Point {
    pub fn new(x: f32, y: f32) -> Point {
        Point { x: Px(x), y: Px(y) }
    }

    /// The same point moved down by `dy`
    pub fn below(&self, dy: Px) -> Point {
        Point {
            x: self.x,
            y: self.y + dy,
        }
    }
}
