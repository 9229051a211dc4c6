//! Multi-line label layout.
//!
//! Given a [LabelStyle] and a [TextMeasurer], [layout_label] works out which
//! lines to draw, at what font size, in how big a box, and where each line's
//! baseline sits. Rasterizing the result is left to the host.

mod colour;
pub use colour::*;

mod error;
pub use error::*;

mod font;
pub use font::*;

mod geometry;
pub use geometry::*;

/// The layout pipeline: wrapping, shrinking, sizing, and positioning
pub mod layout;
pub use layout::{layout_label, layout_label_with_fonts, LayoutResult, OutlineStroke};

mod measure;
pub use measure::*;

mod style;
pub use style::*;

mod units;
pub use units::*;
