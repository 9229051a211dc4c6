//! Label layout: turning a [`LabelStyle`](crate::LabelStyle) into lines, a font
//! size, a content size, and a draw origin for every line.
//!
//! A pass runs through these stages, each in its own module:
//!
//! - [`wrap`] - greedy wrapping of paragraphs at Unicode break opportunities
//! - [`fit`] - shrinking the font until the text fits its bounds
//! - [`dimensions`] - the content size for each overflow mode
//! - [`position`] - baseline origins and underlines for every line
//!
//! [`layout_label`](crate::layout::layout_label) runs the whole pass. The
//! stages share a per-pass [`LayoutContext`](crate::layout::LayoutContext) and
//! can be driven individually by hosts that need only part of the pipeline.
//!
//! # Example
//!
//! ```
//! use label_layout::{FontDescriptor, LabelStyle, Overflow, Px};
//! use label_layout::layout::layout_label;
//!
//! let measurer = |font: &FontDescriptor, text: &str| {
//!     Px(text.chars().count() as f32 * font.size() as f32 / 2.0)
//! };
//!
//! let style = LabelStyle::new("A very long sentence that must wrap")
//!     .with_font_size(20.0)
//!     .with_bounds(80.0, 200.0)
//!     .with_overflow(Overflow::Clamp);
//!
//! let layout = layout_label(&style, &measurer);
//! for line in &layout.lines {
//!     assert!(measurer(&layout.font, &line.text) <= Px(80.0));
//! }
//! ```

mod context;
pub mod dimensions;
pub mod fit;
mod pass;
pub mod position;
pub mod wrap;

pub use context::*;
pub use fit::{shrink_to_fit, FitOutcome};
pub use pass::*;
pub use position::{PositionedLine, TextAnchor, Underline, BASELINE_RATIO, MIDDLE_RATIO};
pub use wrap::{wrap_paragraph, wrap_text};
