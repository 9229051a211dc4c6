use super::wrap::wrap_text;
use crate::error::LayoutWarning;
use crate::font::{describe, FontDescriptor};
use crate::geometry::Size;
use crate::measure::TextMeasurer;
use crate::style::LabelStyle;
use crate::units::Px;

/// The state of a single layout pass. Every stage of the pipeline reads from
/// and writes to the same context, and nothing outlives the pass, so labels can
/// be laid out concurrently as long as each pass has a measurer to itself.
pub struct LayoutContext<'a, M: TextMeasurer + ?Sized> {
    pub style: &'a LabelStyle,
    pub measurer: &'a M,
    /// The resolved family name, which may be a fallback
    pub family: String,
    /// The font size currently being laid out. Starts at the requested size and
    /// only changes while shrinking.
    pub font_size: Px,
    /// Always describes `font_size`, see [LayoutContext::set_font_size]
    pub font: FontDescriptor,
    pub warnings: Vec<LayoutWarning>,
}

impl<'a, M: TextMeasurer + ?Sized> LayoutContext<'a, M> {
    pub fn new(style: &'a LabelStyle, measurer: &'a M, family: String) -> Self {
        let font = describe(style.font_size, &family, style.bold);
        LayoutContext {
            style,
            measurer,
            family,
            font_size: style.font_size,
            font,
            warnings: Vec::new(),
        }
    }

    /// Change the font size, re-describing the font so that nothing is ever
    /// measured with a stale descriptor
    pub fn set_font_size(&mut self, size: Px) {
        self.font_size = size;
        self.font = describe(size, &self.family, self.style.bold);
    }

    /// Distance between baselines at the current font size, in whole pixels.
    ///
    /// A zero line height follows the font size. A configured line height is
    /// scaled by however much the font has been shrunk, so the spacing stays
    /// proportional.
    pub fn line_height(&self) -> Px {
        let requested = self.style.line_height;
        let line_height = if requested == Px::ZERO {
            self.font_size
        } else if self.style.font_size > Px::ZERO {
            requested * self.font_size.ratio(self.style.font_size)
        } else {
            requested
        };
        line_height.trunc().max(Px::ZERO)
    }

    /// The area text has to fit in: the bounds minus the margin on each side
    pub fn available(&self) -> Size {
        self.style.bounds.inset(self.style.margin())
    }

    pub fn measure(&self, text: &str) -> Px {
        self.measurer.measure(&self.font, text)
    }

    /// The lines to draw at the current font size: each paragraph wrapped to
    /// the available width, or each paragraph as-is when the label doesn't wrap
    pub fn split_lines(&self) -> Vec<String> {
        let paragraphs = self.style.paragraphs();
        if self.style.wraps() {
            wrap_text(paragraphs, self.available().width, &self.font, self.measurer)
        } else {
            paragraphs.into_iter().map(str::to_string).collect()
        }
    }

    /// The widest of `lines` in the current font
    pub fn widest(&self, lines: &[String]) -> Px {
        lines
            .iter()
            .map(|line| self.measure(line))
            .fold(Px::ZERO, Px::max)
    }
}
