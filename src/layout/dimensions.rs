use super::context::LayoutContext;
use super::position::BASELINE_RATIO;
use crate::geometry::Size;
use crate::measure::TextMeasurer;
use crate::style::Overflow;
use crate::units::Px;

/// Horizontal room italic glyphs lean into, for a given font size
pub fn italic_skew(font_size: Px) -> Px {
    font_size * 12f32.to_radians().tan()
}

/// Height of a block of `line_count` lines, with room for the descenders of
/// the last line
pub fn block_height(line_count: usize, line_height: Px) -> Px {
    line_height * (line_count as f32 + BASELINE_RATIO)
}

/// Settle on the size of the label's content once the lines are known.
///
/// Auto-sized labels ([Overflow::None]) measure their widest line and add the
/// margin on both sides, plus a little extra for italics to lean into; both
/// axes are rounded to hundredths first. Height-resizing labels keep their
/// width. Fixed labels keep their bounds, since clamping clips and shrinking
/// already made the text fit.
pub fn content_size<M: TextMeasurer + ?Sized>(
    ctx: &LayoutContext<'_, M>,
    lines: &[String],
    line_height: Px,
) -> Size {
    let style = ctx.style;
    let padding = style.margin() * 2.0;

    match style.overflow {
        Overflow::None => {
            let mut width = ctx.widest(lines).round_hundredths() + padding;
            if style.italic {
                width += italic_skew(style.font_size);
            }
            let height = block_height(lines.len(), line_height).round_hundredths() + padding;
            Size { width, height }
        }
        Overflow::ResizeHeight => Size {
            width: style.bounds.width,
            height: block_height(lines.len(), line_height) + padding,
        },
        Overflow::Clamp | Overflow::Shrink => style.bounds,
    }
}
