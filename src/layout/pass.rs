use super::context::LayoutContext;
use super::dimensions::content_size;
use super::fit::shrink_to_fit;
use super::position::{position_lines, PositionedLine, TextAnchor};
use crate::colour::Colour;
use crate::error::LayoutWarning;
use crate::font::{resolve_family, FontDescriptor, FontResolver, NoAssets};
use crate::geometry::Size;
use crate::measure::TextMeasurer;
use crate::style::{LabelStyle, Overflow};
use crate::units::Px;

/// The stroke drawn around every glyph of an outlined label
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct OutlineStroke {
    /// Full stroke width; half of it falls outside the glyph
    pub width: Px,
    /// The outline colour with the label's opacity applied
    pub colour: Colour,
}

/// Everything a rasterizer needs to draw a label, produced fresh by every pass.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutResult {
    /// The font to draw every line in
    pub font: FontDescriptor,
    /// The font size settled on. Smaller than requested if the label shrank;
    /// zero if shrinking failed
    pub font_size: Px,
    /// Distance between consecutive baselines, in whole pixels
    pub line_height: Px,
    /// Lines from top to bottom
    pub lines: Vec<PositionedLine>,
    /// The size of the drawing surface, and of the label once laid out
    pub content_size: Size,
    pub anchor: TextAnchor,
    pub fill: Colour,
    pub outline: Option<OutlineStroke>,
    /// Everything that went wrong along the way, none of which stopped the pass
    pub warnings: Vec<LayoutWarning>,
}

impl LayoutResult {
    /// The text of every line, top to bottom
    pub fn texts(&self) -> impl Iterator<Item = &str> {
        self.lines.iter().map(|line| line.text.as_str())
    }

    /// Whether there is anything sensible to draw. Labels whose bounds can't
    /// hold their margin, or whose text couldn't be shrunk to fit, aren't.
    pub fn is_renderable(&self) -> bool {
        self.font_size > Px::ZERO
            && !self
                .warnings
                .iter()
                .any(|w| matches!(w, LayoutWarning::DegenerateBounds { .. }))
    }
}

/// Lay out a label whose font is a system family. Asset fonts in the style fall
/// back to the default family; use [layout_label_with_fonts] to resolve them.
///
/// # Example
///
/// ```
/// use label_layout::{layout_label, FontDescriptor, LabelStyle, Px};
///
/// // every character is half as wide as the font is tall
/// let measurer = |font: &FontDescriptor, text: &str| {
///     Px(text.chars().count() as f32 * font.size() as f32 / 2.0)
/// };
///
/// let style = LabelStyle::new("Hello\nWorld").with_font_size(40.0);
/// let layout = layout_label(&style, &measurer);
///
/// assert_eq!(layout.texts().collect::<Vec<_>>(), vec!["Hello", "World"]);
/// assert_eq!(layout.line_height, Px(40.0));
/// ```
pub fn layout_label<M: TextMeasurer + ?Sized>(style: &LabelStyle, measurer: &M) -> LayoutResult {
    layout_label_with_fonts(style, measurer, &NoAssets)
}

/// Lay out a label, resolving asset fonts through `resolver`.
///
/// The pass runs in a fixed order: resolve the font family, shrink the font if
/// the label asks for it, split (and maybe wrap) the text into lines, settle on
/// the content size, then place each line. It never fails; problems are
/// reported in [LayoutResult::warnings] and degrade the result instead.
pub fn layout_label_with_fonts<M, R>(style: &LabelStyle, measurer: &M, resolver: &R) -> LayoutResult
where
    M: TextMeasurer + ?Sized,
    R: FontResolver + ?Sized,
{
    let (family, unresolved) = resolve_family(&style.font, resolver);
    let mut ctx = LayoutContext::new(style, measurer, family);
    ctx.warnings.extend(unresolved);

    match style.overflow {
        Overflow::Shrink => {
            shrink_to_fit(&mut ctx);
        }
        Overflow::None | Overflow::Clamp | Overflow::ResizeHeight => {}
    }

    let lines = ctx.split_lines();
    let line_height = ctx.line_height();
    let size = content_size(&ctx, &lines, line_height);
    let lines = position_lines(style, size, line_height, lines);

    let fill = style.colour;
    let outline = style.outline.map(|outline| OutlineStroke {
        width: outline.width * 2.0,
        colour: outline.colour.cascade_alpha(fill.a),
    });

    LayoutResult {
        font: ctx.font,
        font_size: ctx.font_size,
        line_height,
        lines,
        content_size: size,
        anchor: style.horizontal_align.into(),
        fill,
        outline,
        warnings: ctx.warnings,
    }
}
