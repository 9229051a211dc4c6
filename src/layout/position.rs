use crate::geometry::{Point, Size};
use crate::style::{HorizontalAlign, LabelStyle, VerticalAlign};
use crate::units::Px;

/// Fraction of the font size between the last baseline and the bottom of the
/// label, leaving room for descenders
pub const BASELINE_RATIO: f32 = 0.26;

/// Fraction of the font size from the vertical centre of a line down to its
/// baseline
pub const MIDDLE_RATIO: f32 = (BASELINE_RATIO + 1.0) / 2.0 - BASELINE_RATIO;

/// Which part of a line sits on its origin. Lines are drawn on an alphabetic
/// baseline, so the origin's `y` is always the baseline.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum TextAnchor {
    /// The origin is the left edge of the line
    #[default]
    Start,
    /// The origin is the horizontal centre of the line
    Middle,
    /// The origin is the right edge of the line
    End,
}

impl From<HorizontalAlign> for TextAnchor {
    fn from(align: HorizontalAlign) -> Self {
        match align {
            HorizontalAlign::Left => TextAnchor::Start,
            HorizontalAlign::Center => TextAnchor::Middle,
            HorizontalAlign::Right => TextAnchor::End,
        }
    }
}

/// A horizontal stroke under one line of text
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Underline {
    pub start: Point,
    pub end: Point,
    pub thickness: Px,
}

/// One line of text, ready to draw at `origin`
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PositionedLine {
    pub text: String,
    /// The anchor point on the line's baseline
    pub origin: Point,
    pub underline: Option<Underline>,
}

/// Where the first line's anchor sits within content of `size`. `font_size` is
/// the size the label asked for, which is what the descender allowance is
/// based on.
pub fn text_origin(style: &LabelStyle, size: Size, line_height: Px, line_count: usize) -> Point {
    let margin = style.margin();
    let font_size = style.font_size;

    let x = match style.horizontal_align {
        HorizontalAlign::Left => margin,
        HorizontalAlign::Center => size.width / 2.0,
        HorizontalAlign::Right => size.width - margin,
    };

    let draw_start_y = line_height * line_count.saturating_sub(1) as f32;
    let y = match style.vertical_align {
        VerticalAlign::Top => line_height + margin,
        VerticalAlign::Center => (size.height - draw_start_y) / 2.0 + font_size * MIDDLE_RATIO,
        VerticalAlign::Bottom => size.height - draw_start_y - font_size * BASELINE_RATIO - margin,
    };

    Point { x, y }
}

/// Thickness of the underline, and how far below the baseline it sits
pub fn underline_thickness(font_size: Px) -> Px {
    font_size / 8.0
}

/// Give every line its baseline origin, one line height apart, along with its
/// underline if the style asks for one. Underlines span the full content width
/// starting at the margin, whatever the alignment.
pub fn position_lines(style: &LabelStyle, size: Size, line_height: Px, lines: Vec<String>) -> Vec<PositionedLine> {
    let first = text_origin(style, size, line_height, lines.len());
    let thickness = underline_thickness(style.font_size);
    let margin = style.margin();

    lines
        .into_iter()
        .enumerate()
        .map(|(i, text)| {
            let origin = first.below(line_height * i as f32);
            let underline = style.underline.then(|| {
                let y = origin.y + thickness;
                Underline {
                    start: Point { x: margin, y },
                    end: Point {
                        x: margin + size.width,
                        y,
                    },
                    thickness,
                }
            });
            PositionedLine {
                text,
                origin,
                underline,
            }
        })
        .collect()
}
