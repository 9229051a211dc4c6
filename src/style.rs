use crate::colour::{colours, Colour};
use crate::font::FontSource;
use crate::geometry::Size;
use crate::units::Px;

/// Horizontal placement of every line within the label
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum HorizontalAlign {
    #[default]
    Left,
    Center,
    Right,
}

/// Vertical placement of the block of lines within the label
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum VerticalAlign {
    #[default]
    Top,
    Center,
    Bottom,
}

/// How the label bounds and the text size interact
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Overflow {
    /// The label grows on both axes to fit the text. Text never wraps.
    #[default]
    None,
    /// The bounds are fixed; text that doesn't fit is clipped by the rasterizer
    Clamp,
    /// The width is fixed and text always wraps; the height grows to fit
    ResizeHeight,
    /// The bounds are fixed and the font size is reduced until the text fits
    Shrink,
}

/// An outline stroked around the glyphs. The outline width doubles as the
/// margin kept clear on every side of the label.
#[derive(Debug, Copy, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Outline {
    pub width: Px,
    pub colour: Colour,
}

/// Everything that determines how a label is laid out. A style is read, never
/// written, by a layout pass; change it and lay the label out again.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct LabelStyle {
    pub text: String,
    pub font_size: Px,
    /// Distance between baselines. Zero means "the same as the font size"
    pub line_height: Px,
    pub font: FontSource,
    pub bold: bool,
    pub italic: bool,
    pub underline: bool,
    pub horizontal_align: HorizontalAlign,
    pub vertical_align: VerticalAlign,
    pub overflow: Overflow,
    /// Only consulted for [Overflow::Clamp] and [Overflow::Shrink], see [LabelStyle::wraps]
    pub wrap: bool,
    pub bounds: Size,
    pub colour: Colour,
    pub outline: Option<Outline>,
}

impl Default for LabelStyle {
    fn default() -> Self {
        LabelStyle {
            text: String::new(),
            font_size: Px(40.0),
            line_height: Px::ZERO,
            font: FontSource::default(),
            bold: false,
            italic: false,
            underline: false,
            horizontal_align: HorizontalAlign::Left,
            vertical_align: VerticalAlign::Top,
            overflow: Overflow::None,
            wrap: true,
            bounds: Size::default(),
            colour: colours::WHITE,
            outline: None,
        }
    }
}

impl LabelStyle {
    /// A default style showing `text`
    pub fn new<S: Into<String>>(text: S) -> LabelStyle {
        LabelStyle {
            text: text.into(),
            ..Default::default()
        }
    }

    pub fn with_font_size(self, font_size: f32) -> LabelStyle {
        LabelStyle {
            font_size: Px(font_size),
            ..self
        }
    }

    pub fn with_line_height(self, line_height: f32) -> LabelStyle {
        LabelStyle {
            line_height: Px(line_height),
            ..self
        }
    }

    pub fn with_font(self, font: FontSource) -> LabelStyle {
        LabelStyle { font, ..self }
    }

    pub fn with_bold(self, bold: bool) -> LabelStyle {
        LabelStyle { bold, ..self }
    }

    pub fn with_italic(self, italic: bool) -> LabelStyle {
        LabelStyle { italic, ..self }
    }

    pub fn with_underline(self, underline: bool) -> LabelStyle {
        LabelStyle { underline, ..self }
    }

    pub fn with_align(self, horizontal_align: HorizontalAlign, vertical_align: VerticalAlign) -> LabelStyle {
        LabelStyle {
            horizontal_align,
            vertical_align,
            ..self
        }
    }

    pub fn with_overflow(self, overflow: Overflow) -> LabelStyle {
        LabelStyle { overflow, ..self }
    }

    pub fn with_wrap(self, wrap: bool) -> LabelStyle {
        LabelStyle { wrap, ..self }
    }

    pub fn with_bounds(self, width: f32, height: f32) -> LabelStyle {
        LabelStyle {
            bounds: Size::new(width, height),
            ..self
        }
    }

    pub fn with_colour(self, colour: Colour) -> LabelStyle {
        LabelStyle { colour, ..self }
    }

    pub fn with_outline(self, width: f32, colour: Colour) -> LabelStyle {
        LabelStyle {
            outline: Some(Outline {
                width: Px(width),
                colour,
            }),
            ..self
        }
    }

    /// Padding reserved on every side for the outline stroke
    pub fn margin(&self) -> Px {
        self.outline.map(|o| o.width).unwrap_or(Px::ZERO)
    }

    /// Whether text wraps. Auto-sized labels never wrap, height-resizing labels
    /// always wrap, and fixed-size labels wrap if asked to.
    pub fn wraps(&self) -> bool {
        match self.overflow {
            Overflow::None => false,
            Overflow::ResizeHeight => true,
            Overflow::Clamp | Overflow::Shrink => self.wrap,
        }
    }

    /// The text split into paragraphs on explicit newlines. There is always at
    /// least one paragraph, even for empty text.
    pub fn paragraphs(&self) -> Vec<&str> {
        self.text.split('\n').collect()
    }
}
