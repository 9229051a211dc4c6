use std::fmt;

/// An 8-bit RGBA colour, as handed to a canvas-style rasterizer
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Colour {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Colour {
    /// Create a new, fully opaque colour. r, g, and b range from 0 to 255
    pub fn new_rgb(r: u8, g: u8, b: u8) -> Colour {
        Colour { r, g, b, a: 255 }
    }

    /// Create a new colour with an explicit alpha. All components range from 0 to 255
    pub fn new_rgba(r: u8, g: u8, b: u8, a: u8) -> Colour {
        Colour { r, g, b, a }
    }

    /// Create a new colour from floating point components that range from 0.0 to 1.0
    pub fn new_rgba_f32(r: f32, g: f32, b: f32, a: f32) -> Colour {
        let to_byte = |c: f32| (c.clamp(0.0, 1.0) * 255.0).round() as u8;
        Colour {
            r: to_byte(r),
            g: to_byte(g),
            b: to_byte(b),
            a: to_byte(a),
        }
    }

    /// Alpha as a fraction from 0.0 to 1.0
    pub fn alpha_f32(&self) -> f32 {
        self.a as f32 / 255.0
    }

    /// Multiply this colour's alpha by a parent alpha, the way an outline
    /// inherits the opacity of the label it surrounds
    pub fn cascade_alpha(&self, parent_alpha: u8) -> Colour {
        let a = (self.a as u32 * parent_alpha as u32) / 255;
        Colour {
            a: a as u8,
            ..*self
        }
    }

    /// The colour as an opaque CSS `rgba()` string, ignoring alpha. Fills are
    /// drawn opaque; opacity is applied by the compositor.
    pub fn css_opaque(&self) -> String {
        format!("rgba({}, {}, {}, 1)", self.r, self.g, self.b)
    }
}

impl Default for Colour {
    fn default() -> Self {
        colours::WHITE
    }
}

/// CSS `rgba()` notation, alpha as a fraction
impl fmt::Display for Colour {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "rgba({}, {}, {}, {})",
            self.r,
            self.g,
            self.b,
            self.alpha_f32()
        )
    }
}

impl From<(u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8)) -> Self {
        Colour::new_rgb(c.0, c.1, c.2)
    }
}

impl From<(u8, u8, u8, u8)> for Colour {
    fn from(c: (u8, u8, u8, u8)) -> Self {
        Colour::new_rgba(c.0, c.1, c.2, c.3)
    }
}

/// A few common colours
pub mod colours {
    use super::Colour;

    pub const WHITE: Colour = Colour {
        r: 255,
        g: 255,
        b: 255,
        a: 255,
    };
    pub const BLACK: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 255,
    };
    pub const TRANSPARENT: Colour = Colour {
        r: 0,
        g: 0,
        b: 0,
        a: 0,
    };
}
