use crate::{error::LayoutWarning, LabelError, Px};
use owned_ttf_parser::{AsFaceRef, GlyphId, OwnedFace};
use std::fmt;

/// The family used whenever the requested font cannot be resolved
pub const DEFAULT_FAMILY: &str = "Arial";

/// Everything a [TextMeasurer](crate::TextMeasurer) needs to know about the font
/// a string is drawn in. Displayed, it reads like a CSS font shorthand
/// (`bold 40px Arial`), which is what canvas-backed measurers key off.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FontDescriptor {
    size: u32,
    family: String,
    bold: bool,
}

impl FontDescriptor {
    /// The font size in whole pixels
    pub fn size(&self) -> u32 {
        self.size
    }

    pub fn size_px(&self) -> Px {
        Px(self.size as f32)
    }

    pub fn family(&self) -> &str {
        &self.family
    }

    pub fn is_bold(&self) -> bool {
        self.bold
    }
}

impl fmt::Display for FontDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.bold {
            f.write_str("bold ")?;
        }
        write!(f, "{}px {}", self.size, self.family)
    }
}

/// Build the descriptor for a font size, family, and weight. The size is
/// truncated to whole pixels; negative sizes clamp to zero.
pub fn describe(size: Px, family: &str, bold: bool) -> FontDescriptor {
    FontDescriptor {
        size: size.0.trunc().max(0.0) as u32,
        family: family.to_string(),
        bold,
    }
}

/// Where a label gets its font from
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum FontSource {
    /// A family the host already knows about, used verbatim
    System(String),
    /// A reference to a font asset that has to be resolved before it can be used
    Asset(String),
}

impl Default for FontSource {
    fn default() -> Self {
        FontSource::System(DEFAULT_FAMILY.to_string())
    }
}

/// Turns font asset references into family names. Resolution may be
/// asynchronous on the host side: returning `None` means "not available yet",
/// and the host is expected to lay the label out again once it is.
pub trait FontResolver {
    fn resolve(&self, asset: &str) -> Option<String>;
}

/// A resolver that knows no assets, so every asset falls back
#[derive(Debug, Default, Copy, Clone)]
pub struct NoAssets;

impl FontResolver for NoAssets {
    fn resolve(&self, _asset: &str) -> Option<String> {
        None
    }
}

/// Pick the family name a pass should measure with. Unresolved assets fall
/// back to [DEFAULT_FAMILY] and report a warning.
pub fn resolve_family<R: FontResolver + ?Sized>(
    source: &FontSource,
    resolver: &R,
) -> (String, Option<LayoutWarning>) {
    match source {
        FontSource::System(family) => (family.clone(), None),
        FontSource::Asset(asset) => match resolver.resolve(asset) {
            Some(family) => (family, None),
            None => {
                log::warn!("font asset `{asset}` is not loaded yet, using `{DEFAULT_FAMILY}`");
                (
                    DEFAULT_FAMILY.to_string(),
                    Some(LayoutWarning::UnresolvedFont {
                        requested: asset.clone(),
                        fallback: DEFAULT_FAMILY.to_string(),
                    }),
                )
            }
        },
    }
}

/// A parsed TrueType or OpenType font, used to measure text without a canvas.
pub struct Font {
    pub face: OwnedFace,
}

impl Font {
    /// Load a font from raw bytes, parsing the font and returning an error if the font
    /// could not be parsed
    pub fn load(bytes: Vec<u8>) -> Result<Font, LabelError> {
        let face = OwnedFace::from_vec(bytes, 0)?;

        Ok(Font { face })
    }

    /// Obtain the family name of the font, if it has one
    pub fn family(&self) -> Option<String> {
        self.face
            .as_face_ref()
            .names()
            .into_iter()
            .find(|name| name.name_id == owned_ttf_parser::name_id::FAMILY && name.is_unicode())
            .and_then(|name| name.to_string())
    }

    /// Obtain the weight of the font. 400 is normal, 700 is bold
    pub fn weight(&self) -> u16 {
        self.face.as_face_ref().weight().to_number()
    }

    fn glyph(&self, ch: char) -> Option<GlyphId> {
        let face = self.face.as_face_ref();
        face.glyph_index(ch)
            .or_else(|| face.glyph_index('\u{FFFD}'))
            .or_else(|| face.glyph_index('?'))
    }

    /// Calculate the width of a given string of text at the given font size
    pub fn width_of_text(&self, text: &str, size: Px) -> Px {
        let face = self.face.as_face_ref();
        let scaling = size / face.units_per_em() as f32;
        text.chars()
            .filter_map(|ch| self.glyph(ch))
            .map(|gid| scaling * face.glyph_hor_advance(gid).unwrap_or_default() as f32)
            .sum()
    }
}
