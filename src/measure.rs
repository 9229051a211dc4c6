use crate::font::{Font, FontDescriptor, FontResolver, DEFAULT_FAMILY};
use crate::{LabelError, Px};
use id_arena::{Arena, Id};
use std::collections::HashMap;

/// Measures how wide a string renders in a given font.
///
/// Layout trusts the measurer completely: a line is considered to fit if and
/// only if the measurer says so. Implementations must be deterministic, must
/// not let one call influence another, and should grow monotonically with the
/// length of the string. A measurer that keeps a scratch surface around for
/// metrics is fine as long as that state is never observable.
///
/// Any `Fn(&FontDescriptor, &str) -> Px` is a measurer, which is usually the
/// easiest way to plug in a host canvas.
pub trait TextMeasurer {
    fn measure(&self, font: &FontDescriptor, text: &str) -> Px;
}

impl<F> TextMeasurer for F
where
    F: Fn(&FontDescriptor, &str) -> Px,
{
    fn measure(&self, font: &FontDescriptor, text: &str) -> Px {
        self(font, text)
    }
}

/// A collection of parsed fonts, looked up by family name. A `FontBook` is both
/// a [TextMeasurer] (measuring with glyph advances) and a [FontResolver] (an
/// asset reference resolves if a font with that family has been added).
#[derive(Default)]
pub struct FontBook {
    pub fonts: Arena<Font>,
    families: HashMap<String, Vec<Id<Font>>>,
}

impl FontBook {
    /// Add a font to the book, returning its id. Fonts without a family name
    /// can't be looked up and are rejected.
    pub fn add_font(&mut self, font: Font) -> Result<Id<Font>, LabelError> {
        let family = font.family().ok_or(LabelError::MissingFamily)?;
        let id = self.fonts.alloc(font);
        self.families.entry(family).or_default().push(id);
        Ok(id)
    }

    /// Find the best face for a family. Bold requests prefer the heaviest face
    /// that is at least semi-bold; regular requests prefer a face lighter than
    /// that. Either way any face of the family beats nothing.
    pub fn find(&self, family: &str, bold: bool) -> Option<Id<Font>> {
        let faces = self.families.get(family)?;
        let is_heavy = |id: &&Id<Font>| self.fonts[**id].weight() >= 600;
        let preferred = if bold {
            faces
                .iter()
                .filter(is_heavy)
                .max_by_key(|id| self.fonts[**id].weight())
        } else {
            faces.iter().find(|id| !is_heavy(id))
        };
        preferred.or_else(|| faces.first()).copied()
    }

    fn face_for(&self, font: &FontDescriptor) -> Option<&Font> {
        self.find(font.family(), font.is_bold())
            .or_else(|| self.find(DEFAULT_FAMILY, font.is_bold()))
            .or_else(|| self.fonts.iter().next().map(|(id, _)| id))
            .map(|id| &self.fonts[id])
    }
}

impl TextMeasurer for FontBook {
    fn measure(&self, font: &FontDescriptor, text: &str) -> Px {
        match self.face_for(font) {
            Some(face) => face.width_of_text(text, font.size_px()),
            None => {
                log::trace!("no fonts loaded, measuring `{text}` as empty");
                Px::ZERO
            }
        }
    }
}

impl FontResolver for FontBook {
    fn resolve(&self, asset: &str) -> Option<String> {
        self.families.contains_key(asset).then(|| asset.to_string())
    }
}
