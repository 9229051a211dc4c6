use crate::geometry::Size;
use crate::units::Px;
use thiserror::Error;

/// Fatal errors the crate can generate. These only come out of setup (loading
/// fonts); a layout pass itself never fails, see [LayoutWarning]
#[derive(Error, Debug)]
pub enum LabelError {
    #[error(transparent)]
    /// [owned_ttf_parser] failed to parse the font
    FaceParsingError(#[from] owned_ttf_parser::FaceParsingError),

    #[error("font has no family name")]
    /// The font parsed but carries no usable family name
    MissingFamily,
}

/// Conditions a layout pass recovers from on its own. The pass still produces a
/// result, but it may be degraded; every warning raised is recorded in
/// [LayoutResult::warnings](crate::LayoutResult::warnings).
#[derive(Error, Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum LayoutWarning {
    /// The bounds minus the outline margin are negative, so there is no space to
    /// shrink into. The font size was left at the requested size.
    #[error("label bounds {} by {} leave no room for a margin of {margin}", .bounds.width, .bounds.height)]
    DegenerateBounds { bounds: Size, margin: Px },

    /// Shrinking drove the font size to zero without the text fitting
    #[error("could not shrink {requested} text to fit, last attempt was {attempted}")]
    ShrinkExhausted { requested: Px, attempted: Px },

    /// The requested font is not available yet; the fallback family was used
    #[error("font `{requested}` is not resolved, falling back to `{fallback}`")]
    UnresolvedFont { requested: String, fallback: String },
}
