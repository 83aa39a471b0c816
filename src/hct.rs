//! HCT, a color described by hue, chroma and tone.

use crate::{
    argb::Argb,
    color::Component,
    gamut::map_to_gamut,
    math::sanitize_degrees,
    models::{lstar_from_argb, lstar_from_y, Cam16, ViewingConditions},
};

/// A color in HCT: the hue and chroma of CAM16 combined with the L* of
/// CIE-LAB as the tone.
///
/// A value of this type always describes a displayable color. Requests that
/// fall outside of sRGB are mapped into it when the value is created, so the
/// stored hue, chroma and tone are those of the resulting pixel and may differ
/// from what was asked for.
///
/// All values are measured in the standard viewing conditions, see
/// [`ViewingConditions::standard`].
#[derive(Clone, Copy, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(from = "Argb", into = "Argb"))]
pub struct Hct {
    hue: Component,
    chroma: Component,
    tone: Component,
}

impl Hct {
    /// Create the displayable color closest to the requested hue, chroma and
    /// tone.
    ///
    /// - `hue`: in degrees, wrapped into `0.0..360.0`.
    /// - `chroma`: the requested colorfulness. The maximum depends on the hue
    ///   and tone; anything above it is reduced.
    /// - `tone`: L*, `0..=100`.
    pub fn new(hue: Component, chroma: Component, tone: Component) -> Self {
        Self::from_argb(map_to_gamut(
            hue,
            chroma,
            tone,
            ViewingConditions::standard(),
        ))
    }

    /// The HCT of a pixel.
    pub fn from_argb(argb: Argb) -> Self {
        let cam = Cam16::from_argb(argb, ViewingConditions::standard());
        Self {
            hue: cam.hue,
            chroma: cam.chroma,
            tone: lstar_from_argb(argb),
        }
    }

    /// The hue in degrees, `0.0..360.0`.
    pub fn hue(&self) -> Component {
        self.hue
    }

    /// The chroma.
    pub fn chroma(&self) -> Component {
        self.chroma
    }

    /// The tone, L* in `0..=100`.
    pub fn tone(&self) -> Component {
        self.tone
    }

    /// The pixel for this color.
    pub fn to_argb(&self) -> Argb {
        map_to_gamut(
            self.hue,
            self.chroma,
            self.tone,
            ViewingConditions::standard(),
        )
    }

    /// A color with the given hue and this chroma and tone.
    ///
    /// The chroma may change, since the new hue may not support it.
    pub fn with_hue(&self, hue: Component) -> Self {
        Self::new(sanitize_degrees(hue), self.chroma, self.tone)
    }

    /// A color with the given chroma and this hue and tone.
    ///
    /// The chroma may end up lower than requested.
    pub fn with_chroma(&self, chroma: Component) -> Self {
        Self::new(self.hue, chroma, self.tone)
    }

    /// A color with the given tone and this hue and chroma.
    ///
    /// The chroma may change, since the new tone may not support it.
    pub fn with_tone(&self, tone: Component) -> Self {
        Self::new(self.hue, self.chroma, tone)
    }

    /// How this color looks when seen in `conditions`, expressed as the color
    /// that looks the same in the standard viewing conditions.
    ///
    /// For example, white on a dark background (surround 0) looks brighter
    /// than the same white seen in the standard conditions.
    pub fn in_viewing_conditions(&self, conditions: &ViewingConditions) -> Self {
        let standard = ViewingConditions::standard();

        let cam = Cam16::from_argb(self.to_argb(), standard);
        let viewed = cam.xyz_in(conditions);
        let recast = Cam16::from_xyz(viewed, standard);

        Self::new(recast.hue, recast.chroma, lstar_from_y(viewed.y))
    }
}

impl From<Argb> for Hct {
    fn from(value: Argb) -> Self {
        Self::from_argb(value)
    }
}

impl From<Hct> for Argb {
    fn from(value: Hct) -> Self {
        value.to_argb()
    }
}
