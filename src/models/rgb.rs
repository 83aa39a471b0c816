//! Model a color in the sRGB color space.

use crate::{
    argb::Argb,
    color::Component,
    math::{clamp, transform, transform_3x3, Transform},
    models::xyz::Xyz,
};

/// Convert an 8-bit gamma encoded sRGB channel to linear light in the range
/// `0..=100`.
pub fn linearized(channel: u8) -> Component {
    let normalized = channel as Component / 255.0;

    if normalized <= 0.040449936 {
        normalized / 12.92 * 100.0
    } else {
        ((normalized + 0.055) / 1.055).powf(2.4) * 100.0
    }
}

/// Convert a linear light value in the range `0..=100` to an 8-bit gamma
/// encoded sRGB channel.
///
/// NOTE: This is a lossy operation. Values outside of the range are clipped.
pub fn delinearized(linear: Component) -> u8 {
    let normalized = linear / 100.0;

    let encoded = if normalized <= 0.0031308 {
        normalized * 12.92
    } else {
        1.055 * normalized.powf(1.0 / 2.4) - 0.055
    };

    clamp(0.0, 255.0, (encoded * 255.0).round()) as u8
}

hct_macros::gen_model! {
    /// A color in the sRGB color space without gamma encoding, with each
    /// component in the range `0..=100`.
    pub struct LinearSrgb {
        /// The red component of the color.
        red: Component,
        /// The green component of the color.
        green: Component,
        /// The blue component of the color.
        blue: Component,
    }
}

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const TO_XYZ: Transform = transform_3x3(
    0.41233895, 0.2126, 0.01932141,
    0.35762064, 0.7152, 0.11916382,
    0.18051042, 0.0722, 0.95034478,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const FROM_XYZ: Transform = transform_3x3(
     3.2413774792388685,  -0.9691452513005321,   0.05562093689691305,
    -1.5376652402851851,   1.8758853451067872,  -0.20395524564742123,
    -0.49885366846268053,  0.04156585616912061,  1.0571799111220335,
);

impl LinearSrgb {
    /// Decode the color channels of a pixel. Alpha is ignored.
    pub fn from_argb(argb: Argb) -> Self {
        Self::new(
            linearized(argb.red()),
            linearized(argb.green()),
            linearized(argb.blue()),
        )
    }

    /// Encode this color as an opaque pixel, clipping every channel into the
    /// displayable range.
    pub fn to_argb(&self) -> Argb {
        Argb::from_rgb(
            delinearized(self.red),
            delinearized(self.green),
            delinearized(self.blue),
        )
    }

    /// Convert this color to the CIE-XYZ color space.
    pub fn to_xyz(&self) -> Xyz {
        transform(&TO_XYZ, self.to_components()).into()
    }
}

impl From<Xyz> for LinearSrgb {
    fn from(value: Xyz) -> Self {
        transform(&FROM_XYZ, value.to_components()).into()
    }
}
