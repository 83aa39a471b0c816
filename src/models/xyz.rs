//! Model a color in the CIE-XYZ color space.

use crate::color::{Component, Components};

/// The D65 white point, scaled so that white has a Y of 100.
pub const WHITE_POINT_D65: Components = Components(95.047, 100.0, 108.883);

hct_macros::gen_model! {
    /// A model for a color in the CIE-XYZ color space with a D65 white point.
    /// Components are scaled so that Y is in the range `0..=100`.
    pub struct Xyz {
        /// The X component of the color.
        x: Component,
        /// The Y component of the color, the relative luminance.
        y: Component,
        /// The Z component of the color.
        z: Component,
    }
}
