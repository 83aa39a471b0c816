//! CIE L*, the perceptual lightness used as HCT tone.

use crate::{
    argb::Argb,
    color::Component,
    models::rgb::{delinearized, LinearSrgb},
};

const EPSILON: Component = 216.0 / 24389.0;
const KAPPA: Component = 24389.0 / 27.0;

fn lab_f(t: Component) -> Component {
    if t > EPSILON {
        t.cbrt()
    } else {
        (KAPPA * t + 16.0) / 116.0
    }
}

fn lab_inv_f(ft: Component) -> Component {
    let ft3 = ft * ft * ft;
    if ft3 > EPSILON {
        ft3
    } else {
        (116.0 * ft - 16.0) / KAPPA
    }
}

/// Convert L* to relative luminance Y, both in the range `0..=100`.
pub fn y_from_lstar(lstar: Component) -> Component {
    100.0 * lab_inv_f((lstar + 16.0) / 116.0)
}

/// Convert relative luminance Y to L*, both in the range `0..=100`.
pub fn lstar_from_y(y: Component) -> Component {
    116.0 * lab_f(y / 100.0) - 16.0
}

/// The L* of a pixel.
pub fn lstar_from_argb(argb: Argb) -> Component {
    lstar_from_y(LinearSrgb::from_argb(argb).to_xyz().y)
}

/// The gray pixel with the given L*.
///
/// L* values outside of `0..=100` produce black or white.
pub fn argb_from_lstar(lstar: Component) -> Argb {
    let component = delinearized(y_from_lstar(lstar));
    Argb::from_rgb(component, component, component)
}
