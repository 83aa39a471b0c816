//! The environment a color is observed in, as used by CAM16.

use std::f64::consts::PI;
use std::sync::LazyLock;

use crate::{
    color::{Component, Components},
    math::{clamp, lerp, transform},
    models::{cam16::XYZ_TO_CAM16_RGB, lab::y_from_lstar, xyz::WHITE_POINT_D65},
};

static STANDARD: LazyLock<ViewingConditions> = LazyLock::new(|| {
    ViewingConditions::new(
        WHITE_POINT_D65,
        200.0 / PI * y_from_lstar(50.0) / 100.0,
        50.0,
        2.0,
        false,
    )
});

/// Parameters of a viewing environment, precomputed for the CAM16 color
/// appearance model.
///
/// All fields are derived from the arguments to [`ViewingConditions::new`],
/// so they are read only.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct ViewingConditions {
    n: Component,
    aw: Component,
    nbb: Component,
    ncb: Component,
    c: Component,
    nc: Component,
    rgb_d: Components,
    fl: Component,
    fl_root: Component,
    z: Component,
}

impl ViewingConditions {
    /// Create viewing conditions.
    ///
    /// - `white_point`: the white point in CIE-XYZ, with Y scaled to 100.
    /// - `adapting_luminance`: the luminance of the adapting field in cd/m².
    /// - `background_lstar`: the L* of the area surrounding the color.
    /// - `surround`: 0 is dark (a movie theater), 1 is dim (a dim room), 2 is
    ///   average (a lit office). Values in between are allowed.
    /// - `discounting_illuminant`: whether the eye fully adapts to the
    ///   illuminant, as it does when looking at a reflective surface.
    pub fn new(
        white_point: Components,
        adapting_luminance: Component,
        background_lstar: Component,
        surround: Component,
        discounting_illuminant: bool,
    ) -> Self {
        let rgb_w = transform(&XYZ_TO_CAM16_RGB, white_point);

        let f = 0.8 + surround / 10.0;
        let c = if f >= 0.9 {
            lerp(0.59, 0.69, (f - 0.9) * 10.0)
        } else {
            lerp(0.525, 0.59, (f - 0.8) * 10.0)
        };

        let d = if discounting_illuminant {
            1.0
        } else {
            f * (1.0 - (1.0 / 3.6) * ((-adapting_luminance - 42.0) / 92.0).exp())
        };
        let d = clamp(0.0, 1.0, d);

        let nc = f;
        let rgb_d = rgb_w.map(|w| d * (100.0 / w) + 1.0 - d);

        let k = 1.0 / (5.0 * adapting_luminance + 1.0);
        let k4 = k * k * k * k;
        let k4f = 1.0 - k4;
        let fl = k4 * adapting_luminance + 0.1 * k4f * k4f * (5.0 * adapting_luminance).cbrt();

        let n = y_from_lstar(background_lstar) / white_point.1;
        let z = 1.48 + n.sqrt();
        let nbb = 0.725 / n.powf(0.2);
        let ncb = nbb;

        let rgb_a_factors = Components(
            fl * rgb_d.0 * rgb_w.0 / 100.0,
            fl * rgb_d.1 * rgb_w.1 / 100.0,
            fl * rgb_d.2 * rgb_w.2 / 100.0,
        )
        .map(|v| v.powf(0.42));
        let rgb_a = rgb_a_factors.map(|v| 400.0 * v / (v + 27.13));

        let aw = (2.0 * rgb_a.0 + rgb_a.1 + 0.05 * rgb_a.2) * nbb;

        Self {
            n,
            aw,
            nbb,
            ncb,
            c,
            nc,
            rgb_d,
            fl,
            fl_root: fl.powf(0.25),
            z,
        }
    }

    /// The standard viewing conditions HCT is defined in: a D65 white point,
    /// an adapting luminance of 200/π · Y(L* 50) / 100, a background of L* 50
    /// and an average surround.
    ///
    /// The value is computed once and shared.
    pub fn standard() -> &'static Self {
        &STANDARD
    }

    /// Ratio of the background luminance to the white point luminance.
    pub fn n(&self) -> Component {
        self.n
    }

    /// The achromatic response of the white point.
    pub fn aw(&self) -> Component {
        self.aw
    }

    /// The background induction factor for brightness.
    pub fn nbb(&self) -> Component {
        self.nbb
    }

    /// The background induction factor for chroma.
    pub fn ncb(&self) -> Component {
        self.ncb
    }

    /// The exponential nonlinearity of the surround.
    pub fn c(&self) -> Component {
        self.c
    }

    /// The chromatic induction factor of the surround.
    pub fn nc(&self) -> Component {
        self.nc
    }

    /// The per channel chromatic adaptation factors.
    pub fn rgb_d(&self) -> Components {
        self.rgb_d
    }

    /// The luminance level adaptation factor.
    pub fn fl(&self) -> Component {
        self.fl
    }

    /// The fourth root of [`Self::fl`].
    pub fn fl_root(&self) -> Component {
        self.fl_root
    }

    /// The base exponential nonlinearity.
    pub fn z(&self) -> Component {
        self.z
    }
}

impl Default for ViewingConditions {
    fn default() -> Self {
        *Self::standard()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assert_component_eq;

    #[test]
    fn standard_conditions() {
        let vc = ViewingConditions::standard();
        assert_component_eq!(vc.n(), 0.18418651851244416, 1.0e-9);
        assert_component_eq!(vc.aw(), 29.980997194447333, 1.0e-9);
        assert_component_eq!(vc.nbb(), 1.0169191804458755, 1.0e-9);
        assert_component_eq!(vc.ncb(), vc.nbb());
        assert_component_eq!(vc.c(), 0.69, 1.0e-9);
        assert_component_eq!(vc.nc(), 1.0, 1.0e-9);
        assert_component_eq!(vc.fl(), 0.3884814537800353, 1.0e-9);
        assert_component_eq!(vc.fl_root(), 0.7894826179304937, 1.0e-9);
        assert_component_eq!(vc.z(), 1.909169568483652, 1.0e-9);

        let rgb_d = vc.rgb_d();
        assert_component_eq!(rgb_d.0, 1.02117770275752, 1.0e-9);
        assert_component_eq!(rgb_d.1, 0.9863077294280124, 1.0e-9);
        assert_component_eq!(rgb_d.2, 0.9339605082802299, 1.0e-9);
    }

    #[test]
    fn default_is_standard() {
        assert_eq!(ViewingConditions::default(), *ViewingConditions::standard());
    }

    #[test]
    fn surround_selects_exponential_nonlinearity() {
        let dark = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 0.0, false);
        let dim = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 1.0, false);
        assert_component_eq!(dark.c(), 0.525, 1.0e-9);
        assert_component_eq!(dim.c(), 0.59, 1.0e-9);
        assert_component_eq!(dark.nc(), 0.8, 1.0e-9);
    }

    #[test]
    fn discounting_illuminant_fully_adapts() {
        let vc = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 2.0, true);
        let rgb_w = transform(&XYZ_TO_CAM16_RGB, WHITE_POINT_D65);
        assert_component_eq!(vc.rgb_d().0, 100.0 / rgb_w.0, 1.0e-9);
        assert_component_eq!(vc.rgb_d().1, 100.0 / rgb_w.1, 1.0e-9);
        assert_component_eq!(vc.rgb_d().2, 100.0 / rgb_w.2, 1.0e-9);
    }
}
