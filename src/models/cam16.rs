//! The CAM16 color appearance model.
//!
//! CAM16 predicts how a color is perceived under a set of
//! [`ViewingConditions`]. HCT takes its hue and chroma from here. The
//! rectangular coordinates of CAM16-UCS (`jstar`, `astar`, `bstar`) are kept as
//! well, since color distance is measured in that space.

use crate::{
    argb::Argb,
    color::{Component, Components},
    math::{sanitize_degrees, signum, transform, transform_3x3, Transform},
    models::{rgb::LinearSrgb, viewing_conditions::ViewingConditions, xyz::Xyz},
};

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
pub(crate) const XYZ_TO_CAM16_RGB: Transform = transform_3x3(
     0.401288, -0.250268, -0.002079,
     0.650173,  1.204414,  0.048952,
    -0.051461,  0.045854,  0.953127,
);

#[rustfmt::skip]
#[allow(clippy::excessive_precision)]
const CAM16_RGB_TO_XYZ: Transform = transform_3x3(
     1.8620678,  0.38752654, -0.01584150,
    -1.0112547,  0.62144744, -0.03412294,
     0.14918678, -0.00897398, 1.0499644,
);

/// A color described by the CAM16 appearance correlates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Cam16 {
    /// Hue angle in degrees, `0.0..360.0`.
    pub hue: Component,
    /// Chroma, informally colorfulness relative to the brightness of white.
    pub chroma: Component,
    /// Lightness, `0..=100`.
    pub j: Component,
    /// Brightness.
    pub q: Component,
    /// Colorfulness.
    pub m: Component,
    /// Saturation.
    pub s: Component,
    /// Lightness in CAM16-UCS.
    pub jstar: Component,
    /// The a* coordinate in CAM16-UCS.
    pub astar: Component,
    /// The b* coordinate in CAM16-UCS.
    pub bstar: Component,
}

impl Cam16 {
    /// The appearance of a pixel under the given viewing conditions.
    pub fn from_argb(argb: Argb, conditions: &ViewingConditions) -> Self {
        Self::from_xyz(LinearSrgb::from_argb(argb).to_xyz(), conditions)
    }

    /// The appearance of a CIE-XYZ color under the given viewing conditions.
    pub fn from_xyz(xyz: Xyz, conditions: &ViewingConditions) -> Self {
        let vc = conditions;

        // Chromatic adaptation.
        let rgb_c = transform(&XYZ_TO_CAM16_RGB, xyz.to_components());
        let rgb_d = vc.rgb_d();
        let rgb_d = Components(rgb_d.0 * rgb_c.0, rgb_d.1 * rgb_c.1, rgb_d.2 * rgb_c.2);

        // Post adaptation cone response.
        let Components(r_a, g_a, b_a) = rgb_d.map(|component| {
            let af = (vc.fl() * component.abs() / 100.0).powf(0.42);
            signum(component) * 400.0 * af / (af + 27.13)
        });

        // Redness-greenness and yellowness-blueness.
        let a = (11.0 * r_a + -12.0 * g_a + b_a) / 11.0;
        let b = (r_a + g_a - 2.0 * b_a) / 9.0;

        let u = (20.0 * r_a + 20.0 * g_a + 21.0 * b_a) / 20.0;
        let p2 = (40.0 * r_a + 20.0 * g_a + b_a) / 20.0;

        let hue = sanitize_degrees(b.atan2(a).to_degrees());
        let hue_radians = hue.to_radians();

        // Achromatic response to the color.
        let ac = p2 * vc.nbb();

        let j = 100.0 * (ac / vc.aw()).powf(vc.c() * vc.z());
        let q = (4.0 / vc.c()) * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();

        let hue_prime = if hue < 20.14 { hue + 360.0 } else { hue };
        let e_hue = 0.25 * ((hue_prime.to_radians() + 2.0).cos() + 3.8);
        let p1 = 50000.0 / 13.0 * e_hue * vc.nc() * vc.ncb();
        let t = p1 * a.hypot(b) / (u + 0.305);
        let alpha = (1.64 - 0.29_f64.powf(vc.n())).powf(0.73) * t.powf(0.9);

        let chroma = alpha * (j / 100.0).sqrt();
        let m = chroma * vc.fl_root();
        let s = 50.0 * ((alpha * vc.c()) / (vc.aw() + 4.0)).sqrt();

        Self::with_ucs(hue, chroma, j, q, m, s, hue_radians)
    }

    /// Create a color from lightness `j`, `chroma` and `hue` in degrees.
    ///
    /// The result need not be a real color; rendering it with
    /// [`Cam16::viewed`] clips it into the sRGB gamut.
    pub fn from_jch(
        j: Component,
        chroma: Component,
        hue: Component,
        conditions: &ViewingConditions,
    ) -> Self {
        let vc = conditions;

        let q = 4.0 / vc.c() * (j / 100.0).sqrt() * (vc.aw() + 4.0) * vc.fl_root();
        let m = chroma * vc.fl_root();
        let alpha = chroma / (j / 100.0).sqrt();
        let s = 50.0 * ((alpha * vc.c()) / (vc.aw() + 4.0)).sqrt();

        Self::with_ucs(hue, chroma, j, q, m, s, hue.to_radians())
    }

    #[allow(clippy::too_many_arguments)]
    fn with_ucs(
        hue: Component,
        chroma: Component,
        j: Component,
        q: Component,
        m: Component,
        s: Component,
        hue_radians: Component,
    ) -> Self {
        let jstar = (1.0 + 100.0 * 0.007) * j / (1.0 + 0.007 * j);
        let mstar = 1.0 / 0.0228 * (0.0228 * m).ln_1p();

        Self {
            hue,
            chroma,
            j,
            q,
            m,
            s,
            jstar,
            astar: mstar * hue_radians.cos(),
            bstar: mstar * hue_radians.sin(),
        }
    }

    /// The perceptual distance to `other`, measured in CAM16-UCS.
    ///
    /// A distance of 1.0 is roughly one just noticeable difference.
    pub fn distance(&self, other: &Self) -> Component {
        let dj = self.jstar - other.jstar;
        let da = self.astar - other.astar;
        let db = self.bstar - other.bstar;
        let de_prime = (dj * dj + da * da + db * db).sqrt();
        1.41 * de_prime.powf(0.63)
    }

    /// The CIE-XYZ color that has this appearance under the given viewing
    /// conditions.
    pub fn xyz_in(&self, conditions: &ViewingConditions) -> Xyz {
        let vc = conditions;

        let alpha = if self.chroma == 0.0 || self.j == 0.0 {
            0.0
        } else {
            self.chroma / (self.j / 100.0).sqrt()
        };

        let t = (alpha / (1.64 - 0.29_f64.powf(vc.n())).powf(0.73)).powf(1.0 / 0.9);
        let h_rad = self.hue.to_radians();

        let e_hue = 0.25 * ((h_rad + 2.0).cos() + 3.8);
        let ac = vc.aw() * (self.j / 100.0).powf(1.0 / vc.c() / vc.z());
        let p1 = e_hue * (50000.0 / 13.0) * vc.nc() * vc.ncb();
        let p2 = ac / vc.nbb();

        let h_sin = h_rad.sin();
        let h_cos = h_rad.cos();

        let gamma =
            23.0 * (p2 + 0.305) * t / (23.0 * p1 + 11.0 * t * h_cos + 108.0 * t * h_sin);
        let a = gamma * h_cos;
        let b = gamma * h_sin;

        let r_a = (460.0 * p2 + 451.0 * a + 288.0 * b) / 1403.0;
        let g_a = (460.0 * p2 - 891.0 * a - 261.0 * b) / 1403.0;
        let b_a = (460.0 * p2 - 220.0 * a - 6300.0 * b) / 1403.0;

        // Undo the post adaptation cone response.
        let rgb_c = Components(r_a, g_a, b_a).map(|component| {
            let base = ((27.13 * component.abs()) / (400.0 - component.abs())).max(0.0);
            signum(component) * (100.0 / vc.fl()) * base.powf(1.0 / 0.42)
        });

        // Undo the chromatic adaptation.
        let rgb_d = vc.rgb_d();
        let rgb_f = Components(rgb_c.0 / rgb_d.0, rgb_c.1 / rgb_d.1, rgb_c.2 / rgb_d.2);

        transform(&CAM16_RGB_TO_XYZ, rgb_f).into()
    }

    /// Render this color as the pixel that has this appearance under the given
    /// viewing conditions.
    ///
    /// NOTE: This is a lossy operation. Colors outside of the sRGB gamut are
    /// clipped.
    pub fn viewed(&self, conditions: &ViewingConditions) -> Argb {
        LinearSrgb::from(self.xyz_in(conditions)).to_argb()
    }

    /// Render this color in the standard viewing conditions.
    pub fn to_argb(&self) -> Argb {
        self.viewed(ViewingConditions::standard())
    }
}
