//! Gamut mapping for HCT requests.
//!
//! A request for a hue, chroma and tone may not exist as a displayable color,
//! most often because the chroma is too high for that hue and tone. The
//! mapping here keeps the tone, keeps the hue close and gives up as little
//! chroma as possible. It runs two nested binary searches:
//!
//! - the outer search looks for the highest chroma that can be matched, see
//!   [`map_to_gamut`].
//! - the inner search looks for a CAM16 lightness that reproduces the tone at
//!   a fixed hue and chroma, see [`find_cam_by_j`].

use bitflags::bitflags;

use crate::{
    argb::Argb,
    color::Component,
    math::sanitize_degrees,
    models::{argb_from_lstar, lstar_from_argb, Cam16, ViewingConditions},
};

/// The chroma search terminates when the range between the known feasible and
/// known infeasible chroma is smaller than this.
const CHROMA_SEARCH_ENDPOINT: Component = 0.4;

/// The maximum distance, in CAM16-UCS, between a requested color and a match.
const DE_MAX: Component = 1.0;

/// The maximum difference between the requested L* and the L* of a match.
const DL_MAX: Component = 0.2;

/// A distance, in CAM16-UCS, small enough to count as an exact match and stop
/// the lightness search early.
const DE_MAX_ERROR: Component = 0.000000001;

/// The lightness search terminates when the range of J is smaller than this.
const LIGHTNESS_SEARCH_ENDPOINT: Component = 0.01;

bitflags! {
    /// Describes how a request was brought into gamut.
    ///
    /// An empty set means the request was matched at its full chroma.
    #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
    pub struct GamutFlags: u8 {
        /// The request was near neutral or had an extreme tone and was
        /// answered with a gray.
        const ACHROMATIC = 1 << 0;
        /// The requested chroma could not be matched and had to be reduced.
        const CHROMA_REDUCED = 1 << 1;
        /// No chroma could be matched at all, the gray with the requested tone
        /// was used instead.
        const NEUTRAL_FALLBACK = 1 << 2;
    }
}

/// The outcome of a search that may not find anything.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Match<T> {
    /// A value within tolerance was found.
    Found(T),
    /// Nothing within tolerance exists.
    NotFound,
}

impl<T> From<Option<T>> for Match<T> {
    fn from(value: Option<T>) -> Self {
        value.map_or(Self::NotFound, Self::Found)
    }
}

/// A gamut mapped pixel and how it was arrived at.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Mapping {
    /// The displayable color.
    pub argb: Argb,
    /// The path the mapping took.
    pub flags: GamutFlags,
}

/// Result of the chroma search.
#[derive(Debug, PartialEq)]
enum ChromaSearch<T> {
    /// The full requested chroma was matched by the first probe.
    Requested(T),
    /// The highest chroma below the request that could be matched.
    Reduced(T),
    /// No probed chroma could be matched.
    Exhausted,
}

/// Search for the highest chroma in `0..=chroma` for which `probe` finds a
/// match.
///
/// The full chroma is probed first and returned as is when it matches. After
/// that, `low` is the highest chroma known to match (or 0, which always does)
/// and `high` the lowest known not to. Every successful probe raises `low`, so
/// the answer kept is always the most chromatic one found.
fn search_chroma<T>(
    chroma: Component,
    mut probe: impl FnMut(Component) -> Match<T>,
) -> ChromaSearch<T> {
    if let Match::Found(answer) = probe(chroma) {
        return ChromaSearch::Requested(answer);
    }

    let mut low: Component = 0.0;
    let mut high = chroma;
    let mut answer = None;

    while (high - low).abs() >= CHROMA_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;

        match probe(mid) {
            Match::Found(possible_answer) => {
                answer = Some(possible_answer);
                low = mid;
            }
            Match::NotFound => high = mid,
        }
    }

    answer.map_or(ChromaSearch::Exhausted, ChromaSearch::Reduced)
}

/// Map a hue, chroma and tone request to the closest displayable color,
/// rendered in the given viewing conditions.
///
/// The search itself always runs in the standard viewing conditions, where HCT
/// is defined. Only the color it settles on is rendered in `conditions`.
///
/// - `hue`: CAM16 hue in degrees, any value is wrapped into `0.0..360.0`.
/// - `chroma`: CAM16 chroma. The maximum depends on the hue and tone, so the
///   color returned may have a lower chroma.
/// - `tone`: L*, `0..=100`.
///
/// Never fails. When nothing can be matched, or the chroma is not a finite
/// number, the gray with the requested tone is returned.
pub fn map_to_gamut(
    hue: Component,
    chroma: Component,
    tone: Component,
    conditions: &ViewingConditions,
) -> Argb {
    map_to_gamut_with_flags(hue, chroma, tone, conditions).argb
}

/// Same as [`map_to_gamut`], but also reports which path the mapping took.
pub fn map_to_gamut_with_flags(
    hue: Component,
    chroma: Component,
    tone: Component,
    conditions: &ViewingConditions,
) -> Mapping {
    // Near neutral and extreme tones have an exact answer and searching them
    // is numerically unstable. An infinite chroma would never narrow down.
    if !chroma.is_finite() || chroma < 1.0 || tone.round() <= 0.0 || tone.round() >= 100.0 {
        return Mapping {
            argb: argb_from_lstar(tone),
            flags: GamutFlags::ACHROMATIC,
        };
    }

    let hue = sanitize_degrees(hue);

    let search = search_chroma(chroma, |chroma| find_cam_by_j(hue, chroma, tone));

    match search {
        ChromaSearch::Requested(cam) => Mapping {
            argb: cam.viewed(conditions),
            flags: GamutFlags::empty(),
        },
        ChromaSearch::Reduced(cam) => Mapping {
            argb: cam.viewed(conditions),
            flags: GamutFlags::CHROMA_REDUCED,
        },
        ChromaSearch::Exhausted => Mapping {
            argb: argb_from_lstar(tone),
            flags: GamutFlags::CHROMA_REDUCED | GamutFlags::NEUTRAL_FALLBACK,
        },
    }
}

/// Search for a CAM16 lightness J that, at the given hue and chroma, renders
/// to a pixel with the requested tone in the standard viewing conditions.
///
/// Every candidate is rendered, which clips it into gamut, and judged by what
/// was actually rendered: its L* must be within 0.2 of `tone` and its hue must
/// be within a distance of 1.0 of `hue`. Of all candidates that qualify, the
/// last one with the smallest distance wins.
pub fn find_cam_by_j(
    hue: Component,
    chroma: Component,
    tone: Component,
) -> Match<Cam16> {
    let conditions = ViewingConditions::standard();

    let mut low: Component = 0.0;
    let mut high: Component = 100.0;
    let mut best_dl: Component = 1000.0;
    let mut best_de: Component = 1000.0;
    let mut best_cam = None;

    while (low - high).abs() > LIGHTNESS_SEARCH_ENDPOINT {
        let mid = low + (high - low) / 2.0;

        let clipped = Cam16::from_jch(mid, chroma, hue, conditions).viewed(conditions);
        let clipped_lstar = lstar_from_argb(clipped);
        let dl = (tone - clipped_lstar).abs();

        if dl < DL_MAX {
            let cam_clipped = Cam16::from_argb(clipped, conditions);
            let de = cam_clipped.distance(&Cam16::from_jch(
                cam_clipped.j,
                cam_clipped.chroma,
                hue,
                conditions,
            ));
            if de <= DE_MAX && de <= best_de {
                best_dl = dl;
                best_de = de;
                best_cam = Some(cam_clipped);
            }
        }

        if best_dl == 0.0 && best_de < DE_MAX_ERROR {
            break;
        }

        if clipped_lstar < tone {
            low = mid;
        } else {
            high = mid;
        }
    }

    best_cam.into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::math::circular_distance;
    use crate::models::WHITE_POINT_D65;
    use crate::Hct;

    fn standard() -> &'static ViewingConditions {
        ViewingConditions::standard()
    }

    /// A probe that matches every chroma up to `max` and counts its calls.
    fn up_to(
        max: Component,
        calls: &mut usize,
    ) -> impl FnMut(Component) -> Match<Component> + '_ {
        move |chroma| {
            *calls += 1;
            if chroma <= max {
                Match::Found(chroma)
            } else {
                Match::NotFound
            }
        }
    }

    #[test]
    fn feasible_chroma_is_found_with_one_probe() {
        let mut calls = 0;
        let result = search_chroma(40.0, up_to(50.0, &mut calls));
        assert_eq!(result, ChromaSearch::Requested(40.0));
        assert_eq!(calls, 1);
    }

    #[test]
    fn infeasible_chroma_converges_to_maximum_from_below() {
        let mut calls = 0;
        let ChromaSearch::Reduced(chroma) = search_chroma(150.0, up_to(42.3, &mut calls)) else {
            panic!("expected a reduced chroma");
        };
        assert!(chroma <= 42.3);
        assert!(chroma > 42.3 - CHROMA_SEARCH_ENDPOINT);
        // One full probe plus a bisection of 150 down to 0.4.
        assert!(calls <= 10, "{calls} probes");
    }

    #[test]
    fn highest_feasible_chroma_is_kept() {
        // Feasibility does not have to be monotonic; the search keeps the
        // highest match it saw, not the one closest to the request.
        let mut probed = vec![];
        let result = search_chroma(100.0, |chroma| {
            probed.push(chroma);
            if chroma <= 20.0 || (60.0..70.0).contains(&chroma) {
                Match::Found(chroma)
            } else {
                Match::NotFound
            }
        });

        let ChromaSearch::Reduced(chroma) = result else {
            panic!("expected a reduced chroma");
        };
        let max_found = probed
            .iter()
            .copied()
            .filter(|c| *c <= 20.0 || (60.0..70.0).contains(c))
            .fold(0.0, Component::max);
        assert_eq!(chroma, max_found);
    }

    #[test]
    fn first_probe_short_circuits_without_checking_the_boundary() {
        // The requested chroma matches although lower ones do not. The first
        // probe returns it as is; a pure bisection would never have reached it.
        let mut calls = 0;
        let result = search_chroma(100.0, |chroma| {
            calls += 1;
            if chroma == 100.0 || chroma <= 30.0 {
                Match::Found(chroma)
            } else {
                Match::NotFound
            }
        });
        assert_eq!(result, ChromaSearch::Requested(100.0));
        assert_eq!(calls, 1);
    }

    #[test]
    fn nothing_feasible_exhausts() {
        let result = search_chroma(10.0, |_| Match::<()>::NotFound);
        assert_eq!(result, ChromaSearch::Exhausted);
    }

    #[test]
    fn match_conversions() {
        assert_eq!(Match::from(Some(1)), Match::Found(1));
        assert_eq!(Match::<i32>::from(None), Match::NotFound);
    }

    #[test]
    fn near_neutral_requests_are_gray() {
        for hue in [0.0, 45.0, 90.0, 200.0, 300.0] {
            let mapping = map_to_gamut_with_flags(hue, 0.5, 50.0, standard());
            assert_eq!(mapping.argb, argb_from_lstar(50.0));
            assert_eq!(mapping.flags, GamutFlags::ACHROMATIC);
        }
    }

    #[test]
    fn extreme_tones_are_black_and_white() {
        for hue in [0.0, 120.0, 240.0] {
            assert_eq!(map_to_gamut(hue, 80.0, 0.0, standard()), Argb::BLACK);
            assert_eq!(map_to_gamut(hue, 80.0, 100.0, standard()), Argb::WHITE);
            // Rounded to the extremes.
            assert_eq!(map_to_gamut(hue, 80.0, 0.4, standard()), argb_from_lstar(0.4));
            assert_eq!(map_to_gamut(hue, 80.0, 99.5, standard()), argb_from_lstar(99.5));
            // Out of range.
            assert_eq!(map_to_gamut(hue, 80.0, -10.0, standard()), Argb::BLACK);
            assert_eq!(map_to_gamut(hue, 80.0, 120.0, standard()), Argb::WHITE);
        }
    }

    #[test]
    fn in_gamut_request_matches_at_full_chroma() {
        let cam = Cam16::from_argb(Argb(0xFF4285F4), standard());
        let tone = lstar_from_argb(Argb(0xFF4285F4));

        let mapping = map_to_gamut_with_flags(cam.hue, cam.chroma, tone, standard());
        assert_eq!(mapping.argb, Argb(0xFF4285F4));
        assert!(mapping.flags.is_empty());
    }

    #[test]
    fn exact_match_is_found_by_lightness_search() {
        let argb = Argb(0xFFFF0000);
        let cam = Cam16::from_argb(argb, standard());
        let tone = lstar_from_argb(argb);

        let Match::Found(found) = find_cam_by_j(cam.hue, cam.chroma, tone) else {
            panic!("red should be found");
        };
        assert_eq!(found.viewed(standard()), argb);
    }

    #[test]
    fn lightness_search_rejects_impossible_chroma() {
        // No yellow green of this chroma exists at tone 50.
        assert_eq!(
            find_cam_by_j(120.0, 200.0, 50.0),
            Match::NotFound
        );
    }

    #[test]
    fn excessive_chroma_is_reduced() {
        let mapping = map_to_gamut_with_flags(120.0, 200.0, 50.0, standard());
        assert_eq!(mapping.flags, GamutFlags::CHROMA_REDUCED);

        let cam = Cam16::from_argb(mapping.argb, standard());
        assert!(cam.chroma < 200.0);
        assert!(cam.chroma > 40.0, "chroma {}", cam.chroma);
        assert!((lstar_from_argb(mapping.argb) - 50.0).abs() < DL_MAX);
        assert!(circular_distance(cam.hue, 120.0) < 5.0, "hue {}", cam.hue);
    }

    #[test]
    fn result_is_rendered_in_given_conditions() {
        let dark = ViewingConditions::new(WHITE_POINT_D65, 11.72, 50.0, 0.0, false);
        let cam = Cam16::from_argb(Argb(0xFF4285F4), standard());
        let tone = lstar_from_argb(Argb(0xFF4285F4));

        let mapping = map_to_gamut_with_flags(cam.hue, cam.chroma, tone, &dark);
        assert!(mapping.flags.is_empty());
        assert_eq!(mapping.argb, Argb(0xFF0069E4));

        let Match::Found(found) = find_cam_by_j(cam.hue, cam.chroma, tone) else {
            panic!("an existing pixel should be found");
        };
        assert_eq!(mapping.argb, found.viewed(&dark));
        assert_ne!(mapping.argb, Argb(0xFF4285F4));
    }

    #[test]
    fn non_finite_chroma_is_gray() {
        for chroma in [Component::INFINITY, Component::NAN] {
            let mapping = map_to_gamut_with_flags(120.0, chroma, 50.0, standard());
            assert_eq!(mapping.argb, argb_from_lstar(50.0));
            assert_eq!(mapping.flags, GamutFlags::ACHROMATIC);
        }
        assert_eq!(Hct::new(120.0, Component::INFINITY, 50.0).to_argb(), argb_from_lstar(50.0));
    }

    #[test]
    fn hue_is_wrapped() {
        assert_eq!(
            map_to_gamut(30.0 + 360.0, 40.0, 60.0, standard()),
            map_to_gamut(30.0, 40.0, 60.0, standard())
        );
        assert_eq!(
            map_to_gamut(30.0 - 720.0, 40.0, 60.0, standard()),
            map_to_gamut(30.0, 40.0, 60.0, standard())
        );
    }
}
