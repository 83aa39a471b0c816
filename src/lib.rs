//! hct describes colors by hue, chroma and tone, and finds the closest
//! displayable sRGB color for any such description.
//!
//! Hue and chroma come from the CAM16 color appearance model and tone is CIE
//! L*. Together they let colors be picked by how they look: two colors with the
//! same tone have the same perceived lightness, whatever their hue.
//!
//! ```
//! use hct::{Argb, Hct};
//!
//! let blue = Hct::from_argb(Argb(0xFF4285F4));
//! let lighter = blue.with_tone(80.0);
//! assert!(lighter.tone() > blue.tone());
//!
//! // Not every request can be displayed, chroma is reduced to fit.
//! let green = Hct::new(120.0, 200.0, 50.0);
//! assert!(green.chroma() < 200.0);
//! ```

#![deny(missing_docs)]

mod argb;
mod color;
pub mod gamut;
mod hct;
pub mod math;
pub mod models;


pub use argb::{Argb, ParseArgbError};
pub use color::{Component, Components};
pub use gamut::{map_to_gamut, GamutFlags, Mapping, Match};
pub use hct::Hct;
pub use models::{Cam16, ViewingConditions};
