//! Models are structs that represent a color in one of the spaces HCT is
//! built from: CIE-XYZ, linear sRGB, CIE L* and CAM16.

mod cam16;
mod lab;
mod rgb;
mod viewing_conditions;
mod xyz;

pub use cam16::*;
pub use lab::*;
pub use rgb::*;
pub use viewing_conditions::*;
pub use xyz::*;
