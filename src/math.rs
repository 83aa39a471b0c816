//! Math utility functions.

use euclid::default::{Transform3D, Vector3D};
use num_traits::Float;

use crate::color::{Component, Components};

/// A 3x3 color matrix, stored in the upper left corner of a 4x4 transform.
pub type Transform = Transform3D<Component>;

type Vector = Vector3D<Component>;

/// Build a [`Transform`] from the 9 values of a 3x3 matrix, given row by row.
///
/// Vectors are multiplied as rows, so a matrix that is usually written to be
/// applied to a column vector has to be given transposed.
#[allow(clippy::too_many_arguments)]
pub const fn transform_3x3(
    m11: Component,
    m12: Component,
    m13: Component,
    m21: Component,
    m22: Component,
    m23: Component,
    m31: Component,
    m32: Component,
    m33: Component,
) -> Transform {
    Transform::new(
        m11, m12, m13, 0.0, //
        m21, m22, m23, 0.0, //
        m31, m32, m33, 0.0, //
        0.0, 0.0, 0.0, 1.0,
    )
}

/// Multiply the row vector `row` with `matrix`.
pub fn matrix_multiply(row: [Component; 3], matrix: &Transform) -> [Component; 3] {
    let Vector { x, y, z, .. } = matrix.transform_vector3d(Vector::new(row[0], row[1], row[2]));
    [x, y, z]
}

/// Multiply the given matrix in `transform` with the 3 components.
pub fn transform(transform: &Transform, components: Components) -> Components {
    matrix_multiply(components.to_array(), transform).into()
}

/// -1 if `value` is negative, 0 if it is zero and 1 otherwise.
pub fn signum<T: Float>(value: T) -> T {
    if value < T::zero() {
        -T::one()
    } else if value == T::zero() {
        T::zero()
    } else {
        T::one()
    }
}

/// Linear interpolation from `start` (at `t` = 0) to `end` (at `t` = 1).
pub fn lerp<T: Float>(start: T, end: T, t: T) -> T {
    (T::one() - t) * start + t * end
}

/// Bound `value` to the range `min..=max`.
pub fn clamp<T: PartialOrd>(min: T, max: T, value: T) -> T {
    if value < min {
        min
    } else if value > max {
        max
    } else {
        value
    }
}

/// Wrap an angle in degrees into `0.0..360.0`.
pub fn sanitize_degrees(degrees: Component) -> Component {
    let degrees = degrees % 360.0;
    let degrees = if degrees < 0.0 { degrees + 360.0 } else { degrees };
    // Tiny negative angles round up to exactly 360.0 above.
    if degrees >= 360.0 {
        degrees - 360.0
    } else {
        degrees
    }
}

/// The shortest distance between two angles on the circle, in degrees.
pub fn circular_distance(a: Component, b: Component) -> Component {
    180.0 - ((a - b).abs() - 180.0).abs()
}
