//! Scalar and triple types shared by every color model in the crate.

/// A 64-bit floating point value that all components are stored as.
///
/// The gamut search compares distances against thresholds as small as `1e-9`,
/// so single precision is not enough.
pub type Component = f64;

/// Represent the three components that describe any color.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Components(pub Component, pub Component, pub Component);

impl Components {
    /// Return new components with each component mapped with the given
    /// function.
    pub fn map(&self, f: impl Fn(Component) -> Component) -> Self {
        Self(f(self.0), f(self.1), f(self.2))
    }

    /// Return the components as an array.
    pub fn to_array(&self) -> [Component; 3] {
        [self.0, self.1, self.2]
    }
}

impl From<[Component; 3]> for Components {
    fn from([c0, c1, c2]: [Component; 3]) -> Self {
        Self(c0, c1, c2)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn map_applies_to_each_component() {
        let c = Components(1.0, 2.0, 3.0).map(|v| v * 10.0);
        assert_eq!(c, Components(10.0, 20.0, 30.0));
    }

    #[test]
    fn array_conversions() {
        let c = Components::from([0.1, 0.2, 0.3]);
        assert_eq!(c, Components(0.1, 0.2, 0.3));
        assert_eq!(c.to_array(), [0.1, 0.2, 0.3]);
    }
}
