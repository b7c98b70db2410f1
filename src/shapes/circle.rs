use crate::error::PhysicsError;
use crate::shapes::{Aabb, MassData};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A circle shape centered on its body-local origin
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Circle {
    radius: f64,
}

impl Circle {
    /// Creates a new circle with the given radius
    pub fn new(radius: f64) -> Result<Self> {
        if radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "circle radius must be positive, got {radius}"
            )));
        }
        Ok(Self { radius })
    }

    /// Returns the radius of the circle
    #[inline]
    pub fn radius(&self) -> f64 {
        self.radius
    }

    /// Computes the mass properties of the circle at the given density.
    ///
    /// The inertia is the point-mass analogue mass * r^2, not the disk's
    /// second moment of 0.5 * mass * r^2. The engine has always used this
    /// value, so it is kept for behavioural compatibility.
    pub fn calc_mass(&self, density: f64) -> MassData {
        let mass = std::f64::consts::PI * self.radius * self.radius * density;
        MassData::new(mass, mass * self.radius * self.radius)
    }

    /// Builds the body-local bounding box of the circle
    pub fn create_aabb(&self) -> Aabb {
        Aabb::from_half_extent(self.radius)
    }
}
