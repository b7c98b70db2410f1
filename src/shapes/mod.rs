mod aabb;
mod circle;
mod polygon;

pub use aabb::Aabb;
pub use circle::Circle;
pub use polygon::Polygon;

use crate::math::Matrix2;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// Mass properties derived from a shape at a given density.
///
/// The inverse of a zero mass or inertia is zero, which is the static body
/// convention used throughout the crate.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct MassData {
    pub mass: f64,
    pub inv_mass: f64,
    pub inertia: f64,
    pub inv_inertia: f64,
}

impl MassData {
    /// Builds mass data from a mass and inertia, applying the zero guard to
    /// the inverses
    #[inline]
    pub fn new(mass: f64, inertia: f64) -> Self {
        Self {
            mass,
            inv_mass: if mass != 0.0 { 1.0 / mass } else { 0.0 },
            inertia,
            inv_inertia: if inertia != 0.0 { 1.0 / inertia } else { 0.0 },
        }
    }

    /// Mass data for a static body
    #[inline]
    pub fn zero() -> Self {
        Self {
            mass: 0.0,
            inv_mass: 0.0,
            inertia: 0.0,
            inv_inertia: 0.0,
        }
    }
}

/// Collision geometry attached to a body, in body-local space
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub enum Shape {
    Circle(Circle),
    Polygon(Polygon),
}

impl Shape {
    /// Computes the mass properties of the shape at the given density.
    ///
    /// Takes `&mut self` because a polygon re-centers its vertices on its
    /// area-weighted centroid as part of the computation.
    pub fn calc_mass(&mut self, density: f64) -> MassData {
        match self {
            Shape::Circle(circle) => circle.calc_mass(density),
            Shape::Polygon(polygon) => polygon.calc_mass(density),
        }
    }

    /// Builds the body-local bounding box of the shape under the given
    /// orientation. Translation by the body position is left to the consumer.
    pub fn create_aabb(&self, orientation: &Matrix2) -> Aabb {
        match self {
            Shape::Circle(circle) => circle.create_aabb(),
            Shape::Polygon(polygon) => polygon.create_aabb(orientation),
        }
    }
}

impl From<Circle> for Shape {
    fn from(circle: Circle) -> Self {
        Shape::Circle(circle)
    }
}

impl From<Polygon> for Shape {
    fn from(polygon: Polygon) -> Self {
        Shape::Polygon(polygon)
    }
}
