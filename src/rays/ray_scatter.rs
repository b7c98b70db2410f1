use crate::bodies::RigidBody;
use crate::error::PhysicsError;
use crate::math::{Matrix2, Vector2};
use crate::rays::Ray;
use crate::Result;

/// A bundle of rays distributed a full turn around a common epicentre.
///
/// Used by the raycast explosion to discover which bodies an omnidirectional
/// blast can reach.
#[derive(Debug, Clone)]
pub struct RayScatter {
    epicentre: Vector2,
    rays: Vec<Ray>,
}

impl RayScatter {
    /// Creates a scatter of `no_of_rays` rays of the given length around the
    /// epicentre
    pub fn new(epicentre: Vector2, no_of_rays: usize, distance: f64) -> Result<Self> {
        if no_of_rays == 0 {
            return Err(PhysicsError::InvalidParameter(
                "ray scatter needs at least one ray".to_string(),
            ));
        }
        let mut scatter = Self {
            epicentre,
            rays: Vec::with_capacity(no_of_rays),
        };
        scatter.cast_rays(no_of_rays, distance);
        Ok(scatter)
    }

    /// Returns the epicentre of the scatter
    #[inline]
    pub fn epicentre(&self) -> Vector2 {
        self.epicentre
    }

    /// Moves the epicentre, re-seating the origin of every ray
    pub fn set_epicentre(&mut self, epicentre: Vector2) {
        self.epicentre = epicentre;
        for ray in &mut self.rays {
            ray.set_start_point(epicentre);
        }
    }

    /// Returns the rays of the scatter
    #[inline]
    pub fn rays(&self) -> &[Ray] {
        &self.rays
    }

    /// Distributes the rays evenly around the epicentre, one step of
    /// 2 pi / n apart
    fn cast_rays(&mut self, no_of_rays: usize, distance: f64) {
        let angle_step = 2.0 * std::f64::consts::PI / no_of_rays as f64;
        let rotation = Matrix2::from_angle(angle_step);
        let mut direction = Vector2::new(1.0, 1.0);
        self.rays.clear();
        for _ in 0..no_of_rays {
            self.rays.push(Ray::new(self.epicentre, direction, distance));
            direction = rotation.multiply_vector(direction);
        }
    }

    /// Re-evaluates every ray in the scatter against the body slice
    pub fn update_rays(&mut self, bodies: &[RigidBody]) {
        for ray in &mut self.rays {
            ray.update_projection(bodies);
        }
    }
}
