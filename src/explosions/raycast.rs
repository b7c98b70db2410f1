use crate::bodies::RigidBody;
use crate::math::Vector2;
use crate::rays::{RayInformation, RayScatter};
use crate::Result;

/// An explosion that discovers its targets by casting a scatter of rays
/// from the epicentre. Only bodies a ray actually reaches are affected, so
/// obstacles shadow the blast.
#[derive(Debug, Clone)]
pub struct RaycastExplosion {
    scatter: RayScatter,
    rays_in_contact: Vec<RayInformation>,
}

impl RaycastExplosion {
    /// Creates a raycast explosion with `no_of_rays` rays of the given
    /// length around the epicentre
    pub fn new(epicentre: Vector2, no_of_rays: usize, distance: f64) -> Result<Self> {
        Ok(Self {
            scatter: RayScatter::new(epicentre, no_of_rays, distance)?,
            rays_in_contact: Vec::new(),
        })
    }

    /// Returns the epicentre of the explosion
    #[inline]
    pub fn epicentre(&self) -> Vector2 {
        self.scatter.epicentre()
    }

    /// Moves the epicentre, re-seating every scatter ray
    #[inline]
    pub fn set_epicentre(&mut self, epicentre: Vector2) {
        self.scatter.set_epicentre(epicentre);
    }

    /// Returns the ray hits collected by the last update
    #[inline]
    pub fn rays_in_contact(&self) -> &[RayInformation] {
        &self.rays_in_contact
    }

    /// Re-casts the scatter against the body slice and keeps only the rays
    /// that hit something
    pub fn update(&mut self, bodies: &[RigidBody]) {
        self.rays_in_contact.clear();
        self.scatter.update_rays(bodies);
        for ray in self.scatter.rays() {
            if let Some(info) = ray.information() {
                self.rays_in_contact.push(*info);
            }
        }
    }

    /// Applies an impulse of magnitude `blast_power / distance` along each
    /// hit ray, at the hit point's offset from the hit body's centre of
    /// mass. Hitting a body away from its centre therefore spins it.
    ///
    /// A hit exactly on the epicentre stops impulse application entirely,
    /// the same short-circuit as the proximity explosion.
    pub fn apply_blast_impulse(&mut self, bodies: &mut [RigidBody], blast_power: f64) {
        for info in &self.rays_in_contact {
            let blast_dir = info.coordinates - self.scatter.epicentre();
            let distance = blast_dir.length();
            if distance == 0.0 {
                return;
            }
            let inv_distance = 1.0 / distance;
            let impulse = blast_dir.normalize() * (blast_power * inv_distance);
            let body = &mut bodies[info.body];
            body.apply_linear_impulse_at(impulse, info.coordinates - body.position());
        }
    }
}
