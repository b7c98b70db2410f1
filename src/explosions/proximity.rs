use crate::bodies::RigidBody;
use crate::math::Vector2;

/// An explosion affecting every body whose centre lies within a fixed
/// proximity of the epicentre, boundary inclusive.
#[derive(Debug, Clone)]
pub struct ProximityExplosion {
    epicentre: Vector2,
    proximity: f64,
    bodies_affected: Vec<usize>,
}

impl ProximityExplosion {
    /// Creates a proximity explosion at the given epicentre
    pub fn new(epicentre: Vector2, proximity: f64) -> Self {
        Self {
            epicentre,
            proximity,
            bodies_affected: Vec::new(),
        }
    }

    /// Returns the epicentre of the explosion
    #[inline]
    pub fn epicentre(&self) -> Vector2 {
        self.epicentre
    }

    /// Moves the epicentre of the explosion
    #[inline]
    pub fn set_epicentre(&mut self, epicentre: Vector2) {
        self.epicentre = epicentre;
    }

    /// Returns the proximity radius
    #[inline]
    pub fn proximity(&self) -> f64 {
        self.proximity
    }

    /// Returns the indices of the bodies the last update found in range
    #[inline]
    pub fn bodies_affected(&self) -> &[usize] {
        &self.bodies_affected
    }

    /// Rebuilds the affected set: every body whose centre is within the
    /// proximity of the epicentre, boundary inclusive
    pub fn update(&mut self, bodies: &[RigidBody]) {
        self.bodies_affected.clear();
        for (index, body) in bodies.iter().enumerate() {
            let blast_dist = body.position() - self.epicentre;
            if blast_dist.length() <= self.proximity {
                self.bodies_affected.push(index);
            }
        }
    }

    /// Applies an impulse of magnitude `blast_power / distance` away from
    /// the epicentre at each affected body's centre of mass.
    ///
    /// A body sitting exactly on the epicentre has no defined blast
    /// direction; impulse application stops entirely when one is
    /// encountered, leaving any remaining bodies in this call untouched.
    /// Callers relying on the impulse should keep the epicentre off body
    /// centres.
    pub fn apply_blast_impulse(&mut self, bodies: &mut [RigidBody], blast_power: f64) {
        for &index in &self.bodies_affected {
            let body = &mut bodies[index];
            let blast_dir = body.position() - self.epicentre;
            let distance = blast_dir.length();
            if distance == 0.0 {
                return;
            }
            let inv_distance = 1.0 / distance;
            let impulse_mag = blast_power * inv_distance;
            body.apply_linear_impulse(blast_dir.normalize() * impulse_mag);
        }
    }
}
