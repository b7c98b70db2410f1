mod proximity;
mod raycast;

pub use proximity::ProximityExplosion;
pub use raycast::RaycastExplosion;

use crate::bodies::RigidBody;
use crate::math::Vector2;

/// A transient radial force field applying impulses to nearby bodies.
///
/// Both variants rebuild their affected set from scratch on every call to
/// `update`; nothing is retained across ticks.
#[derive(Debug, Clone)]
pub enum Explosion {
    /// Affects every body whose centre lies within a radius of the epicentre
    Proximity(ProximityExplosion),

    /// Affects the bodies hit by a scatter of rays cast from the epicentre
    Raycast(RaycastExplosion),
}

impl Explosion {
    /// Moves the epicentre of the explosion
    pub fn set_epicentre(&mut self, epicentre: Vector2) {
        match self {
            Explosion::Proximity(explosion) => explosion.set_epicentre(epicentre),
            Explosion::Raycast(explosion) => explosion.set_epicentre(epicentre),
        }
    }

    /// Re-evaluates which bodies the explosion currently reaches
    pub fn update(&mut self, bodies: &[RigidBody]) {
        match self {
            Explosion::Proximity(explosion) => explosion.update(bodies),
            Explosion::Raycast(explosion) => explosion.update(bodies),
        }
    }

    /// Applies the blast impulse to every reached body.
    ///
    /// `bodies` must be the same slice the last `update` evaluated.
    pub fn apply_blast_impulse(&mut self, bodies: &mut [RigidBody], blast_power: f64) {
        match self {
            Explosion::Proximity(explosion) => explosion.apply_blast_impulse(bodies, blast_power),
            Explosion::Raycast(explosion) => explosion.apply_blast_impulse(bodies, blast_power),
        }
    }
}

impl From<ProximityExplosion> for Explosion {
    fn from(explosion: ProximityExplosion) -> Self {
        Explosion::Proximity(explosion)
    }
}

impl From<RaycastExplosion> for Explosion {
    fn from(explosion: RaycastExplosion) -> Self {
        Explosion::Raycast(explosion)
    }
}
