pub mod math;
pub mod shapes;
pub mod bodies;
pub mod rays;
pub mod joints;
pub mod explosions;

/// Re-export common types for easier usage
pub use crate::math::{Vector2, Matrix2};
pub use crate::shapes::{Shape, Circle, Polygon, Aabb, MassData};
pub use crate::bodies::{RigidBody, BodyFlags};
pub use crate::rays::{Ray, RayInformation, ShadowCasting};
pub use crate::joints::{Joint, JointToPoint};
pub use crate::explosions::{Explosion, ProximityExplosion, RaycastExplosion};

/// Error types for the physics core
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),

        #[error("Invalid geometry: {0}")]
        InvalidGeometry(String),
    }
}

/// Result type for physics core operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
