use crate::bodies::BodyFlags;
use crate::math::{Matrix2, Vector2};
use crate::shapes::{Aabb, MassData, Shape};

/// A rigid body for 2D physics simulation.
///
/// The body owns its shape; geometry queries receive the body's kinematic
/// state explicitly instead of the shape holding a back-reference. Mass
/// properties and the body-local bounding box are derived from the shape
/// when it is attached and whenever the density changes.
#[derive(Debug, Clone)]
pub struct RigidBody {
    /// The body's position in world space
    position: Vector2,

    /// The body's orientation angle in radians
    orientation_angle: f64,

    /// The rotation matrix for the current orientation
    orientation: Matrix2,

    /// The body's linear velocity
    linear_velocity: Vector2,

    /// The body's angular velocity
    angular_velocity: f64,

    /// Mass, inertia and their inverses
    mass_data: MassData,

    /// The body's collision shape, in body-local space
    shape: Shape,

    /// Bounding box of the shape in body-local space
    aabb: Aabb,

    /// The body's flags
    flags: BodyFlags,
}

impl RigidBody {
    /// Creates a new rigid body with the given shape at the given position.
    ///
    /// Mass properties are computed at density 1; use
    /// [`RigidBody::set_density`] to change them, with density 0 making the
    /// body static.
    pub fn new(shape: Shape, position: Vector2) -> Self {
        let mut shape = shape;
        let mass_data = shape.calc_mass(1.0);
        let orientation = Matrix2::identity();
        let aabb = shape.create_aabb(&orientation);
        Self {
            position,
            orientation_angle: 0.0,
            orientation,
            linear_velocity: Vector2::zero(),
            angular_velocity: 0.0,
            mass_data,
            shape,
            aabb,
            flags: BodyFlags::default(),
        }
    }

    /// Recomputes the mass properties for a new density. A density of zero
    /// makes the body static (zero mass and inertia, zero inverses).
    pub fn set_density(&mut self, density: f64) {
        if density == 0.0 {
            self.mass_data = MassData::zero();
        } else {
            self.mass_data = self.shape.calc_mass(density);
        }
    }

    /// Returns the body's position
    #[inline]
    pub fn position(&self) -> Vector2 {
        self.position
    }

    /// Sets the body's position
    #[inline]
    pub fn set_position(&mut self, position: Vector2) {
        self.position = position;
    }

    /// Returns the body's orientation angle in radians
    #[inline]
    pub fn orientation_angle(&self) -> f64 {
        self.orientation_angle
    }

    /// Returns the rotation matrix for the body's orientation
    #[inline]
    pub fn orientation(&self) -> &Matrix2 {
        &self.orientation
    }

    /// Sets the body's orientation from an angle in radians
    pub fn set_orientation(&mut self, radians: f64) {
        self.orientation_angle = radians;
        self.orientation.set_angle(radians);
    }

    /// Returns the body's linear velocity
    #[inline]
    pub fn linear_velocity(&self) -> Vector2 {
        self.linear_velocity
    }

    /// Sets the body's linear velocity
    #[inline]
    pub fn set_linear_velocity(&mut self, velocity: Vector2) {
        self.linear_velocity = velocity;
    }

    /// Returns the body's angular velocity
    #[inline]
    pub fn angular_velocity(&self) -> f64 {
        self.angular_velocity
    }

    /// Sets the body's angular velocity
    #[inline]
    pub fn set_angular_velocity(&mut self, velocity: f64) {
        self.angular_velocity = velocity;
    }

    /// Returns the body's mass properties
    #[inline]
    pub fn mass_data(&self) -> MassData {
        self.mass_data
    }

    /// Returns the body's mass
    #[inline]
    pub fn mass(&self) -> f64 {
        self.mass_data.mass
    }

    /// Returns the inverse of the body's mass
    #[inline]
    pub fn inv_mass(&self) -> f64 {
        self.mass_data.inv_mass
    }

    /// Returns the body's moment of inertia
    #[inline]
    pub fn inertia(&self) -> f64 {
        self.mass_data.inertia
    }

    /// Returns the inverse of the body's moment of inertia
    #[inline]
    pub fn inv_inertia(&self) -> f64 {
        self.mass_data.inv_inertia
    }

    /// Returns the body's shape
    #[inline]
    pub fn shape(&self) -> &Shape {
        &self.shape
    }

    /// Returns the body-local bounding box
    #[inline]
    pub fn aabb(&self) -> &Aabb {
        &self.aabb
    }

    /// Refreshes the body-local bounding box from the current orientation
    pub fn update_aabb(&mut self) {
        self.aabb = self.shape.create_aabb(&self.orientation);
    }

    /// Returns the body's flags
    #[inline]
    pub fn flags(&self) -> BodyFlags {
        self.flags
    }

    /// Sets the body's flags
    #[inline]
    pub fn set_flags(&mut self, flags: BodyFlags) {
        self.flags = flags;
    }

    /// Applies a linear impulse at the centre of mass
    #[inline]
    pub fn apply_linear_impulse(&mut self, impulse: Vector2) {
        self.linear_velocity += impulse * self.mass_data.inv_mass;
    }

    /// Applies a linear impulse at an offset from the centre of mass,
    /// affecting both linear and angular velocity
    #[inline]
    pub fn apply_linear_impulse_at(&mut self, impulse: Vector2, contact_point: Vector2) {
        self.linear_velocity += impulse * self.mass_data.inv_mass;
        self.angular_velocity += self.mass_data.inv_inertia * contact_point.cross(&impulse);
    }

    /// Returns true if the world-space point lies inside the body's shape
    /// (boundary inclusive)
    pub fn contains_point(&self, point: Vector2) -> bool {
        match &self.shape {
            Shape::Polygon(polygon) => {
                for (vertex, normal) in polygon.vertices().iter().zip(polygon.normals()) {
                    let world_vertex = self.position + self.orientation.multiply_vector(*vertex);
                    let world_normal = self.orientation.multiply_vector(*normal);
                    if (point - world_vertex).dot(&world_normal) > 0.0 {
                        return false;
                    }
                }
                true
            }
            Shape::Circle(circle) => {
                (self.position - point).length() <= circle.radius()
            }
        }
    }
}
