use crate::bodies::RigidBody;
use crate::math::Vector2;

/// A spring-damper joint between a body and a fixed point in world space.
///
/// The attachment point on the body is defined by an offset in the body's
/// local space and recomputed from the body's current position and
/// orientation before every tension application. Tension follows Hooke's law
/// plus motion damping; when the joint can go slack, separations shorter
/// than the natural length produce no tension at all.
#[derive(Debug, Clone)]
pub struct JointToPoint {
    point_attached_to: Vector2,
    natural_length: f64,
    spring_constant: f64,
    damping_constant: f64,
    can_go_slack: bool,
    offset: Vector2,
    attachment_point: Vector2,
}

impl JointToPoint {
    /// Creates a joint from a body to a fixed world point.
    ///
    /// `offset` locates the attachment point in the body's local space.
    pub fn new(
        body: &RigidBody,
        point_attached_to: Vector2,
        natural_length: f64,
        spring_constant: f64,
        damping_constant: f64,
        can_go_slack: bool,
        offset: Vector2,
    ) -> Self {
        let attachment_point = body.position() + body.orientation().multiply_vector(offset);
        Self {
            point_attached_to,
            natural_length,
            spring_constant,
            damping_constant,
            can_go_slack,
            offset,
            attachment_point,
        }
    }

    /// Returns the fixed world point the joint pulls toward
    #[inline]
    pub fn point_attached_to(&self) -> Vector2 {
        self.point_attached_to
    }

    /// Returns the world-space attachment point from the last update
    #[inline]
    pub fn attachment_point(&self) -> Vector2 {
        self.attachment_point
    }

    /// World-space attachment point for the body's current state
    fn current_attachment_point(&self, body: &RigidBody) -> Vector2 {
        body.position() + body.orientation().multiply_vector(self.offset)
    }

    /// Recomputes the attachment point and applies the tension impulse to
    /// the body at the attachment point's offset from the centre of mass,
    /// producing both a linear and an angular effect
    pub fn apply_tension(&mut self, body: &mut RigidBody) {
        self.attachment_point = self.current_attachment_point(body);
        let tension = self.calculate_tension(body);
        let direction = (self.point_attached_to - self.attachment_point).normalize();
        let impulse = direction * tension;
        body.apply_linear_impulse_at(impulse, self.attachment_point - body.position());
    }

    /// Calculates the tension force magnitude for the body's current state.
    ///
    /// Zero when the joint can go slack and the separation is below the
    /// natural length; otherwise the Hooke's-law term plus damping against
    /// the rate of change of the extension.
    pub fn calculate_tension(&self, body: &RigidBody) -> f64 {
        let attachment = self.current_attachment_point(body);
        let distance = (attachment - self.point_attached_to).length();
        if distance < self.natural_length && self.can_go_slack {
            return 0.0;
        }
        let extension = distance - self.natural_length;
        let tension_due_to_hookes_law = extension * self.spring_constant;
        let tension_due_to_motion_damping =
            self.damping_constant * self.rate_of_change_of_extension(body);
        tension_due_to_hookes_law + tension_due_to_motion_damping
    }

    /// Rate of change of the extension: the relative velocity of the
    /// attachment point projected onto the direction toward the fixed point
    pub fn rate_of_change_of_extension(&self, body: &RigidBody) -> f64 {
        let attachment = self.current_attachment_point(body);
        let direction = (self.point_attached_to - attachment).normalize();
        let relative_velocity = -body.linear_velocity()
            - (attachment - body.position()).perpendicular() * body.angular_velocity();
        relative_velocity.dot(&direction)
    }
}
