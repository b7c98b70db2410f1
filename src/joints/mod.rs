mod joint_to_point;

pub use joint_to_point::JointToPoint;

use crate::bodies::RigidBody;

/// A spring-damper constraint attached to a body.
///
/// The variants form a closed set dispatched by match; each converts a
/// distance error into an impulse applied to the body's momentum once per
/// tick.
#[derive(Debug, Clone)]
pub enum Joint {
    /// A joint between a body and a fixed world-space point
    ToPoint(JointToPoint),
}

impl Joint {
    /// Recomputes the attachment point from the body's current state and
    /// applies the tension impulse to the body
    pub fn apply_tension(&mut self, body: &mut RigidBody) {
        match self {
            Joint::ToPoint(joint) => joint.apply_tension(body),
        }
    }

    /// Calculates the current tension force magnitude for the body's state
    pub fn calculate_tension(&self, body: &RigidBody) -> f64 {
        match self {
            Joint::ToPoint(joint) => joint.calculate_tension(body),
        }
    }

    /// Calculates the rate of change of the joint's extension for the body's
    /// state
    pub fn rate_of_change_of_extension(&self, body: &RigidBody) -> f64 {
        match self {
            Joint::ToPoint(joint) => joint.rate_of_change_of_extension(body),
        }
    }
}

impl From<JointToPoint> for Joint {
    fn from(joint: JointToPoint) -> Self {
        Joint::ToPoint(joint)
    }
}
