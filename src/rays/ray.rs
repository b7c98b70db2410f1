use crate::bodies::RigidBody;
use crate::math::Vector2;
use crate::shapes::Shape;

/// Information about the closest intersection found by a ray.
///
/// The hit body is identified by its index in the body slice the ray was
/// evaluated against, so the result never borrows from the world's storage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RayInformation {
    /// Index of the hit body in the evaluated slice
    pub body: usize,

    /// World-space intersection point
    pub coordinates: Vector2,

    /// Reserved discriminator, -1 when unused
    pub index: i32,
}

impl RayInformation {
    /// Creates new ray information for a hit on the given body
    pub fn new(body: usize, coordinates: Vector2, index: i32) -> Self {
        Self {
            body,
            coordinates,
            index,
        }
    }
}

/// A half-line query primitive: origin, normalized direction and a maximum
/// projection distance.
///
/// The intersection result is re-evaluated on every call to
/// [`Ray::update_projection`]; a stale result is discarded first.
#[derive(Debug, Clone, PartialEq)]
pub struct Ray {
    start_point: Vector2,
    direction: Vector2,
    distance: f64,
    information: Option<RayInformation>,
}

impl Ray {
    /// Creates a new ray from an origin, a direction vector and a maximum
    /// distance. The direction is normalized.
    pub fn new(start_point: Vector2, direction: Vector2, distance: f64) -> Self {
        Self {
            start_point,
            direction: direction.normalize(),
            distance,
            information: None,
        }
    }

    /// Creates a new ray from an origin, a bearing in radians and a maximum
    /// distance
    pub fn from_angle(start_point: Vector2, radians: f64, distance: f64) -> Self {
        Self::new(start_point, Vector2::from_angle(radians), distance)
    }

    /// Returns the origin of the ray
    #[inline]
    pub fn start_point(&self) -> Vector2 {
        self.start_point
    }

    /// Moves the origin of the ray
    #[inline]
    pub fn set_start_point(&mut self, start_point: Vector2) {
        self.start_point = start_point;
    }

    /// Returns the normalized direction of the ray
    #[inline]
    pub fn direction(&self) -> Vector2 {
        self.direction
    }

    /// Sets the direction of the ray, normalizing it
    #[inline]
    pub fn set_direction(&mut self, direction: Vector2) {
        self.direction = direction.normalize();
    }

    /// Returns the maximum projection distance of the ray
    #[inline]
    pub fn distance(&self) -> f64 {
        self.distance
    }

    /// Returns the result of the last projection update, if it hit anything
    #[inline]
    pub fn information(&self) -> Option<&RayInformation> {
        self.information.as_ref()
    }

    /// Projects the ray against every body in the slice and records the
    /// nearest intersection, if any.
    ///
    /// Any previous result is discarded first. Bodies are evaluated in slice
    /// order and an exact tie on the ray parameter keeps the first body
    /// encountered.
    pub fn update_projection(&mut self, bodies: &[RigidBody]) -> Option<&RayInformation> {
        self.information = None;
        let end_point = self.direction * self.distance;
        let end_x = end_point.x;
        let end_y = end_point.y;
        let mut min_t1 = f64::INFINITY;
        let mut min_point = Vector2::zero();
        let mut intersection_found = false;
        let mut closest_body = 0;

        for (index, body) in bodies.iter().enumerate() {
            match body.shape() {
                Shape::Polygon(polygon) => {
                    let vertices = polygon.vertices();
                    for i in 0..vertices.len() {
                        let mut edge_start = vertices[i];
                        let mut edge_end = vertices[(i + 1) % vertices.len()];
                        edge_start =
                            body.orientation().multiply_vector(edge_start) + body.position();
                        edge_end = body.orientation().multiply_vector(edge_end) + body.position();
                        let dx = edge_end.x - edge_start.x;
                        let dy = edge_end.y - edge_start.y;

                        // Skip edges parallel to the ray
                        if dx - end_x != 0.0 && dy - end_y != 0.0 {
                            let t2 = (end_x * (edge_start.y - self.start_point.y)
                                + end_y * (self.start_point.x - edge_start.x))
                                / (dx * end_y - dy * end_x);
                            let t1 = (edge_start.x + dx * t2 - self.start_point.x) / end_x;
                            if t1 > 0.0 && (0.0..=1.0).contains(&t2) {
                                let point = Vector2::new(
                                    self.start_point.x + end_x * t1,
                                    self.start_point.y + end_y * t1,
                                );
                                let dist = (point - self.start_point).length();
                                if t1 < min_t1 && dist < self.distance {
                                    min_t1 = t1;
                                    min_point = point;
                                    intersection_found = true;
                                    closest_body = index;
                                }
                            }
                        }
                    }
                }
                Shape::Circle(circle) => {
                    let ray = end_point;
                    let r = circle.radius();
                    let dif_in_centers = self.start_point - body.position();
                    let a = ray.dot(&ray);
                    let b = 2.0 * dif_in_centers.dot(&ray);
                    let c = dif_in_centers.dot(&dif_in_centers) - r * r;
                    let discriminant = b * b - 4.0 * a * c;
                    if discriminant >= 0.0 {
                        let t1 = (-b - discriminant.sqrt()) / (2.0 * a);
                        if (0.0..=1.0).contains(&t1) && t1 < min_t1 {
                            min_t1 = t1;
                            min_point = Vector2::new(
                                self.start_point.x + end_x * t1,
                                self.start_point.y + end_y * t1,
                            );
                            intersection_found = true;
                            closest_body = index;
                        }
                    }
                }
            }
        }

        if intersection_found {
            self.information = Some(RayInformation::new(closest_body, min_point, -1));
        }
        self.information.as_ref()
    }
}
