use crate::bodies::RigidBody;
use crate::math::{Matrix2, Vector2};
use crate::rays::Ray;
use crate::shapes::Shape;

/// Angular jitter applied around every target direction, in radians.
///
/// Each target is cast three times, at -JITTER, 0 and +JITTER, so the fan
/// picks up the boundary immediately behind and in front of a silhouette
/// vertex. Without this the fan does not close correctly.
const RAY_JITTER: f64 = 0.001;

/// A cast ray paired with the polar angle it was emitted at. The angle is
/// used purely for ordering the visibility fan.
#[derive(Debug, Clone)]
pub struct RayAngleInformation {
    ray: Ray,
    angle: f64,
}

impl RayAngleInformation {
    /// Returns the cast ray
    #[inline]
    pub fn ray(&self) -> &Ray {
        &self.ray
    }

    /// Returns the emission angle in radians
    #[inline]
    pub fn angle(&self) -> f64 {
        self.angle
    }
}

/// Sweeps rays toward the silhouette-defining features of every body and
/// assembles an angularly sorted visibility fan around the viewpoint.
///
/// Consumers connect consecutive entries of the fan into triangles from the
/// viewpoint to approximate line of sight and shadows.
#[derive(Debug, Clone)]
pub struct ShadowCasting {
    start_point: Vector2,
    distance: f64,
    ray_data: Vec<RayAngleInformation>,
}

impl ShadowCasting {
    /// Creates a shadow caster for a viewpoint and a maximum ray distance
    pub fn new(start_point: Vector2, distance: f64) -> Self {
        Self {
            start_point,
            distance,
            ray_data: Vec::new(),
        }
    }

    /// Returns the viewpoint the rays are emitted from
    #[inline]
    pub fn start_point(&self) -> Vector2 {
        self.start_point
    }

    /// Moves the viewpoint
    #[inline]
    pub fn set_start_point(&mut self, start_point: Vector2) {
        self.start_point = start_point;
    }

    /// Re-evaluates every projection against the body slice and rebuilds the
    /// sorted visibility fan.
    ///
    /// If the viewpoint lies inside any body the result for this tick is
    /// empty. Polygons contribute one target direction per world-space
    /// vertex; circles contribute their two silhouette tangents.
    pub fn update_projections(&mut self, bodies: &[RigidBody]) {
        self.ray_data.clear();
        for body in bodies {
            if body.contains_point(self.start_point) {
                self.ray_data.clear();
                break;
            }
            match body.shape() {
                Shape::Polygon(polygon) => {
                    for vertex in polygon.vertices() {
                        let direction = body.orientation().multiply_vector(*vertex)
                            + body.position()
                            - self.start_point;
                        self.project_rays(direction, bodies);
                    }
                }
                Shape::Circle(circle) => {
                    let d = body.position() - self.start_point;
                    let angle = (circle.radius() / d.length()).asin();
                    let u = Matrix2::from_angle(angle);
                    self.project_rays(u.multiply_vector(d.normalize()), bodies);
                    let u2 = Matrix2::from_angle(-angle);
                    self.project_rays(u2.multiply_vector(d.normalize()), bodies);
                }
            }
        }
        self.ray_data
            .sort_by(|lhs, rhs| rhs.angle.total_cmp(&lhs.angle));
    }

    /// Casts the jittered triple of rays for one target direction and
    /// records each with its emission angle
    fn project_rays(&mut self, direction: Vector2, bodies: &[RigidBody]) {
        let m = Matrix2::from_angle(RAY_JITTER);
        let mut direction = m.transpose().multiply_vector(direction);
        for _ in 0..3 {
            let mut ray = Ray::new(self.start_point, direction, self.distance);
            ray.update_projection(bodies);
            self.ray_data.push(RayAngleInformation {
                ray,
                angle: direction.angle(),
            });
            direction = m.multiply_vector(direction);
        }
    }

    /// Returns the sorted visibility fan from the last update
    #[inline]
    pub fn ray_data(&self) -> &[RayAngleInformation] {
        &self.ray_data
    }

    /// Returns the number of rays in the fan
    #[inline]
    pub fn no_of_rays(&self) -> usize {
        self.ray_data.len()
    }
}
