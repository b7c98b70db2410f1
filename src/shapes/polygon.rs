use crate::error::PhysicsError;
use crate::math::{Matrix2, Vector2};
use crate::shapes::{Aabb, MassData};
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A convex polygon shape.
///
/// The vertex list is always the convex hull of the construction input, in
/// the consistent winding produced by the hull walk, and `normals` holds the
/// outward unit normal of each face. After [`Polygon::calc_mass`] the
/// vertices are re-centered so the body-local origin is the centroid; the
/// hull topology never changes after construction.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct Polygon {
    vertices: Vec<Vector2>,
    normals: Vec<Vector2>,
}

impl Polygon {
    /// Creates a polygon from an arbitrary point set by wrapping it in its
    /// convex hull.
    ///
    /// Fewer than 3 points, or a point set whose hull degenerates (all
    /// points collinear), is rejected as invalid geometry.
    pub fn from_points(points: &[Vector2]) -> Result<Self> {
        if points.len() < 3 {
            return Err(PhysicsError::InvalidGeometry(format!(
                "polygon needs at least 3 points, got {}",
                points.len()
            )));
        }
        let vertices = generate_hull(points)?;
        if crate::math::approx_zero(signed_area(&vertices)) {
            return Err(PhysicsError::InvalidGeometry(
                "polygon has zero winding".to_string(),
            ));
        }
        let mut polygon = Self {
            vertices,
            normals: Vec::new(),
        };
        polygon.calc_normals();
        Ok(polygon)
    }

    /// Creates an axis-aligned rectangle with the given extents measured
    /// from the center
    pub fn rectangle(width: f64, height: f64) -> Result<Self> {
        if width <= 0.0 || height <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "rectangle extents must be positive, got {width} x {height}"
            )));
        }
        Ok(Self {
            vertices: vec![
                Vector2::new(-width, -height),
                Vector2::new(width, -height),
                Vector2::new(width, height),
                Vector2::new(-width, height),
            ],
            normals: vec![
                Vector2::new(0.0, -1.0),
                Vector2::new(1.0, 0.0),
                Vector2::new(0.0, 1.0),
                Vector2::new(-1.0, 0.0),
            ],
        })
    }

    /// Creates a regular polygon with the given circumradius and number of
    /// sides.
    ///
    /// Vertices are placed counter-clockwise starting at an angular offset
    /// of three quarters of one step, the orientation convention the engine
    /// has always used.
    pub fn regular(radius: f64, sides: usize) -> Result<Self> {
        if sides < 3 {
            return Err(PhysicsError::InvalidGeometry(format!(
                "regular polygon needs at least 3 sides, got {sides}"
            )));
        }
        if radius <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "regular polygon radius must be positive, got {radius}"
            )));
        }
        let vertices = (0..sides)
            .map(|i| {
                let angle = 2.0 * std::f64::consts::PI / sides as f64 * (i as f64 + 0.75);
                Vector2::new(radius * angle.cos(), radius * angle.sin())
            })
            .collect();
        let mut polygon = Self {
            vertices,
            normals: Vec::new(),
        };
        polygon.calc_normals();
        Ok(polygon)
    }

    /// Returns the vertices of the polygon in body-local space
    #[inline]
    pub fn vertices(&self) -> &[Vector2] {
        &self.vertices
    }

    /// Returns the outward unit normal of each face
    #[inline]
    pub fn normals(&self) -> &[Vector2] {
        &self.normals
    }

    /// Recomputes the outward face normals. Must be called whenever the
    /// vertices change.
    fn calc_normals(&mut self) {
        let n = self.vertices.len();
        self.normals = (0..n)
            .map(|i| {
                let face = self.vertices[(i + 1) % n] - self.vertices[i];
                -face.perpendicular().normalize()
            })
            .collect();
    }

    /// Computes the mass properties of the polygon at the given density by
    /// triangulating it from the local origin.
    ///
    /// As a side effect the vertices are translated so the area-weighted
    /// centroid becomes the body-local origin.
    pub fn calc_mass(&mut self, density: f64) -> MassData {
        let mut centroid = Vector2::zero();
        let mut area = 0.0;
        let mut inertia = 0.0;
        let k = 1.0 / 3.0;
        let n = self.vertices.len();
        for i in 0..n {
            let point1 = self.vertices[i];
            let point2 = self.vertices[(i + 1) % n];
            let area_of_parallelogram = point1.cross(&point2);
            let triangle_area = 0.5 * area_of_parallelogram;
            area += triangle_area;
            let weight = triangle_area * k;
            centroid += point1 * weight;
            centroid += point2 * weight;
            let intx2 = point1.x * point1.x + point2.x * point1.x + point2.x * point2.x;
            let inty2 = point1.y * point1.y + point2.y * point1.y + point2.y * point2.y;
            inertia += 0.25 * k * area_of_parallelogram * (intx2 + inty2);
        }
        centroid = centroid * (1.0 / area);
        for vertex in &mut self.vertices {
            *vertex -= centroid;
        }
        MassData::new(density * area, inertia * density)
    }

    /// Builds the body-local bounding box of the polygon under the given
    /// orientation
    pub fn create_aabb(&self, orientation: &Matrix2) -> Aabb {
        let first = orientation.multiply_vector(self.vertices[0]);
        let mut min = first;
        let mut max = first;
        for vertex in &self.vertices[1..] {
            let point = orientation.multiply_vector(*vertex);
            if point.x < min.x {
                min.x = point.x;
            } else if point.x > max.x {
                max.x = point.x;
            }
            if point.y < min.y {
                min.y = point.y;
            } else if point.y > max.y {
                max.y = point.y;
            }
        }
        Aabb::new(min, max)
    }
}

/// Wraps a point set in its convex hull by gift wrapping: starting from the
/// minimum-x point, keep taking the candidate no other point lies strictly
/// to the left of, until the walk closes.
fn generate_hull(points: &[Vector2]) -> Result<Vec<Vector2>> {
    let n = points.len();
    let mut first_point_index = 0;
    let mut min_x = f64::MAX;
    for (i, point) in points.iter().enumerate() {
        if point.x < min_x {
            first_point_index = i;
            min_x = point.x;
        }
    }

    let mut hull = Vec::new();
    let mut point = first_point_index;
    let mut first = true;
    while point != first_point_index || first {
        first = false;
        if hull.len() > n {
            // The walk can only revisit a point if the input is degenerate.
            return Err(PhysicsError::InvalidGeometry(
                "convex hull walk failed to close".to_string(),
            ));
        }
        hull.push(points[point]);
        let mut current_eval_point = (point + 1) % n;
        for i in 0..n {
            if side_of_line(&points[point], &points[i], &points[current_eval_point]) == -1 {
                current_eval_point = i;
            }
        }
        point = current_eval_point;
    }

    if hull.len() < 3 {
        return Err(PhysicsError::InvalidGeometry(format!(
            "degenerate hull with {} vertices",
            hull.len()
        )));
    }
    Ok(hull)
}

/// Shoelace signed area of a vertex loop
fn signed_area(vertices: &[Vector2]) -> f64 {
    let n = vertices.len();
    (0..n)
        .map(|i| 0.5 * vertices[i].cross(&vertices[(i + 1) % n]))
        .sum()
}

/// Sign of the side of the line p1->p2 the point lies on: positive to the
/// right, negative to the left, zero on the line
fn side_of_line(p1: &Vector2, p2: &Vector2, point: &Vector2) -> i32 {
    let value = (p2.y - p1.y) * (point.x - p2.x) - (p2.x - p1.x) * (point.y - p2.y);
    if value > 0.0 {
        1
    } else if value == 0.0 {
        0
    } else {
        -1
    }
}
