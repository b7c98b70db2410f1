use approx::assert_relative_eq;
use phys2d::explosions::{Explosion, ProximityExplosion, RaycastExplosion};
use phys2d::joints::{Joint, JointToPoint};
use phys2d::math::Vector2;
use phys2d::rays::{Ray, ShadowCasting};
use phys2d::shapes::{Circle, Polygon, Shape};
use phys2d::RigidBody;

fn square_body(half_extent: f64, position: Vector2) -> RigidBody {
    let square = Polygon::rectangle(half_extent, half_extent).unwrap();
    RigidBody::new(Shape::Polygon(square), position)
}

fn circle_body(radius: f64, position: Vector2) -> RigidBody {
    let circle = Circle::new(radius).unwrap();
    RigidBody::new(Shape::Circle(circle), position)
}

#[test]
fn test_ray_hits_square_face() {
    let bodies = vec![square_body(1.0, Vector2::zero())];
    let mut ray = Ray::new(Vector2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 10.0);

    let info = ray.update_projection(&bodies).expect("ray should hit");
    assert_eq!(info.body, 0);
    assert_relative_eq!(info.coordinates.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(info.coordinates.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_ray_hits_near_side_of_circle() {
    let bodies = vec![circle_body(1.0, Vector2::zero())];
    let mut ray = Ray::new(Vector2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 10.0);

    let info = ray.update_projection(&bodies).expect("ray should hit");
    assert_eq!(info.body, 0);
    // Near intersection, not the far side at (1, 0)
    assert_relative_eq!(info.coordinates.x, -1.0, epsilon = 1e-12);
    assert_relative_eq!(info.coordinates.y, 0.0, epsilon = 1e-12);
}

#[test]
fn test_ray_misses() {
    let bodies = vec![square_body(1.0, Vector2::new(0.0, 10.0))];
    let mut ray = Ray::new(Vector2::new(-5.0, 0.0), Vector2::new(1.0, 0.0), 10.0);
    assert!(ray.update_projection(&bodies).is_none());

    // Out of range counts as a miss
    let bodies = vec![square_body(1.0, Vector2::new(50.0, 0.0))];
    assert!(ray.update_projection(&bodies).is_none());

    // A stale hit is discarded on re-evaluation
    let bodies = vec![square_body(1.0, Vector2::zero())];
    assert!(ray.update_projection(&bodies).is_some());
    assert!(ray.update_projection(&[]).is_none());
    assert!(ray.information().is_none());
}

#[test]
fn test_ray_keeps_nearest_hit() {
    let bodies = vec![
        square_body(1.0, Vector2::new(8.0, 0.0)),
        square_body(1.0, Vector2::new(3.0, 0.0)),
    ];
    let mut ray = Ray::new(Vector2::zero(), Vector2::new(1.0, 0.0), 20.0);

    let info = ray.update_projection(&bodies).expect("ray should hit");
    assert_eq!(info.body, 1);
    assert_relative_eq!(info.coordinates.x, 2.0, epsilon = 1e-12);
}

#[test]
fn test_ray_from_angle() {
    let bodies = vec![square_body(1.0, Vector2::new(5.0, 0.0))];
    let mut ray = Ray::from_angle(Vector2::zero(), 0.0, 10.0);
    let info = ray.update_projection(&bodies).expect("ray should hit");
    assert_relative_eq!(info.coordinates.x, 4.0, epsilon = 1e-9);
}

#[test]
fn test_shadow_casting_polygon_fan() {
    let bodies = vec![square_body(1.0, Vector2::new(5.0, 0.0))];
    let mut shadows = ShadowCasting::new(Vector2::zero(), 100.0);
    shadows.update_projections(&bodies);

    // Three jittered rays per vertex
    assert_eq!(shadows.no_of_rays(), 4 * 3);

    // The fan is sorted by descending emission angle
    let angles: Vec<f64> = shadows.ray_data().iter().map(|r| r.angle()).collect();
    for pair in angles.windows(2) {
        assert!(pair[0] >= pair[1]);
    }
}

#[test]
fn test_shadow_casting_circle_tangents() {
    let bodies = vec![circle_body(1.0, Vector2::new(5.0, 0.0))];
    let mut shadows = ShadowCasting::new(Vector2::zero(), 100.0);
    shadows.update_projections(&bodies);

    // Two silhouette tangents, three rays each
    assert_eq!(shadows.no_of_rays(), 2 * 3);

    // The tangent bearings straddle the direct bearing to the centre
    let expected = (1.0f64 / 5.0).asin();
    let angles: Vec<f64> = shadows.ray_data().iter().map(|r| r.angle()).collect();
    assert_relative_eq!(angles[0], expected, epsilon = 2e-3);
    assert_relative_eq!(angles[angles.len() - 1], -expected, epsilon = 2e-3);
}

#[test]
fn test_shadow_casting_viewpoint_inside_body_is_empty() {
    let bodies = vec![
        square_body(1.0, Vector2::new(5.0, 0.0)),
        square_body(2.0, Vector2::zero()),
    ];
    let mut shadows = ShadowCasting::new(Vector2::zero(), 100.0);
    shadows.update_projections(&bodies);
    assert_eq!(shadows.no_of_rays(), 0);
}

#[test]
fn test_shadow_casting_no_bodies_is_empty() {
    let mut shadows = ShadowCasting::new(Vector2::zero(), 100.0);
    shadows.update_projections(&[]);
    assert_eq!(shadows.no_of_rays(), 0);
}

#[test]
fn test_slack_joint_has_no_tension() {
    let body = circle_body(1.0, Vector2::zero());
    let joint = JointToPoint::new(
        &body,
        Vector2::new(0.0, 5.0),
        10.0,
        2000.0,
        500.0,
        true,
        Vector2::zero(),
    );
    // Separation (5) is below the natural length (10) and the joint can go
    // slack, so the constants are irrelevant
    assert_eq!(joint.calculate_tension(&body), 0.0);

    let mut joint = Joint::ToPoint(joint);
    let mut body = body;
    joint.apply_tension(&mut body);
    assert!(body.linear_velocity().is_zero());
    assert_eq!(body.angular_velocity(), 0.0);
}

#[test]
fn test_taut_joint_tension_and_impulse() {
    let mut body = circle_body(1.0, Vector2::zero());
    let spring_constant = 3.0;
    let natural_length = 2.0;
    let mut joint = JointToPoint::new(
        &body,
        Vector2::new(10.0, 0.0),
        natural_length,
        spring_constant,
        7.0,
        false,
        Vector2::zero(),
    );

    // Body at rest: pure Hooke's-law tension
    let tension = joint.calculate_tension(&body);
    assert_relative_eq!(tension, spring_constant * (10.0 - natural_length));

    joint.apply_tension(&mut body);
    let expected_speed = tension * body.inv_mass();
    assert_relative_eq!(body.linear_velocity().x, expected_speed, epsilon = 1e-12);
    assert_relative_eq!(body.linear_velocity().y, 0.0, epsilon = 1e-12);
    // Impulse through the centre of mass produces no spin
    assert_relative_eq!(body.angular_velocity(), 0.0, epsilon = 1e-12);
}

#[test]
fn test_joint_damping_tracks_extension_rate() {
    let mut body = circle_body(1.0, Vector2::zero());
    // Moving toward the anchor: the extension is shrinking
    body.set_linear_velocity(Vector2::new(1.0, 0.0));
    let joint = JointToPoint::new(
        &body,
        Vector2::new(10.0, 0.0),
        2.0,
        3.0,
        7.0,
        false,
        Vector2::zero(),
    );

    assert_relative_eq!(joint.rate_of_change_of_extension(&body), -1.0);
    assert_relative_eq!(joint.calculate_tension(&body), 3.0 * 8.0 + 7.0 * -1.0);
}

#[test]
fn test_proximity_explosion_inclusive_boundary() {
    let bodies = vec![
        circle_body(1.0, Vector2::new(5.0, 0.0)),
        circle_body(1.0, Vector2::new(5.0 + 1e-9, 0.0)),
        circle_body(1.0, Vector2::new(0.0, -3.0)),
    ];
    let mut explosion = ProximityExplosion::new(Vector2::zero(), 5.0);
    explosion.update(&bodies);

    // Exactly at the boundary is in; just past it is out
    assert_eq!(explosion.bodies_affected(), &[0, 2]);
}

#[test]
fn test_proximity_explosion_impulse_at_centre_of_mass() {
    let mut bodies = vec![circle_body(1.0, Vector2::new(2.0, 0.0))];
    let mut explosion = Explosion::Proximity(ProximityExplosion::new(Vector2::zero(), 10.0));
    explosion.update(&bodies);
    explosion.apply_blast_impulse(&mut bodies, 10.0);

    // power / distance = 5 along +x, at the centre: no spin
    let expected_speed = 5.0 * bodies[0].inv_mass();
    assert_relative_eq!(bodies[0].linear_velocity().x, expected_speed, epsilon = 1e-12);
    assert_relative_eq!(bodies[0].linear_velocity().y, 0.0, epsilon = 1e-12);
    assert_eq!(bodies[0].angular_velocity(), 0.0);
}

#[test]
fn test_proximity_explosion_zero_distance_aborts_application() {
    // First body sits exactly on the epicentre: the impulse pass stops there
    let mut bodies = vec![
        circle_body(1.0, Vector2::zero()),
        circle_body(1.0, Vector2::new(2.0, 0.0)),
    ];
    let mut explosion = ProximityExplosion::new(Vector2::zero(), 10.0);
    explosion.update(&bodies);
    assert_eq!(explosion.bodies_affected().len(), 2);

    explosion.apply_blast_impulse(&mut bodies, 10.0);
    assert!(bodies[0].linear_velocity().is_zero());
    assert!(bodies[1].linear_velocity().is_zero());
}

#[test]
fn test_raycast_explosion_applies_impulse_at_hit_point() {
    // Square spanning x in [9, 11], y in [-0.5, 1.5]: only the ray along +x
    // reaches it, striking the left face below the centre of mass
    let mut bodies = vec![square_body(1.0, Vector2::new(10.0, 0.5))];
    let mut explosion = RaycastExplosion::new(Vector2::zero(), 32, 100.0).unwrap();
    explosion.update(&bodies);

    assert_eq!(explosion.rays_in_contact().len(), 1);
    let hit = explosion.rays_in_contact()[0];
    assert_eq!(hit.body, 0);
    assert_relative_eq!(hit.coordinates.x, 9.0, epsilon = 1e-6);
    assert_relative_eq!(hit.coordinates.y, 0.0, epsilon = 1e-6);

    explosion.apply_blast_impulse(&mut bodies, 18.0);
    // Impulse magnitude power / distance = 2 along +x
    assert_relative_eq!(
        bodies[0].linear_velocity().x,
        2.0 * bodies[0].inv_mass(),
        epsilon = 1e-6
    );
    // The hit point is offset from the centre, so the body spins
    assert!(bodies[0].angular_velocity() > 0.0);
}

#[test]
fn test_raycast_explosion_epicentre_reseats_rays() {
    let mut explosion = RaycastExplosion::new(Vector2::zero(), 8, 50.0).unwrap();
    let moved = Vector2::new(3.0, -4.0);
    explosion.set_epicentre(moved);
    assert_eq!(explosion.epicentre(), moved);

    // The scatter only reaches bodies from its new origin
    let bodies = vec![circle_body(1.0, Vector2::new(3.0, 20.0))];
    explosion.update(&bodies);
    assert!(!explosion.rays_in_contact().is_empty());
}

#[test]
fn test_raycast_explosion_rejects_zero_rays() {
    assert!(RaycastExplosion::new(Vector2::zero(), 0, 10.0).is_err());
}
