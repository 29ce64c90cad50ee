use approx::assert_relative_eq;
use boxphys::collision::{collide, collide_projected, face_normal, overlapping, reflect};
use boxphys::integration::{Integrator, SemiImplicitEulerIntegrator};
use boxphys::math::{Quaternion, Rotation, Vector3};
use boxphys::render::{draw_body, NoDraw};
use boxphys::{OrientedBox, RigidBody};
use rand::Rng;
use std::f64::consts::PI;

fn unit_box_at(center: Vector3) -> OrientedBox {
    OrientedBox::from_center_size(center, Vector3::one())
}

fn assert_vec_eq(actual: Vector3, expected: Vector3) {
    assert_relative_eq!(actual.x, expected.x, epsilon = 1e-9);
    assert_relative_eq!(actual.y, expected.y, epsilon = 1e-9);
    assert_relative_eq!(actual.z, expected.z, epsilon = 1e-9);
}

#[test]
fn test_rigid_body_creation() {
    let body = RigidBody::new(
        2.0,
        Vector3::new(1.0, 0.0, 0.0),
        Vector3::new(0.0, -9.81, 0.0),
        unit_box_at(Vector3::new(0.0, 5.0, 0.0)),
    )
    .expect("valid body");

    // Position is taken from the bounds center
    assert_eq!(body.get_position(), Vector3::new(0.0, 5.0, 0.0));
    assert_eq!(body.get_mass(), 2.0);
    assert!(body.is_visible());

    // Non-positive or non-finite mass is rejected
    assert!(RigidBody::at_rest(0.0, unit_box_at(Vector3::zero())).is_err());
    assert!(RigidBody::at_rest(-1.0, unit_box_at(Vector3::zero())).is_err());
    assert!(RigidBody::at_rest(f64::NAN, unit_box_at(Vector3::zero())).is_err());

    let mut body = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();
    assert!(body.set_mass(3.0).is_ok());
    assert!(body.set_mass(0.0).is_err());
    assert_eq!(body.get_mass(), 3.0);
}

#[test]
fn test_position_bounds_sync() {
    let mut body = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();

    body.set_position(Vector3::new(1.0, 2.0, 3.0));
    assert_eq!(body.get_bounds().center, Vector3::new(1.0, 2.0, 3.0));

    body.set_bounds(unit_box_at(Vector3::new(-1.0, 0.0, 0.0)));
    assert_eq!(body.get_position(), Vector3::new(-1.0, 0.0, 0.0));
}

#[test]
fn test_external_rotation_input() {
    // Orientation deltas arrive from outside the core, stacked
    // right-to-left on the current orientation
    let mut body = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();
    let step = Quaternion::from_axis_angle(Vector3::unit_z(), PI / 18.0);

    body.rotate(step);
    body.rotate(step);

    let expected = Quaternion::from_axis_angle(Vector3::unit_z(), PI / 9.0);
    assert_relative_eq!(body.get_rotation().dot(&expected), 1.0, epsilon = 1e-12);

    body.set_rotation(Quaternion::identity());
    assert_eq!(body.get_rotation(), Quaternion::identity());
}

#[test]
fn test_semi_implicit_euler_formula_order() {
    // v' = v0 + (F/m) dt, then p' = p0 + v' dt with the *new* velocity
    let mut body = RigidBody::new(
        2.0,
        Vector3::new(1.0, 2.0, 3.0),
        Vector3::new(4.0, 0.0, 0.0),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();

    let mut integrator = SemiImplicitEulerIntegrator::new();
    integrator.integrate(&mut body, 0.5);

    assert_vec_eq(body.get_velocity(), Vector3::new(2.0, 2.0, 3.0));
    assert_vec_eq(body.get_position(), Vector3::new(1.0, 1.0, 1.5));

    // The bounds follow the body and the force is not cleared
    assert_vec_eq(body.get_bounds().center, Vector3::new(1.0, 1.0, 1.5));
    assert_eq!(body.get_force(), Vector3::new(4.0, 0.0, 0.0));

    assert_eq!(integrator.name(), "SemiImplicitEuler");
}

#[test]
fn test_force_accumulation() {
    let mut body = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();
    body.apply_force(Vector3::new(1.0, 0.0, 0.0));
    body.apply_force(Vector3::new(0.0, 2.0, 0.0));
    assert_eq!(body.get_force(), Vector3::new(1.0, 2.0, 0.0));
}

#[test]
fn test_stop_is_idempotent() {
    let mut body = RigidBody::new(
        1.0,
        Vector3::new(3.0, -2.0, 1.0),
        Vector3::new(0.5, 0.5, 0.5),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();

    body.stop();
    assert_eq!(body.get_velocity(), Vector3::zero());
    assert_eq!(body.get_force(), Vector3::zero());

    body.stop();
    assert_eq!(body.get_velocity(), Vector3::zero());
    assert_eq!(body.get_force(), Vector3::zero());
}

#[test]
fn test_face_classification_axis_aligned() {
    let body = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();

    // Point on the +X face
    let n = face_normal(Vector3::new(0.5, 0.2, 0.3), &body).expect("on the +X face");
    assert_vec_eq(n, Vector3::unit_x());

    // Point on the -Y face
    let n = face_normal(Vector3::new(0.1, -0.5, 0.2), &body).expect("on the -Y face");
    assert_vec_eq(n, -Vector3::unit_y());

    // Strictly interior and off-surface points classify to nothing
    assert!(face_normal(Vector3::zero(), &body).is_none());
    assert!(face_normal(Vector3::new(0.7, 0.0, 0.0), &body).is_none());
}

#[test]
fn test_face_classification_rotated_covariance() {
    // Rotating the box must rotate the classified normal the same way
    let rot = Quaternion::from_axis_angle(Vector3::unit_z(), PI / 2.0);
    let bounds = OrientedBox::new(Vector3::zero(), Vector3::new(0.5, 0.5, 0.5), rot);
    let body = RigidBody::at_rest(1.0, bounds).unwrap();

    let local_point = Vector3::new(0.5, 0.2, 0.3);
    let world_point = rot.rotate_vector(local_point);

    let n = face_normal(world_point, &body).expect("still on the +X face");
    let expected = rot.rotate_vector(Vector3::unit_x());
    assert_vec_eq(n, expected);
}

#[test]
fn test_face_classification_random_rotations() {
    let mut rng = rand::thread_rng();
    let local_point = Vector3::new(0.5, 0.15, -0.2);

    for _ in 0..50 {
        let axis = Vector3::new(
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
            rng.gen_range(-1.0..1.0),
        );
        if axis.is_zero() {
            continue;
        }
        let rot = Quaternion::from_axis_angle(axis, rng.gen_range(0.0..2.0 * PI));
        let center = Vector3::new(
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
            rng.gen_range(-5.0..5.0),
        );

        let bounds = OrientedBox::new(center, Vector3::new(0.5, 0.5, 0.5), rot);
        let body = RigidBody::at_rest(1.0, bounds).unwrap();

        let world_point = center + rot.rotate_vector(local_point);
        let n = face_normal(world_point, &body).expect("face point survives rotation");
        let expected = rot.rotate_vector(Vector3::unit_x());
        assert_relative_eq!(n.x, expected.x, epsilon = 1e-6);
        assert_relative_eq!(n.y, expected.y, epsilon = 1e-6);
        assert_relative_eq!(n.z, expected.z, epsilon = 1e-6);
    }
}

#[test]
fn test_reflect_elastic() {
    let mut body = RigidBody::new(
        1.0,
        Vector3::unit_x(),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();
    let wall = RigidBody::at_rest(1.0, unit_box_at(Vector3::new(3.0, 0.0, 0.0))).unwrap();

    // e = 1: full elastic bounce off the -X face, v' = v - 2 (v.N) N
    reflect(&mut body, &wall, 1.0);
    assert_vec_eq(body.get_velocity(), -Vector3::unit_x());
}

#[test]
fn test_reflect_inelastic_keeps_tangential() {
    // A wide wall so the slanted ray still enters through the -X face
    let wall_bounds = OrientedBox::new(
        Vector3::new(3.0, 0.0, 0.0),
        Vector3::new(0.5, 2.0, 2.0),
        Quaternion::identity(),
    );
    let wall = RigidBody::at_rest(1.0, wall_bounds).unwrap();

    let mut body = RigidBody::new(
        1.0,
        Vector3::new(1.0, 0.5, 0.0),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();

    // e = 0: the normal component is absorbed, the tangential one survives
    reflect(&mut body, &wall, 0.0);
    assert_vec_eq(body.get_velocity(), Vector3::new(0.0, 0.5, 0.0));
}

#[test]
fn test_reflect_preserves_speed_when_elastic() {
    let mut rng = rand::thread_rng();
    let wall_bounds = OrientedBox::new(
        Vector3::new(5.0, 0.0, 0.0),
        Vector3::new(0.5, 10.0, 10.0),
        Quaternion::identity(),
    );
    let wall = RigidBody::at_rest(1.0, wall_bounds).unwrap();

    for _ in 0..50 {
        let v = Vector3::new(
            rng.gen_range(0.5..1.5),
            rng.gen_range(-0.3..0.3),
            rng.gen_range(-0.3..0.3),
        );
        let mut body =
            RigidBody::new(1.0, v, Vector3::zero(), unit_box_at(Vector3::zero())).unwrap();

        reflect(&mut body, &wall, 1.0);

        let v_after = body.get_velocity();
        assert_relative_eq!(v_after.length(), v.length(), epsilon = 1e-9);
        // Normal component flips, here the normal is -X
        assert_relative_eq!(v_after.x, -v.x, epsilon = 1e-9);
        assert_relative_eq!(v_after.y, v.y, epsilon = 1e-9);
    }
}

#[test]
fn test_reflect_noop_cases() {
    let wall = RigidBody::at_rest(1.0, unit_box_at(Vector3::new(3.0, 0.0, 0.0))).unwrap();

    // Moving away: the ray never meets the wall
    let mut body = RigidBody::new(
        1.0,
        Vector3::new(-1.0, 0.0, 0.0),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();
    reflect(&mut body, &wall, 1.0);
    assert_eq!(body.get_velocity(), Vector3::new(-1.0, 0.0, 0.0));

    // Zero velocity: degenerate ray, nothing happens
    let mut resting = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();
    reflect(&mut resting, &wall, 1.0);
    assert_eq!(resting.get_velocity(), Vector3::zero());
}

#[test]
fn test_collide_noop_on_miss() {
    let mut b1 = RigidBody::new(
        1.0,
        Vector3::unit_y(),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();
    let mut b2 = RigidBody::new(
        2.0,
        Vector3::new(0.5, 0.0, 0.0),
        Vector3::zero(),
        unit_box_at(Vector3::new(5.0, 0.0, 0.0)),
    )
    .unwrap();

    collide(&mut b1, &mut b2, 1.0);
    assert_eq!(b1.get_velocity(), Vector3::unit_y());
    assert_eq!(b2.get_velocity(), Vector3::new(0.5, 0.0, 0.0));

    collide_projected(&mut b1, &mut b2, 1.0);
    assert_eq!(b1.get_velocity(), Vector3::unit_y());
    assert_eq!(b2.get_velocity(), Vector3::new(0.5, 0.0, 0.0));
}

#[test]
fn test_collide_equal_mass_elastic_exchange() {
    let mut b1 = RigidBody::new(
        1.0,
        Vector3::unit_x(),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();
    let mut b2 = RigidBody::at_rest(1.0, unit_box_at(Vector3::new(3.0, 0.0, 0.0))).unwrap();

    // Equal masses, e = 1: the bodies swap velocities along the contact axis
    collide(&mut b1, &mut b2, 1.0);
    assert_vec_eq(b1.get_velocity(), Vector3::zero());
    assert_vec_eq(b2.get_velocity(), Vector3::unit_x());
}

#[test]
fn test_collide_asymmetric_normal_scaling() {
    let wall_bounds = OrientedBox::new(
        Vector3::new(3.0, 0.0, 0.0),
        Vector3::new(0.5, 2.0, 2.0),
        Quaternion::identity(),
    );
    let mut b1 = RigidBody::new(
        1.0,
        Vector3::new(1.0, 0.2, 0.0),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();
    let mut b2 = RigidBody::at_rest(1.0, wall_bounds).unwrap();

    // e = 0, equal masses: v1' = v2' = (v1 + v2) / 2 = (0.5, 0.1, 0).
    // The contact normal is -X, so b1 ends up with the component-wise
    // product (−0.5, 0, 0) while b2 keeps the whole vector.
    collide(&mut b1, &mut b2, 0.0);
    assert_vec_eq(b1.get_velocity(), Vector3::new(-0.5, 0.0, 0.0));
    assert_vec_eq(b2.get_velocity(), Vector3::new(0.5, 0.1, 0.0));
}

#[test]
fn test_collide_projected_keeps_tangential() {
    let wall_bounds = OrientedBox::new(
        Vector3::new(3.0, 0.0, 0.0),
        Vector3::new(0.5, 2.0, 2.0),
        Quaternion::identity(),
    );
    let mut b1 = RigidBody::new(
        1.0,
        Vector3::new(1.0, 0.2, 0.0),
        Vector3::zero(),
        unit_box_at(Vector3::zero()),
    )
    .unwrap();
    let mut b2 = RigidBody::at_rest(1.0, wall_bounds).unwrap();

    let momentum_before = b1.get_velocity() + b2.get_velocity();

    collide_projected(&mut b1, &mut b2, 0.0);

    // Only the X components (along the contact normal) average out;
    // b1's tangential Y component is untouched
    assert_vec_eq(b1.get_velocity(), Vector3::new(0.5, 0.2, 0.0));
    assert_vec_eq(b2.get_velocity(), Vector3::new(0.5, 0.0, 0.0));

    // Momentum along the normal is conserved (equal masses)
    let momentum_after = b1.get_velocity() + b2.get_velocity();
    assert_relative_eq!(momentum_after.x, momentum_before.x, epsilon = 1e-9);
}

#[test]
fn test_overlap_check() {
    let a = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();
    let b = RigidBody::at_rest(1.0, unit_box_at(Vector3::new(0.8, 0.0, 0.0))).unwrap();
    let c = RigidBody::at_rest(1.0, unit_box_at(Vector3::new(4.0, 0.0, 0.0))).unwrap();

    assert!(overlapping(&a, &b));
    assert!(!overlapping(&a, &c));
}

#[test]
fn test_two_body_approach_and_collision() {
    // Two unit boxes accelerate toward each other under opposite forces,
    // then resolve with e = 0.5 at the moment their boxes overlap
    let mut p1 = RigidBody::new(
        1.0,
        Vector3::zero(),
        Vector3::new(4.0, 1.0, 0.0),
        unit_box_at(Vector3::new(-4.0, -1.0, 0.0)),
    )
    .unwrap();
    let mut p2 = RigidBody::new(
        1.0,
        Vector3::zero(),
        Vector3::new(-4.0, -1.0, 0.0),
        unit_box_at(Vector3::new(4.0, 1.0, 0.0)),
    )
    .unwrap();

    let mut integrator = SemiImplicitEulerIntegrator::new();
    let dt = 1.0 / 60.0;

    let mut steps = 0;
    while !overlapping(&p1, &p2) {
        integrator.integrate(&mut p1, dt);
        integrator.integrate(&mut p2, dt);
        steps += 1;
        assert!(steps < 2000, "bodies never met");
    }

    // They sped up toward each other, mirror images of one another
    let v1 = p1.get_velocity();
    let v2 = p2.get_velocity();
    assert!(v1.x > 0.0 && v2.x < 0.0);
    assert_vec_eq(v2, -v1);

    collide(&mut p1, &mut p2, 0.5);

    let e = 0.5;
    let expected_v1 = (v1 + v2 - (v1 - v2) * e) / 2.0;
    let expected_v2 = (v1 + v2 + (v1 - v2) * e) / 2.0;

    // p1 approaches p2's -X face, so its result is scaled by (-1, 0, 0)
    assert_vec_eq(
        p1.get_velocity(),
        expected_v1.component_mul(&-Vector3::unit_x()),
    );
    assert_vec_eq(p2.get_velocity(), expected_v2);

    assert!(p1.get_velocity().length().is_finite());
    assert!(p2.get_velocity().length().is_finite());
}

#[test]
fn test_draw_strategy_dispatch() {
    let mut visible = RigidBody::at_rest(1.0, unit_box_at(Vector3::new(1.0, 2.0, 3.0))).unwrap();
    let mut hidden = RigidBody::at_rest(1.0, unit_box_at(Vector3::zero())).unwrap();
    hidden.set_visible(false);

    let mut drawn: Vec<Vector3> = Vec::new();
    let mut record = |body: &RigidBody, ctx: &mut Vec<Vector3>| {
        ctx.push(body.get_position());
    };

    draw_body(&visible, &mut record, &mut drawn);
    draw_body(&hidden, &mut record, &mut drawn);
    assert_eq!(drawn, vec![Vector3::new(1.0, 2.0, 3.0)]);

    // A hidden body still simulates; and NoDraw renders nothing even for
    // visible bodies
    visible.set_visible(true);
    let mut none = NoDraw;
    draw_body(&visible, &mut none, &mut drawn);
    assert_eq!(drawn.len(), 1);

    let mut integrator = SemiImplicitEulerIntegrator::new();
    hidden.set_velocity(Vector3::unit_x());
    integrator.integrate(&mut hidden, 1.0);
    assert_vec_eq(hidden.get_position(), Vector3::unit_x());
}
