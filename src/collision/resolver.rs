use crate::bodies::RigidBody;
use crate::collision::face_normal;
use crate::math::{Ray, Vector3};

/// Returns true if the two bodies' bounding boxes overlap.
///
/// This is the once-per-frame pair check; when it reports an overlap the
/// caller resolves the pair with [`collide`].
pub fn overlapping(a: &RigidBody, b: &RigidBody) -> bool {
    a.get_bounds().intersects(b.get_bounds())
}

/// Reflects a moving body off an immovable wall.
///
/// A ray is cast from the body's position along its velocity; where it
/// enters the wall's box, the contact face normal N gives the reflected
/// velocity `v' = v - (1 + e) * (v . N) * N`. The wall's own mass and
/// velocity are ignored. Values of `e` above 1 are accepted unchecked.
///
/// A zero velocity (degenerate ray), a ray miss, or a contact point that
/// classifies to no face all leave the body untouched; a miss is the normal
/// non-colliding outcome every frame, not an error.
pub fn reflect(body: &mut RigidBody, wall: &RigidBody, restitution: f64) {
    let v = body.get_velocity();
    if v.is_zero() {
        return;
    }

    let ray = Ray::new_normalized(body.get_position(), v);
    let Some(t) = wall.get_bounds().intersect_ray(&ray) else {
        return;
    };
    let Some(n) = face_normal(ray.point_at(t), wall) else {
        return;
    };

    body.set_velocity(v - (1.0 + restitution) * v.dot(&n) * n);
}

/// Resolves a two-body collision from momentum conservation.
///
/// The contact is found by casting a ray from `body1` along its velocity
/// into `body2`'s box and classifying the entry point. The classic 1-D
/// collision formulas
///
/// ```text
/// v1' = (m1*v1 + m2*v2 - m2*e*(v1 - v2)) / (m1 + m2)
/// v2' = (m1*v1 + m2*v2 + m1*e*(v1 - v2)) / (m1 + m2)
/// ```
///
/// are applied to the full velocity vectors rather than their components
/// along the contact normal, and `body1` is then assigned `v1'` scaled
/// component-wise by the normal while `body2` receives `v2'` unscaled.
/// Both quirks are deliberate behavioral compatibility, not sound physics;
/// [`collide_projected`] is the normal-projected variant.
///
/// The same silent no-op policy as [`reflect`] applies on a degenerate ray,
/// a miss, or a failed face classification.
pub fn collide(body1: &mut RigidBody, body2: &mut RigidBody, restitution: f64) {
    let v1 = body1.get_velocity();
    let v2 = body2.get_velocity();

    let Some(n) = contact_normal(body1, body2) else {
        return;
    };

    let m1 = body1.get_mass();
    let m2 = body2.get_mass();
    let momentum = v1 * m1 + v2 * m2;
    let v1_after = (momentum - (v1 - v2) * (m2 * restitution)) / (m1 + m2);
    let v2_after = (momentum + (v1 - v2) * (m1 * restitution)) / (m1 + m2);

    // Asymmetric on purpose: v1 is scaled by the normal component-wise,
    // v2 keeps the full vector.
    body1.set_velocity(v1_after.component_mul(&n));
    body2.set_velocity(v2_after);
}

/// Normal-projected variant of [`collide`].
///
/// The 1-D momentum formulas are applied only to the velocity components
/// along the contact normal; tangential components pass through unchanged
/// and both bodies are treated symmetrically. Contact finding and the no-op
/// policy are identical to [`collide`].
pub fn collide_projected(body1: &mut RigidBody, body2: &mut RigidBody, restitution: f64) {
    let v1 = body1.get_velocity();
    let v2 = body2.get_velocity();

    let Some(n) = contact_normal(body1, body2) else {
        return;
    };

    let m1 = body1.get_mass();
    let m2 = body2.get_mass();
    let u1 = v1.dot(&n);
    let u2 = v2.dot(&n);
    let u1_after = (m1 * u1 + m2 * u2 - m2 * restitution * (u1 - u2)) / (m1 + m2);
    let u2_after = (m1 * u1 + m2 * u2 + m1 * restitution * (u1 - u2)) / (m1 + m2);

    body1.set_velocity(v1 + (u1_after - u1) * n);
    body2.set_velocity(v2 + (u2_after - u2) * n);
}

/// Casts a ray from `body1` along its velocity into `body2`'s box and
/// classifies the hit point, yielding the contact face normal.
fn contact_normal(body1: &RigidBody, body2: &RigidBody) -> Option<Vector3> {
    let v1 = body1.get_velocity();
    if v1.is_zero() {
        return None;
    }

    let ray = Ray::new_normalized(body1.get_position(), v1);
    let t = body2.get_bounds().intersect_ray(&ray)?;
    face_normal(ray.point_at(t), body2)
}
