use crate::bodies::RigidBody;
use crate::math::{Matrix3, Rotation, Vector3};

/// Tolerance for the coplanarity test, in scene length units
pub const FACE_EPSILON: f64 = 1.0e-5;

/// Corner-index quadruples for the six box faces, in the fixed enumeration
/// order -Z, +Z, -X, +X, -Y, +Y. The indices match `OrientedBox::corners`;
/// the two tables must change together.
const FACE_CORNERS: [[usize; 4]; 6] = [
    [0, 1, 2, 3],
    [4, 5, 6, 7],
    [0, 4, 2, 6],
    [1, 5, 3, 7],
    [2, 3, 6, 7],
    [0, 1, 4, 5],
];

/// Outward face normals in box-local space, in the same enumeration order
const FACE_NORMALS: [Vector3; 6] = [
    Vector3::new(0.0, 0.0, -1.0),
    Vector3::new(0.0, 0.0, 1.0),
    Vector3::new(-1.0, 0.0, 0.0),
    Vector3::new(1.0, 0.0, 0.0),
    Vector3::new(0.0, -1.0, 0.0),
    Vector3::new(0.0, 1.0, 0.0),
];

/// Classifies which face of the body's bounding box a world-space point lies
/// on, returning that face's outward unit normal in world space.
///
/// For each face, three of its corners A, B, C and the query point P form a
/// tetrahedron; the point is coplanar with the face when the determinant of
/// the matrix with rows AB, AC, AP (their scalar triple product) vanishes
/// within [`FACE_EPSILON`].
///
/// Returns `None` when the point is not on the box surface to numerical
/// precision. A point on an edge or corner lies on more than one face; the
/// first matching face in enumeration order wins, and callers must not rely
/// on which face that is.
pub fn face_normal(point: Vector3, body: &RigidBody) -> Option<Vector3> {
    let bounds = body.get_bounds();
    let corners = bounds.corners();

    for (quad, local_normal) in FACE_CORNERS.iter().zip(FACE_NORMALS) {
        let a = corners[quad[0]];
        let ab = corners[quad[1]] - a;
        let ac = corners[quad[2]] - a;
        let ap = point - a;

        let det = Matrix3::from_rows(ab, ac, ap).determinant();
        if det.abs() < FACE_EPSILON {
            return Some(bounds.orientation.rotate_vector(local_normal));
        }
    }

    None
}
