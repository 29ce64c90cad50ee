mod face_normal;
mod resolver;

pub use self::face_normal::{face_normal, FACE_EPSILON};
pub use self::resolver::{collide, collide_projected, overlapping, reflect};
