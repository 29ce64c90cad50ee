mod vector;
mod matrix;
mod rotation;
mod ray;

pub use matrix::Matrix3;
pub use ray::Ray;
pub use rotation::{Quaternion, Rotation};
pub use vector::Vector3;

/// Constant for a very small number, used for comparisons
pub const EPSILON: f64 = 1.0e-9;

/// Returns true if the two floating point values are approximately equal
#[inline]
pub fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

/// Returns true if the value is approximately zero
#[inline]
pub fn approx_zero(a: f64) -> bool {
    a.abs() < EPSILON
}

/// Converts degrees to radians
#[inline]
pub fn to_radians(degrees: f64) -> f64 {
    degrees * std::f64::consts::PI / 180.0
}

/// Converts radians to degrees
#[inline]
pub fn to_degrees(radians: f64) -> f64 {
    radians * 180.0 / std::f64::consts::PI
}
