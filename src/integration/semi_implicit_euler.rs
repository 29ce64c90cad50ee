use crate::bodies::RigidBody;
use crate::integration::Integrator;

/// Semi-implicit Euler integrator for linear motion.
///
/// Velocity is advanced first and the *new* velocity moves the position,
/// which is more stable than fully explicit Euler. The accumulated force is
/// left untouched; clearing it between frames is the caller's job.
pub struct SemiImplicitEulerIntegrator;

impl SemiImplicitEulerIntegrator {
    /// Creates a new semi-implicit Euler integrator
    pub fn new() -> Self {
        Self
    }
}

impl Default for SemiImplicitEulerIntegrator {
    fn default() -> Self {
        Self::new()
    }
}

impl Integrator for SemiImplicitEulerIntegrator {
    fn integrate(&mut self, body: &mut RigidBody, dt: f64) {
        // v += (F / m) * dt
        let acceleration = body.get_force() / body.get_mass();
        let velocity = body.get_velocity() + acceleration * dt;
        body.set_velocity(velocity);

        // p += v * dt, with the bounding volume recentered on the new position
        let position = body.get_position() + velocity * dt;
        body.set_position(position);
    }

    fn name(&self) -> &str {
        "SemiImplicitEuler"
    }
}
