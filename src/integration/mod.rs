mod integrator;
mod semi_implicit_euler;

pub use self::integrator::Integrator;
pub use self::semi_implicit_euler::SemiImplicitEulerIntegrator;
