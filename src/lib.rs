pub mod math;
pub mod shapes;
pub mod bodies;
pub mod collision;
pub mod integration;
pub mod render;

/// Re-export common types for easier usage
pub use crate::bodies::RigidBody;
pub use crate::shapes::OrientedBox;
pub use crate::math::{Quaternion, Vector3};

/// Error types for the physics kernel
pub mod error {
    use thiserror::Error;

    #[derive(Error, Debug)]
    pub enum PhysicsError {
        #[error("Invalid parameter: {0}")]
        InvalidParameter(String),
    }
}

/// Result type for physics kernel operations
pub type Result<T> = std::result::Result<T, error::PhysicsError>;

/// Engine version information
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
