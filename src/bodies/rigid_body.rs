use crate::error::PhysicsError;
use crate::math::{Quaternion, Vector3};
use crate::shapes::OrientedBox;
use crate::Result;

#[cfg(feature = "serialize")]
use serde::{Deserialize, Serialize};

/// A rigid body with linear motion state and an oriented-box bounding volume.
///
/// The bounding volume is the authoritative spatial representation: the
/// body's position is kept synchronized with the box center by every setter
/// that moves either of them. Orientation is only ever mutated from the
/// outside, typically by user input; the physics operations treat it as
/// fixed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(Serialize, Deserialize))]
pub struct RigidBody {
    /// The body's mass, always positive
    mass: f64,

    /// The body's position, mirror of `bounds.center`
    position: Vector3,

    /// The body's linear velocity
    velocity: Vector3,

    /// Accumulated net force; integration does not clear it, the caller owns
    /// force bookkeeping per frame
    force: Vector3,

    /// The body's bounding volume
    bounds: OrientedBox,

    /// Whether a draw strategy should render this body
    visible: bool,
}

impl RigidBody {
    /// Creates a new rigid body.
    ///
    /// The position is taken from the bounding box center. Fails when the
    /// mass is not a positive finite number, since integration divides by it.
    pub fn new(mass: f64, velocity: Vector3, force: Vector3, bounds: OrientedBox) -> Result<Self> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }

        Ok(Self {
            mass,
            position: bounds.center,
            velocity,
            force,
            bounds,
            visible: true,
        })
    }

    /// Creates a resting body with no velocity or force
    pub fn at_rest(mass: f64, bounds: OrientedBox) -> Result<Self> {
        Self::new(mass, Vector3::zero(), Vector3::zero(), bounds)
    }

    /// Returns the body's mass
    pub fn get_mass(&self) -> f64 {
        self.mass
    }

    /// Sets the body's mass, rejecting non-positive or non-finite values
    pub fn set_mass(&mut self, mass: f64) -> Result<()> {
        if !mass.is_finite() || mass <= 0.0 {
            return Err(PhysicsError::InvalidParameter(format!(
                "mass must be positive and finite, got {mass}"
            )));
        }
        self.mass = mass;
        Ok(())
    }

    /// Returns the body's position
    pub fn get_position(&self) -> Vector3 {
        self.position
    }

    /// Sets the body's position and recenters the bounding volume on it
    pub fn set_position(&mut self, position: Vector3) {
        self.position = position;
        self.bounds.set_center(position);
    }

    /// Returns the body's linear velocity
    pub fn get_velocity(&self) -> Vector3 {
        self.velocity
    }

    /// Sets the body's linear velocity
    pub fn set_velocity(&mut self, velocity: Vector3) {
        self.velocity = velocity;
    }

    /// Returns the accumulated net force
    pub fn get_force(&self) -> Vector3 {
        self.force
    }

    /// Replaces the accumulated net force
    pub fn set_force(&mut self, force: Vector3) {
        self.force = force;
    }

    /// Adds a force to the accumulated net force
    pub fn apply_force(&mut self, force: Vector3) {
        self.force += force;
    }

    /// Returns the body's bounding volume
    pub fn get_bounds(&self) -> &OrientedBox {
        &self.bounds
    }

    /// Replaces the bounding volume and resynchronizes the position from its center
    pub fn set_bounds(&mut self, bounds: OrientedBox) {
        self.bounds = bounds;
        self.position = bounds.center;
    }

    /// Returns the orientation of the bounding volume
    pub fn get_rotation(&self) -> Quaternion {
        self.bounds.orientation
    }

    /// Sets the orientation of the bounding volume
    pub fn set_rotation(&mut self, rotation: Quaternion) {
        self.bounds.orientation = rotation;
    }

    /// Applies a rotation delta on top of the current orientation
    pub fn rotate(&mut self, delta: Quaternion) {
        self.bounds.orientation *= delta;
    }

    /// Zeroes the body's velocity and accumulated force
    pub fn stop(&mut self) {
        self.velocity = Vector3::zero();
        self.force = Vector3::zero();
    }

    /// Returns whether a draw strategy should render this body
    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Sets whether a draw strategy should render this body
    pub fn set_visible(&mut self, visible: bool) {
        self.visible = visible;
    }
}
