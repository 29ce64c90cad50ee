//! Seam between the physics core and a presentation layer.
//!
//! The simulation never draws; a caller pairs each body with a strategy and
//! a drawing context of its own choosing. Any closure over the right
//! arguments is a strategy, and [`NoDraw`] stands in for bodies that should
//! simulate without being rendered.

use crate::bodies::RigidBody;

/// Strategy for drawing a rigid body into some drawing context
pub trait DrawStrategy<C> {
    /// Draws the body into the context
    fn draw(&mut self, body: &RigidBody, ctx: &mut C);
}

impl<C, F> DrawStrategy<C> for F
where
    F: FnMut(&RigidBody, &mut C),
{
    fn draw(&mut self, body: &RigidBody, ctx: &mut C) {
        self(body, ctx)
    }
}

/// Strategy that draws nothing
pub struct NoDraw;

impl<C> DrawStrategy<C> for NoDraw {
    fn draw(&mut self, _body: &RigidBody, _ctx: &mut C) {}
}

/// Draws the body with the given strategy, honoring its visibility flag
pub fn draw_body<C>(body: &RigidBody, strategy: &mut impl DrawStrategy<C>, ctx: &mut C) {
    if body.is_visible() {
        strategy.draw(body, ctx);
    }
}
