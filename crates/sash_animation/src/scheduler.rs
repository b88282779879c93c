//! Animation scheduler
//!
//! Owns all active springs and steps them each frame. Removing a spring's
//! key is how a running animation gets cancelled.

use crate::spring::Spring;
use slotmap::{new_key_type, SlotMap};

new_key_type! {
    pub struct SpringId;
}

/// The animation scheduler that ticks all registered springs.
///
/// The frame delta is caller-supplied rather than measured internally, so
/// hosts drive it from their frame loop and tests from simulated time.
pub struct AnimationScheduler {
    springs: SlotMap<SpringId, Spring>,
}

impl AnimationScheduler {
    pub fn new() -> Self {
        Self {
            springs: SlotMap::with_key(),
        }
    }

    pub fn add_spring(&mut self, spring: Spring) -> SpringId {
        self.springs.insert(spring)
    }

    pub fn get_spring(&self, id: SpringId) -> Option<&Spring> {
        self.springs.get(id)
    }

    pub fn get_spring_mut(&mut self, id: SpringId) -> Option<&mut Spring> {
        self.springs.get_mut(id)
    }

    /// Run `f` against the spring behind `id`, if it is still registered
    pub fn with_spring_mut<R>(
        &mut self,
        id: SpringId,
        f: impl FnOnce(&mut Spring) -> R,
    ) -> Option<R> {
        self.springs.get_mut(id).map(f)
    }

    pub fn remove_spring(&mut self, id: SpringId) -> Option<Spring> {
        self.springs.remove(id)
    }

    /// Step all springs by `dt` seconds
    pub fn tick(&mut self, dt: f32) {
        for (_, spring) in self.springs.iter_mut() {
            spring.step(dt);
        }
    }

    /// Check if any spring is still moving
    pub fn has_active_animations(&self) -> bool {
        self.springs.iter().any(|(_, s)| !s.is_settled())
    }

    /// Iterate over all springs (immutable)
    pub fn springs_iter(&self) -> impl Iterator<Item = (SpringId, &Spring)> {
        self.springs.iter()
    }

    /// Iterate over all springs (mutable)
    pub fn springs_iter_mut(&mut self) -> impl Iterator<Item = (SpringId, &mut Spring)> {
        self.springs.iter_mut()
    }

    /// Get the number of springs in the scheduler
    pub fn spring_count(&self) -> usize {
        self.springs.len()
    }
}

impl Default for AnimationScheduler {
    fn default() -> Self {
        Self::new()
    }
}
