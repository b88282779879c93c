//! Spring physics
//!
//! RK4-integrated damped springs. A spring is retargetable mid-flight:
//! `set_target` leaves the current value and velocity untouched, so an
//! interrupted animation keeps its momentum instead of jumping.
//!
//! # Example
//!
//! ```rust,ignore
//! use sash_animation::{Spring, SpringConfig};
//!
//! let mut spring = Spring::new(SpringConfig::stiff(), 0.0);
//! spring.set_target(100.0);
//! while !spring.is_settled() {
//!     spring.step(1.0 / 60.0);
//! }
//! assert_eq!(spring.value(), 100.0);
//! ```

/// Integration sub-step cap in seconds. Long frames are split so that RK4
/// stays stable for stiff configurations.
const MAX_SUB_STEP: f32 = 1.0 / 120.0;

/// Longest frame delta integrated by one `step` call; larger deltas (a
/// frame after a long stall) are clamped before integration.
const MAX_FRAME_DELTA: f32 = 0.25;

// ============================================================================
// Spring Configuration
// ============================================================================

/// Spring tuning parameters
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SpringConfig {
    /// Stiffness (restoring force per unit displacement)
    pub stiffness: f32,
    /// Damping coefficient (drag force per unit velocity)
    pub damping: f32,
    /// Mass of the animated value
    pub mass: f32,
    /// Displacement below which the spring may settle
    pub rest_delta: f32,
    /// Speed below which the spring may settle
    pub rest_speed: f32,
}

impl SpringConfig {
    /// Create a config with the given stiffness, damping, and mass
    pub fn new(stiffness: f32, damping: f32, mass: f32) -> Self {
        Self {
            stiffness,
            damping,
            mass,
            rest_delta: 0.01,
            rest_speed: 2.0,
        }
    }

    /// Critically damped spring for the given stiffness and mass: the
    /// fastest approach that never overshoots.
    pub fn critical(stiffness: f32, mass: f32) -> Self {
        Self::new(stiffness, 2.0 * (stiffness * mass).sqrt(), mass)
    }

    /// Very stiff, nearly critical - settles fast with no visible overshoot
    pub fn stiff() -> Self {
        Self::new(3000.0, 110.0, 1.0)
    }

    /// Quick and responsive
    pub fn snappy() -> Self {
        Self::new(1500.0, 80.0, 1.0)
    }

    /// Soft, critically damped
    pub fn gentle() -> Self {
        Self::critical(600.0, 1.0)
    }

    /// Underdamped - bounces around the target before settling
    pub fn wobbly() -> Self {
        Self::new(1200.0, 28.0, 1.0)
    }

    /// Override the rest thresholds used for settle detection
    pub fn with_rest(mut self, rest_delta: f32, rest_speed: f32) -> Self {
        self.rest_delta = rest_delta;
        self.rest_speed = rest_speed;
        self
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self::snappy()
    }
}

// ============================================================================
// Spring
// ============================================================================

/// A scalar value animated by damped spring physics
#[derive(Debug, Clone)]
pub struct Spring {
    config: SpringConfig,
    value: f32,
    velocity: f32,
    target: f32,
}

impl Spring {
    /// Create a spring at rest at `value`
    pub fn new(config: SpringConfig, value: f32) -> Self {
        Self {
            config,
            value,
            velocity: 0.0,
            target: value,
        }
    }

    /// Retarget the spring. Value and velocity are left untouched, so a
    /// spring retargeted mid-flight keeps its momentum.
    pub fn set_target(&mut self, target: f32) {
        if !self.is_settled() {
            tracing::trace!(
                "spring retargeted mid-flight (value {:.2}, velocity {:.2})",
                self.value,
                self.velocity
            );
        }
        self.target = target;
    }

    /// Current value
    pub fn value(&self) -> f32 {
        self.value
    }

    /// Current velocity in units per second
    pub fn velocity(&self) -> f32 {
        self.velocity
    }

    /// Current target
    pub fn target(&self) -> f32 {
        self.target
    }

    /// True once displacement and speed are both under the rest thresholds
    pub fn is_settled(&self) -> bool {
        (self.value - self.target).abs() < self.config.rest_delta
            && self.velocity.abs() < self.config.rest_speed
    }

    /// Advance the simulation by `dt` seconds.
    ///
    /// Deltas beyond a quarter second (a frame after the app was suspended)
    /// are clamped rather than simulated through. When the spring crosses
    /// the rest thresholds it snaps exactly onto the target and zeroes its
    /// velocity, so `value()` is exact after settling.
    pub fn step(&mut self, dt: f32) {
        if dt <= 0.0 || self.is_settled() {
            return;
        }

        let mut remaining = dt.min(MAX_FRAME_DELTA);
        while remaining > 0.0 {
            let h = remaining.min(MAX_SUB_STEP);
            self.rk4(h);
            remaining -= h;
            if self.is_settled() {
                break;
            }
        }

        if self.is_settled() {
            self.value = self.target;
            self.velocity = 0.0;
        }
    }

    /// Acceleration of the damped oscillator at (value, velocity)
    fn accel(&self, value: f32, velocity: f32) -> f32 {
        (-self.config.stiffness * (value - self.target) - self.config.damping * velocity)
            / self.config.mass
    }

    /// One classic fourth-order Runge-Kutta step of size `h`
    fn rk4(&mut self, h: f32) {
        let (x, v) = (self.value, self.velocity);

        let k1x = v;
        let k1v = self.accel(x, v);

        let k2x = v + 0.5 * h * k1v;
        let k2v = self.accel(x + 0.5 * h * k1x, v + 0.5 * h * k1v);

        let k3x = v + 0.5 * h * k2v;
        let k3v = self.accel(x + 0.5 * h * k2x, v + 0.5 * h * k2v);

        let k4x = v + h * k3v;
        let k4v = self.accel(x + h * k3x, v + h * k3v);

        self.value = x + (h / 6.0) * (k1x + 2.0 * k2x + 2.0 * k3x + k4x);
        self.velocity = v + (h / 6.0) * (k1v + 2.0 * k2v + 2.0 * k3v + k4v);
    }
}
