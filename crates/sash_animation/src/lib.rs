//! Sash Animation System
//!
//! Spring physics and frame scheduling for sheet motion.
//!
//! # Features
//!
//! - **Spring Physics**: RK4-integrated springs with stiffness, damping, mass
//! - **Interruptible**: Springs inherit velocity when retargeted mid-flight
//! - **Deterministic**: The scheduler ticks with an explicit frame delta, so
//!   simulated time drives it the same way wall-clock time does

pub mod scheduler;
pub mod spring;

pub use scheduler::{AnimationScheduler, SpringId};
pub use spring::{Spring, SpringConfig};
