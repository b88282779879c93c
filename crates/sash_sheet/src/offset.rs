//! Sheet offset cell
//!
//! Single source of truth for the sheet's vertical displacement. Offset `0`
//! is fully expanded; offset `range` is collapsed to the minimum visible
//! height. Every write clamps into `[0, range]`; every read is a single
//! atomic load, so the render context never takes a lock.

use std::sync::atomic::{AtomicU32, Ordering};
use std::sync::Arc;

use crate::error::{Result, SheetError};

/// Clamped vertical displacement shared between the input and render
/// contexts.
///
/// The scalar is an `f32` stored as raw bits in an `AtomicU32`. Ordering is
/// relaxed: exactly one component writes at a time, and a reader observing
/// a value one frame stale costs a frame of visual lag, nothing else.
#[derive(Debug)]
pub struct SheetOffset {
    bits: AtomicU32,
    range: f32,
}

impl SheetOffset {
    /// Create a cell covering `[0, range]`, starting collapsed (at `range`).
    ///
    /// Fails if `range` is not a positive, finite number.
    pub fn new(range: f32) -> Result<Self> {
        if !range.is_finite() || range <= 0.0 {
            return Err(SheetError::InvalidRange(range));
        }
        Ok(Self {
            bits: AtomicU32::new(range.to_bits()),
            range,
        })
    }

    /// Clamp `value` into `[0, range]` and store it.
    ///
    /// Out-of-range values are clamped silently; non-finite values are
    /// discarded. Neither is an error.
    pub fn set(&self, value: f32) {
        if !value.is_finite() {
            return;
        }
        let clamped = value.clamp(0.0, self.range);
        self.bits.store(clamped.to_bits(), Ordering::Relaxed);
    }

    /// Current offset
    pub fn get(&self) -> f32 {
        f32::from_bits(self.bits.load(Ordering::Relaxed))
    }

    /// The travel range this cell clamps to
    pub fn range(&self) -> f32 {
        self.range
    }
}

/// Read-only handle to a [`SheetOffset`] for the render context.
///
/// Cheap to clone and safe to read from any thread.
#[derive(Debug, Clone)]
pub struct OffsetBinding {
    inner: Arc<SheetOffset>,
}

impl OffsetBinding {
    pub(crate) fn new(inner: Arc<SheetOffset>) -> Self {
        Self { inner }
    }

    /// Current offset in `[0, range]`
    pub fn get(&self) -> f32 {
        self.inner.get()
    }

    /// The travel range behind this binding
    pub fn range(&self) -> f32 {
        self.inner.range()
    }

    /// Expansion progress: `0.0` collapsed, `1.0` fully expanded.
    ///
    /// Handy for hosts that drive secondary effects (chevron rotation,
    /// backdrop dimming) off sheet position.
    pub fn progress(&self) -> f32 {
        1.0 - self.inner.get() / self.inner.range()
    }
}
