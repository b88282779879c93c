//! Drag gesture sampling
//!
//! Tracks the active gesture session and writes dragged positions straight
//! into the offset cell. Sampling happens on the input context once per
//! input frame, so the write path is a single clamped atomic store.

use std::sync::Arc;

use crate::offset::SheetOffset;

/// One drag movement, delivered once per input frame during a session
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DragSample {
    /// Translation since the session anchor, in pixels (negative = upward)
    pub translation_delta: f32,
    /// Instantaneous velocity along the drag axis, in pixels per second
    pub velocity: f32,
}

/// Tracks the active drag session and drives the offset from raw samples.
///
/// A session anchors at the offset where the finger went down; every sample
/// repositions the sheet relative to that anchor. The last sampled velocity
/// is remembered so a platform-abandoned drag can still snap sensibly.
#[derive(Debug)]
pub struct DragTracker {
    offset: Arc<SheetOffset>,
    session: Option<DragSession>,
}

#[derive(Debug, Clone, Copy)]
struct DragSession {
    start_offset: f32,
    last_velocity: f32,
}

impl DragTracker {
    pub fn new(offset: Arc<SheetOffset>) -> Self {
        Self {
            offset,
            session: None,
        }
    }

    /// Open a session anchored at the current offset. If a session is
    /// already active it is re-anchored in place.
    pub fn begin(&mut self) {
        let start_offset = self.offset.get();
        if self.session.is_some() {
            tracing::trace!("drag re-anchored at offset {:.1}", start_offset);
        }
        self.session = Some(DragSession {
            start_offset,
            last_velocity: 0.0,
        });
    }

    /// Apply one drag sample. Returns `false` (and leaves the offset alone)
    /// when no session is active.
    pub fn sample(&mut self, sample: DragSample) -> bool {
        let Some(session) = self.session.as_mut() else {
            tracing::trace!("drag sample with no active session; ignored");
            return false;
        };
        session.last_velocity = sample.velocity;
        self.offset
            .set(session.start_offset + sample.translation_delta);
        true
    }

    /// Close the session, returning the last sampled velocity, or `None`
    /// when no session was active.
    pub fn finish(&mut self) -> Option<f32> {
        self.session.take().map(|session| session.last_velocity)
    }

    /// Discard the session without snapping (used when a toggle takes over)
    pub fn cancel(&mut self) {
        if self.session.take().is_some() {
            tracing::trace!("drag session abandoned");
        }
    }

    /// True while a session is active
    pub fn is_active(&self) -> bool {
        self.session.is_some()
    }
}
