//! Sheet controller
//!
//! Composes the offset cell, drag tracker, snap rule, and animator into the
//! host-facing surface: drag callbacks and toggles in, state and offset out.
//!
//! # Writer discipline
//!
//! Exactly one component writes the offset at any instant. During a gesture
//! session the tracker writes from the input context; between sessions the
//! animator writes from the frame loop. Every handoff cancels the previous
//! writer first, and all mutating operations take `&mut self`, so two
//! writers cannot race without the host already holding two mutable
//! references. Hosts whose input and frame callbacks live on different
//! threads wrap the controller in `Arc<Mutex<...>>` and keep render reads
//! lock-free through [`OffsetBinding`].

use std::sync::{Arc, Mutex};

use crate::config::SheetConfig;
use crate::content::SheetContent;
use crate::driver::SheetAnimator;
use crate::error::Result;
use crate::gesture::{DragSample, DragTracker};
use crate::offset::{OffsetBinding, SheetOffset};
use crate::snap::{SnapPoint, SnapRule};
use crate::state::{sheet_events, SheetState, StateTransitions};

/// Host listener invoked with the rest state each time a snap animation
/// completes
type SettleListener = Arc<Mutex<Option<Box<dyn FnMut(SheetState) + Send>>>>;

/// The draggable bottom sheet.
pub struct SheetController {
    config: SheetConfig,
    snap: SnapRule,
    offset: Arc<SheetOffset>,
    state: SheetState,
    tracker: DragTracker,
    animator: SheetAnimator,
    content: SheetContent,
    settle_listener: SettleListener,
}

impl SheetController {
    /// Build a sheet from `config`, starting collapsed.
    ///
    /// Fails if the configured travel range
    /// (`max_extent - min_extent`) is not positive and finite.
    pub fn new(config: SheetConfig, content: SheetContent) -> Result<Self> {
        let offset = Arc::new(SheetOffset::new(config.range())?);
        let tracker = DragTracker::new(Arc::clone(&offset));
        let animator = SheetAnimator::new(Arc::clone(&offset), config.spring);
        let snap = config.snap_rule();
        Ok(Self {
            config,
            snap,
            offset,
            state: SheetState::Collapsed,
            tracker,
            animator,
            content,
            settle_listener: Arc::new(Mutex::new(None)),
        })
    }

    // =========================================================================
    // Inbound: gestures and toggling
    // =========================================================================

    /// Begin a gesture session. Cancels any in-flight snap animation; its
    /// completion callback is dropped uninvoked and the offset stays exactly
    /// where it is.
    pub fn on_drag_start(&mut self) {
        self.animator.cancel();
        self.tracker.begin();
        if let Some(next) = self.state.on_event(sheet_events::DRAG_START) {
            self.set_state(next);
        }
    }

    /// Apply one drag sample: a single clamped atomic store, never blocks.
    /// Ignored when no session is active.
    pub fn on_drag_sample(&mut self, sample: DragSample) {
        self.tracker.sample(sample);
    }

    /// End the gesture session and snap to the rest position the rule picks
    /// for `final_velocity`. Ignored when no session is active.
    pub fn on_drag_end(&mut self, final_velocity: f32) {
        if self.tracker.finish().is_none() {
            tracing::trace!("drag end with no active session; ignored");
            return;
        }
        self.snap_from(final_velocity);
    }

    /// End a session the platform abandoned without delivering a final
    /// velocity. Treated as a normal end using the last sampled velocity.
    pub fn on_drag_cancel(&mut self) {
        let Some(last_velocity) = self.tracker.finish() else {
            return;
        };
        self.snap_from(last_velocity);
    }

    /// Flip between the rest positions: Expanded collapses, anything else
    /// expands. Bypasses `Dragging` entirely; an active gesture session is
    /// abandoned and its later samples are ignored.
    pub fn toggle(&mut self) {
        self.tracker.cancel();
        let Some(next) = self.state.on_event(sheet_events::TOGGLE) else {
            return;
        };
        self.set_state(next);
        let snap = if next.is_expanded() {
            SnapPoint::Expanded
        } else {
            SnapPoint::Collapsed
        };
        self.start_snap(snap);
    }

    // =========================================================================
    // Frame loop
    // =========================================================================

    /// Advance the snap animation by `dt` seconds. Call once per display
    /// frame. Returns true while an animation is running.
    pub fn tick(&mut self, dt: f32) -> bool {
        self.animator.tick(dt)
    }

    // =========================================================================
    // Outbound: host reads
    // =========================================================================

    /// Current logical state
    pub fn state(&self) -> SheetState {
        self.state
    }

    /// Current offset in `[0, range]`
    pub fn offset(&self) -> f32 {
        self.offset.get()
    }

    /// Lock-free read handle for the render context
    pub fn offset_binding(&self) -> OffsetBinding {
        OffsetBinding::new(Arc::clone(&self.offset))
    }

    /// The configuration this sheet was built with
    pub fn config(&self) -> &SheetConfig {
        &self.config
    }

    /// Records rendered inside the sheet body, in the order given
    pub fn content(&self) -> &SheetContent {
        &self.content
    }

    /// Replace the body records (host props changed)
    pub fn set_content(&mut self, content: SheetContent) {
        self.content = content;
    }

    /// True while a snap animation is running
    pub fn is_animating(&self) -> bool {
        self.animator.is_animating()
    }

    /// Register a listener invoked with the rest state each time a snap
    /// animation completes. Cancelled runs never fire it.
    pub fn set_on_settle<F>(&mut self, listener: F)
    where
        F: FnMut(SheetState) + Send + 'static,
    {
        *self.settle_listener.lock().unwrap() = Some(Box::new(listener));
    }

    // =========================================================================
    // Internals
    // =========================================================================

    fn set_state(&mut self, next: SheetState) {
        if next != self.state {
            tracing::debug!("sheet state {:?} -> {:?}", self.state, next);
            self.state = next;
        }
    }

    /// Decide and start the end-of-drag snap
    fn snap_from(&mut self, velocity: f32) {
        let offset = self.offset.get();
        let range = self.config.range();
        let snap = self.snap.decide(offset, velocity, range);
        tracing::debug!(
            "drag ended at offset {:.1} with velocity {:.1}: snapping to {:?}",
            offset,
            velocity,
            snap
        );
        let event = match snap {
            SnapPoint::Expanded => sheet_events::SNAP_EXPAND,
            SnapPoint::Collapsed => sheet_events::SNAP_COLLAPSE,
        };
        if let Some(next) = self.state.on_event(event) {
            self.set_state(next);
        }
        self.start_snap(snap);
    }

    /// Start the animator toward `snap`, wiring the settle listener
    fn start_snap(&mut self, snap: SnapPoint) {
        let target = snap.offset(self.config.range());
        let rest_state = match snap {
            SnapPoint::Expanded => SheetState::Expanded,
            SnapPoint::Collapsed => SheetState::Collapsed,
        };
        let listener = Arc::clone(&self.settle_listener);
        self.animator.animate_to_with(target, move || {
            if let Some(listener) = listener.lock().unwrap().as_mut() {
                listener(rest_state);
            }
        });
    }
}
