//! Snap animation driver
//!
//! Runs one spring at a time against the offset cell, moving the sheet from
//! wherever it is toward a snap target. Runs are cancellable at any moment;
//! a superseding run retargets the live spring so motion never jumps.

use std::sync::Arc;

use sash_animation::{AnimationScheduler, Spring, SpringConfig, SpringId};

use crate::offset::SheetOffset;

/// Completion callback for a snap run, invoked at most once
type SettleCallback = Box<dyn FnOnce() + Send>;

struct ActiveRun {
    spring: SpringId,
    target: f32,
    on_settle: Option<SettleCallback>,
}

/// Drives the offset toward snap targets with damped spring motion.
///
/// One run is active at a time. Starting a new run while one is in flight
/// retargets the live spring in place, so value and velocity carry over and
/// an interrupted animation keeps moving smoothly instead of restarting
/// from rest. The superseded run's callback is dropped uninvoked.
pub struct SheetAnimator {
    offset: Arc<SheetOffset>,
    scheduler: AnimationScheduler,
    spring_config: SpringConfig,
    run: Option<ActiveRun>,
}

impl SheetAnimator {
    pub fn new(offset: Arc<SheetOffset>, spring_config: SpringConfig) -> Self {
        Self {
            offset,
            scheduler: AnimationScheduler::new(),
            spring_config,
            run: None,
        }
    }

    /// Animate from the current offset to `target`
    pub fn animate_to(&mut self, target: f32) {
        self.start(target, None);
    }

    /// Animate from the current offset to `target`, invoking `on_settle`
    /// exactly once when the run completes. A cancelled run never invokes
    /// its callback.
    pub fn animate_to_with<F>(&mut self, target: f32, on_settle: F)
    where
        F: FnOnce() + Send + 'static,
    {
        self.start(target, Some(Box::new(on_settle)));
    }

    fn start(&mut self, target: f32, on_settle: Option<SettleCallback>) {
        if let Some(run) = self.run.as_mut() {
            // Supersede in place: the live spring keeps its value and
            // velocity, only the target moves
            self.scheduler
                .with_spring_mut(run.spring, |spring| spring.set_target(target));
            run.target = target;
            run.on_settle = on_settle;
            tracing::trace!("snap run retargeted toward {:.1}", target);
            return;
        }

        let mut spring = Spring::new(self.spring_config, self.offset.get());
        spring.set_target(target);
        let spring = self.scheduler.add_spring(spring);
        self.run = Some(ActiveRun {
            spring,
            target,
            on_settle,
        });
        tracing::trace!("snap run started toward {:.1}", target);
    }

    /// Cancel the in-flight run, if any. The spring is dropped where it
    /// stands and the callback never fires. Safe to call when idle.
    pub fn cancel(&mut self) {
        if let Some(run) = self.run.take() {
            self.scheduler.remove_spring(run.spring);
            tracing::trace!("snap run cancelled");
        }
    }

    /// Advance the active run by `dt` seconds. Returns true while a run is
    /// still animating.
    pub fn tick(&mut self, dt: f32) -> bool {
        let Some(spring_id) = self.run.as_ref().map(|run| run.spring) else {
            return false;
        };
        self.scheduler.tick(dt);

        let (value, settled) = match self.scheduler.get_spring(spring_id) {
            Some(spring) => (spring.value(), spring.is_settled()),
            None => {
                self.run = None;
                return false;
            }
        };
        self.offset.set(value);
        if !settled {
            return true;
        }

        if let Some(run) = self.run.take() {
            // Rest exactly on the target before reporting completion
            self.offset.set(run.target);
            self.scheduler.remove_spring(run.spring);
            tracing::debug!("sheet settled at offset {:.1}", run.target);
            if let Some(on_settle) = run.on_settle {
                on_settle();
            }
        }
        false
    }

    /// True while a run is animating
    pub fn is_animating(&self) -> bool {
        self.run.is_some()
    }

    /// Target of the active run, if any
    pub fn target(&self) -> Option<f32> {
        self.run.as_ref().map(|run| run.target)
    }
}
