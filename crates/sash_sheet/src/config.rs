//! Sheet configuration

use sash_animation::SpringConfig;

use crate::snap::SnapRule;

/// Configuration for a bottom sheet instance.
///
/// Defaults size the sheet for a phone-class viewport (a 480px expanded
/// extent over a 140px grab area) and snap with a -500 px/s fling
/// threshold, a midpoint position split, and a heavily damped spring.
#[derive(Debug, Clone, PartialEq)]
pub struct SheetConfig {
    /// Sheet height when fully expanded, in pixels
    pub max_extent: f32,
    /// Sheet height when collapsed (the grab area stays visible), in pixels
    pub min_extent: f32,
    /// Upward velocity (negative) beyond which a release flings the sheet
    /// open regardless of position
    pub fling_threshold: f32,
    /// Fraction of the travel range deciding position-based snaps
    pub snap_ratio: f32,
    /// Spring profile driving snap animations
    pub spring: SpringConfig,
}

impl Default for SheetConfig {
    fn default() -> Self {
        Self {
            max_extent: 480.0,
            min_extent: 140.0,
            fling_threshold: -500.0,
            snap_ratio: 0.5,
            // Damping well above critical for this stiffness: the sheet
            // glides to rest without overshoot
            spring: SpringConfig::new(100.0, 50.0, 1.0),
        }
    }
}

impl SheetConfig {
    /// Config with explicit extents and default behavior
    pub fn new(max_extent: f32, min_extent: f32) -> Self {
        Self {
            max_extent,
            min_extent,
            ..Default::default()
        }
    }

    /// Size the sheet for a viewport: expanded covers 60% of the height,
    /// collapsed keeps a 140px grab area visible.
    pub fn for_viewport(height: f32) -> Self {
        Self::new(height * 0.6, 140.0)
    }

    /// Override the fling threshold
    pub fn fling_threshold(mut self, threshold: f32) -> Self {
        self.fling_threshold = threshold;
        self
    }

    /// Override the position snap ratio
    pub fn snap_ratio(mut self, ratio: f32) -> Self {
        self.snap_ratio = ratio;
        self
    }

    /// Replace the snap spring profile
    pub fn spring(mut self, spring: SpringConfig) -> Self {
        self.spring = spring;
        self
    }

    /// Adjust only the spring's damping factor
    pub fn damping(mut self, damping: f32) -> Self {
        self.spring.damping = damping;
        self
    }

    /// The travel range between expanded and collapsed
    pub fn range(&self) -> f32 {
        self.max_extent - self.min_extent
    }

    /// Project the snap-decision thresholds out of this config
    pub fn snap_rule(&self) -> SnapRule {
        SnapRule {
            fling_threshold: self.fling_threshold,
            snap_ratio: self.snap_ratio,
        }
    }
}
