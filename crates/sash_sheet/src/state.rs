//! Sheet interaction state
//!
//! FSM for the sheet's logical position: collapsed, expanded, or actively
//! being dragged. Transitions are driven by the event ids in
//! [`sheet_events`]; (state, event) pairs with no listed transition are
//! ignored.

use std::hash::Hash;

/// Trait for state types that respond to events
pub trait StateTransitions:
    Clone + Copy + PartialEq + Eq + Hash + Send + Sync + std::fmt::Debug + 'static
{
    /// Process an event and return the new state, or `None` when the event
    /// does not transition out of the current state
    fn on_event(&self, event: u32) -> Option<Self>;
}

/// Event ids driving [`SheetState`] transitions
pub mod sheet_events {
    /// A drag session began on the sheet handle
    pub const DRAG_START: u32 = 1;
    /// Drag ended and the snap rule chose the expanded rest position
    pub const SNAP_EXPAND: u32 = 2;
    /// Drag ended and the snap rule chose the collapsed rest position
    pub const SNAP_COLLAPSE: u32 = 3;
    /// The host toggled the sheet (handle tap)
    pub const TOGGLE: u32 = 4;
}

/// Logical sheet position
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SheetState {
    /// Resting at the minimum visible height (initial)
    #[default]
    Collapsed,
    /// Fully open
    Expanded,
    /// A gesture session is active and drives the offset directly
    Dragging,
}

impl SheetState {
    /// True while a gesture session drives the sheet
    pub fn is_dragging(&self) -> bool {
        matches!(self, SheetState::Dragging)
    }

    /// True when the sheet rests fully open
    pub fn is_expanded(&self) -> bool {
        matches!(self, SheetState::Expanded)
    }
}

impl StateTransitions for SheetState {
    fn on_event(&self, event: u32) -> Option<Self> {
        use sheet_events::*;
        match (self, event) {
            (SheetState::Collapsed, DRAG_START) => Some(SheetState::Dragging),
            (SheetState::Expanded, DRAG_START) => Some(SheetState::Dragging),
            (SheetState::Dragging, SNAP_EXPAND) => Some(SheetState::Expanded),
            (SheetState::Dragging, SNAP_COLLAPSE) => Some(SheetState::Collapsed),
            (SheetState::Collapsed, TOGGLE) => Some(SheetState::Expanded),
            (SheetState::Expanded, TOGGLE) => Some(SheetState::Collapsed),
            // Toggling mid-drag abandons the gesture and opens the sheet
            (SheetState::Dragging, TOGGLE) => Some(SheetState::Expanded),
            _ => None,
        }
    }
}
