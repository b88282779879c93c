//! Sash Bottom Sheet
//!
//! A draggable bottom-sheet controller: raw drag samples in, spring-driven
//! snap motion out. The sheet rests either collapsed (grab area visible) or
//! expanded, follows the finger during a drag, and snaps to the rest
//! position the release picks - or flings open on a fast upward swipe.
//!
//! # Features
//!
//! - **Single source of truth**: one clamped, lock-free offset cell shared
//!   between the input and render contexts
//! - **Pure snap rule**: fling-or-position decision with tunable thresholds
//! - **Interruptible motion**: drags and toggles cancel in-flight snaps with
//!   no offset jump; superseded completion callbacks are dropped uninvoked
//! - **FSM states**: `Collapsed`, `Expanded`, `Dragging` - with `Dragging`
//!   never observable after a gesture ends
//!
//! # Example
//!
//! ```rust,ignore
//! use sash_sheet::{DragSample, SheetConfig, SheetContent, SheetController};
//!
//! let mut sheet = SheetController::new(
//!     SheetConfig::for_viewport(800.0),
//!     SheetContent::default(),
//! )?;
//!
//! // Input context: forward platform gesture callbacks.
//! sheet.on_drag_start();
//! sheet.on_drag_sample(DragSample { translation_delta: -180.0, velocity: -420.0 });
//! sheet.on_drag_end(-420.0);
//!
//! // Render context: step the animation and read the offset.
//! let binding = sheet.offset_binding();
//! while sheet.tick(1.0 / 60.0) {
//!     println!("translate_y = {}", binding.get());
//! }
//! ```

pub mod config;
pub mod content;
pub mod controller;
pub mod driver;
pub mod error;
pub mod gesture;
pub mod offset;
pub mod snap;
pub mod state;

pub use config::SheetConfig;
pub use content::{RiskLevel, RiskRecord, RouteRecord, SheetContent};
pub use controller::SheetController;
pub use driver::SheetAnimator;
pub use error::{Result, SheetError};
pub use gesture::{DragSample, DragTracker};
pub use offset::{OffsetBinding, SheetOffset};
pub use snap::{SnapPoint, SnapRule};
pub use state::{sheet_events, SheetState, StateTransitions};

// Spring types hosts tune through `SheetConfig::spring`
pub use sash_animation::SpringConfig;
