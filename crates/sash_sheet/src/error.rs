//! Error types for the sheet controller

use thiserror::Error;

/// Errors surfaced by sheet construction.
///
/// Construction is the only fallible point in this crate: runtime clamping
/// and animation cancellation are normal behavior, not errors.
#[derive(Error, Debug)]
pub enum SheetError {
    /// The travel range (`max_extent - min_extent`) must be positive and
    /// finite.
    #[error("sheet travel range must be positive and finite, got {0}")]
    InvalidRange(f32),
}

pub type Result<T> = std::result::Result<T, SheetError>;
