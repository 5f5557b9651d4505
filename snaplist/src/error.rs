use thiserror::Error;

/// Rejected configuration.
#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum SnapListError {
    #[error("item pitch must be finite and positive, got {0}")]
    InvalidItemPitch(f32),

    #[error("animation duration must be positive")]
    InvalidAnimationDuration,

    #[error("end-of-list tolerance must be finite and non-negative, got {0}")]
    InvalidEndOfListTolerance(f32),
}

pub type Result<T> = core::result::Result<T, SnapListError>;
