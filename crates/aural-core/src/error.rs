use thiserror::Error;

/// Errors raised while turning user input into a room description.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum AuralError {
    #[error("{axis} is not a number: {raw:?}")]
    UnparsableDimension { axis: &'static str, raw: String },
    #[error("{axis} must be a positive finite length, got {value}")]
    InvalidDimension { axis: &'static str, value: f32 },
}
