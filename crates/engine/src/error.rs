//! The module contains the errors the engine can return.
//!
//! Balance and settlement computations are total and never fail. Errors only
//! come from the write path, when an expense draft or a participant selection
//! is validated before it reaches the engine:
//!
//! - [`InvalidAmount`] returned when an amount is not positive, above
//!   [`Money::LIMIT`](crate::Money::LIMIT) or unparsable.
//! - [`InvalidSplit`] returned when the splits do not add up to the expense.
//! - [`InvalidDescription`] returned when a description is blank or too long.
//! - [`UnknownParticipant`] returned when an id is not part of the room.
//! - [`EmptySelection`] returned when no participant would be left selected.
//!
//!  [`InvalidAmount`]: EngineError::InvalidAmount
//!  [`InvalidSplit`]: EngineError::InvalidSplit
//!  [`InvalidDescription`]: EngineError::InvalidDescription
//!  [`UnknownParticipant`]: EngineError::UnknownParticipant
//!  [`EmptySelection`]: EngineError::EmptySelection
use thiserror::Error;

/// Engine custom errors.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid amount: {0}")]
    InvalidAmount(String),
    #[error("Invalid split: {0}")]
    InvalidSplit(String),
    #[error("Invalid description: {0}")]
    InvalidDescription(String),
    #[error("\"{0}\" is not a participant of the room")]
    UnknownParticipant(String),
    #[error("At least one participant must be selected")]
    EmptySelection,
}
