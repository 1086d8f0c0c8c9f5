use thiserror::Error;

/// Errors raised when a dialog is configured in a way that cannot work
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ModalError {
    #[error("dialog has no close handler; dismissal gestures would be swallowed")]
    MissingCloseHandler,
    #[error("invalid {field} id {value:?}: ids must be non-empty and contain no whitespace")]
    InvalidId { field: &'static str, value: String },
    #[error("id {value:?} is used for more than one dialog element")]
    DuplicateId { value: String },
}
