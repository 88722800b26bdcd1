use thiserror::Error;

/// The host clock could not be read
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ClockError {
    #[error("clock read failed: {0}")]
    ReadFailed(String),
}

/// A bus transaction to the display controller failed
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum BusError {
    #[error("bus device unavailable: {0}")]
    Unavailable(String),

    #[error("bus write failed: {0}")]
    WriteFailed(String),
}
