/// Domain failures that are reported back to the user. Neither variant is
/// fatal; the operation that produced it leaves state untouched.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum TrackerError {
    #[error("{0}")]
    Validation(String),

    #[error("{0}")]
    NotFound(String),
}

impl TrackerError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn not_found(msg: impl Into<String>) -> Self {
        Self::NotFound(msg.into())
    }
}
