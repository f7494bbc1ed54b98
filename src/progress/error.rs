/// Failures of the streak and pet progression engines
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ProgressError {
    #[error("Pet not found")]
    NotFound,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}
