//! Domain errors raised while validating input and reading model output.

#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    #[error("Validation failed: {0}")]
    Validation(String),

    #[error("Unexpected response shape: {0}")]
    ResponseShape(String),
}
