use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum CoreError {
    #[error("No ingredients provided")]
    EmptyIngredients,

    #[error("External service error: {0}")]
    ExternalServiceError(String),

    #[error("Internal server error")]
    InternalServerError,
}
