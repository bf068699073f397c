use thiserror::Error;

#[derive(Debug, Error)]
pub enum SimulationError {
    #[error("Configuration error: {0}")]
    ConfigurationError(String),

    #[error("Domain error: {0}")]
    DomainError(String),

    #[error("Report error: {0}")]
    ReportError(#[from] std::io::Error),
}

pub type SimulationResult<T> = Result<T, SimulationError>;
