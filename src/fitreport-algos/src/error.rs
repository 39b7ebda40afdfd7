use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq, Eq)]
pub enum AnalysisError {
    #[error("log sequence is empty")]
    EmptyLogSequence,
    #[error("need at least {required} log records, got {found}")]
    InsufficientData { required: usize, found: usize },
    #[error("need at least 2 workout types for analysis, got {found}")]
    InsufficientGroups { found: usize },
}
