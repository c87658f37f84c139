use thiserror::Error;

/// Errors raised while building or driving a point-robot environment.
#[derive(Debug, Error, Clone, PartialEq)]
pub enum EnvError {
    #[error("Task index {index} out of range for task set of size {len}")]
    TaskIndexOutOfRange { index: usize, len: usize },

    #[error("Cannot build environment: task set is empty")]
    EmptyTaskSet,

    #[error("Invalid environment configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown environment variant: {0}")]
    UnknownVariant(String),
}
