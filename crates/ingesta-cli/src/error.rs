use thiserror::Error;

use ingesta_core::PipelineError;

/// CLI-level error categories mapped to exit codes.
#[derive(Debug, Error)]
pub enum CliError {
    #[error(transparent)]
    Pipeline(#[from] PipelineError),

    #[error(transparent)]
    Core(#[from] ingesta_core::CoreError),

    #[error(transparent)]
    Serialization(#[from] serde_json::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl CliError {
    pub const fn exit_code(&self) -> u8 {
        match self {
            Self::Pipeline(PipelineError::EmptySnapshot) => 3,
            Self::Pipeline(_) | Self::Core(_) | Self::Serialization(_) | Self::Io(_) => 10,
        }
    }
}
