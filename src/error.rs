//! Error types for the FEA engine.

use thiserror::Error;

/// Main error type for engine operations.
#[derive(Error, Debug)]
pub enum FeaError {
    #[error("model has {0} joints, exceeding the 2000 joint limit")]
    ModelTooLargeJoints(usize),

    #[error("model has {0} frames, exceeding the 2000 frame limit")]
    ModelTooLargeFrames(usize),

    #[error("load case '{0}' does not resolve in this model")]
    UnknownCase(String),

    #[error("load combination '{0}' does not resolve in this model")]
    UnknownCombination(String),

    #[error("frame '{0}' has degenerate length (<= 1e-6 m) and was skipped")]
    DegenerateMember(String),

    #[error("frame '{0}' references unresolved section '{1}'")]
    UnresolvedSection(String, String),

    #[error("frame '{0}' references unresolved material '{1}'")]
    UnresolvedMaterial(String, String),

    #[error("invalid section dimensions: {0}")]
    InvalidSection(String),

    #[error("singular stiffness matrix - structure is under-restrained or has a mechanism")]
    SingularSystem,

    #[error("joint '{0}' not found in model")]
    JointNotFound(u32),

    #[error("duplicate id '{0}' already exists")]
    DuplicateId(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Result type used throughout the engine's internals.
pub type FeaResult<T> = Result<T, FeaError>;
