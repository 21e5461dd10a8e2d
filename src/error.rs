//! Error types shared by every GPU resource owner in the crate.

use crate::device::ShaderStage;

/// Errors raised while creating or driving GL resources.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum GlError {
    /// A caller-supplied argument is inconsistent (e.g. a byte size that does
    /// not match the vertex data it describes).
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// The graphics device refused to allocate a handle.
    #[error("Failed to allocate {resource}: {reason}")]
    ResourceAllocation {
        /// Kind of object that was requested.
        resource: &'static str,
        /// Driver-provided reason.
        reason: String,
    },

    /// A shader stage failed to compile.
    #[error("{stage} shader compile error: {log}")]
    ShaderCompile {
        /// The stage that failed.
        stage: ShaderStage,
        /// Compiler info log.
        log: String,
    },

    /// The shader program failed to link.
    #[error("Program link error: {0}")]
    ShaderLink(String),
}

impl GlError {
    /// Shorthand for [`GlError::InvalidArgument`].
    pub fn invalid_argument<T: ToString>(msg: T) -> Self {
        GlError::InvalidArgument(msg.to_string())
    }

    /// Shorthand for [`GlError::ResourceAllocation`].
    pub fn allocation<T: ToString>(resource: &'static str, reason: T) -> Self {
        GlError::ResourceAllocation {
            resource,
            reason: reason.to_string(),
        }
    }
}

/// Result alias used throughout the crate.
pub type GlResult<T> = Result<T, GlError>;
