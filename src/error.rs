//! Error Types
//!
//! Errors raised by the rendering core. Initialization failures
//! ([`GraphicsError::Compile`], [`GraphicsError::Link`],
//! [`GraphicsError::ResourceExhausted`], ...) abort startup; per-frame
//! failures such as [`GraphicsError::UniformNotFound`] are returned from
//! `draw` so the host can detect them without the loop crashing.
//!
//! None of these conditions are transient, so nothing here is retried.

use std::fmt;

use thiserror::Error;

/// Shader pipeline stage, used to label compile diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShaderStage {
    Vertex,
    Fragment,
}

impl fmt::Display for ShaderStage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ShaderStage::Vertex => f.write_str("vertex"),
            ShaderStage::Fragment => f.write_str("fragment"),
        }
    }
}

/// The error type of the rendering core.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GraphicsError {
    /// No usable OpenGL context could be queried.
    #[error("OpenGL context is not usable")]
    ContextUnavailable,

    /// The loaded OpenGL version is older than the pipeline requires.
    #[error("OpenGL {major}.{minor} loaded, 3.3 or newer is required")]
    UnsupportedVersion { major: u32, minor: u32 },

    /// A shader stage failed to compile.
    #[error("{stage} shader failed to compile: {log}")]
    Compile { stage: ShaderStage, log: String },

    /// The program failed to link.
    #[error("shader program failed to link: {log}")]
    Link { log: String },

    /// A uniform the host uploads every frame is missing from the linked program.
    #[error("uniform `{name}` not found in shader program")]
    UniformNotFound { name: String },

    /// The driver refused to allocate a GPU object.
    #[error("failed to allocate {resource}: {reason}")]
    ResourceExhausted {
        resource: &'static str,
        reason: String,
    },

    /// An operation was issued in the wrong lifecycle state.
    #[error("scene manager is {state}, operation requires it to be ready")]
    NotReady { state: &'static str },

    /// Configuration values that cannot produce a valid pipeline.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Result alias used across the rendering core.
pub type Result<T> = std::result::Result<T, GraphicsError>;
