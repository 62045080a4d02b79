//! Error types for reflection and emission.

use figment::Error as FigmentError;
use thiserror::Error;

/// Errors raised while reflecting a value through its `Serialize` impl.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[non_exhaustive]
pub enum ReflectError {
    /// The value does not serialize as a struct, so it has no named fields.
    #[error("cannot derive an equatable conformance for a {kind}; expected a struct")]
    NotAStruct {
        /// Serde data model kind the value serialized as.
        kind: &'static str,
    },

    /// Custom error raised by the value's own `Serialize` impl.
    #[error("value failed to serialize: {0}")]
    Custom(String),
}

impl serde::ser::Error for ReflectError {
    fn custom<T: std::fmt::Display>(msg: T) -> Self {
        Self::Custom(msg.to_string())
    }
}

/// Errors surfaced by the emission pipeline.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum EmitError {
    /// Writing generated source to the output sink failed.
    #[error("failed to write generated source: {0}")]
    Io(#[from] std::io::Error),

    /// The value could not be reflected into a type shape.
    #[error(transparent)]
    Reflect(#[from] ReflectError),

    /// Emit options could not be gathered from defaults, environment, and
    /// overrides.
    #[error("failed to load emit options: {0}")]
    Config(#[from] Box<FigmentError>),

    /// The configured indentation exceeds the supported width.
    #[error("indent width {width} exceeds the maximum of {max}")]
    IndentTooWide {
        /// Width that was requested.
        width: u8,
        /// Largest accepted width.
        max: u8,
    },
}
