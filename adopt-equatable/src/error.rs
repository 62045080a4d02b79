//! Error types for `adopt-equatable`.

use equatable_gen::EmitError;
use thiserror::Error;

/// Errors surfaced by the `adopt-equatable` pipeline.
#[derive(Debug, Error)]
pub enum AdoptError {
    /// Options could not be loaded or output could not be written.
    #[error(transparent)]
    Emit(#[from] EmitError),

    /// `--type` collapsed to nothing after trimming.
    #[error("type name must contain visible characters")]
    BlankTypeName,
}
