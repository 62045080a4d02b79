//! Writing rendered conformances to an output sink.

use std::io::{self, Write};

use serde::Serialize;

use crate::{EmitError, EmitOptions, Reflect, TypeShape, render, shape_of};

/// Writes the conformance for `shape`, followed by a newline, to `out`.
///
/// # Errors
///
/// Returns [`EmitError::Io`] if writing to `out` fails.
pub fn emit_to<W: Write>(
    out: &mut W,
    shape: &TypeShape,
    options: &EmitOptions,
) -> Result<(), EmitError> {
    let source = render(shape, options);
    tracing::debug!(
        type_name = shape.type_name(),
        fields = shape.fields().len(),
        "emitting equatable conformance"
    );
    writeln!(out, "{source}")?;
    out.flush()?;
    Ok(())
}

/// Writes the conformance for a shape to standard output.
///
/// # Errors
///
/// Returns [`EmitError::Io`] if standard output cannot be written.
pub fn emit_shape(shape: &TypeShape, options: &EmitOptions) -> Result<(), EmitError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    emit_to(&mut handle, shape, options)
}

/// Prints an `Equatable` conformance for `value`'s type to standard output
/// using the default options.
///
/// # Errors
///
/// Returns [`EmitError::Io`] if standard output cannot be written.
///
/// # Examples
///
/// ```
/// use equatable_gen::{Reflect, emit};
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// emit(&Point { x: 1, y: 2 })?;
/// # Ok::<(), equatable_gen::EmitError>(())
/// ```
pub fn emit<T: Reflect>(value: &T) -> Result<(), EmitError> {
    emit_shape(&value.shape(), &EmitOptions::default())
}

/// Prints an `Equatable` conformance for a value reflected through its
/// `Serialize` impl.
///
/// # Errors
///
/// Returns [`EmitError::Reflect`] if the value is not a struct, or
/// [`EmitError::Io`] if standard output cannot be written.
pub fn emit_serialize<T>(value: &T, options: &EmitOptions) -> Result<(), EmitError>
where
    T: Serialize + ?Sized,
{
    emit_shape(&shape_of(value)?, options)
}
