//! Library interface for the `adopt-equatable` command.
//!
//! The binary resolves a type shape (the built-in demo value or an explicit
//! description), layers rendering options, and prints the Swift `Equatable`
//! conformance to standard output.

pub mod cli;
pub mod demo;
pub mod error;
pub mod logging;

use std::io::{self, Write};

use equatable_gen::{EmitOptions, Reflect, TypeShape, emit_to};

use crate::cli::{Args, Command};
use crate::error::AdoptError;

/// Runs the parsed command, writing generated source to standard output.
///
/// # Errors
///
/// Returns an [`AdoptError`] if options cannot be loaded, the shape is
/// invalid, or standard output cannot be written.
pub fn run(args: &Args) -> Result<(), AdoptError> {
    let stdout = io::stdout();
    let mut handle = stdout.lock();
    run_to(args, &mut handle)
}

/// Runs the parsed command, writing generated source to `out`.
///
/// # Errors
///
/// See [`run`].
pub fn run_to<W: Write>(args: &Args, out: &mut W) -> Result<(), AdoptError> {
    let options = EmitOptions::load_with(&args.options.overrides())?;
    let shape = resolve_shape(&args.command)?;
    emit_to(out, &shape, &options)?;
    Ok(())
}

fn resolve_shape(command: &Command) -> Result<TypeShape, AdoptError> {
    match command {
        Command::Demo => Ok(demo::person().shape()),
        Command::Shape(shape_args) => shape_args.to_shape(),
    }
}
