//! Command-line interface definitions for `adopt-equatable`.

use clap::{Args as ClapArgs, Parser, Subcommand, ValueEnum};
use equatable_gen::{AccessLevel, EmitOverrides, TypeShape};

use crate::error::AdoptError;

/// Parsed CLI arguments for `adopt-equatable`.
#[derive(Debug, Parser)]
#[command(name = "adopt-equatable")]
#[command(about = "Print a Swift Equatable conformance for a type's fields")]
#[command(version)]
pub struct Args {
    /// Rendering overrides layered over `EQUATABLE_*` environment variables.
    #[command(flatten)]
    pub options: OptionArgs,
    /// Selected source of the type shape.
    #[command(subcommand)]
    pub command: Command,
}

/// Rendering overrides; unset flags defer to the environment and defaults.
#[derive(Debug, ClapArgs, Clone, Copy, Default)]
pub struct OptionArgs {
    /// Spaces per indentation level (default 4, at most 16).
    #[arg(long, value_name = "N", global = true)]
    pub indent_width: Option<u8>,
    /// Access modifier for the generated `==` function (default public).
    #[arg(long, value_enum, global = true)]
    pub access: Option<AccessArg>,
}

impl OptionArgs {
    /// Converts the flags into option overrides.
    #[must_use]
    pub fn overrides(&self) -> EmitOverrides {
        EmitOverrides {
            indent_width: self.indent_width,
            access: self.access.map(AccessLevel::from),
        }
    }
}

/// Access modifiers accepted by `--access`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum AccessArg {
    /// `public static func ==`.
    Public,
    /// `internal static func ==`.
    Internal,
    /// `fileprivate static func ==`.
    Fileprivate,
    /// `static func ==` with no modifier.
    Implicit,
}

impl From<AccessArg> for AccessLevel {
    fn from(value: AccessArg) -> Self {
        match value {
            AccessArg::Public => Self::Public,
            AccessArg::Internal => Self::Internal,
            AccessArg::Fileprivate => Self::Fileprivate,
            AccessArg::Implicit => Self::Implicit,
        }
    }
}

/// Workflows offered by `adopt-equatable`.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// Print the conformance for the built-in `Person` demo value.
    Demo,
    /// Print the conformance for an explicitly described type.
    Shape(ShapeArgs),
}

/// Explicit type description for the `shape` command.
#[derive(Debug, ClapArgs)]
pub struct ShapeArgs {
    /// Type name, optionally module-qualified (for example, `App.Person`).
    #[arg(long = "type", value_name = "NAME")]
    pub type_name: String,
    /// Field name in declaration order (repeat for each field).
    #[arg(long = "field", value_name = "NAME")]
    pub fields: Vec<String>,
}

impl ShapeArgs {
    /// Builds the type shape described by the flags.
    ///
    /// # Errors
    ///
    /// Returns [`AdoptError::BlankTypeName`] when `--type` is blank.
    pub fn to_shape(&self) -> Result<TypeShape, AdoptError> {
        let type_name = self.type_name.trim();
        if type_name.is_empty() {
            return Err(AdoptError::BlankTypeName);
        }
        Ok(TypeShape::new(type_name, self.fields.iter().cloned()))
    }
}
