//! Core crate for generating Swift `Equatable` conformances.
//!
//! A value's [`TypeShape`] (its type name and ordered field names) is obtained
//! through the [`Reflect`] derive, through serde via [`shape_of`], or spelled
//! out by hand with [`TypeShape::new`]. [`render`] turns a shape into source
//! text and [`emit`] prints it for copying into a Swift project:
//!
//! ```text
//! extension Point: Equatable {
//!     public static func ==(lhs: Point, rhs: Point) -> Bool {
//!         guard lhs.x == rhs.x else { return false }
//!         guard lhs.y == rhs.y else { return false }
//!         return true
//!     }
//! }
//! ```
//!
//! The derive macro lives in the companion `equatable_gen_macros` crate.

extern crate self as equatable_gen;

pub use equatable_gen_macros::Reflect;

mod emit;
mod error;
mod name;
mod options;
mod reflect;
mod ser;
mod shape;
pub mod template;

pub use emit::{emit, emit_serialize, emit_shape, emit_to};
pub use error::{EmitError, ReflectError};
pub use name::simple_type_name;
pub use options::{
    AccessLevel, DEFAULT_INDENT_WIDTH, ENV_PREFIX, EmitOptions, EmitOverrides, MAX_INDENT_WIDTH,
};
pub use reflect::Reflect;
pub use ser::shape_of;
pub use shape::TypeShape;
pub use template::render;
