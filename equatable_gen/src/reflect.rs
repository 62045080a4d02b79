//! Compile-time reflection capability.

use crate::TypeShape;

/// Types whose name and named fields can be enumerated in declaration order.
///
/// Implement this with `#[derive(Reflect)]` rather than by hand. The derive
/// records the defining module, the type name, and every field name, so a
/// value's shape is available without runtime inspection.
///
/// ```
/// use equatable_gen::Reflect;
///
/// #[derive(Reflect)]
/// struct Point {
///     x: i64,
///     y: i64,
/// }
///
/// let shape = Point { x: 0, y: 0 }.shape();
/// assert_eq!(shape.simple_name(), "Point");
/// assert_eq!(shape.fields(), ["x", "y"]);
/// ```
pub trait Reflect {
    /// `module_path!()` at the type's definition site.
    const MODULE_PATH: &'static str;

    /// Type name as it should appear in generated code, possibly dotted for
    /// nested types.
    const TYPE_NAME: &'static str;

    /// Field names in declaration order; positional fields are empty.
    const FIELD_NAMES: &'static [&'static str];

    /// Returns the reflected shape of this value's type.
    ///
    /// The qualified name is the defining crate followed by
    /// [`Self::TYPE_NAME`], mirroring a module-qualified type name; the crate
    /// segment is the qualifier stripped during rendering.
    fn shape(&self) -> TypeShape {
        let krate = Self::MODULE_PATH
            .split("::")
            .next()
            .unwrap_or(Self::MODULE_PATH);
        TypeShape::new(
            format!("{krate}::{}", Self::TYPE_NAME),
            Self::FIELD_NAMES.iter().copied(),
        )
    }
}
