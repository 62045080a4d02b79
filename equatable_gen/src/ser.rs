//! Runtime reflection through serde's data model.
//!
//! [`shape_of`] drives a value's `Serialize` impl into a serializer that
//! records the struct name and each field key, never descending into field
//! values. Field names therefore reflect serde attributes such as `rename`,
//! and fields marked `skip` are absent.

use serde::Serialize;
use serde::ser::{self, Impossible};

use crate::{ReflectError, TypeShape};

/// Reflects `value` into a [`TypeShape`] via its `Serialize` impl.
///
/// Named structs yield their field keys, tuple and newtype structs yield one
/// empty name per field, and unit structs yield no fields. Serde reports only
/// the bare struct name (or its `rename`), so the shape is
/// [unqualified](TypeShape::unqualified) and the name is rendered verbatim.
///
/// # Errors
///
/// Returns [`ReflectError::NotAStruct`] when the value serializes as anything
/// other than a struct, or [`ReflectError::Custom`] when its `Serialize` impl
/// fails.
///
/// # Examples
///
/// ```
/// use equatable_gen::shape_of;
/// use serde::Serialize;
///
/// #[derive(Serialize)]
/// struct Point {
///     x: i32,
///     y: i32,
/// }
///
/// let shape = shape_of(&Point { x: 1, y: 2 })?;
/// assert_eq!(shape.type_name(), "Point");
/// assert_eq!(shape.fields(), ["x", "y"]);
/// # Ok::<(), equatable_gen::ReflectError>(())
/// ```
pub fn shape_of<T>(value: &T) -> Result<TypeShape, ReflectError>
where
    T: Serialize + ?Sized,
{
    value.serialize(ShapeSerializer)
}

const fn not_a_struct(kind: &'static str) -> ReflectError {
    ReflectError::NotAStruct { kind }
}

struct ShapeSerializer;

/// Collects keys of a named struct.
struct NamedFields {
    name: &'static str,
    fields: Vec<&'static str>,
}

/// Counts positional fields of a tuple struct.
struct PositionalFields {
    name: &'static str,
    count: usize,
}

type Rejected = Impossible<TypeShape, ReflectError>;

impl ser::Serializer for ShapeSerializer {
    type Ok = TypeShape;
    type Error = ReflectError;
    type SerializeSeq = Rejected;
    type SerializeTuple = Rejected;
    type SerializeTupleStruct = PositionalFields;
    type SerializeTupleVariant = Rejected;
    type SerializeMap = Rejected;
    type SerializeStruct = NamedFields;
    type SerializeStructVariant = Rejected;

    fn serialize_bool(self, _v: bool) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("bool"))
    }

    fn serialize_i8(self, _v: i8) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_i16(self, _v: i16) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_i32(self, _v: i32) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_i64(self, _v: i64) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_u8(self, _v: u8) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_u16(self, _v: u16) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_u32(self, _v: u32) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_u64(self, _v: u64) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("integer"))
    }

    fn serialize_f32(self, _v: f32) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("float"))
    }

    fn serialize_f64(self, _v: f64) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("float"))
    }

    fn serialize_char(self, _v: char) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("char"))
    }

    fn serialize_str(self, _v: &str) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("string"))
    }

    fn serialize_bytes(self, _v: &[u8]) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("byte array"))
    }

    fn serialize_none(self) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("option"))
    }

    fn serialize_some<T>(self, _value: &T) -> Result<TypeShape, ReflectError>
    where
        T: Serialize + ?Sized,
    {
        Err(not_a_struct("option"))
    }

    fn serialize_unit(self) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("unit"))
    }

    fn serialize_unit_struct(self, name: &'static str) -> Result<TypeShape, ReflectError> {
        Ok(TypeShape::unqualified(name, std::iter::empty::<&str>()))
    }

    fn serialize_unit_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
    ) -> Result<TypeShape, ReflectError> {
        Err(not_a_struct("enum variant"))
    }

    fn serialize_newtype_struct<T>(
        self,
        name: &'static str,
        _value: &T,
    ) -> Result<TypeShape, ReflectError>
    where
        T: Serialize + ?Sized,
    {
        Ok(TypeShape::unqualified(name, [""]))
    }

    fn serialize_newtype_variant<T>(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _value: &T,
    ) -> Result<TypeShape, ReflectError>
    where
        T: Serialize + ?Sized,
    {
        Err(not_a_struct("enum variant"))
    }

    fn serialize_seq(self, _len: Option<usize>) -> Result<Rejected, ReflectError> {
        Err(not_a_struct("sequence"))
    }

    fn serialize_tuple(self, _len: usize) -> Result<Rejected, ReflectError> {
        Err(not_a_struct("tuple"))
    }

    fn serialize_tuple_struct(
        self,
        name: &'static str,
        _len: usize,
    ) -> Result<PositionalFields, ReflectError> {
        Ok(PositionalFields { name, count: 0 })
    }

    fn serialize_tuple_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Rejected, ReflectError> {
        Err(not_a_struct("enum variant"))
    }

    fn serialize_map(self, _len: Option<usize>) -> Result<Rejected, ReflectError> {
        Err(not_a_struct("map"))
    }

    fn serialize_struct(
        self,
        name: &'static str,
        len: usize,
    ) -> Result<NamedFields, ReflectError> {
        Ok(NamedFields {
            name,
            fields: Vec::with_capacity(len),
        })
    }

    fn serialize_struct_variant(
        self,
        _name: &'static str,
        _variant_index: u32,
        _variant: &'static str,
        _len: usize,
    ) -> Result<Rejected, ReflectError> {
        Err(not_a_struct("enum variant"))
    }
}

impl ser::SerializeStruct for NamedFields {
    type Ok = TypeShape;
    type Error = ReflectError;

    fn serialize_field<T>(&mut self, key: &'static str, _value: &T) -> Result<(), ReflectError>
    where
        T: Serialize + ?Sized,
    {
        self.fields.push(key);
        Ok(())
    }

    fn end(self) -> Result<TypeShape, ReflectError> {
        Ok(TypeShape::unqualified(self.name, self.fields))
    }
}

impl ser::SerializeTupleStruct for PositionalFields {
    type Ok = TypeShape;
    type Error = ReflectError;

    fn serialize_field<T>(&mut self, _value: &T) -> Result<(), ReflectError>
    where
        T: Serialize + ?Sized,
    {
        self.count += 1;
        Ok(())
    }

    fn end(self) -> Result<TypeShape, ReflectError> {
        Ok(TypeShape::unqualified(
            self.name,
            std::iter::repeat_n("", self.count),
        ))
    }
}
