//! Reflected type shapes.

/// Name and ordered field list of an inspected type.
///
/// A shape is the only thing the emitter needs from a value. It can come from
/// [`crate::Reflect`], from [`crate::shape_of`], or be spelled out by hand
/// when neither reflection route is available.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeShape {
    type_name: String,
    fields: Vec<String>,
    qualified: bool,
}

impl TypeShape {
    /// Builds a shape from a (possibly qualified) type name and field names in
    /// declaration order.
    ///
    /// # Examples
    ///
    /// ```
    /// use equatable_gen::TypeShape;
    ///
    /// let shape = TypeShape::new("geometry::Point", ["x", "y"]);
    /// assert_eq!(shape.fields(), ["x", "y"]);
    /// ```
    #[must_use]
    pub fn new<N, I, F>(type_name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            type_name: type_name.into(),
            fields: fields.into_iter().map(Into::into).collect(),
            qualified: true,
        }
    }

    /// Builds a shape whose type name carries no module qualifier.
    ///
    /// The name is used verbatim in generated code, so dotted nested names
    /// such as `Outer.Person` survive intact.
    ///
    /// # Examples
    ///
    /// ```
    /// use equatable_gen::TypeShape;
    ///
    /// let shape = TypeShape::unqualified("Outer.Person", ["name"]);
    /// assert_eq!(shape.simple_name(), "Outer.Person");
    /// ```
    #[must_use]
    pub fn unqualified<N, I, F>(type_name: N, fields: I) -> Self
    where
        N: Into<String>,
        I: IntoIterator<Item = F>,
        F: Into<String>,
    {
        Self {
            qualified: false,
            ..Self::new(type_name, fields)
        }
    }

    /// Type name as reflected, before any qualifier stripping.
    #[must_use]
    pub fn type_name(&self) -> &str {
        &self.type_name
    }

    /// Field names in declaration order. Unnamed fields are empty strings.
    #[must_use]
    pub fn fields(&self) -> &[String] {
        &self.fields
    }

    /// The unqualified type name used in generated code.
    #[must_use]
    pub fn simple_name(&self) -> String {
        if self.qualified {
            crate::simple_type_name(&self.type_name)
        } else {
            self.type_name.clone()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::TypeShape;
    use rstest::rstest;

    #[rstest]
    #[case::dotted("Outer.Person", "Person")]
    #[case::rust_path("app::Outer.Person", "Outer.Person")]
    fn qualified_names_lose_one_segment(#[case] name: &str, #[case] expected: &str) {
        assert_eq!(TypeShape::new(name, ["id"]).simple_name(), expected);
    }

    #[rstest]
    #[case::bare("Person")]
    #[case::dotted("Outer.Person")]
    fn unqualified_names_are_verbatim(#[case] name: &str) {
        assert_eq!(TypeShape::unqualified(name, ["id"]).simple_name(), name);
    }
}
