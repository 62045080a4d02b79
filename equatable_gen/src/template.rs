//! Conformance template assembly and rendering.
//!
//! The template is six groups of indented lines in a fixed order: the
//! extension header, the `==` signature, one guard per field, the trailing
//! `return true`, and the two closing braces.

use crate::{AccessLevel, EmitOptions, TypeShape};

/// One line of generated source and its indentation level.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateLine {
    /// Number of indent units placed before `text`.
    pub indent: usize,
    /// Source text without indentation.
    pub text: String,
}

impl TemplateLine {
    fn new(indent: usize, text: impl Into<String>) -> Self {
        Self {
            indent,
            text: text.into(),
        }
    }

    /// Renders the line with `indent` copies of `unit` in front.
    #[must_use]
    pub fn render(&self, unit: &str) -> String {
        format!("{}{}", unit.repeat(self.indent), self.text)
    }
}

/// An ordered run of template lines.
pub type TemplateGroup = Vec<TemplateLine>;

/// Assembles the six template groups for `shape`.
#[must_use]
pub fn template_groups(shape: &TypeShape, access: AccessLevel) -> Vec<TemplateGroup> {
    let name = shape.simple_name();
    let signature = match access.keyword() {
        Some(keyword) => format!("{keyword} static func ==(lhs: {name}, rhs: {name}) -> Bool {{"),
        None => format!("static func ==(lhs: {name}, rhs: {name}) -> Bool {{"),
    };
    let guards = shape
        .fields()
        .iter()
        .map(|field| {
            TemplateLine::new(
                2,
                format!("guard lhs.{field} == rhs.{field} else {{ return false }}"),
            )
        })
        .collect();

    vec![
        vec![TemplateLine::new(0, format!("extension {name}: Equatable {{"))],
        vec![TemplateLine::new(1, signature)],
        guards,
        vec![TemplateLine::new(2, "return true")],
        vec![TemplateLine::new(1, "}")],
        vec![TemplateLine::new(0, "}")],
    ]
}

/// Renders the conformance for `shape` as newline-joined source text.
///
/// The result carries no trailing newline; [`crate::emit_to`] appends one.
///
/// # Examples
///
/// ```
/// use equatable_gen::{EmitOptions, TypeShape, render};
///
/// let shape = TypeShape::new("Empty", std::iter::empty::<&str>());
/// let source = render(&shape, &EmitOptions::default());
/// assert_eq!(
///     source,
///     "extension Empty: Equatable {\n    public static func ==(lhs: Empty, rhs: Empty) -> Bool {\n        return true\n    }\n}"
/// );
/// ```
#[must_use]
pub fn render(shape: &TypeShape, options: &EmitOptions) -> String {
    let unit = options.indent_unit();
    template_groups(shape, options.access)
        .iter()
        .flatten()
        .map(|line| line.render(&unit))
        .collect::<Vec<_>>()
        .join("\n")
}
