//! Qualifier stripping for reflected type names.
//!
//! Rust type paths separate segments with `::`; dotted names (as produced by
//! other reflection sources or typed by hand) use `.`. Exactly one leading
//! qualifier segment is dropped and the remainder is joined with `.` so nested
//! types read the way Swift spells them.

const RUST_SEPARATOR: &str = "::";
const DOTTED_SEPARATOR: &str = ".";

/// Strips the leading module qualifier from `qualified`.
///
/// Names with a single segment are returned unchanged.
///
/// # Examples
///
/// ```
/// use equatable_gen::simple_type_name;
///
/// assert_eq!(simple_type_name("Module.Outer.Person"), "Outer.Person");
/// assert_eq!(simple_type_name("demo::Person"), "Person");
/// assert_eq!(simple_type_name("Person"), "Person");
/// ```
#[must_use]
pub fn simple_type_name(qualified: &str) -> String {
    let separator = if qualified.contains(RUST_SEPARATOR) {
        RUST_SEPARATOR
    } else {
        DOTTED_SEPARATOR
    };
    let segments: Vec<&str> = qualified.split(separator).collect();
    match segments.split_first() {
        Some((_, rest)) if !rest.is_empty() => rest.join(DOTTED_SEPARATOR),
        _ => qualified.to_owned(),
    }
}
