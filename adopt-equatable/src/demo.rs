//! The built-in demo value printed by `adopt-equatable demo`.

use std::time::SystemTime;

use equatable_gen::Reflect;

/// A person record whose conformance the demo prints.
#[derive(Debug, Clone, Reflect)]
#[equatable(rename_all = "camelCase")]
pub struct Person {
    /// Given name.
    pub first_name: String,
    /// Family name.
    pub last_name: String,
    /// Moment of birth.
    pub birthday: SystemTime,
    /// Height in inches.
    pub inches_tall: u32,
}

/// Returns the literal example value used by the demo.
#[must_use]
pub fn person() -> Person {
    Person {
        first_name: "Clown".to_owned(),
        last_name: "Baby".to_owned(),
        birthday: SystemTime::now(),
        inches_tall: 18,
    }
}
