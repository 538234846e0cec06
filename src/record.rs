//! Aggregate record with copy semantics
//!
//! [`Person`] is the demonstration aggregate: one integer and two bounded
//! name buffers.  It derives `Copy`, so passing it to a function hands the
//! callee an independent bitwise copy — exactly the semantics of passing a
//! C struct by value.  [`rename_copy`] exercises that: it mutates the copy
//! it received and returns it, leaving the caller's original untouched.

use crate::errors::DemoError;
use crate::text::FixedStr;
use std::fmt;

/// Buffer size for each name field, terminator included
pub const NAME_BUF: usize = 20;

/// A person record: one integer field and two fixed-capacity name fields
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Person {
    pub age: i32,
    pub first_name: FixedStr<NAME_BUF>,
    pub last_name: FixedStr<NAME_BUF>,
}

impl Person {
    /// Build a record, checking both names against the buffer capacity
    pub fn new(age: i32, first_name: &str, last_name: &str) -> Result<Self, DemoError> {
        Ok(Person {
            age,
            first_name: FixedStr::new(first_name)?,
            last_name: FixedStr::new(last_name)?,
        })
    }

    /// Overwrite both name fields in place
    pub fn rename(&mut self, first_name: &str, last_name: &str) -> Result<(), DemoError> {
        self.first_name = FixedStr::new(first_name)?;
        self.last_name = FixedStr::new(last_name)?;
        Ok(())
    }

    /// The greeting the demos print for this record
    pub fn greeting(&self) -> String {
        format!("Hello {} {}", self.first_name, self.last_name)
    }
}

impl fmt::Display for Person {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{{ age: {}, first_name: \"{}\", last_name: \"{}\" }}",
            self.age, self.first_name, self.last_name
        )
    }
}

/// Rename a record received by value
///
/// The parameter is an independent copy of the caller's record; the rename
/// is applied to that copy and the copy is returned.  Whatever record the
/// caller passed in is unchanged after the call.
pub fn rename_copy(
    mut person: Person,
    first_name: &str,
    last_name: &str,
) -> Result<Person, DemoError> {
    person.rename(first_name, last_name)?;
    Ok(person)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rename_copy_leaves_original_untouched() {
        let person = Person::new(42, "John", "Doe").unwrap();
        let renamed = rename_copy(person, "Timmy", "Blunt").unwrap();

        assert_eq!(person.first_name, "John");
        assert_eq!(person.last_name, "Doe");
        assert_eq!(renamed.first_name, "Timmy");
        assert_eq!(renamed.last_name, "Blunt");
        assert_eq!(renamed.age, 42);
    }

    #[test]
    fn test_rename_in_place_mutates() {
        let mut person = Person::new(42, "John", "Doe").unwrap();
        person.rename("Timmy", "Blunt").unwrap();
        assert_eq!(person.greeting(), "Hello Timmy Blunt");
    }

    #[test]
    fn test_overlong_name_is_rejected() {
        let err = Person::new(42, "John", "an-implausibly-long-surname").unwrap_err();
        assert_eq!(
            err,
            DemoError::CapacityExceeded {
                len: 27,
                capacity: 19
            }
        );
    }

    #[test]
    fn test_display_format() {
        let person = Person::new(42, "John", "Doe").unwrap();
        assert_eq!(
            format!("{}", person),
            "{ age: 42, first_name: \"John\", last_name: \"Doe\" }"
        );
    }
}
