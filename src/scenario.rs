//! The three demonstrations
//!
//! Each scenario runs against a fresh [`FrameStack`], records a [`Trace`] of
//! what the caller and callee each observe, and returns the caller's view
//! after the call.  The recorded lines keep the shape of the classic
//! `printf` output these demos are modeled on, with the frame model's
//! addresses added where they carry the lesson.

use crate::errors::DemoError;
use crate::frame::{FrameStack, Value};
use crate::record::{rename_copy, Person};
use crate::swap::{swap_by_value, IntPair};
use crate::trace::Trace;

/// Swap two integers through pointer parameters
///
/// The callee frame holds `pa` and `pb`, pointers into the caller's frame;
/// writing through them mutates the caller's slots.  The returned pair is
/// what the caller observes afterwards: the values exchanged.
pub fn swap_by_reference_scene(pair: IntPair) -> Result<(IntPair, Trace), DemoError> {
    let mut stack = FrameStack::new();
    let mut trace = Trace::new();

    stack.push_frame("main");
    let addr_a = stack.declare("a", Value::Int(pair.a))?;
    let addr_b = stack.declare("b", Value::Int(pair.b))?;
    trace.line(format!(
        "main: a = {} @ 0x{:x}, b = {} @ 0x{:x}",
        pair.a, addr_a, pair.b, addr_b
    ));

    // The call passes &a and &b: pointer slots in the callee frame
    stack.push_frame("swap");
    stack.declare("pa", Value::Pointer(addr_a))?;
    stack.declare("pb", Value::Pointer(addr_b))?;
    trace.line(format!("swap(pa = 0x{:x}, pb = 0x{:x})", addr_a, addr_b));

    // int t = *pa; *pa = *pb; *pb = t;
    let pa = stack.read("pa")?.expect_pointer()?;
    let pb = stack.read("pb")?.expect_pointer()?;
    let t = stack.read_at(pa)?;
    let vb = stack.read_at(pb)?;
    stack.write_at(pa, vb)?;
    stack.write_at(pb, t)?;
    trace.line(format!(
        "swap: a={}, b={}",
        stack.read_at(pa)?.expect_int()?,
        stack.read_at(pb)?.expect_int()?
    ));
    stack.pop_frame();

    let a = stack.read("a")?.expect_int()?;
    let b = stack.read("b")?.expect_int()?;
    trace.line(format!("main: a = {}, b = {}", a, b));
    Ok((IntPair::new(a, b), trace))
}

/// Swap two integers passed by value — the negative example
///
/// The callee frame holds its own `a` and `b` slots at fresh addresses.
/// Exchanging them is visible only inside the callee; the caller's pair
/// comes back unchanged.
pub fn swap_by_value_scene(pair: IntPair) -> Result<(IntPair, Trace), DemoError> {
    let mut stack = FrameStack::new();
    let mut trace = Trace::new();

    stack.push_frame("main");
    let addr_a = stack.declare("a", Value::Int(pair.a))?;
    let addr_b = stack.declare("b", Value::Int(pair.b))?;
    trace.line(format!(
        "main: a = {} @ 0x{:x}, b = {} @ 0x{:x}",
        pair.a, addr_a, pair.b, addr_b
    ));

    // The call copies the values: distinct slots at distinct addresses
    stack.push_frame("swap_by_value");
    let copy_a = stack.declare("a", Value::Int(pair.a))?;
    let copy_b = stack.declare("b", Value::Int(pair.b))?;
    trace.line(format!(
        "swap_by_value(a = {} @ 0x{:x}, b = {} @ 0x{:x})",
        pair.a, copy_a, pair.b, copy_b
    ));

    let (swapped_a, swapped_b) = swap_by_value(pair.a, pair.b);
    stack.write("a", Value::Int(swapped_a))?;
    stack.write("b", Value::Int(swapped_b))?;
    trace.line(format!("swap_by_value: a={}, b={}", swapped_a, swapped_b));
    stack.pop_frame();

    let a = stack.read("a")?.expect_int()?;
    let b = stack.read("b")?.expect_int()?;
    trace.line(format!("main: a = {}, b = {}", a, b));
    Ok((IntPair::new(a, b), trace))
}

/// Rename a record passed by value
///
/// The callee frame holds a copy of the whole record; the rename lands on
/// the copy and the caller's record keeps its original names.
pub fn update_struct_scene(
    person: Person,
    first_name: &str,
    last_name: &str,
) -> Result<(Person, Trace), DemoError> {
    let mut stack = FrameStack::new();
    let mut trace = Trace::new();

    stack.push_frame("main");
    let addr = stack.declare("person", Value::Record(person))?;
    trace.line(format!("main: person @ 0x{:x} = {}", addr, person));

    // The whole record is copied into the callee's slot
    stack.push_frame("update_struct");
    let copy_addr = stack.declare("person", Value::Record(person))?;
    trace.line(format!(
        "update_struct(person @ 0x{:x}, first = \"{}\", last = \"{}\")",
        copy_addr, first_name, last_name
    ));

    let copy = stack.read("person")?.expect_record()?;
    let renamed = rename_copy(copy, first_name, last_name)?;
    stack.write("person", Value::Record(renamed))?;
    trace.line(renamed.greeting());
    stack.pop_frame();

    let original = stack.read("person")?.expect_record()?;
    trace.line(original.greeting());
    Ok((original, trace))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reference_scene_exchanges_pair() {
        let (pair, _) = swap_by_reference_scene(IntPair::new(21, 17)).unwrap();
        assert_eq!(pair, IntPair::new(17, 21));
    }

    #[test]
    fn test_value_scene_preserves_pair() {
        let (pair, _) = swap_by_value_scene(IntPair::new(21, 17)).unwrap();
        assert_eq!(pair, IntPair::new(21, 17));
    }

    #[test]
    fn test_update_scene_preserves_record() {
        let person = Person::new(42, "John", "Doe").unwrap();
        let (after, _) = update_struct_scene(person, "Timmy", "Blunt").unwrap();
        assert_eq!(after, person);
    }

    #[test]
    fn test_update_scene_rejects_overlong_name() {
        let person = Person::new(42, "John", "Doe").unwrap();
        let err = update_struct_scene(person, "Timmy", "a-surname-that-cannot-fit").unwrap_err();
        assert!(matches!(err, DemoError::CapacityExceeded { .. }));
    }
}
