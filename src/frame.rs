//! Miniature stack-frame model
//!
//! This module provides the memory model the scenarios execute against:
//! - [`Value`]: tagged runtime value (Int, Pointer, Record)
//! - [`Slot`]: a declared variable's value plus its virtual address
//! - [`Frame`]: a single call's locals, in declaration order
//! - [`FrameStack`]: the call stack, with address-indirect reads and writes
//!
//! # Addresses
//!
//! Every declared variable gets a virtual address, assigned monotonically
//! from a fixed base.  Sizes are fixed and platform-independent: `int` is
//! 4 bytes, a pointer is 8, a record is the sum of its field sizes with no
//! padding.  Indirect access goes through an address map
//! (`Address -> (frame index, name)`); popping a frame removes its entries,
//! so a pointer into a dead frame reports [`DemoError::InvalidAddress`]
//! instead of dangling.

use crate::errors::DemoError;
use crate::record::{Person, NAME_BUF};
use rustc_hash::FxHashMap;
use std::fmt;

/// Virtual address type (64-bit)
pub type Address = u64;

/// Base address for the first declared variable
const STACK_BASE: Address = 0x1000;

/// Runtime values in the frame model
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Value {
    Int(i32),
    Pointer(Address),
    Record(Person),
}

impl Value {
    /// Get the integer value, returns None if not an Int
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the pointer target, returns None if not a Pointer
    pub fn as_pointer(&self) -> Option<Address> {
        match self {
            Value::Pointer(addr) => Some(*addr),
            _ => None,
        }
    }

    /// Get the record value, returns None if not a Record
    pub fn as_record(&self) -> Option<Person> {
        match self {
            Value::Record(person) => Some(*person),
            _ => None,
        }
    }

    /// Expect an integer value
    pub fn expect_int(&self) -> Result<i32, DemoError> {
        self.as_int().ok_or(DemoError::TypeMismatch {
            expected: "Int",
            got: self.variant_name(),
        })
    }

    /// Expect a pointer value
    pub fn expect_pointer(&self) -> Result<Address, DemoError> {
        self.as_pointer().ok_or(DemoError::TypeMismatch {
            expected: "Pointer",
            got: self.variant_name(),
        })
    }

    /// Expect a record value
    pub fn expect_record(&self) -> Result<Person, DemoError> {
        self.as_record().ok_or(DemoError::TypeMismatch {
            expected: "Record",
            got: self.variant_name(),
        })
    }

    /// Size of this value in bytes under the fixed layout
    pub fn size(&self) -> u64 {
        match self {
            Value::Int(_) => 4,
            Value::Pointer(_) => 8,
            // age + two name buffers, no padding
            Value::Record(_) => 4 + 2 * NAME_BUF as u64,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Value::Int(_) => "Int",
            Value::Pointer(_) => "Pointer",
            Value::Record(_) => "Record",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(n) => write!(f, "{}", n),
            Value::Pointer(addr) => write!(f, "0x{:x}", addr),
            Value::Record(person) => write!(f, "{}", person),
        }
    }
}

/// A declared variable: its current value and its virtual address
#[derive(Debug, Clone, Copy)]
pub struct Slot {
    pub value: Value,
    pub address: Address,
}

/// Stack frame for a single call
#[derive(Debug, Clone)]
pub struct Frame {
    pub function: String,
    locals: FxHashMap<String, Slot>,
    insertion_order: Vec<String>,
}

impl Frame {
    fn new(function: &str) -> Self {
        Frame {
            function: function.to_string(),
            locals: FxHashMap::default(),
            insertion_order: Vec::new(),
        }
    }

    /// Get a variable's slot
    pub fn get(&self, name: &str) -> Option<&Slot> {
        self.locals.get(name)
    }

    /// Variable names in declaration order
    pub fn names(&self) -> &[String] {
        &self.insertion_order
    }
}

/// The call stack
#[derive(Debug, Clone)]
pub struct FrameStack {
    frames: Vec<Frame>,
    // Address -> (frame index, variable name), for indirect access
    address_map: FxHashMap<Address, (usize, String)>,
    next_address: Address,
}

impl FrameStack {
    pub fn new() -> Self {
        FrameStack {
            frames: Vec::new(),
            address_map: FxHashMap::default(),
            next_address: STACK_BASE,
        }
    }

    /// Push a frame for a new call
    pub fn push_frame(&mut self, function: &str) {
        self.frames.push(Frame::new(function));
    }

    /// Pop the current frame, invalidating the addresses of its locals
    pub fn pop_frame(&mut self) -> Option<Frame> {
        let frame = self.frames.pop()?;
        let index = self.frames.len();
        self.address_map.retain(|_, (fi, _)| *fi != index);
        Some(frame)
    }

    /// Declare a variable in the current frame, assigning it an address
    pub fn declare(&mut self, name: &str, value: Value) -> Result<Address, DemoError> {
        let index = self.frames.len().checked_sub(1).ok_or(DemoError::NoFrame)?;
        let address = self.next_address;
        self.next_address += value.size();

        let frame = &mut self.frames[index];
        if !frame.locals.contains_key(name) {
            frame.insertion_order.push(name.to_string());
        }
        frame.locals.insert(name.to_string(), Slot { value, address });
        self.address_map.insert(address, (index, name.to_string()));
        Ok(address)
    }

    /// Read a variable from the current frame
    pub fn read(&self, name: &str) -> Result<Value, DemoError> {
        self.current_frame()?
            .get(name)
            .map(|slot| slot.value)
            .ok_or_else(|| DemoError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Overwrite a variable in the current frame
    pub fn write(&mut self, name: &str, value: Value) -> Result<(), DemoError> {
        let index = self.frames.len().checked_sub(1).ok_or(DemoError::NoFrame)?;
        let slot = self.frames[index].locals.get_mut(name).ok_or_else(|| {
            DemoError::UndefinedVariable {
                name: name.to_string(),
            }
        })?;
        slot.value = value;
        Ok(())
    }

    /// Address of a variable in the current frame
    pub fn address_of(&self, name: &str) -> Result<Address, DemoError> {
        self.current_frame()?
            .get(name)
            .map(|slot| slot.address)
            .ok_or_else(|| DemoError::UndefinedVariable {
                name: name.to_string(),
            })
    }

    /// Read through an address, whichever frame owns it
    pub fn read_at(&self, address: Address) -> Result<Value, DemoError> {
        let (index, name) = self
            .address_map
            .get(&address)
            .ok_or(DemoError::InvalidAddress { address })?;
        self.frames[*index]
            .get(name)
            .map(|slot| slot.value)
            .ok_or(DemoError::InvalidAddress { address })
    }

    /// Write through an address, whichever frame owns it
    pub fn write_at(&mut self, address: Address, value: Value) -> Result<(), DemoError> {
        let (index, name) = self
            .address_map
            .get(&address)
            .cloned()
            .ok_or(DemoError::InvalidAddress { address })?;
        let slot = self.frames[index]
            .locals
            .get_mut(&name)
            .ok_or(DemoError::InvalidAddress { address })?;
        slot.value = value;
        Ok(())
    }

    /// Get the current (top) frame
    pub fn current_frame(&self) -> Result<&Frame, DemoError> {
        self.frames.last().ok_or(DemoError::NoFrame)
    }

    /// Depth of the call stack
    pub fn depth(&self) -> usize {
        self.frames.len()
    }
}

impl Default for FrameStack {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_declare_read_write() {
        let mut stack = FrameStack::new();
        stack.push_frame("main");
        stack.declare("a", Value::Int(21)).unwrap();
        assert_eq!(stack.read("a").unwrap(), Value::Int(21));

        stack.write("a", Value::Int(17)).unwrap();
        assert_eq!(stack.read("a").unwrap(), Value::Int(17));
    }

    #[test]
    fn test_addresses_advance_by_size() {
        let mut stack = FrameStack::new();
        stack.push_frame("main");
        let a = stack.declare("a", Value::Int(21)).unwrap();
        let b = stack.declare("b", Value::Int(17)).unwrap();
        assert_eq!(a, STACK_BASE);
        assert_eq!(b, STACK_BASE + 4);
    }

    #[test]
    fn test_indirect_write_reaches_declaring_frame() {
        let mut stack = FrameStack::new();
        stack.push_frame("main");
        let addr = stack.declare("a", Value::Int(21)).unwrap();

        stack.push_frame("callee");
        stack.declare("pa", Value::Pointer(addr)).unwrap();
        let target = stack.read("pa").unwrap().expect_pointer().unwrap();
        stack.write_at(target, Value::Int(99)).unwrap();
        stack.pop_frame();

        assert_eq!(stack.read("a").unwrap(), Value::Int(99));
    }

    #[test]
    fn test_popped_frame_addresses_invalidated() {
        let mut stack = FrameStack::new();
        stack.push_frame("main");
        stack.push_frame("callee");
        let addr = stack.declare("local", Value::Int(1)).unwrap();
        stack.pop_frame();

        assert_eq!(
            stack.read_at(addr).unwrap_err(),
            DemoError::InvalidAddress { address: addr }
        );
    }

    #[test]
    fn test_errors_without_frame() {
        let mut stack = FrameStack::new();
        assert_eq!(
            stack.declare("a", Value::Int(0)).unwrap_err(),
            DemoError::NoFrame
        );
        assert_eq!(stack.read("a").unwrap_err(), DemoError::NoFrame);
    }

    #[test]
    fn test_expect_reports_variant_names() {
        let err = Value::Pointer(0x1000).expect_int().unwrap_err();
        assert_eq!(
            err,
            DemoError::TypeMismatch {
                expected: "Int",
                got: "Pointer"
            }
        );
    }

    #[test]
    fn test_names_in_declaration_order() {
        let mut stack = FrameStack::new();
        stack.push_frame("main");
        stack.declare("b", Value::Int(2)).unwrap();
        stack.declare("a", Value::Int(1)).unwrap();
        assert_eq!(stack.current_frame().unwrap().names(), ["b", "a"]);
    }
}
