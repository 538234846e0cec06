//! Integer exchange, two ways
//!
//! [`swap_in_place`] is the working version: it receives the caller's
//! storage through `&mut` references and exchanges it.  [`swap_by_value`]
//! is the deliberate negative example: it receives copies, exchanges those,
//! and the caller's variables never move.  The by-value variant returns the
//! exchanged copies so callers (and tests) can see what the callee saw
//! without that observation leaking back into caller state.

/// Two independent integers with no relationship invariant
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntPair {
    pub a: i32,
    pub b: i32,
}

impl IntPair {
    pub fn new(a: i32, b: i32) -> Self {
        IntPair { a, b }
    }
}

/// Exchange two integers through the caller's storage
pub fn swap_in_place(a: &mut i32, b: &mut i32) {
    std::mem::swap(a, b);
}

/// Exchange local copies of two integers
///
/// The parameters are copies; swapping them is invisible to the caller.
/// Returns the callee's view after the exchange.
pub fn swap_by_value(a: i32, b: i32) -> (i32, i32) {
    let t = a;
    let a = b;
    let b = t;
    (a, b)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_swap_in_place_exchanges_caller_storage() {
        let mut a = 21;
        let mut b = 17;
        swap_in_place(&mut a, &mut b);
        assert_eq!((a, b), (17, 21));
    }

    #[test]
    fn test_swap_in_place_extremes() {
        let mut a = i32::MIN;
        let mut b = i32::MAX;
        swap_in_place(&mut a, &mut b);
        assert_eq!((a, b), (i32::MAX, i32::MIN));
    }

    #[test]
    fn test_swap_by_value_caller_unchanged() {
        let a = 21;
        let b = 17;
        let seen = swap_by_value(a, b);
        assert_eq!(seen, (17, 21));
        assert_eq!((a, b), (21, 17));
    }
}
