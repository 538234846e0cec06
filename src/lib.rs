//! # Introduction
//!
//! passby demonstrates what a callee can and cannot do to its caller's
//! variables.  Each demonstration runs twice over, so to speak: once through
//! plain Rust signatures whose types already encode the semantics, and once
//! through a miniature stack-frame model that makes the mechanics visible.
//!
//! ## Demonstration pipeline
//!
//! ```text
//! Scenario → FrameStack (frames, addresses, slots) → Trace
//! ```
//!
//! 1. [`swap`] — integer exchange: [`swap::swap_in_place`] mutates the caller
//!    through `&mut` references; [`swap::swap_by_value`] receives copies and
//!    cannot.
//! 2. [`record`] — aggregate copy semantics: [`record::Person`] is `Copy`,
//!    and [`record::rename_copy`] shows that mutating a by-value record only
//!    touches the callee's private copy.
//! 3. [`text`] — [`text::FixedStr`], a bounded text buffer with checked
//!    construction in place of the unchecked fixed-size character arrays the
//!    demos model.
//! 4. [`frame`] — the memory model: tagged [`frame::Value`] variants stored in
//!    [`frame::Frame`]s with virtual addresses, so pointer parameters and
//!    by-value copies occupy visibly distinct slots.
//! 5. [`scenario`] — wires each demonstration through a [`frame::FrameStack`]
//!    and records a [`trace::Trace`] of what caller and callee each observe.
//!
//! The two binaries (`swap_demo`, `update_struct_demo`) replay the recorded
//! traces on stdout; the same traces are asserted verbatim in the test suite.

pub mod errors;
pub mod frame;
pub mod record;
pub mod scenario;
pub mod swap;
pub mod text;
pub mod trace;
