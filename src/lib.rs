#![no_std]

//! `UStack`: a growable LIFO stack with load-factor resizing.
//!
//! `UStack<T>` keeps its elements in one contiguous, exclusively owned buffer
//! and tracks a logical capacity next to it. The capacity doubles when a push
//! finds the stack full, and halves when a pop leaves a stack whose capacity
//! is above the shrink threshold less than half occupied. It never drops below
//! the configured minimum.
//!
//! This crate is `no_std` compatible and needs only `alloc`.
//!
//! # Checked and unchecked operations
//!
//! Every stack operation comes in two flavours:
//!
//! - **Checked** (`push`, `pop`, `peek`, `discard_top`): validate the
//!   precondition, report failures as [`UStackError`] and manage resizing.
//! - **Unchecked** (`push_unchecked`, `pop_unchecked`, `peek_unchecked`):
//!   `unsafe fn`s for hot loops. They never resize and never check; the
//!   caller makes room up front with [`UStack::reserve`].
//!
//! ```
//! # use ustack::{UStack, UStackError};
//! let mut stack = UStack::<u32>::new(4).unwrap();
//! assert_eq!(stack.capacity(), 32); // raised to the minimum capacity
//!
//! for i in 0..=32 {
//!     stack.push(i).unwrap();
//! }
//! assert_eq!(stack.capacity(), 64);
//!
//! assert_eq!(stack.pop(), Ok(32));
//! assert_eq!(stack.peek(), Ok(&31));
//! assert_eq!(stack.len(), 32);
//!
//! stack.clear();
//! assert_eq!(stack.pop(), Err(UStackError::EmptyStack));
//! ```
//!
//! ```
//! # use ustack::UStack;
//! let mut stack = UStack::<u64>::new(0).unwrap();
//! stack.reserve(1000).unwrap();
//!
//! for i in 0..1000 {
//!     // SAFETY: room for 1000 elements was reserved above
//!     unsafe { stack.push_unchecked(i) };
//! }
//! // SAFETY: the stack holds 1000 elements
//! assert_eq!(unsafe { stack.pop_unchecked() }, 999);
//! ```
//!
//! # Configuration
//!
//! The minimum capacity, the shrink threshold and the dump window live in a
//! [`StackConfig`] owned by each stack. Setters return the previous value and
//! reject zero.
//!
//! ```
//! # use ustack::{StackConfig, UStack};
//! let mut config = StackConfig::default();
//! assert_eq!(config.set_min_capacity(8), Ok(32));
//! assert!(config.set_dump_window(0).is_err());
//!
//! let stack = UStack::<i16>::with_config(0, config).unwrap();
//! assert_eq!(stack.capacity(), 8);
//! ```
//!
//! # Dumping
//!
//! Stacks of [`RawBytes`] elements can be dumped to any [`core::fmt::Write`]
//! sink, showing the raw bytes of the most recent elements:
//!
//! ```
//! # use ustack::{dump_stack, UStack};
//! let mut numbers = UStack::<u8>::new(0).unwrap();
//! for n in [10, 20, 30] {
//!     numbers.push(n).unwrap();
//! }
//!
//! let mut out = String::new();
//! dump_stack!(&mut out, numbers).unwrap();
//! assert_eq!(
//!     out,
//!     "ustack <numbers>:\nsize_elem = 1, top = 3, capacity = 32\n{|a|, |14|, |1e|, END}\n"
//! );
//! ```

extern crate alloc;

mod config;
mod dump;
mod error;
mod stack;

pub use config::StackConfig;
pub use dump::{Dump, RawBytes};
pub use error::UStackError;
pub use stack::UStack;

/// Dumps a stack labelled with the stack expression itself.
///
/// `dump_stack!(sink, stack)` is `stack.write_dump(sink, "stack")`.
#[macro_export]
macro_rules! dump_stack {
    ($sink:expr, $stack:expr) => {
        $stack.write_dump($sink, stringify!($stack))
    };
}
