//! # fixstr
//!
//! Fixed-capacity, null-terminated byte strings that live entirely inline.
//!
//! A [`FixedString<N>`] holds at most `N` bytes plus a zero terminator in a
//! buffer of exactly `N + 1` bytes. It never allocates and never grows.
//! Overflow is reported through [`FixedStringError`] instead of panicking.
//!
//! ## Key Types
//!
//! - [`FixedString`] - The string itself, generic over its capacity
//! - [`FixedStringError`] - `BadAlloc` on overflow, `Empty` on removal from nothing
//! - [`OverflowPolicy`] - Truncate or reject oversized input on construction
//!
//! ## Overflow
//!
//! - `set` stores the prefix that fits and returns `BadAlloc`
//! - `append` stores nothing and returns `BadAlloc`
//! - `From` conversions truncate silently; `try_from_bytes` and `parse` do not
//!
//! ```rust
//! use fixstr::{FixedString, FixedStringError};
//!
//! let mut s = FixedString::<2>::new();
//!
//! assert!(matches!(s.set(b"123"), Err(FixedStringError::BadAlloc { .. })));
//! assert_eq!(s, "12");
//!
//! s.clear();
//! assert!(s.append(b"123").is_err());
//! assert!(s.is_empty());
//! ```
//!
//! ## Comparison
//!
//! Strings of any capacity compare against each other, byte slices and
//! arrays, `str`, and `CStr`, in either operand order. Ordering is
//! lexicographic over the content bytes.

mod cmp;
mod fmt;
mod serialize;

pub mod error;
pub mod policy;
pub mod string;

pub use error::{FixedStringError, Result};
pub use policy::OverflowPolicy;
pub use string::FixedString;
