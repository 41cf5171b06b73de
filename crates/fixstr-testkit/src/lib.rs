//! # fixstr Testkit
//!
//! Testing utilities for fixstr.
//!
//! ## Overview
//!
//! This crate provides:
//!
//! - **Reference vectors**: Known comparisons and overflow outcomes
//! - **Generators**: Proptest strategies and a `Vec<u8>` reference model
//! - **Fixtures**: Common capacities and tracing setup
//!
//! ## Reference Vectors
//!
//! ```rust
//! use fixstr_testkit::vectors::verify_all_vectors;
//!
//! for (name, passed) in verify_all_vectors() {
//!     assert!(passed, "{} failed", name);
//! }
//! ```
//!
//! ## Property Testing
//!
//! Use the generators with proptest:
//!
//! ```rust,ignore
//! use proptest::prelude::*;
//! use fixstr::FixedString;
//! use fixstr_testkit::generators::{apply_op, apply_to_model, op_script};
//!
//! proptest! {
//!     #[test]
//!     fn string_matches_model(script in op_script(32)) {
//!         let mut s = FixedString::<8>::new();
//!         let mut model = Vec::new();
//!         for op in &script {
//!             prop_assert_eq!(apply_op(&mut s, op), apply_to_model(&mut model, 8, op));
//!             prop_assert_eq!(s.as_bytes(), &model[..]);
//!         }
//!     }
//! }
//! ```
//!
//! ## Test Fixtures
//!
//! ```rust
//! use fixstr_testkit::fixtures::{digits, init_tracing, SmallString};
//!
//! init_tracing();
//! let s: SmallString = digits(5);
//! assert_eq!(s, "01");
//! ```

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, LongString, SmallString, String40};
pub use generators::{apply_op, apply_to_model, Op};
pub use vectors::{compare_vectors, overflow_vectors, verify_all_vectors, CompareVector, OverflowVector};
