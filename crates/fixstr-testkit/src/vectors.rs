//! Reference vectors for comparison and overflow behavior.
//!
//! Each vector pins down one outcome that every build of the string type
//! must reproduce exactly.

use std::cmp::Ordering;

use fixstr::{FixedString, FixedStringError};

/// Capacity used by all overflow vectors.
pub const VECTOR_CAPACITY: usize = 4;

/// A comparison test vector.
#[derive(Debug, Clone)]
pub struct CompareVector {
    /// Human-readable name for the vector.
    pub name: &'static str,
    /// Left-hand content.
    pub lhs: &'static [u8],
    /// Right-hand content.
    pub rhs: &'static [u8],
    /// Expected `lhs.compare(rhs)`.
    pub expected: Ordering,
}

/// Which mutation an overflow vector exercises.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mutation {
    Set,
    Append,
}

/// An overflow test vector, run against a string of [`VECTOR_CAPACITY`].
#[derive(Debug, Clone)]
pub struct OverflowVector {
    pub name: &'static str,
    /// Content before the mutation.
    pub initial: &'static [u8],
    pub mutation: Mutation,
    pub input: &'static [u8],
    /// Expected status.
    pub expected_status: Result<(), FixedStringError>,
    /// Expected content afterwards.
    pub expected_content: &'static [u8],
}

/// Get all comparison vectors.
pub fn compare_vectors() -> Vec<CompareVector> {
    vec![
        CompareVector {
            name: "equal content",
            lhs: b"1234",
            rhs: b"1234",
            expected: Ordering::Equal,
        },
        CompareVector {
            name: "strict prefix is less",
            lhs: b"1234",
            rhs: b"12345",
            expected: Ordering::Less,
        },
        CompareVector {
            name: "longer is greater",
            lhs: b"1234",
            rhs: b"123",
            expected: Ordering::Greater,
        },
        CompareVector {
            name: "same length, last byte differs",
            lhs: b"1234",
            rhs: b"1235",
            expected: Ordering::Less,
        },
        CompareVector {
            name: "first byte decides over length",
            lhs: b"2",
            rhs: b"1234",
            expected: Ordering::Greater,
        },
        CompareVector {
            name: "empty against empty",
            lhs: b"",
            rhs: b"",
            expected: Ordering::Equal,
        },
        CompareVector {
            name: "empty is less than anything",
            lhs: b"",
            rhs: b"\x00",
            expected: Ordering::Less,
        },
        CompareVector {
            name: "bytes are unsigned",
            lhs: b"\x80",
            rhs: b"\x7f",
            expected: Ordering::Greater,
        },
        CompareVector {
            name: "interior zero byte counts",
            lhs: b"a\x00b",
            rhs: b"a\x00c",
            expected: Ordering::Less,
        },
    ]
}

/// Get all overflow vectors.
pub fn overflow_vectors() -> Vec<OverflowVector> {
    let bad_alloc = |requested| {
        Err(FixedStringError::BadAlloc {
            requested,
            capacity: VECTOR_CAPACITY,
        })
    };

    vec![
        OverflowVector {
            name: "set within capacity",
            initial: b"",
            mutation: Mutation::Set,
            input: b"12",
            expected_status: Ok(()),
            expected_content: b"12",
        },
        OverflowVector {
            name: "set exactly at capacity",
            initial: b"zz",
            mutation: Mutation::Set,
            input: b"1234",
            expected_status: Ok(()),
            expected_content: b"1234",
        },
        OverflowVector {
            name: "set over capacity keeps prefix",
            initial: b"zz",
            mutation: Mutation::Set,
            input: b"123456",
            expected_status: bad_alloc(6),
            expected_content: b"1234",
        },
        OverflowVector {
            name: "append within capacity",
            initial: b"12",
            mutation: Mutation::Append,
            input: b"34",
            expected_status: Ok(()),
            expected_content: b"1234",
        },
        OverflowVector {
            name: "append over capacity changes nothing",
            initial: b"12",
            mutation: Mutation::Append,
            input: b"345",
            expected_status: bad_alloc(5),
            expected_content: b"12",
        },
        OverflowVector {
            name: "append to full string",
            initial: b"1234",
            mutation: Mutation::Append,
            input: b"5",
            expected_status: bad_alloc(5),
            expected_content: b"1234",
        },
        OverflowVector {
            name: "append nothing to full string",
            initial: b"1234",
            mutation: Mutation::Append,
            input: b"",
            expected_status: Ok(()),
            expected_content: b"1234",
        },
    ]
}

/// Run an overflow vector and return the observed status and content.
pub fn run_overflow_vector(
    vector: &OverflowVector,
) -> (Result<(), FixedStringError>, FixedString<VECTOR_CAPACITY>) {
    let mut s = FixedString::<VECTOR_CAPACITY>::from_bytes_truncated(vector.initial);
    let status = match vector.mutation {
        Mutation::Set => s.set(vector.input),
        Mutation::Append => s.append(vector.input),
    };
    (status, s)
}

/// Verify every vector.
///
/// Returns `(name, passed)` for each one, comparison vectors first.
pub fn verify_all_vectors() -> Vec<(String, bool)> {
    let compares = compare_vectors().into_iter().map(|v| {
        let lhs = FixedString::<16>::from_bytes_truncated(v.lhs);
        let passed = lhs.compare(v.rhs) == v.expected;
        (v.name.to_string(), passed)
    });

    let overflows = overflow_vectors().into_iter().map(|v| {
        let (status, s) = run_overflow_vector(&v);
        let passed = status == v.expected_status && s == v.expected_content;
        (v.name.to_string(), passed)
    });

    compares.chain(overflows).collect()
}
