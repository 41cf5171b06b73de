//! Proptest generators for property-based testing.

use proptest::prelude::*;

use fixstr::{FixedString, FixedStringError};

/// Generate arbitrary bytes of at most `max_len`.
pub fn bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(any::<u8>(), 0..=max_len)
}

/// Generate bytes from a small alphabet, so that equal and prefix-related
/// pairs come up often.
pub fn narrow_bytes(max_len: usize) -> impl Strategy<Value = Vec<u8>> {
    prop::collection::vec(prop::sample::select(vec![b'a', b'b', 0x00, 0xff]), 0..=max_len)
}

/// Generate printable ASCII text.
pub fn ascii_text() -> impl Strategy<Value = String> {
    "[ -~]{0,48}".prop_map(String::from)
}

/// Generate a string filled to a random length within its capacity.
pub fn fixed_string<const N: usize>() -> impl Strategy<Value = FixedString<N>> {
    bytes(N).prop_map(|b| FixedString::from_bytes_truncated(&b))
}

/// A single mutation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Op {
    Set(Vec<u8>),
    Append(Vec<u8>),
    Push(u8),
    PopBack,
    Truncate(usize),
    Clear,
}

impl Arbitrary for Op {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        prop_oneof![
            bytes(24).prop_map(Op::Set),
            bytes(12).prop_map(Op::Append),
            any::<u8>().prop_map(Op::Push),
            Just(Op::PopBack),
            (0usize..24).prop_map(Op::Truncate),
            Just(Op::Clear),
        ]
        .boxed()
    }
}

/// Generate a sequence of mutations.
pub fn op_script(max_ops: usize) -> impl Strategy<Value = Vec<Op>> {
    prop::collection::vec(any::<Op>(), 0..=max_ops)
}

/// Apply `op` to a string and return its status.
pub fn apply_op<const N: usize>(s: &mut FixedString<N>, op: &Op) -> Result<(), FixedStringError> {
    match op {
        Op::Set(b) => s.set(b),
        Op::Append(b) => s.append(b),
        Op::Push(byte) => s.push(*byte),
        Op::PopBack => s.pop_back().map(|_| ()),
        Op::Truncate(len) => {
            s.truncate(*len);
            Ok(())
        }
        Op::Clear => {
            s.clear();
            Ok(())
        }
    }
}

/// Apply `op` to a plain `Vec<u8>` model with the same capacity rules.
///
/// This is the reference behavior the real string is checked against.
pub fn apply_to_model(
    model: &mut Vec<u8>,
    capacity: usize,
    op: &Op,
) -> Result<(), FixedStringError> {
    let bad_alloc = |requested| FixedStringError::BadAlloc {
        requested,
        capacity,
    };
    match op {
        Op::Set(b) => {
            model.clear();
            model.extend_from_slice(&b[..b.len().min(capacity)]);
            if b.len() > capacity {
                return Err(bad_alloc(b.len()));
            }
            Ok(())
        }
        Op::Append(b) => {
            let end = model.len() + b.len();
            if end > capacity {
                return Err(bad_alloc(end));
            }
            model.extend_from_slice(b);
            Ok(())
        }
        Op::Push(byte) => apply_to_model(model, capacity, &Op::Append(vec![*byte])),
        Op::PopBack => model.pop().map(|_| ()).ok_or(FixedStringError::Empty),
        Op::Truncate(len) => {
            model.truncate(*len);
            Ok(())
        }
        Op::Clear => {
            model.clear();
            Ok(())
        }
    }
}
