//! Formatting and `fmt::Write` support.

use std::fmt;

use crate::string::FixedString;

impl<const N: usize> fmt::Debug for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "FixedString<{}>(\"{}\")", N, self.as_bytes().escape_ascii())
    }
}

/// UTF-8 content is written as is; anything else is escaped byte by byte.
impl<const N: usize> fmt::Display for FixedString<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.as_str() {
            Ok(s) => f.pad(s),
            Err(_) => write!(f, "{}", self.as_bytes().escape_ascii()),
        }
    }
}

/// Each `write_str` call is all or nothing, like `append`.
///
/// A `write!` made of several pieces can still stop part way: the pieces
/// written before the one that did not fit stay in the string.
impl<const N: usize> fmt::Write for FixedString<N> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        self.append_str(s).map_err(|_| fmt::Error)
    }
}
