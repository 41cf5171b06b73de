//! The fixed-capacity string type.
//!
//! A [`FixedString<N>`] owns an inline block of `N + 1` bytes: up to `N`
//! bytes of content followed by a zero terminator. It never allocates.

use std::borrow::Borrow;
use std::ffi::CStr;
use std::ops::{AddAssign, Deref, DerefMut};
use std::str::{FromStr, Utf8Error};

use crate::error::{FixedStringError, Result};
use crate::policy::OverflowPolicy;

/// `N` content bytes followed by one terminator byte.
///
/// Both fields have alignment 1, so under `repr(C)` the block is exactly
/// `N + 1` contiguous bytes with no padding.
#[derive(Clone, Copy)]
#[repr(C)]
struct Storage<const N: usize> {
    bytes: [u8; N],
    /// Terminator used when the string is full. Never written; read only
    /// through `as_bytes_with_nul`.
    #[allow(dead_code)]
    tail: u8,
}

/// A byte string of at most `N` bytes, always followed by a zero byte.
///
/// Invariants:
/// - `len() <= N`
/// - the byte at offset `len()` of the buffer is `0`
///
/// Bytes past the terminator are unspecified.
///
/// Overflow never grows the buffer. `set` keeps the prefix that fits and
/// reports [`FixedStringError::BadAlloc`]; `append` refuses outright and
/// leaves the string as it was. `From` conversions truncate silently; use
/// [`FixedString::try_from_bytes`] or [`str::parse`] to be told instead.
#[derive(Clone, Copy)]
pub struct FixedString<const N: usize> {
    storage: Storage<N>,
    len: usize,
}

impl<const N: usize> FixedString<N> {
    /// Maximum number of content bytes, excluding the terminator.
    pub const CAPACITY: usize = N;

    /// Create an empty string.
    pub const fn new() -> Self {
        Self {
            storage: Storage {
                bytes: [0; N],
                tail: 0,
            },
            len: 0,
        }
    }

    /// Create a string holding a single byte.
    ///
    /// With zero capacity the result is empty.
    pub fn from_byte(byte: u8) -> Self {
        Self::from_bytes_truncated(&[byte])
    }

    /// Create a string from the first `min(bytes.len(), N)` bytes.
    pub fn from_bytes_truncated(bytes: &[u8]) -> Self {
        let mut s = Self::new();
        let copied = s.store_prefix(bytes);
        if copied < bytes.len() {
            tracing::debug!(
                capacity = N,
                requested = bytes.len(),
                "truncated oversized input on construction"
            );
        }
        s
    }

    /// Create a string, failing if `bytes` does not fit.
    pub fn try_from_bytes(bytes: &[u8]) -> Result<Self> {
        if bytes.len() > N {
            return Err(Self::bad_alloc(bytes.len()));
        }
        let mut s = Self::new();
        s.store_prefix(bytes);
        Ok(s)
    }

    /// Create a string, handling oversized input according to `policy`.
    pub fn from_bytes_with(bytes: &[u8], policy: OverflowPolicy) -> Result<Self> {
        if policy.truncates() {
            Ok(Self::from_bytes_truncated(bytes))
        } else {
            Self::try_from_bytes(bytes)
        }
    }

    /// Create a string from a null-terminated sequence, truncating.
    pub fn from_c_str(s: &CStr) -> Self {
        Self::from_bytes_truncated(s.to_bytes())
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Mutation
    // ─────────────────────────────────────────────────────────────────────────

    /// Replace the contents with `bytes`.
    ///
    /// If `bytes` is longer than `N`, the first `N` bytes are stored and
    /// `BadAlloc` is returned. The rest is dropped.
    pub fn set(&mut self, bytes: &[u8]) -> Result<()> {
        let copied = self.store_prefix(bytes);
        if copied < bytes.len() {
            tracing::debug!(
                capacity = N,
                requested = bytes.len(),
                "truncated oversized set"
            );
            return Err(Self::bad_alloc(bytes.len()));
        }
        Ok(())
    }

    /// Replace the contents with a single byte.
    pub fn set_byte(&mut self, byte: u8) -> Result<()> {
        self.set(&[byte])
    }

    /// Replace the contents with the bytes of `s`.
    pub fn set_str(&mut self, s: &str) -> Result<()> {
        self.set(s.as_bytes())
    }

    /// Replace the contents with a null-terminated sequence (terminator excluded).
    pub fn set_c_str(&mut self, s: &CStr) -> Result<()> {
        self.set(s.to_bytes())
    }

    /// Replace the contents with those of a string of any capacity.
    pub fn assign<const M: usize>(&mut self, other: &FixedString<M>) -> Result<()> {
        self.set(other.as_bytes())
    }

    /// Append `bytes` at the end.
    ///
    /// All or nothing: if the result would exceed `N`, nothing is written and
    /// `BadAlloc` reports the total length that was needed.
    pub fn append(&mut self, bytes: &[u8]) -> Result<()> {
        let end = self.len.saturating_add(bytes.len());
        if end > N {
            tracing::debug!(
                capacity = N,
                len = self.len,
                requested = end,
                "refused oversized append"
            );
            return Err(Self::bad_alloc(end));
        }
        self.storage.bytes[self.len..end].copy_from_slice(bytes);
        self.len = end;
        self.terminate();
        Ok(())
    }

    /// Append a single byte.
    pub fn push(&mut self, byte: u8) -> Result<()> {
        self.append(&[byte])
    }

    /// Append the bytes of `s`.
    pub fn append_str(&mut self, s: &str) -> Result<()> {
        self.append(s.as_bytes())
    }

    /// Append a null-terminated sequence (terminator excluded).
    pub fn append_c_str(&mut self, s: &CStr) -> Result<()> {
        self.append(s.to_bytes())
    }

    /// Append the contents of a string of any capacity.
    pub fn append_fixed<const M: usize>(&mut self, other: &FixedString<M>) -> Result<()> {
        self.append(other.as_bytes())
    }

    /// Remove and return the last byte.
    ///
    /// Fails with `Empty` and changes nothing when there is no content.
    pub fn pop_back(&mut self) -> Result<u8> {
        let Some(last) = self.len.checked_sub(1) else {
            return Err(FixedStringError::Empty);
        };
        let byte = self.storage.bytes[last];
        self.len = last;
        self.terminate();
        Ok(byte)
    }

    /// Shorten to `len` bytes. Does nothing if already that short.
    pub fn truncate(&mut self, len: usize) {
        if len < self.len {
            self.len = len;
            self.terminate();
        }
    }

    /// Remove all content. The buffer keeps its full capacity.
    pub fn clear(&mut self) {
        self.len = 0;
        self.terminate();
    }

    // ─────────────────────────────────────────────────────────────────────────
    // Access
    // ─────────────────────────────────────────────────────────────────────────

    /// Number of content bytes.
    pub const fn len(&self) -> usize {
        self.len
    }

    pub const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub const fn is_full(&self) -> bool {
        self.len == N
    }

    pub const fn capacity(&self) -> usize {
        N
    }

    /// Bytes that can still be appended.
    pub const fn remaining_capacity(&self) -> usize {
        N - self.len
    }

    /// The content bytes, without the terminator.
    pub fn as_bytes(&self) -> &[u8] {
        &self.storage.bytes[..self.len]
    }

    /// The content bytes, mutably. The length cannot change through this.
    pub fn as_bytes_mut(&mut self) -> &mut [u8] {
        &mut self.storage.bytes[..self.len]
    }

    /// The content bytes followed by the terminator (`len() + 1` bytes).
    pub fn as_bytes_with_nul(&self) -> &[u8] {
        let base = (&self.storage as *const Storage<N>).cast::<u8>();
        // SAFETY: `Storage<N>` is `repr(C)` with alignment 1, so it is `N + 1`
        // initialized, contiguous bytes, and `len <= N`.
        unsafe { std::slice::from_raw_parts(base, self.len + 1) }
    }

    /// Pointer to the first byte. The byte at offset `len()` is zero.
    pub fn as_ptr(&self) -> *const u8 {
        self.as_bytes_with_nul().as_ptr()
    }

    /// View as a C string, which ends at the first zero byte.
    ///
    /// If the content contains a zero byte the view is shorter than `len()`.
    pub fn as_c_str(&self) -> &CStr {
        CStr::from_bytes_until_nul(self.as_bytes_with_nul()).unwrap_or_default()
    }

    /// View as UTF-8 text, if it is valid UTF-8.
    pub fn as_str(&self) -> std::result::Result<&str, Utf8Error> {
        std::str::from_utf8(self.as_bytes())
    }

    /// The last byte, or `None` if empty.
    pub fn back(&self) -> Option<u8> {
        self.as_bytes().last().copied()
    }

    /// The last byte, mutably, or `None` if empty.
    pub fn back_mut(&mut self) -> Option<&mut u8> {
        self.as_bytes_mut().last_mut()
    }

    fn bad_alloc(requested: usize) -> FixedStringError {
        FixedStringError::BadAlloc {
            requested,
            capacity: N,
        }
    }

    /// Overwrite the contents with as much of `bytes` as fits.
    ///
    /// Returns the number of bytes copied.
    fn store_prefix(&mut self, bytes: &[u8]) -> usize {
        let n = bytes.len().min(N);
        self.storage.bytes[..n].copy_from_slice(&bytes[..n]);
        self.len = n;
        self.terminate();
        n
    }

    /// Restore the terminator after a length change.
    ///
    /// When full, the terminator is `Storage::tail`, which is always zero.
    fn terminate(&mut self) {
        if let Some(slot) = self.storage.bytes.get_mut(self.len) {
            *slot = 0;
        }
    }
}

impl<const N: usize> Default for FixedString<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> Deref for FixedString<N> {
    type Target = [u8];

    fn deref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> DerefMut for FixedString<N> {
    fn deref_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl<const N: usize> AsRef<[u8]> for FixedString<N> {
    fn as_ref(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<const N: usize> AsMut<[u8]> for FixedString<N> {
    fn as_mut(&mut self) -> &mut [u8] {
        self.as_bytes_mut()
    }
}

impl<const N: usize> Borrow<[u8]> for FixedString<N> {
    fn borrow(&self) -> &[u8] {
        self.as_bytes()
    }
}

impl<'a, const N: usize> IntoIterator for &'a FixedString<N> {
    type Item = &'a u8;
    type IntoIter = std::slice::Iter<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes().iter()
    }
}

impl<'a, const N: usize> IntoIterator for &'a mut FixedString<N> {
    type Item = &'a mut u8;
    type IntoIter = std::slice::IterMut<'a, u8>;

    fn into_iter(self) -> Self::IntoIter {
        self.as_bytes_mut().iter_mut()
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Conversions (truncating)
// ─────────────────────────────────────────────────────────────────────────────

impl<const N: usize> From<u8> for FixedString<N> {
    fn from(byte: u8) -> Self {
        Self::from_byte(byte)
    }
}

impl<const N: usize> From<&[u8]> for FixedString<N> {
    fn from(bytes: &[u8]) -> Self {
        Self::from_bytes_truncated(bytes)
    }
}

impl<const N: usize, const K: usize> From<&[u8; K]> for FixedString<N> {
    fn from(bytes: &[u8; K]) -> Self {
        Self::from_bytes_truncated(bytes)
    }
}

impl<const N: usize, const K: usize> From<[u8; K]> for FixedString<N> {
    fn from(bytes: [u8; K]) -> Self {
        Self::from_bytes_truncated(&bytes)
    }
}

impl<const N: usize> From<&str> for FixedString<N> {
    fn from(s: &str) -> Self {
        Self::from_bytes_truncated(s.as_bytes())
    }
}

impl<const N: usize> From<&CStr> for FixedString<N> {
    fn from(s: &CStr) -> Self {
        Self::from_c_str(s)
    }
}

impl<const N: usize, const M: usize> From<&FixedString<M>> for FixedString<N> {
    fn from(other: &FixedString<M>) -> Self {
        Self::from_bytes_truncated(other.as_bytes())
    }
}

impl<const N: usize> FromStr for FixedString<N> {
    type Err = FixedStringError;

    fn from_str(s: &str) -> Result<Self> {
        Self::try_from_bytes(s.as_bytes())
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Compound append
//
// Operators cannot report a status. On overflow the string is left
// unchanged, exactly like a failed `append`.
// ─────────────────────────────────────────────────────────────────────────────

impl<const N: usize> AddAssign<u8> for FixedString<N> {
    fn add_assign(&mut self, byte: u8) {
        let _ = self.push(byte);
    }
}

impl<const N: usize> AddAssign<&[u8]> for FixedString<N> {
    fn add_assign(&mut self, bytes: &[u8]) {
        let _ = self.append(bytes);
    }
}

impl<const N: usize, const K: usize> AddAssign<&[u8; K]> for FixedString<N> {
    fn add_assign(&mut self, bytes: &[u8; K]) {
        let _ = self.append(bytes);
    }
}

impl<const N: usize> AddAssign<&str> for FixedString<N> {
    fn add_assign(&mut self, s: &str) {
        let _ = self.append_str(s);
    }
}

impl<const N: usize, const M: usize> AddAssign<&FixedString<M>> for FixedString<N> {
    fn add_assign(&mut self, other: &FixedString<M>) {
        let _ = self.append_fixed(other);
    }
}
