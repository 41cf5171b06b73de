//! Comparison, equality, and hashing.
//!
//! Everything here works on the content bytes only, so strings of different
//! capacities, byte slices, byte literals, `str` and `CStr` all compare
//! against each other through the same `&[u8]` view. Equality holds in both
//! operand orders.

use std::cmp::Ordering;
use std::ffi::CStr;
use std::hash::{Hash, Hasher};

use crate::string::FixedString;

impl<const N: usize> FixedString<N> {
    /// Lexicographic byte-wise comparison with anything byte-like.
    ///
    /// The first differing byte decides. If one side is a prefix of the
    /// other, the shorter one is less.
    ///
    /// ```
    /// use std::cmp::Ordering;
    /// use fixstr::FixedString;
    ///
    /// let s = FixedString::<40>::from("1234");
    /// assert_eq!(s.compare("12345"), Ordering::Less);
    /// assert_eq!(s.compare("1235"), Ordering::Less);
    /// assert_eq!(s.compare(b"1234"), Ordering::Equal);
    /// assert_eq!(s.compare("123"), Ordering::Greater);
    /// ```
    pub fn compare<T>(&self, other: &T) -> Ordering
    where
        T: AsRef<[u8]> + ?Sized,
    {
        compare_bytes(self.as_bytes(), other.as_ref())
    }

    /// Compare against a null-terminated sequence, measured by its own terminator.
    pub fn compare_c_str(&self, other: &CStr) -> Ordering {
        compare_bytes(self.as_bytes(), other.to_bytes())
    }
}

/// Three-way comparison of two byte runs.
fn compare_bytes(lhs: &[u8], rhs: &[u8]) -> Ordering {
    lhs.cmp(rhs)
}

// ─────────────────────────────────────────────────────────────────────────────
// Between strings
// ─────────────────────────────────────────────────────────────────────────────

impl<const N: usize, const M: usize> PartialEq<FixedString<M>> for FixedString<N> {
    fn eq(&self, other: &FixedString<M>) -> bool {
        self.as_bytes() == other.as_bytes()
    }
}

impl<const N: usize> Eq for FixedString<N> {}

impl<const N: usize, const M: usize> PartialOrd<FixedString<M>> for FixedString<N> {
    fn partial_cmp(&self, other: &FixedString<M>) -> Option<Ordering> {
        Some(self.compare(other))
    }
}

impl<const N: usize> Ord for FixedString<N> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.compare(other)
    }
}

/// Hashes exactly like the content slice, so `Borrow<[u8]>` lookups work.
impl<const N: usize> Hash for FixedString<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_bytes().hash(state);
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Against borrowed views
// ─────────────────────────────────────────────────────────────────────────────

macro_rules! impl_eq_view {
    ($($view:ty),* $(,)?) => {
        $(
            impl<const N: usize> PartialEq<$view> for FixedString<N> {
                fn eq(&self, other: &$view) -> bool {
                    self.as_bytes() == AsRef::<[u8]>::as_ref(other)
                }
            }

            impl<const N: usize> PartialEq<FixedString<N>> for $view {
                fn eq(&self, other: &FixedString<N>) -> bool {
                    AsRef::<[u8]>::as_ref(self) == other.as_bytes()
                }
            }
        )*
    };
}

impl_eq_view!([u8], &[u8], str, &str);

impl<const N: usize, const K: usize> PartialEq<[u8; K]> for FixedString<N> {
    fn eq(&self, other: &[u8; K]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const N: usize, const K: usize> PartialEq<FixedString<N>> for [u8; K] {
    fn eq(&self, other: &FixedString<N>) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<const N: usize, const K: usize> PartialEq<&[u8; K]> for FixedString<N> {
    fn eq(&self, other: &&[u8; K]) -> bool {
        self.as_bytes() == other.as_slice()
    }
}

impl<const N: usize, const K: usize> PartialEq<FixedString<N>> for &[u8; K] {
    fn eq(&self, other: &FixedString<N>) -> bool {
        self.as_slice() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<CStr> for FixedString<N> {
    fn eq(&self, other: &CStr) -> bool {
        self.as_bytes() == other.to_bytes()
    }
}

impl<const N: usize> PartialEq<FixedString<N>> for CStr {
    fn eq(&self, other: &FixedString<N>) -> bool {
        self.to_bytes() == other.as_bytes()
    }
}

impl<const N: usize> PartialEq<&CStr> for FixedString<N> {
    fn eq(&self, other: &&CStr) -> bool {
        self.as_bytes() == other.to_bytes()
    }
}

impl<const N: usize> PartialEq<FixedString<N>> for &CStr {
    fn eq(&self, other: &FixedString<N>) -> bool {
        self.to_bytes() == other.as_bytes()
    }
}

macro_rules! impl_ord_view {
    ($($view:ty),* $(,)?) => {
        $(
            impl<const N: usize> PartialOrd<$view> for FixedString<N> {
                fn partial_cmp(&self, other: &$view) -> Option<Ordering> {
                    Some(self.compare(other))
                }
            }

            impl<const N: usize> PartialOrd<FixedString<N>> for $view {
                fn partial_cmp(&self, other: &FixedString<N>) -> Option<Ordering> {
                    Some(other.compare(self).reverse())
                }
            }
        )*
    };
}

impl_ord_view!([u8], str);

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::HashSet;

    type Medium = FixedString<40>;
    type Large = FixedString<128>;

    fn hash_of<T: Hash + ?Sized>(value: &T) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_compare_same_capacity() {
        let s = Medium::from("1234");
        assert_eq!(s.compare(&Medium::from("12345")), Ordering::Less);
        assert_eq!(s.compare(&Medium::from("1234")), Ordering::Equal);
        assert_eq!(s.compare(&Medium::from("123")), Ordering::Greater);
    }

    #[test]
    fn test_compare_uses_content_not_just_length() {
        let s = Medium::from("1234");
        assert_eq!(s.compare("1235"), Ordering::Less);
        assert_eq!(s.compare("1233"), Ordering::Greater);
        assert_eq!(s.compare("2"), Ordering::Less);
        assert_eq!(Medium::from("2").compare("1234"), Ordering::Greater);
    }

    #[test]
    fn test_compare_raw_bytes() {
        let s = Medium::from("1234");
        let raw: &[u8] = b"12345";
        assert_eq!(s.compare(raw), Ordering::Less);
        assert_eq!(s.compare(&raw[..4]), Ordering::Equal);
        assert_eq!(s.compare(&raw[..3]), Ordering::Greater);
    }

    #[test]
    fn test_compare_c_str() {
        let s = Medium::from("1234");
        let big = CStr::from_bytes_with_nul(b"12345\0").unwrap();
        let eq = CStr::from_bytes_with_nul(b"1234\0").unwrap();
        let small = CStr::from_bytes_with_nul(b"123\0").unwrap();
        assert_eq!(s.compare_c_str(big), Ordering::Less);
        assert_eq!(s.compare_c_str(eq), Ordering::Equal);
        assert_eq!(s.compare_c_str(small), Ordering::Greater);
    }

    #[test]
    fn test_compare_empty() {
        let empty = Medium::new();
        assert_eq!(empty.compare(""), Ordering::Equal);
        assert_eq!(empty.compare("a"), Ordering::Less);
        assert_eq!(Medium::from("a").compare(&empty), Ordering::Greater);
    }

    #[test]
    fn test_compare_high_bytes_are_unsigned() {
        let high = Medium::from(&[0x80u8][..]);
        assert_eq!(high.compare(&[0x7fu8][..]), Ordering::Greater);
    }

    #[test]
    fn test_eq_across_capacities() {
        let a = Medium::from("1234");
        let b = Large::from("1234");
        let c = Large::from("4321");
        assert!(a == b);
        assert!(b == a);
        assert!(a != c);
        assert!(c != a);
    }

    #[test]
    fn test_eq_views_both_orders() {
        let s = Medium::from("1234");
        let slice: &[u8] = b"1234";

        assert!(s == "1234");
        assert!("1234" == s);
        assert!(s == *"1234");
        assert!(*"1234" == s);
        assert!(s == slice);
        assert!(slice == s);
        assert!(s == *slice);
        assert!(*slice == s);
        assert!(s == b"1234");
        assert!(b"1234" == s);
        assert!(s == *b"1234");
        assert!(*b"1234" == s);

        assert!(s != "12345");
        assert!("12345" != s);
        assert!(s != b"1235");
        assert!(b"1235" != s);
    }

    #[test]
    fn test_eq_c_str_both_orders() {
        let s = Medium::from("1234");
        let c = CStr::from_bytes_with_nul(b"1234\0").unwrap();
        assert!(s == c);
        assert!(c == s);
        assert!(s == *c);
        assert!(*c == s);
    }

    #[test]
    fn test_ordering_operators() {
        let a = Medium::from("abc");
        let b = Large::from("abd");
        assert!(a < b);
        assert!(b > a);
        assert!(a < *"abcd");
        assert!(*"abcd" > a);
        assert!(*b"ab".as_slice() < a);
    }

    #[test]
    fn test_sorting() {
        let mut items = vec![
            Medium::from("b"),
            Medium::from("ab"),
            Medium::from("a"),
            Medium::from(""),
        ];
        items.sort();
        assert_eq!(items[0], "");
        assert_eq!(items[1], "a");
        assert_eq!(items[2], "ab");
        assert_eq!(items[3], "b");
    }

    #[test]
    fn test_hash_matches_slice() {
        let s = Medium::from("hello");
        assert_eq!(hash_of(&s), hash_of(&b"hello"[..]));
        assert_eq!(hash_of(&s), hash_of(&Large::from("hello")));
    }

    #[test]
    fn test_borrow_lookup() {
        let mut set = HashSet::new();
        set.insert(Medium::from("key"));
        assert!(set.contains(&b"key"[..]));
        assert!(!set.contains(&b"other"[..]));
    }
}
