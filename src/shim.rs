use core::fmt;
use core::hash::{Hash, Hasher};

use arrayvec::ArrayVec;

use crate::constants::{Char, SHIM32_CAPACITY, SHIM64_CAPACITY};
use crate::itoa::Integer;

/// Shim produced for `i64`, `u64` and the pointer-sized integers of 64-bit targets.
pub type Shim64 = IntegerShim<SHIM64_CAPACITY>;

/// Shim produced for `i32`, `u32` and every narrower integer.
pub type Shim32 = IntegerShim<SHIM32_CAPACITY>;

/// Owns the decimal text of one integer in a fixed, stack-resident buffer.
///
/// The text occupies `buf[offset..offset + len]`. The view is kept as an
/// offset into the shim's own buffer rather than as a pointer, so a copy of
/// the shim always reads its own storage and plain `Copy` is correct.
///
/// Shims are created by [`filter_type`](crate::filter_type) and are read-only
/// afterwards.
///
/// # Example
///
/// ```
/// use num_shim::{filter_type, c_str_len};
///
/// let shim = filter_type(-42i16);
/// assert_eq!(c_str_len(&shim), 3);
/// # #[cfg(not(feature = "wide-chars"))]
/// assert_eq!(shim.as_str(), "-42");
/// ```
#[derive(Copy, Clone)]
pub struct IntegerShim<const N: usize> {
    buf: [Char; N],
    offset: usize,
    len: usize,
}

impl<const N: usize> IntegerShim<N> {
    /// Encodes `value` into a new shim. Construction and population are one step.
    pub(crate) fn encode<I: Integer>(value: I) -> Self {
        let mut shim = IntegerShim {
            buf: [0; N],
            offset: N,
            len: 0,
        };
        let start = value.write(&mut shim.buf);
        shim.assign(start);
        shim
    }

    /// Records where the text starts within this shim's own buffer.
    #[inline]
    fn assign(&mut self, offset: usize) {
        debug_assert!(offset < N);
        self.offset = offset;
        self.len = N - offset;
    }

    /// Returns a pointer to the first unit of the text.
    ///
    /// The text is **not** nul-terminated; read exactly [`len`](Self::len) units.
    /// The pointer is valid only while this shim is alive and not moved.
    #[inline]
    pub fn data(&self) -> *const Char {
        self.as_chars().as_ptr()
    }

    /// Returns the number of units in the text.
    #[inline]
    pub fn len(&self) -> usize {
        self.len
    }

    /// Always `false` for a shim built from an integer; even `0` renders as `"0"`.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Returns the fixed capacity of the buffer.
    #[inline]
    pub const fn capacity(&self) -> usize {
        N
    }

    /// Returns the text as units.
    #[inline]
    pub fn as_chars(&self) -> &[Char] {
        &self.buf[self.offset..self.offset + self.len]
    }

    /// Returns the text as a `&str`.
    #[cfg(not(feature = "wide-chars"))]
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: the encoder only writes ASCII digits and '-'.
        unsafe { core::str::from_utf8_unchecked(self.as_chars()) }
    }

    /// Copies the text into a detached fixed-capacity vector, e.g. to keep it
    /// after the shim goes out of scope.
    pub fn to_array_vec(&self) -> ArrayVec<Char, N> {
        self.as_chars().iter().copied().collect()
    }
}

impl<const N: usize> AsRef<[Char]> for IntegerShim<N> {
    fn as_ref(&self) -> &[Char] {
        self.as_chars()
    }
}

impl<const N: usize> PartialEq for IntegerShim<N> {
    fn eq(&self, other: &Self) -> bool {
        self.as_chars() == other.as_chars()
    }
}

impl<const N: usize> Eq for IntegerShim<N> {}

#[cfg(not(feature = "wide-chars"))]
impl<const N: usize> PartialEq<str> for IntegerShim<N> {
    fn eq(&self, other: &str) -> bool {
        self.as_str() == other
    }
}

#[cfg(not(feature = "wide-chars"))]
impl<const N: usize> PartialEq<&str> for IntegerShim<N> {
    fn eq(&self, other: &&str) -> bool {
        self.as_str() == *other
    }
}

impl<const N: usize> Hash for IntegerShim<N> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.as_chars().hash(state)
    }
}

#[cfg(not(feature = "wide-chars"))]
impl<const N: usize> fmt::Display for IntegerShim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

#[cfg(feature = "wide-chars")]
impl<const N: usize> fmt::Display for IntegerShim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        // digits and '-' only, so every unit narrows to one byte
        let mut text = arrayvec::ArrayString::<N>::new();
        for &c in self.as_chars() {
            text.push(char::from(c as u8));
        }
        f.pad(text.as_str())
    }
}

impl<const N: usize> fmt::Debug for IntegerShim<N> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "IntegerShim<{}>(\"{}\")", N, self)
    }
}

#[cfg(feature = "with-serde")]
impl<const N: usize> serde::Serialize for IntegerShim<N> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.collect_str(self)
    }
}
