use crate::constants::{Char, DIGIT_TABLE};

/// An integer of a canonical category, one that owns a real encoder.
///
/// This trait is sealed and cannot be implemented for types outside of this crate.
/// Narrower integers never implement it; they are widened by
/// [`FilterType`](crate::FilterType) first.
pub trait Integer: crate::private::Sealed {
    /// Largest number of units the decimal form of this type can need, sign included.
    const MAX_LEN: usize;

    /// Writes the decimal form into the tail of `buf` and returns the offset of its first unit.
    ///
    /// `buf` must be at least [`MAX_LEN`](Integer::MAX_LEN) units long; prefer
    /// [`encode`], which checks this in every build.
    fn write(self, buf: &mut [Char]) -> usize;
}

#[inline(always)]
fn debug_check_capacity(buf: &[Char], max_len: usize) {
    debug_assert!(
        buf.len() >= max_len,
        "buffer of {} units cannot hold {} units",
        buf.len(),
        max_len
    );
}

/// Encodes `value` into the tail of `buf`, returning `(start, len)` of the text.
///
/// The text is assembled back to front, so `start + len == buf.len()`. Nothing
/// before `start` is touched.
///
/// # Panics
///
/// Panics if `buf` is shorter than `I::MAX_LEN`.
///
/// # Example
///
/// ```
/// let mut buf = [0; 21];
/// let (start, len) = num_shim::encode(&mut buf, i64::MIN);
/// assert_eq!(&buf[start..start + len], b"-9223372036854775808".map(num_shim::Char::from));
/// ```
pub fn encode<I: Integer>(buf: &mut [Char], value: I) -> (usize, usize) {
    assert!(
        buf.len() >= I::MAX_LEN,
        "buffer of {} units cannot hold {} units",
        buf.len(),
        I::MAX_LEN
    );
    let start = value.write(buf);
    (start, buf.len() - start)
}

#[inline(always)]
fn write_pair(buf: &mut [Char], at: usize, table_index: usize) {
    buf[at] = Char::from(DIGIT_TABLE[table_index]);
    buf[at + 1] = Char::from(DIGIT_TABLE[table_index + 1]);
}

mod integer64;
mod integers;
