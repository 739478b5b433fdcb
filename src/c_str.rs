use crate::constants::Char;
use crate::shim::IntegerShim;

/// A value that presents itself as a possibly non-nul-terminated string of [`Char`]s.
///
/// This is the only contract a formatting engine needs: it asks for the units
/// through [`c_str_data`]/[`c_str_len`] (or [`c_str_chars`]) and never learns
/// which integer produced them. Implement it for your own shim types to have
/// them accepted wherever an integer shim is.
pub trait CStrShim {
    /// Returns the text as units.
    fn as_chars(&self) -> &[Char];

    /// Returns a pointer to the first unit. The text is not nul-terminated.
    #[inline]
    fn c_str_data(&self) -> *const Char {
        self.as_chars().as_ptr()
    }

    /// Returns the number of units in the text.
    #[inline]
    fn c_str_len(&self) -> usize {
        self.as_chars().len()
    }
}

impl<const N: usize> CStrShim for IntegerShim<N> {
    #[inline]
    fn as_chars(&self) -> &[Char] {
        IntegerShim::as_chars(self)
    }
}

impl<S: CStrShim + ?Sized> CStrShim for &S {
    #[inline]
    fn as_chars(&self) -> &[Char] {
        (**self).as_chars()
    }
}

/// Returns a possibly non-nul-terminated, non-null pointer to the narrow text of `s`.
#[cfg(not(feature = "wide-chars"))]
#[inline]
pub fn c_str_data_a<S: CStrShim + ?Sized>(s: &S) -> *const u8 {
    s.c_str_data()
}

/// Returns the number of narrow units in the text of `s`.
#[cfg(not(feature = "wide-chars"))]
#[inline]
pub fn c_str_len_a<S: CStrShim + ?Sized>(s: &S) -> usize {
    s.c_str_len()
}

/// Returns a possibly non-nul-terminated, non-null pointer to the wide text of `s`.
#[cfg(feature = "wide-chars")]
#[inline]
pub fn c_str_data_w<S: CStrShim + ?Sized>(s: &S) -> *const u16 {
    s.c_str_data()
}

/// Returns the number of wide units in the text of `s`.
#[cfg(feature = "wide-chars")]
#[inline]
pub fn c_str_len_w<S: CStrShim + ?Sized>(s: &S) -> usize {
    s.c_str_len()
}

/// Returns a possibly non-nul-terminated, non-null pointer to the text of `s`.
///
/// Forwards to [`c_str_data_a`] in narrow builds and `c_str_data_w` with
/// `wide-chars`. The pointer must not outlive `s`; read exactly
/// [`c_str_len`] units from it.
#[inline]
#[allow(clippy::let_and_return)]
pub fn c_str_data<S: CStrShim + ?Sized>(s: &S) -> *const Char {
    #[cfg(not(feature = "wide-chars"))]
    let data = c_str_data_a(s);
    #[cfg(feature = "wide-chars")]
    let data = c_str_data_w(s);
    data
}

/// Returns the number of units in the text of `s`.
///
/// Forwards to [`c_str_len_a`] in narrow builds and `c_str_len_w` with `wide-chars`.
#[inline]
#[allow(clippy::let_and_return)]
pub fn c_str_len<S: CStrShim + ?Sized>(s: &S) -> usize {
    #[cfg(not(feature = "wide-chars"))]
    let len = c_str_len_a(s);
    #[cfg(feature = "wide-chars")]
    let len = c_str_len_w(s);
    len
}

/// Returns the text of `s` as a borrowed slice, the safe form of
/// [`c_str_data`] + [`c_str_len`].
#[inline]
pub fn c_str_chars<S: CStrShim + ?Sized>(s: &S) -> &[Char] {
    s.as_chars()
}
