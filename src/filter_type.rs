use crate::c_str::CStrShim;

/// Conversion shim customization point: turns a value into a text shim.
///
/// Every supported integer type selects its implementation statically. The
/// canonical categories (`i64`, `u64`, `i32`, `u32`) encode directly; every
/// other integer is widened to one of them and returns that category's shim,
/// so there are exactly four encoders behind this trait.
///
/// | Argument                                 | Forwards to        | Shim                   |
/// |------------------------------------------|--------------------|------------------------|
/// | `i64`, `u64`                             | (encodes)          | [`Shim64`]             |
/// | `i32`, `u32`                             | (encodes)          | [`Shim32`]             |
/// | `i8`, `i16` / `u8`, `u16`                | `i32` / `u32`      | [`Shim32`]             |
/// | `isize` / `usize`                        | same-width integer | per target             |
/// | `NonZero*`, `Wrapping<T>`, `&T`          | the inner integer  | the inner integer's    |
///
/// The trait is open: implement it for your own types and they can be passed
/// anywhere an integer can.
///
/// Types with no implementation are rejected at compile time:
///
/// ```compile_fail
/// let _ = num_shim::filter_type(1.5f64);
/// ```
///
/// ```compile_fail
/// let _ = num_shim::filter_type(1u128);
/// ```
///
/// [`Shim64`]: crate::Shim64
/// [`Shim32`]: crate::Shim32
pub trait FilterType {
    /// The shim this type converts into.
    type Shim: CStrShim;

    /// Converts `self` into its shim.
    fn filter_type(self) -> Self::Shim;
}

/// Converts `value` into its text shim. See [`FilterType`].
///
/// # Example
///
/// ```
/// use num_shim::{c_str_chars, filter_type, Char};
///
/// let shim = filter_type(4_294_967_295u32);
/// assert_eq!(c_str_chars(&shim), b"4294967295".map(Char::from));
/// ```
#[inline]
pub fn filter_type<T: FilterType>(value: T) -> T::Shim {
    value.filter_type()
}
