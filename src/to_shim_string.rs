use crate::c_str::c_str_chars;
use crate::filter_type::FilterType;

/// <b><u>A key trait</u></b>. Gives every [`FilterType`] integer a method for
/// producing an owned `String` of its decimal text (requires `std`).
///
/// This is the allocating convenience; prefer [`filter_type`](crate::filter_type)
/// or [`WriteFiltered`](crate::WriteFiltered) on hot paths.
///
/// # Example
///
/// ```
/// use num_shim::ToShimString;
///
/// assert_eq!(i64::MIN.to_shim_string(), "-9223372036854775808");
/// assert_eq!(0u8.to_shim_string(), "0");
/// ```
pub trait ToShimString {
    /// Returns the decimal text of `self`.
    fn to_shim_string(&self) -> String;
}

impl<T> ToShimString for T
where
    T: FilterType + Copy,
{
    fn to_shim_string(&self) -> String {
        let shim = (*self).filter_type();
        c_str_chars(&shim)
            .iter()
            .map(|&unit| char::from(unit as u8))
            .collect()
    }
}
