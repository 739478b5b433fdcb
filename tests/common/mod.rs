#![allow(dead_code)]

use lazy_static::lazy_static;
use num_shim::{c_str_chars, c_str_data, c_str_len, CStrShim};

lazy_static! {
    /// (expected text, value) for every signed category, widened to i64 for storage.
    pub static ref SIGNED_CASES: Vec<(&'static str, i64)> = vec![
        ("0", 0),
        ("-1", -1),
        ("1", 1),
        ("-128", i8::MIN as i64),
        ("127", i8::MAX as i64),
        ("-32768", i16::MIN as i64),
        ("32767", i16::MAX as i64),
        ("-2147483648", i32::MIN as i64),
        ("2147483647", i32::MAX as i64),
        ("-9223372036854775808", i64::MIN),
        ("9223372036854775807", i64::MAX),
        ("-10000", -10_000),
        ("1000000007", 1_000_000_007),
    ];

    /// (expected text, value) for every unsigned category, widened to u64 for storage.
    pub static ref UNSIGNED_CASES: Vec<(&'static str, u64)> = vec![
        ("0", 0),
        ("9", 9),
        ("10", 10),
        ("255", u8::MAX as u64),
        ("65535", u16::MAX as u64),
        ("4294967295", u32::MAX as u64),
        ("18446744073709551615", u64::MAX),
        ("100000000", 100_000_000),
    ];
}

/// Reads a shim's text the way a formatting engine would: pointer + length only.
pub fn text_of<S: CStrShim + ?Sized>(shim: &S) -> String {
    let data = c_str_data(shim);
    let len = c_str_len(shim);
    let units = unsafe { std::slice::from_raw_parts(data, len) };
    assert_eq!(units, c_str_chars(shim));
    units.iter().map(|&unit| char::from(unit as u8)).collect()
}
