cfg_if::cfg_if! {
    if #[cfg(feature = "wide-chars")] {
        /// Unit of text produced by every shim in this build (`u16` with the `wide-chars` feature).
        pub type Char = u16;
    } else {
        /// Unit of text produced by every shim in this build (`u8` unless `wide-chars` is enabled).
        pub type Char = u8;
    }
}

/// Capacity of the shim produced for the 64-bit categories.
///
/// 20 digits plus a sign covers `i64::MIN`, whose magnitude is one digit
/// longer than anything `i64::MAX` can need once the sign is counted.
pub const SHIM64_CAPACITY: usize = 21;

/// Capacity of the shim produced for the 32-bit categories and everything narrower.
pub const SHIM32_CAPACITY: usize = 12;

pub(crate) const U8_MAX_LEN: usize = 3;
pub(crate) const U16_MAX_LEN: usize = 5;
pub(crate) const U32_MAX_LEN: usize = 10;
pub(crate) const U64_MAX_LEN: usize = 20;

pub(crate) const I8_MAX_LEN: usize = 4;
pub(crate) const I16_MAX_LEN: usize = 6;
pub(crate) const I32_MAX_LEN: usize = 11;
pub(crate) const I64_MAX_LEN: usize = 20;

// Every category must fit the shim of the canonical type it funnels into.
const _: () = assert!(I64_MAX_LEN <= SHIM64_CAPACITY && U64_MAX_LEN <= SHIM64_CAPACITY);
const _: () = assert!(I32_MAX_LEN <= SHIM32_CAPACITY && U32_MAX_LEN <= SHIM32_CAPACITY);
const _: () = assert!(I16_MAX_LEN <= SHIM32_CAPACITY && U16_MAX_LEN <= SHIM32_CAPACITY);
const _: () = assert!(I8_MAX_LEN <= SHIM32_CAPACITY && U8_MAX_LEN <= SHIM32_CAPACITY);

pub(crate) const DIGIT_TABLE: &[u8] = b"\
    0001020304050607080910111213141516171819\
    2021222324252627282930313233343536373839\
    4041424344454647484950515253545556575859\
    6061626364656667686970717273747576777879\
    8081828384858687888990919293949596979899";
