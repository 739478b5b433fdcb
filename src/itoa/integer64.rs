use super::{debug_check_capacity, write_pair, Integer};
use crate::constants::{Char, I64_MAX_LEN, U64_MAX_LEN};

// Adaptation of the original implementation at
// https://github.com/rust-lang/rust/blob/b8214dc6c6fc20d0a660fb5700dca9ebf51ebe89/src/libcore/fmt/num.rs#L188-L266

impl Integer for i64 {
    const MAX_LEN: usize = I64_MAX_LEN;

    #[inline(never)]
    fn write(self, buf: &mut [Char]) -> usize {
        debug_check_capacity(buf, Self::MAX_LEN);
        let is_nonnegative = self >= 0;
        let n = if is_nonnegative {
            self as u64
        } else {
            // convert the negative num to positive by summing 1 to it's 2 complement
            (!(self as u64)).wrapping_add(1)
        };

        let mut curr = write_u64(n, buf);
        if !is_nonnegative {
            curr -= 1;
            buf[curr] = Char::from(b'-');
        }
        curr
    }
}

impl Integer for u64 {
    const MAX_LEN: usize = U64_MAX_LEN;

    #[inline(never)]
    fn write(self, buf: &mut [Char]) -> usize {
        debug_check_capacity(buf, Self::MAX_LEN);
        write_u64(self, buf)
    }
}

impl crate::private::Sealed for i64 {}
impl crate::private::Sealed for u64 {}

#[inline(never)]
fn write_u64(mut n: u64, buf: &mut [Char]) -> usize {
    let mut curr = buf.len();

    // eagerly decode 4 characters at a time
    while n >= 10_000 {
        let rem = (n % 10_000) as usize;
        n /= 10_000;

        curr -= 4;
        write_pair(buf, curr, (rem / 100) << 1);
        write_pair(buf, curr + 2, (rem % 100) << 1);
    }

    // if we reach here numbers are <= 9999, so at most 4 chars long
    let mut n = n as usize; // possibly reduce 64bit math

    // decode 2 more chars, if > 2 chars
    if n >= 100 {
        let d1 = (n % 100) << 1;
        n /= 100;
        curr -= 2;
        write_pair(buf, curr, d1);
    }

    // decode last 1 or 2 chars
    if n < 10 {
        curr -= 1;
        buf[curr] = Char::from(n as u8 + b'0');
    } else {
        curr -= 2;
        write_pair(buf, curr, n << 1);
    }

    curr
}
