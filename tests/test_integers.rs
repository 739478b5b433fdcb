mod common;

use num_shim::{encode, filter_type, Char, SHIM32_CAPACITY, SHIM64_CAPACITY};
use rand::Rng;

use crate::common::{text_of, SIGNED_CASES, UNSIGNED_CASES};

#[test]
fn test_signed_cases() {
    for (expected, value) in SIGNED_CASES.iter() {
        let value = *value;
        assert_eq!(*expected, text_of(&filter_type(value)));

        if let Ok(v) = i32::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
        if let Ok(v) = i16::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
        if let Ok(v) = i8::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
        if let Ok(v) = isize::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
    }
}

#[test]
fn test_unsigned_cases() {
    for (expected, value) in UNSIGNED_CASES.iter() {
        let value = *value;
        assert_eq!(*expected, text_of(&filter_type(value)));

        if let Ok(v) = u32::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
        if let Ok(v) = u16::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
        if let Ok(v) = u8::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
        if let Ok(v) = usize::try_from(value) {
            assert_eq!(*expected, text_of(&filter_type(v)));
        }
    }
}

#[test]
fn test_zero_is_single_digit_everywhere() {
    let texts = [
        text_of(&filter_type(0i8)),
        text_of(&filter_type(0i16)),
        text_of(&filter_type(0i32)),
        text_of(&filter_type(0i64)),
        text_of(&filter_type(0isize)),
        text_of(&filter_type(0u8)),
        text_of(&filter_type(0u16)),
        text_of(&filter_type(0u32)),
        text_of(&filter_type(0u64)),
        text_of(&filter_type(0usize)),
    ];
    for text in texts.iter() {
        assert_eq!(text, "0");
    }
}

#[test]
fn test_maximum_has_exact_digit_count() {
    fn digits(max: u64) -> usize {
        // ceil(log10(max + 1)) without floating point
        let mut count = 1;
        let mut n = max;
        while n >= 10 {
            n /= 10;
            count += 1;
        }
        count
    }

    assert_eq!(text_of(&filter_type(u8::MAX)).len(), digits(u8::MAX as u64));
    assert_eq!(text_of(&filter_type(u16::MAX)).len(), digits(u16::MAX as u64));
    assert_eq!(text_of(&filter_type(u32::MAX)).len(), digits(u32::MAX as u64));
    assert_eq!(text_of(&filter_type(u64::MAX)).len(), digits(u64::MAX));
    assert_eq!(text_of(&filter_type(i64::MAX)).len(), digits(i64::MAX as u64));
    assert!(!text_of(&filter_type(i32::MAX)).starts_with('0'));
}

#[test]
fn test_minimum_fits_capacity() {
    let shim = filter_type(i64::MIN);
    assert_eq!(shim.capacity(), SHIM64_CAPACITY);
    assert_eq!(text_of(&shim), "-9223372036854775808");
    assert_eq!(shim.len(), 20);

    let shim = filter_type(i32::MIN);
    assert_eq!(shim.capacity(), SHIM32_CAPACITY);
    assert_eq!(text_of(&shim), "-2147483648");

    assert_eq!(text_of(&filter_type(i16::MIN)), "-32768");
    assert_eq!(text_of(&filter_type(i8::MIN)), "-128");
}

#[test]
fn test_random_signed_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        let value: i64 = rng.gen();
        assert_eq!(value, text_of(&filter_type(value)).parse::<i64>().unwrap());

        let value: i32 = rng.gen();
        assert_eq!(value, text_of(&filter_type(value)).parse::<i32>().unwrap());

        let value: i16 = rng.gen();
        assert_eq!(value, text_of(&filter_type(value)).parse::<i16>().unwrap());
    }
}

#[test]
fn test_random_unsigned_round_trip() {
    let mut rng = rand::thread_rng();
    for _ in 0..10_000 {
        let value: u64 = rng.gen();
        let text = text_of(&filter_type(value));
        assert!(!text.contains('-'));
        assert_eq!(value, text.parse::<u64>().unwrap());

        let value: u32 = rng.gen();
        let text = text_of(&filter_type(value));
        assert!(!text.contains('-'));
        assert_eq!(value, text.parse::<u32>().unwrap());
    }
}

#[test]
fn test_random_narrow_matches_widened() {
    let mut rng = rand::thread_rng();
    for _ in 0..1_000 {
        let value: i16 = rng.gen();
        assert_eq!(filter_type(value), filter_type(i32::from(value)));

        let value: u8 = rng.gen();
        assert_eq!(filter_type(value), filter_type(u32::from(value)));
    }
}

#[test]
fn test_encode_reports_start_and_len() {
    let mut buf = [0 as Char; 32];
    let (start, len) = encode(&mut buf, -42i32);
    assert_eq!(start + len, buf.len());
    assert_eq!(len, 3);
    assert_eq!(&buf[start..], &[Char::from(b'-'), Char::from(b'4'), Char::from(b'2')]);
}

#[test]
#[should_panic(expected = "cannot hold")]
fn test_encode_rejects_short_buffer() {
    let mut buf = [0 as Char; 10];
    let _ = encode(&mut buf, 0u64);
}

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        const POINTER_SIZED_CAPACITY: usize = SHIM64_CAPACITY;
        const ISIZE_MIN_TEXT: &str = "-9223372036854775808";
        const USIZE_MAX_TEXT: &str = "18446744073709551615";
    } else if #[cfg(target_pointer_width = "32")] {
        const POINTER_SIZED_CAPACITY: usize = SHIM32_CAPACITY;
        const ISIZE_MIN_TEXT: &str = "-2147483648";
        const USIZE_MAX_TEXT: &str = "4294967295";
    } else {
        const POINTER_SIZED_CAPACITY: usize = SHIM32_CAPACITY;
        const ISIZE_MIN_TEXT: &str = "-32768";
        const USIZE_MAX_TEXT: &str = "65535";
    }
}

#[test]
fn test_pointer_sized_capacity_follows_target() {
    let shim = filter_type(isize::MIN);
    assert_eq!(shim.capacity(), POINTER_SIZED_CAPACITY);
    assert_eq!(text_of(&shim), ISIZE_MIN_TEXT);

    let shim = filter_type(usize::MAX);
    assert_eq!(shim.capacity(), POINTER_SIZED_CAPACITY);
    assert_eq!(text_of(&shim), USIZE_MAX_TEXT);
}
