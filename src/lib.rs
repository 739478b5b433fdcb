/*!
[![Crates.io](https://img.shields.io/crates/v/num-shim.svg)](https://crates.io/crates/num-shim)
[![Documentation](https://docs.rs/num-shim/badge.svg)](https://docs.rs/num-shim/)
![License](https://img.shields.io/crates/l/num_shim.svg)

A Rust crate for turning integers into decimal text without allocating, through
small self-contained *conversion shims*.

# Picture

- [`filter_type`] takes any supported integer and returns a shim, a value that
  owns a fixed-size buffer holding the integer's decimal text.
- A formatting engine reads the text through [`c_str_data`]/[`c_str_len`]
  (or [`c_str_chars`]) without knowing which integer type produced it.
- Narrow integers are widened to one of four canonical types (`i64`, `u64`,
  `i32`, `u32`), so there are exactly four encoders behind the scenes.
- Shims are plain `Copy` values. The text is addressed by an offset into the
  shim's own buffer, so a copy never points back into the original.

# Example

```rust
use num_shim::{c_str_chars, c_str_len, filter_type, Char};

let copy = {
    let shim = filter_type(i64::MIN);
    assert_eq!(c_str_len(&shim), 20);
    shim
};
assert_eq!(c_str_chars(&copy), b"-9223372036854775808".map(Char::from));
```

# Sinks

[`WriteFiltered`] writes an integer's shim straight into a sink:
[`arrayvec::ArrayString`] and [`arrayvec::ArrayVec<u8, CAP>`] without `std`,
and `String`, `Vec<u8>`, files and the standard streams with it.

```rust
# #[cfg(feature = "std")]
# {
use num_shim::WriteFiltered;

let mut out = Vec::new();
out.write_filtered(65_535u16).unwrap();
assert_eq!(out, b"65535");
# }
```

# Extra features

| Available features | What to put in your `Cargo.toml`                              |
| :----------------- | :------------------------------------------------------------ |
| `no_std`           | `num-shim = { version = "0.1", default-features = false }`    |
| `wide-chars`       | `num-shim = { version = "0.1", features = ["wide-chars"] }`   |
| `with-serde`       | `num-shim = { version = "0.1", features = ["with-serde"] }`   |
| `tracing`          | `num-shim = { version = "0.1", features = ["tracing"] }`      |

`wide-chars` switches [`Char`] from `u8` to `u16` for every shim in the build;
narrow and wide text are never mixed.

# License

**num-shim** is licensed under either of:

- [The Apache License, Version 2.0], or
- [The MIT license]

at your option.

[The Apache License, Version 2.0]: http://www.apache.org/licenses/LICENSE-2.0
[The MIT license]: http://opensource.org/licenses/MIT
*/

#![cfg_attr(not(any(feature = "std", test)), no_std)]
#![deny(missing_docs, rust_2018_idioms)]
#![warn(missing_debug_implementations)]
#![doc(html_root_url = "https://docs.rs/num-shim/0.1.0")]

mod c_str;
mod constants;
mod error;
mod filter_type;
mod impls;
mod itoa;
mod shim;
#[cfg(feature = "std")]
mod to_shim_string;
mod write_filtered;

pub use self::c_str::{c_str_chars, c_str_data, c_str_len, CStrShim};
#[cfg(not(feature = "wide-chars"))]
pub use self::c_str::{c_str_data_a, c_str_len_a};
#[cfg(feature = "wide-chars")]
pub use self::c_str::{c_str_data_w, c_str_len_w};
pub use self::constants::{Char, SHIM32_CAPACITY, SHIM64_CAPACITY};
pub use self::error::Error;
pub use self::filter_type::{filter_type, FilterType};
pub use self::itoa::{encode, Integer};
pub use self::shim::{IntegerShim, Shim32, Shim64};
#[cfg(feature = "std")]
pub use self::to_shim_string::ToShimString;
pub use self::write_filtered::WriteFiltered;

mod private {
    pub trait Sealed {}
}
