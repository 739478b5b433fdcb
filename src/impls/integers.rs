use crate::filter_type::FilterType;
use crate::shim::{IntegerShim, Shim32, Shim64};

// canonical categories: one real encoder each

macro_rules! impl_canonical {
    ($($t:ty => $shim:ty),* $(,)?) => {$(
        impl FilterType for $t {
            type Shim = $shim;

            #[inline]
            fn filter_type(self) -> Self::Shim {
                IntegerShim::encode(self)
            }
        }
    )*};
}

impl_canonical!(
    i64 => Shim64,
    u64 => Shim64,
    i32 => Shim32,
    u32 => Shim32,
);

// widening forwarders

macro_rules! impl_widening {
    ($($t:ty => $wide:ty),* $(,)?) => {$(
        impl FilterType for $t {
            type Shim = <$wide as FilterType>::Shim;

            #[inline]
            fn filter_type(self) -> Self::Shim {
                <$wide>::from(self).filter_type()
            }
        }
    )*};
}

impl_widening!(
    i8 => i32,
    i16 => i32,
    u8 => u32,
    u16 => u32,
);

// isize and usize are never the same type as a fixed-width integer, but their
// width is; exactly one of these branches is compiled on any target.
macro_rules! impl_pointer_sized {
    ($($t:ty => $same_width:ty),* $(,)?) => {$(
        impl FilterType for $t {
            type Shim = <$same_width as FilterType>::Shim;

            #[inline]
            fn filter_type(self) -> Self::Shim {
                (self as $same_width).filter_type()
            }
        }
    )*};
}

cfg_if::cfg_if! {
    if #[cfg(target_pointer_width = "64")] {
        impl_pointer_sized!(isize => i64, usize => u64);
    } else if #[cfg(target_pointer_width = "32")] {
        impl_pointer_sized!(isize => i32, usize => u32);
    } else if #[cfg(target_pointer_width = "16")] {
        impl_pointer_sized!(isize => i16, usize => u16);
    } else {
        compile_error!("unsupported target_pointer_width");
    }
}
