use core::num::{
    NonZeroI16, NonZeroI32, NonZeroI64, NonZeroI8, NonZeroIsize, NonZeroU16, NonZeroU32,
    NonZeroU64, NonZeroU8, NonZeroUsize, Wrapping,
};

use crate::filter_type::FilterType;

macro_rules! impl_nonzero {
    ($($t:ty => $inner:ty),* $(,)?) => {$(
        impl FilterType for $t {
            type Shim = <$inner as FilterType>::Shim;

            #[inline]
            fn filter_type(self) -> Self::Shim {
                self.get().filter_type()
            }
        }
    )*};
}

impl_nonzero!(
    NonZeroI8 => i8,
    NonZeroI16 => i16,
    NonZeroI32 => i32,
    NonZeroI64 => i64,
    NonZeroIsize => isize,
    NonZeroU8 => u8,
    NonZeroU16 => u16,
    NonZeroU32 => u32,
    NonZeroU64 => u64,
    NonZeroUsize => usize,
);

impl<T: FilterType> FilterType for Wrapping<T> {
    type Shim = T::Shim;

    #[inline]
    fn filter_type(self) -> Self::Shim {
        self.0.filter_type()
    }
}

impl<T: FilterType + Copy> FilterType for &T {
    type Shim = T::Shim;

    #[inline]
    fn filter_type(self) -> Self::Shim {
        (*self).filter_type()
    }
}
