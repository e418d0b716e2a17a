use core::fmt::Debug;

/// A trait for raw index types used in arenas.
///
/// An [`Id`] represents both the internal index in an arena and a type-level
/// distinction, so indices from different arenas cannot be mixed up even when
/// they share the same underlying numeric type.
pub trait Id: Copy + Ord + Debug {
    /// The maximum value (as a usize) this id type can represent.
    const MAX: usize;

    /// Converts a `usize` value to this id type.
    fn from_usize(idx: usize) -> Self;

    /// Converts this id type into a `usize`.
    fn into_usize(self) -> usize;
}

macro_rules! impl_id_for_nums {
    ($($ty:ty),*) => {$(
        impl Id for $ty {
            const MAX: usize = <$ty>::MAX as usize;

            #[inline]
            fn from_usize(idx: usize) -> Self {
                assert!(idx <= <Self as Id>::MAX);
                idx as $ty
            }

            #[inline]
            fn into_usize(self) -> usize {
                self as usize
            }
        }
    )*};
}

impl_id_for_nums!(u8, u16, u32, u64, usize);
