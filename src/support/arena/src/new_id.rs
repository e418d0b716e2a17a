/// Declares a new raw id type for use with [`Arena`](crate::Arena).
///
/// # Examples
///
/// ```
/// use arena::{Arena, Idx, new_id};
///
/// new_id!(ThingKey, u32);
///
/// let mut arena: Arena<ThingKey, &str> = Arena::new();
/// let idx: Idx<ThingKey, &str> = arena.alloc("thing");
/// assert_eq!(arena[idx], "thing");
/// ```
#[macro_export]
macro_rules! new_id {
    ($name: ident, $ty: ty) => {
        #[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
        pub struct $name($ty);

        impl ::arena::Id for $name {
            const MAX: usize = <$ty>::MAX as usize;

            #[inline]
            fn from_usize(idx: usize) -> Self {
                Self(idx as $ty)
            }

            #[inline]
            fn into_usize(self) -> usize {
                self.0 as usize
            }
        }
    };
}
