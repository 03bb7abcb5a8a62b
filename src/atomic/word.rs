//! Width dispatch for atomic element types.
//!
//! Each supported element type maps, at compile time, to the native atomic of
//! exactly its own size. Sub-word types therefore never share an instruction
//! with neighboring bytes, and types wider than the machine word simply have
//! no mapping.

use core::sync::atomic::{
    AtomicBool, AtomicI16, AtomicI32, AtomicI8, AtomicIsize, AtomicU16, AtomicU32, AtomicU8,
    AtomicUsize, Ordering,
};

#[cfg(target_pointer_width = "64")]
use core::sync::atomic::{AtomicI64, AtomicU64};

mod private {
    /// Closes [`Word`](super::Word) to downstream implementations.
    pub trait Sealed {}
}

/// Element types that fit the native machine word.
///
/// Sealed: implemented only for `bool` and the built-in integer types whose
/// size does not exceed `usize`. On 32-bit targets that covers the 8-, 16-
/// and 32-bit types; on 64-bit targets the 64-bit types as well. A type with
/// no implementation cannot instantiate [`Atomic`](super::Atomic), so an
/// oversized element is refused before the program runs:
///
/// ```compile_fail
/// // `u128` is wider than the machine word and implements no `Word`.
/// let cell = wordcell::Atomic::new(0u128);
/// ```
pub trait Word: Copy + Eq + private::Sealed {
    /// The native atomic cell of exactly this type's width.
    #[doc(hidden)]
    type Native;

    #[doc(hidden)]
    fn new_native(value: Self) -> Self::Native;

    #[doc(hidden)]
    fn from_native(native: Self::Native) -> Self;

    #[doc(hidden)]
    fn get_mut(native: &mut Self::Native) -> &mut Self;

    #[doc(hidden)]
    fn load(native: &Self::Native, order: Ordering) -> Self;

    #[doc(hidden)]
    fn store(native: &Self::Native, value: Self, order: Ordering);

    #[doc(hidden)]
    fn swap(native: &Self::Native, value: Self, order: Ordering) -> Self;

    #[doc(hidden)]
    fn compare_exchange(
        native: &Self::Native,
        current: Self,
        new: Self,
        success: Ordering,
        failure: Ordering,
    ) -> Result<Self, Self>;
}

/// Word types with atomic wrapping addition.
///
/// Every [`Word`] except `bool`. Splitting the capability out keeps
/// `fetch_add` off cells whose element type has no arithmetic.
pub trait NumericWord: Word {
    #[doc(hidden)]
    fn fetch_add(native: &Self::Native, value: Self, order: Ordering) -> Self;
}

macro_rules! impl_word {
    ($(#[$cfg:meta])? $ty:ty => $native:ty) => {
        $(#[$cfg])?
        const _: () = assert!(core::mem::size_of::<$ty>() <= core::mem::size_of::<usize>());

        $(#[$cfg])?
        impl private::Sealed for $ty {}

        $(#[$cfg])?
        impl Word for $ty {
            type Native = $native;

            #[inline(always)]
            fn new_native(value: Self) -> Self::Native {
                <$native>::new(value)
            }

            #[inline(always)]
            fn from_native(native: Self::Native) -> Self {
                native.into_inner()
            }

            #[inline(always)]
            fn get_mut(native: &mut Self::Native) -> &mut Self {
                native.get_mut()
            }

            #[inline(always)]
            fn load(native: &Self::Native, order: Ordering) -> Self {
                native.load(order)
            }

            #[inline(always)]
            fn store(native: &Self::Native, value: Self, order: Ordering) {
                native.store(value, order);
            }

            #[inline(always)]
            fn swap(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.swap(value, order)
            }

            #[inline(always)]
            fn compare_exchange(
                native: &Self::Native,
                current: Self,
                new: Self,
                success: Ordering,
                failure: Ordering,
            ) -> Result<Self, Self> {
                native.compare_exchange(current, new, success, failure)
            }
        }
    };
}

macro_rules! impl_numeric_word {
    ($(#[$cfg:meta])? $ty:ty => $native:ty) => {
        impl_word!($(#[$cfg])? $ty => $native);

        $(#[$cfg])?
        impl NumericWord for $ty {
            #[inline(always)]
            fn fetch_add(native: &Self::Native, value: Self, order: Ordering) -> Self {
                native.fetch_add(value, order)
            }
        }
    };
}

impl_word!(bool => AtomicBool);

impl_numeric_word!(u8 => AtomicU8);
impl_numeric_word!(i8 => AtomicI8);
impl_numeric_word!(u16 => AtomicU16);
impl_numeric_word!(i16 => AtomicI16);
impl_numeric_word!(u32 => AtomicU32);
impl_numeric_word!(i32 => AtomicI32);
impl_numeric_word!(usize => AtomicUsize);
impl_numeric_word!(isize => AtomicIsize);

impl_numeric_word!(#[cfg(target_pointer_width = "64")] u64 => AtomicU64);
impl_numeric_word!(#[cfg(target_pointer_width = "64")] i64 => AtomicI64);
