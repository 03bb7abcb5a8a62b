//! Lock-free atomic operations over word-sized cells.
//!
//! [`Atomic`] wraps the native atomic of exactly its element type's width and
//! exposes a fixed operation set: fully-fenced `load`/`store`, full-barrier
//! `swap`/`compare_and_swap`/`fetch_add`, and an unfenced `load_relaxed`.
//! There is no caller-facing memory-ordering parameter; the two ordering
//! levels are part of the contract.
//!
//! Important:
//! - Every operation is total and lock-free; "CAS did not swap" is a normal
//!   outcome, not an error.
//! - All access to a cell goes through this operation set. Plain aliased
//!   reads or writes of the same memory are impossible in safe Rust, so no
//!   mixed-access caveat leaks to callers.

pub mod word;

pub use word::{NumericWord, Word};

use core::fmt;
use core::sync::atomic::{fence, Ordering};

/// A word-sized atomic memory cell.
///
/// `T` may be `bool` or any built-in integer type no wider than the machine
/// word (see [`Word`]); the cell occupies exactly `size_of::<T>()` bytes.
/// Shared references allow concurrent mutation from any number of threads
/// without locking.
#[repr(transparent)]
pub struct Atomic<T: Word> {
    inner: T::Native,
}

impl<T: Word> Atomic<T> {
    /// Creates a new cell holding `value`.
    #[inline(always)]
    pub fn new(value: T) -> Self {
        Self {
            inner: T::new_native(value),
        }
    }

    /// Consumes the cell and returns the contained value.
    #[inline(always)]
    pub fn into_inner(self) -> T {
        T::from_native(self.inner)
    }

    /// Returns a mutable reference to the contained value.
    ///
    /// Safe because exclusive access is proven by the `&mut` receiver; no
    /// atomic instruction is needed.
    #[inline(always)]
    pub fn get_mut(&mut self) -> &mut T {
        T::get_mut(&mut self.inner)
    }

    /// Atomically reads the cell, bracketed by full bidirectional fences.
    ///
    /// The fence before the read keeps later operations from being hoisted
    /// above it; the fence after keeps earlier operations from sinking below
    /// it. Stronger than an acquire load in both directions.
    #[inline(always)]
    pub fn load(&self) -> T {
        fence(Ordering::SeqCst);
        let value = T::load(&self.inner, Ordering::Relaxed);
        fence(Ordering::SeqCst);
        value
    }

    /// Atomically reads the cell with no ordering guarantee beyond the read
    /// itself being indivisible.
    ///
    /// No fence is issued. For callers that establish ordering elsewhere
    /// (single-writer protocols, statistics counters) and want to skip the
    /// fence cost.
    #[inline(always)]
    pub fn load_relaxed(&self) -> T {
        T::load(&self.inner, Ordering::Relaxed)
    }

    /// Atomically writes `value` into the cell, bracketed by full
    /// bidirectional fences symmetric to [`load`](Self::load).
    #[inline(always)]
    pub fn store(&self, value: T) {
        fence(Ordering::SeqCst);
        T::store(&self.inner, value, Ordering::Relaxed);
        fence(Ordering::SeqCst);
    }

    /// Atomically replaces the cell's contents with `value`, returning the
    /// value held immediately before the replacement. Full-barrier semantics.
    #[inline(always)]
    pub fn swap(&self, value: T) -> T {
        T::swap(&self.inner, value, Ordering::SeqCst)
    }

    /// Stores `new` if the cell currently holds `expected`, with full-barrier
    /// semantics on success.
    ///
    /// Returns `new` if the swap happened, otherwise the caller-supplied
    /// `expected` — never the observed cell contents. Under this narrow
    /// contract the return value alone cannot distinguish "swapped" from
    /// "failed while the cell happened to hold `expected`"; callers needing
    /// the observed prior value use
    /// [`compare_exchange`](Self::compare_exchange) instead.
    ///
    /// ```
    /// use wordcell::Atomic;
    ///
    /// let cell = Atomic::new(7u32);
    /// assert_eq!(cell.compare_and_swap(7, 8), 8); // swapped
    /// assert_eq!(cell.compare_and_swap(7, 9), 7); // cell holds 8, untouched
    /// assert_eq!(cell.load(), 8);
    /// ```
    #[inline(always)]
    pub fn compare_and_swap(&self, expected: T, new: T) -> T {
        match self.compare_exchange(expected, new) {
            Ok(_) => new,
            Err(_) => expected,
        }
    }

    /// Stores `new` if the cell currently holds `current`, returning the
    /// observed prior value: `Ok` on swap, `Err` otherwise.
    ///
    /// The conventional widened form of
    /// [`compare_and_swap`](Self::compare_and_swap); both carry the same
    /// full-barrier semantics on success.
    #[inline(always)]
    pub fn compare_exchange(&self, current: T, new: T) -> Result<T, T> {
        T::compare_exchange(&self.inner, current, new, Ordering::SeqCst, Ordering::SeqCst)
    }
}

impl<T: NumericWord> Atomic<T> {
    /// Atomically adds `increment` to the cell, returning the value held
    /// immediately before the addition. Full-barrier semantics.
    ///
    /// Arithmetic wraps around on overflow, matching the native integer
    /// behavior.
    #[inline(always)]
    pub fn fetch_add(&self, increment: T) -> T {
        T::fetch_add(&self.inner, increment, Ordering::SeqCst)
    }
}

// The cell mutates through `&self` by design; `T: Send` is what makes that
// sound to share across threads.
unsafe impl<T: Word + Send> Send for Atomic<T> {}
unsafe impl<T: Word + Send> Sync for Atomic<T> {}

impl<T: Word + Default> Default for Atomic<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T: Word> From<T> for Atomic<T> {
    fn from(value: T) -> Self {
        Self::new(value)
    }
}

impl<T: Word + fmt::Debug> fmt::Debug for Atomic<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Atomic").field(&self.load_relaxed()).finish()
    }
}

#[cfg(feature = "serde")]
impl<T: Word + serde::Serialize> serde::Serialize for Atomic<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.load().serialize(serializer)
    }
}

#[cfg(feature = "serde")]
impl<'de, T: Word + serde::Deserialize<'de>> serde::Deserialize<'de> for Atomic<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        T::deserialize(deserializer).map(Self::new)
    }
}
