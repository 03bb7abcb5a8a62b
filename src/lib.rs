//! # `wordcell` - Word-Sized Atomic Primitives
//!
//! A portable atomic-operations primitive layer: a fixed set of word-level
//! atomic operations (compare-and-swap, swap, load, relaxed load, store,
//! fetch-and-add) exposed uniformly for every integer-like type whose size
//! does not exceed a machine word. Higher-level lock-free counters,
//! reference counts, and flags are built on top of it; this crate owns no
//! state of its own and performs no I/O.
//!
//! ## Guarantees
//!
//! - **Lock-free**: every operation is a single hardware atomic instruction
//!   (or a hardware-bounded LL/SC sequence); no mutexes, no spin loops, no
//!   blocking. Safe to use where a lock never would be.
//! - **No torn access**: each element type maps to the native atomic of
//!   exactly its own width, so every read observes a value some single prior
//!   operation wrote in full, and sub-word cells never touch adjacent bytes.
//! - **Fixed ordering contract**: `load`/`store`/`swap`/`compare_and_swap`/
//!   `fetch_add` carry full bidirectional fence semantics and form a single
//!   total order per cell; `load_relaxed` guarantees indivisibility only.
//!   There is deliberately no per-call ordering parameter.
//! - **Oversized types refused at build time**: a type wider than the
//!   machine word has no [`Word`] implementation, so instantiating
//!   [`Atomic`] over it is a compile error rather than a silent truncation.
//!
//! ## Example
//!
//! ```rust
//! use wordcell::Atomic;
//!
//! let hits = Atomic::new(0u32);
//! assert_eq!(hits.fetch_add(1), 0);
//! assert_eq!(hits.load(), 1);
//!
//! // compare_and_swap keeps a narrow contract: it returns the winning
//! // argument (`new` on success, the caller's `expected` on failure),
//! // never the observed cell contents.
//! assert_eq!(hits.compare_and_swap(1, 5), 5);
//! assert_eq!(hits.compare_and_swap(1, 9), 1);
//! assert_eq!(hits.load(), 5);
//! ```

#![warn(missing_docs, clippy::all, clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

pub mod atomic;

pub use atomic::{Atomic, NumericWord, Word};

// Compile-time layout claims.
const _: () = {
    use core::mem;
    use core::sync::atomic::{AtomicBool, AtomicU32, AtomicUsize};

    // A cell is exactly its element's native atomic: same footprint, same
    // alignment, nothing extra.
    assert!(mem::size_of::<Atomic<bool>>() == mem::size_of::<AtomicBool>());
    assert!(mem::size_of::<Atomic<u8>>() == 1);
    assert!(mem::size_of::<Atomic<u32>>() == mem::size_of::<AtomicU32>());
    assert!(mem::size_of::<Atomic<usize>>() == mem::size_of::<AtomicUsize>());
    assert!(mem::align_of::<Atomic<u32>>() == mem::align_of::<AtomicU32>());
    assert!(mem::align_of::<Atomic<usize>>() == mem::align_of::<AtomicUsize>());
};
