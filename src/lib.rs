//! # QuadVec
//!
//! A contiguous, resizable-array container implemented from raw backing
//! storage — its own allocation, growth, and element lifetime management —
//! rather than a wrapper around `std::vec::Vec`.
//!
//! ## Key Features
//!
//! * **×4 geometric growth:** a full buffer quadruples its capacity
//!   ([`GROWTH_FACTOR`]), and sized construction / bulk insertion pre-size to
//!   four times the resulting length. Fewer reallocations on tight append
//!   loops, at the cost of slack memory; both knobs are named policy
//!   constants.
//! * **Eager default capacity:** a fresh vector owns [`DEFAULT_CAPACITY`]
//!   slots, so the append hot path never branches on a missing buffer.
//! * **Single generic lifecycle path:** teardown is dispatched on
//!   `core::mem::needs_drop::<T>()` — trivial element types get pure
//!   bookkeeping for `pop`/`erase`/`clear`, resource-owning types get exactly
//!   one destructor call per removed element, on every exit path including
//!   mid-mutation panics.
//! * **Checked cursors:** positions are generation-stamped [`Cursor`]s.  Any
//!   structural mutation invalidates outstanding cursors; stale use reports
//!   [`Error::StaleCursor`] instead of reading a moved buffer.
//! * **Slice interop:** `Deref<Target = [T]>` provides the whole slice API
//!   (forward/reverse iteration, sorting, searching); comparison operators
//!   are lexicographic with length tiebreak.
//!
//! ## Examples
//!
//! ```rust
//! use quadvec::{quadvec, QuadVec};
//!
//! let mut v = quadvec![1, 2, 3];
//! v.push(4);
//! assert_eq!(v.as_slice(), &[1, 2, 3, 4]);
//! assert!(v < quadvec![1, 2, 4]);
//!
//! // Capacity quadruples: 4 slots from construction, 16 after growth.
//! let mut w: QuadVec<u8> = QuadVec::new();
//! assert_eq!(w.capacity(), 4);
//! for b in 0..5 {
//!     w.push(b);
//! }
//! assert_eq!(w.capacity(), 16);
//! ```
//!
//! Cursor-addressed editing:
//!
//! ```rust
//! use quadvec::quadvec;
//!
//! let mut v = quadvec![10, 30];
//! let at = v.insert_at(v.cursor(1), 20).unwrap();
//! assert_eq!(v.resolve(at), Ok(&20));
//!
//! let stale = v.begin();
//! v.push(40); // structural mutation
//! assert!(v.resolve(stale).is_err());
//! ```

// --- Module Declarations ---

pub mod cursor;
pub mod error;
mod raw;
pub mod vec;

#[cfg(feature = "serde")]
mod serde;

// --- Re-exports ---

pub use cursor::Cursor;
pub use error::Error;
pub use raw::{DEFAULT_CAPACITY, GROWTH_FACTOR};
pub use vec::{IntoIter, QuadVec};

/// Creates a [`QuadVec`] from a literal element list, mirroring `vec!`.
///
/// ```rust
/// use quadvec::quadvec;
///
/// let v = quadvec![10, 11, 12];
/// assert_eq!(v.as_slice(), &[10, 11, 12]);
/// let filled = quadvec![0u8; 6];
/// assert_eq!(filled.len(), 6);
/// ```
#[macro_export]
macro_rules! quadvec {
    () => {
        $crate::QuadVec::new()
    };
    ($elem:expr; $n:expr) => {
        $crate::QuadVec::from_elem($n, $elem)
    };
    ($($x:expr),+ $(,)?) => {
        $crate::QuadVec::from([$($x),+])
    };
}

#[cfg(test)]
mod tests {
    use crate::QuadVec;

    #[test]
    fn test_macro_forms() {
        let empty: QuadVec<i32> = quadvec![];
        assert!(empty.is_empty());
        let filled = quadvec![7; 3];
        assert_eq!(filled.as_slice(), &[7, 7, 7]);
        let listed = quadvec![1, 2, 3,];
        assert_eq!(listed.as_slice(), &[1, 2, 3]);
    }
}
