//! Error types for [`QuadVec`](crate::QuadVec).
//!
//! All checked entry points report failures through [`Error`]; the variants
//! carry enough context (requested index, live length, generation stamps) to
//! diagnose a failure without a debugger attached.

use std::error::Error as StdError;
use std::fmt;

/// Errors returned by checked operations on [`QuadVec`](crate::QuadVec).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[non_exhaustive]
pub enum Error {
    /// A checked access (`at`, cursor deref/advance) was beyond `[0, len)`.
    OutOfRange {
        /// The requested position.
        index: usize,
        /// The logical length at the time of the access.
        len: usize,
    },
    /// `front`, `back`, or a sibling accessor was called on an empty vector.
    Empty {
        /// The operation that was attempted.
        op: &'static str,
    },
    /// The global allocator could not satisfy a request for `elems` slots,
    /// or the request's byte size does not fit the platform's address space.
    AllocFailed {
        /// Number of element slots requested.
        elems: usize,
    },
    /// A cursor was used after a structural mutation of its vector.
    StaleCursor {
        /// The generation the cursor was minted at.
        cursor_stamp: u64,
        /// The vector's current generation.
        vec_stamp: u64,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfRange { index, len } => {
                write!(f, "index {index} out of range for length {len}")
            }
            Self::Empty { op } => write!(f, "{op} called on an empty vector"),
            Self::AllocFailed { elems } => {
                write!(f, "allocation of {elems} element slots failed")
            }
            Self::StaleCursor {
                cursor_stamp,
                vec_stamp,
            } => {
                write!(
                    f,
                    "stale cursor: minted at generation {cursor_stamp}, vector is at {vec_stamp}"
                )
            }
        }
    }
}

impl StdError for Error {}

#[cfg(test)]
mod tests {
    use super::Error;
    use std::error::Error as StdError;

    fn takes_error(e: &dyn StdError) -> String {
        e.to_string()
    }

    #[test]
    fn test_error_is_std_error() {
        let s = takes_error(&Error::OutOfRange { index: 9, len: 3 });
        assert!(s.contains("out of range"));
        assert!(s.contains('9'));
    }

    #[test]
    fn test_error_display_carries_context() {
        let s = Error::StaleCursor {
            cursor_stamp: 2,
            vec_stamp: 5,
        }
        .to_string();
        assert!(s.contains("generation 2"));
        assert!(s.contains("at 5"));
        assert_eq!(
            Error::Empty { op: "back" }.to_string(),
            "back called on an empty vector"
        );
    }
}
