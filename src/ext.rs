//! Method-call entry points, so a chain can start from the subject itself.
//!
//! ```rust
//! use casechain::SwitchExt;
//!
//! let mut hits = 0;
//! let value: i32 = 4;
//! value
//!     .case(|v| *v % 2 == 0)
//!     .then(|_| hits += 1)
//!     .case(|v| *v > 10)
//!     .then(|_| hits += 10);
//!
//! assert_eq!(hits, 1);
//! ```

use crate::chain::Switch;

/// Starts a [`Switch`] from any value.
///
/// Implemented for every sized type. Inherent methods of [`Switch`] take
/// precedence, so `case` on a running chain is never shadowed.
pub trait SwitchExt: Sized {
    /// `value.switch()` is the same as `switch(value)`.
    fn switch(self) -> Switch<Self> {
        Switch::new(self)
    }

    /// Starts a chain and tests its first case in one call.
    fn case<P>(self, predicate: P) -> Switch<Self>
    where
        P: FnOnce(&Self) -> bool,
    {
        Switch::new(self).case(predicate)
    }
}

impl<T> SwitchExt for T {}
