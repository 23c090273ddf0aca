//! Fluent switch/case/break/default chains over arbitrary values.
//!
//! A chain tests a subject against predicates (`case`) and runs actions
//! (`then`) for the groups that match, with `break_on_match` and `default`
//! behaving like their counterparts in an imperative switch statement:
//!
//! ```rust
//! use casechain::switch;
//!
//! let mut value = 5;
//! switch(value)
//!     .case(|v| *v > 3)
//!     .then(|_| value += 1)
//!     .case(|v| *v < 7)
//!     .case(|v| *v < 10)
//!     .then(|_| value += 1)
//!     .break_on_match()
//!     .case(|v| *v > 1)
//!     .then(|_| value += 1);
//!
//! assert_eq!(value, 7);
//! ```
//!
//! [`SwitchExt`] starts the same chain from the subject, as in
//! `value.switch()` or `value.case(..)`.
//!
//! Predicates and actions that can fail go through [`Switch::try_case`],
//! [`Switch::try_then`] and [`Switch::try_default`]. Their errors are handed
//! back unchanged and end the chain at the failing step.
//!
//! # Logging
//!
//! The builder emits [`tracing`] events at `trace` level for each state
//! transition. Events carry the match flag only, never the subject. The
//! crate never installs a subscriber.

pub mod chain;
pub mod ext;

pub use chain::{Switch, switch};
pub use ext::SwitchExt;
